//! Game content: palette, sizes and spawn tables

use mosaic_core::{Color, MosaicError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Everything about the game that is data rather than behavior.
///
/// Loaded from the `[content]` table of the config file; every key has a
/// default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FallerContent {
    /// Main accent, used for the score box and text on light boxes
    pub primary: Color,
    /// Light background for the title button and the game-over message
    pub light: Color,
    /// Text color of fallers, shown as their fill while hovered
    pub faller_text: Color,
    /// Fill colors a faller is drawn from
    pub colors: Vec<Color>,
    /// Side lengths in tiles a faller is drawn from
    pub sizes: Vec<u32>,
    /// Replacement counts drawn uniformly when a faller is clicked;
    /// repeat a value to weight it
    pub offspring: Vec<u32>,
    /// Upper bound (exclusive) of a new faller's speed, tiles per tick
    pub max_speed: f64,
    /// Upper bound (exclusive) of a new faller's acceleration, tiles per tick per second
    pub max_acceleration: f64,
    /// How long the game-over message shows before the next game
    pub game_over_seconds: f64,
    /// Fixed RNG seed; random when absent
    pub seed: Option<u64>,
}

impl Default for FallerContent {
    fn default() -> Self {
        let colors = [
            0xF44336, 0xFFEBEE, 0xFFCDD2, 0xEF9A9A, 0xE57373, 0xEF5350, 0xF44336, 0xE53935,
            0xD32F2F, 0xC62828, 0xB71C1C, 0xFF8A80, 0xFF5252, 0xFF1744, 0xD50000,
        ];
        Self {
            primary: Color::from_hex(0xF44336),
            light: Color::from_hex(0xFFEBEE),
            faller_text: Color::from_hex(0x2196F3),
            colors: colors.iter().map(|&hex| Color::from_hex(hex)).collect(),
            sizes: (3..=10).collect(),
            offspring: vec![1, 1, 1, 1, 1, 1, 1, 1, 2],
            max_speed: 0.1,
            max_acceleration: 0.1,
            game_over_seconds: 1.0,
            seed: None,
        }
    }
}

/// Wrapper so the content can live under `[content]` in a shared file
#[derive(Deserialize)]
struct ContentFile {
    #[serde(default)]
    content: FallerContent,
}

impl FallerContent {
    /// Parse the `[content]` table of a TOML document; other keys are ignored
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: ContentFile = toml::from_str(content)?;
        file.content.validate()?;
        Ok(file.content)
    }

    /// Largest faller side length
    pub fn max_size(&self) -> u32 {
        self.sizes.iter().copied().max().unwrap_or(1)
    }

    /// Game-over lifetime, rounded to whole milliseconds
    pub fn game_over_lifetime(&self) -> Duration {
        Duration::from_millis((self.game_over_seconds * 1000.0).round() as u64)
    }

    pub fn validate(&self) -> Result<()> {
        if self.colors.is_empty() {
            return Err(MosaicError::InvalidConfig("content.colors is empty".into()));
        }
        if self.sizes.is_empty() || self.sizes.contains(&0) {
            return Err(MosaicError::InvalidConfig(
                "content.sizes must be non-empty and positive".into(),
            ));
        }
        if self.offspring.is_empty() {
            return Err(MosaicError::InvalidConfig("content.offspring is empty".into()));
        }
        if !(self.max_speed >= 0.0 && self.max_acceleration >= 0.0) {
            return Err(MosaicError::InvalidConfig(
                "content.max_speed and content.max_acceleration must be non-negative".into(),
            ));
        }
        if !(self.game_over_seconds >= 0.0 && self.game_over_seconds.is_finite()) {
            return Err(MosaicError::InvalidConfig(format!(
                "content.game_over_seconds must be a non-negative number, got {}",
                self.game_over_seconds
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let content = FallerContent::default();
        assert!(content.validate().is_ok());
        assert_eq!(content.max_size(), 10);
        assert_eq!(content.colors.len(), 15);
        assert_eq!(content.game_over_lifetime(), Duration::from_secs(1));
    }

    #[test]
    fn test_parse_content_table() {
        let content = FallerContent::from_toml_str(
            r##"
resolution = 60

[content]
colors = ["#000000", "#FFFFFF"]
offspring = [0, 3]
seed = 42
"##,
        )
        .unwrap();
        assert_eq!(content.colors, vec![Color::BLACK, Color::WHITE]);
        assert_eq!(content.offspring, vec![0, 3]);
        assert_eq!(content.seed, Some(42));
        assert_eq!(content.sizes, FallerContent::default().sizes);
    }

    #[test]
    fn test_missing_table_gives_defaults() {
        let content = FallerContent::from_toml_str("resolution = 60").unwrap();
        assert_eq!(content, FallerContent::default());
    }

    #[test]
    fn test_rejects_bad_color() {
        let err = FallerContent::from_toml_str("[content]\nprimary = \"red\"").unwrap_err();
        assert!(matches!(err, MosaicError::TomlParseError(_)));
    }

    #[test]
    fn test_rejects_empty_sizes() {
        let content = FallerContent {
            sizes: vec![],
            ..FallerContent::default()
        };
        assert!(content.validate().is_err());
    }
}
