//! Startup options for a game loop

use crate::error::{MosaicError, Result};
use serde::{Deserialize, Serialize};

const MAX_RESOLUTION: u32 = 1024;
const MAX_FRAMES_PER_SECOND: u32 = 1000;

/// Grid size, tick rate and decoration toggles.
///
/// Unknown keys are ignored so the same file can carry game content tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoopConfig {
    /// Tiles per side of the square grid
    #[serde(default = "default_resolution")]
    pub resolution: u32,
    /// Tick rate of the loop
    #[serde(default = "default_frames_per_second")]
    pub frames_per_second: u32,
    /// Draw a line at every tile edge on clear
    #[serde(default = "default_true", rename = "grid")]
    pub is_grid_on: bool,
    /// Draw a thick border around the grid on clear
    #[serde(default = "default_true", rename = "frame")]
    pub is_frame_on: bool,
}

fn default_resolution() -> u32 {
    60
}

fn default_frames_per_second() -> u32 {
    60
}

fn default_true() -> bool {
    true
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            resolution: default_resolution(),
            frames_per_second: default_frames_per_second(),
            is_grid_on: true,
            is_frame_on: true,
        }
    }
}

impl LoopConfig {
    /// Parse from TOML text; missing keys take their defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: LoopConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the loop cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.resolution == 0 || self.resolution > MAX_RESOLUTION {
            return Err(MosaicError::InvalidConfig(format!(
                "resolution must be between 1 and {}, got {}",
                MAX_RESOLUTION, self.resolution
            )));
        }
        if self.frames_per_second == 0 || self.frames_per_second > MAX_FRAMES_PER_SECOND {
            return Err(MosaicError::InvalidConfig(format!(
                "frames_per_second must be between 1 and {}, got {}",
                MAX_FRAMES_PER_SECOND, self.frames_per_second
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LoopConfig::default();
        assert_eq!(config.resolution, 60);
        assert_eq!(config.frames_per_second, 60);
        assert!(config.is_grid_on);
        assert!(config.is_frame_on);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_partial() {
        let config = LoopConfig::from_toml_str("resolution = 40\ngrid = false\n").unwrap();
        assert_eq!(config.resolution, 40);
        assert_eq!(config.frames_per_second, 60);
        assert!(!config.is_grid_on);
        assert!(config.is_frame_on);
    }

    #[test]
    fn test_unknown_tables_ignored() {
        let config =
            LoopConfig::from_toml_str("frames_per_second = 30\n\n[content]\nseed = 7\n").unwrap();
        assert_eq!(config.frames_per_second, 30);
    }

    #[test]
    fn test_rejects_zero_resolution() {
        let err = LoopConfig::from_toml_str("resolution = 0").unwrap_err();
        assert!(matches!(err, MosaicError::InvalidConfig(_)));
    }

    #[test]
    fn test_rejects_zero_fps() {
        let config = LoopConfig {
            frames_per_second: 0,
            ..LoopConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_negative_resolution() {
        let err = LoopConfig::from_toml_str("resolution = -5").unwrap_err();
        assert!(matches!(err, MosaicError::TomlParseError(_)));
    }
}
