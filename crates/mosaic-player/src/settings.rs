//! Config file loading with command-line overrides

use mosaic_core::{LoopConfig, Result};
use mosaic_game::FallerContent;
use std::path::Path;

/// Values given on the command line; each one replaces the file's
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub resolution: Option<u32>,
    pub frames_per_second: Option<u32>,
    pub grid: bool,
    pub no_frame: bool,
    pub seed: Option<u64>,
}

/// Everything needed to start a game
#[derive(Debug, Clone)]
pub struct Settings {
    pub config: LoopConfig,
    pub content: FallerContent,
}

impl Default for Settings {
    /// The built-in game runs without grid lines
    fn default() -> Self {
        Self {
            config: LoopConfig {
                is_grid_on: false,
                ..LoopConfig::default()
            },
            content: FallerContent::default(),
        }
    }
}

impl Settings {
    /// Parse a config document: loop keys at the top level, game
    /// content under `[content]`
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(Self {
            config: LoopConfig::from_toml_str(content)?,
            content: FallerContent::from_toml_str(content)?,
        })
    }

    pub fn apply(&mut self, overrides: &Overrides) {
        if let Some(resolution) = overrides.resolution {
            self.config.resolution = resolution;
        }
        if let Some(fps) = overrides.frames_per_second {
            self.config.frames_per_second = fps;
        }
        if overrides.grid {
            self.config.is_grid_on = true;
        }
        if overrides.no_frame {
            self.config.is_frame_on = false;
        }
        if overrides.seed.is_some() {
            self.content.seed = overrides.seed;
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.config.validate()?;
        self.content.validate()
    }
}

/// Load settings from `path` (or the built-in defaults) and apply overrides
pub fn load_settings(path: Option<&Path>, overrides: &Overrides) -> Result<Settings> {
    let mut settings = match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)?;
            Settings::from_toml_str(&text)?
        }
        None => Settings::default(),
    };
    settings.apply(overrides);
    settings.validate()?;
    Ok(settings)
}
