//! Error types for Mosaic

use thiserror::Error;

/// The main error type for Mosaic operations
#[derive(Debug, Error)]
pub enum MosaicError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid color: {0}")]
    InvalidColor(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParseError(String),

    #[error("Render error: {0}")]
    RenderError(String),
}

/// Result type alias for Mosaic operations
pub type Result<T> = std::result::Result<T, MosaicError>;

impl From<toml::de::Error> for MosaicError {
    fn from(err: toml::de::Error) -> Self {
        MosaicError::TomlParseError(err.to_string())
    }
}
