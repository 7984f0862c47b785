//! Error types for Mural.

use thiserror::Error;

/// Primary error type for all Mural operations.
#[derive(Error, Debug)]
pub enum MuralError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Resolution error: {0}")]
    Resolution(String),

    #[error("Failed to set wallpaper: {0}")]
    SetWallpaper(String),

    #[error("Unsupported platform: {0}")]
    UnsupportedPlatform(String),
}

impl MuralError {
    /// Create a resolution error.
    pub fn resolution(message: impl Into<String>) -> Self {
        Self::Resolution(message.into())
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, MuralError>;
