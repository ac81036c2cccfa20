//! Error types for loading commits and configuration

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised at the file boundary. Layout itself never fails.
#[derive(Debug, Error)]
pub enum LanesError {
    #[error("failed to read file '{path}': {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse commits: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// The style has nothing to pick colors from.
    #[error("style palette must contain at least one color")]
    EmptyPalette,

    #[error("curve smoothness must be between 0 and 1, got {0}")]
    InvalidSmoothness(f32),

    #[error("grid cells must have a positive size, got {width}x{height}")]
    InvalidCellSize { width: f32, height: f32 },
}

impl LanesError {
    /// Create a read file error.
    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LanesError::ReadFile {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, LanesError>;
