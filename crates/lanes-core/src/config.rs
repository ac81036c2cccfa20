//! Rendering configuration loaded from `lanes.toml`

use crate::error::{LanesError, Result};
use crate::geometry::{GridConfig, Style};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default config file name looked up next to the commit file.
pub const CONFIG_FILE: &str = "lanes.toml";

/// Grid and style settings for the geometry layer.
///
/// Every key is optional; missing keys fall back to [`GridConfig::default`]
/// and [`Style::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LanesConfig {
    pub grid: GridConfig,
    pub style: Style,
}

impl LanesConfig {
    /// Load and validate a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| LanesError::read_file(path, e))?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse and validate config text.
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let config: LanesConfig = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Load `path` if it exists, otherwise use the defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Reject settings the geometry layer cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.style.palette.is_empty() {
            return Err(LanesError::EmptyPalette);
        }
        let smoothness = self.style.curve_smoothness;
        if !(0.0..=1.0).contains(&smoothness) {
            return Err(LanesError::InvalidSmoothness(smoothness));
        }
        if self.grid.cell_width <= 0.0 || self.grid.cell_height <= 0.0 {
            return Err(LanesError::InvalidCellSize {
                width: self.grid.cell_width,
                height: self.grid.cell_height,
            });
        }
        Ok(())
    }
}
