//! Configuration management for tubegrade

use crate::error::{Result, TubegradeError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Catalog settings
    pub catalog: CatalogConfig,
    /// Output settings
    pub output: OutputConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog: CatalogConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(TubegradeError::FileNotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| TubegradeError::Toml(e.to_string()))
    }

    /// Load configuration from a TOML file, falling back to defaults
    /// when the file does not exist
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Serialize configuration to a TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| TubegradeError::Toml(e.to_string()))
    }

    /// Save configuration to a TOML file
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_toml()?)?;
        Ok(())
    }
}

/// Catalog-related configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Default catalog file used when none is given on the command line
    pub default_path: PathBuf,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            default_path: PathBuf::from("catalog.json"),
        }
    }
}

/// Output-related configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default report format (text/markdown/json)
    pub default_format: String,
    /// Colored terminal output
    pub color: bool,
    /// Include per-comment sentiment breakdown in reports
    pub include_breakdown: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            color: true,
            include_breakdown: false,
        }
    }
}
