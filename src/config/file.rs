// src/config/file.rs
// File-based configuration from ~/.config/hero-carousel/config.toml

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::error::{CarouselError, Result};

/// Top-level config structure
#[derive(Debug, Deserialize, Default)]
pub struct CarouselFileConfig {
    #[serde(default)]
    pub carousel: CarouselSection,
}

/// `[carousel]` section
#[derive(Debug, Deserialize, Default)]
pub struct CarouselSection {
    pub auto_advance_ms: Option<u64>,
    pub manual_pause_ms: Option<u64>,
    pub data_url: Option<String>,
    pub base_url: Option<String>,
}

impl CarouselFileConfig {
    /// Load config from the default location, or defaults if absent/invalid
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_or_default(&path),
            None => Self::default(),
        }
    }

    /// Load from `path`, logging and falling back to defaults on any problem
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load_from(path) {
            Ok(config) => {
                debug!(path = %path.display(), "Loaded config from file");
                config
            }
            Err(CarouselError::Io(_)) => {
                debug!(path = %path.display(), "Config file not found, using defaults");
                Self::default()
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Failed to parse config file");
                Self::default()
            }
        }
    }

    /// Strict load; errors are returned
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents).map_err(|e| CarouselError::Config(e.to_string()))
    }

    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("hero-carousel").join("config.toml"))
    }
}
