//! TOML configuration for storage and rendering
//!
//! Nothing here touches the filesystem beyond reading the config file
//! itself; directories are created when a store is opened.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::renderer::{RenderConfig, ThemeSet};

/// Errors that can occur when loading or parsing configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Where presentation records live
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub dir: PathBuf,
    /// Create `dir` when opening the store
    pub create: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("presentations"),
            create: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Directory of `<theme>.css` files
    pub themes_dir: Option<PathBuf>,
    pub font_links: bool,
    pub strip_blank_lines: bool,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            themes_dir: None,
            font_links: true,
            strip_blank_lines: true,
        }
    }
}

impl RenderSettings {
    /// Build a [`RenderConfig`], loading themes when a directory is set
    pub fn to_render_config(&self) -> Result<RenderConfig, ConfigError> {
        let themes = match &self.themes_dir {
            Some(dir) => ThemeSet::from_dir(dir)?,
            None => ThemeSet::default(),
        };
        Ok(RenderConfig::new()
            .with_themes(themes)
            .with_font_links(self.font_links)
            .with_strip_blank_lines(self.strip_blank_lines))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub storage: StorageConfig,
    pub render: RenderSettings,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load configuration from a TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }
}
