//! Configuration file support for vogix-palette
//!
//! Handles `.vogix-palette.toml` configuration file loading and saving.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default configuration file name
const CONFIG_FILE_NAME: &str = ".vogix-palette.toml";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the SVG theme previews
    #[serde(default = "default_sources_dir")]
    pub sources_dir: PathBuf,

    /// Directory receiving the generated Nix theme files
    #[serde(default = "default_themes_dir")]
    pub themes_dir: PathBuf,

    /// File-name prefix of SVG previews, stripped to get the theme name
    #[serde(default = "default_source_prefix")]
    pub source_prefix: String,

    /// Extension of SVG previews (without the dot)
    #[serde(default = "default_source_extension")]
    pub source_extension: String,

    /// Extension of generated theme files (without the dot)
    #[serde(default = "default_theme_extension")]
    pub theme_extension: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sources_dir: default_sources_dir(),
            themes_dir: default_themes_dir(),
            source_prefix: default_source_prefix(),
            source_extension: default_source_extension(),
            theme_extension: default_theme_extension(),
        }
    }
}

// Default value functions
fn default_sources_dir() -> PathBuf {
    PathBuf::from("assets")
}

fn default_themes_dir() -> PathBuf {
    PathBuf::from("themes")
}

fn default_source_prefix() -> String {
    crate::extract::DEFAULT_SOURCE_PREFIX.to_string()
}

fn default_source_extension() -> String {
    "svg".to_string()
}

fn default_theme_extension() -> String {
    "nix".to_string()
}

impl Config {
    /// Load configuration file (returns default if not found)
    ///
    /// Searches for `.vogix-palette.toml` in the current directory.
    pub fn load() -> Result<Self> {
        let config_path = PathBuf::from(CONFIG_FILE_NAME);

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from specified path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse configuration file: {}", path.display()))?;

        Ok(config)
    }

    /// Save configuration to specified path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .context("Failed to serialize configuration")?;

        fs::write(path, content)
            .with_context(|| format!("Failed to write configuration file: {}", path.display()))?;

        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default(path: &Path) -> Result<()> {
        let config = Config::default();
        config.save_to(path)
    }

    /// Path of the configuration file in the current directory
    pub fn default_path() -> PathBuf {
        PathBuf::from(CONFIG_FILE_NAME)
    }
}
