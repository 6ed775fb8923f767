//! Configuration module
//!
//! Handles the settings file and platform directories.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default URL the font asset is fetched from.
pub const DEFAULT_FONT_URL: &str =
    "https://github.com/Chris-Gari/Global-Terrorism-EDA/raw/main/Roboto-Bold.ttf";

/// Logical name the font caches under.
pub const DEFAULT_FONT_NAME: &str = "Roboto-Bold";

/// Family name the backend selects the font by.
pub const DEFAULT_FONT_FAMILY: &str = "Roboto";

/// Get the application configuration directory
pub fn config_dir() -> Option<PathBuf> {
    ProjectDirs::from("com", "plotstyle", "Plotstyle")
        .map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the font cache directory
pub fn font_cache_dir() -> Option<PathBuf> {
    ProjectDirs::from("com", "plotstyle", "Plotstyle")
        .map(|dirs| dirs.cache_dir().join("fonts"))
}

/// A single palette entry added or overridden at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaletteOverride {
    /// Color name
    pub name: String,
    /// Color value (hex or backend-recognized name)
    pub value: String,
}

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// URL of the font asset
    pub font_url: String,
    /// Logical font name; the cached file is `<name>.ttf`
    pub font_name: String,
    /// Font family name passed to the backend
    pub font_family: String,
    /// Cache directory override; platform cache dir when unset
    pub cache_dir: Option<PathBuf>,
    /// Extra palette entries applied over the built-in set
    pub palette_overrides: Vec<PaletteOverride>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            font_url: DEFAULT_FONT_URL.to_string(),
            font_name: DEFAULT_FONT_NAME.to_string(),
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            cache_dir: None,
            palette_overrides: Vec::new(),
        }
    }
}

impl Settings {
    /// Load settings from the config file, or defaults when absent.
    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        let config_path = config_dir()
            .ok_or("Could not determine config directory")?
            .join("config.toml");

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            Ok(toml::from_str(&content)?)
        } else {
            Ok(Self::default())
        }
    }

    /// Save settings to the config file.
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let dir = config_dir().ok_or("Could not determine config directory")?;
        std::fs::create_dir_all(&dir)?;

        let content = toml::to_string_pretty(self)?;
        std::fs::write(dir.join("config.toml"), content)?;
        Ok(())
    }

    /// Directory the font cache lives in: the explicit override, the
    /// platform cache dir, or `cache` relative to the working directory.
    pub fn effective_cache_dir(&self) -> PathBuf {
        self.cache_dir
            .clone()
            .or_else(font_cache_dir)
            .unwrap_or_else(|| PathBuf::from("cache"))
    }
}
