//! Configuration management for sgrstyle
//!
//! Parser options and theme selection, loadable from TOML or JSON files.

pub mod loader;
pub mod theme;

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

pub use loader::{ConfigFormat, ConfigLoader};
pub use theme::{ColorRole, Theme, ThemeManager, ThemeService, DEFAULT_THEME};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Parser configuration
    pub parser: ParserConfig,

    /// Theme configuration
    pub theme: ThemeConfig,
}

/// Parser-related configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Split segment text into plain text and links
    pub detect_links: bool,

    /// Treat 90-97 and 100-107 as bright basic colors (slots 8-15)
    pub bright_colors: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            detect_links: true,
            bright_colors: false,
        }
    }
}

/// Theme selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Name of the theme used to render basic colors
    pub name: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_THEME.to_string(),
        }
    }
}

impl Config {
    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.theme.name.trim().is_empty() {
            return Err(Error::ConfigValidationFailed {
                field: "theme.name".to_string(),
                reason: "Theme name cannot be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Theme manager with the configured theme selected
    pub fn theme_manager(&self) -> Result<ThemeManager> {
        let mut manager = ThemeManager::new();
        manager.set_theme(&self.theme.name)?;
        Ok(manager)
    }
}
