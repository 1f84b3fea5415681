//! Theme Service
//!
//! Resolves the 16 basic ANSI color slots to concrete RGB values. The
//! parser never calls into this module; it is consulted at render time.

use crate::ansi::basic_color_label;
use crate::error::{Error, Result};
use crate::models::Rgb;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Name of the theme used when none is configured
pub const DEFAULT_THEME: &str = "default-dark";

/// Which channel a color is rendered on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorRole {
    Foreground,
    Background,
}

/// Resolves basic color slots to RGB
pub trait ThemeService {
    /// RGB for slot `index` (0-15), `None` outside that range
    fn resolve(&self, index: u8, role: ColorRole) -> Option<Rgb>;

    /// Color used when a channel has no color applied
    fn default_color(&self, role: ColorRole) -> Rgb;
}

/// Theme definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    /// Theme name, also its key in the manager
    pub name: String,
    /// Theme description
    pub description: String,
    /// Default text color
    pub foreground: Rgb,
    /// Default background color
    pub background: Rgb,
    /// ANSI color mappings
    pub ansi_colors: AnsiColorPalette,
}

/// The 16 basic ANSI colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnsiColorPalette {
    pub black: Rgb,
    pub red: Rgb,
    pub green: Rgb,
    pub yellow: Rgb,
    pub blue: Rgb,
    pub magenta: Rgb,
    pub cyan: Rgb,
    pub white: Rgb,
    pub bright_black: Rgb,
    pub bright_red: Rgb,
    pub bright_green: Rgb,
    pub bright_yellow: Rgb,
    pub bright_blue: Rgb,
    pub bright_magenta: Rgb,
    pub bright_cyan: Rgb,
    pub bright_white: Rgb,
}

impl AnsiColorPalette {
    /// Color in slot `index`
    pub fn get(&self, index: u8) -> Option<Rgb> {
        let color = match index {
            0 => self.black,
            1 => self.red,
            2 => self.green,
            3 => self.yellow,
            4 => self.blue,
            5 => self.magenta,
            6 => self.cyan,
            7 => self.white,
            8 => self.bright_black,
            9 => self.bright_red,
            10 => self.bright_green,
            11 => self.bright_yellow,
            12 => self.bright_blue,
            13 => self.bright_magenta,
            14 => self.bright_cyan,
            15 => self.bright_white,
            _ => return None,
        };
        Some(color)
    }
}

impl ThemeService for Theme {
    fn resolve(&self, index: u8, role: ColorRole) -> Option<Rgb> {
        let color = self.ansi_colors.get(index);
        if color.is_none() {
            trace!("No {:?} color for slot {} in theme '{}'", role, index, self.name);
        }
        color
    }

    fn default_color(&self, role: ColorRole) -> Rgb {
        match role {
            ColorRole::Foreground => self.foreground,
            ColorRole::Background => self.background,
        }
    }
}

/// Theme manager holding built-in and custom themes
#[derive(Debug, Clone)]
pub struct ThemeManager {
    /// Available themes
    themes: HashMap<String, Theme>,
    /// Current active theme
    current_theme: String,
}

impl ThemeManager {
    /// Create a new theme manager with the built-in themes loaded
    pub fn new() -> Self {
        let mut manager = Self {
            themes: HashMap::new(),
            current_theme: DEFAULT_THEME.to_string(),
        };
        manager.load_builtin_themes();
        manager
    }

    fn load_builtin_themes(&mut self) {
        for theme in [
            Self::create_dark_theme(),
            Self::create_light_theme(),
            Self::create_high_contrast_theme(),
        ] {
            self.themes.insert(theme.name.clone(), theme);
        }
    }

    fn is_builtin(theme_name: &str) -> bool {
        matches!(theme_name, "default-dark" | "default-light" | "high-contrast")
    }

    /// Create the default dark theme
    fn create_dark_theme() -> Theme {
        Theme {
            name: "default-dark".to_string(),
            description: "A modern dark theme optimized for long coding sessions".to_string(),
            foreground: Rgb::new(229, 229, 229),
            background: Rgb::new(24, 24, 37),
            ansi_colors: AnsiColorPalette {
                black: Rgb::new(0, 0, 0),
                red: Rgb::new(205, 49, 49),
                green: Rgb::new(13, 188, 121),
                yellow: Rgb::new(229, 229, 16),
                blue: Rgb::new(36, 114, 200),
                magenta: Rgb::new(188, 63, 188),
                cyan: Rgb::new(17, 168, 205),
                white: Rgb::new(229, 229, 229),
                bright_black: Rgb::new(102, 102, 102),
                bright_red: Rgb::new(241, 76, 76),
                bright_green: Rgb::new(35, 209, 139),
                bright_yellow: Rgb::new(245, 245, 67),
                bright_blue: Rgb::new(59, 142, 234),
                bright_magenta: Rgb::new(214, 112, 214),
                bright_cyan: Rgb::new(41, 184, 219),
                bright_white: Rgb::new(229, 229, 229),
            },
        }
    }

    /// Create the default light theme
    fn create_light_theme() -> Theme {
        Theme {
            name: "default-light".to_string(),
            description: "A clean light theme for daytime use".to_string(),
            foreground: Rgb::new(36, 36, 36),
            background: Rgb::new(255, 255, 255),
            ansi_colors: AnsiColorPalette {
                black: Rgb::new(0, 0, 0),
                red: Rgb::new(195, 39, 43),
                green: Rgb::new(40, 174, 96),
                yellow: Rgb::new(224, 147, 0),
                blue: Rgb::new(66, 113, 174),
                magenta: Rgb::new(170, 60, 135),
                cyan: Rgb::new(0, 163, 181),
                white: Rgb::new(36, 36, 36),
                bright_black: Rgb::new(102, 102, 102),
                bright_red: Rgb::new(237, 85, 59),
                bright_green: Rgb::new(0, 188, 120),
                bright_yellow: Rgb::new(244, 191, 117),
                bright_blue: Rgb::new(59, 142, 234),
                bright_magenta: Rgb::new(214, 112, 214),
                bright_cyan: Rgb::new(41, 184, 219),
                bright_white: Rgb::new(0, 0, 0),
            },
        }
    }

    /// Create the high contrast theme
    fn create_high_contrast_theme() -> Theme {
        Theme {
            name: "high-contrast".to_string(),
            description: "Maximum contrast for accessibility".to_string(),
            foreground: Rgb::new(255, 255, 255),
            background: Rgb::new(0, 0, 0),
            ansi_colors: AnsiColorPalette {
                black: Rgb::new(0, 0, 0),
                red: Rgb::new(255, 0, 0),
                green: Rgb::new(0, 255, 0),
                yellow: Rgb::new(255, 255, 0),
                blue: Rgb::new(0, 0, 255),
                magenta: Rgb::new(255, 0, 255),
                cyan: Rgb::new(0, 255, 255),
                white: Rgb::new(255, 255, 255),
                bright_black: Rgb::new(128, 128, 128),
                bright_red: Rgb::new(255, 128, 128),
                bright_green: Rgb::new(128, 255, 128),
                bright_yellow: Rgb::new(255, 255, 128),
                bright_blue: Rgb::new(128, 128, 255),
                bright_magenta: Rgb::new(255, 128, 255),
                bright_cyan: Rgb::new(128, 255, 255),
                bright_white: Rgb::new(255, 255, 255),
            },
        }
    }

    /// Get the current theme
    pub fn current_theme(&self) -> Result<&Theme> {
        self.themes
            .get(&self.current_theme)
            .ok_or_else(|| Error::ThemeNotFound {
                theme_name: self.current_theme.clone(),
            })
    }

    /// Name of the current theme
    pub fn current_theme_name(&self) -> &str {
        &self.current_theme
    }

    /// Set the current theme
    pub fn set_theme(&mut self, theme_name: &str) -> Result<()> {
        if self.themes.contains_key(theme_name) {
            debug!("Switching theme to '{}'", theme_name);
            self.current_theme = theme_name.to_string();
            Ok(())
        } else {
            Err(Error::ThemeNotFound {
                theme_name: theme_name.to_string(),
            })
        }
    }

    /// Add a custom theme
    pub fn add_theme(&mut self, theme: Theme) -> Result<()> {
        if self.themes.contains_key(&theme.name) {
            return Err(Error::ThemeAlreadyExists {
                theme_name: theme.name.clone(),
            });
        }
        self.themes.insert(theme.name.clone(), theme);
        Ok(())
    }

    /// Remove a custom theme
    pub fn remove_theme(&mut self, theme_name: &str) -> Result<()> {
        if Self::is_builtin(theme_name) {
            return Err(Error::CannotRemoveBuiltInTheme {
                theme_name: theme_name.to_string(),
            });
        }

        if self.themes.remove(theme_name).is_some() {
            // If we removed the current theme, switch to default
            if self.current_theme == theme_name {
                self.current_theme = DEFAULT_THEME.to_string();
            }
            Ok(())
        } else {
            Err(Error::ThemeNotFound {
                theme_name: theme_name.to_string(),
            })
        }
    }

    /// List all available themes, sorted by name
    pub fn list_themes(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.themes.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// Export theme to JSON string
    pub fn export_theme(&self, theme_name: &str) -> Result<String> {
        let theme = self.themes.get(theme_name).ok_or_else(|| Error::ThemeNotFound {
            theme_name: theme_name.to_string(),
        })?;
        Ok(serde_json::to_string_pretty(theme)?)
    }

    /// Import theme from JSON string, returning its name
    pub fn import_theme(&mut self, json: &str) -> Result<String> {
        let theme: Theme = serde_json::from_str(json)?;
        let theme_name = theme.name.clone();
        self.add_theme(theme)?;
        Ok(theme_name)
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeService for ThemeManager {
    fn resolve(&self, index: u8, role: ColorRole) -> Option<Rgb> {
        match self.current_theme() {
            Ok(theme) => theme.resolve(index, role),
            Err(e) => {
                warn!("Cannot resolve {}: {}", basic_color_label(index), e);
                None
            }
        }
    }

    fn default_color(&self, role: ColorRole) -> Rgb {
        match self.current_theme() {
            Ok(theme) => theme.default_color(role),
            Err(_) => Self::create_dark_theme().default_color(role),
        }
    }
}
