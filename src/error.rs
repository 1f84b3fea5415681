//! Error types and Result aliases for sgrstyle
//!
//! The parse pass itself never fails. Errors only surface at the edges:
//! loading configuration, managing themes and compiling link patterns.

use std::path::PathBuf;

/// Result type alias for sgrstyle operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for sgrstyle
#[derive(Debug, thiserror::Error)]
pub enum Error {
    // === Configuration errors ===
    /// Failed to load configuration file
    #[error("Failed to load config from '{}': {reason}", .path.display())]
    ConfigLoadFailed { path: PathBuf, reason: String },

    /// Failed to parse configuration
    #[error("Failed to parse {format} config: {reason}")]
    ConfigParseFailed { format: String, reason: String },

    /// Failed to serialize configuration
    #[error("Failed to serialize config as {format}: {reason}")]
    ConfigSerializationFailed { format: String, reason: String },

    /// Configuration validation failed
    #[error("Configuration validation failed for '{field}': {reason}")]
    ConfigValidationFailed { field: String, reason: String },

    // === Theme errors ===
    /// Theme not found
    #[error("Theme '{theme_name}' not found")]
    ThemeNotFound { theme_name: String },

    /// Theme already exists
    #[error("Theme '{theme_name}' already exists")]
    ThemeAlreadyExists { theme_name: String },

    /// Cannot remove built-in theme
    #[error("Cannot remove built-in theme '{theme_name}'")]
    CannotRemoveBuiltInTheme { theme_name: String },

    /// Color string is not `#RRGGBB`
    #[error("Invalid hex color: '{0}'")]
    InvalidHexColor(String),

    // === I/O and serialization errors ===
    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Link pattern compilation errors
    #[error("Regex compilation error: {0}")]
    Regex(#[from] regex::Error),
}
