//! sgrstyle - ANSI SGR interpretation for styled terminal output
//!
//! Converts text containing ANSI escape sequences into an ordered list of
//! styled nodes. Each node covers a maximal run of text under one style:
//! bold/italic/underline flags plus a foreground and background color.
//!
//! ## Module Organization
//!
//! - [`terminal`] - Scanner, SGR interpreter, output builder and the parser driving them
//! - [`models`] - Style state, color specs, segments and output nodes
//! - [`ansi`] - 8-bit palette resolution
//! - [`links`] - Link detection inside styled runs
//! - [`config`] - Configuration loading and the theme service
//! - [`render`] - Render-time color resolution against a theme
//! - [`mod@error`] - Error types and Result aliases
//!
//! ## Quick Start
//!
//! ```
//! use sgrstyle::parse_ansi;
//!
//! let nodes = parse_ansi("\x1b[1mbold\x1b[32m green\x1b[0m plain");
//! assert_eq!(nodes.len(), 3);
//! assert!(nodes[1].bold());
//! assert_eq!(nodes[1].foreground_basic_index(), Some(2));
//! assert!(!nodes[2].has_style());
//! ```
//!
//! ## Colors
//!
//! Basic colors (30-37, 40-47, and palette indices 0-15) are kept as theme
//! slots and only turned into RGB at render time through a
//! [`config::ThemeService`]. Palette indices 16-255 and 24-bit colors are
//! carried as explicit RGB.
//!
//! ## Error Handling
//!
//! Parsing never fails. Malformed escapes are kept as literal text and
//! unknown codes are ignored. Only configuration and theme management
//! return [`Result`].

#[macro_use]
extern crate tracing;

pub mod ansi;
pub mod config;
pub mod error;
pub mod links;
pub mod models;
pub mod render;
pub mod terminal;

// Re-exports for core functionality
pub use config::{Config, ConfigLoader, ParserConfig, ThemeManager};
pub use error::{Error, Result};
pub use models::{ColorSpec, InlineNode, Rgb, StyleState, StyledNode};
pub use terminal::{parse_ansi, strip_ansi, AnsiParser};

/// The current version of sgrstyle from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The crate name from Cargo.toml
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Install a compact `tracing` subscriber
///
/// `RUST_LOG` wins over `default_filter` when set. Returns `false` if a
/// global subscriber was already installed.
pub fn init_logging(default_filter: &str) -> bool {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .try_init()
        .is_ok()
}

/// Build a parser and theme manager from the configuration on disk
///
/// Falls back to defaults when no configuration can be loaded.
pub fn init() -> (AnsiParser, ThemeManager) {
    let config = match ConfigLoader::load() {
        Ok(config) => config,
        Err(e) => {
            warn!("Failed to load configuration: {}. Using defaults", e);
            Config::default()
        }
    };

    info!("Initializing {} v{}", NAME, VERSION);
    init_with_config(&config)
}

/// Build a parser and theme manager from an already loaded configuration
///
/// An unknown theme name falls back to the default theme.
pub fn init_with_config(config: &Config) -> (AnsiParser, ThemeManager) {
    let parser = AnsiParser::with_config(&config.parser);
    let themes = config.theme_manager().unwrap_or_else(|e| {
        warn!("{}. Using theme '{}'", e, crate::config::DEFAULT_THEME);
        ThemeManager::new()
    });
    (parser, themes)
}
