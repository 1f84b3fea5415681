//! Terminal Output Interpretation
//!
//! The components of one parse pass over terminal output: scanning,
//! SGR interpretation and output building.

pub mod ansi_parser;
pub mod output;
pub mod scanner;
pub mod sgr;

// Re-exports for convenience
pub use ansi_parser::{parse_ansi, strip_ansi, AnsiParser};
pub use output::OutputBuilder;
pub use scanner::{parse_params, Scanner, Token, ESC};
pub use sgr::SgrInterpreter;
