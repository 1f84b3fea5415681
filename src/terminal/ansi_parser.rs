//! ANSI Escape Code Parser
//!
//! Drives one left-to-right pass over terminal output: the scanner yields
//! tokens, SGR sequences update the style state, and the output builder
//! groups text into styled nodes.

use crate::config::ParserConfig;
use crate::links::{LinkDetector, PlainTextDetector, RegexLinkDetector};
use crate::models::{StyleState, StyledNode};
use crate::terminal::output::OutputBuilder;
use crate::terminal::scanner::{Scanner, Token};
use crate::terminal::sgr::SgrInterpreter;
use std::fmt;

/// ANSI escape sequence parser
///
/// Holds only configuration. Every call to [`AnsiParser::parse`] starts
/// from a fresh [`StyleState`], so one parser can be shared across threads.
pub struct AnsiParser {
    /// SGR code interpreter
    interpreter: SgrInterpreter,
    /// Link detector applied to each emitted segment
    detector: Box<dyn LinkDetector>,
}

impl AnsiParser {
    /// Create a parser with default options (links detected, no bright colors)
    pub fn new() -> Self {
        Self::with_config(&ParserConfig::default())
    }

    /// Create a parser from configuration
    pub fn with_config(config: &ParserConfig) -> Self {
        let detector: Box<dyn LinkDetector> = if config.detect_links {
            Box::new(RegexLinkDetector::new())
        } else {
            Box::new(PlainTextDetector)
        };

        Self {
            interpreter: SgrInterpreter::with_bright_colors(config.bright_colors),
            detector,
        }
    }

    /// Replace the link detector
    pub fn with_link_detector(mut self, detector: Box<dyn LinkDetector>) -> Self {
        self.detector = detector;
        self
    }

    /// Parse text into styled nodes
    ///
    /// Never fails: malformed sequences become literal text, unknown codes
    /// and non-SGR sequences are dropped.
    pub fn parse(&self, text: &str) -> Vec<StyledNode> {
        let mut state = StyleState::new();
        let mut builder = OutputBuilder::new(self.detector.as_ref());

        for token in Scanner::new(text) {
            match token {
                Token::Text(run) => builder.push_str(run),
                Token::Literal(ch) => builder.push_char(ch),
                Token::Sgr(params) => {
                    state = self.interpreter.apply(state, &params);
                    builder.set_style(state);
                }
                Token::Control { terminator, params } => {
                    trace!("Discarding control sequence ESC[{}{}", params, terminator);
                }
            }
        }

        let nodes = builder.finish();
        debug!("Parsed {} bytes into {} styled nodes", text.len(), nodes.len());
        nodes
    }
}

impl Default for AnsiParser {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for AnsiParser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnsiParser")
            .field("interpreter", &self.interpreter)
            .finish_non_exhaustive()
    }
}

/// Parse text with default options
pub fn parse_ansi(text: &str) -> Vec<StyledNode> {
    AnsiParser::new().parse(text)
}

/// Text content of `text` with every escape sequence removed
///
/// Malformed escapes are kept, exactly as the parser keeps them.
pub fn strip_ansi(text: &str) -> String {
    let mut plain = String::with_capacity(text.len());
    for token in Scanner::new(text) {
        match token {
            Token::Text(run) => plain.push_str(run),
            Token::Literal(ch) => plain.push(ch),
            Token::Sgr(_) | Token::Control { .. } => {}
        }
    }
    plain
}
