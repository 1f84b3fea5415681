//! Escape Sequence Scanner
//!
//! Splits raw terminal output into plain-text runs and escape sequence
//! tokens. A malformed escape introducer is never consumed speculatively:
//! the ESC byte comes back as a literal character and scanning resumes
//! right after it, so no input is lost.

use once_cell::sync::Lazy;
use regex::Regex;

/// Escape character that introduces every sequence
pub const ESC: char = '\x1b';

/// `ESC [ params terminator`, anchored at the ESC being examined
static SEQUENCE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\x1b\[([0-9;]*)([ABCDHIJKfhmpsu])").expect("escape sequence pattern is valid")
});

/// One scanner step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token<'a> {
    /// Maximal run of characters without an ESC
    Text(&'a str),
    /// `m`-terminated sequence with its numeric parameters
    Sgr(Vec<u32>),
    /// Recognized sequence with a non-`m` terminator, discarded by the caller
    Control { terminator: char, params: &'a str },
    /// ESC without a valid continuation, kept as literal text
    Literal(char),
}

/// Iterator over the tokens of one input string
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    input: &'a str,
    position: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, position: 0 }
    }

    /// Unconsumed part of the input
    pub fn remaining(&self) -> &'a str {
        &self.input[self.position..]
    }

    fn scan_escape(&mut self, rest: &'a str) -> Token<'a> {
        let Some(captures) = SEQUENCE_REGEX.captures(rest) else {
            trace!("Unterminated escape at byte {}, keeping it as text", self.position);
            self.position += ESC.len_utf8();
            return Token::Literal(ESC);
        };

        // Both groups always participate; the terminator is one ASCII byte
        let (whole, [params, terminator]) = captures.extract();
        self.position += whole.len();

        match terminator.as_bytes()[0] {
            b'm' => Token::Sgr(parse_params(params)),
            byte => Token::Control {
                terminator: char::from(byte),
                params,
            },
        }
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.remaining();
        if rest.is_empty() {
            return None;
        }

        if rest.starts_with(ESC) {
            return Some(self.scan_escape(rest));
        }

        let end = rest.find(ESC).unwrap_or(rest.len());
        self.position += end;
        Some(Token::Text(&rest[..end]))
    }
}

/// Split an SGR parameter string into numbers
///
/// Empty fields count as `0` and an empty list is a single `0`. Fields too
/// large for `u32` saturate, which every consumer treats as out of range.
pub fn parse_params(params: &str) -> Vec<u32> {
    if params.is_empty() {
        return vec![0];
    }

    params
        .split(';')
        .map(|field| {
            if field.is_empty() {
                0
            } else {
                field.parse().unwrap_or(u32::MAX)
            }
        })
        .collect()
}
