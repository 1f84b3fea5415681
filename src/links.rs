//! Link Detection
//!
//! Splits the text of a styled run into plain text and link nodes. The
//! detector only sees plain text; styling never crosses into it.

use crate::error::Result;
use crate::models::InlineNode;
use once_cell::sync::Lazy;
use regex::Regex;

/// Default pattern for web and file URLs
pub const DEFAULT_LINK_PATTERN: &str = r#"\b(?:https?|ftp|file)://[^\s<>"'`]+"#;

/// Characters trimmed from the end of a match (sentence punctuation)
const TRAILING_PUNCTUATION: &[char] = &['.', ',', ';', ':', '!', '?', ')', '\'', '"'];

static DEFAULT_LINK_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(DEFAULT_LINK_PATTERN).expect("default link pattern is valid"));

/// Splits text into plain and link nodes
///
/// Implementations must cover exactly the input characters, in order.
pub trait LinkDetector: Send + Sync {
    fn detect(&self, text: &str) -> Vec<InlineNode>;
}

/// Detector that never finds links
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextDetector;

impl LinkDetector for PlainTextDetector {
    fn detect(&self, text: &str) -> Vec<InlineNode> {
        if text.is_empty() {
            Vec::new()
        } else {
            vec![InlineNode::text(text)]
        }
    }
}

/// Regex based URL detector
#[derive(Debug, Clone)]
pub struct RegexLinkDetector {
    pattern: Regex,
}

impl RegexLinkDetector {
    /// Detector using [`DEFAULT_LINK_PATTERN`]
    pub fn new() -> Self {
        Self {
            pattern: DEFAULT_LINK_REGEX.clone(),
        }
    }

    /// Detector using a custom pattern
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
        })
    }
}

impl Default for RegexLinkDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl LinkDetector for RegexLinkDetector {
    fn detect(&self, text: &str) -> Vec<InlineNode> {
        let mut nodes = Vec::new();
        let mut last_end = 0;

        for mat in self.pattern.find_iter(text) {
            let link = mat.as_str().trim_end_matches(TRAILING_PUNCTUATION);
            if link.is_empty() {
                continue;
            }

            if mat.start() > last_end {
                nodes.push(InlineNode::text(&text[last_end..mat.start()]));
            }
            nodes.push(InlineNode::link(link, link));
            last_end = mat.start() + link.len();
        }

        if last_end < text.len() {
            nodes.push(InlineNode::text(&text[last_end..]));
        }

        nodes
    }
}
