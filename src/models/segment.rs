//! Segment and Output Node Models
//!
//! A [`Segment`] is a maximal run of text under one style snapshot. The
//! [`StyledNode`] is what callers receive: the same run, split into plain
//! text and links, with its style attributes exposed per channel.

use super::style::{ColorSpec, Rgb, StyleState};
use serde::{Deserialize, Serialize};

/// A run of text rendered under one unchanging style
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub style: StyleState,
}

impl Segment {
    pub fn new(text: String, style: StyleState) -> Self {
        Self { text, style }
    }
}

/// Piece of a segment's text as returned by a link detector
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InlineNode {
    /// Plain text
    Text { text: String },
    /// Recognized link
    Link { text: String, target: String },
}

impl InlineNode {
    pub fn text(text: impl Into<String>) -> Self {
        InlineNode::Text { text: text.into() }
    }

    pub fn link(text: impl Into<String>, target: impl Into<String>) -> Self {
        InlineNode::Link {
            text: text.into(),
            target: target.into(),
        }
    }

    /// Displayed characters of this node
    pub fn as_str(&self) -> &str {
        match self {
            InlineNode::Text { text } => text.as_str(),
            InlineNode::Link { text, .. } => text.as_str(),
        }
    }

    pub fn is_link(&self) -> bool {
        matches!(self, InlineNode::Link { .. })
    }
}

/// One color channel of an output node
///
/// Basic and custom are mutually exclusive by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColorChannel {
    pub basic_index: Option<u8>,
    pub custom_rgb: Option<Rgb>,
}

impl From<Option<ColorSpec>> for ColorChannel {
    fn from(spec: Option<ColorSpec>) -> Self {
        Self {
            basic_index: spec.as_ref().and_then(ColorSpec::basic_index),
            custom_rgb: spec.as_ref().and_then(ColorSpec::custom_rgb),
        }
    }
}

impl ColorChannel {
    /// Whether any color applies to this channel
    pub fn is_set(&self) -> bool {
        self.basic_index.is_some() || self.custom_rgb.is_some()
    }
}

/// Style-annotated output node, one per emitted segment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyledNode {
    /// Text content, split into plain text and links
    pub content: Vec<InlineNode>,
    /// Style snapshot the segment was opened under
    pub style: StyleState,
}

impl StyledNode {
    pub fn new(content: Vec<InlineNode>, style: StyleState) -> Self {
        Self { content, style }
    }

    /// Concatenated text of all inline nodes
    pub fn text(&self) -> String {
        self.content.iter().map(InlineNode::as_str).collect()
    }

    pub fn bold(&self) -> bool {
        self.style.bold
    }

    pub fn italic(&self) -> bool {
        self.style.italic
    }

    pub fn underline(&self) -> bool {
        self.style.underline
    }

    pub fn foreground(&self) -> ColorChannel {
        self.style.foreground.into()
    }

    pub fn background(&self) -> ColorChannel {
        self.style.background.into()
    }

    pub fn foreground_basic_index(&self) -> Option<u8> {
        self.foreground().basic_index
    }

    pub fn foreground_custom_rgb(&self) -> Option<Rgb> {
        self.foreground().custom_rgb
    }

    pub fn background_basic_index(&self) -> Option<u8> {
        self.background().basic_index
    }

    pub fn background_custom_rgb(&self) -> Option<Rgb> {
        self.background().custom_rgb
    }

    /// Whether any flag or color applies
    pub fn has_style(&self) -> bool {
        self.style.is_styled()
    }

    /// Links found in this node's text
    pub fn links(&self) -> impl Iterator<Item = &InlineNode> {
        self.content.iter().filter(|node| node.is_link())
    }
}
