//! Output Builder
//!
//! Collects text into the currently open segment and turns each finished
//! segment into a [`StyledNode`], asking the link detector to split its
//! text.

use crate::links::LinkDetector;
use crate::models::{Segment, StyleState, StyledNode};

/// Builds the output nodes of one parse pass
pub struct OutputBuilder<'d> {
    /// Link detector used on every emitted segment
    detector: &'d dyn LinkDetector,
    /// Text of the open segment
    current_text: String,
    /// Style the open segment was opened under
    current_style: StyleState,
    /// Nodes emitted so far
    nodes: Vec<StyledNode>,
}

impl<'d> OutputBuilder<'d> {
    pub fn new(detector: &'d dyn LinkDetector) -> Self {
        Self {
            detector,
            current_text: String::new(),
            current_style: StyleState::default(),
            nodes: Vec::new(),
        }
    }

    /// Append text to the open segment
    pub fn push_str(&mut self, text: &str) {
        self.current_text.push_str(text);
    }

    /// Append one character to the open segment
    pub fn push_char(&mut self, ch: char) {
        self.current_text.push(ch);
    }

    /// Switch to `style`
    ///
    /// When it differs from the open segment's style, the open segment is
    /// emitted (if it has text) and a new one is opened under `style`.
    pub fn set_style(&mut self, style: StyleState) {
        if style == self.current_style {
            return;
        }
        self.flush();
        self.current_style = style.snapshot();
    }

    /// Emit the open segment and return every node
    pub fn finish(mut self) -> Vec<StyledNode> {
        self.flush();
        self.nodes
    }

    fn flush(&mut self) {
        if self.current_text.is_empty() {
            return;
        }

        let segment = Segment::new(std::mem::take(&mut self.current_text), self.current_style);
        trace!(
            "Emitting segment of {} bytes with style {:?}",
            segment.text.len(),
            segment.style
        );
        let content = self.detector.detect(&segment.text);
        self.nodes.push(StyledNode::new(content, segment.style));
    }
}
