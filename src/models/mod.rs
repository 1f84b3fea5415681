//! Core data models for sgrstyle
//!
//! The style state accumulated during a parse pass, and the segments and
//! output nodes produced from it.

pub mod segment;
pub mod style;

// Re-exports for convenience
pub use segment::{ColorChannel, InlineNode, Segment, StyledNode};
pub use style::{ColorSpec, Rgb, StyleState};
