//! Render-time style resolution
//!
//! Turns the logical style of a [`StyledNode`] into concrete colors. Basic
//! colors go through the theme service, custom colors pass through as-is.

use crate::config::theme::{ColorRole, ThemeService};
use crate::models::{ColorSpec, Rgb, StyledNode};

/// Concrete style of one node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderedStyle {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    /// `None` when no color applies to the channel
    pub foreground: Option<Rgb>,
    /// `None` when no color applies to the channel
    pub background: Option<Rgb>,
}

/// Resolve a node's style against a theme
pub fn resolve_node(node: &StyledNode, theme: &dyn ThemeService) -> RenderedStyle {
    RenderedStyle {
        bold: node.bold(),
        italic: node.italic(),
        underline: node.underline(),
        foreground: resolve_color(node.style.foreground, ColorRole::Foreground, theme),
        background: resolve_color(node.style.background, ColorRole::Background, theme),
    }
}

/// Resolve one channel
pub fn resolve_color(
    spec: Option<ColorSpec>,
    role: ColorRole,
    theme: &dyn ThemeService,
) -> Option<Rgb> {
    match spec? {
        ColorSpec::Basic(index) => theme.resolve(index, role),
        ColorSpec::Custom(rgb) => Some(rgb),
    }
}
