//! The document capability the engine measures against.
//!
//! Attaching, styling and moving elements stays with the caller; the engine
//! only needs to read boxes, a handful of computed styles and scroll offsets.

pub mod memory;

use std::fmt;

use glam::DVec2;

use crate::types::{Px, Rect};

/// Inner box of an element as reported by `clientTop`/`clientLeft`/
/// `clientWidth`/`clientHeight`: border widths on the start edges, and the
/// padding-box size without scrollbars.
///
/// For the document root the size is the viewport.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ClientArea {
    pub top: Px,
    pub left: Px,
    pub width: Px,
    pub height: Px,
}

/// Read-only view of a rendered document.
pub trait Document {
    type Node: Copy + Eq + fmt::Debug;

    /// The document element (`<html>`)
    fn root(&self) -> Self::Node;

    /// Parent element, `None` for the root or a detached subtree
    fn parent(&self, node: Self::Node) -> Option<Self::Node>;

    /// Border box relative to the viewport, `None` when the node is detached
    /// or not rendered
    fn client_rect(&self, node: Self::Node) -> Option<Rect>;

    fn client_area(&self, node: Self::Node) -> ClientArea;

    /// Scroll position of a node's content (`scrollLeft`, `scrollTop`); for the
    /// root this is the page scroll
    fn scroll_offset(&self, node: Self::Node) -> DVec2;

    /// Computed value of a CSS property, empty when unset
    fn computed_style(&self, node: Self::Node, property: &str) -> String;
}

/// Leading number of a CSS length (`"25px"` → 25), zero when there is none.
pub fn parse_style(value: &str) -> Px {
    let value = value.trim();
    let end = value
        .char_indices()
        .find(|&(i, c)| !(c.is_ascii_digit() || c == '.' || ((c == '-' || c == '+') && i == 0)))
        .map(|(i, _)| i)
        .unwrap_or(value.len());

    value[..end]
        .parse::<f64>()
        .ok()
        .and_then(|v| Px::try_new(v).ok())
        .unwrap_or(Px::ZERO)
}

/// Computed `position`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CssPosition {
    #[default]
    Static,
    Relative,
    Absolute,
    Fixed,
    Sticky,
}

impl CssPosition {
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "relative" => CssPosition::Relative,
            "absolute" => CssPosition::Absolute,
            "fixed" => CssPosition::Fixed,
            "sticky" => CssPosition::Sticky,
            _ => CssPosition::Static,
        }
    }

    /// Whether the node is a containing block for absolutely positioned
    /// descendants
    pub fn is_positioned(self) -> bool {
        self != CssPosition::Static
    }

    pub fn of<D: Document>(doc: &D, node: D::Node) -> Self {
        CssPosition::parse(&doc.computed_style(node, "position"))
    }
}

/// One computed `overflow` value
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Overflow {
    #[default]
    Visible,
    Hidden,
    Clip,
    Scroll,
    Auto,
}

impl Overflow {
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "hidden" => Overflow::Hidden,
            "clip" => Overflow::Clip,
            "scroll" => Overflow::Scroll,
            "auto" => Overflow::Auto,
            _ => Overflow::Visible,
        }
    }

    /// Whether this value makes a scroll container; `hidden` counts only with
    /// `include_hidden`.
    pub fn scrolls(self, include_hidden: bool) -> bool {
        match self {
            Overflow::Auto | Overflow::Scroll => true,
            Overflow::Hidden => include_hidden,
            Overflow::Visible | Overflow::Clip => false,
        }
    }
}

/// All overflow values that apply to a node: both halves of the `overflow`
/// shorthand plus the per-axis longhands.
pub fn overflow_values<D: Document>(doc: &D, node: D::Node) -> Vec<Overflow> {
    ["overflow", "overflow-x", "overflow-y"]
        .iter()
        .flat_map(|property| {
            doc.computed_style(node, property)
                .split_whitespace()
                .map(Overflow::parse)
                .collect::<Vec<_>>()
        })
        .collect()
}
