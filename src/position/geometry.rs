//! Element measurement: document-relative and parent-relative boxes

use crate::dom::{CssPosition, Document, parse_style};
use crate::errors::PositionError;
use crate::types::{Px, Rect, Size};

/// Viewport-relative border box; NaN, infinite or negative-extent boxes are
/// rejected.
pub(crate) fn measure<D: Document>(doc: &D, node: D::Node) -> Result<Rect, PositionError> {
    let rect = doc.client_rect(node).ok_or_else(|| PositionError::unavailable(node))?;
    rect.validated().map_err(|e| PositionError::non_finite(node, e))
}

/// Border box of the floating element, read once per placement
pub fn target_size<D: Document>(doc: &D, target: D::Node) -> Result<Size, PositionError> {
    Ok(measure(doc, target)?.size())
}

/// Document-relative border box.
///
/// The viewport-relative box plus the page scroll offset, so the result does
/// not change while the page scrolls. Rounded to whole pixels.
pub fn bounding_box<D: Document>(doc: &D, node: D::Node) -> Result<Rect, PositionError> {
    let page = doc.scroll_offset(doc.root());
    let rect = measure(doc, node)?.translate(Px(page.y), Px(page.x));
    Ok(rect.round())
}

/// Nearest ancestor whose `position` is not `static`, or the root.
pub fn offset_parent<D: Document>(doc: &D, node: D::Node) -> D::Node {
    let root = doc.root();
    let mut current = doc.parent(node);
    while let Some(ancestor) = current {
        if ancestor == root || CssPosition::of(doc, ancestor).is_positioned() {
            return ancestor;
        }
        current = doc.parent(ancestor);
    }
    root
}

/// Box relative to the node's [`offset_parent`], the coordinate space of
/// absolutely positioned siblings. Falls back to [`bounding_box`] when there
/// is no positioned ancestor.
pub fn relative_position<D: Document>(doc: &D, node: D::Node) -> Result<Rect, PositionError> {
    relative_to_offset_parent(doc, node, bounding_box(doc, node)?)
}

/// Like [`relative_position`], measured from the outer edge of the node's top
/// and left margins.
pub fn relative_position_with_margins<D: Document>(
    doc: &D,
    node: D::Node,
) -> Result<Rect, PositionError> {
    let margin_top = parse_style(&doc.computed_style(node, "margin-top"));
    let margin_left = parse_style(&doc.computed_style(node, "margin-left"));
    let outer = bounding_box(doc, node)?.translate(-margin_top, -margin_left);
    relative_to_offset_parent(doc, node, outer)
}

fn relative_to_offset_parent<D: Document>(
    doc: &D,
    node: D::Node,
    rect: Rect,
) -> Result<Rect, PositionError> {
    let parent = offset_parent(doc, node);
    if parent == doc.root() {
        return Ok(rect.round());
    }

    // Children are laid out inside the parent's border and move with its
    // scroll position
    let client = doc.client_area(parent);
    let scroll = doc.scroll_offset(parent);
    let origin = bounding_box(doc, parent)?;
    let origin_top = origin.top + client.top - Px(scroll.y);
    let origin_left = origin.left + client.left - Px(scroll.x);

    Ok(rect.translate(-origin_top, -origin_left).round())
}
