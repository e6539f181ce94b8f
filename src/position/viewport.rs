//! Clearance between an element and the visible edge of its container

use crate::dom::{Document, parse_style};
use crate::errors::PositionError;
use crate::types::{EdgeOffsets, Px, Rect};

use super::defaults;
use super::geometry::measure;
use super::scroll::scroll_parent;

/// Visible part of a container, in viewport coordinates
#[derive(Clone, Copy, Debug, PartialEq)]
struct VisibleBox {
    top: Px,
    left: Px,
    bottom: Px,
    right: Px,
}

impl VisibleBox {
    fn inset(self, insets: EdgeOffsets) -> Self {
        VisibleBox {
            top: self.top + insets.top,
            left: self.left + insets.left,
            bottom: self.bottom - insets.bottom,
            right: self.right - insets.right,
        }
    }
}

/// Room between `node` and the visible edges of its reference container.
///
/// The container is the document root with `use_document`, otherwise the
/// node's [`scroll_parent`]. The root's visible box is the viewport; any other
/// container's is its box inside the borders and scrollbars, further shrunk by
/// its padding unless `include_padding` is false. Values shrink as the node
/// scrolls toward an edge and go negative once it is past it.
pub fn clearance<D: Document>(
    doc: &D,
    node: D::Node,
    use_document: bool,
    include_padding: bool,
) -> Result<EdgeOffsets, PositionError> {
    let element = measure(doc, node)?;
    let root = doc.root();
    let container = if use_document {
        root
    } else {
        scroll_parent(doc, node, defaults::INCLUDE_HIDDEN_OVERFLOW)
    };

    let mut visible = visible_box(doc, container, container == root)?;
    if include_padding {
        visible = visible.inset(padding(doc, container));
    }

    Ok(edges_within(&element, &visible).round())
}

fn visible_box<D: Document>(
    doc: &D,
    container: D::Node,
    is_root: bool,
) -> Result<VisibleBox, PositionError> {
    let client = doc.client_area(container);
    if is_root {
        return Ok(VisibleBox {
            top: Px::ZERO,
            left: Px::ZERO,
            bottom: client.height,
            right: client.width,
        });
    }

    let rect = measure(doc, container)?;
    let top = rect.top + client.top;
    let left = rect.left + client.left;
    Ok(VisibleBox { top, left, bottom: top + client.height, right: left + client.width })
}

fn padding<D: Document>(doc: &D, node: D::Node) -> EdgeOffsets {
    let side = |edge: &str| parse_style(&doc.computed_style(node, &format!("padding-{edge}")));
    EdgeOffsets {
        top: side("top"),
        bottom: side("bottom"),
        left: side("left"),
        right: side("right"),
    }
}

fn edges_within(element: &Rect, visible: &VisibleBox) -> EdgeOffsets {
    EdgeOffsets {
        top: element.top - visible.top,
        bottom: visible.bottom - element.bottom(),
        left: element.left - visible.left,
        right: visible.right - element.right(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::memory::{Element, MemoryDocument};

    #[test]
    fn document_clearance_is_distance_to_viewport_edges() {
        let mut doc = MemoryDocument::new(1000.0, 800.0);
        let root = doc.root();
        let el = doc.append(root, Element::new("host").at(Rect::new(100.0, 200.0, 50.0, 30.0)));

        assert_eq!(
            clearance(&doc, el, true, true).unwrap(),
            EdgeOffsets::new(100.0, 670.0, 200.0, 750.0)
        );
    }

    #[test]
    fn use_document_ignores_scroll_parent() {
        let mut doc = MemoryDocument::new(1000.0, 800.0);
        let root = doc.root();
        let outer = doc.append(
            root,
            Element::new("outer").at(Rect::new(50.0, 50.0, 200.0, 200.0)).style("overflow", "auto"),
        );
        let el = doc.append(outer, Element::new("host").at(Rect::new(100.0, 100.0, 20.0, 20.0)));

        assert_eq!(
            clearance(&doc, el, true, true).unwrap(),
            EdgeOffsets::new(100.0, 680.0, 100.0, 880.0)
        );
        assert_eq!(
            clearance(&doc, el, false, true).unwrap(),
            EdgeOffsets::new(50.0, 130.0, 50.0, 130.0)
        );
    }

    #[test]
    fn detached_node_has_no_clearance() {
        let mut doc = MemoryDocument::new(1000.0, 800.0);
        let root = doc.root();
        let el = doc.append(root, Element::new("host").at(Rect::new(0.0, 0.0, 1.0, 1.0)));
        doc.detach(el);

        assert!(matches!(
            clearance(&doc, el, false, true),
            Err(PositionError::MeasurementUnavailable { .. })
        ));
    }

    #[test]
    fn non_finite_element_has_no_clearance() {
        let mut doc = MemoryDocument::new(1000.0, 800.0);
        let root = doc.root();
        let mut rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        rect.top = Px(f64::NAN);
        let el = doc.append(root, Element::new("host").at(rect));

        assert!(matches!(
            clearance(&doc, el, true, true),
            Err(PositionError::NonFiniteMeasurement { .. })
        ));
    }

    #[test]
    fn non_finite_container_has_no_clearance() {
        let mut doc = MemoryDocument::new(1000.0, 800.0);
        let root = doc.root();
        let outer = doc.append(
            root,
            Element::new("outer")
                .at(Rect::new(0.0, f64::INFINITY, 200.0, 200.0))
                .style("overflow", "auto"),
        );
        let el = doc.append(outer, Element::new("host").at(Rect::new(10.0, 10.0, 20.0, 20.0)));

        assert!(matches!(
            clearance(&doc, el, false, true),
            Err(PositionError::NonFiniteMeasurement { .. })
        ));
    }

    #[test]
    fn clearance_is_rounded() {
        let mut doc = MemoryDocument::new(1000.0, 800.0);
        let root = doc.root();
        let el = doc.append(root, Element::new("host").at(Rect::new(10.4, 10.6, 0.0, 0.0)));

        let offsets = clearance(&doc, el, true, false).unwrap();
        assert_eq!((offsets.top, offsets.left), (Px(10.0), Px(11.0)));
        assert_eq!((offsets.bottom, offsets.right), (Px(790.0), Px(989.0)));
    }
}
