//! Scroll container discovery

use crate::dom::{CssPosition, Document, overflow_values};
use crate::log::trace;

/// Whether `node` itself scrolls: any of its overflow values is `auto` or
/// `scroll` (or `hidden`, with `include_hidden`).
pub fn is_scrollable<D: Document>(doc: &D, node: D::Node, include_hidden: bool) -> bool {
    overflow_values(doc, node)
        .into_iter()
        .any(|overflow| overflow.scrolls(include_hidden))
}

/// Nearest ancestor of `node` that scrolls, or the document root.
pub fn scroll_parent<D: Document>(doc: &D, node: D::Node, include_hidden: bool) -> D::Node {
    scroll_parent_with(doc, node, include_hidden, false)
}

/// [`scroll_parent`], optionally returning `node` itself when it scrolls.
///
/// An absolutely positioned node is clipped by the scroll containers of its
/// containing block, not of its DOM parents, so static ancestors below the
/// first positioned one are skipped. Fixed nodes always resolve to the root.
pub fn scroll_parent_with<D: Document>(
    doc: &D,
    node: D::Node,
    include_hidden: bool,
    include_self: bool,
) -> D::Node {
    let root = doc.root();
    if include_self && is_scrollable(doc, node, include_hidden) {
        return node;
    }

    let position = CssPosition::of(doc, node);
    if position == CssPosition::Fixed {
        return root;
    }
    let mut skip_static = position == CssPosition::Absolute;

    let mut current = doc.parent(node);
    while let Some(ancestor) = current {
        if ancestor == root {
            break;
        }
        if skip_static && CssPosition::of(doc, ancestor).is_positioned() {
            skip_static = false;
        }
        if !skip_static && is_scrollable(doc, ancestor, include_hidden) {
            trace!(?ancestor, "found scroll parent");
            return ancestor;
        }
        current = doc.parent(ancestor);
    }
    root
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::memory::{Element, MemoryDocument};

    #[test]
    fn scrollable_with_overflow_auto() {
        let mut doc = MemoryDocument::new(800.0, 600.0);
        let root = doc.root();
        let el = doc.append(root, Element::new("div").style("overflow", "auto"));
        assert!(is_scrollable(&doc, el, false));
    }

    #[test]
    fn not_scrollable_by_default() {
        let mut doc = MemoryDocument::new(800.0, 600.0);
        let root = doc.root();
        let el = doc.append(root, Element::new("div"));
        assert!(!is_scrollable(&doc, el, false));
        assert!(!is_scrollable(&doc, el, true));
    }

    #[test]
    fn hidden_needs_include_hidden() {
        let mut doc = MemoryDocument::new(800.0, 600.0);
        let root = doc.root();
        let el = doc.append(root, Element::new("div").style("overflow-y", "hidden"));
        assert!(!is_scrollable(&doc, el, false));
        assert!(is_scrollable(&doc, el, true));
    }

    #[test]
    fn two_value_overflow_shorthand() {
        let mut doc = MemoryDocument::new(800.0, 600.0);
        let root = doc.root();
        let el = doc.append(root, Element::new("div").style("overflow", "hidden scroll"));
        assert!(is_scrollable(&doc, el, false));
    }

    #[test]
    fn include_self_returns_scrollable_node() {
        let mut doc = MemoryDocument::new(800.0, 600.0);
        let root = doc.root();
        let outer = doc.append(root, Element::new("outer").style("overflow", "auto"));
        let el = doc.append(outer, Element::new("inner").style("overflow", "scroll"));

        assert_eq!(scroll_parent_with(&doc, el, false, true), el);
        assert_eq!(scroll_parent_with(&doc, el, false, false), outer);
    }

    #[test]
    fn child_of_root_resolves_to_root() {
        let mut doc = MemoryDocument::new(800.0, 600.0);
        let root = doc.root();
        let el = doc.append(root, Element::new("div"));
        assert_eq!(scroll_parent(&doc, el, false), root);
    }

    #[test]
    fn detached_node_resolves_to_root() {
        let mut doc = MemoryDocument::new(800.0, 600.0);
        let root = doc.root();
        let outer = doc.append(root, Element::new("outer"));
        let el = doc.append(outer, Element::new("inner"));
        doc.detach(outer);
        assert_eq!(scroll_parent(&doc, el, false), root);
    }
}
