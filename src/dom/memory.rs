//! An in-memory [`Document`] for headless layouts and tests.
//!
//! Boxes are supplied by the caller, already laid out and viewport-relative;
//! nothing here performs layout, and changing a scroll offset does not move
//! any box.

use std::collections::HashMap;

use glam::DVec2;
use indextree::{Arena, NodeId};

use super::{ClientArea, Document, parse_style};
use crate::types::{Px, Rect};

/// One element of a [`MemoryDocument`]
#[derive(Debug, Clone, Default)]
pub struct Element {
    pub name: String,
    /// Viewport-relative border box; `None` renders nothing (`display: none`)
    pub rect: Option<Rect>,
    pub styles: HashMap<String, String>,
    pub scroll: DVec2,
    /// Overrides the client area derived from `rect` and border widths
    pub client: Option<ClientArea>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Element { name: name.into(), ..Default::default() }
    }

    pub fn at(mut self, rect: Rect) -> Self {
        self.rect = Some(rect);
        self
    }

    pub fn style(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.styles.insert(property.into(), value.into());
        self
    }

    pub fn scrolled(mut self, offset: DVec2) -> Self {
        self.scroll = offset;
        self
    }

    pub fn client(mut self, area: ClientArea) -> Self {
        self.client = Some(area);
        self
    }

    fn border(&self, edge: &str) -> Px {
        self.styles
            .get(&format!("border-{edge}-width"))
            .map(|v| parse_style(v))
            .unwrap_or(Px::ZERO)
    }

    fn derived_client_area(&self) -> ClientArea {
        let Some(rect) = self.rect else {
            return ClientArea::default();
        };
        let (top, left) = (self.border("top"), self.border("left"));
        ClientArea {
            top,
            left,
            width: (rect.width - left - self.border("right")).max(Px::ZERO),
            height: (rect.height - top - self.border("bottom")).max(Px::ZERO),
        }
    }
}

/// Arena-backed document tree with a fixed-size viewport
#[derive(Debug)]
pub struct MemoryDocument {
    arena: Arena<Element>,
    root: NodeId,
    viewport: DVec2,
}

impl MemoryDocument {
    /// Create a document whose root fills a `width` × `height` viewport
    pub fn new(width: f64, height: f64) -> Self {
        let mut arena = Arena::new();
        let root = arena.new_node(Element::new("html").at(Rect::new(0.0, 0.0, width, height)));
        MemoryDocument { arena, root, viewport: DVec2::new(width, height) }
    }

    /// Viewport size as (width, height)
    pub fn viewport(&self) -> DVec2 {
        self.viewport
    }

    /// Append `element` as the last child of `parent`
    pub fn append(&mut self, parent: NodeId, element: Element) -> NodeId {
        let node = self.arena.new_node(element);
        parent.append(node, &mut self.arena);
        node
    }

    /// Remove a subtree from the document; its nodes stop being measurable
    pub fn detach(&mut self, node: NodeId) {
        node.detach(&mut self.arena);
    }

    pub fn element(&self, node: NodeId) -> Option<&Element> {
        self.arena.get(node).map(|n| n.get())
    }

    pub fn element_mut(&mut self, node: NodeId) -> Option<&mut Element> {
        self.arena.get_mut(node).map(|n| n.get_mut())
    }

    /// Scroll the page (the root's scroll offset)
    pub fn scroll_page(&mut self, offset: DVec2) {
        if let Some(root) = self.element_mut(self.root) {
            root.scroll = offset;
        }
    }

    /// Find the first element with the given name
    pub fn find(&self, name: &str) -> Option<NodeId> {
        self.root
            .descendants(&self.arena)
            .find(|&id| self.element(id).is_some_and(|e| e.name == name))
    }

    fn is_attached(&self, node: NodeId) -> bool {
        node.ancestors(&self.arena).any(|id| id == self.root)
    }
}

impl Document for MemoryDocument {
    type Node = NodeId;

    fn root(&self) -> NodeId {
        self.root
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.arena.get(node)?.parent()
    }

    fn client_rect(&self, node: NodeId) -> Option<Rect> {
        if !self.is_attached(node) {
            return None;
        }
        let element = self.element(node)?;
        let rect = element.rect?;
        if node == self.root {
            // The root box scrolls with the page
            return Some(rect.translate(Px(-element.scroll.y), Px(-element.scroll.x)));
        }
        Some(rect)
    }

    fn client_area(&self, node: NodeId) -> ClientArea {
        if node == self.root {
            let viewport = self.viewport();
            return ClientArea {
                top: Px::ZERO,
                left: Px::ZERO,
                width: Px(viewport.x),
                height: Px(viewport.y),
            };
        }
        self.element(node)
            .map(|e| e.client.unwrap_or_else(|| e.derived_client_area()))
            .unwrap_or_default()
    }

    fn scroll_offset(&self, node: NodeId) -> DVec2 {
        self.element(node).map(|e| e.scroll).unwrap_or(DVec2::ZERO)
    }

    fn computed_style(&self, node: NodeId, property: &str) -> String {
        self.element(node)
            .and_then(|e| e.styles.get(property).cloned())
            .unwrap_or_default()
    }
}
