//! Positioning entry points: measure the host, parse the token, resolve.

pub mod defaults;
pub mod geometry;
pub mod resolve;
pub mod scroll;
pub mod viewport;

use glam::DVec2;

use crate::dom::Document;
use crate::errors::PositionError;
use crate::log::debug;
use crate::parse::parse_placement;
use crate::types::{EdgeOffsets, Px, Rect};

use geometry::{bounding_box, relative_position, target_size};
use resolve::{TargetPosition, resolve};
use viewport::clearance;

/// Options for [`position_elements`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PositionOptions {
    /// The target is appended to the document body rather than next to the
    /// host: use document coordinates and viewport clearance.
    pub append_to_body: bool,
    /// Keep the target clear of the scroll container's padding
    pub include_padding: bool,
}

impl Default for PositionOptions {
    fn default() -> Self {
        PositionOptions {
            append_to_body: defaults::APPEND_TO_BODY,
            include_padding: defaults::INCLUDE_PADDING,
        }
    }
}

impl PositionOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append_to_body(mut self, append_to_body: bool) -> Self {
        self.append_to_body = append_to_body;
        self
    }

    pub fn include_padding(mut self, include_padding: bool) -> Self {
        self.include_padding = include_padding;
        self
    }
}

/// Host geometry handed to the resolver
#[derive(Clone, Copy, Debug, PartialEq)]
struct Anchor {
    rect: Rect,
    clearance: EdgeOffsets,
}

impl Anchor {
    fn element<D: Document>(
        doc: &D,
        host: D::Node,
        options: PositionOptions,
    ) -> Result<Self, PositionError> {
        let rect = if options.append_to_body {
            bounding_box(doc, host)?
        } else {
            relative_position(doc, host)?
        };
        let clearance = clearance(doc, host, options.append_to_body, options.include_padding)?;
        Ok(Anchor { rect, clearance })
    }

    fn pointer<D: Document>(doc: &D, pointer: DVec2) -> Result<Self, PositionError> {
        let x = Px::try_new(pointer.x).map_err(|e| PositionError::non_finite(pointer, e))?;
        let y = Px::try_new(pointer.y).map_err(|e| PositionError::non_finite(pointer, e))?;
        let viewport = doc.client_area(doc.root());
        Ok(Anchor {
            rect: Rect::point(y, x),
            clearance: EdgeOffsets {
                top: y,
                left: x,
                right: viewport.width - x,
                bottom: viewport.height - y,
            },
        })
    }

    fn place<D: Document>(
        self,
        doc: &D,
        target: D::Node,
        token: &str,
    ) -> Result<TargetPosition, PositionError> {
        let size = target_size(doc, target)?;
        let request = parse_placement(token);
        let position = resolve(&self.clearance, &self.rect, size, request);
        debug!(
            %request,
            resolved = %position.placement,
            top = %position.top,
            left = %position.left,
            "placed target"
        );
        Ok(position)
    }
}

/// Position `target` against `host`.
///
/// With [`PositionOptions::append_to_body`] the host is measured in document
/// coordinates and fit is judged against the viewport; otherwise it is
/// measured relative to its offset parent and fit is judged against its
/// scroll container.
pub fn position_elements<D: Document>(
    doc: &D,
    host: D::Node,
    target: D::Node,
    token: &str,
    options: PositionOptions,
) -> Result<TargetPosition, PositionError> {
    Anchor::element(doc, host, options)?.place(doc, target, token)
}

/// Position `target` against a viewport point, e.g. where a context menu was
/// requested. Fit is judged against the viewport.
pub fn position_element_at<D: Document>(
    doc: &D,
    pointer: DVec2,
    target: D::Node,
    token: &str,
) -> Result<TargetPosition, PositionError> {
    Anchor::pointer(doc, pointer)?.place(doc, target, token)
}
