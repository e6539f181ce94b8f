//! The placement resolver.
//!
//! Pure arithmetic over values collected beforehand: clearance around the
//! host, the host box and the target size. Nothing here touches a document.
//!
//! Non-auto requests go straight to the base formulas. Auto requests first run
//! two independent passes, each applied at most once:
//!
//! 1. **Primary**: switch to the opposite side when the requested side is too
//!    small for the target *and* the opposite side is big enough. When both
//!    sides are too small the request is kept; flipping would not help.
//! 2. **Secondary**, on the cross axis of the (possibly flipped) side: move a
//!    centered target to an edge, or an edge-aligned target to the other
//!    edge, when the overhang does not fit where it is but fits after the
//!    move.
//!
//! The primary flip is greedy: it does not look at what the new side means for
//! the cross axis. Both passes read clearance around the host's own edges, so
//! the secondary pass measures the same thing whichever side was picked.

use crate::log::debug;
use crate::placement::{Align, Placement, PlacementRequest};
use crate::types::{Axis, EdgeOffsets, Px, Rect, Side, Size};

/// Where to draw the target, and the placement that produced it
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TargetPosition {
    pub top: Px,
    pub left: Px,
    /// Placement after auto-flipping; equals the request when nothing flipped
    pub placement: Placement,
}

/// Resolve a placement request to a target coordinate.
pub fn resolve(
    clearance: &EdgeOffsets,
    host: &Rect,
    target: Size,
    request: PlacementRequest,
) -> TargetPosition {
    let placement = if request.auto {
        let placement = flip_primary(clearance, target, request.placement);
        flip_secondary(clearance, host, target, placement)
    } else {
        request.placement
    };

    let (top, left) = anchor(host, target, placement);
    TargetPosition { top, left, placement }
}

/// Base formulas: the target's top-left corner for a fixed placement
fn anchor(host: &Rect, target: Size, placement: Placement) -> (Px, Px) {
    let main = match placement.side() {
        Side::Top => host.top - target.height,
        Side::Bottom => host.top + host.height,
        Side::Left => host.left - target.width,
        Side::Right => host.left + host.width,
    };
    let cross = align_on(placement.cross_axis(), host, target, placement.align());

    match placement.side().axis() {
        Axis::Vertical => (main, cross),
        Axis::Horizontal => (cross, main),
    }
}

fn align_on(axis: Axis, host: &Rect, target: Size, align: Align) -> Px {
    let start = host.start(axis);
    let host_dim = host.extent(axis);
    let target_dim = target.extent(axis);

    match align {
        Align::Center => start + host_dim / 2.0 - target_dim / 2.0,
        Align::Start => start,
        Align::End => start + host_dim - target_dim,
    }
}

fn flip_primary(clearance: &EdgeOffsets, target: Size, placement: Placement) -> Placement {
    let side = placement.side();
    let need = target.extent(side.axis());

    if clearance[side] < need && clearance[side.opposite()] >= need {
        let flipped = placement.flipped_side();
        debug!(from = %placement, to = %flipped, "primary side does not fit, flipping");
        flipped
    } else {
        placement
    }
}

fn flip_secondary(
    clearance: &EdgeOffsets,
    host: &Rect,
    target: Size,
    placement: Placement,
) -> Placement {
    let axis = placement.cross_axis();
    let start_room = clearance[axis.start()];
    let end_room = clearance[axis.end()];
    let excess = target.extent(axis) - host.extent(axis);

    let align = match placement.align() {
        Align::Center => {
            let overflow = (excess / 2.0).max(Px::ZERO);
            if overflow <= Px::ZERO {
                Align::Center
            } else if start_room < overflow && end_room >= excess {
                Align::Start
            } else if end_room < overflow && start_room >= excess {
                Align::End
            } else {
                Align::Center
            }
        }
        edge => {
            let overhang = excess.max(Px::ZERO);
            // Start-aligned targets hang past the end edge, and vice versa
            let (hang_room, other_room) = match edge {
                Align::Start => (end_room, start_room),
                _ => (start_room, end_room),
            };
            if overhang > Px::ZERO && hang_room < overhang && other_room >= overhang {
                edge.flipped()
            } else {
                edge
            }
        }
    };

    if align != placement.align() {
        debug!(
            from = %placement,
            to = %placement.with_align(align),
            "alignment does not fit, flipping"
        );
    }
    placement.with_align(align)
}
