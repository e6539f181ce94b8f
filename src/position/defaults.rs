//! Default settings for positioning calls

use crate::placement::{Align, Placement, VerticalSide};

/// Placement used when a token names nothing usable
pub const PLACEMENT: Placement =
    Placement::Vertical { side: VerticalSide::Top, align: Align::Center };

/// Position against the host's parent rather than the document body
pub const APPEND_TO_BODY: bool = false;

/// Keep targets clear of the scroll container's padding
pub const INCLUDE_PADDING: bool = true;

/// `overflow: hidden` ancestors are not scroll containers for clearance
pub const INCLUDE_HIDDEN_OVERFLOW: bool = false;
