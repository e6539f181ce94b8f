//! Placement engine for floating UI elements.
//!
//! Given a host element (or a pointer position), the size of a floating
//! target such as a tooltip, popover or dropdown, and a placement token like
//! `"auto bottom-left"`, compute the `top`/`left` coordinate the target should
//! be drawn at. With `auto`, a side or alignment that does not fit is swapped
//! for its opposite when, and only when, the opposite does fit.
//!
//! The document is reached through the [`Document`] trait; everything after
//! measurement is pure value arithmetic:
//!
//! ```
//! use perch::{EdgeOffsets, Rect, Size, parse_placement, resolve_placement};
//!
//! let host = Rect::new(100.0, 100.0, 20.0, 20.0);
//! let room = EdgeOffsets::new(10.0, 10.0, 10.0, 10.0);
//! let pos = resolve_placement(&room, &host, Size::new(10.0, 10.0), parse_placement("top"));
//! assert_eq!((pos.top.raw(), pos.left.raw()), (90.0, 105.0));
//! ```

use pest_derive::Parser;

pub mod dom;
pub mod errors;
pub mod log;
pub mod parse;
pub mod placement;
pub mod position;
pub mod types;

#[derive(Parser)]
#[grammar = "placement.pest"]
pub struct PlacementGrammar;

pub use dom::Document;
pub use errors::PositionError;
pub use parse::parse_placement;
pub use placement::{Align, HorizontalSide, Placement, PlacementRequest, VerticalSide};
pub use position::geometry::{bounding_box, offset_parent, relative_position};
pub use position::resolve::{TargetPosition, resolve as resolve_placement};
pub use position::scroll::{is_scrollable, scroll_parent};
pub use position::viewport::clearance;
pub use position::{PositionOptions, position_element_at, position_elements};
pub use types::{Axis, EdgeOffsets, NumericError, Px, Rect, Side, Size};
