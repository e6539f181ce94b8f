//! Placement requests: which side of the host the target goes on, and how it
//! lines up along the other axis.

use std::fmt;

use crate::position::defaults;
use crate::types::{Axis, Side};

/// Alignment along the axis perpendicular to the primary side.
///
/// `Start` is the left edge on the horizontal axis and the top edge on the
/// vertical axis; `End` is the right or bottom edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Align {
    #[default]
    Center,
    Start,
    End,
}

impl Align {
    /// The other edge; `Center` has none and stays put.
    pub fn flipped(self) -> Align {
        match self {
            Align::Center => Align::Center,
            Align::Start => Align::End,
            Align::End => Align::Start,
        }
    }
}

/// Primary sides whose alignment runs horizontally
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VerticalSide {
    Top,
    Bottom,
}

/// Primary sides whose alignment runs vertically
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HorizontalSide {
    Left,
    Right,
}

/// A concrete placement. Each variant carries the alignment for its own cross
/// axis, so "top-top" or "left-right" cannot be expressed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Placement {
    /// Above or below the host, aligned horizontally
    Vertical { side: VerticalSide, align: Align },
    /// Left or right of the host, aligned vertically
    Horizontal { side: HorizontalSide, align: Align },
}

impl Default for Placement {
    fn default() -> Self {
        defaults::PLACEMENT
    }
}

impl Placement {
    pub fn top(align: Align) -> Self {
        Placement::Vertical { side: VerticalSide::Top, align }
    }

    pub fn bottom(align: Align) -> Self {
        Placement::Vertical { side: VerticalSide::Bottom, align }
    }

    pub fn left(align: Align) -> Self {
        Placement::Horizontal { side: HorizontalSide::Left, align }
    }

    pub fn right(align: Align) -> Self {
        Placement::Horizontal { side: HorizontalSide::Right, align }
    }

    /// Build a placement from a primary and secondary keyword.
    ///
    /// Unknown primaries become `top`; missing, unknown or wrong-axis
    /// secondaries become `center`.
    pub fn from_keywords(primary: &str, secondary: &str) -> Self {
        match primary {
            "top" => Placement::top(horizontal_align(secondary)),
            "bottom" => Placement::bottom(horizontal_align(secondary)),
            "left" => Placement::left(vertical_align(secondary)),
            "right" => Placement::right(vertical_align(secondary)),
            _ => Placement::top(horizontal_align(secondary)),
        }
    }

    /// The primary side
    pub fn side(self) -> Side {
        match self {
            Placement::Vertical { side: VerticalSide::Top, .. } => Side::Top,
            Placement::Vertical { side: VerticalSide::Bottom, .. } => Side::Bottom,
            Placement::Horizontal { side: HorizontalSide::Left, .. } => Side::Left,
            Placement::Horizontal { side: HorizontalSide::Right, .. } => Side::Right,
        }
    }

    pub fn align(self) -> Align {
        match self {
            Placement::Vertical { align, .. } | Placement::Horizontal { align, .. } => align,
        }
    }

    /// Axis the alignment runs along
    pub fn cross_axis(self) -> Axis {
        self.side().axis().cross()
    }

    /// Same alignment, opposite primary side
    pub fn flipped_side(self) -> Self {
        match self {
            Placement::Vertical { side, align } => Placement::Vertical {
                side: match side {
                    VerticalSide::Top => VerticalSide::Bottom,
                    VerticalSide::Bottom => VerticalSide::Top,
                },
                align,
            },
            Placement::Horizontal { side, align } => Placement::Horizontal {
                side: match side {
                    HorizontalSide::Left => HorizontalSide::Right,
                    HorizontalSide::Right => HorizontalSide::Left,
                },
                align,
            },
        }
    }

    /// Same primary side, different alignment
    pub fn with_align(self, align: Align) -> Self {
        match self {
            Placement::Vertical { side, .. } => Placement::Vertical { side, align },
            Placement::Horizontal { side, .. } => Placement::Horizontal { side, align },
        }
    }

    /// Keyword for the alignment, in the vocabulary of the cross axis
    fn align_keyword(self) -> &'static str {
        match (self.cross_axis(), self.align()) {
            (_, Align::Center) => "center",
            (axis, Align::Start) => axis.start().as_str(),
            (axis, Align::End) => axis.end().as_str(),
        }
    }
}

fn horizontal_align(keyword: &str) -> Align {
    match keyword {
        "left" => Align::Start,
        "right" => Align::End,
        _ => Align::Center,
    }
}

fn vertical_align(keyword: &str) -> Align {
    match keyword {
        "top" => Align::Start,
        "bottom" => Align::End,
        _ => Align::Center,
    }
}

/// Formats as a placement token: `"top"` for centered placements, otherwise
/// `"top-left"`, `"right-bottom"` and so on.
impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.align() {
            Align::Center => write!(f, "{}", self.side()),
            _ => write!(f, "{}-{}", self.side(), self.align_keyword()),
        }
    }
}

/// A parsed placement token
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct PlacementRequest {
    /// The resolver may substitute a better-fitting side or alignment
    pub auto: bool,
    pub placement: Placement,
}

impl PlacementRequest {
    pub fn new(placement: Placement) -> Self {
        PlacementRequest { auto: false, placement }
    }

    pub fn auto(placement: Placement) -> Self {
        PlacementRequest { auto: true, placement }
    }
}

impl fmt::Display for PlacementRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.auto {
            write!(f, "auto {}", self.placement)
        } else {
            write!(f, "{}", self.placement)
        }
    }
}
