//! Strongly-typed geometry primitives (zero-cost newtypes).
//!
//! Everything the placement engine measures or computes is expressed in CSS
//! pixels through [`Px`]; raw `f64` only crosses the boundary to the document.

use std::fmt;
use std::ops::{Add, Div, Index, Mul, Neg, Sub};

/// Error type for invalid numeric values
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericError {
    /// Value is NaN
    NaN,
    /// Value is infinite
    Infinite,
    /// Value is negative when non-negative required
    Negative,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::NaN => write!(f, "value is NaN"),
            NumericError::Infinite => write!(f, "value is infinite"),
            NumericError::Negative => write!(f, "value is negative"),
        }
    }
}

impl std::error::Error for NumericError {}

/// A length in CSS pixels
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Px(pub f64);

impl Px {
    pub const ZERO: Px = Px(0.0);

    /// Create a Px with validation (rejects NaN/infinite)
    #[inline]
    pub fn try_new(val: f64) -> Result<Px, NumericError> {
        if val.is_nan() {
            Err(NumericError::NaN)
        } else if val.is_infinite() {
            Err(NumericError::Infinite)
        } else {
            Ok(Px(val))
        }
    }

    /// Create a non-negative Px with validation
    #[inline]
    pub fn try_non_negative(val: f64) -> Result<Px, NumericError> {
        let px = Px::try_new(val)?;
        if px.0 < 0.0 {
            Err(NumericError::Negative)
        } else {
            Ok(px)
        }
    }

    #[inline]
    pub fn max(self, other: Px) -> Px {
        Px(self.0.max(other.0))
    }

    /// Round to the nearest whole pixel, halves toward positive infinity
    /// (the rounding browsers apply to layout offsets).
    #[inline]
    pub fn round(self) -> Px {
        Px((self.0 + 0.5).floor())
    }

    /// Get the raw value (use sparingly, prefer typed operations)
    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }
}

impl From<f64> for Px {
    fn from(val: f64) -> Px {
        Px(val)
    }
}

impl Add for Px {
    type Output = Px;
    fn add(self, rhs: Px) -> Px { Px(self.0 + rhs.0) }
}
impl Sub for Px {
    type Output = Px;
    fn sub(self, rhs: Px) -> Px { Px(self.0 - rhs.0) }
}
impl Mul<f64> for Px {
    type Output = Px;
    fn mul(self, rhs: f64) -> Px { Px(self.0 * rhs) }
}
impl Div<f64> for Px {
    type Output = Px;
    fn div(self, rhs: f64) -> Px { Px(self.0 / rhs) }
}
impl Neg for Px {
    type Output = Px;
    fn neg(self) -> Px { Px(-self.0) }
}

impl fmt::Display for Px {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One of the four box edges
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Top,
    Bottom,
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::Top => Side::Bottom,
            Side::Bottom => Side::Top,
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// The axis along which moving toward this side happens.
    pub fn axis(self) -> Axis {
        match self {
            Side::Top | Side::Bottom => Axis::Vertical,
            Side::Left | Side::Right => Axis::Horizontal,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Side::Top => "top",
            Side::Bottom => "bottom",
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Screen axis. `Vertical` runs top to bottom, `Horizontal` left to right.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    /// Edge where coordinates on this axis are smallest
    pub fn start(self) -> Side {
        match self {
            Axis::Horizontal => Side::Left,
            Axis::Vertical => Side::Top,
        }
    }

    /// Edge where coordinates on this axis are largest
    pub fn end(self) -> Side {
        match self {
            Axis::Horizontal => Side::Right,
            Axis::Vertical => Side::Bottom,
        }
    }

    pub fn cross(self) -> Axis {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }
}

/// 2D size
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Size {
    pub width: Px,
    pub height: Px,
}

impl Size {
    pub fn new(width: impl Into<Px>, height: impl Into<Px>) -> Self {
        Size { width: width.into(), height: height.into() }
    }

    /// Extent along an axis
    pub fn extent(&self, axis: Axis) -> Px {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }
}

/// An element box: size plus the position of its top-left corner.
///
/// Whether `top`/`left` are document-, viewport- or parent-relative depends on
/// the function that produced it.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Rect {
    pub width: Px,
    pub height: Px,
    pub top: Px,
    pub left: Px,
}

impl Rect {
    /// Create a rect; negative extents are clamped to zero. NaN is kept so
    /// that [`Rect::validated`] can still reject it.
    pub fn new(
        top: impl Into<Px>,
        left: impl Into<Px>,
        width: impl Into<Px>,
        height: impl Into<Px>,
    ) -> Self {
        Rect {
            width: clamp_extent(width.into()),
            height: clamp_extent(height.into()),
            top: top.into(),
            left: left.into(),
        }
    }

    /// The same rect if every field is finite and neither extent is negative.
    pub fn validated(self) -> Result<Self, NumericError> {
        Px::try_new(self.top.raw())?;
        Px::try_new(self.left.raw())?;
        Px::try_non_negative(self.width.raw())?;
        Px::try_non_negative(self.height.raw())?;
        Ok(self)
    }

    /// A zero-size rect anchored at a point
    pub fn point(top: impl Into<Px>, left: impl Into<Px>) -> Self {
        Rect::new(top, left, Px::ZERO, Px::ZERO)
    }

    pub fn bottom(&self) -> Px {
        self.top + self.height
    }

    pub fn right(&self) -> Px {
        self.left + self.width
    }

    pub fn size(&self) -> Size {
        Size { width: self.width, height: self.height }
    }

    /// Coordinate of the start edge on an axis (`left` or `top`)
    pub fn start(&self, axis: Axis) -> Px {
        match axis {
            Axis::Horizontal => self.left,
            Axis::Vertical => self.top,
        }
    }

    pub fn extent(&self, axis: Axis) -> Px {
        self.size().extent(axis)
    }

    /// Move the rect by the given amounts
    pub fn translate(self, dy: Px, dx: Px) -> Self {
        Rect { top: self.top + dy, left: self.left + dx, ..self }
    }

    /// Round all four fields to whole pixels
    pub fn round(self) -> Self {
        Rect {
            width: self.width.round(),
            height: self.height.round(),
            top: self.top.round(),
            left: self.left.round(),
        }
    }
}

fn clamp_extent(extent: Px) -> Px {
    if extent < Px::ZERO { Px::ZERO } else { extent }
}

/// Signed distance from each edge of an element to a reference boundary.
///
/// Positive values are free room; zero or negative values mean the element is
/// flush with, or already past, that edge of the boundary.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct EdgeOffsets {
    pub top: Px,
    pub bottom: Px,
    pub left: Px,
    pub right: Px,
}

impl EdgeOffsets {
    pub fn new(
        top: impl Into<Px>,
        bottom: impl Into<Px>,
        left: impl Into<Px>,
        right: impl Into<Px>,
    ) -> Self {
        EdgeOffsets {
            top: top.into(),
            bottom: bottom.into(),
            left: left.into(),
            right: right.into(),
        }
    }

    pub fn get(&self, side: Side) -> Px {
        match side {
            Side::Top => self.top,
            Side::Bottom => self.bottom,
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn round(self) -> Self {
        EdgeOffsets {
            top: self.top.round(),
            bottom: self.bottom.round(),
            left: self.left.round(),
            right: self.right.round(),
        }
    }
}

impl Index<Side> for EdgeOffsets {
    type Output = Px;

    fn index(&self, side: Side) -> &Px {
        match side {
            Side::Top => &self.top,
            Side::Bottom => &self.bottom,
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }
}
