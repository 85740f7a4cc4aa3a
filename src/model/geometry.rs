//! Geometry value types used by every layout computation.
//!
//! All values are `f32` points. Equality and hashing are structural over the
//! canonical bit pattern of each component, so `-0.0 == 0.0` and two values
//! that compare equal always hash identically. That is what makes these
//! types usable inside layout cache keys.

use serde::Deserialize;
use std::hash::{Hash, Hasher};

/// Canonical bit pattern of a float for equality and hashing.
///
/// Folds `-0.0` into `0.0` and every NaN into a single quiet NaN.
#[inline]
pub(crate) fn canonical_bits(value: f32) -> u32 {
    if value == 0.0 {
        0.0f32.to_bits()
    } else if value.is_nan() {
        f32::NAN.to_bits()
    } else {
        value.to_bits()
    }
}

/// Structural float equality matching [`canonical_bits`].
#[inline]
pub(crate) fn same_float(a: f32, b: f32) -> bool {
    canonical_bits(a) == canonical_bits(b)
}

/// Width and height in points.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct Size {
    /// Width in points.
    pub width: f32,
    /// Height in points.
    pub height: f32,
}

impl Size {
    /// The zero size.
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    /// Create a new size.
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Clamp both components to be non-negative.
    pub fn clamped(self) -> Self {
        Self::new(self.width.max(0.0), self.height.max(0.0))
    }

    /// `width / height`, or 0 when the height is not positive.
    pub fn aspect_ratio(&self) -> f32 {
        if self.height > 0.0 {
            self.width / self.height
        } else {
            0.0
        }
    }

    /// Round both components up to the pixel grid of `scale`.
    pub fn rounded(self, scale: DisplayScale) -> Self {
        Self::new(scale.round_up(self.width), scale.round_up(self.height))
    }

    /// True when both components are zero.
    pub fn is_zero(&self) -> bool {
        self.width == 0.0 && self.height == 0.0
    }
}

impl PartialEq for Size {
    fn eq(&self, other: &Self) -> bool {
        same_float(self.width, other.width) && same_float(self.height, other.height)
    }
}

impl Eq for Size {}

impl Hash for Size {
    fn hash<H: Hasher>(&self, state: &mut H) {
        canonical_bits(self.width).hash(state);
        canonical_bits(self.height).hash(state);
    }
}

/// A point in points.
#[derive(Debug, Clone, Copy, Default)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f32,
    /// Vertical coordinate.
    pub y: f32,
}

impl Point {
    /// The origin.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Create a new point.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Translate by `(dx, dy)`.
    pub fn offset_by(self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        same_float(self.x, other.x) && same_float(self.y, other.y)
    }
}

impl Eq for Point {}

/// An origin plus a size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rect {
    /// Top-left corner.
    pub origin: Point,
    /// Extent.
    pub size: Size,
}

impl Rect {
    /// The empty rect at the origin.
    pub const ZERO: Self = Self {
        origin: Point::ZERO,
        size: Size::ZERO,
    };

    /// Create a rect from an origin and a size.
    pub const fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// A rect at the origin with the given size.
    pub const fn from_size(size: Size) -> Self {
        Self::new(Point::ZERO, size)
    }

    /// Geometric center.
    pub fn center(&self) -> Point {
        Point::new(
            self.origin.x + self.size.width * 0.5,
            self.origin.y + self.size.height * 0.5,
        )
    }

    /// Right edge.
    pub fn max_x(&self) -> f32 {
        self.origin.x + self.size.width
    }

    /// Bottom edge.
    pub fn max_y(&self) -> f32 {
        self.origin.y + self.size.height
    }
}

/// Insets applied around bubble content.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct EdgeInsets {
    /// Top inset.
    pub top: f32,
    /// Left inset.
    pub left: f32,
    /// Bottom inset.
    pub bottom: f32,
    /// Right inset.
    pub right: f32,
}

impl EdgeInsets {
    /// No insets.
    pub const ZERO: Self = Self {
        top: 0.0,
        left: 0.0,
        bottom: 0.0,
        right: 0.0,
    };

    /// Create insets in top/left/bottom/right order.
    pub const fn new(top: f32, left: f32, bottom: f32, right: f32) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    /// `left + right`.
    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    /// `top + bottom`.
    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }
}

impl PartialEq for EdgeInsets {
    fn eq(&self, other: &Self) -> bool {
        same_float(self.top, other.top)
            && same_float(self.left, other.left)
            && same_float(self.bottom, other.bottom)
            && same_float(self.right, other.right)
    }
}

impl Eq for EdgeInsets {}

impl Hash for EdgeInsets {
    fn hash<H: Hasher>(&self, state: &mut H) {
        canonical_bits(self.top).hash(state);
        canonical_bits(self.left).hash(state);
        canonical_bits(self.bottom).hash(state);
        canonical_bits(self.right).hash(state);
    }
}

/// Pixels per point of the rendering surface.
///
/// Measured sizes are rounded up to this grid so that a cached size and a
/// freshly rendered one agree to the pixel.
#[derive(Debug, Clone, Copy)]
pub struct DisplayScale(f32);

impl DisplayScale {
    /// One pixel per point.
    pub const ONE: Self = Self(1.0);

    /// Create a scale. Non-finite or non-positive values fall back to 1.
    pub fn new(scale: f32) -> Self {
        if scale.is_finite() && scale > 0.0 {
            Self(scale)
        } else {
            Self::ONE
        }
    }

    /// Raw scale factor.
    pub fn get(&self) -> f32 {
        self.0
    }

    /// Round `value` up to the next pixel boundary.
    pub fn round_up(&self, value: f32) -> f32 {
        (value * self.0).ceil() / self.0
    }
}

impl Default for DisplayScale {
    fn default() -> Self {
        Self::ONE
    }
}

impl PartialEq for DisplayScale {
    fn eq(&self, other: &Self) -> bool {
        same_float(self.0, other.0)
    }
}

impl Eq for DisplayScale {}

impl Hash for DisplayScale {
    fn hash<H: Hasher>(&self, state: &mut H) {
        canonical_bits(self.0).hash(state);
    }
}
