// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Primitive geometry types and helpers.

use crate::error::QuadtreeError;

/// A 2D point. Used for quadrant corners and centers.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Point {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
}

impl Point {
    /// Create a new point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned bounding rectangle in 2D.
///
/// Zero width or height is legal. Intervals are closed on both ends, so two
/// rectangles that share only an edge intersect.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Rect {
    /// Minimum x (left)
    pub min_x: f64,
    /// Minimum y (bottom)
    pub min_y: f64,
    /// Maximum x (right)
    pub max_x: f64,
    /// Maximum y (top)
    pub max_y: f64,
}

impl Rect {
    /// Create a new rectangle from min/max corners.
    ///
    /// This does not validate; see [`Rect::try_new`].
    pub const fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Create a rectangle, rejecting non-finite coordinates and inverted axes.
    pub fn try_new(
        min_x: f64,
        min_y: f64,
        max_x: f64,
        max_y: f64,
    ) -> Result<Self, QuadtreeError> {
        let rect = Self::new(min_x, min_y, max_x, max_y);
        if rect.is_valid() {
            Ok(rect)
        } else {
            Err(QuadtreeError::InvalidRect { rect })
        }
    }

    /// Create a rectangle from origin and size.
    pub const fn from_xywh(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self {
            min_x: x,
            min_y: y,
            max_x: x + w,
            max_y: y + h,
        }
    }

    /// Create a zero-area rectangle at a single point.
    pub const fn from_point(x: f64, y: f64) -> Self {
        Self::new(x, y, x, y)
    }

    /// True if all coordinates are finite and `min <= max` on both axes.
    pub fn is_valid(&self) -> bool {
        self.min_x.is_finite()
            && self.min_y.is_finite()
            && self.max_x.is_finite()
            && self.max_y.is_finite()
            && self.min_x <= self.max_x
            && self.min_y <= self.max_y
    }

    /// Extent along x.
    #[inline]
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Extent along y.
    #[inline]
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Midpoint of the rectangle.
    pub fn center(&self) -> Point {
        Point::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    /// Whether `other` lies entirely inside this rectangle (edges included).
    pub fn contains(&self, other: &Self) -> bool {
        other.min_x >= self.min_x
            && other.max_x <= self.max_x
            && other.min_y >= self.min_y
            && other.max_y <= self.max_y
    }

    /// Whether the two rectangles share at least one point.
    ///
    /// Always false if either side contains NaN.
    pub fn intersects(&self, other: &Self) -> bool {
        other.min_x <= self.max_x
            && other.max_x >= self.min_x
            && other.min_y <= self.max_y
            && other.max_y >= self.min_y
    }

    /// Pad a zero width or height to `min_extent`, centered on the original
    /// coordinate. Other rectangles are returned unchanged.
    ///
    /// A padded point can still be zero width when `min_extent` is below the
    /// precision of its coordinates; the quadtree copes with that separately.
    pub fn ensure_extent(&self, min_extent: f64) -> Self {
        let mut r = *self;
        if r.min_x == r.max_x {
            r.min_x -= min_extent / 2.0;
            r.max_x += min_extent / 2.0;
        }
        if r.min_y == r.max_y {
            r.min_y -= min_extent / 2.0;
            r.max_y += min_extent / 2.0;
        }
        r
    }

    /// Smallest rectangle covering both.
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }
}

#[cfg(feature = "kurbo")]
impl From<kurbo::Rect> for Rect {
    fn from(r: kurbo::Rect) -> Self {
        Self::new(r.min_x(), r.min_y(), r.max_x(), r.max_y())
    }
}

#[cfg(feature = "kurbo")]
impl From<Rect> for kurbo::Rect {
    fn from(r: Rect) -> Self {
        Self::new(r.min_x, r.min_y, r.max_x, r.max_y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_touching_intersect() {
        let a = Rect::new(0.0, 0.0, 1.0, 1.0);
        let b = Rect::new(1.0, 0.0, 2.0, 1.0);
        assert!(a.intersects(&b));
        assert!(!a.intersects(&Rect::new(1.5, 0.0, 2.0, 1.0)));
    }

    #[test]
    fn contains_is_closed() {
        let q = Rect::new(0.0, 0.0, 4.0, 4.0);
        assert!(q.contains(&Rect::new(0.0, 0.0, 4.0, 4.0)));
        assert!(q.contains(&Rect::from_point(4.0, 0.0)));
        assert!(!q.contains(&Rect::new(3.0, 3.0, 4.5, 4.0)));
    }

    #[test]
    fn try_new_rejects_bad_input() {
        assert!(Rect::try_new(0.0, 0.0, 1.0, 1.0).is_ok());
        assert!(Rect::try_new(0.0, 0.0, 0.0, 0.0).is_ok());
        assert!(matches!(
            Rect::try_new(2.0, 0.0, 1.0, 1.0),
            Err(QuadtreeError::InvalidRect { .. })
        ));
        assert!(Rect::try_new(f64::NAN, 0.0, 1.0, 1.0).is_err());
        assert!(Rect::try_new(0.0, 0.0, f64::INFINITY, 1.0).is_err());
    }

    #[test]
    fn ensure_extent_pads_zero_axes() {
        let p = Rect::from_point(2.0, 3.0).ensure_extent(1.0);
        assert_eq!(p, Rect::new(1.5, 2.5, 2.5, 3.5));
        let line = Rect::new(2.0, 0.0, 2.0, 4.0).ensure_extent(0.5);
        assert_eq!(line, Rect::new(1.75, 0.0, 2.25, 4.0));
        let r = Rect::new(0.0, 0.0, 1.0, 1.0);
        assert_eq!(r.ensure_extent(1.0), r);
    }

    #[test]
    fn nan_intersects_nothing() {
        let a = Rect::new(0.0, 0.0, 1.0, 1.0);
        let n = Rect::new(f64::NAN, 0.0, 1.0, 1.0);
        assert!(!a.intersects(&n));
        assert!(!n.intersects(&a));
    }

    #[cfg(feature = "kurbo")]
    #[test]
    fn kurbo_conversion_normalizes() {
        let r: Rect = kurbo::Rect::new(4.0, 3.0, 1.0, 0.0).into();
        assert_eq!(r, Rect::new(1.0, 0.0, 4.0, 3.0));
        let back: kurbo::Rect = r.into();
        assert_eq!(back, kurbo::Rect::new(1.0, 0.0, 4.0, 3.0));
    }
}
