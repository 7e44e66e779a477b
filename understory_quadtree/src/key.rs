// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Smallest aligned power-of-two quadrant containing a rectangle.

use crate::bits;
use crate::error::QuadtreeError;
use crate::types::{Point, Rect};

/// A square quadrant of side `2^level` whose lower-left corner is a multiple of
/// its side length.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct QuadKey {
    corner: Point,
    level: i32,
    bounds: Rect,
}

impl QuadKey {
    /// First guess for the level of the smallest quadrant that can hold `rect`.
    ///
    /// The quadrant side is the next power of two above the larger dimension.
    pub fn compute_level(rect: &Rect) -> i32 {
        let dim = rect.width().max(rect.height());
        bits::exponent(dim) + 1
    }

    /// Compute the smallest aligned quadrant that fully contains `rect`.
    ///
    /// Aligning the corner to a multiple of the side can push the far edge of
    /// `rect` out of the first guess, so the level grows until it fits. Fails
    /// with [`QuadtreeError::ExponentOutOfRange`] when no finite quadrant does.
    /// That includes every rectangle that crosses an axis through the origin
    /// and every rectangle whose quadrant would end beyond [`f64::MAX`].
    pub fn compute(rect: &Rect) -> Result<Self, QuadtreeError> {
        let mut level = Self::compute_level(rect);
        loop {
            let key = Self::at_level(rect, level)?;
            // An overflowed edge is infinite and would "contain" anything.
            if key.bounds.is_valid() && key.bounds.contains(rect) {
                return Ok(key);
            }
            level += 1;
        }
    }

    fn at_level(rect: &Rect, level: i32) -> Result<Self, QuadtreeError> {
        let size = bits::power_of_two(level)?;
        let x = bits::floor(rect.min_x / size) * size;
        let y = bits::floor(rect.min_y / size) * size;
        Ok(Self {
            corner: Point::new(x, y),
            level,
            bounds: Rect::new(x, y, x + size, y + size),
        })
    }

    /// Lower-left corner.
    pub fn corner(&self) -> Point {
        self.corner
    }

    /// Base-2 logarithm of the side length.
    pub fn level(&self) -> i32 {
        self.level
    }

    /// The quadrant as a rectangle.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Midpoint of the quadrant.
    pub fn center(&self) -> Point {
        self.bounds.center()
    }
}
