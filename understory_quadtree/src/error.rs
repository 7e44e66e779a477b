// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error type shared by the key computation and the public tree API.

use crate::types::Rect;

/// Errors reported by [`Quadtree`](crate::Quadtree) and the quadrant math beneath it.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum QuadtreeError {
    /// A power of two was requested outside the normal `f64` exponent range.
    ///
    /// Surfaces when a rectangle is so large that no finite quadrant can hold it.
    #[error("exponent {exp} is outside the normal f64 range [-1022, 1023]")]
    ExponentOutOfRange {
        /// The requested exponent.
        exp: i32,
    },

    /// The rectangle has a non-finite coordinate or `min > max` on some axis.
    #[error("invalid rectangle {rect:?}: coordinates must be finite with min <= max")]
    InvalidRect {
        /// The rejected rectangle.
        rect: Rect,
    },
}
