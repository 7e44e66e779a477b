// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Detection of intervals too narrow to subdivide.

use crate::bits;

/// Binary exponent of `width / magnitude` at or below which an interval counts
/// as zero width.
///
/// A double carries 52 mantissa bits; stopping at -50 keeps a couple of bits of
/// slack so that a midpoint strictly inside the interval still exists.
pub const MIN_BINARY_EXPONENT: i32 = -50;

/// Whether `[min, max]` is too narrow, relative to its magnitude, to be split
/// at an exactly representable midpoint.
///
/// Subdividing such an interval would never converge, so the tree files these
/// at the deepest existing node instead of creating new ones.
pub fn is_zero_width(min: f64, max: f64) -> bool {
    let width = max - min;
    if width == 0.0 {
        return true;
    }
    let max_abs = bits::abs(min).max(bits::abs(max));
    let scaled = width / max_abs;
    bits::exponent(scaled) <= MIN_BINARY_EXPONENT
}
