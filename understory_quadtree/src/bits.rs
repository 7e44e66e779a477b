// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Exact operations on the IEEE-754 bit layout of `f64`.
//!
//! Quadrant sizes must be exact powers of two. Deriving an exponent through
//! `log2` rounds right at the power-of-two boundaries, which would make quadrant
//! assignment depend on the platform's math library. Reading the exponent field
//! directly is exact everywhere.
//!
//! Layout: 1 sign bit, 11 exponent bits (bias 1023), 52 mantissa bits.

use crate::error::QuadtreeError;

const EXPONENT_BIAS: i32 = 1023;
const MANTISSA_BITS: u32 = 52;
const EXPONENT_MASK: u64 = 0x7ff;
const MANTISSA_MASK: u64 = (1 << MANTISSA_BITS) - 1;
const SIGN_MASK: u64 = 1 << 63;

/// Smallest exponent of a normal `f64`.
pub const MIN_EXPONENT: i32 = -1022;
/// Largest exponent of a finite `f64`.
pub const MAX_EXPONENT: i32 = 1023;

/// Exactly `2^exp`, built from its bit pattern.
///
/// Fails for exponents outside `[-1022, 1023]`; those have no normal `f64`.
pub fn power_of_two(exp: i32) -> Result<f64, QuadtreeError> {
    if !(MIN_EXPONENT..=MAX_EXPONENT).contains(&exp) {
        return Err(QuadtreeError::ExponentOutOfRange { exp });
    }
    #[allow(
        clippy::cast_sign_loss,
        reason = "The biased exponent is in 1..=2046 after the range check."
    )]
    let biased = (exp + EXPONENT_BIAS) as u64;
    Ok(f64::from_bits(biased << MANTISSA_BITS))
}

/// Unbiased base-2 exponent of `d`.
///
/// Zero and subnormals report `-1023`, infinities and NaN report `1024`.
pub fn exponent(d: f64) -> i32 {
    #[allow(
        clippy::cast_possible_truncation,
        reason = "The value is masked to 11 bits."
    )]
    let biased = ((d.to_bits() >> MANTISSA_BITS) & EXPONENT_MASK) as i32;
    biased - EXPONENT_BIAS
}

/// Largest power of two not exceeding `|d|`, with the sign of `d`.
pub fn truncate_to_power_of_two(d: f64) -> f64 {
    f64::from_bits(d.to_bits() & !MANTISSA_MASK)
}

/// Number of leading mantissa bits shared by `a` and `b` (0..=52).
///
/// Scans from the most significant mantissa bit and stops at the first
/// difference. Only meaningful when both values have the same exponent.
pub fn common_mantissa_bits(a: f64, b: f64) -> i32 {
    let diff = (a.to_bits() ^ b.to_bits()) & MANTISSA_MASK;
    if diff == 0 {
        return 52;
    }
    // The top 12 bits of `diff` are masked off, so this is in 0..=51.
    i32::try_from(diff.leading_zeros() - 12).unwrap_or(0)
}

/// The value formed by the sign, exponent and common leading mantissa bits of
/// `a` and `b`.
///
/// Returns `0.0` when either input is zero or when sign or exponent differ.
pub fn maximum_common_mantissa(a: f64, b: f64) -> f64 {
    if a == 0.0 || b == 0.0 {
        return 0.0;
    }
    if exponent(a) != exponent(b) || a.is_sign_negative() != b.is_sign_negative() {
        return 0.0;
    }
    #[allow(clippy::cast_sign_loss, reason = "Always in 0..=52.")]
    let low = MANTISSA_BITS - common_mantissa_bits(a, b) as u32;
    let mask = !((1_u64 << low) - 1);
    f64::from_bits(a.to_bits() & mask)
}

/// Absolute value by clearing the sign bit.
#[inline]
pub(crate) fn abs(d: f64) -> f64 {
    f64::from_bits(d.to_bits() & !SIGN_MASK)
}

/// Exact floor computed on the bit pattern, for `no_std` builds without `libm`.
pub(crate) fn floor(d: f64) -> f64 {
    let exp = exponent(d);
    if exp >= MANTISSA_BITS as i32 {
        // Already integral, or infinite/NaN.
        return d;
    }
    if exp < 0 {
        return if d > 0.0 {
            0.0
        } else if d < 0.0 {
            -1.0
        } else {
            d
        };
    }
    #[allow(clippy::cast_sign_loss, reason = "exp is in 0..52 here.")]
    let frac_mask = (1_u64 << (MANTISSA_BITS - exp as u32)) - 1;
    let bits = d.to_bits();
    if bits & frac_mask == 0 {
        return d;
    }
    let truncated = f64::from_bits(bits & !frac_mask);
    if d < 0.0 { truncated - 1.0 } else { truncated }
}
