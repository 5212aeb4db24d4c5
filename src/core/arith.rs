//! Arithmetic over sign-magnitude values.
//!
//! Addition and subtraction emulate signed arithmetic with explicit
//! branches on sign and magnitude ordering. Multiplication uses a
//! shift-and-add loop over the right operand's fractional bits; division
//! widens to 64 bits.
//!
//! # Determinism
//! - Magnitudes wrap modulo 2^31, never panic
//! - Every partial product truncates toward zero
//! - Division by a zero magnitude returns zero (see [`FixedValue::checked_div`])

use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

use super::fixed::{FixedValue, FRAC_BITS, FRAC_MASK, MAGNITUDE_MASK};
use crate::error::FixedError;

// =============================================================================
// CORE OPERATIONS (on raw magnitudes, wrapping semantics)
// =============================================================================

/// Shift-and-add Q16.16 product of two magnitudes.
///
/// `lhs * integer_part(rhs)` is one direct multiply. Each set fraction bit
/// `b` of `rhs` (weight `2^(b-16)`) then adds `lhs >> (16 - b)`, from
/// bit 15 down to bit 0. Each term truncates on its own, so the result can
/// sit up to 16 raw units below [`widening_mul_magnitude`].
#[inline]
pub fn shift_add_mul_magnitude(lhs: u32, rhs: u32) -> u32 {
    let whole = rhs >> FRAC_BITS;
    let fract = rhs & FRAC_MASK;

    let mut acc = lhs.wrapping_mul(whole);
    for bit in (0..FRAC_BITS).rev() {
        if fract & (1 << bit) != 0 {
            acc = acc.wrapping_add(lhs >> (FRAC_BITS - bit));
        }
    }

    acc & MAGNITUDE_MASK
}

/// Widened Q16.16 product of two magnitudes: one 64-bit multiply, one shift.
#[inline]
pub fn widening_mul_magnitude(lhs: u32, rhs: u32) -> u32 {
    let wide = (lhs as u64) * (rhs as u64);
    ((wide >> FRAC_BITS) as u32) & MAGNITUDE_MASK
}

/// Q16.16 quotient of two magnitudes.
///
/// Pre-shifts the numerator to keep the scale. Returns 0 when `rhs` is 0.
#[inline]
pub fn div_magnitude(lhs: u32, rhs: u32) -> u32 {
    if rhs == 0 {
        return 0; // Deterministic: don't panic
    }
    let wide = (lhs as u64) << FRAC_BITS;
    ((wide / rhs as u64) as u32) & MAGNITUDE_MASK
}

impl FixedValue {
    /// Multiply with a single 64-bit product instead of the shift-and-add
    /// loop used by `*`.
    ///
    /// Never smaller than `self * rhs`, and at most 16 raw units larger.
    #[inline]
    pub fn widening_mul(self, rhs: Self) -> Self {
        Self::from_raw_parts(
            widening_mul_magnitude(self.magnitude, rhs.magnitude),
            self.negative ^ rhs.negative,
        )
    }

    /// Divide, failing on a zero-magnitude divisor instead of returning zero.
    #[inline]
    pub fn checked_div(self, rhs: Self) -> Result<Self, FixedError> {
        if rhs.is_zero() {
            return Err(FixedError::DivisionByZero);
        }
        Ok(self / rhs)
    }

    /// Smaller of two values under the sign-aware order.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        if other < self { other } else { self }
    }

    /// Larger of two values under the sign-aware order.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        if other > self { other } else { self }
    }

    /// Clamp to `[lo, hi]`.
    #[inline]
    pub fn clamp(self, lo: Self, hi: Self) -> Self {
        lo.max(hi.min(self))
    }
}

// =============================================================================
// OPERATORS
// =============================================================================

impl Add for FixedValue {
    type Output = Self;

    /// Signed addition over sign-magnitude pairs.
    ///
    /// The larger magnitude's sign wins; on a tie the left sign is kept.
    #[inline]
    fn add(self, rhs: Self) -> Self {
        if self.negative != rhs.negative {
            if rhs.magnitude > self.magnitude {
                Self::from_raw_parts(rhs.magnitude - self.magnitude, rhs.negative)
            } else {
                Self::from_raw_parts(self.magnitude - rhs.magnitude, self.negative)
            }
        } else {
            Self::from_raw_parts(self.magnitude.wrapping_add(rhs.magnitude), self.negative)
        }
    }
}

impl Sub for FixedValue {
    type Output = Self;

    /// Signed subtraction over sign-magnitude pairs.
    ///
    /// Same branch shape as addition with the right sign flipped: matching
    /// signs subtract magnitudes, differing signs add them.
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        if self.negative == rhs.negative {
            if rhs.magnitude > self.magnitude {
                Self::from_raw_parts(rhs.magnitude - self.magnitude, !rhs.negative)
            } else {
                Self::from_raw_parts(self.magnitude - rhs.magnitude, self.negative)
            }
        } else {
            Self::from_raw_parts(self.magnitude.wrapping_add(rhs.magnitude), self.negative)
        }
    }
}

impl Mul for FixedValue {
    type Output = Self;

    /// Shift-and-add product; sign is the XOR of the operand signs.
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::from_raw_parts(
            shift_add_mul_magnitude(self.magnitude, rhs.magnitude),
            self.negative ^ rhs.negative,
        )
    }
}

impl Div for FixedValue {
    type Output = Self;

    /// Widened quotient; sign is the XOR of the operand signs.
    ///
    /// A zero-magnitude divisor yields zero.
    #[inline]
    fn div(self, rhs: Self) -> Self {
        Self::from_raw_parts(
            div_magnitude(self.magnitude, rhs.magnitude),
            self.negative ^ rhs.negative,
        )
    }
}

impl AddAssign for FixedValue {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for FixedValue {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign for FixedValue {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl DivAssign for FixedValue {
    #[inline]
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

// =============================================================================
// TESTS
// =============================================================================
