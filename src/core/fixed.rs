//! Sign-Magnitude Q16.16 Fixed-Point Encoding
//!
//! This module defines [`FixedValue`] and everything needed to build one.
//! All operations use integer arithmetic only; floats are accepted as an
//! input source and converted bit by bit without inspecting their layout.
//!
//! ## Format: sign-magnitude Q16.16
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Packed Layout (to_bits / from_bits)                        │
//! ├─────────────────────────────────────────────────────────────┤
//! │  [S][IIIIIIIIIIIIIII][FFFFFFFFFFFFFFFF]                     │
//! │   │  └── 15 bits ───┘└──── 16 bits ───┘                     │
//! │   └─ Sign bit (1 = negative)                                │
//! │                                                             │
//! │  Magnitude: 31 bits, wraps modulo 2^31                      │
//! │  Range: -32767.99998 to +32767.99998 (approx)               │
//! │  Precision: 1/65536 ≈ 0.000015 units                        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! In memory the sign and magnitude are two separate fields. The packed
//! form above is only produced on request, for hashing and the wire.
//!
//! ## Zero
//!
//! A zero magnitude always carries a positive sign. Every constructor
//! and operator normalises negative zero away.

use std::ops::Neg;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::FixedError;

/// Number of fractional bits (16)
pub const FRAC_BITS: u32 = 16;

/// 1.0 as a raw magnitude (65536)
pub const ONE_RAW: u32 = 1 << FRAC_BITS;

/// Mask selecting the fractional bits of a magnitude
pub const FRAC_MASK: u32 = ONE_RAW - 1;

/// Mask selecting the 31 magnitude bits
pub const MAGNITUDE_MASK: u32 = 0x7FFF_FFFF;

/// Sign bit position in the packed encoding
const SIGN_BIT: u32 = 1 << 31;

/// Default number of decimal digits when rendering
pub const DEFAULT_DECIMAL_DIGITS: usize = 4;

/// Q16.16 fixed-point number in sign-magnitude form.
///
/// The value is `(-1)^negative * magnitude / 65536`.
///
/// # Wrapping
///
/// Nothing on this type reports overflow. Constructors and operators
/// reduce the magnitude modulo 2^31, the same way fixed-width integers
/// wrap.
///
/// # Equality
///
/// `==` compares magnitudes only, so `+x == -x`. See [`crate::core::cmp`].
///
/// # Example
///
/// ```
/// use signmag_fixed::FixedValue;
///
/// let a = FixedValue::from_float(3.5);
/// let b = FixedValue::from_int(-2);
/// assert_eq!((a + b).to_string(), "1.5");
/// assert!((a * b).is_signed());
/// ```
#[derive(Clone, Copy, Default)]
pub struct FixedValue {
    pub(crate) magnitude: u32,
    pub(crate) negative: bool,
}

impl FixedValue {
    /// Zero
    pub const ZERO: Self = Self::from_raw_parts(0, false);

    /// One
    pub const ONE: Self = Self::from_raw_parts(ONE_RAW, false);

    /// One half
    pub const HALF: Self = Self::from_raw_parts(ONE_RAW >> 1, false);

    /// Largest positive value
    pub const MAX: Self = Self::from_raw_parts(MAGNITUDE_MASK, false);

    /// Most negative value
    pub const MIN: Self = Self::from_raw_parts(MAGNITUDE_MASK, true);

    /// Build from an already-scaled magnitude and a sign.
    ///
    /// The magnitude is masked to 31 bits and a zero result is made
    /// positive.
    #[inline]
    pub const fn from_raw_parts(magnitude: u32, negative: bool) -> Self {
        let magnitude = magnitude & MAGNITUDE_MASK;
        Self {
            magnitude,
            negative: negative && magnitude != 0,
        }
    }

    /// Create from an integer.
    ///
    /// Only `|n| < 32768` is exact. Larger inputs lose their high bits.
    ///
    /// ```
    /// use signmag_fixed::FixedValue;
    /// assert_eq!(FixedValue::from_int(-7).magnitude(), 7 << 16);
    /// ```
    #[inline]
    pub const fn from_int(n: i32) -> Self {
        Self::from_raw_parts(n.unsigned_abs() << FRAC_BITS, n < 0)
    }

    /// Create from a single-precision float.
    ///
    /// The fraction is extracted one binary digit at a time: double the
    /// remainder, take its integer part as the next bit (most significant
    /// first), subtract it back out. Exactly 16 digits are produced, so
    /// inputs with a longer binary expansion are truncated, not rounded.
    ///
    /// NaN becomes zero. Out-of-range inputs, infinities included, wrap.
    pub fn from_float(f: f32) -> Self {
        if f.is_nan() {
            return Self::ZERO;
        }

        let negative = f < 0.0;
        let abs = f.abs();
        let floor = abs.floor();

        // Saturating float cast then truncating int cast: high bits drop out
        // the same way from_int loses them.
        let whole = (floor as u64 as u32) << FRAC_BITS;

        let mut fraction: u32 = 0;
        let mut remainder = abs - floor;
        for bit in (0..FRAC_BITS).rev() {
            remainder *= 2.0;
            if remainder >= 1.0 {
                fraction |= 1 << bit;
                remainder -= 1.0;
            }
        }

        Self::from_raw_parts(whole.wrapping_add(fraction), negative)
    }

    /// Create from a float, rejecting NaN and infinities.
    pub fn try_from_float(f: f32) -> Result<Self, FixedError> {
        if !f.is_finite() {
            return Err(FixedError::NonFinite(f));
        }
        Ok(Self::from_float(f))
    }

    /// Decode the packed form: bit 31 is the sign, bits 0..=30 the magnitude.
    #[inline]
    pub const fn from_bits(bits: u32) -> Self {
        Self::from_raw_parts(bits & MAGNITUDE_MASK, bits & SIGN_BIT != 0)
    }

    /// Encode into the packed form.
    #[inline]
    pub const fn to_bits(self) -> u32 {
        if self.negative {
            self.magnitude | SIGN_BIT
        } else {
            self.magnitude
        }
    }

    /// Raw magnitude (absolute value scaled by 2^16).
    #[inline]
    pub const fn magnitude(self) -> u32 {
        self.magnitude
    }

    /// True if the sign bit is set.
    #[inline]
    pub const fn is_signed(self) -> bool {
        self.negative
    }

    /// True if the magnitude is zero.
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.magnitude == 0
    }

    /// Absolute value
    #[inline]
    pub const fn abs(self) -> Self {
        Self {
            magnitude: self.magnitude,
            negative: false,
        }
    }

    /// Integer part of the magnitude (high 15 bits).
    #[inline]
    pub const fn integer_part(self) -> u32 {
        self.magnitude >> FRAC_BITS
    }

    /// Fractional bits of the magnitude (low 16 bits).
    #[inline]
    pub const fn fraction_bits(self) -> u32 {
        self.magnitude & FRAC_MASK
    }

    /// Convert to float for display.
    ///
    /// # Warning
    /// Lossy. Never feed the result back into deterministic code.
    #[inline]
    pub fn to_f32(self) -> f32 {
        let value = self.magnitude as f32 / ONE_RAW as f32;
        if self.negative { -value } else { value }
    }
}

impl From<i32> for FixedValue {
    #[inline]
    fn from(n: i32) -> Self {
        Self::from_int(n)
    }
}

impl From<f32> for FixedValue {
    #[inline]
    fn from(f: f32) -> Self {
        Self::from_float(f)
    }
}

impl Neg for FixedValue {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::from_raw_parts(self.magnitude, !self.negative)
    }
}

// Serialized as the packed u32 so the wire form is exactly 4 bytes.
impl Serialize for FixedValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.to_bits())
    }
}

impl<'de> Deserialize<'de> for FixedValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        u32::deserialize(deserializer).map(Self::from_bits)
    }
}

// =============================================================================
// TESTS
// =============================================================================
