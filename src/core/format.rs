//! Decimal rendering.
//!
//! Values render as `[-]whole.fraction`. Fraction digits are produced by
//! repeated multiplication by ten, so they are exact truncations of the
//! binary fraction, never rounded.

use std::fmt::{self, Write as _};

use serde::{Deserialize, Serialize};

use super::fixed::{FixedValue, DEFAULT_DECIMAL_DIGITS, FRAC_BITS, FRAC_MASK};

/// Rendering settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    /// Maximum number of fraction digits
    pub digits: usize,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            digits: DEFAULT_DECIMAL_DIGITS,
        }
    }
}

impl FormatConfig {
    /// Render a value with these settings.
    pub fn render(&self, value: FixedValue) -> String {
        value.to_decimal_string(self.digits)
    }
}

impl FixedValue {
    /// Render as `[-]whole.fraction` with at most `digits` fraction digits.
    ///
    /// Digits stop early once the remaining fraction is zero, so no
    /// trailing zeros are printed. A value with no fractional bits prints
    /// a single `0` after the point.
    ///
    /// ```
    /// use signmag_fixed::FixedValue;
    ///
    /// assert_eq!(FixedValue::from_float(-2.25).to_decimal_string(4), "-2.25");
    /// assert_eq!(FixedValue::from_float(0.1).to_decimal_string(4), "0.0999");
    /// assert_eq!(FixedValue::from_int(7).to_decimal_string(0), "7.0");
    /// ```
    pub fn to_decimal_string(self, digits: usize) -> String {
        let whole = self.integer_part();
        let mut fraction = self.fraction_bits();

        let mut out = String::with_capacity(8 + digits);
        if self.negative {
            out.push('-');
        }
        out.push_str(&whole.to_string());
        out.push('.');

        if fraction == 0 {
            out.push('0');
            return out;
        }

        for _ in 0..digits {
            if fraction == 0 {
                break;
            }
            fraction *= 10;
            // fraction < 2^16, so the digit is always 0..=9
            out.push(char::from(b'0' + (fraction >> FRAC_BITS) as u8));
            fraction &= FRAC_MASK;
        }

        out
    }
}

impl fmt::Display for FixedValue {
    /// Uses the formatter precision as the digit count, default 4.
    /// Width, fill and alignment apply to the whole rendering.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = f.precision().unwrap_or(DEFAULT_DECIMAL_DIGITS);
        let rendered = self.to_decimal_string(digits);

        // Formatter::pad would cut the string down to `precision` chars.
        let Some(width) = f.width() else {
            return f.write_str(&rendered);
        };
        let len = rendered.chars().count();
        if len >= width {
            return f.write_str(&rendered);
        }

        let padding = width - len;
        let (pre, post) = match f.align() {
            Some(fmt::Alignment::Left) => (0, padding),
            Some(fmt::Alignment::Center) => (padding / 2, padding - padding / 2),
            Some(fmt::Alignment::Right) | None => (padding, 0),
        };
        let fill = f.fill();
        for _ in 0..pre {
            f.write_char(fill)?;
        }
        f.write_str(&rendered)?;
        for _ in 0..post {
            f.write_char(fill)?;
        }
        Ok(())
    }
}

impl fmt::Debug for FixedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "FixedValue({}, raw={:#010x})",
            self.to_decimal_string(DEFAULT_DECIMAL_DIGITS),
            self.to_bits()
        )
    }
}
