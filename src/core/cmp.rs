//! Sign-aware comparison.
//!
//! `<` and `>` order values by sign first, then by magnitude (reversed
//! when both are negative). `<=` and `>=` are the negations of the
//! opposite strict comparison.
//!
//! `==` and `!=` look at the magnitude only. A positive and a negative
//! value with the same magnitude compare equal *and* ordered:
//!
//! ```
//! use signmag_fixed::FixedValue;
//!
//! let pos = FixedValue::from_int(3);
//! let neg = FixedValue::from_int(-3);
//! assert!(pos == neg);
//! assert!(pos > neg);
//! assert!(!pos.same_value(neg));
//! ```
//!
//! Code that needs equality including the sign should use
//! [`FixedValue::same_value`] or [`FixedValue::total_cmp`].

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use super::fixed::FixedValue;

impl FixedValue {
    /// Strict sign-aware total order.
    ///
    /// Negative values sort before non-negative ones, and among negatives
    /// the larger magnitude sorts first. Unlike `partial_cmp`, `Equal`
    /// is returned only when sign and magnitude both match.
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (true, true) => other.magnitude.cmp(&self.magnitude),
            (false, false) => self.magnitude.cmp(&other.magnitude),
        }
    }

    /// Equality including the sign.
    #[inline]
    pub fn same_value(self, other: Self) -> bool {
        self.to_bits() == other.to_bits()
    }
}

/// Magnitude-only equality.
impl PartialEq for FixedValue {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.magnitude == other.magnitude
    }
}

// Must agree with `eq`, so the sign stays out of the hash.
impl Hash for FixedValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.magnitude.hash(state);
    }
}

impl PartialOrd for FixedValue {
    /// `Less` when `<` holds, `Greater` when `>` holds, else `Equal`.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.lt(other) {
            Some(Ordering::Less)
        } else if self.gt(other) {
            Some(Ordering::Greater)
        } else {
            Some(Ordering::Equal)
        }
    }

    #[inline]
    fn lt(&self, other: &Self) -> bool {
        match (self.negative, other.negative) {
            (true, false) => true,
            (true, true) => self.magnitude > other.magnitude,
            (false, false) => self.magnitude < other.magnitude,
            (false, true) => false,
        }
    }

    #[inline]
    fn gt(&self, other: &Self) -> bool {
        match (self.negative, other.negative) {
            (false, true) => true,
            (true, true) => self.magnitude < other.magnitude,
            (false, false) => self.magnitude > other.magnitude,
            (true, false) => false,
        }
    }

    #[inline]
    fn le(&self, other: &Self) -> bool {
        !self.gt(other)
    }

    #[inline]
    fn ge(&self, other: &Self) -> bool {
        !self.lt(other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fixed::MAGNITUDE_MASK;
    use proptest::prelude::*;
    use std::collections::hash_map::DefaultHasher;

    fn fx(f: f32) -> FixedValue {
        FixedValue::from_float(f)
    }

    #[test]
    fn test_lt_gt() {
        assert!(fx(1.0) < fx(2.0));
        assert!(fx(-2.0) < fx(1.0));
        assert!(fx(-2.0) < fx(-1.0));
        assert!(!(fx(-1.0) < fx(-2.0)));
        assert!(!(fx(1.0) < fx(-2.0)));

        assert!(fx(2.0) > fx(1.0));
        assert!(fx(1.0) > fx(-2.0));
        assert!(fx(-1.0) > fx(-2.0));
        assert!(!(fx(-2.0) > fx(1.0)));
    }

    #[test]
    fn test_le_ge() {
        assert!(fx(1.0) <= fx(1.0));
        assert!(fx(1.0) >= fx(1.0));
        assert!(fx(-3.0) <= fx(0.5));
        assert!(!(fx(0.5) <= fx(-3.0)));
        assert!(fx(0.5) >= fx(-3.0));
    }

    #[test]
    fn test_eq_ignores_sign() {
        assert!(fx(2.5) == fx(-2.5));
        assert!(fx(2.5) != fx(2.0));
        assert!(!fx(2.5).same_value(fx(-2.5)));
        assert!(fx(-2.5).same_value(fx(-2.5)));

        // Equal yet ordered
        assert!(fx(2.5) > fx(-2.5));
        assert!(fx(2.5) >= fx(-2.5));
        assert!(!(fx(2.5) <= fx(-2.5)));
    }

    #[test]
    fn test_hash_agrees_with_eq() {
        let hash = |v: FixedValue| {
            let mut h = DefaultHasher::new();
            v.hash(&mut h);
            h.finish()
        };
        assert_eq!(hash(fx(4.0)), hash(fx(-4.0)));
    }

    #[test]
    fn test_total_cmp() {
        let mut values = vec![fx(1.5), fx(-3.0), fx(0.0), fx(-0.5), fx(2.0), fx(-3.0)];
        values.sort_by(FixedValue::total_cmp);
        let rendered: Vec<String> = values.iter().map(|v| v.to_string()).collect();
        assert_eq!(rendered, ["-3.0", "-3.0", "-0.5", "0.0", "1.5", "2.0"]);

        assert_eq!(fx(2.0).total_cmp(&fx(-2.0)), Ordering::Greater);
        assert_eq!(fx(-2.0).total_cmp(&fx(-2.0)), Ordering::Equal);
    }

    fn any_value() -> impl Strategy<Value = FixedValue> {
        (0u32..=MAGNITUDE_MASK, any::<bool>())
            .prop_map(|(m, s)| FixedValue::from_raw_parts(m, s))
    }

    proptest! {
        #[test]
        fn prop_trichotomy(a in any_value(), b in any_value()) {
            let count = [a < b, a == b, a > b].iter().filter(|&&x| x).count();
            if a.magnitude() == b.magnitude() && a.is_signed() != b.is_signed() {
                // Magnitude-only equality plus a strict sign order
                prop_assert_eq!(count, 2);
            } else {
                prop_assert_eq!(count, 1);
            }
        }

        #[test]
        fn prop_lt_gt_mirror(a in any_value(), b in any_value()) {
            prop_assert_eq!(a < b, b > a);
            prop_assert_eq!(a <= b, !(a > b));
            prop_assert_eq!(a >= b, !(a < b));
        }

        #[test]
        fn prop_order_matches_floats(a in any_value(), b in any_value()) {
            prop_assert_eq!(a < b, a.to_f32() < b.to_f32() || (
                a.to_f32() == b.to_f32() && a.total_cmp(&b) == Ordering::Less
            ));
        }

        #[test]
        fn prop_total_cmp_matches_operators(a in any_value(), b in any_value()) {
            prop_assert_eq!(a.total_cmp(&b) == Ordering::Less, a < b);
            prop_assert_eq!(a.total_cmp(&b) == Ordering::Equal, a.same_value(b));
        }
    }
}
