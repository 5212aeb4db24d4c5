//! Core deterministic primitives.
//!
//! Everything here is pure integer arithmetic over [`FixedValue`] and
//! produces identical results on every platform.

pub mod fixed;
pub mod arith;
pub mod cmp;
pub mod format;
pub mod hash;

// Re-export core types
pub use fixed::{FixedValue, DEFAULT_DECIMAL_DIGITS, FRAC_BITS, MAGNITUDE_MASK, ONE_RAW};
pub use format::FormatConfig;
pub use hash::{digest_values, ValueDigest, ValueHasher};
