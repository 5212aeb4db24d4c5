//! # signmag-fixed
//!
//! Deterministic sign-magnitude Q16.16 fixed-point arithmetic.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      SIGNMAG-FIXED                           │
//! ├─────────────────────────────────────────────────────────────┤
//! │  core/           - Deterministic primitives                  │
//! │  ├── fixed.rs    - Encoding and construction                 │
//! │  ├── arith.rs    - + - * / and compound forms                │
//! │  ├── cmp.rs      - Sign-aware comparison                     │
//! │  ├── format.rs   - Decimal rendering                         │
//! │  └── hash.rs     - Digests and wire encoding                 │
//! │                                                              │
//! │  sim.rs          - Deterministic trajectory demo             │
//! │  error.rs        - Errors for the checked entry points       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Silent behavior
//!
//! The operators never fail and never panic:
//! - Magnitudes wrap modulo 2^31 on overflow
//! - Division by a zero magnitude returns zero
//! - `==` and `!=` compare magnitudes only, so `+x == -x`
//!
//! Use [`FixedValue::checked_div`], [`FixedValue::try_from_float`] and
//! [`FixedValue::same_value`] where those defaults are not wanted.
//!
//! ## Determinism Guarantee
//!
//! Given identical inputs, every operation in `core/` produces
//! **identical results** on any platform. Float inputs are decoded one
//! binary digit at a time, never by reading their bit layout.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod core;
pub mod error;
pub mod sim;

// Re-export commonly used types
pub use crate::core::fixed::{FixedValue, DEFAULT_DECIMAL_DIGITS, FRAC_BITS, ONE_RAW};
pub use crate::core::format::FormatConfig;
pub use error::FixedError;
pub use sim::{SimConfig, SimReport};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
