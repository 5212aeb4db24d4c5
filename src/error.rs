//! Error type for the checked entry points.
//!
//! The operators themselves never fail; see the crate docs for their
//! wrapping and division-by-zero behavior.

use thiserror::Error;

/// Errors reported by `try_from_float` and `checked_div`.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum FixedError {
    /// Float input was NaN or infinite.
    #[error("non-finite float input: {0}")]
    NonFinite(f32),
    /// Divisor had a zero magnitude.
    #[error("division by zero")]
    DivisionByZero,
}
