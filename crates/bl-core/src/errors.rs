//! Error types for billing-logic.
//!
//! All failures in the workspace are synchronous and reported to the caller
//! through a single `thiserror`-derived enum — there is nothing transient to
//! retry in pure calendar computation, and nothing is swallowed internally.
//! Callers decide whether to surface, log, or map an error to a
//! domain-specific billing error upstream.

use thiserror::Error;

/// The top-level error type used throughout billing-logic.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A period name did not match any recognized recurrence unit.
    #[error("unrecognized billing period: {0:?}")]
    InvalidPeriod(String),

    /// A billing cycle was configured with a non-positive frequency.
    #[error("frequency must be positive, got {0}")]
    InvalidFrequency(u32),

    /// A date-shift operation was invoked on a cycle with no anniversary.
    #[error("billing cycle has no anniversary date")]
    MissingAnniversary,

    /// The cycle's period has no defined date-shift behavior.
    #[error("no date shift is defined for {0} periods")]
    UnsupportedShift(String),

    /// Date arithmetic left the representable calendar range.
    #[error("date arithmetic out of range: {0}")]
    DateOutOfRange(String),
}

/// Shorthand `Result` type used throughout billing-logic.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return early with the given error unless a precondition holds.
///
/// # Example
/// ```
/// use bl_core::ensure;
/// use bl_core::errors::Error;
///
/// fn frequency(n: u32) -> bl_core::errors::Result<u32> {
///     ensure!(n > 0, Error::InvalidFrequency(n));
///     Ok(n)
/// }
/// assert!(frequency(1).is_ok());
/// assert!(frequency(0).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $err:expr) => {
        if !$cond {
            return Err($err);
        }
    };
}
