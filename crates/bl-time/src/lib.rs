//! # bl-time
//!
//! Billing cycle, recurrence period, and payment schedule types.
//!
//! The central type is [`BillingCycle`]: a recurrence unit, a frequency
//! multiplier, and an optional anniversary date, with operations for
//! ordering cycles by approximate length and for computing payment dates
//! by calendar-correct date shifting. Calendar dates are
//! [`chrono::NaiveDate`] values supplied by the caller.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `BillingCycle` — the recurring billing period value object.
pub mod billing_cycle;

/// `Period` — the recurrence unit of a billing cycle.
pub mod period;

/// `PaymentSchedule` — an ordered sequence of upcoming payment dates.
pub mod schedule;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use billing_cycle::{BillingCycle, BillingCycleBuilder, ShiftDirection};
pub use period::Period;
pub use schedule::PaymentSchedule;
