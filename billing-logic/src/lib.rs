//! # billing-logic
//!
//! Billing-cycle periodicity and payment scheduling for recurring billing
//! systems.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `bl-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! billing-logic = "0.1"
//! ```
//!
//! ```rust
//! use billing_logic::time::{BillingCycle, Period};
//! use chrono::NaiveDate;
//!
//! let anniversary = NaiveDate::from_ymd_opt(2013, 5, 27).unwrap();
//! let cycle = BillingCycle::builder(Period::Month)
//!     .with_anniversary(anniversary)
//!     .build()
//!     .unwrap();
//! assert_eq!(
//!     cycle.next_payment_date().unwrap(),
//!     NaiveDate::from_ymd_opt(2013, 6, 27).unwrap()
//! );
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, and error definitions.
pub use bl_core as core;

/// Billing cycle, recurrence period, and payment schedule types.
pub use bl_time as time;
