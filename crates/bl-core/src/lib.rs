//! # bl-core
//!
//! Core types and error definitions for billing-logic.
//!
//! This crate provides the building blocks shared across the workspace —
//! primitive type aliases, the error taxonomy, and the `ensure!` macro.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` macro.
pub mod errors;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Floating-point type used for periodicity (approximate day counts).
pub type Real = f64;

/// Signed day count between two calendar dates.
pub type Days = i64;
