//! # pn-core
//!
//! Core error definitions and input parsers for prenatal-rs.
//!
//! This crate provides the foundational building blocks shared across the
//! other crates in the workspace: the error hierarchy with its `ensure!`
//! macro, the lazily-initialised singleton helper, and the parsers
//! that turn user-supplied strings into raw calendar fields.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` macro.
pub mod errors;

/// Design patterns: singleton.
pub mod patterns;

/// Miscellaneous utilities.
pub mod utilities;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Signed day count used by date arithmetic.
pub type Days = i32;

/// Whole gestational weeks.
pub type Weeks = u32;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
