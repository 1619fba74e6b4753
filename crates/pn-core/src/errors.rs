//! Error types for prenatal-rs.
//!
//! A single `thiserror`-derived enum covers every failure of the core
//! crates.  The `ensure!` macro defined here returns early with a
//! precondition error.

use thiserror::Error;

/// The top-level error type used throughout prenatal-rs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Precondition violated.
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Date-related error (out of range, nonexistent day, overflow).
    #[error("date error: {0}")]
    Date(String),

    /// Invalid argument, typically a malformed input string.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Shorthand `Result` type used throughout prenatal-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use pn_core::{ensure, errors::Error};
/// fn positive(x: i32) -> pn_core::errors::Result<i32> {
///     ensure!(x > 0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1).is_ok());
/// assert!(positive(-1).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checked_weeks(w: i32) -> Result<i32> {
        ensure!((0..=45).contains(&w), "week {w} outside [0, 45]");
        Ok(w)
    }

    #[test]
    fn ensure_passes_and_fails() {
        assert_eq!(checked_weeks(12), Ok(12));
        assert_eq!(
            checked_weeks(50),
            Err(Error::Precondition("week 50 outside [0, 45]".into()))
        );
    }

    #[test]
    fn display_messages() {
        assert_eq!(
            Error::Date("day 30 out of range".into()).to_string(),
            "date error: day 30 out of range"
        );
        assert_eq!(
            Error::InvalidArgument("empty".into()).to_string(),
            "invalid argument: empty"
        );
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync + std::error::Error>() {}
        assert_impl::<Error>();
    }
}
