//! Miscellaneous utilities.

/// Parsers for user-supplied date strings.
pub mod data_parsers;
