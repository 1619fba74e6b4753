//! Concrete calendar implementations.

/// Calendar over an explicit set of holiday dates.
pub mod holiday_calendar;

/// Spanish national holidays.
pub mod spain;
