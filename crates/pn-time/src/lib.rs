//! # pn-time
//!
//! Civil dates, Easter, Spanish public holidays and working-day
//! adjustment.
//!
//! Data flows one way: a year gives a holiday set
//! ([`holidays_for_year`], cached by [`cached_holidays`]), holiday sets are
//! combined into a [`HolidayCalendar`], and the calendar classifies dates and
//! moves them onto working days ([`next_business_day`]).

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Business-day adjustment conventions.
pub mod business_day_convention;

/// Calendar trait and the weekends-only calendar.
pub mod calendar;

/// Concrete calendar implementations.
pub mod calendars;

/// `Date` type.
pub mod date;

/// Gregorian Easter Sunday.
pub mod easter;

/// Process-wide per-year holiday cache.
pub mod holiday_cache;

/// `Month` — month of the year.
pub mod month;

/// `Weekday` — day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use business_day_convention::BusinessDayConvention;
pub use calendar::{is_non_working_day, next_business_day, Calendar, WeekendsOnly};
pub use calendars::holiday_calendar::HolidayCalendar;
pub use calendars::spain::{holidays_for_year, HolidaySet, Spain, SpanishHoliday};
pub use date::Date;
pub use easter::easter_sunday;
pub use holiday_cache::cached_holidays;
pub use month::Month;
pub use weekday::Weekday;
