//! `Calendar` trait: the business-day classifier and resolver.
//!
//! A calendar knows which dates are working days and can move a date onto
//! one according to a [`BusinessDayConvention`].

use crate::business_day_convention::BusinessDayConvention;
use crate::date::Date;
use crate::weekday::Weekday;
use pn_core::errors::Result;

/// A working-day calendar.
pub trait Calendar: std::fmt::Debug + Send + Sync {
    /// Human-readable name (e.g. `"Spain"`).
    fn name(&self) -> &str;

    /// Return `true` if `date` is a working day in this calendar.
    fn is_business_day(&self, date: Date) -> bool;

    /// Return `true` if `date` is a non-working day (weekend or holiday).
    fn is_holiday(&self, date: Date) -> bool {
        !self.is_business_day(date)
    }

    /// Return `true` if `date` falls on a Saturday or Sunday.
    fn is_weekend(&self, date: Date) -> bool {
        matches!(date.weekday(), Weekday::Saturday | Weekday::Sunday)
    }

    /// Adjust `date` according to the given business-day convention.
    ///
    /// `Following` walks forward one day at a time while the date is a
    /// non-working day, so a working day comes back unchanged.  The walk
    /// does not care about year boundaries: the calendar must know the
    /// holidays of every year it can reach.
    ///
    /// # Errors
    /// Fails only if the walk leaves the supported date range.
    fn adjust(&self, date: Date, convention: BusinessDayConvention) -> Result<Date> {
        match convention {
            BusinessDayConvention::Unadjusted => Ok(date),
            BusinessDayConvention::Following => {
                let mut d = date;
                while self.is_holiday(d) {
                    d = d.add_days(1)?;
                }
                Ok(d)
            }
        }
    }
}

/// Return `true` if `date` is a Saturday, a Sunday, or a holiday of
/// `calendar`.
pub fn is_non_working_day<C: Calendar + ?Sized>(date: Date, calendar: &C) -> bool {
    calendar.is_holiday(date)
}

/// Return the earliest working day on or after `date`.
pub fn next_business_day<C: Calendar + ?Sized>(date: Date, calendar: &C) -> Result<Date> {
    calendar.adjust(date, BusinessDayConvention::Following)
}

/// A calendar that treats only Saturdays and Sundays as non-working days,
/// with no additional holidays.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeekendsOnly;

impl Calendar for WeekendsOnly {
    fn name(&self) -> &str {
        "Weekends Only"
    }

    fn is_business_day(&self, date: Date) -> bool {
        !self.is_weekend(date)
    }
}
