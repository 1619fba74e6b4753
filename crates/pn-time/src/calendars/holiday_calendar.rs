//! Holiday-set calendar — weekends plus an explicit set of holiday dates.
//!
//! This is the lookup structure the schedule generator consults: the union
//! of the Spanish holiday sets of every year a date search can reach.

use std::collections::HashSet;

use crate::calendar::Calendar;
use crate::calendars::spain::SpanishHoliday;
use crate::date::Date;
use crate::holiday_cache::cached_holidays;
use pn_core::ensure;
use pn_core::errors::Result;

/// A calendar whose non-working days are Saturdays, Sundays and a fixed
/// set of holiday dates.
#[derive(Debug, Clone)]
pub struct HolidayCalendar {
    name: String,
    holidays: HashSet<Date>,
}

impl HolidayCalendar {
    /// Spanish holidays of every year in `first_year..=last_year`, taken
    /// from the process-wide cache.
    ///
    /// # Errors
    /// Fails if `first_year > last_year` or either year is outside the
    /// supported date range.
    pub fn spanning(first_year: u16, last_year: u16) -> Result<Self> {
        ensure!(
            first_year <= last_year,
            "empty year span {first_year}..={last_year}"
        );
        let mut holidays = HashSet::with_capacity(
            SpanishHoliday::ALL.len() * usize::from(last_year - first_year + 1),
        );
        for year in first_year..=last_year {
            holidays.extend(cached_holidays(year)?.dates());
        }
        let name = if first_year == last_year {
            format!("Spain {first_year}")
        } else {
            format!("Spain {first_year}-{last_year}")
        };
        Ok(Self { name, holidays })
    }

    /// A calendar with the given holidays and no others.
    pub fn from_dates(name: impl Into<String>, dates: impl IntoIterator<Item = Date>) -> Self {
        Self {
            name: name.into(),
            holidays: dates.into_iter().collect(),
        }
    }

    /// Return `true` if `date` is one of the explicit holidays.
    pub fn contains(&self, date: Date) -> bool {
        self.holidays.contains(&date)
    }

    /// Return the number of holiday dates.
    pub fn holiday_count(&self) -> usize {
        self.holidays.len()
    }
}

impl Calendar for HolidayCalendar {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_business_day(&self, date: Date) -> bool {
        !self.is_weekend(date) && !self.holidays.contains(&date)
    }
}
