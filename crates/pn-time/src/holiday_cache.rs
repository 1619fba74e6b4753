//! Process-wide cache of Spanish holiday sets, one slot per year.
//!
//! Each year's set is built on first request and kept for the rest of the
//! process.  Slots are write-once cells, so after initialisation readers on
//! any thread share the set without locking.  The cache never looks at the
//! wall clock: callers always name the year they want.

use std::sync::OnceLock;

use crate::calendars::spain::{holidays_for_year, HolidaySet};
use crate::date::Date;
use pn_core::define_singleton;
use pn_core::errors::{Error, Result};

struct HolidayCache {
    slots: Box<[OnceLock<HolidaySet>]>,
}

impl HolidayCache {
    fn new() -> Self {
        let years = usize::from(Date::MAX_YEAR - Date::MIN_YEAR) + 1;
        Self {
            slots: (0..years).map(|_| OnceLock::new()).collect(),
        }
    }
}

define_singleton!(HOLIDAY_CACHE, HolidayCache, HolidayCache::new());

/// Return the (cached) holiday set of `year`.
///
/// # Errors
/// Returns [`Error::Date`] if `year` is outside the supported date range.
pub fn cached_holidays(year: u16) -> Result<&'static HolidaySet> {
    if !(Date::MIN_YEAR..=Date::MAX_YEAR).contains(&year) {
        return Err(Error::Date(format!(
            "no holidays for year {year}: outside [{}, {}]",
            Date::MIN_YEAR,
            Date::MAX_YEAR
        )));
    }
    let slot = &HOLIDAY_CACHE.slots[usize::from(year - Date::MIN_YEAR)];
    Ok(slot.get_or_init(|| holidays_for_year(year)))
}
