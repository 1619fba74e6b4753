//! Spain calendar (national public holidays).
//!
//! Weekends and the following holidays are observed:
//! * New Year's Day (Jan 1)
//! * Epiphany (Jan 6)
//! * Maundy Thursday (Easter Sunday − 3)
//! * Good Friday (Easter Sunday − 2)
//! * Labour Day (May 1)
//! * Assumption of Mary (Aug 15)
//! * National Day (Oct 12)
//! * All Saints' Day (Nov 1)
//! * Constitution Day (Dec 6)
//! * Immaculate Conception (Dec 8)
//! * Christmas Day (Dec 25)
//!
//! Holidays falling on a weekend are not moved to the following Monday.

use std::collections::BTreeMap;

use crate::calendar::Calendar;
use crate::date::Date;
use crate::easter::{easter_sunday, easter_sunday_day_of_year};

/// A Spanish national public holiday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SpanishHoliday {
    /// January 1.
    NewYearsDay,
    /// January 6.
    Epiphany,
    /// Thursday before Easter Sunday.
    MaundyThursday,
    /// Friday before Easter Sunday.
    GoodFriday,
    /// May 1.
    LabourDay,
    /// August 15.
    Assumption,
    /// October 12.
    NationalDay,
    /// November 1.
    AllSaints,
    /// December 6.
    ConstitutionDay,
    /// December 8.
    ImmaculateConception,
    /// December 25.
    Christmas,
}

impl SpanishHoliday {
    /// Every holiday, in the order they fall within a year.
    pub const ALL: [SpanishHoliday; 11] = [
        SpanishHoliday::NewYearsDay,
        SpanishHoliday::Epiphany,
        SpanishHoliday::MaundyThursday,
        SpanishHoliday::GoodFriday,
        SpanishHoliday::LabourDay,
        SpanishHoliday::Assumption,
        SpanishHoliday::NationalDay,
        SpanishHoliday::AllSaints,
        SpanishHoliday::ConstitutionDay,
        SpanishHoliday::ImmaculateConception,
        SpanishHoliday::Christmas,
    ];

    /// English name of the holiday.
    pub fn name(&self) -> &'static str {
        match self {
            SpanishHoliday::NewYearsDay => "New Year's Day",
            SpanishHoliday::Epiphany => "Epiphany",
            SpanishHoliday::MaundyThursday => "Maundy Thursday",
            SpanishHoliday::GoodFriday => "Good Friday",
            SpanishHoliday::LabourDay => "Labour Day",
            SpanishHoliday::Assumption => "Assumption of Mary",
            SpanishHoliday::NationalDay => "National Day",
            SpanishHoliday::AllSaints => "All Saints' Day",
            SpanishHoliday::ConstitutionDay => "Constitution Day",
            SpanishHoliday::ImmaculateConception => "Immaculate Conception",
            SpanishHoliday::Christmas => "Christmas Day",
        }
    }

    /// `(month, day)` of a fixed-date holiday, `None` for the Easter-derived
    /// pair.
    pub fn fixed_month_day(&self) -> Option<(u8, u8)> {
        match self {
            SpanishHoliday::NewYearsDay => Some((1, 1)),
            SpanishHoliday::Epiphany => Some((1, 6)),
            SpanishHoliday::MaundyThursday | SpanishHoliday::GoodFriday => None,
            SpanishHoliday::LabourDay => Some((5, 1)),
            SpanishHoliday::Assumption => Some((8, 15)),
            SpanishHoliday::NationalDay => Some((10, 12)),
            SpanishHoliday::AllSaints => Some((11, 1)),
            SpanishHoliday::ConstitutionDay => Some((12, 6)),
            SpanishHoliday::ImmaculateConception => Some((12, 8)),
            SpanishHoliday::Christmas => Some((12, 25)),
        }
    }

    /// Offset in days from Easter Sunday of a movable holiday.
    fn easter_offset(&self) -> Option<i32> {
        match self {
            SpanishHoliday::MaundyThursday => Some(-3),
            SpanishHoliday::GoodFriday => Some(-2),
            _ => None,
        }
    }

    /// The date this holiday falls on in `year`.
    pub fn date_in(&self, year: u16) -> Date {
        match (self.fixed_month_day(), self.easter_offset()) {
            (Some((m, d)), _) => Date::from_ymd_unchecked(year, m, d),
            (None, Some(offset)) => easter_sunday(year).add_days_unchecked(offset),
            (None, None) => unreachable!("every holiday is fixed or Easter-relative"),
        }
    }

    /// Return the holiday falling on `date`, if any.
    pub fn on(date: Date) -> Option<SpanishHoliday> {
        let (_, m, d) = date.ymd();
        let dd = i32::from(date.day_of_year());
        let es = i32::from(easter_sunday_day_of_year(date.year()));
        Self::ALL.into_iter().find(|h| match (h.fixed_month_day(), h.easter_offset()) {
            (Some(md), _) => md == (m, d),
            (None, Some(offset)) => dd == es + offset,
            (None, None) => false,
        })
    }
}

impl std::fmt::Display for SpanishHoliday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The holidays of one calendar year.
///
/// Always holds exactly eleven distinct dates: the nine fixed-date holidays
/// plus Maundy Thursday and Good Friday.  Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidaySet {
    year: u16,
    holidays: BTreeMap<Date, SpanishHoliday>,
}

impl HolidaySet {
    /// The year these holidays belong to.
    pub fn year(&self) -> u16 {
        self.year
    }

    /// Number of holidays (always 11).
    pub fn len(&self) -> usize {
        self.holidays.len()
    }

    /// Return `true` if the set holds no holidays (never the case for a
    /// set built by [`holidays_for_year`]).
    pub fn is_empty(&self) -> bool {
        self.holidays.is_empty()
    }

    /// Return `true` if `date` is one of the holidays.
    pub fn contains(&self, date: Date) -> bool {
        self.holidays.contains_key(&date)
    }

    /// Return which holiday falls on `date`, if any.
    pub fn holiday(&self, date: Date) -> Option<SpanishHoliday> {
        self.holidays.get(&date).copied()
    }

    /// Iterate over `(date, holiday)` pairs in ascending date order.
    pub fn iter(&self) -> impl Iterator<Item = (Date, SpanishHoliday)> + '_ {
        self.holidays.iter().map(|(&d, &h)| (d, h))
    }

    /// Iterate over the holiday dates in ascending order.
    pub fn dates(&self) -> impl Iterator<Item = Date> + '_ {
        self.holidays.keys().copied()
    }
}

/// Build the set of Spanish national holidays of `year`.
///
/// # Example
/// ```
/// use pn_time::{holidays_for_year, Date};
/// let h = holidays_for_year(2024);
/// assert_eq!(h.len(), 11);
/// assert!(h.contains(Date::from_ymd(2024, 3, 29).unwrap())); // Good Friday
/// ```
pub fn holidays_for_year(year: u16) -> HolidaySet {
    HolidaySet {
        year,
        holidays: SpanishHoliday::ALL
            .into_iter()
            .map(|h| (h.date_in(year), h))
            .collect(),
    }
}

/// Rule-based Spain calendar.
///
/// Answers for any date without a precomputed holiday set.
#[derive(Debug, Clone, Copy, Default)]
pub struct Spain;

impl Calendar for Spain {
    fn name(&self) -> &str {
        "Spain"
    }

    fn is_business_day(&self, date: Date) -> bool {
        !self.is_weekend(date) && SpanishHoliday::on(date).is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn holidays_2024() {
        let expected = [
            date(2024, 1, 1),
            date(2024, 1, 6),
            date(2024, 3, 28),
            date(2024, 3, 29),
            date(2024, 5, 1),
            date(2024, 8, 15),
            date(2024, 10, 12),
            date(2024, 11, 1),
            date(2024, 12, 6),
            date(2024, 12, 8),
            date(2024, 12, 25),
        ];
        let h = holidays_for_year(2024);
        assert_eq!(h.year(), 2024);
        assert_eq!(h.dates().collect::<Vec<_>>(), expected);
    }

    #[test]
    fn easter_pair_2025() {
        // Easter Sunday 2025: April 20
        let h = holidays_for_year(2025);
        assert_eq!(h.holiday(date(2025, 4, 17)), Some(SpanishHoliday::MaundyThursday));
        assert_eq!(h.holiday(date(2025, 4, 18)), Some(SpanishHoliday::GoodFriday));
        assert_eq!(h.holiday(date(2025, 4, 21)), None); // Easter Monday is regional
    }

    #[test]
    fn every_supported_year_has_eleven_distinct_holidays() {
        for y in Date::MIN_YEAR..=Date::MAX_YEAR {
            let h = holidays_for_year(y);
            assert_eq!(h.len(), 11, "year {y}");
            assert!(h.dates().all(|d| d.year() == y));
        }
    }

    #[test]
    fn rule_based_calendar_agrees_with_holiday_set() {
        for y in [2023u16, 2024, 2025, 2026] {
            let h = holidays_for_year(y);
            let mut d = date(y, 1, 1);
            while d.year() == y {
                assert_eq!(SpanishHoliday::on(d), h.holiday(d), "{d}");
                assert_eq!(Spain.is_business_day(d), !d.weekday().is_weekend() && !h.contains(d));
                d += 1;
            }
        }
    }

    #[test]
    fn names() {
        assert_eq!(SpanishHoliday::Christmas.to_string(), "Christmas Day");
        assert_eq!(SpanishHoliday::ALL.len(), 11);
    }
}
