//! `Date` type: a civil calendar date with no time-of-day component.
//!
//! Dates are stored as a serial number of days.  Serial 1 is January 1,
//! 1900; the proleptic Gregorian calendar is used throughout.
//!
//! # Valid range
//! The checked constructors accept 1900-01-01 to 2199-12-31.  Checked
//! arithmetic ([`Date::add_days`]) refuses to leave that range; the
//! operator impls (`date + n`) panic instead.

use std::str::FromStr;

use crate::month::Month;
use crate::weekday::Weekday;
use pn_core::errors::{Error, Result};
use pn_core::utilities::data_parsers::parse_iso_date;
use pn_core::Days;

/// A calendar date represented as a serial number.
///
/// Equality and ordering are by calendar value.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(i32);

// ── Constants ─────────────────────────────────────────────────────────────────

impl Date {
    /// First supported year.
    pub const MIN_YEAR: u16 = 1900;

    /// Last supported year.
    pub const MAX_YEAR: u16 = 2199;

    /// Minimum valid date: January 1, 1900.
    pub const MIN: Date = Date(1);

    /// Maximum valid date: December 31, 2199.
    pub const MAX: Date = Date(109_573);

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from a serial number.
    pub fn from_serial(serial: i32) -> Result<Self> {
        let d = Date(serial);
        if d < Self::MIN || d > Self::MAX {
            return Err(Error::Date(format!(
                "serial {serial} out of range [{}, {}]",
                Self::MIN.0,
                Self::MAX.0
            )));
        }
        Ok(d)
    }

    /// Create a date from year, month (1–12), and day-of-month (1–31).
    ///
    /// # Errors
    /// Returns [`Error::Date`] if the year is outside
    /// [`MIN_YEAR`](Self::MIN_YEAR)..=[`MAX_YEAR`](Self::MAX_YEAR) or the
    /// month/day pair does not exist (e.g. February 30).
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self> {
        if !(Self::MIN_YEAR..=Self::MAX_YEAR).contains(&year) {
            return Err(Error::Date(format!(
                "year {year} out of range [{}, {}]",
                Self::MIN_YEAR,
                Self::MAX_YEAR
            )));
        }
        if !(1..=12).contains(&month) {
            return Err(Error::Date(format!("month {month} out of range [1, 12]")));
        }
        let days_in = days_in_month(year, month);
        if day == 0 || day > days_in {
            return Err(Error::Date(format!(
                "day {day} out of range [1, {days_in}] for {year}-{month:02}"
            )));
        }
        Ok(Self::from_ymd_unchecked(year, month, day))
    }

    /// Create a date from a month/day pair known to exist.
    ///
    /// The year is not range-checked: the serial is exact for any year, but
    /// outside the supported range checked arithmetic on the result fails.
    pub(crate) fn from_ymd_unchecked(year: u16, month: u8, day: u8) -> Self {
        Date(days_from_civil(year as i32, month as i32, day as i32) - EPOCH)
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the serial number.
    pub fn serial(&self) -> i32 {
        self.0
    }

    /// Return the year.
    pub fn year(&self) -> u16 {
        civil_from_days(self.0 + EPOCH).0
    }

    /// Return the month (1–12).
    pub fn month(&self) -> u8 {
        civil_from_days(self.0 + EPOCH).1
    }

    /// Return the month as a [`Month`].
    pub fn month_of_year(&self) -> Month {
        Month::from_number(self.month()).expect("civil_from_days yields 1..=12")
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        civil_from_days(self.0 + EPOCH).2
    }

    /// Return `(year, month, day)` in one conversion.
    pub fn ymd(&self) -> (u16, u8, u8) {
        civil_from_days(self.0 + EPOCH)
    }

    /// Return the day of the year (1–366).
    pub fn day_of_year(&self) -> u16 {
        let jan1 = Self::from_ymd_unchecked(self.year(), 1, 1);
        (self.0 - jan1.0 + 1) as u16
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        // January 1, 1900 (serial 1) was a Monday.
        let w = ((self.0 - 1).rem_euclid(7) + 1) as u8;
        Weekday::from_ordinal(w).expect("rem_euclid always in 1..=7")
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days.  Returns an error if the result is out of range.
    pub fn add_days(self, n: Days) -> Result<Self> {
        self.0
            .checked_add(n)
            .ok_or_else(|| Error::Date(format!("{self} + {n} days overflows")))
            .and_then(Self::from_serial)
            .map_err(|_| Error::Date(format!("{self} + {n} days is out of range")))
    }

    /// Advance by `n` weeks.  Returns an error if the result is out of range.
    pub fn add_weeks(self, n: Days) -> Result<Self> {
        let days = n
            .checked_mul(7)
            .ok_or_else(|| Error::Date(format!("{n} weeks overflows")))?;
        self.add_days(days)
    }

    /// Advance by `n` days without the range check.
    ///
    /// Only for derived dates (Easter-relative holidays) whose year may lie
    /// outside the supported range.
    pub(crate) fn add_days_unchecked(self, n: Days) -> Self {
        Date(self.0 + n)
    }

    /// Return the number of calendar days between `self` and `other`.
    /// Positive if `other > self`.
    pub fn days_between(self, other: Date) -> Days {
        other.0 - self.0
    }
}

// ── Arithmetic operators ──────────────────────────────────────────────────────

impl std::ops::Add<Days> for Date {
    type Output = Self;
    fn add(self, rhs: Days) -> Self {
        self.add_days(rhs).expect("date addition overflow")
    }
}

impl std::ops::Sub<Days> for Date {
    type Output = Self;
    fn sub(self, rhs: Days) -> Self {
        self.add_days(-rhs).expect("date subtraction underflow")
    }
}

impl std::ops::Sub<Date> for Date {
    type Output = Days;
    fn sub(self, rhs: Date) -> Days {
        self.0 - rhs.0
    }
}

impl std::ops::AddAssign<Days> for Date {
    fn add_assign(&mut self, rhs: Days) {
        *self = *self + rhs;
    }
}

impl std::ops::SubAssign<Days> for Date {
    fn sub_assign(&mut self, rhs: Days) {
        *self = *self - rhs;
    }
}

// ── Text ──────────────────────────────────────────────────────────────────────

/// ISO 8601 calendar form, `YYYY-MM-DD`.
impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = self.ymd();
        write!(f, "{y:04}-{m:02}-{d:02}")
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Date({self})")
    }
}

impl FromStr for Date {
    type Err = Error;

    /// Parse `YYYY-MM-DD`.  The result is the civil date itself; there is no
    /// time of day that a daylight-saving shift could push into a
    /// neighbouring day.
    fn from_str(s: &str) -> Result<Self> {
        let (y, m, d) = parse_iso_date(s)?;
        Self::from_ymd(y, m, d)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Date {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Date {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(feature = "chrono")]
impl From<Date> for chrono::NaiveDate {
    fn from(d: Date) -> Self {
        let (y, m, day) = d.ymd();
        chrono::NaiveDate::from_ymd_opt(y as i32, m as u32, day as u32)
            .expect("supported range is inside chrono's range")
    }
}

#[cfg(feature = "chrono")]
impl TryFrom<chrono::NaiveDate> for Date {
    type Error = Error;

    fn try_from(d: chrono::NaiveDate) -> Result<Self> {
        use chrono::Datelike;
        let year = u16::try_from(d.year())
            .map_err(|_| Error::Date(format!("year {} out of range", d.year())))?;
        Self::from_ymd(year, d.month() as u8, d.day() as u8)
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Whether a given year is a leap year.
pub fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year.
pub fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!((1..=12).contains(&month));
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => unreachable!(),
    }
}

/// `days_from_civil(1899, 12, 31)`: the day before serial 1.
const EPOCH: i32 = -25_568;

/// Days since 1970-01-01 of a proleptic Gregorian date (H. Hinnant).
const fn days_from_civil(y: i32, m: i32, d: i32) -> i32 {
    let y = if m <= 2 { y - 1 } else { y };
    let era = (if y >= 0 { y } else { y - 399 }) / 400;
    let yoe = y - era * 400;
    let mp = if m > 2 { m - 3 } else { m + 9 };
    let doy = (153 * mp + 2) / 5 + d - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

/// Inverse of [`days_from_civil`].
fn civil_from_days(z: i32) -> (u16, u8, u8) {
    let z = z + 719_468;
    let era = (if z >= 0 { z } else { z - 146_096 }) / 146_097;
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = doy - (153 * mp + 2) / 5 + 1;
    let m = if mp < 10 { mp + 3 } else { mp - 9 };
    let y = yoe + era * 400 + i32::from(m <= 2);
    (y as u16, m as u8, d as u8)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epoch() {
        let d = Date::from_ymd(1900, 1, 1).unwrap();
        assert_eq!(d.serial(), 1);
        assert_eq!(d, Date::MIN);
        assert_eq!(Date::from_ymd(2199, 12, 31).unwrap(), Date::MAX);
        assert_eq!(days_from_civil(1899, 12, 31), EPOCH);
    }

    #[test]
    fn test_roundtrip() {
        let dates = [
            (1900, 1, 1),
            (1900, 2, 28),
            (1900, 3, 1),
            (2000, 2, 29), // leap
            (2100, 2, 28), // non-leap century
            (2023, 6, 15),
            (2024, 12, 31),
            (2199, 12, 31),
        ];
        for (y, m, d) in dates {
            let date = Date::from_ymd(y, m, d).unwrap();
            assert_eq!(date.ymd(), (y, m, d), "mismatch for {y}-{m:02}-{d:02}");
        }
    }

    #[test]
    fn test_invalid_fields() {
        assert!(Date::from_ymd(2023, 2, 29).is_err());
        assert!(Date::from_ymd(2024, 2, 30).is_err());
        assert!(Date::from_ymd(2024, 13, 1).is_err());
        assert!(Date::from_ymd(2024, 4, 31).is_err());
        assert!(Date::from_ymd(1899, 12, 31).is_err());
        assert!(Date::from_ymd(2200, 1, 1).is_err());
    }

    #[test]
    fn test_weekday() {
        // 2024-01-01 is a Monday
        let d = Date::from_ymd(2024, 1, 1).unwrap();
        assert_eq!(d.weekday(), Weekday::Monday);
        // 2024-01-06 is a Saturday
        let d2 = Date::from_ymd(2024, 1, 6).unwrap();
        assert_eq!(d2.weekday(), Weekday::Saturday);
        // 2000-02-29 is a Tuesday
        assert_eq!(Date::from_ymd(2000, 2, 29).unwrap().weekday(), Weekday::Tuesday);
    }

    #[test]
    fn test_day_of_year() {
        assert_eq!(Date::from_ymd(2024, 1, 1).unwrap().day_of_year(), 1);
        assert_eq!(Date::from_ymd(2024, 3, 1).unwrap().day_of_year(), 61);
        assert_eq!(Date::from_ymd(2023, 12, 31).unwrap().day_of_year(), 365);
    }

    #[test]
    fn test_arithmetic() {
        let d = Date::from_ymd(2023, 1, 1).unwrap();
        let d2 = d + 31;
        assert_eq!(d2.month(), 2);
        assert_eq!(d2.day_of_month(), 1);
        assert_eq!(Date::from_ymd(2023, 2, 1).unwrap() - d, 31);
        assert_eq!(d.add_weeks(8).unwrap(), Date::from_ymd(2023, 2, 26).unwrap());
        assert_eq!(d.days_between(d2), 31);
    }

    #[test]
    fn test_checked_arithmetic_at_the_edges() {
        assert!(Date::MAX.add_days(1).is_err());
        assert!(Date::MIN.add_days(-1).is_err());
        assert!(Date::MIN.add_days(i32::MAX).is_err());
        assert!(Date::MIN.add_weeks(i32::MAX).is_err());
    }

    #[test]
    fn test_display_and_parse() {
        let d = Date::from_ymd(2024, 3, 1).unwrap();
        assert_eq!(d.to_string(), "2024-03-01");
        assert_eq!(format!("{d:?}"), "Date(2024-03-01)");
        assert_eq!("2024-03-01".parse::<Date>().unwrap(), d);
        assert!("2024-02-30".parse::<Date>().is_err());
        assert!("01/03/2024".parse::<Date>().is_err());
    }
}
