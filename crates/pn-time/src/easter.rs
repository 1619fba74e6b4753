//! Gregorian Easter Sunday.
//!
//! Uses the Meeus/Jones/Butcher congruences (the "anonymous Gregorian
//! algorithm").  All divisions are integer divisions on non-negative
//! operands, so truncation and floor agree.

use crate::date::Date;

/// Return the date of Easter Sunday in `year`.
///
/// Exact for every Gregorian year.  For years outside
/// [`Date::MIN_YEAR`]..=[`Date::MAX_YEAR`] the result is still the right
/// day, but checked arithmetic on it will refuse to move.
///
/// # Example
/// ```
/// use pn_time::{easter_sunday, Date};
/// assert_eq!(easter_sunday(2024), Date::from_ymd(2024, 3, 31).unwrap());
/// ```
pub fn easter_sunday(year: u16) -> Date {
    let (month, day) = easter_month_day(year);
    Date::from_ymd_unchecked(year, month, day)
}

/// Return the day of the year (1-based) of Easter Sunday in `year`.
///
/// Rule-based calendars compare this against [`Date::day_of_year`].
pub fn easter_sunday_day_of_year(year: u16) -> u16 {
    easter_sunday(year).day_of_year()
}

fn easter_month_day(year: u16) -> (u8, u8) {
    let y = i32::from(year);
    let a = y % 19;
    let b = y / 100;
    let c = y % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let n = h + l - 7 * m + 114;
    ((n / 31) as u8, (n % 31 + 1) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weekday::Weekday;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn known_easter_sundays() {
        let known = [
            (1900, 4, 15),
            (1913, 3, 23),
            (1943, 4, 25),
            (2000, 4, 23),
            (2008, 3, 23),
            (2023, 4, 9),
            (2024, 3, 31),
            (2025, 4, 20),
            (2026, 4, 5),
            (2038, 4, 25),
            (2199, 4, 14),
        ];
        for (y, m, d) in known {
            assert_eq!(easter_sunday(y), date(y, m, d), "Easter {y}");
        }
    }

    #[test]
    fn every_supported_year_is_a_sunday_between_march_22_and_april_25() {
        for y in Date::MIN_YEAR..=Date::MAX_YEAR {
            let e = easter_sunday(y);
            assert_eq!(e.weekday(), Weekday::Sunday, "Easter {y} = {e}");
            assert!(e >= date(y, 3, 22) && e <= date(y, 4, 25), "Easter {y} = {e}");
        }
    }

    #[test]
    fn day_of_year() {
        // March 31 in a leap year: 31 + 29 + 31
        assert_eq!(easter_sunday_day_of_year(2024), 91);
        // April 9, 2023: 31 + 28 + 31 + 9
        assert_eq!(easter_sunday_day_of_year(2023), 99);
    }
}
