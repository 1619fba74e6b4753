//! Property tests for Easter, the holiday sets and the next-business-day
//! search.

use std::collections::HashSet;

use proptest::prelude::*;

use pn_time::calendar::Calendar;
use pn_time::{
    easter_sunday, holidays_for_year, is_non_working_day, next_business_day, Date,
    HolidayCalendar, Weekday,
};

fn any_year() -> impl Strategy<Value = u16> {
    Date::MIN_YEAR..=Date::MAX_YEAR
}

/// Any date at least a year before the end of the supported range.
fn any_date() -> impl Strategy<Value = Date> {
    (Date::MIN.serial()..=Date::MAX.serial() - 366).prop_map(|s| Date::from_serial(s).unwrap())
}

/// A date plus an arbitrary holiday set clustered around it.
fn date_with_holidays() -> impl Strategy<Value = (Date, HolidayCalendar)> {
    any_date().prop_flat_map(|d| {
        (Just(d), prop::collection::vec(0i32..40, 0..20)).prop_map(|(d, offsets)| {
            let cal = HolidayCalendar::from_dates("Arbitrary", offsets.into_iter().map(|o| d + o));
            (d, cal)
        })
    })
}

proptest! {
    #[test]
    fn easter_is_a_sunday_in_its_window(y in any_year()) {
        let e = easter_sunday(y);
        prop_assert_eq!(e.weekday(), Weekday::Sunday);
        prop_assert!(e >= Date::from_ymd(y, 3, 22).unwrap());
        prop_assert!(e <= Date::from_ymd(y, 4, 25).unwrap());
    }

    #[test]
    fn eleven_distinct_holidays(y in any_year()) {
        let h = holidays_for_year(y);
        let distinct: HashSet<Date> = h.dates().collect();
        prop_assert_eq!(h.len(), 11);
        prop_assert_eq!(distinct.len(), 11);
    }

    #[test]
    fn next_business_day_is_a_working_day((d, cal) in date_with_holidays()) {
        let n = next_business_day(d, &cal).unwrap();
        prop_assert!(n >= d);
        prop_assert!(!is_non_working_day(n, &cal));
        prop_assert!(!n.weekday().is_weekend());
        prop_assert!(!cal.contains(n));
        // Nothing in between was a working day.
        let mut x = d;
        while x < n {
            prop_assert!(cal.is_holiday(x));
            x += 1;
        }
    }

    #[test]
    fn next_business_day_is_idempotent((d, cal) in date_with_holidays()) {
        let n = next_business_day(d, &cal).unwrap();
        prop_assert_eq!(next_business_day(n, &cal).unwrap(), n);
    }

    #[test]
    fn working_days_are_fixed_points(d in any_date()) {
        let cal = HolidayCalendar::spanning(d.year(), d.year() + 1).unwrap();
        if cal.is_business_day(d) {
            prop_assert_eq!(next_business_day(d, &cal).unwrap(), d);
        } else {
            prop_assert!(next_business_day(d, &cal).unwrap() > d);
        }
    }

    #[test]
    fn spanish_runs_are_short(d in any_date()) {
        let cal = HolidayCalendar::spanning(d.year(), d.year() + 1).unwrap();
        let n = next_business_day(d, &cal).unwrap();
        prop_assert!(n - d < 7, "{} -> {}", d, n);
    }
}
