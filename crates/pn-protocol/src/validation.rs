//! Input validation at the UI boundary.
//!
//! The UI hands over whatever the date field holds.  Nothing is computed
//! until the text is a real calendar date, and a failure never leaves a
//! partial schedule behind: the caller keeps showing its previous one.

use thiserror::Error;

use crate::schedule::{schedule_for, Schedule};
use pn_time::Date;

/// Why a FUR input was rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// No date was supplied.
    #[error("no last menstrual period date was given")]
    MissingInput,

    /// The input is not a usable calendar date.
    #[error("'{input}' is not a valid date: {reason}")]
    InvalidDate {
        /// The rejected input, trimmed.
        input: String,
        /// What was wrong with it.
        reason: String,
    },
}

impl ValidationError {
    fn invalid(input: &str, err: impl std::fmt::Display) -> Self {
        ValidationError::InvalidDate {
            input: input.to_owned(),
            reason: err.to_string(),
        }
    }
}

/// Parse the FUR field.
///
/// `None`, an empty string and whitespace are [`ValidationError::MissingInput`];
/// anything that is not a `YYYY-MM-DD` date between 1900-01-01 and
/// 2199-12-31 is [`ValidationError::InvalidDate`].
///
/// ```
/// use pn_protocol::{parse_fur, ValidationError};
///
/// assert_eq!(parse_fur(Some("2024-03-01")).unwrap().to_string(), "2024-03-01");
/// assert_eq!(parse_fur(Some("  ")), Err(ValidationError::MissingInput));
/// assert!(matches!(parse_fur(Some("2024-02-30")), Err(ValidationError::InvalidDate { .. })));
/// ```
pub fn parse_fur(input: Option<&str>) -> Result<Date, ValidationError> {
    let input = input.map(str::trim).unwrap_or_default();
    if input.is_empty() {
        return Err(ValidationError::MissingInput);
    }
    input
        .parse::<Date>()
        .map_err(|e| ValidationError::invalid(input, e))
}

/// Parse the FUR field and generate its schedule.
///
/// A date so late that the schedule would run past 2199-12-31 is reported
/// as [`ValidationError::InvalidDate`].
pub fn schedule_from_input(input: Option<&str>) -> Result<Schedule, ValidationError> {
    let fur = parse_fur(input)?;
    schedule_for(fur).map_err(|e| ValidationError::invalid(&fur.to_string(), e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_input() {
        assert_eq!(parse_fur(None), Err(ValidationError::MissingInput));
        assert_eq!(parse_fur(Some("")), Err(ValidationError::MissingInput));
        assert_eq!(parse_fur(Some(" \t\n")), Err(ValidationError::MissingInput));
        assert_eq!(schedule_from_input(None).unwrap_err(), ValidationError::MissingInput);
    }

    #[test]
    fn invalid_dates() {
        for input in [
            "not a date",
            "2024-13-01",
            "2024-02-30",
            "2023-02-29",
            "24-03-01",
            "2024/03/01",
            "2024-3-1",
            "1899-12-31",
            "2200-01-01",
            "2024-03-01T12:00:00",
        ] {
            match parse_fur(Some(input)) {
                Err(ValidationError::InvalidDate { input: got, .. }) => assert_eq!(got, input),
                other => panic!("{input:?} gave {other:?}"),
            }
        }
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        let d = parse_fur(Some(" 2024-02-29 ")).unwrap();
        assert_eq!(d, Date::from_ymd(2024, 2, 29).unwrap());
    }

    #[test]
    fn valid_input_gives_full_schedule() {
        let s = schedule_from_input(Some("2024-01-01")).unwrap();
        assert_eq!(s.len(), 9);
        assert_eq!(s.fur().to_string(), "2024-01-01");
    }

    #[test]
    fn late_fur_is_invalid() {
        let err = schedule_from_input(Some("2199-12-01")).unwrap_err();
        let ValidationError::InvalidDate { input, reason } = err else {
            panic!("expected InvalidDate");
        };
        assert_eq!(input, "2199-12-01");
        assert!(reason.contains("out of range"), "{reason}");
    }

    #[test]
    fn messages() {
        assert_eq!(
            ValidationError::MissingInput.to_string(),
            "no last menstrual period date was given"
        );
        let e = parse_fur(Some("2024-02-30")).unwrap_err();
        assert!(e.to_string().starts_with("'2024-02-30' is not a valid date: "));
    }
}
