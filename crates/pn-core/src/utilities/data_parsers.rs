//! Data parsing helpers.
//!
//! These functions only split and convert the textual fields of a date;
//! whether the fields form a real calendar day is decided by the date type.

use crate::errors::{Error, Result};

/// Parse a date string in ISO 8601 calendar format (`YYYY-MM-DD`).
///
/// Surrounding whitespace is ignored.  The year must have exactly four
/// digits and the month and day exactly two; signs and other characters are
/// rejected.  Returns `(year, month, day)` without range-checking the month
/// or the day.
///
/// # Errors
/// Returns [`Error::InvalidArgument`] if the string does not have the
/// `YYYY-MM-DD` shape.
pub fn parse_iso_date(s: &str) -> Result<(u16, u8, u8)> {
    let s = s.trim();
    let mut parts = s.split('-');
    let (Some(y), Some(m), Some(d), None) = (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(Error::InvalidArgument(format!(
            "'{s}' is not of the form YYYY-MM-DD"
        )));
    };
    let year = digits::<u16>(y, 4, "year")?;
    let month = digits::<u8>(m, 2, "month")?;
    let day = digits::<u8>(d, 2, "day")?;
    Ok((year, month, day))
}

fn digits<T: std::str::FromStr>(field: &str, width: usize, what: &str) -> Result<T> {
    if field.len() != width || !field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::InvalidArgument(format!(
            "{what} '{field}' must be exactly {width} digits"
        )));
    }
    field
        .parse()
        .map_err(|_| Error::InvalidArgument(format!("{what} '{field}' is not a number")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_iso_date() {
        assert_eq!(parse_iso_date("2023-06-15"), Ok((2023, 6, 15)));
        assert_eq!(parse_iso_date("  2024-01-01\n"), Ok((2024, 1, 1)));
        // Fields are not range-checked here.
        assert_eq!(parse_iso_date("2023-13-40"), Ok((2023, 13, 40)));
    }

    #[test]
    fn test_parse_iso_date_rejects_bad_shapes() {
        for bad in [
            "", "bad", "2023-6-15", "2023-06", "2023-06-15-01", "+2023-06-15", "20230615",
            "2023/06/15", "２０２３-06-15",
        ] {
            assert!(parse_iso_date(bad).is_err(), "accepted {bad:?}");
        }
    }

    proptest::proptest! {
        #[test]
        fn test_parse_iso_date_reads_back_any_padded_triple(
            y in 0u16..=9999, m in 0u8..=99, d in 0u8..=99
        ) {
            let s = format!("{y:04}-{m:02}-{d:02}");
            proptest::prop_assert_eq!(parse_iso_date(&s), Ok((y, m, d)));
        }

        #[test]
        fn test_parse_iso_date_never_panics(s in "\\PC{0,16}") {
            let _ = parse_iso_date(&s);
        }
    }
}
