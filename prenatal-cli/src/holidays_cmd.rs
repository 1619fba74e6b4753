use anyhow::{Context, Result};
use tracing::info;

use prenatal::time::cached_holidays;

use crate::cli::{Format, HolidaysArgs};
use crate::render::{holidays_json, HolidayTable};

/// Print the Spanish national holidays of one year.
pub fn run(args: HolidaysArgs, format: Format) -> Result<()> {
    let holidays = cached_holidays(args.year)
        .with_context(|| format!("no holiday calendar for {}", args.year))?;
    info!(year = args.year, count = holidays.len(), "holidays loaded");

    match format {
        Format::Text => print!("{}", HolidayTable(holidays)),
        Format::Json => println!("{}", holidays_json(holidays)?),
    }
    Ok(())
}
