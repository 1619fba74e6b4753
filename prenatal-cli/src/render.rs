//! Text and JSON output.

use std::fmt;

use prenatal::protocol::{CheckpointRecord, Schedule};
use prenatal::time::{Date, HolidaySet, SpanishHoliday};
use serde::Serialize;

/// Width of the week and date columns, including the gaps.
const INDENT: usize = 22;

/// `Mon 2024-02-26`.
fn day(date: Date) -> String {
    format!("{} {date}", date.weekday().short_name())
}

/// Why `date` is not a working day.
fn closure_reason(date: Date) -> &'static str {
    match SpanishHoliday::on(date) {
        Some(holiday) => holiday.name(),
        None if date.weekday().is_weekend() => "weekend",
        None => "working day",
    }
}

/// A schedule as an aligned table.
pub struct ScheduleTable<'a>(pub &'a Schedule);

impl fmt::Display for ScheduleTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let schedule = self.0;
        writeln!(f, "FUR                 {}", day(schedule.fur()))?;
        if let Ok(due) = schedule.estimated_due_date() {
            writeln!(f, "Estimated due date  {}", day(due))?;
        }
        writeln!(f)?;
        writeln!(f, "{:>4}  {:<14}  Checkpoint", "Week", "Date")?;
        for record in schedule {
            writeln!(
                f,
                "{:>4}  {:<14}  {}",
                record.week(),
                day(record.resolved_date()),
                record.description()
            )?;
            if record.was_moved() {
                writeln!(
                    f,
                    "{:INDENT$}moved from {} ({})",
                    "",
                    day(record.target_date()),
                    closure_reason(record.target_date())
                )?;
            }
            if let Some(range) = record.range() {
                writeln!(
                    f,
                    "{:INDENT$}window {} to {} ({range})",
                    "",
                    range.min_date(),
                    range.max_date()
                )?;
            }
        }
        Ok(())
    }
}

#[derive(Serialize)]
struct ScheduleView<'a> {
    fur: Date,
    estimated_due_date: Option<Date>,
    checkpoints: &'a [CheckpointRecord],
}

/// A schedule as pretty-printed JSON.
pub fn schedule_json(schedule: &Schedule) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&ScheduleView {
        fur: schedule.fur(),
        estimated_due_date: schedule.estimated_due_date().ok(),
        checkpoints: schedule.records(),
    })
}

/// A year's holidays, one per line.
pub struct HolidayTable<'a>(pub &'a HolidaySet);

impl fmt::Display for HolidayTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (date, holiday) in self.0.iter() {
            writeln!(f, "{}  {}", day(date), holiday)?;
        }
        Ok(())
    }
}

#[derive(Serialize)]
struct HolidayView {
    date: Date,
    weekday: &'static str,
    holiday: SpanishHoliday,
    name: &'static str,
}

/// A year's holidays as pretty-printed JSON.
pub fn holidays_json(holidays: &HolidaySet) -> serde_json::Result<String> {
    let views: Vec<HolidayView> = holidays
        .iter()
        .map(|(date, holiday)| HolidayView {
            date,
            weekday: date.weekday().long_name(),
            holiday,
            name: holiday.name(),
        })
        .collect();
    serde_json::to_string_pretty(&views)
}
