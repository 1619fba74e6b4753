//! Schedule generation.
//!
//! Every protocol row is computed independently:
//!
//! * `target_date   = FUR + 7·week`
//! * `resolved_date = next_business_day(target_date)`
//! * `range dates   = FUR + min`, `FUR + max` (not adjusted)
//!
//! Generation is all-or-nothing: the first failing row fails the whole
//! schedule.

use crate::checkpoint::{CheckpointRange, CheckpointRecord};
use crate::protocol::{max_offset_days, ProtocolEntry, PROTOCOL};
use pn_core::errors::Result;
use pn_core::Days;
use pn_time::calendar::{next_business_day, Calendar};
use pn_time::{Date, HolidayCalendar};

/// Extra days past the last target date whose holidays must be known.
///
/// No run of consecutive Spanish non-working days is that long, so the
/// working-day search never leaves the holiday span built by
/// [`schedule_for`].
pub const SEARCH_SLACK_DAYS: Days = 14;

/// Days from FUR to the estimated due date (40 weeks).
pub const DUE_DATE_OFFSET_DAYS: Days = 280;

/// The checkpoints computed for one FUR, in protocol order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Schedule {
    fur: Date,
    records: Vec<CheckpointRecord>,
}

impl Schedule {
    /// The last menstrual period date the schedule was computed from.
    pub fn fur(&self) -> Date {
        self.fur
    }

    /// All checkpoint records, one per protocol row.
    pub fn records(&self) -> &[CheckpointRecord] {
        &self.records
    }

    /// Consume the schedule, returning its records.
    pub fn into_records(self) -> Vec<CheckpointRecord> {
        self.records
    }

    /// Number of checkpoints.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Return `true` if the schedule has no checkpoints.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over the records.
    pub fn iter(&self) -> std::slice::Iter<'_, CheckpointRecord> {
        self.records.iter()
    }

    /// The record of gestational week `week`, if the protocol has one.
    pub fn checkpoint(&self, week: u32) -> Option<&CheckpointRecord> {
        self.records.iter().find(|r| r.week == week)
    }

    /// `FUR + 280` days (Naegele's rule).
    ///
    /// # Errors
    /// Fails if the due date is past the supported range.
    pub fn estimated_due_date(&self) -> Result<Date> {
        self.fur.add_days(DUE_DATE_OFFSET_DAYS)
    }
}

impl<'a> IntoIterator for &'a Schedule {
    type Item = &'a CheckpointRecord;
    type IntoIter = std::slice::Iter<'a, CheckpointRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Compute one record per row of `protocol`, resolving target dates with
/// `calendar`.
///
/// The calendar must know the holidays of every year the working-day search
/// can reach.
///
/// # Errors
/// Fails if any date falls outside the supported range.
pub fn generate_schedule(
    fur: Date,
    protocol: &[ProtocolEntry],
    calendar: &dyn Calendar,
) -> Result<Schedule> {
    let records = protocol
        .iter()
        .map(|entry| checkpoint_record(fur, entry, calendar))
        .collect::<Result<Vec<_>>>()?;
    Ok(Schedule { fur, records })
}

fn checkpoint_record(
    fur: Date,
    entry: &ProtocolEntry,
    calendar: &dyn Calendar,
) -> Result<CheckpointRecord> {
    let target_date = fur.add_days(entry.target_offset_days())?;
    let resolved_date = next_business_day(target_date, calendar)?;
    let range = entry
        .range
        .map(|r| -> Result<CheckpointRange> {
            Ok(CheckpointRange {
                min_date: fur.add_days(r.min.total_days())?,
                max_date: fur.add_days(r.max.total_days())?,
                min: r.min,
                max: r.max,
            })
        })
        .transpose()?;
    Ok(CheckpointRecord {
        week: entry.week,
        target_date,
        resolved_date,
        description: entry.description,
        range,
    })
}

/// Build the Spanish holiday calendar covering every date a schedule for
/// `fur` under `protocol` can touch.
///
/// # Errors
/// Fails if that span reaches past the supported range.
pub fn holiday_calendar_for(fur: Date, protocol: &[ProtocolEntry]) -> Result<HolidayCalendar> {
    let last = fur.add_days(max_offset_days(protocol) + SEARCH_SLACK_DAYS)?;
    HolidayCalendar::spanning(fur.year(), last.year())
}

/// Generate the standard [`PROTOCOL`] schedule for `fur` against the
/// Spanish national calendar.
///
/// # Errors
/// Fails if the schedule would reach past the supported date range.
pub fn schedule_for(fur: Date) -> Result<Schedule> {
    let calendar = holiday_calendar_for(fur, PROTOCOL)?;
    generate_schedule(fur, PROTOCOL, &calendar)
}
