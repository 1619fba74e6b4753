//! Checkpoint records: the per-row output of the schedule generator.

use crate::gestational_age::GestationalAge;
use pn_core::{Days, Weeks};
use pn_time::Date;

/// Tolerance window of a checkpoint, both as gestational ages and as
/// calendar dates.
///
/// The dates are `FUR + min.total_days()` and `FUR + max.total_days()`,
/// never moved off weekends or holidays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CheckpointRange {
    pub(crate) min_date: Date,
    pub(crate) max_date: Date,
    pub(crate) min: GestationalAge,
    pub(crate) max: GestationalAge,
}

impl CheckpointRange {
    /// First acceptable date.
    pub fn min_date(&self) -> Date {
        self.min_date
    }

    /// Last acceptable date.
    pub fn max_date(&self) -> Date {
        self.max_date
    }

    /// Earliest acceptable gestational age.
    pub fn min(&self) -> GestationalAge {
        self.min
    }

    /// Latest acceptable gestational age.
    pub fn max(&self) -> GestationalAge {
        self.max
    }

    /// Return `true` if `date` lies inside the window.
    pub fn contains(&self, date: Date) -> bool {
        self.min_date <= date && date <= self.max_date
    }
}

impl std::fmt::Display for CheckpointRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} to {}", self.min.week_label(), self.max.week_label())
    }
}

/// One checkpoint of a generated schedule.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CheckpointRecord {
    pub(crate) week: Weeks,
    pub(crate) target_date: Date,
    pub(crate) resolved_date: Date,
    pub(crate) description: &'static str,
    pub(crate) range: Option<CheckpointRange>,
}

impl CheckpointRecord {
    /// Gestational week of the checkpoint.
    pub fn week(&self) -> Weeks {
        self.week
    }

    /// `FUR + 7·week`, before working-day adjustment.
    pub fn target_date(&self) -> Date {
        self.target_date
    }

    /// The first working day on or after the target date.
    pub fn resolved_date(&self) -> Date {
        self.resolved_date
    }

    /// What happens at the checkpoint.
    pub fn description(&self) -> &'static str {
        self.description
    }

    /// Tolerance window, for checkpoints that have one.
    pub fn range(&self) -> Option<&CheckpointRange> {
        self.range.as_ref()
    }

    /// Days the appointment was pushed forward (0 when the target date was
    /// already a working day).
    pub fn days_moved(&self) -> Days {
        self.target_date.days_between(self.resolved_date)
    }

    /// Return `true` if the target date was not a working day.
    pub fn was_moved(&self) -> bool {
        self.resolved_date != self.target_date
    }
}
