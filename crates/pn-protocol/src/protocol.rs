//! The clinical protocol: which checkpoint happens in which gestational
//! week, and the tolerance window of the checkpoints that have one.
//!
//! The table is a domain constant.  It is listed in ascending week order,
//! but nothing downstream relies on that: each row is computed on its own.

use crate::gestational_age::GestationalAge;
use pn_core::{Days, Weeks};

/// Clinically acceptable window around a checkpoint, as inclusive offsets
/// from FUR.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProtocolRange {
    /// Earliest acceptable gestational age.
    pub min: GestationalAge,
    /// Latest acceptable gestational age.
    pub max: GestationalAge,
}

/// One row of the protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProtocolEntry {
    /// Target gestational week.
    pub week: Weeks,
    /// What happens at the checkpoint.
    pub description: &'static str,
    /// Tolerance window, for the rows that have one.
    pub range: Option<ProtocolRange>,
}

impl ProtocolEntry {
    /// A row without a tolerance window.
    pub const fn new(week: Weeks, description: &'static str) -> Self {
        Self {
            week,
            description,
            range: None,
        }
    }

    /// Attach the tolerance window `min..=max`.
    pub const fn with_range(mut self, min: GestationalAge, max: GestationalAge) -> Self {
        self.range = Some(ProtocolRange { min, max });
        self
    }

    /// Offset of the target date from FUR, in days.
    pub fn target_offset_days(&self) -> Days {
        self.week as Days * 7
    }

    /// Largest offset from FUR this row can produce before working-day
    /// adjustment.
    pub fn max_offset_days(&self) -> Days {
        let range_max = self.range.map_or(0, |r| r.max.total_days());
        self.target_offset_days().max(range_max)
    }
}

/// The prenatal checkpoint protocol.
pub const PROTOCOL: &[ProtocolEntry] = &[
    ProtocolEntry::new(8, "New obstetric visit + ultrasound + midwife consult"),
    ProtocolEntry::new(
        12,
        "Obstetric review + week-12 ultrasound + first-trimester screening + preeclampsia screening",
    )
    .with_range(GestationalAge::new(11, 2), GestationalAge::new(13, 6)),
    ProtocolEntry::new(16, "Midwife consult"),
    ProtocolEntry::new(20, "Obstetric review + ultrasound")
        .with_range(GestationalAge::weeks(19), GestationalAge::new(22, 6)),
    ProtocolEntry::new(26, "Obstetric review + ultrasound + second-trimester labs")
        .with_range(GestationalAge::weeks(25), GestationalAge::weeks(27)),
    ProtocolEntry::new(32, "Midwife consult"),
    ProtocolEntry::new(
        36,
        "Obstetric review + ultrasound + third-trimester labs + anesthesia + midwife consult",
    )
    .with_range(GestationalAge::weeks(36), GestationalAge::weeks(37)),
    ProtocolEntry::new(39, "Fetal monitoring"),
    ProtocolEntry::new(40, "Obstetric review + ultrasound + fetal monitoring"),
];

/// Largest unadjusted offset from FUR over all rows of `protocol`
/// (280 days for [`PROTOCOL`]).
pub fn max_offset_days(protocol: &[ProtocolEntry]) -> Days {
    protocol
        .iter()
        .map(ProtocolEntry::max_offset_days)
        .max()
        .unwrap_or(0)
}
