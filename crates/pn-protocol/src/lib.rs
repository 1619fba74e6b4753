//! # pn-protocol
//!
//! The fixed prenatal checkpoint protocol and the schedule generator built
//! on the Spanish working-day calendar of `pn-time`.
//!
//! Given the date of the last menstrual period (FUR), every protocol row is
//! turned independently into a [`CheckpointRecord`]: the target date
//! `FUR + 7·week` moved to the next working day, plus the unadjusted
//! clinical tolerance window when the row has one.
//!
//! ```
//! use pn_protocol::schedule_from_input;
//!
//! let schedule = schedule_from_input(Some("2024-01-01")).unwrap();
//! assert_eq!(schedule.len(), 9);
//! assert_eq!(schedule.records()[0].resolved_date().to_string(), "2024-02-26");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Checkpoint records produced by the generator.
pub mod checkpoint;

/// `GestationalAge` — a week + day offset from FUR.
pub mod gestational_age;

/// The fixed clinical protocol table.
pub mod protocol;

/// Schedule generation.
pub mod schedule;

/// Input validation at the boundary with the UI.
pub mod validation;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use checkpoint::{CheckpointRange, CheckpointRecord};
pub use gestational_age::GestationalAge;
pub use protocol::{max_offset_days, ProtocolEntry, ProtocolRange, PROTOCOL};
pub use schedule::{generate_schedule, schedule_for, Schedule};
pub use validation::{parse_fur, schedule_from_input, ValidationError};
