//! # prenatal
//!
//! Prenatal checkpoint scheduling: from the date of the last menstrual
//! period (FUR), compute the date of every checkpoint of the clinical
//! protocol, moved onto the next Spanish working day, together with the
//! tolerance window of the checkpoints that have one.
//!
//! This crate is a **façade** that re-exports the public items of the
//! workspace crates. Application code should depend on this crate rather
//! than the individual `pn-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! prenatal = "0.1"
//! ```
//!
//! ```rust
//! use prenatal::protocol::schedule_from_input;
//!
//! let schedule = schedule_from_input(Some("2024-03-01")).unwrap();
//! let week_12 = schedule.checkpoint(12).unwrap();
//! assert_eq!(week_12.resolved_date().to_string(), "2024-05-24");
//! assert_eq!(week_12.range().unwrap().to_string(), "Week 11+2 to Week 13+6");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core error definitions and type aliases.
pub use pn_core as core;

/// Dates, Easter, Spanish holidays and working-day adjustment.
pub use pn_time as time;

/// The checkpoint protocol and schedule generation.
pub use pn_protocol as protocol;
