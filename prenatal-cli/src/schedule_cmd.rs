use anyhow::{Context, Result};
use tracing::{debug, info, info_span, warn};

use prenatal::protocol::schedule_from_input;

use crate::cli::Format;
use crate::render::{schedule_json, ScheduleTable};

/// Compute and print the checkpoint schedule for `fur`.
pub fn run(fur: Option<&str>, format: Format) -> Result<()> {
    let schedule = {
        let _span = info_span!("schedule", fur = fur.unwrap_or_default()).entered();
        let schedule = match schedule_from_input(fur) {
            Ok(s) => s,
            Err(e) => {
                warn!(error = %e, "rejected FUR input");
                return Err(e).context("cannot compute the checkpoint schedule");
            }
        };
        for record in &schedule {
            debug!(
                week = record.week(),
                target = %record.target_date(),
                resolved = %record.resolved_date(),
                moved_days = record.days_moved(),
                "checkpoint resolved"
            );
        }
        info!(checkpoints = schedule.len(), "schedule computed");
        schedule
    };

    match format {
        Format::Text => print!("{}", ScheduleTable(&schedule)),
        Format::Json => println!("{}", schedule_json(&schedule)?),
    }
    Ok(())
}
