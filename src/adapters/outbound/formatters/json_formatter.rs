use crate::eol_tracking::domain::{FleetEntry, FleetSnapshot, FleetSummary};
use crate::ports::outbound::SnapshotFormatter;
use crate::shared::Result;
use serde::Serialize;

#[derive(Serialize)]
struct JsonReport<'a> {
    summary: FleetSummary,
    components: &'a [FleetEntry],
}

/// JsonFormatter renders a fleet snapshot as pretty-printed JSON.
///
/// The output is a stable structure for machine consumption: a summary
/// block plus the urgency-ordered component rows. Absent EOL dates
/// serialize as `null` and carry an `absence_reason` field.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl SnapshotFormatter for JsonFormatter {
    fn format(&self, snapshot: &FleetSnapshot) -> Result<String> {
        let report = JsonReport {
            summary: snapshot.summary(),
            components: snapshot.entries(),
        };
        Ok(serde_json::to_string_pretty(&report)?)
    }
}
