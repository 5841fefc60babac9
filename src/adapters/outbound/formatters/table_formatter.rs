use crate::eol_tracking::domain::{FleetEntry, FleetSnapshot, RiskLevel};
use crate::ports::outbound::SnapshotFormatter;
use crate::shared::Result;
use owo_colors::OwoColorize;

/// TableFormatter renders a fleet snapshot as an aligned terminal table
/// with the risk column colored (green / yellow / red).
pub struct TableFormatter {
    colored: bool,
}

impl TableFormatter {
    pub fn new() -> Self {
        Self { colored: true }
    }

    /// A variant without ANSI color codes, for piping and tests.
    pub fn plain() -> Self {
        Self { colored: false }
    }

    fn risk_text(&self, entry: &FleetEntry) -> String {
        let risk = entry.resolved.risk();
        let text = match entry.resolved.absence_reason() {
            Some(reason) => format!("{} ({})", risk, reason.label()),
            None => risk.to_string(),
        };
        if !self.colored {
            return text;
        }
        match risk {
            RiskLevel::Safe => text.green().to_string(),
            RiskLevel::Warning => text.yellow().to_string(),
            RiskLevel::Expired => text.red().to_string(),
        }
    }

    fn eol_text(entry: &FleetEntry) -> String {
        match entry.resolved.eol_date() {
            Some(date) => date.format("%Y-%m-%d").to_string(),
            None => "unknown".to_string(),
        }
    }

    fn days_text(entry: &FleetEntry) -> String {
        match entry.resolved.days_remaining() {
            Some(days) => days.to_string(),
            None => "-".to_string(),
        }
    }
}

impl Default for TableFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl SnapshotFormatter for TableFormatter {
    fn format(&self, snapshot: &FleetSnapshot) -> Result<String> {
        let summary = snapshot.summary();
        let mut output = String::new();

        if snapshot.is_empty() {
            output.push_str("No tracked components.\n");
            return Ok(output);
        }

        // Column widths from the uncolored cell text; color codes would
        // inflate the padding otherwise.
        let rows: Vec<[String; 5]> = snapshot
            .entries()
            .iter()
            .map(|entry| {
                [
                    entry.product_name.clone(),
                    entry.resolved.name().to_string(),
                    entry.resolved.version().to_string(),
                    Self::eol_text(entry),
                    Self::days_text(entry),
                ]
            })
            .collect();

        let headers = ["PRODUCT", "COMPONENT", "VERSION", "EOL DATE", "DAYS"];
        let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
        for row in &rows {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = widths[i].max(cell.len());
            }
        }

        for (i, header) in headers.iter().enumerate() {
            output.push_str(&format!("{:<width$}  ", header, width = widths[i]));
        }
        output.push_str("RISK\n");

        for (row, entry) in rows.iter().zip(snapshot.entries()) {
            for (i, cell) in row.iter().enumerate() {
                output.push_str(&format!("{:<width$}  ", cell, width = widths[i]));
            }
            output.push_str(&self.risk_text(entry));
            output.push('\n');
        }

        output.push_str(&format!(
            "\n{} component(s): {} expired, {} warning, {} safe\n",
            summary.total, summary.expired, summary.warning, summary.safe
        ));

        Ok(output)
    }
}
