use crate::eol_tracking::domain::{FleetEntry, FleetSnapshot};
use crate::ports::outbound::SnapshotFormatter;
use crate::shared::Result;

/// MarkdownFormatter renders a fleet snapshot as a Markdown report.
///
/// Intended for dashboards, wikis and pull-request comments: a summary
/// header followed by one table row per component, most urgent first.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    fn risk_cell(entry: &FleetEntry) -> String {
        match entry.resolved.absence_reason() {
            Some(reason) => format!("{} ({})", entry.resolved.risk(), reason.label()),
            None => entry.resolved.risk().to_string(),
        }
    }

    fn eol_cell(entry: &FleetEntry) -> String {
        match entry.resolved.eol_date() {
            Some(date) => date.format("%Y-%m-%d").to_string(),
            None => "unknown".to_string(),
        }
    }

    fn days_cell(entry: &FleetEntry) -> String {
        match entry.resolved.days_remaining() {
            Some(days) => days.to_string(),
            None => "-".to_string(),
        }
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl SnapshotFormatter for MarkdownFormatter {
    fn format(&self, snapshot: &FleetSnapshot) -> Result<String> {
        let summary = snapshot.summary();
        let mut output = String::new();

        output.push_str("# Fleet EOL Report\n\n");
        output.push_str(&format!(
            "**{}** component(s): {} expired, {} warning, {} safe\n\n",
            summary.total, summary.expired, summary.warning, summary.safe
        ));

        if snapshot.is_empty() {
            output.push_str("_No tracked components._\n");
            return Ok(output);
        }

        output.push_str("| Product | Component | Version | EOL Date | Days Remaining | Risk |\n");
        output.push_str("|---------|-----------|---------|----------|----------------|------|\n");

        for entry in snapshot.entries() {
            output.push_str(&format!(
                "| {} | {} | {} | {} | {} | {} |\n",
                entry.product_name,
                entry.resolved.name(),
                entry.resolved.version(),
                Self::eol_cell(entry),
                Self::days_cell(entry),
                Self::risk_cell(entry),
            ));
        }

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eol_tracking::domain::{
        AbsenceReason, ComponentId, FamilySlug, ProductId, ResolvedEol, TrackedComponent,
    };
    use chrono::NaiveDate;

    fn component(name: &str) -> TrackedComponent {
        TrackedComponent::new(
            ComponentId::new(format!("{}-id", name)).unwrap(),
            ProductId::new("billing".to_string()).unwrap(),
            name.to_string(),
            FamilySlug::new("postgresql".to_string()).unwrap(),
            "12".to_string(),
            None,
        )
        .unwrap()
    }

    #[test]
    fn test_format_contains_header_and_summary() {
        let eol = NaiveDate::from_ymd_opt(2026, 11, 14).unwrap();
        let snapshot = FleetSnapshot::new(vec![FleetEntry::new(
            "Billing Platform".to_string(),
            ResolvedEol::resolved(&component("PostgreSQL"), eol, 700),
        )]);

        let output = MarkdownFormatter::new().format(&snapshot).unwrap();
        assert!(output.contains("# Fleet EOL Report"));
        assert!(output.contains("**1** component(s): 0 expired, 0 warning, 1 safe"));
        assert!(output.contains("| Billing Platform | PostgreSQL | 12 | 2026-11-14 | 700 | safe |"));
    }

    #[test]
    fn test_format_unresolved_row() {
        let snapshot = FleetSnapshot::new(vec![FleetEntry::new(
            "Billing Platform".to_string(),
            ResolvedEol::unresolved(&component("PostgreSQL"), AbsenceReason::NoCycleMatch),
        )]);

        let output = MarkdownFormatter::new().format(&snapshot).unwrap();
        assert!(output.contains("| unknown | - | expired (no matching cycle) |"));
    }

    #[test]
    fn test_format_empty_snapshot() {
        let output = MarkdownFormatter::new()
            .format(&FleetSnapshot::new(vec![]))
            .unwrap();
        assert!(output.contains("_No tracked components._"));
        assert!(!output.contains("| Product |"));
    }
}
