use super::component::{ComponentId, FamilySlug, ProductId, TrackedComponent};
use super::risk::RiskLevel;
use chrono::NaiveDate;
use serde::Serialize;

/// Why a component's EOL date could not be determined.
///
/// All reasons degrade to the same external effect (absent date, highest
/// risk), but the distinction lets presentation layers label "unknown"
/// differently from "confirmed overdue".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AbsenceReason {
    /// The component is manual-only and no manual date was supplied.
    ManualDateMissing,
    /// The external source could not be reached or returned garbage.
    SourceUnavailable,
    /// The family table was fetched but no cycle label matched the version.
    NoCycleMatch,
    /// A cycle matched but the source declares no EOL date for it.
    NoEolDeclared,
}

impl AbsenceReason {
    /// Short human-readable label for presentation layers.
    pub fn label(&self) -> &'static str {
        match self {
            AbsenceReason::ManualDateMissing => "manual date missing",
            AbsenceReason::SourceUnavailable => "source unavailable",
            AbsenceReason::NoCycleMatch => "no matching cycle",
            AbsenceReason::NoEolDeclared => "no EOL declared",
        }
    }
}

/// ResolvedEol: the engine's output for one tracked component.
///
/// Invariant: `days_remaining` is present iff `eol_date` is present iff
/// `absence_reason` is absent. The constructors are the only way to build
/// one, so the invariant holds everywhere.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedEol {
    component_id: ComponentId,
    product_id: ProductId,
    name: String,
    slug: FamilySlug,
    version: String,
    eol_date: Option<NaiveDate>,
    days_remaining: Option<i64>,
    risk: RiskLevel,
    #[serde(skip_serializing_if = "Option::is_none")]
    absence_reason: Option<AbsenceReason>,
}

impl ResolvedEol {
    /// Builds the outcome for a component whose EOL date was determined.
    pub fn resolved(component: &TrackedComponent, eol_date: NaiveDate, days_remaining: i64) -> Self {
        Self {
            component_id: component.id().clone(),
            product_id: component.product_id().clone(),
            name: component.name().to_string(),
            slug: component.slug().clone(),
            version: component.version().to_string(),
            eol_date: Some(eol_date),
            days_remaining: Some(days_remaining),
            risk: RiskLevel::classify(Some(days_remaining)),
            absence_reason: None,
        }
    }

    /// Builds the outcome for a component whose EOL date is undeterminable.
    pub fn unresolved(component: &TrackedComponent, reason: AbsenceReason) -> Self {
        Self {
            component_id: component.id().clone(),
            product_id: component.product_id().clone(),
            name: component.name().to_string(),
            slug: component.slug().clone(),
            version: component.version().to_string(),
            eol_date: None,
            days_remaining: None,
            risk: RiskLevel::classify(None),
            absence_reason: Some(reason),
        }
    }

    pub fn component_id(&self) -> &ComponentId {
        &self.component_id
    }

    pub fn product_id(&self) -> &ProductId {
        &self.product_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn slug(&self) -> &FamilySlug {
        &self.slug
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn eol_date(&self) -> Option<NaiveDate> {
        self.eol_date
    }

    pub fn days_remaining(&self) -> Option<i64> {
        self.days_remaining
    }

    pub fn risk(&self) -> RiskLevel {
        self.risk
    }

    pub fn absence_reason(&self) -> Option<AbsenceReason> {
        self.absence_reason
    }
}

/// One row of a fleet snapshot: a resolved component plus the display
/// name of its owning product.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FleetEntry {
    pub product_name: String,
    #[serde(flatten)]
    pub resolved: ResolvedEol,
}

impl FleetEntry {
    pub fn new(product_name: String, resolved: ResolvedEol) -> Self {
        Self {
            product_name,
            resolved,
        }
    }
}

/// Aggregate counts over a fleet snapshot, for report headers and the
/// CLI risk gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FleetSummary {
    pub total: usize,
    pub expired: usize,
    pub warning: usize,
    pub safe: usize,
}

/// FleetSnapshot: the urgency-ordered fleet-wide view.
///
/// Recomputed on every request; holds no identity of its own. Its only
/// invariant is the ordering: entries with a present day-count come
/// first, in ascending order (most overdue first); entries with an absent
/// day-count follow, keeping their relative input order (the sort is
/// stable).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FleetSnapshot {
    entries: Vec<FleetEntry>,
}

impl FleetSnapshot {
    /// Builds a snapshot from entries in any order, imposing the urgency
    /// ordering.
    pub fn new(mut entries: Vec<FleetEntry>) -> Self {
        entries.sort_by(|a, b| {
            match (a.resolved.days_remaining(), b.resolved.days_remaining()) {
                (Some(x), Some(y)) => x.cmp(&y),
                (Some(_), None) => std::cmp::Ordering::Less,
                (None, Some(_)) => std::cmp::Ordering::Greater,
                (None, None) => std::cmp::Ordering::Equal,
            }
        });
        Self { entries }
    }

    pub fn entries(&self) -> &[FleetEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn summary(&self) -> FleetSummary {
        let mut summary = FleetSummary {
            total: self.entries.len(),
            expired: 0,
            warning: 0,
            safe: 0,
        };
        for entry in &self.entries {
            match entry.resolved.risk() {
                RiskLevel::Expired => summary.expired += 1,
                RiskLevel::Warning => summary.warning += 1,
                RiskLevel::Safe => summary.safe += 1,
            }
        }
        summary
    }

    /// Whether any entry is at or above the given risk level.
    pub fn any_at_or_above(&self, threshold: RiskLevel) -> bool {
        self.entries
            .iter()
            .any(|entry| entry.resolved.risk() >= threshold)
    }
}
