use crate::eol_tracking::domain::{
    AbsenceReason, EolDeclaration, ResolvedEol, TrackedComponent,
};
use crate::eol_tracking::services::{CycleResolver, DateMath};
use crate::ports::outbound::LifeCycleSource;
use chrono::NaiveDate;

/// ComponentResolver - resolves one tracked component to its EOL outcome.
///
/// The resolution is a total function: every component yields exactly one
/// `ResolvedEol`, never an error. A dashboard must always render a row per
/// component, so every failure is absorbed into an absent EOL date, which
/// the risk classifier treats as highest risk.
///
/// Precedence, in order:
/// 1. A manual EOL date on the component is authoritative regardless of
///    its slug; no external lookup is attempted.
/// 2. A manual-only slug without a manual date resolves absent.
/// 3. Otherwise the family table is fetched and the version matched
///    against it; source failure, a missing cycle, and an undeclared EOL
///    all resolve absent, each with its own reason.
pub struct ComponentResolver<'a, S> {
    source: &'a S,
}

impl<'a, S: LifeCycleSource> ComponentResolver<'a, S> {
    pub fn new(source: &'a S) -> Self {
        Self { source }
    }

    /// Resolves a component against the given current date.
    ///
    /// `today` is injected rather than read from the clock so a whole
    /// aggregation pass shares one consistent date and tests are
    /// deterministic.
    pub async fn resolve(&self, component: &TrackedComponent, today: NaiveDate) -> ResolvedEol {
        if let Some(manual_eol) = component.manual_eol() {
            return Self::with_date(component, manual_eol, today);
        }

        if component.slug().is_manual() {
            tracing::debug!(
                component = component.name(),
                "manual-only component without a manual EOL date"
            );
            return ResolvedEol::unresolved(component, AbsenceReason::ManualDateMissing);
        }

        let records = match self.source.fetch_family(component.slug()).await {
            Ok(records) => records,
            Err(error) => {
                tracing::warn!(
                    component = component.name(),
                    slug = component.slug().as_str(),
                    %error,
                    "life-cycle lookup failed, degrading to unknown"
                );
                return ResolvedEol::unresolved(component, AbsenceReason::SourceUnavailable);
            }
        };

        let Some(record) = CycleResolver::resolve(&records, component.version()) else {
            tracing::debug!(
                component = component.name(),
                slug = component.slug().as_str(),
                version = component.version(),
                "no cycle label matches the tracked version"
            );
            return ResolvedEol::unresolved(component, AbsenceReason::NoCycleMatch);
        };

        match record.eol() {
            EolDeclaration::Date(eol_date) => Self::with_date(component, eol_date, today),
            EolDeclaration::Undeclared => {
                ResolvedEol::unresolved(component, AbsenceReason::NoEolDeclared)
            }
        }
    }

    fn with_date(component: &TrackedComponent, eol_date: NaiveDate, today: NaiveDate) -> ResolvedEol {
        let days_remaining = DateMath::days_until(today, eol_date);
        ResolvedEol::resolved(component, eol_date, days_remaining)
    }
}
