use crate::adapters::outbound::network::CoalescingSource;
use crate::application::dto::{SnapshotRequest, SnapshotResponse};
use crate::application::use_cases::ComponentResolver;
use crate::eol_tracking::domain::{FleetEntry, FleetSnapshot, ResolvedEol, TrackedComponent};
use crate::ports::outbound::{Inventory, InventoryReader, LifeCycleSource, ProgressReporter};
use crate::shared::Result;
use chrono::{Local, NaiveDate};
use futures::stream::{self, StreamExt};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

/// SnapshotFleetUseCase - Core use case for fleet-wide EOL aggregation
///
/// Loads the inventory, resolves every tracked component concurrently and
/// produces the urgency-ordered fleet snapshot. One component's source
/// failure never aborts the others: the resolver is total, so the fan-out
/// only ever collects outcomes.
///
/// # Type Parameters
/// * `IR` - InventoryReader implementation
/// * `S` - LifeCycleSource implementation
/// * `PR` - ProgressReporter implementation
pub struct SnapshotFleetUseCase<IR, S, PR> {
    inventory_reader: IR,
    source: S,
    progress_reporter: PR,
}

impl<IR, S, PR> SnapshotFleetUseCase<IR, S, PR>
where
    IR: InventoryReader,
    S: LifeCycleSource,
    PR: ProgressReporter,
{
    /// Creates a new SnapshotFleetUseCase with injected dependencies
    pub fn new(inventory_reader: IR, source: S, progress_reporter: PR) -> Self {
        Self {
            inventory_reader,
            source,
            progress_reporter,
        }
    }

    /// Executes the fleet snapshot use case against today's date.
    pub async fn execute(&self, request: SnapshotRequest) -> Result<SnapshotResponse> {
        self.progress_reporter.report(&format!(
            "📖 Loading inventory from: {}",
            request.inventory_path.display()
        ));

        let inventory = self.inventory_reader.load_inventory(&request.inventory_path)?;

        let today = Local::now().date_naive();
        let snapshot = self
            .snapshot_at(
                &inventory,
                request.product_filter.as_deref(),
                today,
                request.max_concurrency,
            )
            .await;

        let summary = snapshot.summary();
        self.progress_reporter.report_completion(&format!(
            "✅ Resolved {} component(s): {} expired, {} warning, {} safe",
            summary.total, summary.expired, summary.warning, summary.safe
        ));

        Ok(SnapshotResponse::new(snapshot))
    }

    /// Resolves the fleet against an explicit current date.
    ///
    /// Exposed separately from `execute` so callers (and tests) can pin
    /// `today`; a whole aggregation pass shares the one date.
    pub async fn snapshot_at(
        &self,
        inventory: &Inventory,
        product_filter: Option<&str>,
        today: NaiveDate,
        max_concurrency: usize,
    ) -> FleetSnapshot {
        let product_names: HashMap<&str, &str> = inventory
            .products
            .iter()
            .map(|product| (product.id().as_str(), product.name()))
            .collect();

        let components: Vec<&TrackedComponent> = inventory
            .components
            .iter()
            .filter(|component| {
                product_filter
                    .map(|id| component.product_id().as_str() == id)
                    .unwrap_or(true)
            })
            .collect();

        let total = components.len();
        self.progress_reporter
            .report(&format!("🔍 Resolving EOL data for {} component(s)...", total));

        // Per-batch coalescing: components sharing a family slug trigger
        // one external lookup, concurrent or not.
        let batch_source = CoalescingSource::new(&self.source);
        let resolver = ComponentResolver::new(&batch_source);
        let resolver_ref = &resolver;

        let completed = AtomicUsize::new(0);
        let completed_ref = &completed;
        let reporter = &self.progress_reporter;

        let mut indexed: Vec<(usize, ResolvedEol)> = stream::iter(components.into_iter().enumerate())
            .map(|(index, component)| async move {
                let resolved = resolver_ref.resolve(component, today).await;
                let done = completed_ref.fetch_add(1, Ordering::Relaxed) + 1;
                reporter.report_progress(done, total, Some(component.name()));
                (index, resolved)
            })
            .buffer_unordered(max_concurrency.max(1))
            .collect()
            .await;

        // Completion order is nondeterministic; restore inventory order so
        // the stable urgency sort keeps ties and absent entries predictable.
        indexed.sort_by_key(|(index, _)| *index);

        let entries = indexed
            .into_iter()
            .map(|(_, resolved)| {
                let product_name = product_names
                    .get(resolved.product_id().as_str())
                    .map(|name| (*name).to_string())
                    .unwrap_or_else(|| resolved.product_id().to_string());
                FleetEntry::new(product_name, resolved)
            })
            .collect();

        FleetSnapshot::new(entries)
    }
}
