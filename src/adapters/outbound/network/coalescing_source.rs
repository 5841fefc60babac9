use crate::eol_tracking::domain::{FamilySlug, LifeCycleRecord};
use crate::ports::outbound::{LifeCycleSource, SourceError};
use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;
use tokio::sync::OnceCell;

type FetchOutcome = Result<Vec<LifeCycleRecord>, SourceError>;

/// CoalescingSource wraps a LifeCycleSource and deduplicates lookups for
/// the same family slug within one aggregation batch.
///
/// Several tracked components often share a family (many products on the
/// same database); resolving them concurrently would otherwise issue one
/// external request each. The decorator keys an in-flight cell per slug:
/// the first caller performs the fetch, concurrent callers await the same
/// cell, and the outcome (table or unavailability) fans back out to every
/// waiter.
///
/// # Lifetime
/// The decorator borrows its inner source and is meant to live for a
/// single aggregation pass, so deduplicated results never outlive the
/// batch. There is no cross-batch cache: external life-cycle data can
/// change between requests and no staleness tolerance is defined.
pub struct CoalescingSource<'a, S> {
    inner: &'a S,
    in_flight: DashMap<FamilySlug, Arc<OnceCell<FetchOutcome>>>,
}

impl<'a, S: LifeCycleSource> CoalescingSource<'a, S> {
    /// Creates a coalescing wrapper for one aggregation batch.
    pub fn new(inner: &'a S) -> Self {
        Self {
            inner,
            in_flight: DashMap::new(),
        }
    }

    /// Number of distinct families looked up so far (for testing/monitoring)
    #[cfg(test)]
    pub fn family_count(&self) -> usize {
        self.in_flight.len()
    }
}

#[async_trait]
impl<'a, S: LifeCycleSource> LifeCycleSource for CoalescingSource<'a, S> {
    async fn fetch_family(
        &self,
        slug: &FamilySlug,
    ) -> Result<Vec<LifeCycleRecord>, SourceError> {
        let cell = {
            let entry = self
                .in_flight
                .entry(slug.clone())
                .or_insert_with(|| Arc::new(OnceCell::new()));
            Arc::clone(entry.value())
        };
        // The map guard is dropped before awaiting; holding it across the
        // fetch would serialize unrelated families.

        cell.get_or_init(|| async { self.inner.fetch_family(slug).await })
            .await
            .clone()
    }
}
