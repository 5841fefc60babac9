use std::path::PathBuf;

/// Default bound on concurrent external lookups within one aggregation
/// pass. Keeps a large fleet from hammering the source while still
/// overlapping the slow network calls.
pub const DEFAULT_MAX_CONCURRENCY: usize = 8;

/// SnapshotRequest - Internal request DTO for the fleet snapshot use case
#[derive(Debug, Clone)]
pub struct SnapshotRequest {
    /// Path to the inventory file
    pub inventory_path: PathBuf,
    /// Restrict the snapshot to components of this product id
    pub product_filter: Option<String>,
    /// Maximum number of concurrent external lookups
    pub max_concurrency: usize,
}

impl SnapshotRequest {
    pub fn new(
        inventory_path: PathBuf,
        product_filter: Option<String>,
        max_concurrency: usize,
    ) -> Self {
        Self {
            inventory_path,
            product_filter,
            max_concurrency,
        }
    }
}
