use crate::eol_tracking::domain::{Product, TrackedComponent};
use crate::shared::Result;
use std::path::Path;

/// The record store's read surface: every product plus every tracked
/// component across all of them.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    pub products: Vec<Product>,
    pub components: Vec<TrackedComponent>,
}

/// InventoryReader port for loading the tracked-component inventory.
///
/// This port abstracts the record store the engine consumes. The
/// shipped adapter reads a TOML file; a database-backed implementation
/// would satisfy the same interface.
pub trait InventoryReader {
    /// Loads all products and tracked components.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The inventory cannot be read
    /// - The inventory cannot be parsed
    /// - A record fails domain validation (empty name, invalid slug, ...)
    fn load_inventory(&self, path: &Path) -> Result<Inventory>;
}
