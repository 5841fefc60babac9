use eol_watch::prelude::*;
use std::path::Path;

/// Mock InventoryReader for testing
pub struct MockInventoryReader {
    products: Vec<Product>,
    components: Vec<TrackedComponent>,
    should_fail: bool,
}

impl MockInventoryReader {
    pub fn new() -> Self {
        Self {
            products: Vec::new(),
            components: Vec::new(),
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            products: Vec::new(),
            components: Vec::new(),
            should_fail: true,
        }
    }

    pub fn with_product(mut self, id: &str, name: &str) -> Self {
        self.products.push(
            Product::new(ProductId::new(id.to_string()).unwrap(), name.to_string()).unwrap(),
        );
        self
    }

    pub fn with_component(mut self, component: TrackedComponent) -> Self {
        self.components.push(component);
        self
    }
}

impl Default for MockInventoryReader {
    fn default() -> Self {
        Self::new()
    }
}

impl InventoryReader for MockInventoryReader {
    fn load_inventory(&self, _path: &Path) -> Result<Inventory> {
        if self.should_fail {
            anyhow::bail!("Mock inventory reader failure");
        }

        Ok(Inventory {
            products: self.products.clone(),
            components: self.components.clone(),
        })
    }
}
