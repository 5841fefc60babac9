use super::component::ProductId;
use crate::shared::Result;

/// Product value object: an owning product with a display name.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    id: ProductId,
    name: String,
}

impl Product {
    pub fn new(id: ProductId, name: String) -> Result<Self> {
        if name.is_empty() {
            anyhow::bail!("Product name cannot be empty");
        }
        Ok(Self { id, name })
    }

    pub fn id(&self) -> &ProductId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}
