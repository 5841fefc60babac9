use crate::eol_tracking::domain::{
    ComponentId, FamilySlug, Product, ProductId, TrackedComponent,
};
use crate::ports::outbound::{Inventory, InventoryReader};
use crate::shared::error::EolWatchError;
use crate::shared::Result;
use chrono::NaiveDate;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Maximum inventory file size for security (10 MB). Real inventories are
/// a few kilobytes; anything larger is not an inventory.
const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Deserialize)]
struct WireInventory {
    #[serde(default)]
    products: Vec<WireProduct>,
}

#[derive(Debug, Deserialize)]
struct WireProduct {
    id: String,
    name: String,
    #[serde(default)]
    components: Vec<WireComponent>,
}

#[derive(Debug, Deserialize)]
struct WireComponent {
    #[serde(default)]
    id: Option<String>,
    name: String,
    /// Omitting the slug marks the component manual-only.
    #[serde(default)]
    slug: Option<String>,
    version: String,
    #[serde(default)]
    manual_eol: Option<String>,
}

/// InventoryFileReader adapter for loading the inventory from a TOML file.
///
/// This adapter implements the InventoryReader port. The file holds
/// `[[products]]` tables with nested `[[products.components]]` tables;
/// components without an explicit id receive a generated one, and
/// components without a slug are treated as manual-only.
pub struct InventoryFileReader;

impl InventoryFileReader {
    pub fn new() -> Self {
        Self
    }

    /// Safely read the inventory file:
    /// - Reject symbolic links
    /// - Check file size limits
    /// - Validate the path is a regular file
    fn safe_read_file(&self, path: &Path) -> Result<String> {
        let metadata = fs::symlink_metadata(path).map_err(|e| EolWatchError::FileReadError {
            path: path.to_path_buf(),
            details: format!("Failed to read metadata: {}", e),
        })?;

        if metadata.is_symlink() {
            anyhow::bail!(
                "Security: {} is a symbolic link. For security reasons, symbolic links are not allowed.",
                path.display()
            );
        }

        if !metadata.is_file() {
            anyhow::bail!("{} is not a regular file", path.display());
        }

        let file_size = metadata.len();
        if file_size > MAX_FILE_SIZE {
            anyhow::bail!(
                "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
                path.display(),
                file_size,
                MAX_FILE_SIZE
            );
        }

        fs::read_to_string(path).map_err(|e| {
            EolWatchError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }

    fn parse_manual_eol(
        path: &Path,
        component_name: &str,
        raw: Option<&str>,
    ) -> Result<Option<NaiveDate>> {
        match raw {
            None => Ok(None),
            Some(text) => NaiveDate::parse_from_str(text, DATE_FORMAT)
                .map(Some)
                .map_err(|_| {
                    EolWatchError::InventoryParseError {
                        path: path.to_path_buf(),
                        details: format!(
                            "component '{}' has manual_eol '{}' which is not a YYYY-MM-DD date",
                            component_name, text
                        ),
                    }
                    .into()
                }),
        }
    }

    fn convert(&self, path: &Path, wire: WireInventory) -> Result<Inventory> {
        let mut inventory = Inventory::default();

        for wire_product in wire.products {
            let product_id = ProductId::new(wire_product.id)?;
            let product = Product::new(product_id.clone(), wire_product.name)?;

            for wire_component in wire_product.components {
                let id = match wire_component.id {
                    Some(id) => ComponentId::new(id)?,
                    None => ComponentId::generate(),
                };
                let slug = match wire_component.slug {
                    Some(slug) => FamilySlug::new(slug)?,
                    None => FamilySlug::manual(),
                };
                let manual_eol = Self::parse_manual_eol(
                    path,
                    &wire_component.name,
                    wire_component.manual_eol.as_deref(),
                )?;

                inventory.components.push(TrackedComponent::new(
                    id,
                    product_id.clone(),
                    wire_component.name,
                    slug,
                    wire_component.version,
                    manual_eol,
                )?);
            }

            inventory.products.push(product);
        }

        Ok(inventory)
    }
}

impl Default for InventoryFileReader {
    fn default() -> Self {
        Self::new()
    }
}

impl InventoryReader for InventoryFileReader {
    fn load_inventory(&self, path: &Path) -> Result<Inventory> {
        if !path.exists() {
            return Err(EolWatchError::InventoryNotFound {
                path: path.to_path_buf(),
                suggestion:
                    "Create an inventory file or point --inventory at an existing one".to_string(),
            }
            .into());
        }

        let content = self.safe_read_file(path)?;

        let wire: WireInventory =
            toml::from_str(&content).map_err(|e| EolWatchError::InventoryParseError {
                path: path.to_path_buf(),
                details: e.to_string(),
            })?;

        self.convert(path, wire)
    }
}
