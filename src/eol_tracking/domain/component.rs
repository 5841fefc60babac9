use crate::shared::Result;
use chrono::NaiveDate;
use serde::Serialize;

/// Maximum length for family slugs (security limit)
const MAX_SLUG_LENGTH: usize = 100;

/// Maximum length for version strings (security limit)
const MAX_VERSION_LENGTH: usize = 100;

/// NewType wrapper for a product identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ProductId(String);

impl ProductId {
    pub fn new(id: String) -> Result<Self> {
        if id.is_empty() {
            anyhow::bail!("Product id cannot be empty");
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// NewType wrapper for a tracked component identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ComponentId(String);

impl ComponentId {
    pub fn new(id: String) -> Result<Self> {
        if id.is_empty() {
            anyhow::bail!("Component id cannot be empty");
        }
        Ok(Self(id))
    }

    /// Generates a fresh random identifier, for inventory entries that
    /// do not carry one.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ComponentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// NewType wrapper for an external-source family identifier with validation.
///
/// The slug keys a product family's life-cycle table on the external
/// source and is interpolated into a request URL, so the characters that
/// could alter the request path are rejected up front. The reserved slug
/// `manual` means "no external source; only a manual EOL date applies".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct FamilySlug(String);

impl FamilySlug {
    /// Reserved slug meaning "manual only, never consult the external source".
    pub const MANUAL: &'static str = "manual";

    pub fn new(slug: String) -> Result<Self> {
        if slug.is_empty() {
            anyhow::bail!("Family slug cannot be empty");
        }

        // Security: Length limit to prevent DoS
        if slug.len() > MAX_SLUG_LENGTH {
            anyhow::bail!(
                "Family slug is too long ({} bytes). Maximum allowed: {} bytes",
                slug.len(),
                MAX_SLUG_LENGTH
            );
        }

        // Security: Prevent URL injection via the request path
        if slug.contains('/') || slug.contains('\\') {
            anyhow::bail!("Family slug contains path separators which are not allowed");
        }

        if slug.contains("..") {
            anyhow::bail!("Family slug contains '..' which is not allowed");
        }

        if slug.contains('#') || slug.contains('?') || slug.contains('@') {
            anyhow::bail!("Family slug contains URL-unsafe characters");
        }

        Ok(Self(slug))
    }

    /// Constructs the reserved manual-only sentinel.
    pub fn manual() -> Self {
        Self(Self::MANUAL.to_string())
    }

    /// Whether this slug is the manual-only sentinel.
    pub fn is_manual(&self) -> bool {
        self.0 == Self::MANUAL
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for FamilySlug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// TrackedComponent value object: one software/version pair under watch.
///
/// Created from inventory records, mutated only by user edits upstream;
/// the engine treats it as immutable input.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackedComponent {
    id: ComponentId,
    product_id: ProductId,
    name: String,
    slug: FamilySlug,
    version: String,
    manual_eol: Option<NaiveDate>,
}

impl TrackedComponent {
    pub fn new(
        id: ComponentId,
        product_id: ProductId,
        name: String,
        slug: FamilySlug,
        version: String,
        manual_eol: Option<NaiveDate>,
    ) -> Result<Self> {
        if name.is_empty() {
            anyhow::bail!("Component name cannot be empty");
        }

        if version.is_empty() {
            anyhow::bail!("Component version cannot be empty");
        }

        if version.len() > MAX_VERSION_LENGTH {
            anyhow::bail!(
                "Component version is too long ({} bytes). Maximum allowed: {} bytes",
                version.len(),
                MAX_VERSION_LENGTH
            );
        }

        Ok(Self {
            id,
            product_id,
            name,
            slug,
            version,
            manual_eol,
        })
    }

    pub fn id(&self) -> &ComponentId {
        &self.id
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

    pub fn manual_eol(&self) -> Option<NaiveDate> {
        self.manual_eol
    }
}
