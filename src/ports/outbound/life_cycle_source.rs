use crate::eol_tracking::domain::{FamilySlug, LifeCycleRecord};
use async_trait::async_trait;
use thiserror::Error;

/// Failure of an external life-cycle lookup.
///
/// Network failures, non-success status codes, timeouts and malformed
/// payloads all collapse into `Unavailable`; the caller decides how to
/// degrade, the source never retries. The type is `Clone` so a coalescing
/// decorator can hand the same failure to every waiter of a shared
/// in-flight request.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SourceError {
    #[error("life-cycle source unavailable for '{slug}': {reason}")]
    Unavailable { slug: String, reason: String },
}

impl SourceError {
    pub fn unavailable(slug: &FamilySlug, reason: impl Into<String>) -> Self {
        Self::Unavailable {
            slug: slug.as_str().to_string(),
            reason: reason.into(),
        }
    }
}

/// LifeCycleSource port for fetching a family's life-cycle table.
///
/// This port abstracts the external authoritative source of EOL data.
/// Implementations perform no caching and no retries; deduplication of
/// lookups within an aggregation batch is layered on by a decorator.
///
/// # Async Support
/// The fetch is async so an aggregation pass can fan out one lookup per
/// component concurrently. Implementations must be `Send + Sync`.
#[async_trait]
pub trait LifeCycleSource: Send + Sync {
    /// Fetches the ordered life-cycle table for the given family slug.
    ///
    /// # Errors
    /// Returns `SourceError::Unavailable` if:
    /// - The network request fails or times out
    /// - The source returns a non-success status code
    /// - The response body cannot be parsed
    async fn fetch_family(&self, slug: &FamilySlug)
        -> Result<Vec<LifeCycleRecord>, SourceError>;
}

#[async_trait]
impl<'a, T: LifeCycleSource> LifeCycleSource for &'a T {
    async fn fetch_family(
        &self,
        slug: &FamilySlug,
    ) -> Result<Vec<LifeCycleRecord>, SourceError> {
        (**self).fetch_family(slug).await
    }
}

#[async_trait]
impl<T: LifeCycleSource> LifeCycleSource for std::sync::Arc<T> {
    async fn fetch_family(
        &self,
        slug: &FamilySlug,
    ) -> Result<Vec<LifeCycleRecord>, SourceError> {
        (**self).fetch_family(slug).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_error_display() {
        let slug = FamilySlug::new("oracle-database".to_string()).unwrap();
        let error = SourceError::unavailable(&slug, "connection refused");
        let display = format!("{}", error);
        assert!(display.contains("oracle-database"));
        assert!(display.contains("connection refused"));
    }

    #[test]
    fn test_source_error_is_cloneable() {
        let slug = FamilySlug::new("iis".to_string()).unwrap();
        let error = SourceError::unavailable(&slug, "timeout");
        assert_eq!(error.clone(), error);
    }
}
