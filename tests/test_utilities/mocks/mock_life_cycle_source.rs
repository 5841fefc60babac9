use async_trait::async_trait;
use eol_watch::prelude::*;
use std::collections::HashMap;
use std::sync::Mutex;

/// Mock LifeCycleSource for testing that records which families were fetched
pub struct MockLifeCycleSource {
    tables: HashMap<String, Vec<LifeCycleRecord>>,
    failing_slugs: Vec<String>,
    fetched: Mutex<Vec<String>>,
}

impl MockLifeCycleSource {
    pub fn new() -> Self {
        Self {
            tables: HashMap::new(),
            failing_slugs: Vec::new(),
            fetched: Mutex::new(Vec::new()),
        }
    }

    pub fn with_table(mut self, slug: &str, records: Vec<LifeCycleRecord>) -> Self {
        self.tables.insert(slug.to_string(), records);
        self
    }

    pub fn with_failing_slug(mut self, slug: &str) -> Self {
        self.failing_slugs.push(slug.to_string());
        self
    }

    /// All slugs fetched so far, in call order
    pub fn fetched_slugs(&self) -> Vec<String> {
        self.fetched.lock().unwrap().clone()
    }

    /// Number of fetches issued for one slug
    pub fn fetch_count(&self, slug: &str) -> usize {
        self.fetched
            .lock()
            .unwrap()
            .iter()
            .filter(|fetched| fetched.as_str() == slug)
            .count()
    }
}

impl Default for MockLifeCycleSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LifeCycleSource for MockLifeCycleSource {
    async fn fetch_family(
        &self,
        slug: &FamilySlug,
    ) -> std::result::Result<Vec<LifeCycleRecord>, SourceError> {
        self.fetched.lock().unwrap().push(slug.as_str().to_string());

        if self.failing_slugs.iter().any(|s| s == slug.as_str()) {
            return Err(SourceError::unavailable(slug, "mock outage"));
        }

        self.tables
            .get(slug.as_str())
            .cloned()
            .ok_or_else(|| SourceError::unavailable(slug, "unknown family"))
    }
}
