use crate::eol_tracking::domain::{EolDeclaration, FamilySlug, LifeCycleRecord};
use crate::ports::outbound::{LifeCycleSource, SourceError};
use crate::shared::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Deserialize;
use std::time::Duration;

/// Default base URL of the external life-cycle source.
pub const DEFAULT_BASE_URL: &str = "https://endoflife.date";

/// Default per-request timeout. A single slow host must not be able to
/// stall an entire aggregation pass.
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// One row of the source's family table as it appears on the wire.
///
/// The `eol` field is either a date string or a boolean; both boolean
/// values mean "no concrete date declared". Cycle labels occasionally
/// arrive as bare JSON numbers, so the label is accepted in either shape.
#[derive(Debug, Deserialize)]
struct WireCycle {
    cycle: WireLabel,
    #[serde(default)]
    eol: WireEol,
    #[serde(default, rename = "releaseDate")]
    release_date: Option<String>,
    #[serde(default)]
    latest: Option<String>,
    #[serde(default)]
    lts: WireLts,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum WireLabel {
    Text(String),
    Number(serde_json::Number),
}

impl WireLabel {
    fn into_label(self) -> String {
        match self {
            WireLabel::Text(text) => text,
            WireLabel::Number(number) => number.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum WireEol {
    Flag(bool),
    Text(String),
}

impl Default for WireEol {
    fn default() -> Self {
        WireEol::Flag(false)
    }
}

/// The source marks LTS cycles with `true` or with the date the LTS
/// phase started; either way the record is LTS.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum WireLts {
    Flag(bool),
    Text(String),
}

impl Default for WireLts {
    fn default() -> Self {
        WireLts::Flag(false)
    }
}

impl WireLts {
    fn is_lts(&self) -> bool {
        match self {
            WireLts::Flag(flag) => *flag,
            WireLts::Text(_) => true,
        }
    }
}

/// EndOfLifeClient adapter for fetching life-cycle tables over HTTP.
///
/// This adapter implements the LifeCycleSource port against an
/// endoflife.date-shaped JSON API: `GET <base>/api/<slug>.json`.
///
/// The client itself never retries and never caches; every failure mode
/// (network error, timeout, non-success status, malformed payload)
/// collapses into `SourceError::Unavailable` for the caller to absorb.
pub struct EndOfLifeClient {
    client: reqwest::Client,
    base_url: String,
}

impl EndOfLifeClient {
    /// Creates a client against the default source with the default timeout.
    pub fn new() -> Result<Self> {
        Self::with_config(DEFAULT_BASE_URL, Duration::from_secs(DEFAULT_TIMEOUT_SECONDS))
    }

    /// Creates a client against a specific base URL with a specific
    /// per-request timeout.
    pub fn with_config(base_url: &str, timeout: Duration) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("eol-watch/{}", version);
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn family_url(&self, slug: &FamilySlug) -> String {
        // The slug newtype already rejects path separators; encoding
        // handles the remaining special characters.
        let encoded = urlencoding::encode(slug.as_str());
        format!("{}/api/{}.json", self.base_url, encoded)
    }
}

/// Converts the wire rows into domain records.
///
/// A malformed `eol` date string makes the whole payload malformed;
/// ancillary fields are parsed leniently because nothing downstream
/// depends on them.
fn convert_table(slug: &FamilySlug, rows: Vec<WireCycle>) -> Result<Vec<LifeCycleRecord>, SourceError> {
    let mut records = Vec::with_capacity(rows.len());

    for row in rows {
        let eol = match row.eol {
            WireEol::Flag(_) => EolDeclaration::Undeclared,
            WireEol::Text(text) => {
                let date = NaiveDate::parse_from_str(&text, DATE_FORMAT).map_err(|_| {
                    SourceError::unavailable(slug, format!("malformed eol date '{}'", text))
                })?;
                EolDeclaration::Date(date)
            }
        };

        let release_date = row
            .release_date
            .as_deref()
            .and_then(|text| NaiveDate::parse_from_str(text, DATE_FORMAT).ok());

        records.push(LifeCycleRecord::new(
            row.cycle.into_label(),
            eol,
            release_date,
            row.latest,
            row.lts.is_lts(),
        ));
    }

    Ok(records)
}

#[async_trait]
impl LifeCycleSource for EndOfLifeClient {
    async fn fetch_family(
        &self,
        slug: &FamilySlug,
    ) -> Result<Vec<LifeCycleRecord>, SourceError> {
        let url = self.family_url(slug);
        tracing::debug!(slug = slug.as_str(), url = url.as_str(), "fetching life-cycle table");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| SourceError::unavailable(slug, e.to_string()))?;

        if !response.status().is_success() {
            return Err(SourceError::unavailable(
                slug,
                format!("status code {}", response.status()),
            ));
        }

        let rows: Vec<WireCycle> = response
            .json()
            .await
            .map_err(|e| SourceError::unavailable(slug, format!("malformed payload: {}", e)))?;

        convert_table(slug, rows)
    }
}
