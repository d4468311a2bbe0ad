//! # labref-sources
//!
//! Fetches the chemical-safety reference datasets and normalizes them into
//! canonical rows:
//! - hazard and precautionary statements (JSON, several layouts)
//! - GHS pictograms (JSON, or the built-in table)
//! - the CAS catalog (CSV with a header row, or the built-in sample)
//!
//! Locations starting with `http://` or `https://` are fetched over HTTP with
//! a bounded timeout; anything else is read from the local filesystem.
//! Every failure is returned to the caller; there is no partial-success path.

pub mod cas;
pub mod lookup;
pub mod pictograms;
pub mod statements;

mod error;
mod http;

pub use error::SourceError;
pub use statements::StatementCodes;

use std::path::PathBuf;
use std::time::Duration;

use labref_config::SourcesConfig;
use labref_core::ReferenceSet;

// ── Client ─────────────────────────────────────────────────────────

/// Client for the configured reference-data sources.
pub struct SourceClient {
    http: reqwest::Client,
    timeout: Duration,
}

impl SourceClient {
    /// Create a client whose requests time out after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Http`] if the underlying `reqwest::Client`
    /// cannot be built.
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self, SourceError> {
        let http = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()?;
        Ok(Self { http, timeout })
    }

    /// Create a client from the `[sources]` configuration section.
    ///
    /// # Errors
    ///
    /// See [`Self::new`].
    pub fn from_config(config: &SourcesConfig) -> Result<Self, SourceError> {
        Self::new(Duration::from_secs(config.timeout_secs), &config.user_agent)
    }

    /// Load all four catalogs, one after another.
    ///
    /// The first failure aborts the whole load; nothing is returned for the
    /// datasets already fetched.
    ///
    /// # Errors
    ///
    /// Returns the first [`SourceError`] raised by any dataset.
    pub async fn load_all(&self, config: &SourcesConfig) -> Result<ReferenceSet, SourceError> {
        let statements = self.load_statement_codes(config.hp_url.trim()).await?;
        let pictograms = self.load_pictograms(config.pictograms_location()).await?;
        let cas_entries = self.load_cas_catalog(config.cas_location()).await?;

        Ok(ReferenceSet {
            hazard_codes: statements.hazards,
            precaution_codes: statements.precautions,
            pictograms,
            cas_entries,
        })
    }

    /// Read the raw body behind `location`.
    pub(crate) async fn fetch(&self, location: &str) -> Result<Vec<u8>, SourceError> {
        if http::is_remote(location) {
            return self.fetch_remote(location).await;
        }

        let path = PathBuf::from(location.strip_prefix("file://").unwrap_or(location));
        tracing::debug!(path = %path.display(), "reading local dataset");
        tokio::fs::read(&path)
            .await
            .map_err(|source| SourceError::Io { path, source })
    }

    async fn fetch_remote(&self, url: &str) -> Result<Vec<u8>, SourceError> {
        tracing::debug!(url, "fetching dataset");
        let resp = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| self.transport_error(url, e))?;
        let resp = http::check_response(resp).await?;
        let body = resp
            .bytes()
            .await
            .map_err(|e| self.transport_error(url, e))?;
        Ok(body.to_vec())
    }

    fn transport_error(&self, url: &str, error: reqwest::Error) -> SourceError {
        if error.is_timeout() {
            SourceError::Timeout {
                url: url.to_string(),
                secs: self.timeout.as_secs(),
            }
        } else {
            SourceError::Http(error)
        }
    }
}

/// Decode a JSON body, tagging failures with their location.
pub(crate) fn decode_json(location: &str, body: &[u8]) -> Result<serde_json::Value, SourceError> {
    serde_json::from_slice(body).map_err(|source| SourceError::Json {
        location: location.to_string(),
        source,
    })
}
