//! Remote dataset locations.

use labref_core::DEFAULT_HP_URL;
use serde::{Deserialize, Serialize};

fn default_hp_url() -> String {
    String::from(DEFAULT_HP_URL)
}

/// Default fetch timeout in seconds.
const fn default_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    String::from(concat!("labref/", env!("CARGO_PKG_VERSION")))
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SourcesConfig {
    /// JSON document with the hazard and precautionary statements.
    #[serde(default = "default_hp_url")]
    pub hp_url: String,

    /// JSON pictogram list. Empty means the built-in GHS01–GHS09 table.
    #[serde(default)]
    pub pictograms_url: String,

    /// CSV CAS catalog. Empty means the built-in sample.
    #[serde(default)]
    pub cas_url: String,

    /// Per-request timeout for remote fetches.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            hp_url: default_hp_url(),
            pictograms_url: String::new(),
            cas_url: String::new(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl SourcesConfig {
    /// Pictogram location, `None` when the built-in table should be used.
    #[must_use]
    pub fn pictograms_location(&self) -> Option<&str> {
        non_empty(&self.pictograms_url)
    }

    /// CAS catalog location, `None` when the built-in sample should be used.
    #[must_use]
    pub fn cas_location(&self) -> Option<&str> {
        non_empty(&self.cas_url)
    }
}

fn non_empty(value: &str) -> Option<&str> {
    let value = value.trim();
    (!value.is_empty()).then_some(value)
}
