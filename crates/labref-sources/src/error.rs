//! Source loading error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while fetching or decoding a reference dataset.
///
/// Every variant is fatal to the load run; nothing here is retried.
#[derive(Debug, Error)]
pub enum SourceError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The request did not complete within the configured timeout.
    #[error("request to {url} timed out after {secs}s")]
    Timeout {
        /// Requested URL.
        url: String,
        /// Configured timeout.
        secs: u64,
    },

    /// The source returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Response body, if readable.
        message: String,
    },

    /// A local dataset file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The body is not valid JSON.
    #[error("invalid JSON from {location}: {source}")]
    Json {
        location: String,
        #[source]
        source: serde_json::Error,
    },

    /// The body is not valid delimited text.
    #[error("invalid CSV from {location}: {source}")]
    Csv {
        location: String,
        #[source]
        source: csv::Error,
    },
}
