use crate::types::error::SeriesError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Failed to build HTTP client")]
    ClientBuild(#[source] reqwest::Error),

    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("HTTP request failed for {url} with status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to decode provider response from {url}")]
    ResponseDecode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Provider response is missing required parameter '{0}'")]
    MissingParameter(String),

    #[error("Provider returned a malformed series")]
    Series(#[from] SeriesError),

    /// For third-party [`DailyProvider`](crate::DailyProvider) implementations to report their own failures.
    #[error("Provider '{provider}' failed: {message}")]
    Provider { provider: String, message: String },
}
