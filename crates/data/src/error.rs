use reqwest::StatusCode;
use thiserror::Error;

/// Failure to obtain a status document from an endpoint.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The endpoint answered with a non-2xx status.
    #[error("HTTP error occurred while fetching data from {url}: {status}")]
    Status { url: String, status: StatusCode },

    /// The connection could not be established.
    #[error("Connection error occurred while fetching data from {url}: {source}")]
    Connection {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// No complete response within the configured timeout.
    #[error("Request to {url} timed out after {timeout_secs:.1}s")]
    Timeout { url: String, timeout_secs: f64 },

    /// The body was not valid JSON.
    #[error("Invalid JSON received from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Any other transport failure.
    #[error("An error occurred while fetching data from {url}: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The HTTP client could not be built.
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}
