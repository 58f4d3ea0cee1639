//! HTTP implementation of [`StatusProvider`].

use super::StatusProvider;
use crate::error::FetchError;
use async_trait::async_trait;
use lp_vault_domain::StatusDocument;
use serde_json::Value;
use std::time::{Duration, Instant};
use tracing::debug;

/// Plain `GET` against a JSON endpoint. No headers beyond the user agent,
/// no request body.
#[derive(Debug, Clone)]
pub struct HttpStatusProvider {
    client: reqwest::Client,
    timeout: Duration,
}

impl HttpStatusProvider {
    /// Default bound on a single request, body included.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Creates a provider with [`Self::DEFAULT_TIMEOUT`].
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn new() -> Result<Self, FetchError> {
        Self::with_timeout(Self::DEFAULT_TIMEOUT)
    }

    /// Creates a provider whose requests give up after `timeout`.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn with_timeout(timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("lp-vault/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(FetchError::Client)?;
        Ok(Self { client, timeout })
    }

    /// Configured request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn classify(&self, url: &str, err: reqwest::Error) -> FetchError {
        let url = url.to_string();
        if err.is_timeout() {
            FetchError::Timeout {
                url,
                timeout_secs: self.timeout.as_secs_f64(),
            }
        } else if err.is_connect() {
            FetchError::Connection { url, source: err }
        } else if err.is_decode() {
            FetchError::Decode { url, source: err }
        } else {
            FetchError::Request { url, source: err }
        }
    }
}

#[async_trait]
impl StatusProvider for HttpStatusProvider {
    async fn get_status(&self, url: &str) -> Result<StatusDocument, FetchError> {
        let started = Instant::now();
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| self.classify(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }

        let body: Value = response.json().await.map_err(|e| self.classify(url, e))?;
        if !body.is_object() {
            debug!(url, "Status body is not a JSON object; treating as empty");
        }

        debug!(
            url,
            status = status.as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Fetched status document"
        );
        Ok(StatusDocument::from_value(body))
    }
}
