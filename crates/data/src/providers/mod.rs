//! Sources of status documents.

mod http;

pub use http::HttpStatusProvider;

use crate::error::FetchError;
use async_trait::async_trait;
use lp_vault_domain::StatusDocument;

/// Something that can produce the status document of an endpoint.
#[async_trait]
pub trait StatusProvider: Send + Sync {
    /// Retrieves the current document for `url`.
    async fn get_status(&self, url: &str) -> Result<StatusDocument, FetchError>;
}
