//! Data fetching for vault status endpoints.
//!
//! This crate provides:
//! - The [`StatusProvider`] abstraction and its HTTP implementation
//! - A time-to-live response cache keyed by endpoint URL
//! - [`StatusFetcher`], which combines both and downgrades failures to an
//!   empty document plus a reportable error

/// Response cache and clocks.
pub mod cache;
/// Error types.
pub mod error;
/// Cached fetching.
pub mod fetcher;
/// Status document providers.
pub mod providers;

pub use cache::{CacheEntry, Clock, ResponseCache, SystemClock};
pub use error::FetchError;
pub use fetcher::{CachedDocument, FetchOutcome, StatusFetcher};
pub use providers::{HttpStatusProvider, StatusProvider};
