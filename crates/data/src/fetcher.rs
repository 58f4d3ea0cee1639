//! Cached status fetching.

use crate::cache::{Clock, ResponseCache, SystemClock};
use crate::error::FetchError;
use crate::providers::StatusProvider;
use chrono::{DateTime, Utc};
use lp_vault_domain::StatusDocument;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// A successfully retrieved document as stored in the cache.
#[derive(Debug, Clone)]
pub struct CachedDocument {
    /// The document.
    pub document: Arc<StatusDocument>,
    /// Wall-clock time of retrieval.
    pub retrieved_at: DateTime<Utc>,
}

/// Result of [`StatusFetcher::fetch`]. Never an `Err`: failures carry an
/// empty document so that every section is skipped downstream.
#[derive(Debug)]
pub struct FetchOutcome {
    /// Document to render; empty on failure.
    pub document: Arc<StatusDocument>,
    /// Failure to report to the user.
    pub error: Option<FetchError>,
    /// Whether the document was served from the cache.
    pub from_cache: bool,
    /// When the document was retrieved from the network.
    pub retrieved_at: Option<DateTime<Utc>>,
}

impl FetchOutcome {
    fn fresh(cached: CachedDocument) -> Self {
        Self {
            document: cached.document,
            error: None,
            from_cache: false,
            retrieved_at: Some(cached.retrieved_at),
        }
    }

    fn cached(cached: CachedDocument) -> Self {
        Self {
            from_cache: true,
            ..Self::fresh(cached)
        }
    }

    fn failed(error: FetchError) -> Self {
        Self {
            document: Arc::new(StatusDocument::empty()),
            error: Some(error),
            from_cache: false,
            retrieved_at: None,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Fetches status documents through a per-URL TTL cache.
///
/// Only successful responses are cached, so a failing endpoint is retried on
/// the next call.
#[derive(Debug)]
pub struct StatusFetcher<P> {
    provider: P,
    cache: ResponseCache<CachedDocument>,
    clock: Arc<dyn Clock>,
}

impl<P: StatusProvider> StatusFetcher<P> {
    /// Default time to live for cached documents.
    pub const DEFAULT_TTL: Duration = Duration::from_secs(300);

    /// Creates a fetcher using the system clock.
    pub fn new(provider: P, ttl: Duration) -> Self {
        Self::with_clock(provider, ttl, Arc::new(SystemClock))
    }

    /// Creates a fetcher with an explicit clock.
    pub fn with_clock(provider: P, ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            provider,
            cache: ResponseCache::new(ttl),
            clock,
        }
    }

    /// The wrapped provider.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Cache time to live.
    pub fn ttl(&self) -> Duration {
        self.cache.ttl()
    }

    /// Returns the document for `url`, from the cache while it is fresh.
    pub async fn fetch(&self, url: &str) -> FetchOutcome {
        let now = self.clock.now();
        if let Some(entry) = self.cache.get(url, now).await {
            debug!(url, age_secs = entry.age(now).as_secs(), "Status cache hit");
            return FetchOutcome::cached(entry.value);
        }

        match self.provider.get_status(url).await {
            Ok(document) => {
                let cached = CachedDocument {
                    document: Arc::new(document),
                    retrieved_at: Utc::now(),
                };
                self.cache
                    .insert(url, cached.clone(), self.clock.now())
                    .await;
                info!(url, "Refreshed status document");
                FetchOutcome::fresh(cached)
            }
            Err(err) => {
                warn!(url, error = %err, "Failed to fetch status document");
                FetchOutcome::failed(err)
            }
        }
    }

    /// Forgets the cached document for `url`.
    pub async fn invalidate(&self, url: &str) -> bool {
        self.cache.invalidate(url).await
    }

    /// Forgets every cached document.
    pub async fn clear(&self) {
        self.cache.clear().await;
    }

    /// Drops documents older than the TTL, returning how many were removed.
    pub async fn purge_expired(&self) -> usize {
        let removed = self.cache.purge_expired(self.clock.now()).await;
        if removed > 0 {
            debug!(removed, "Purged expired status documents");
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::tests::ManualClock;
    use async_trait::async_trait;
    use lp_vault_domain::SectionKind;
    use reqwest::StatusCode;
    use serde_json::json;
    use std::sync::atomic::{AtomicU32, Ordering};

    /// Counts calls; fails for URLs containing "down".
    #[derive(Debug, Default)]
    struct CountingProvider {
        calls: AtomicU32,
    }

    impl CountingProvider {
        fn calls(&self) -> u32 {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl StatusProvider for CountingProvider {
        async fn get_status(&self, url: &str) -> Result<StatusDocument, FetchError> {
            let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
            if url.contains("down") {
                return Err(FetchError::Status {
                    url: url.to_string(),
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                });
            }
            Ok(StatusDocument::from_value(json!({
                "liquidityOverview": {"sumToken0": n}
            })))
        }
    }

    fn fetcher(clock: Arc<ManualClock>) -> StatusFetcher<CountingProvider> {
        StatusFetcher::with_clock(
            CountingProvider::default(),
            StatusFetcher::<CountingProvider>::DEFAULT_TTL,
            clock,
        )
    }

    #[tokio::test]
    async fn test_second_fetch_within_window_is_cached() {
        let clock = Arc::new(ManualClock::new());
        let fetcher = fetcher(clock.clone());

        let first = fetcher.fetch("http://vault/a").await;
        clock.advance(Duration::from_secs(120));
        let second = fetcher.fetch("http://vault/a").await;

        assert_eq!(fetcher.provider().calls(), 1);
        assert!(!first.from_cache);
        assert!(second.from_cache);
        assert_eq!(first.document, second.document);
        assert_eq!(first.retrieved_at, second.retrieved_at);
    }

    #[tokio::test]
    async fn test_fetch_after_expiry_hits_network() {
        let clock = Arc::new(ManualClock::new());
        let fetcher = fetcher(clock.clone());

        fetcher.fetch("http://vault/a").await;
        clock.advance(Duration::from_secs(301));
        let refreshed = fetcher.fetch("http://vault/a").await;

        assert_eq!(fetcher.provider().calls(), 2);
        assert!(!refreshed.from_cache);
        let overview = refreshed.document.section(SectionKind::LiquidityOverview).unwrap();
        assert_eq!(overview["sumToken0"], json!(2));
    }

    #[tokio::test]
    async fn test_urls_are_cached_independently() {
        let clock = Arc::new(ManualClock::new());
        let fetcher = fetcher(clock);

        fetcher.fetch("http://vault/a").await;
        fetcher.fetch("http://vault/b").await;
        fetcher.fetch("http://vault/a").await;

        assert_eq!(fetcher.provider().calls(), 2);
    }

    #[tokio::test]
    async fn test_failure_returns_empty_document_and_is_not_cached() {
        let clock = Arc::new(ManualClock::new());
        let fetcher = fetcher(clock);

        let outcome = fetcher.fetch("http://vault/down").await;
        assert!(!outcome.is_ok());
        assert!(outcome.document.is_empty());
        assert!(outcome.retrieved_at.is_none());
        assert!(matches!(outcome.error, Some(FetchError::Status { .. })));

        fetcher.fetch("http://vault/down").await;
        assert_eq!(fetcher.provider().calls(), 2);
    }

    #[tokio::test]
    async fn test_invalidate_forces_refresh() {
        let clock = Arc::new(ManualClock::new());
        let fetcher = fetcher(clock);

        fetcher.fetch("http://vault/a").await;
        assert!(fetcher.invalidate("http://vault/a").await);
        fetcher.fetch("http://vault/a").await;
        fetcher.clear().await;
        fetcher.fetch("http://vault/a").await;

        assert_eq!(fetcher.provider().calls(), 3);
    }

    #[tokio::test]
    async fn test_purge_expired_drops_stale_documents() {
        let clock = Arc::new(ManualClock::new());
        let fetcher = fetcher(clock.clone());

        fetcher.fetch("http://vault/a").await;
        clock.advance(Duration::from_secs(200));
        fetcher.fetch("http://vault/b").await;
        clock.advance(Duration::from_secs(150));

        assert_eq!(fetcher.purge_expired().await, 1);
        assert!(fetcher.fetch("http://vault/b").await.from_cache);
        assert!(!fetcher.fetch("http://vault/a").await.from_cache);
        assert_eq!(fetcher.provider().calls(), 3);
    }
}
