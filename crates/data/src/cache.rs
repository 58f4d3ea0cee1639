//! Time-to-live cache for endpoint responses.

use std::collections::HashMap;
use std::fmt;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

/// Source of the current time for expiry checks.
pub trait Clock: Send + Sync + fmt::Debug {
    fn now(&self) -> Instant;
}

/// Monotonic system clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A cached value and the moment it was fetched.
#[derive(Debug, Clone)]
pub struct CacheEntry<T> {
    /// Cached value.
    pub value: T,
    /// When the value was stored.
    pub fetched_at: Instant,
}

impl<T> CacheEntry<T> {
    /// Time elapsed since the value was stored.
    pub fn age(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.fetched_at)
    }

    /// An entry is expired once strictly older than `ttl`.
    pub fn is_expired(&self, now: Instant, ttl: Duration) -> bool {
        self.age(now) > ttl
    }
}

/// Cache keyed by endpoint URL.
///
/// Each slot is replaced as a whole under the write lock. Two callers
/// missing the same key concurrently both refresh it; the last write wins.
#[derive(Debug)]
pub struct ResponseCache<T> {
    ttl: Duration,
    entries: RwLock<HashMap<String, CacheEntry<T>>>,
}

impl<T: Clone> ResponseCache<T> {
    /// Creates an empty cache.
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Configured time to live.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Returns the entry for `key` unless it is absent or expired at `now`.
    pub async fn get(&self, key: &str, now: Instant) -> Option<CacheEntry<T>> {
        let entries = self.entries.read().await;
        entries
            .get(key)
            .filter(|entry| !entry.is_expired(now, self.ttl))
            .cloned()
    }

    /// Stores `value` for `key`, replacing any previous entry.
    pub async fn insert(&self, key: impl Into<String>, value: T, now: Instant) {
        self.entries.write().await.insert(
            key.into(),
            CacheEntry {
                value,
                fetched_at: now,
            },
        );
    }

    /// Removes the entry for `key`. Returns whether one existed.
    pub async fn invalidate(&self, key: &str) -> bool {
        self.entries.write().await.remove(key).is_some()
    }

    /// Drops every entry.
    pub async fn clear(&self) {
        self.entries.write().await.clear();
    }

    /// Drops expired entries, returning how many were removed.
    pub async fn purge_expired(&self, now: Instant) -> usize {
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|_, entry| !entry.is_expired(now, self.ttl));
        before - entries.len()
    }

    /// Number of stored entries, expired or not.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Clock that only moves when told to.
    #[derive(Debug)]
    pub(crate) struct ManualClock {
        now: Mutex<Instant>,
    }

    impl ManualClock {
        pub(crate) fn new() -> Self {
            Self {
                now: Mutex::new(Instant::now()),
            }
        }

        pub(crate) fn advance(&self, by: Duration) {
            let mut now = self.now.lock().unwrap();
            *now += by;
        }
    }

    impl Clock for ManualClock {
        fn now(&self) -> Instant {
            *self.now.lock().unwrap()
        }
    }

    #[test]
    fn test_entry_expiry_boundary() {
        let start = Instant::now();
        let entry = CacheEntry {
            value: 1,
            fetched_at: start,
        };
        let ttl = Duration::from_secs(300);

        assert!(!entry.is_expired(start, ttl));
        assert!(!entry.is_expired(start + ttl, ttl));
        assert!(entry.is_expired(start + ttl + Duration::from_millis(1), ttl));
    }

    #[tokio::test]
    async fn test_get_respects_ttl() {
        let cache = ResponseCache::new(Duration::from_secs(300));
        let start = Instant::now();
        cache.insert("http://a", "first", start).await;

        let hit = cache.get("http://a", start + Duration::from_secs(299)).await;
        assert_eq!(hit.map(|e| e.value), Some("first"));

        let miss = cache.get("http://a", start + Duration::from_secs(301)).await;
        assert!(miss.is_none());
        assert!(cache.get("http://b", start).await.is_none());
    }

    #[tokio::test]
    async fn test_insert_replaces_slot() {
        let cache = ResponseCache::new(Duration::from_secs(10));
        let start = Instant::now();
        cache.insert("k", 1, start).await;
        cache.insert("k", 2, start + Duration::from_secs(5)).await;

        let entry = cache.get("k", start + Duration::from_secs(14)).await.unwrap();
        assert_eq!(entry.value, 2);
        assert_eq!(cache.len().await, 1);
    }

    #[tokio::test]
    async fn test_invalidate_and_purge() {
        let cache = ResponseCache::new(Duration::from_secs(10));
        let start = Instant::now();
        cache.insert("old", 1, start).await;
        cache.insert("new", 2, start + Duration::from_secs(8)).await;

        assert_eq!(cache.purge_expired(start + Duration::from_secs(12)).await, 1);
        assert_eq!(cache.len().await, 1);

        assert!(cache.invalidate("new").await);
        assert!(!cache.invalidate("new").await);
        assert!(cache.is_empty().await);
    }
}
