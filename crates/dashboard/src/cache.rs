//! Single-key query cache for the fetched record list.
//!
//! Reads go through `get_or_fetch`; concurrent callers on a cold cache share
//! one in-flight fetch. Mutations never update the cache partially, they only
//! invalidate it, forcing the next read to re-fetch.

use log::debug;
use records::{Record, StoreError};
use std::future::Future;
use std::sync::{Arc, Mutex};
use tokio::sync::OnceCell;

#[derive(Debug, Default)]
struct CacheStats {
    hits: u64,
    misses: u64,
    invalidations: u64,
}

/// Cache of the `fetch_all` result under its single logical key.
pub struct QueryCache {
    /// Current generation of the cached value. Invalidation swaps in a fresh
    /// cell; in-flight fetches keep resolving against the old one.
    cell: Mutex<Arc<OnceCell<Vec<Record>>>>,
    stats: Mutex<CacheStats>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self {
            cell: Mutex::new(Arc::new(OnceCell::new())),
            stats: Mutex::new(CacheStats::default()),
        }
    }

    fn current_cell(&self) -> Arc<OnceCell<Vec<Record>>> {
        let guard = self.cell.lock().unwrap_or_else(|e| e.into_inner());
        Arc::clone(&guard)
    }

    fn record_hit(&self) {
        self.stats.lock().unwrap_or_else(|e| e.into_inner()).hits += 1;
    }

    fn record_miss(&self) {
        self.stats.lock().unwrap_or_else(|e| e.into_inner()).misses += 1;
    }

    /// Return the cached collection, fetching it at most once even under
    /// concurrent callers. A failed fetch leaves the cell unset so the next
    /// caller retries.
    pub async fn get_or_fetch<F, Fut>(&self, fetch: F) -> Result<Vec<Record>, StoreError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<Record>, StoreError>>,
    {
        let cell = self.current_cell();

        if let Some(cached) = cell.get() {
            self.record_hit();
            debug!("query cache HIT ({} records)", cached.len());
            return Ok(cached.clone());
        }

        self.record_miss();
        debug!("query cache MISS, fetching");
        let value = cell.get_or_try_init(fetch).await?;
        Ok(value.clone())
    }

    /// Drop the cached value; the next read re-fetches.
    pub fn invalidate(&self) {
        let mut guard = self.cell.lock().unwrap_or_else(|e| e.into_inner());
        *guard = Arc::new(OnceCell::new());
        drop(guard);
        let mut stats = self.stats.lock().unwrap_or_else(|e| e.into_inner());
        stats.invalidations += 1;
        debug!("query cache invalidated");
    }

    /// (hits, misses, invalidations), for debugging and tests.
    pub fn stats(&self) -> (u64, u64, u64) {
        let stats = self.stats.lock().unwrap_or_else(|e| e.into_inner());
        (stats.hits, stats.misses, stats.invalidations)
    }
}

impl Default for QueryCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU64, Ordering};

    fn one_record() -> Vec<Record> {
        vec![Record::draft("1")]
    }

    #[tokio::test]
    async fn second_read_is_a_hit() {
        let cache = QueryCache::new();
        let fetches = AtomicU64::new(0);

        for _ in 0..2 {
            let got = cache
                .get_or_fetch(|| async {
                    fetches.fetch_add(1, Ordering::SeqCst);
                    Ok(one_record())
                })
                .await
                .unwrap();
            assert_eq!(got.len(), 1);
        }

        assert_eq!(fetches.load(Ordering::SeqCst), 1);
        let (hits, misses, _) = cache.stats();
        assert_eq!((hits, misses), (1, 1));
    }

    #[tokio::test]
    async fn invalidation_forces_refetch() {
        let cache = QueryCache::new();
        let fetches = AtomicU64::new(0);

        let fetch = || async {
            fetches.fetch_add(1, Ordering::SeqCst);
            Ok(one_record())
        };
        cache.get_or_fetch(fetch).await.unwrap();
        cache.invalidate();
        cache
            .get_or_fetch(|| async {
                fetches.fetch_add(1, Ordering::SeqCst);
                Ok(one_record())
            })
            .await
            .unwrap();

        assert_eq!(fetches.load(Ordering::SeqCst), 2);
        assert_eq!(cache.stats().2, 1);
    }

    #[tokio::test]
    async fn failed_fetch_leaves_cache_empty() {
        let cache = QueryCache::new();

        let err = cache
            .get_or_fetch(|| async {
                Err(StoreError::Io(std::io::Error::other("disk gone")))
            })
            .await;
        assert!(err.is_err());

        // Next read retries and can succeed.
        let got = cache
            .get_or_fetch(|| async { Ok(one_record()) })
            .await
            .unwrap();
        assert_eq!(got.len(), 1);
    }
}
