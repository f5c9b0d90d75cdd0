//! Handles the caching logic for external ticker provider data.

use crate::currency_record::CurrencyRecord;
use crate::error::FetchError;
use crate::ticker_providers::TickerProviderKind;
use std::future::Future;
use std::time::{Duration, Instant};
use tokio::sync::{OnceCell, RwLock};

/// How long a fetched ticker list is served before the provider is asked again.
pub const CACHE_DURATION: Duration = Duration::from_secs(60);

#[derive(Clone, Debug)]
struct CachedTickers {
    provider: TickerProviderKind,
    limit: usize,
    records: Vec<CurrencyRecord>,
    last_fetched: Instant,
}

impl CachedTickers {
    fn is_fresh_for(&self, provider: TickerProviderKind, limit: usize, ttl: Duration) -> bool {
        self.provider == provider && self.limit == limit && self.last_fetched.elapsed() < ttl
    }
}

/// A lazy, time-based cache holding the most recent ticker list.
pub struct TickerCache {
    ttl: Duration,
    entry: RwLock<Option<CachedTickers>>,
}

impl TickerCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entry: RwLock::new(None),
        }
    }

    /// Returns the cached list for `(provider, limit)` or calls `fetch` to refresh it.
    ///
    /// A failed fetch leaves the previous entry in place.
    pub async fn get_or_fetch<F, Fut>(
        &self,
        provider: TickerProviderKind,
        limit: usize,
        fetch: F,
    ) -> Result<Vec<CurrencyRecord>, FetchError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<CurrencyRecord>, FetchError>>,
    {
        let read_lock = self.entry.read().await;
        if let Some(cache) = &*read_lock {
            if cache.is_fresh_for(provider, limit, self.ttl) {
                dioxus_logger::tracing::debug!("ticker cache hit ({} records)", cache.records.len());
                return Ok(cache.records.clone());
            }
        }
        drop(read_lock);

        let mut write_lock = self.entry.write().await;

        // another task may have refreshed while we waited for the write lock.
        if let Some(cache) = &*write_lock {
            if cache.is_fresh_for(provider, limit, self.ttl) {
                return Ok(cache.records.clone());
            }
        }

        let records = fetch().await?;
        dioxus_logger::tracing::info!(
            "fetched {} tickers from {}",
            records.len(),
            <&'static str>::from(provider)
        );

        *write_lock = Some(CachedTickers {
            provider,
            limit,
            records: records.clone(),
            last_fetched: Instant::now(),
        });

        Ok(records)
    }
}

/// Retrieves tickers through the process wide cache.
pub async fn get_cached_tickers(
    provider: TickerProviderKind,
    limit: usize,
) -> Result<Vec<CurrencyRecord>, FetchError> {
    static CACHE: OnceCell<TickerCache> = OnceCell::const_new();

    let cache = CACHE
        .get_or_init(|| async { TickerCache::new(CACHE_DURATION) })
        .await;

    cache
        .get_or_fetch(provider, limit, || provider.get_tickers(limit))
        .await
}
