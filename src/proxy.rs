// Pattern 2: Proxy
// A stand-in for a slow data service that caches results and refuses bursts.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

use async_trait::async_trait;
use rand::distributions::Alphanumeric;
use rand::Rng;
use tokio::time::{sleep, Instant};
use tracing::{debug, warn};

use crate::config::ProxyConfig;
use crate::error::{Error, Result};

/// Prefix on values served from the proxy's cache.
pub const CACHED_TAG: &str = "[cached]";

#[async_trait]
pub trait DataService: Send + Sync {
    async fn fetch_data(&self, id: &str) -> Result<String>;
}

// ============================================================================
// Real subject
// ============================================================================

/// Pretends to be a remote backend: waits out a fixed latency, then answers
/// with a fresh random payload.
#[derive(Debug, Clone)]
pub struct RealDataService {
    latency: Duration,
}

impl RealDataService {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    pub fn from_config(config: &ProxyConfig) -> Self {
        Self::new(config.fetch_latency())
    }
}

impl Default for RealDataService {
    fn default() -> Self {
        Self::from_config(&ProxyConfig::default())
    }
}

#[async_trait]
impl DataService for RealDataService {
    async fn fetch_data(&self, id: &str) -> Result<String> {
        sleep(self.latency).await;
        let suffix: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(6)
            .map(|b| char::from(b).to_ascii_lowercase())
            .collect();
        Ok(format!("Data {id}: {suffix}"))
    }
}

// ============================================================================
// Proxy
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessLogEntry {
    pub id: String,
    pub requested_at: Instant,
    pub cached: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheInfo {
    pub size: usize,
    /// Sorted by id.
    pub entries: Vec<CacheEntryInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheEntryInfo {
    pub id: String,
    pub age_secs: u64,
}

#[derive(Debug)]
struct CacheEntry {
    data: String,
    stored_at: Instant,
}

#[derive(Debug, Default)]
struct ProxyState {
    cache: HashMap<String, CacheEntry>,
    access_log: Vec<AccessLogEntry>,
}

impl ProxyState {
    fn recent_requests(&self, now: Instant, window: Duration) -> usize {
        self.access_log
            .iter()
            .filter(|entry| now.duration_since(entry.requested_at) < window)
            .count()
    }
}

/// Guards a [`DataService`] with a time-bounded cache and a sliding-window
/// rate limit.
///
/// Stale entries are only noticed when looked up; nothing sweeps the cache
/// in the background. The state lock is never held across the call into the
/// wrapped service, so overlapping fetches of the same stale id each reach
/// the real service.
pub struct DataServiceProxy<S> {
    real: S,
    config: ProxyConfig,
    state: Mutex<ProxyState>,
}

impl<S: DataService> DataServiceProxy<S> {
    pub fn new(real: S) -> Self {
        Self::with_config(real, ProxyConfig::default())
    }

    pub fn with_config(real: S, config: ProxyConfig) -> Self {
        Self {
            real,
            config,
            state: Mutex::new(ProxyState::default()),
        }
    }

    pub async fn fetch_data(&self, id: &str) -> Result<String> {
        let requested_at = Instant::now();

        {
            let mut state = self.state();

            let hit = state
                .cache
                .get(id)
                .filter(|entry| requested_at.duration_since(entry.stored_at) < self.config.cache_duration())
                .map(|entry| entry.data.clone());

            if let Some(data) = hit {
                debug!(id, "cache hit");
                state.access_log.push(AccessLogEntry {
                    id: id.to_string(),
                    requested_at,
                    cached: true,
                });
                return Ok(format!("{CACHED_TAG} {data}"));
            }

            let recent = state.recent_requests(requested_at, self.config.rate_window());
            if recent > self.config.max_requests {
                warn!(id, recent, limit = self.config.max_requests, "rate limit exceeded");
                return Err(Error::too_many_requests(recent, self.config.max_requests));
            }
        }

        debug!(id, "cache miss, calling real service");
        let data = self.real.fetch_data(id).await?;

        let mut state = self.state();
        state.cache.insert(
            id.to_string(),
            CacheEntry {
                data: data.clone(),
                stored_at: Instant::now(),
            },
        );
        state.access_log.push(AccessLogEntry {
            id: id.to_string(),
            requested_at,
            cached: false,
        });
        Ok(data)
    }

    pub fn access_log(&self) -> Vec<AccessLogEntry> {
        self.state().access_log.clone()
    }

    pub fn cache_info(&self) -> CacheInfo {
        let state = self.state();
        let now = Instant::now();
        let mut entries: Vec<_> = state
            .cache
            .iter()
            .map(|(id, entry)| CacheEntryInfo {
                id: id.clone(),
                age_secs: now.duration_since(entry.stored_at).as_secs(),
            })
            .collect();
        entries.sort_by(|a, b| a.id.cmp(&b.id));

        CacheInfo {
            size: state.cache.len(),
            entries,
        }
    }

    /// Drops every cached value. The access log is kept.
    pub fn clear_cache(&self) {
        self.state().cache.clear();
        debug!("cache cleared");
    }

    pub fn config(&self) -> &ProxyConfig {
        &self.config
    }

    pub fn inner(&self) -> &S {
        &self.real
    }

    fn state(&self) -> MutexGuard<'_, ProxyState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl<S: DataService> DataService for DataServiceProxy<S> {
    async fn fetch_data(&self, id: &str) -> Result<String> {
        DataServiceProxy::fetch_data(self, id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// Counts calls and answers after an optional delay.
    #[derive(Default)]
    struct CountingService {
        calls: AtomicUsize,
        delay: Duration,
    }

    impl CountingService {
        fn slow(delay: Duration) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                delay,
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl DataService for CountingService {
        async fn fetch_data(&self, id: &str) -> Result<String> {
            let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
            if !self.delay.is_zero() {
                sleep(self.delay).await;
            }
            Ok(format!("payload {id} #{n}"))
        }
    }

    fn proxy() -> DataServiceProxy<CountingService> {
        DataServiceProxy::new(CountingService::default())
    }

    #[tokio::test(start_paused = true)]
    async fn test_second_fetch_is_served_from_cache() {
        let proxy = proxy();

        let first = proxy.fetch_data("a").await.unwrap();
        let second = proxy.fetch_data("a").await.unwrap();

        assert_eq!(first, "payload a #1");
        assert_eq!(second, "[cached] payload a #1");
        assert_eq!(proxy.inner().calls(), 1);

        let flags: Vec<_> = proxy.access_log().iter().map(|e| e.cached).collect();
        assert_eq!(flags, vec![false, true]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_entry_expires_at_cache_duration() {
        let proxy = proxy();
        proxy.fetch_data("a").await.unwrap();

        tokio::time::advance(Duration::from_millis(4_999)).await;
        assert!(proxy.fetch_data("a").await.unwrap().starts_with(CACHED_TAG));

        tokio::time::advance(Duration::from_millis(1)).await;
        assert_eq!(proxy.fetch_data("a").await.unwrap(), "payload a #2");
        assert_eq!(proxy.inner().calls(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_rate_limit_rejects_once_window_is_over_limit() {
        let proxy = proxy();

        for i in 0..11 {
            proxy.fetch_data(&format!("id-{i}")).await.unwrap();
        }

        let err = proxy.fetch_data("id-11").await.unwrap_err();
        assert!(matches!(err, Error::TooManyRequests { recent: 11, limit: 10 }));
        assert_eq!(proxy.access_log().len(), 11);
        assert_eq!(proxy.inner().calls(), 11);
    }

    #[tokio::test(start_paused = true)]
    async fn test_window_slides() {
        let proxy = proxy();
        for i in 0..11 {
            proxy.fetch_data(&format!("id-{i}")).await.unwrap();
        }
        assert!(proxy.fetch_data("late").await.is_err());

        tokio::time::advance(Duration::from_secs(10)).await;
        assert_eq!(proxy.fetch_data("late").await.unwrap(), "payload late #12");
    }

    #[tokio::test(start_paused = true)]
    async fn test_cache_hit_bypasses_rate_limit() {
        let proxy = proxy();
        for i in 0..11 {
            proxy.fetch_data(&format!("id-{i}")).await.unwrap();
        }

        let hit = proxy.fetch_data("id-3").await.unwrap();
        assert_eq!(hit, "[cached] payload id-3 #4");
        assert_eq!(proxy.access_log().len(), 12);
    }

    #[tokio::test(start_paused = true)]
    async fn test_clear_cache_keeps_log() {
        let proxy = proxy();
        proxy.fetch_data("a").await.unwrap();
        proxy.fetch_data("b").await.unwrap();

        tokio::time::advance(Duration::from_millis(2_500)).await;
        let info = proxy.cache_info();
        assert_eq!(info.size, 2);
        assert_eq!(
            info.entries,
            vec![
                CacheEntryInfo { id: "a".into(), age_secs: 2 },
                CacheEntryInfo { id: "b".into(), age_secs: 2 },
            ]
        );

        proxy.clear_cache();
        assert_eq!(proxy.cache_info().size, 0);
        assert_eq!(proxy.access_log().len(), 2);

        assert_eq!(proxy.fetch_data("a").await.unwrap(), "payload a #3");
    }

    #[tokio::test(start_paused = true)]
    async fn test_access_log_is_a_snapshot() {
        let proxy = proxy();
        proxy.fetch_data("a").await.unwrap();

        let snapshot = proxy.access_log();
        proxy.fetch_data("b").await.unwrap();

        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].id, "a");
        assert_eq!(proxy.access_log().len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_overlapping_stale_fetches_both_reach_service() {
        let proxy = DataServiceProxy::new(CountingService::slow(Duration::from_millis(100)));

        let (a, b) = tokio::join!(proxy.fetch_data("same"), proxy.fetch_data("same"));

        assert!(a.is_ok() && b.is_ok());
        assert_eq!(proxy.inner().calls(), 2);
        assert!(proxy.access_log().iter().all(|e| !e.cached));
    }

    #[tokio::test(start_paused = true)]
    async fn test_real_service_waits_out_latency() {
        let service = RealDataService::new(Duration::from_secs(1));
        let start = Instant::now();

        let data = service.fetch_data("42").await.unwrap();

        assert!(start.elapsed() >= Duration::from_secs(1));
        let suffix = data.strip_prefix("Data 42: ").unwrap();
        assert_eq!(suffix.len(), 6);
        assert!(suffix.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_proxy_is_itself_a_data_service() {
        let config = ProxyConfig {
            max_requests: 0,
            ..ProxyConfig::default()
        };
        let service: Arc<dyn DataService> =
            Arc::new(DataServiceProxy::with_config(CountingService::default(), config));

        service.fetch_data("x").await.unwrap();
        let err = service.fetch_data("y").await.unwrap_err();
        assert!(err.is_retryable());
    }
}
