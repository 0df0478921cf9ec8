use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

use crate::modules::rpc::RpcError;

/// Capability to mark cached data stale and bring it up to date again.
///
/// Components that mutate remote data depend on this instead of on the cache
/// itself, so they can be tested with a recording stub.
#[async_trait]
pub trait Refresher: Send + Sync {
    async fn invalidate(&self);
}

/// Produces a fresh value for a [`QueryCache`]
#[async_trait]
pub trait QueryFetcher<T>: Send + Sync {
    async fn fetch(&self) -> Result<T, RpcError>;
}

/// What a reader sees of a cached query at one point in time
#[derive(Debug)]
pub enum QuerySnapshot<T> {
    /// Nothing has settled yet (first fetch in flight or not started)
    Pending,
    Ready(Arc<T>),
    /// The fetch failed and there is no earlier data to fall back on
    Failed(String),
}

impl<T> Clone for QuerySnapshot<T> {
    fn clone(&self) -> Self {
        match self {
            QuerySnapshot::Pending => QuerySnapshot::Pending,
            QuerySnapshot::Ready(data) => QuerySnapshot::Ready(Arc::clone(data)),
            QuerySnapshot::Failed(msg) => QuerySnapshot::Failed(msg.clone()),
        }
    }
}

struct Entry<T> {
    data: Option<Arc<T>>,
    error: Option<String>,
    /// Bumped by every invalidation
    generation: u64,
    /// Generation the last settled fetch started under
    settled_generation: Option<u64>,
}

impl<T> Entry<T> {
    fn is_fresh(&self) -> bool {
        self.settled_generation == Some(self.generation) && self.error.is_none()
    }

    fn snapshot(&self) -> QuerySnapshot<T> {
        match (&self.data, &self.error) {
            (Some(data), _) => QuerySnapshot::Ready(Arc::clone(data)),
            (None, Some(err)) => QuerySnapshot::Failed(err.clone()),
            (None, None) => QuerySnapshot::Pending,
        }
    }
}

/// Read-through cache for a single remote query.
///
/// Readers share the last fetched value. Invalidation is monotonic: it bumps a
/// generation counter, and a fetch that started under an older generation
/// never marks the entry fresh. Concurrent refetches are collapsed behind
/// `fetch_gate`. A failed refetch keeps the previous data visible.
pub struct QueryCache<T> {
    name: &'static str,
    fetcher: Arc<dyn QueryFetcher<T>>,
    entry: RwLock<Entry<T>>,
    fetch_gate: Mutex<()>,
}

impl<T: Send + Sync + 'static> QueryCache<T> {
    pub fn new(name: &'static str, fetcher: Arc<dyn QueryFetcher<T>>) -> Self {
        Self {
            name,
            fetcher,
            entry: RwLock::new(Entry {
                data: None,
                error: None,
                generation: 0,
                settled_generation: None,
            }),
            fetch_gate: Mutex::new(()),
        }
    }

    /// Current state without triggering a fetch
    pub async fn snapshot(&self) -> QuerySnapshot<T> {
        self.entry.read().await.snapshot()
    }

    /// Whether the next [`get`](Self::get) would be answered from the cache
    pub async fn is_fresh(&self) -> bool {
        self.entry.read().await.is_fresh()
    }

    /// Return the cached value, fetching first when it is missing or stale
    pub async fn get(&self) -> QuerySnapshot<T> {
        {
            let entry = self.entry.read().await;
            if entry.is_fresh() {
                return entry.snapshot();
            }
        }

        let _gate = self.fetch_gate.lock().await;

        // Another reader may have refreshed while we waited on the gate
        {
            let entry = self.entry.read().await;
            if entry.is_fresh() {
                return entry.snapshot();
            }
        }

        self.fetch_locked().await;
        self.snapshot().await
    }

    /// Mark the entry stale and refetch it
    pub async fn invalidate_and_refetch(&self) {
        {
            let mut entry = self.entry.write().await;
            entry.generation += 1;
            tracing::debug!(
                "Invalidated query {} (generation {})",
                self.name,
                entry.generation
            );
        }

        let _gate = self.fetch_gate.lock().await;
        if self.is_fresh().await {
            return;
        }
        self.fetch_locked().await;
    }

    /// Caller must hold `fetch_gate`
    async fn fetch_locked(&self) {
        let generation = self.entry.read().await.generation;
        let result = self.fetcher.fetch().await;

        let mut entry = self.entry.write().await;
        match result {
            Ok(data) => {
                entry.data = Some(Arc::new(data));
                entry.error = None;
                tracing::debug!("Fetched query {} (generation {})", self.name, generation);
            }
            Err(e) => {
                tracing::warn!("Fetching query {} failed: {}", self.name, e);
                entry.error = Some(e.to_string());
            }
        }
        entry.settled_generation = Some(generation);
    }
}

#[async_trait]
impl<T: Send + Sync + 'static> Refresher for QueryCache<T> {
    async fn invalidate(&self) {
        self.invalidate_and_refetch().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
    use tokio::sync::Notify;

    /// Returns how many times it has been called; optionally fails or blocks
    struct CountingFetcher {
        calls: AtomicU32,
        fail: AtomicBool,
        hold: AtomicBool,
        started: Notify,
        release: Notify,
    }

    impl CountingFetcher {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicU32::new(0),
                fail: AtomicBool::new(false),
                hold: AtomicBool::new(false),
                started: Notify::new(),
                release: Notify::new(),
            })
        }
    }

    #[async_trait]
    impl QueryFetcher<u32> for CountingFetcher {
        async fn fetch(&self) -> Result<u32, RpcError> {
            let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
            if self.hold.load(Ordering::SeqCst) {
                self.started.notify_one();
                self.release.notified().await;
            }
            if self.fail.load(Ordering::SeqCst) {
                return Err(RpcError::Transport("boom".to_string()));
            }
            Ok(n)
        }
    }

    fn ready(snapshot: QuerySnapshot<u32>) -> u32 {
        match snapshot {
            QuerySnapshot::Ready(v) => *v,
            other => panic!("expected ready snapshot, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_get_fetches_once_then_serves_cache() {
        let fetcher = CountingFetcher::new();
        let cache = QueryCache::new("counter", fetcher.clone() as Arc<dyn QueryFetcher<u32>>);

        assert!(matches!(cache.snapshot().await, QuerySnapshot::Pending));
        assert_eq!(ready(cache.get().await), 1);
        assert_eq!(ready(cache.get().await), 1);
        assert_eq!(fetcher.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_invalidate_refetches() {
        let fetcher = CountingFetcher::new();
        let cache = QueryCache::new("counter", fetcher.clone() as Arc<dyn QueryFetcher<u32>>);

        assert_eq!(ready(cache.get().await), 1);
        cache.invalidate().await;
        assert!(cache.is_fresh().await);
        assert_eq!(ready(cache.snapshot().await), 2);
        assert_eq!(ready(cache.get().await), 2);
    }

    #[tokio::test]
    async fn test_failure_without_data_is_failed_and_retried() {
        let fetcher = CountingFetcher::new();
        fetcher.fail.store(true, Ordering::SeqCst);
        let cache = QueryCache::new("counter", fetcher.clone() as Arc<dyn QueryFetcher<u32>>);

        assert!(matches!(cache.get().await, QuerySnapshot::Failed(_)));
        assert!(!cache.is_fresh().await);

        fetcher.fail.store(false, Ordering::SeqCst);
        assert_eq!(ready(cache.get().await), 2);
    }

    #[tokio::test]
    async fn test_failed_refetch_keeps_previous_data() {
        let fetcher = CountingFetcher::new();
        let cache = QueryCache::new("counter", fetcher.clone() as Arc<dyn QueryFetcher<u32>>);

        assert_eq!(ready(cache.get().await), 1);
        fetcher.fail.store(true, Ordering::SeqCst);
        cache.invalidate().await;
        assert_eq!(ready(cache.snapshot().await), 1);
    }

    #[tokio::test]
    async fn test_invalidation_during_fetch_keeps_entry_stale() {
        let fetcher = CountingFetcher::new();
        let cache = Arc::new(QueryCache::new(
            "counter",
            fetcher.clone() as Arc<dyn QueryFetcher<u32>>,
        ));

        fetcher.hold.store(true, Ordering::SeqCst);
        let reader = {
            let cache = Arc::clone(&cache);
            tokio::spawn(async move { cache.get().await })
        };
        fetcher.started.notified().await;

        // Bump the generation while the first fetch is still in flight
        cache.entry.write().await.generation += 1;
        fetcher.hold.store(false, Ordering::SeqCst);
        fetcher.release.notify_one();

        assert_eq!(ready(reader.await.unwrap()), 1);
        assert!(!cache.is_fresh().await);
        assert_eq!(ready(cache.get().await), 2);
    }
}
