use chrono::{DateTime, Duration, Utc};
use parking_lot::{Mutex, RwLock};
use probsim_core::{Catalog, Error, Result, TagVectorizer};
use std::sync::Arc;
use tracing::{debug, info, warn};
use crate::provider::CatalogProvider;

/// Catalogs older than this are reloaded (about 28 hours)
pub const DEFAULT_TTL_SECS: i64 = 100_000;

pub fn default_ttl() -> Duration {
    Duration::seconds(DEFAULT_TTL_SECS)
}

/// An immutable catalog plus the instant it was loaded
#[derive(Debug)]
pub struct CatalogSnapshot {
    catalog: Catalog,
    loaded_at: DateTime<Utc>,
}

impl CatalogSnapshot {
    pub fn new(catalog: Catalog, loaded_at: DateTime<Utc>) -> Self {
        Self { catalog, loaded_at }
    }

    #[inline]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[inline]
    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    /// True once more than `ttl` has passed since loading
    pub fn is_stale(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        now.signed_duration_since(self.loaded_at) > ttl
    }
}

/// Holds the current catalog snapshot
///
/// Readers get an `Arc` to an immutable snapshot. A refresh builds a new
/// catalog and swaps it in whole, so a reader never observes a vocabulary
/// from one load mixed with vectors from another.
pub struct CatalogStore {
    current: RwLock<Option<Arc<CatalogSnapshot>>>,
    refresh_lock: Mutex<()>,
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogStore {
    /// An empty store; always stale until the first refresh
    pub fn new() -> Self {
        Self {
            current: RwLock::new(None),
            refresh_lock: Mutex::new(()),
        }
    }

    /// A store that starts from an already loaded snapshot
    pub fn with_snapshot(snapshot: CatalogSnapshot) -> Self {
        Self {
            current: RwLock::new(Some(Arc::new(snapshot))),
            refresh_lock: Mutex::new(()),
        }
    }

    #[inline]
    pub fn snapshot(&self) -> Option<Arc<CatalogSnapshot>> {
        self.current.read().clone()
    }

    /// The current snapshot, or [`Error::CatalogUnavailable`] before the first load
    pub fn current(&self) -> Result<Arc<CatalogSnapshot>> {
        self.snapshot().ok_or(Error::CatalogUnavailable)
    }

    pub fn loaded_at(&self) -> Option<DateTime<Utc>> {
        self.current.read().as_ref().map(|s| s.loaded_at())
    }

    pub fn is_stale(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        match self.current.read().as_ref() {
            Some(snapshot) => snapshot.is_stale(now, ttl),
            None => true,
        }
    }

    /// Unconditionally reload from `provider`
    ///
    /// On failure the previous snapshot stays in place.
    pub fn refresh(
        &self,
        now: DateTime<Utc>,
        provider: &dyn CatalogProvider,
    ) -> Result<Arc<CatalogSnapshot>> {
        let _guard = self.refresh_lock.lock();
        self.load(now, provider)
    }

    /// Reload only if the current snapshot is older than `ttl`
    ///
    /// Returns whether a reload happened. Concurrent callers that all see a
    /// stale snapshot fetch once; the rest find it fresh after waiting.
    pub fn refresh_if_stale(
        &self,
        now: DateTime<Utc>,
        ttl: Duration,
        provider: &dyn CatalogProvider,
    ) -> Result<bool> {
        if !self.is_stale(now, ttl) {
            debug!("Catalog is fresh, skipping refresh");
            return Ok(false);
        }

        let _guard = self.refresh_lock.lock();
        if !self.is_stale(now, ttl) {
            debug!("Catalog was refreshed by another caller");
            return Ok(false);
        }

        self.load(now, provider)?;
        Ok(true)
    }

    fn load(
        &self,
        now: DateTime<Utc>,
        provider: &dyn CatalogProvider,
    ) -> Result<Arc<CatalogSnapshot>> {
        let catalog = provider
            .fetch()
            .and_then(|records| TagVectorizer::vectorize(&records))
            .map_err(|e| {
                warn!("Catalog refresh failed, keeping previous snapshot: {}", e);
                e
            })?;

        info!(
            "Catalog loaded: {} problems, {} tags",
            catalog.len(),
            catalog.vocabulary().len()
        );

        let snapshot = Arc::new(CatalogSnapshot::new(catalog, now));
        *self.current.write() = Some(snapshot.clone());
        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::StaticProvider;
    use probsim_core::RawProblem;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingProvider {
        calls: AtomicUsize,
    }

    impl CountingProvider {
        fn new() -> Self {
            Self { calls: AtomicUsize::new(0) }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl CatalogProvider for CountingProvider {
        fn fetch(&self) -> Result<Vec<RawProblem>> {
            let n = self.calls.fetch_add(1, Ordering::SeqCst) as u32;
            Ok(vec![
                RawProblem::new(1, "A", "A").with_tags(["dp"]).with_rating(1500),
                RawProblem::new(2 + n, "A", "Generation").with_tags(["dp"]).with_rating(1500),
            ])
        }
    }

    struct FailingProvider;

    impl CatalogProvider for FailingProvider {
        fn fetch(&self) -> Result<Vec<RawProblem>> {
            Err(Error::Io(std::io::Error::new(std::io::ErrorKind::TimedOut, "upstream timed out")))
        }
    }

    fn start() -> DateTime<Utc> {
        DateTime::from_timestamp(1_700_000_000, 0).unwrap()
    }

    #[test]
    fn test_empty_store_is_stale() {
        let store = CatalogStore::new();
        assert!(store.is_stale(start(), default_ttl()));
        assert!(store.snapshot().is_none());
        assert!(matches!(store.current(), Err(Error::CatalogUnavailable)));
        assert!(store.loaded_at().is_none());
    }

    #[test]
    fn test_refresh_if_stale_loads_once_within_ttl() {
        let store = CatalogStore::new();
        let provider = CountingProvider::new();

        assert!(store.refresh_if_stale(start(), default_ttl(), &provider).unwrap());
        assert_eq!(store.loaded_at(), Some(start()));

        let later = start() + Duration::hours(27);
        assert!(!store.refresh_if_stale(later, default_ttl(), &provider).unwrap());
        assert_eq!(provider.calls(), 1);
        assert_eq!(store.loaded_at(), Some(start()));
    }

    #[test]
    fn test_refresh_after_ttl_replaces_snapshot() {
        let store = CatalogStore::new();
        let provider = CountingProvider::new();
        store.refresh_if_stale(start(), default_ttl(), &provider).unwrap();
        let old = store.current().unwrap();

        let later = start() + Duration::hours(29);
        assert!(store.refresh_if_stale(later, default_ttl(), &provider).unwrap());
        assert_eq!(provider.calls(), 2);

        let new = store.current().unwrap();
        assert_eq!(new.loaded_at(), later);
        assert!(new.catalog().get("3A").is_some());
        // Readers holding the old snapshot keep a consistent view
        assert!(old.catalog().get("2A").is_some());
        assert!(old.catalog().get("3A").is_none());
    }

    #[test]
    fn test_ttl_boundary_is_not_stale() {
        let store = CatalogStore::new();
        store.refresh(start(), &StaticProvider::default()).unwrap();

        let ttl = Duration::seconds(60);
        assert!(!store.is_stale(start() + Duration::seconds(60), ttl));
        assert!(store.is_stale(start() + Duration::seconds(61), ttl));
    }

    #[test]
    fn test_failed_refresh_keeps_previous_snapshot() {
        let store = CatalogStore::new();
        store.refresh(start(), &CountingProvider::new()).unwrap();

        let later = start() + Duration::hours(30);
        let err = store.refresh_if_stale(later, default_ttl(), &FailingProvider).unwrap_err();
        assert!(matches!(err, Error::Io(_)));

        let snapshot = store.current().unwrap();
        assert_eq!(snapshot.loaded_at(), start());
        assert_eq!(snapshot.catalog().len(), 2);
    }

    #[test]
    fn test_malformed_catalog_is_rejected() {
        let store = CatalogStore::new();
        let provider = StaticProvider::new(vec![RawProblem {
            contest_id: None,
            index: Some("A".to_string()),
            ..Default::default()
        }]);

        let err = store.refresh(start(), &provider).unwrap_err();
        assert!(matches!(err, Error::MalformedInput(_)));
        assert!(store.snapshot().is_none());
    }

    #[test]
    fn test_concurrent_refresh_fetches_once() {
        let store = CatalogStore::new();
        let provider = CountingProvider::new();

        let reloaded: usize = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| {
                    scope.spawn(|| {
                        store
                            .refresh_if_stale(start(), default_ttl(), &provider)
                            .unwrap()
                    })
                })
                .collect();
            handles
                .into_iter()
                .map(|h| usize::from(h.join().unwrap()))
                .sum()
        });

        assert_eq!(reloaded, 1);
        assert_eq!(provider.calls(), 1);
    }

    #[test]
    fn test_seeded_store_honours_ttl() {
        let catalog = TagVectorizer::vectorize(&[
            RawProblem::new(1, "A", "Seeded").with_tags(["dp"]).with_rating(1500),
        ])
        .unwrap();
        let store = CatalogStore::with_snapshot(CatalogSnapshot::new(catalog, start()));
        let provider = CountingProvider::new();

        let within = start() + Duration::hours(27);
        assert!(!store.refresh_if_stale(within, default_ttl(), &provider).unwrap());
        assert_eq!(provider.calls(), 0);
        assert!(store.current().unwrap().catalog().get("1A").is_some());

        let past = start() + Duration::hours(28);
        assert!(store.refresh_if_stale(past, default_ttl(), &provider).unwrap());
        assert_eq!(provider.calls(), 1);
        assert_eq!(store.loaded_at(), Some(past));
    }

    #[test]
    fn test_explicit_refresh_ignores_freshness() {
        let store = CatalogStore::new();
        let provider = CountingProvider::new();
        store.refresh(start(), &provider).unwrap();
        store.refresh(start(), &provider).unwrap();
        assert_eq!(provider.calls(), 2);
    }
}
