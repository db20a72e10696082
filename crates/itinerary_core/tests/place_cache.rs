use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use itinerary_core::config::CacheConfig;
use itinerary_core::{Clock, PlaceCache, PlaceResolver, ResolveError, ResolvedPlace};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct CountingResolver {
    calls: AtomicUsize,
}

#[async_trait]
impl PlaceResolver for CountingResolver {
    async fn resolve(&self, name_or_id: &str) -> Result<Option<ResolvedPlace>, ResolveError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match name_or_id.trim() {
            "nowhere" => Ok(None),
            "broken" => Err(ResolveError::Rejected("bad query".to_string())),
            query => Ok(Some(ResolvedPlace {
                place_id: format!("ChIJ{:0>20}", query.len()),
                name: query.to_string(),
                country: None,
                city: None,
                coordinates: None,
                timezone: None,
            })),
        }
    }
}

#[derive(Clone)]
struct ManualClock(Arc<Mutex<DateTime<Utc>>>);

impl ManualClock {
    fn new() -> Self {
        Self(Arc::new(Mutex::new(
            Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
        )))
    }

    fn advance(&self, seconds: i64) {
        let mut now = self.0.lock().unwrap();
        *now += Duration::seconds(seconds);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.0.lock().unwrap()
    }
}

fn config(ttl_secs: u64, max_entries: usize) -> CacheConfig {
    CacheConfig {
        ttl_secs,
        max_entries,
    }
}

#[tokio::test]
async fn hits_are_served_from_cache_by_normalized_key() {
    let inner = CountingResolver::default();
    let cache = PlaceCache::with_clock(&inner, &config(60, 8), ManualClock::new());

    let first = cache.resolve("Tokyo").await.unwrap();
    let second = cache.resolve("  tokyo ").await.unwrap();

    assert!(first.is_some());
    assert_eq!(first, second);
    assert_eq!(inner.calls.load(Ordering::SeqCst), 1);
    assert_eq!(cache.len(), 1);
}

#[tokio::test]
async fn misses_and_errors_are_not_cached() {
    let inner = CountingResolver::default();
    let cache = PlaceCache::with_clock(&inner, &config(60, 8), ManualClock::new());

    assert_eq!(cache.resolve("nowhere").await.unwrap(), None);
    assert_eq!(cache.resolve("nowhere").await.unwrap(), None);
    assert!(cache.resolve("broken").await.is_err());

    assert_eq!(inner.calls.load(Ordering::SeqCst), 3);
    assert!(cache.is_empty());
}

#[tokio::test]
async fn expired_entries_are_refreshed() {
    let inner = CountingResolver::default();
    let clock = ManualClock::new();
    let cache = PlaceCache::with_clock(&inner, &config(60, 8), clock.clone());

    cache.resolve("Kyoto").await.unwrap();
    clock.advance(59);
    cache.resolve("Kyoto").await.unwrap();
    assert_eq!(inner.calls.load(Ordering::SeqCst), 1);

    clock.advance(1);
    cache.resolve("Kyoto").await.unwrap();
    assert_eq!(inner.calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn oldest_entry_is_evicted_when_full() {
    let inner = CountingResolver::default();
    let clock = ManualClock::new();
    let cache = PlaceCache::with_clock(&inner, &config(3600, 2), clock.clone());

    cache.resolve("Tokyo").await.unwrap();
    clock.advance(1);
    cache.resolve("Kyoto").await.unwrap();
    clock.advance(1);
    cache.resolve("Osaka").await.unwrap();
    assert_eq!(cache.len(), 2);

    cache.resolve("Kyoto").await.unwrap();
    assert_eq!(inner.calls.load(Ordering::SeqCst), 3);
    cache.resolve("Tokyo").await.unwrap();
    assert_eq!(inner.calls.load(Ordering::SeqCst), 4);

    cache.clear();
    assert!(cache.is_empty());
}
