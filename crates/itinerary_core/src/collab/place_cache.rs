//! Bounded TTL cache in front of a place resolver.
//!
//! # Invariants
//! - Only successful matches are cached; misses and errors always reach the
//!   inner resolver again.
//! - An entry older than `ttl` is never served.
//! - The cache never holds more than `max_entries` entries; the oldest
//!   entry is evicted first.
//! - The lock is never held across an `.await`.

use crate::collab::clock::{Clock, SystemClock};
use crate::collab::place_resolver::{PlaceResolver, ResolvedPlace};
use crate::config::CacheConfig;
use crate::error::ResolveError;
use chrono::{DateTime, Duration, Utc};
use log::debug;
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

struct CacheEntry {
    place: ResolvedPlace,
    stored_at: DateTime<Utc>,
}

/// Caching decorator owned by the caller.
pub struct PlaceCache<R: PlaceResolver, C: Clock = SystemClock> {
    inner: R,
    clock: C,
    ttl: Duration,
    max_entries: usize,
    entries: Mutex<HashMap<String, CacheEntry>>,
}

impl<R: PlaceResolver> PlaceCache<R, SystemClock> {
    pub fn new(inner: R, config: &CacheConfig) -> Self {
        Self::with_clock(inner, config, SystemClock)
    }
}

impl<R: PlaceResolver, C: Clock> PlaceCache<R, C> {
    pub fn with_clock(inner: R, config: &CacheConfig, clock: C) -> Self {
        let ttl_secs = i64::try_from(config.ttl_secs).unwrap_or(i64::MAX);
        Self {
            inner,
            clock,
            ttl: Duration::try_seconds(ttl_secs).unwrap_or(Duration::MAX),
            max_entries: config.max_entries.max(1),
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, CacheEntry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn cached(&self, key: &str) -> Option<ResolvedPlace> {
        let now = self.clock.now();
        let mut entries = self.lock();
        let fresh = entries
            .get(key)
            .map(|entry| now - entry.stored_at < self.ttl)?;
        if fresh {
            entries.get(key).map(|entry| entry.place.clone())
        } else {
            entries.remove(key);
            None
        }
    }

    fn store(&self, key: String, place: ResolvedPlace) {
        let now = self.clock.now();
        let mut entries = self.lock();
        if !entries.contains_key(&key) && entries.len() >= self.max_entries {
            let oldest = entries
                .iter()
                .min_by_key(|(_, entry)| entry.stored_at)
                .map(|(oldest_key, _)| oldest_key.clone());
            if let Some(oldest) = oldest {
                entries.remove(&oldest);
                debug!("event=cache_evict module=place_cache status=ok size={}", entries.len());
            }
        }
        entries.insert(
            key,
            CacheEntry {
                place,
                stored_at: now,
            },
        );
    }
}

#[async_trait::async_trait]
impl<R: PlaceResolver, C: Clock> PlaceResolver for PlaceCache<R, C> {
    async fn resolve(&self, name_or_id: &str) -> Result<Option<ResolvedPlace>, ResolveError> {
        let key = cache_key(name_or_id);
        if let Some(place) = self.cached(&key) {
            return Ok(Some(place));
        }

        let resolved = self.inner.resolve(name_or_id).await?;
        if let Some(place) = &resolved {
            self.store(key, place.clone());
        }
        Ok(resolved)
    }
}

fn cache_key(name_or_id: &str) -> String {
    name_or_id.trim().to_lowercase()
}
