//! In-memory TTL cache.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;
use std::time::{Duration, Instant};

use parking_lot::RwLock;
use serde::Serialize;
use tracing::{instrument, trace};

use gutil_core::clock::{Clock, SystemClock};
use gutil_core::constants::NO_EXPIRY;

use crate::config::CacheConfig;

/// Cache entry with TTL.
#[derive(Clone, Debug)]
struct CacheEntry<V> {
    value: V,
    last_updated: Instant,
    ttl: Duration,
}

impl<V> CacheEntry<V> {
    /// Live until strictly more than `ttl` has passed since the last write.
    fn is_expired(&self, now: Instant) -> bool {
        self.ttl != NO_EXPIRY && now.saturating_duration_since(self.last_updated) > self.ttl
    }
}

/// Thread-safe in-memory cache with per-entry TTL.
///
/// Writes and sweeps take the exclusive side of an `RwLock`; reads take the
/// shared side, so a `get` never observes a half-applied sweep.
///
/// Expiry is passive: an expired entry reads as absent but keeps its memory
/// until it is overwritten, removed, or purged by [`purge_expired`] (which the
/// background sweeper calls periodically). Without a sweeper, a cache with
/// high key cardinality grows without bound.
///
/// [`purge_expired`]: TtlCache::purge_expired
pub struct TtlCache<K, V, C = SystemClock> {
    entries: RwLock<HashMap<K, CacheEntry<V>>>,
    clock: C,
    config: CacheConfig,
}

impl<K, V> TtlCache<K, V, SystemClock>
where
    K: Eq + Hash,
{
    /// Creates an empty cache with default configuration.
    pub fn new() -> Self {
        Self::with_config(CacheConfig::default())
    }

    /// Creates an empty cache with custom configuration.
    ///
    /// `config.sweep_interval` is ignored here; use
    /// [`SweepingCache::from_config`](crate::SweepingCache::from_config) to run a sweeper.
    pub fn with_config(config: CacheConfig) -> Self {
        Self::with_config_and_clock(config, SystemClock)
    }
}

impl<K, V> Default for TtlCache<K, V, SystemClock>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, C> TtlCache<K, V, C>
where
    K: Eq + Hash,
    C: Clock,
{
    /// Creates an empty cache reading time from `clock`.
    pub fn with_clock(clock: C) -> Self {
        Self::with_config_and_clock(CacheConfig::default(), clock)
    }

    /// Creates an empty cache with custom configuration and clock.
    pub fn with_config_and_clock(config: CacheConfig, clock: C) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            clock,
            config,
        }
    }

    /// Returns the configuration this cache was built with.
    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    /// Inserts or overwrites `key`, restarting its expiry clock.
    ///
    /// A `ttl` of zero never expires. Always returns `true`.
    pub fn set(&self, key: K, value: V, ttl: Duration) -> bool {
        let now = self.clock.now();
        self.entries.write().insert(key, CacheEntry {
            value,
            last_updated: now,
            ttl,
        });
        true
    }

    /// Inserts or overwrites `key` with the configured default TTL.
    pub fn set_default(&self, key: K, value: V) -> bool {
        self.set(key, value, self.config.default_ttl)
    }

    /// Returns a clone of the value for `key`.
    ///
    /// Returns `None` when the key is absent or its entry has expired. An
    /// expired entry is left in place for the sweeper.
    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
        V: Clone,
    {
        let now = self.clock.now();
        let entries = self.entries.read();
        entries.get(key).and_then(|e| {
            if e.is_expired(now) {
                None
            } else {
                Some(e.value.clone())
            }
        })
    }

    /// Like [`get`](Self::get), but yields `V::default()` on a miss.
    pub fn get_or_default<Q>(&self, key: &Q) -> V
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
        V: Clone + Default,
    {
        self.get(key).unwrap_or_default()
    }

    /// Returns true if `key` holds a live entry.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let now = self.clock.now();
        self.entries
            .read()
            .get(key)
            .is_some_and(|e| !e.is_expired(now))
    }

    /// Removes `key`, returning its value if the entry was still live.
    pub fn remove<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let now = self.clock.now();
        self.entries
            .write()
            .remove(key)
            .filter(|e| !e.is_expired(now))
            .map(|e| e.value)
    }

    /// Clears all entries.
    pub fn clear(&self) {
        self.entries.write().clear();
    }

    /// Deletes every expired entry and returns how many were removed.
    #[instrument(level = "trace", skip(self))]
    pub fn purge_expired(&self) -> usize {
        let now = self.clock.now();
        let mut entries = self.entries.write();
        let before = entries.len();
        entries.retain(|_, e| !e.is_expired(now));
        let removed = before - entries.len();
        trace!(removed, remaining = entries.len(), "Purged expired entries");
        removed
    }

    /// Returns the number of stored entries, including expired entries not yet swept.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Returns true if nothing is stored, live or expired.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Returns cache statistics.
    pub fn stats(&self) -> CacheStats {
        let now = self.clock.now();
        let entries = self.entries.read();
        let expired = entries.values().filter(|e| e.is_expired(now)).count();
        CacheStats {
            total_entries: entries.len(),
            expired_entries: expired,
            live_entries: entries.len().saturating_sub(expired),
        }
    }
}

impl<K, V, C> std::fmt::Debug for TtlCache<K, V, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TtlCache")
            .field("entries", &self.entries.read().len())
            .field("config", &self.config)
            .finish()
    }
}

/// Cache statistics.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    /// Stored entries, live or expired.
    pub total_entries: usize,
    /// Entries past their TTL but not yet swept.
    pub expired_entries: usize,
    /// Entries that would be returned by `get`.
    pub live_entries: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use gutil_core::clock::ManualClock;
    use test_case::test_case;

    const HOUR: Duration = Duration::from_secs(3600);

    fn manual_cache() -> (TtlCache<String, String, ManualClock>, ManualClock) {
        let clock = ManualClock::new();
        (TtlCache::with_clock(clock.clone()), clock)
    }

    #[test]
    fn test_cache_set_get() {
        let cache = TtlCache::new();
        assert!(cache.set("a", "b", HOUR));
        assert_eq!(cache.get("a"), Some("b"));
    }

    #[test]
    fn test_cache_set_get_no_duration() {
        let cache = TtlCache::new();
        assert!(cache.set("a", "b", Duration::ZERO));
        assert_eq!(cache.get("a"), Some("b"));
    }

    #[test]
    fn test_cache_miss() {
        let cache: TtlCache<String, u32> = TtlCache::new();
        assert_eq!(cache.get("nonexistent"), None);
        assert_eq!(cache.get_or_default("nonexistent"), 0);
    }

    #[test]
    fn test_zero_ttl_never_expires() {
        let (cache, clock) = manual_cache();
        cache.set("k".into(), "v".into(), NO_EXPIRY);
        clock.advance(Duration::from_secs(10 * 365 * 24 * 3600));
        assert_eq!(cache.get("k").as_deref(), Some("v"));
    }

    #[test_case(Duration::ZERO, true ; "at write time")]
    #[test_case(Duration::from_secs(10), true ; "exactly at ttl")]
    #[test_case(Duration::from_secs(10) + Duration::from_nanos(1), false ; "just past ttl")]
    #[test_case(Duration::from_secs(60), false ; "long past ttl")]
    fn test_ttl_boundary(elapsed: Duration, live: bool) {
        let (cache, clock) = manual_cache();
        cache.set("k".into(), "v".into(), Duration::from_secs(10));
        clock.advance(elapsed);
        assert_eq!(cache.get("k").is_some(), live);
        assert_eq!(cache.contains_key("k"), live);
    }

    #[test]
    fn test_expired_entry_stays_until_purged() {
        let (cache, clock) = manual_cache();
        cache.set("k".into(), "v".into(), Duration::from_secs(1));
        clock.advance(Duration::from_secs(2));

        assert_eq!(cache.get("k"), None);
        assert_eq!(cache.len(), 1);

        assert_eq!(cache.purge_expired(), 1);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_overwrite_resets_expiry() {
        let (cache, clock) = manual_cache();
        cache.set("k".into(), "v1".into(), Duration::from_secs(10));
        clock.advance(Duration::from_secs(8));
        cache.set("k".into(), "v2".into(), Duration::from_secs(10));
        clock.advance(Duration::from_secs(8));

        assert_eq!(cache.get("k").as_deref(), Some("v2"));
        assert_eq!(cache.len(), 1);

        clock.advance(Duration::from_secs(3));
        assert_eq!(cache.get("k"), None);
    }

    #[test]
    fn test_overwrite_revives_expired_entry() {
        let (cache, clock) = manual_cache();
        cache.set("k".into(), "old".into(), Duration::from_secs(1));
        clock.advance(Duration::from_secs(5));
        assert_eq!(cache.get("k"), None);

        cache.set("k".into(), "new".into(), Duration::from_secs(1));
        assert_eq!(cache.get("k").as_deref(), Some("new"));
    }

    #[test]
    fn test_set_default_uses_config_ttl() {
        let clock = ManualClock::new();
        let config = CacheConfig::default().with_default_ttl(Duration::from_secs(5));
        let cache = TtlCache::with_config_and_clock(config, clock.clone());
        cache.set_default("k", 1);
        clock.advance(Duration::from_secs(6));
        assert_eq!(cache.get("k"), None);
    }

    #[test]
    fn test_cache_remove() {
        let (cache, clock) = manual_cache();
        cache.set("live".into(), "1".into(), NO_EXPIRY);
        cache.set("stale".into(), "2".into(), Duration::from_secs(1));
        clock.advance(Duration::from_secs(2));

        assert_eq!(cache.remove("live").as_deref(), Some("1"));
        assert_eq!(cache.remove("stale"), None);
        assert_eq!(cache.remove("missing"), None);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_cache_clear() {
        let cache = TtlCache::new();
        cache.set(1, "a", NO_EXPIRY);
        cache.set(2, "b", NO_EXPIRY);
        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn test_cache_stats() {
        let (cache, clock) = manual_cache();
        cache.set("a".into(), "1".into(), NO_EXPIRY);
        cache.set("b".into(), "2".into(), Duration::from_secs(1));
        cache.set("c".into(), "3".into(), HOUR);
        clock.advance(Duration::from_secs(2));

        let stats = cache.stats();
        assert_eq!(stats, CacheStats {
            total_entries: 3,
            expired_entries: 1,
            live_entries: 2,
        });
    }

    #[test]
    fn test_purge_keeps_live_entries() {
        let (cache, clock) = manual_cache();
        cache.set("short".into(), "1".into(), Duration::from_secs(1));
        cache.set("long".into(), "2".into(), HOUR);
        cache.set("forever".into(), "3".into(), NO_EXPIRY);
        clock.advance(Duration::from_secs(2));

        assert_eq!(cache.purge_expired(), 1);
        assert_eq!(cache.len(), 2);
        assert!(cache.contains_key("long"));
        assert!(cache.contains_key("forever"));
    }

    #[test]
    fn test_concurrent_writers_and_readers() {
        let cache = TtlCache::new();
        std::thread::scope(|s| {
            for t in 0..4u64 {
                let cache = &cache;
                s.spawn(move || {
                    for i in 0..250u64 {
                        cache.set(t * 1000 + i, i, HOUR);
                        assert_eq!(cache.get(&(t * 1000 + i)), Some(i));
                    }
                });
            }
            s.spawn(|| {
                for _ in 0..100 {
                    cache.purge_expired();
                }
            });
        });
        assert_eq!(cache.len(), 1000);
    }

    #[test]
    fn test_concurrent_same_key_last_write_wins() {
        let cache = TtlCache::new();
        std::thread::scope(|s| {
            for t in 0..8u32 {
                let cache = &cache;
                s.spawn(move || cache.set("shared", t, NO_EXPIRY));
            }
        });
        let v = cache.get("shared").unwrap();
        assert!(v < 8);
        assert_eq!(cache.len(), 1);
    }
}
