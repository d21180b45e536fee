//! Background sweeping for [`TtlCache`].
//!
//! A [`SweepingCache`] owns a cache behind an `Arc` and a Tokio task that calls
//! [`TtlCache::purge_expired`] once per interval. The task holds only a weak
//! reference to the cache and exits on the first tick after the cache is gone,
//! or as soon as [`SweepHandle::stop`] is called.

use std::hash::Hash;
use std::ops::Deref;
use std::sync::{Arc, Weak};
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, trace};

use gutil_core::clock::{Clock, SystemClock};
use gutil_core::error::{GutilError, Result};

use crate::cache::TtlCache;
use crate::config::CacheConfig;

/// Owned handle to a running sweeper task.
///
/// Dropping the handle stops the task. Leaking it (e.g. with `mem::forget`)
/// leaves the task running until its cache is dropped.
#[derive(Debug)]
pub struct SweepHandle {
    shutdown_tx: watch::Sender<bool>,
    task: Option<JoinHandle<()>>,
    interval: Duration,
}

impl SweepHandle {
    /// Signals the sweeper to stop. Idempotent.
    pub fn stop(&self) {
        self.shutdown_tx.send_replace(true);
    }

    /// Returns true until `stop` is called or the task exits on its own.
    pub fn is_running(&self) -> bool {
        !*self.shutdown_tx.borrow() && self.task.as_ref().is_some_and(|t| !t.is_finished())
    }

    /// Sweep period.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Stops the sweeper and waits for the task to finish.
    pub async fn shutdown(mut self) {
        self.stop();
        if let Some(task) = self.task.take() {
            let _ = task.await;
        }
    }
}

impl Drop for SweepHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

/// A [`TtlCache`] with a background sweeper.
///
/// Derefs to the underlying cache, so `set`/`get` are called directly on it.
///
/// # Example
///
/// ```rust,no_run
/// use std::time::Duration;
/// use gutil_cache::TtlCache;
///
/// #[tokio::main]
/// async fn main() -> gutil_cache::Result<()> {
///     let cache = TtlCache::new_with_periodic_sweep(Duration::from_secs(30))?;
///     cache.set("session", 42, Duration::from_secs(300));
///     // ...
///     cache.shutdown().await;
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct SweepingCache<K, V, C = SystemClock> {
    cache: Arc<TtlCache<K, V, C>>,
    handle: SweepHandle,
}

impl<K, V> TtlCache<K, V, SystemClock>
where
    K: Eq + Hash + Send + Sync + 'static,
    V: Send + Sync + 'static,
{
    /// Creates an empty cache and starts sweeping it every `interval`.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new_with_periodic_sweep(interval: Duration) -> Result<SweepingCache<K, V>> {
        SweepingCache::spawn(TtlCache::new(), interval)
    }
}

impl<K, V> SweepingCache<K, V, SystemClock>
where
    K: Eq + Hash + Send + Sync + 'static,
    V: Send + Sync + 'static,
{
    /// Builds a sweeping cache from configuration.
    ///
    /// `config.sweep_interval` must be set.
    pub fn from_config(config: CacheConfig) -> Result<Self> {
        config.validate()?;
        let interval = config
            .sweep_interval
            .ok_or_else(|| GutilError::ConfigError("sweep_interval is required for a sweeping cache".into()))?;
        Self::spawn(TtlCache::with_config(config), interval)
    }
}

impl<K, V, C> SweepingCache<K, V, C>
where
    K: Eq + Hash + Send + Sync + 'static,
    V: Send + Sync + 'static,
    C: Clock,
{
    /// Starts sweeping `cache` every `interval` on the current Tokio runtime.
    pub fn spawn(cache: TtlCache<K, V, C>, interval: Duration) -> Result<Self> {
        if interval.is_zero() {
            return Err(GutilError::InvalidSweepInterval(interval));
        }
        let runtime = tokio::runtime::Handle::try_current().map_err(|_| GutilError::NoRuntime)?;

        let cache = Arc::new(cache);
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let task = runtime.spawn(sweep_task(Arc::downgrade(&cache), interval, shutdown_rx));

        debug!(?interval, "Started cache sweeper");

        Ok(Self {
            cache,
            handle: SweepHandle {
                shutdown_tx,
                task: Some(task),
                interval,
            },
        })
    }

    /// Returns a shared reference to the swept cache.
    ///
    /// Clones outlive the sweeper; once it stops, their expired entries
    /// accumulate again until purged by hand.
    pub fn cache(&self) -> Arc<TtlCache<K, V, C>> {
        Arc::clone(&self.cache)
    }

    /// Returns the sweeper handle.
    pub fn handle(&self) -> &SweepHandle {
        &self.handle
    }

    /// Signals the sweeper to stop.
    pub fn stop(&self) {
        self.handle.stop();
    }

    /// Returns true while the sweeper is active.
    pub fn is_running(&self) -> bool {
        self.handle.is_running()
    }

    /// Stops the sweeper, waits for it, and returns the cache.
    pub async fn shutdown(self) -> Arc<TtlCache<K, V, C>> {
        self.handle.shutdown().await;
        self.cache
    }
}

impl<K, V, C> Deref for SweepingCache<K, V, C> {
    type Target = TtlCache<K, V, C>;

    fn deref(&self) -> &Self::Target {
        &self.cache
    }
}

async fn sweep_task<K, V, C>(
    cache: Weak<TtlCache<K, V, C>>,
    interval: Duration,
    mut shutdown_rx: watch::Receiver<bool>,
) where
    K: Eq + Hash,
    C: Clock,
{
    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // First tick completes immediately; the first sweep happens one interval in.
    ticker.tick().await;

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let Some(cache) = cache.upgrade() else {
                    debug!("Cache dropped, sweeper exiting");
                    break;
                };
                let removed = cache.purge_expired();
                if removed > 0 {
                    debug!(removed, remaining = cache.len(), "Swept expired entries");
                } else {
                    trace!("Sweep found nothing to remove");
                }
            }
            changed = shutdown_rx.changed() => {
                if changed.is_err() || *shutdown_rx.borrow() {
                    break;
                }
            }
        }
    }

    debug!("Cache sweeper stopped");
}
