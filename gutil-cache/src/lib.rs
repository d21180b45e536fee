//! # gutil Cache
//!
//! Generic in-memory key-value cache with per-entry time-to-live.
//!
//! - [`TtlCache`]: thread-safe map where each entry optionally expires a fixed
//!   duration after its last write. Expired entries read as absent but stay in
//!   memory until swept or overwritten.
//! - [`SweepingCache`]: a `TtlCache` plus a background Tokio task that purges
//!   expired entries every interval. The task stops when [`SweepingCache::stop`]
//!   is called or the `SweepingCache` is dropped.
//!
//! A TTL of zero means the entry never expires.
//!
//! ## Example
//!
//! ```rust
//! use std::time::Duration;
//! use gutil_cache::TtlCache;
//!
//! let cache = TtlCache::new();
//! assert!(cache.set("a", "b", Duration::from_secs(3600)));
//! assert_eq!(cache.get("a"), Some("b"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

mod cache;
mod config;
mod sweep;

pub use cache::{CacheStats, TtlCache};
pub use config::CacheConfig;
pub use sweep::{SweepHandle, SweepingCache};

pub use gutil_core::{Clock, GutilError, ManualClock, Result, SystemClock, NO_EXPIRY};
