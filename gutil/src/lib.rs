//! # gutil
//!
//! Generic utility functions and a TTL cache, re-exported from the member crates:
//!
//! | Module | Crate | Contents |
//! |--------|-------|----------|
//! | [`cache`] | `gutil-cache` | `TtlCache`, `SweepingCache` |
//! | [`slice`] | `gutil-slice` | map/filter/fold, set operations, sorts |
//! | [`maps`] | `gutil-maps` | map-to-vector conversions |
//! | [`number`] | `gutil-number` | min/max/sum/round |
//!
//! ## Example
//!
//! ```rust
//! use std::time::Duration;
//! use gutil::{cache::TtlCache, slice};
//!
//! let cache = TtlCache::new();
//! cache.set("a", "b", Duration::from_secs(3600));
//! assert_eq!(cache.get("a"), Some("b"));
//!
//! assert_eq!(slice::reverse(&[1, 2, 3, 4]), vec![4, 3, 2, 1]);
//! assert_eq!(gutil::round(1.23454, 3), 1.235);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

pub use gutil_cache as cache;
pub use gutil_maps as maps;
pub use gutil_number as number;
pub use gutil_slice as slice;

pub use gutil_core::{GutilError, Result};
pub use gutil_number::round;
