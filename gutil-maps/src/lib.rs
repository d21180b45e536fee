//! # gutil Maps
//!
//! Conversions from `HashMap` to vectors and between maps.
//!
//! Output order follows the map's iteration order, which is unspecified for
//! `HashMap`. Sort the result if order matters.
//!
//! ## Example
//!
//! ```rust
//! use std::collections::HashMap;
//! use gutil_maps::{map_values, to_pairs};
//!
//! let m = HashMap::from([("a", 1), ("b", 2)]);
//! let mut pairs = to_pairs(&m);
//! pairs.sort();
//! assert_eq!(pairs[0].key, "a");
//!
//! let squared = map_values(&m, |v| v * v);
//! assert_eq!(squared["b"], 4);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

mod pair;

pub use pair::Pair;

use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

/// Converts each entry with `f`.
pub fn to_slice<K, V, S, T, F>(map: &HashMap<K, V, S>, mut f: F) -> Vec<T>
where
    F: FnMut(&K, &V) -> T,
{
    map.iter().map(|(k, v)| f(k, v)).collect()
}

/// Collects the entries as [`Pair`]s.
pub fn to_pairs<K, V, S>(map: &HashMap<K, V, S>) -> Vec<Pair<K, V>>
where
    K: Clone,
    V: Clone,
{
    to_slice(map, |k, v| Pair::new(k.clone(), v.clone()))
}

/// Collects the keys.
pub fn keys<K: Clone, V, S>(map: &HashMap<K, V, S>) -> Vec<K> {
    map.keys().cloned().collect()
}

/// Collects the values.
pub fn values<K, V: Clone, S>(map: &HashMap<K, V, S>) -> Vec<V> {
    map.values().cloned().collect()
}

/// Builds a map with the same keys and values transformed by `f`.
pub fn map_values<K, V, W, S, F>(map: &HashMap<K, V, S>, mut f: F) -> HashMap<K, W, S>
where
    K: Eq + Hash + Clone,
    S: BuildHasher + Default,
    F: FnMut(&V) -> W,
{
    map.iter().map(|(k, v)| (k.clone(), f(v))).collect()
}
