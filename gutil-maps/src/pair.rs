//! Key/value pair produced by [`to_pairs`](crate::to_pairs).

use serde::{Deserialize, Serialize};

/// A single map entry.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Pair<K, V> {
    /// Entry key.
    pub key: K,
    /// Entry value.
    pub value: V,
}

impl<K, V> Pair<K, V> {
    /// Creates a pair.
    pub fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    /// Splits the pair into a tuple.
    pub fn into_tuple(self) -> (K, V) {
        (self.key, self.value)
    }
}

impl<K, V> From<(K, V)> for Pair<K, V> {
    fn from((key, value): (K, V)) -> Self {
        Self { key, value }
    }
}
