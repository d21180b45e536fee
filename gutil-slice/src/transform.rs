//! Element-wise transforms and lookups.

use std::collections::HashMap;
use std::hash::Hash;

/// Applies `f` to every element, preserving order.
pub fn map<A, B, F>(items: &[A], f: F) -> Vec<B>
where
    F: FnMut(&A) -> B,
{
    items.iter().map(f).collect()
}

/// Keeps the elements for which `keep` returns true.
pub fn filter<T, F>(items: &[T], mut keep: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T) -> bool,
{
    items.iter().filter(|t| keep(*t)).cloned().collect()
}

/// Returns true if `value` occurs in `items`.
pub fn contains<T: PartialEq>(items: &[T], value: &T) -> bool {
    items.iter().any(|t| t == value)
}

/// Position of the first element equal to `value`.
pub fn index<T: PartialEq>(items: &[T], value: &T) -> Option<usize> {
    items.iter().position(|t| t == value)
}

/// Left fold starting from `init`.
pub fn fold<T, B, F>(items: &[T], init: B, f: F) -> B
where
    F: FnMut(B, &T) -> B,
{
    items.iter().fold(init, f)
}

/// Alias of [`fold`].
pub fn reduce<T, B, F>(items: &[T], init: B, f: F) -> B
where
    F: FnMut(B, &T) -> B,
{
    fold(items, init, f)
}

/// Builds a map from `(key, value)` pairs produced by `f`.
///
/// When two elements produce the same key, the later one wins.
pub fn to_map<T, K, V, F>(items: &[T], f: F) -> HashMap<K, V>
where
    K: Eq + Hash,
    F: FnMut(&T) -> (K, V),
{
    items.iter().map(f).collect()
}

/// Returns the elements in reverse order.
pub fn reverse<T: Clone>(items: &[T]) -> Vec<T> {
    items.iter().rev().cloned().collect()
}
