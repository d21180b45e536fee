//! Set-like operations on slices.
//!
//! Results keep the order in which elements first appear and never contain
//! duplicates (except [`remove`] and [`remove_all`], which only drop matches).

use std::collections::HashSet;
use std::hash::Hash;

/// Drops repeated elements, keeping each first occurrence in place.
pub fn deduplicate<T>(items: &[T]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let mut seen = HashSet::with_capacity(items.len());
    items
        .iter()
        .filter(|t| seen.insert(*t))
        .cloned()
        .collect()
}

/// Elements of `a` that also occur in `b`, in `a`'s order.
pub fn intersect<T>(a: &[T], b: &[T]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let other: HashSet<&T> = b.iter().collect();
    let mut seen = HashSet::new();
    a.iter()
        .filter(|t| other.contains(*t) && seen.insert(*t))
        .cloned()
        .collect()
}

/// Elements of `a` followed by elements of `b` not already present.
pub fn union<T>(a: &[T], b: &[T]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let mut seen = HashSet::with_capacity(a.len() + b.len());
    a.iter()
        .chain(b)
        .filter(|t| seen.insert(*t))
        .cloned()
        .collect()
}

/// Elements of `a` that do not occur in `b`, in `a`'s order.
pub fn difference<T>(a: &[T], b: &[T]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let other: HashSet<&T> = b.iter().collect();
    let mut seen = HashSet::new();
    a.iter()
        .filter(|t| !other.contains(*t) && seen.insert(*t))
        .cloned()
        .collect()
}

/// Removes the first element equal to `value`.
pub fn remove<T>(items: &[T], value: &T) -> Vec<T>
where
    T: PartialEq + Clone,
{
    let mut out = items.to_vec();
    if let Some(i) = out.iter().position(|t| t == value) {
        out.remove(i);
    }
    out
}

/// Removes every element equal to `value`.
pub fn remove_all<T>(items: &[T], value: &T) -> Vec<T>
where
    T: PartialEq + Clone,
{
    items.iter().filter(|t| *t != value).cloned().collect()
}
