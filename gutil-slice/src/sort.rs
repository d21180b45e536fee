//! In-place orderings.

use std::cmp::Ordering;

use rand::Rng;

/// Stable sort driven by a strict "less than" predicate.
pub fn sort_by_less<T, F>(items: &mut [T], mut less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    items.sort_by(|a, b| {
        if less(a, b) {
            Ordering::Less
        } else if less(b, a) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    });
}

/// Bubble sort. Stops early once a pass makes no swaps.
pub fn bubble_sort<T: PartialOrd>(items: &mut [T]) {
    let mut end = items.len();
    while end > 1 {
        let mut swapped = false;
        for i in 0..end - 1 {
            if items[i] > items[i + 1] {
                items.swap(i, i + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
        end -= 1;
    }
}

/// Selection sort: moves the minimum of the unsorted tail to the front, one
/// position at a time.
pub fn selection_sort<T: PartialOrd>(items: &mut [T]) {
    for i in 0..items.len() {
        let mut min = i;
        for j in i + 1..items.len() {
            if items[j] < items[min] {
                min = j;
            }
        }
        items.swap(i, min);
    }
}

/// Fisher-Yates shuffle using the thread-local RNG.
pub fn shuffle<T>(items: &mut [T]) {
    shuffle_with(items, &mut rand::thread_rng());
}

/// Fisher-Yates shuffle with a caller-supplied RNG.
pub fn shuffle_with<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    let n = items.len();
    for i in 0..n {
        let r = rng.gen_range(i..n);
        items.swap(i, r);
    }
}
