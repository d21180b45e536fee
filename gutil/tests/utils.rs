//! End-to-end checks across the re-exported modules.

use std::collections::HashMap;
use std::time::Duration;

use gutil::cache::{ManualClock, SweepingCache, TtlCache};
use gutil::{maps, number, slice};

#[test]
fn test_numbers() {
    assert_eq!(number::round(1.23454, 3), 1.235);
    assert_eq!(number::round(1.23454, 4), 1.2345);
    assert_eq!(number::round(1.23454, 5), 1.23454);
    assert_eq!(gutil::round(1.23454, 3), 1.235);

    assert_eq!(number::sum(&[1, 2, 3, 4]), 10);
    assert_eq!(number::min(&[1, 2, 3, 3, 4, 5]), 1);
    assert_eq!(number::max(&[1, 2, 3, 3, 4, 5]), 5);
}

#[test]
fn test_slices() {
    assert_eq!(slice::map(&[1, 2, 3, 4], |i| i * i), vec![1, 4, 9, 16]);
    assert_eq!(slice::reduce(&[1, 2, 3, 4], 0, |x, y| x + y), 10);
    assert_eq!(slice::deduplicate(&[1, 2, 3, 4, 1, 2, 3, 4]), vec![1, 2, 3, 4]);
    assert_eq!(slice::remove(&[1, 1, 1, 2, 3, 4, 1, 1, 1], &1), vec![1, 1, 2, 3, 4, 1, 1, 1]);
    assert_eq!(slice::remove_all(&[1, 1, 1, 2, 3, 4, 1, 1, 1], &1), vec![2, 3, 4]);
    assert_eq!(slice::reverse(&[1, 2, 3, 4]), vec![4, 3, 2, 1]);
    assert_eq!(slice::intersect(&[1, 2, 3, 4], &[3, 4, 5, 6]), vec![3, 4]);
    assert_eq!(slice::index(&[1, 2, 3, 4], &3), Some(2));

    let mut v = vec![4, 1, 2, 3, 31, 5, 3, 8];
    slice::sort_by_less(&mut v, |a, b| a < b);
    assert_eq!(v, [1, 2, 3, 3, 4, 5, 8, 31]);
}

#[test]
fn test_sorts() {
    let mut v = vec![1, 4, 3, 2];
    slice::bubble_sort(&mut v);
    assert_eq!(v, [1, 2, 3, 4]);

    let mut v = vec![1, 4, 3, 2];
    slice::selection_sort(&mut v);
    assert_eq!(v, [1, 2, 3, 4]);
}

#[test]
fn test_maps() {
    let m = HashMap::from([("a", 1), ("b", 2), ("c", 3), ("d", 4)]);

    let out = maps::to_slice(&m, |k, v| maps::Pair::new(*k, *v));
    assert_eq!(out.len(), 4);
    for p in &out {
        assert_eq!(m[p.key], p.value);
    }

    let values = maps::values(&m);
    assert_eq!(values.len(), 4);
    for v in m.values() {
        assert!(values.contains(v));
    }

    let squares = maps::map_values(&m, |i| f64::from(i * i));
    for (k, v) in &m {
        assert_eq!(squares[k], f64::from(v * v));
    }
}

#[test]
fn test_cache() {
    let cache = TtlCache::new();
    assert!(cache.set("a", "b", Duration::from_secs(3600)));
    assert_eq!(cache.get("a"), Some("b"));

    assert!(cache.set("a", "b", Duration::ZERO));
    assert_eq!(cache.get("a"), Some("b"));
}

#[test]
fn test_cache_expiry_in_simulated_time() {
    let clock = ManualClock::new();
    let cache = TtlCache::with_clock(clock.clone());
    cache.set("ttl", 1, Duration::from_secs(60));
    cache.set("forever", 2, Duration::ZERO);

    clock.advance(Duration::from_secs(61));
    assert_eq!(cache.get("ttl"), None);
    assert_eq!(cache.get("forever"), Some(2));

    clock.advance(Duration::from_secs(365 * 24 * 3600));
    assert_eq!(cache.get("forever"), Some(2));
}

#[tokio::test]
async fn test_sweep_physically_removes() {
    let clock = ManualClock::new();
    let interval = Duration::from_millis(25);
    let cache = SweepingCache::spawn(TtlCache::with_clock(clock.clone()), interval).unwrap();

    cache.set("a", "b", Duration::from_millis(10));
    clock.advance(Duration::from_millis(50));
    assert_eq!(cache.get("a"), None);
    assert_eq!(cache.len(), 1);

    tokio::time::sleep(interval * 6).await;
    assert_eq!(cache.len(), 0);

    cache.shutdown().await;
}
