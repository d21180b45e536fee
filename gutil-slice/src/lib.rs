//! # gutil Slice
//!
//! Stateless helpers over slices:
//!
//! - **Transforms**: [`map`], [`filter`], [`fold`]/[`reduce`], [`to_map`], [`reverse`]
//! - **Lookup**: [`contains`], [`index`]
//! - **Set operations**: [`deduplicate`], [`intersect`], [`union`], [`difference`],
//!   [`remove`], [`remove_all`]
//! - **Ordering**: [`sort_by_less`], [`bubble_sort`], [`selection_sort`], [`shuffle`]
//!
//! Transforms borrow their input and return a new `Vec`. Sorts and shuffles
//! work in place.
//!
//! ## Example
//!
//! ```rust
//! use gutil_slice::{deduplicate, intersect, sort_by_less};
//!
//! assert_eq!(deduplicate(&[1, 2, 3, 4, 1, 2, 3, 4]), vec![1, 2, 3, 4]);
//! assert_eq!(intersect(&[1, 2, 3, 4], &[3, 4, 5, 6]), vec![3, 4]);
//!
//! let mut v = vec![4, 1, 2, 3, 31, 5, 3, 8];
//! sort_by_less(&mut v, |a, b| a < b);
//! assert_eq!(v, [1, 2, 3, 3, 4, 5, 8, 31]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

mod set;
mod sort;
mod transform;

pub use set::{deduplicate, difference, intersect, remove, remove_all, union};
pub use sort::{bubble_sort, selection_sort, shuffle, shuffle_with, sort_by_less};
pub use transform::{contains, filter, fold, index, map, reduce, reverse, to_map};
