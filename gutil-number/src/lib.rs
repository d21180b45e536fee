//! # gutil Number
//!
//! Small generic numeric helpers.
//!
//! Empty inputs yield `T::default()` (zero for every primitive number), so a
//! zero result from [`min`], [`max`], or [`sum`] is ambiguous. Check the input
//! length first when that matters.
//!
//! ## Example
//!
//! ```rust
//! use gutil_number::{max, min, round, sum};
//!
//! assert_eq!(round(1.23454, 3), 1.235);
//! assert_eq!(sum(&[1, 2, 3, 4]), 10);
//! assert_eq!(min(&[3, 1, 2]), 1);
//! assert_eq!(max::<u8>(&[]), 0);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

use std::ops::Add;

/// Any primitive integer or float.
pub trait Number: Copy + PartialOrd + Default + sealed::Sealed {
    /// Lossy conversion used for precision arguments.
    fn to_f64(self) -> f64;
}

mod sealed {
    pub trait Sealed {}
}

macro_rules! impl_number {
    ($($t:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $t {}

            impl Number for $t {
                #[allow(clippy::cast_lossless, clippy::cast_precision_loss)]
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_number!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

/// Rounds `f` to `digits` decimal places, halves away from zero.
///
/// Negative `digits` round to tens, hundreds, and so on.
pub fn round<N: Number>(f: f64, digits: N) -> f64 {
    let digits = digits.to_f64();
    if digits < 0.0 {
        let scale = pow10(-digits);
        (f / scale).round() * scale
    } else {
        let scale = pow10(digits);
        (f * scale).round() / scale
    }
}

// Integral exponents go through `powi` so that e.g. 10^5 is exact.
fn pow10(exp: f64) -> f64 {
    if exp.fract() == 0.0 && exp <= f64::from(i32::MAX) {
        10f64.powi(exp as i32)
    } else {
        10f64.powf(exp)
    }
}

/// Smallest element, or `T::default()` for an empty slice.
///
/// Incomparable elements (NaN) never replace the current minimum.
pub fn min<T>(items: &[T]) -> T
where
    T: PartialOrd + Copy + Default,
{
    extreme(items, |candidate, best| candidate < best)
}

/// Largest element, or `T::default()` for an empty slice.
pub fn max<T>(items: &[T]) -> T
where
    T: PartialOrd + Copy + Default,
{
    extreme(items, |candidate, best| candidate > best)
}

/// Sum of all elements, or `T::default()` for an empty slice.
pub fn sum<T>(items: &[T]) -> T
where
    T: Add<Output = T> + Copy + Default,
{
    items.iter().fold(T::default(), |acc, &x| acc + x)
}

fn extreme<T, F>(items: &[T], better: F) -> T
where
    T: PartialOrd + Copy + Default,
    F: Fn(&T, &T) -> bool,
{
    let Some((&first, rest)) = items.split_first() else {
        return T::default();
    };
    rest.iter()
        .fold(first, |best, x| if better(x, &best) { *x } else { best })
}
