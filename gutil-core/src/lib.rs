//! # gutil Core
//!
//! Shared building blocks used by the other gutil crates:
//!
//! - **Errors**: the configuration-time error type and `Result` alias
//! - **Constants**: defaults and environment variable names
//! - **Clock**: the time source consulted by the TTL cache
//!
//! ## Example
//!
//! ```rust
//! use std::time::Duration;
//! use gutil_core::{Clock, ManualClock};
//!
//! let clock = ManualClock::new();
//! let start = clock.now();
//! clock.advance(Duration::from_secs(5));
//! assert_eq!(clock.now() - start, Duration::from_secs(5));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, clippy::all)]

pub mod clock;
pub mod constants;
pub mod error;

// Re-export commonly used items at crate root
pub use clock::{Clock, ManualClock, SystemClock};
pub use constants::*;
pub use error::{GutilError, Result};
