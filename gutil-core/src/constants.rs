//! Defaults and environment variable names shared across gutil crates.

use std::time::Duration;

// ═══════════════════════════════════════════════════════════════════════════════
// TTL SEMANTICS
// ═══════════════════════════════════════════════════════════════════════════════

/// TTL value meaning "this entry never expires".
pub const NO_EXPIRY: Duration = Duration::ZERO;

/// Default TTL applied by `set_default` when no configuration overrides it.
pub const DEFAULT_TTL: Duration = NO_EXPIRY;

// ═══════════════════════════════════════════════════════════════════════════════
// ENVIRONMENT CONFIGURATION
// ═══════════════════════════════════════════════════════════════════════════════

/// Environment variable holding the default TTL in milliseconds.
pub const ENV_DEFAULT_TTL_MS: &str = "GUTIL_CACHE_DEFAULT_TTL_MS";

/// Environment variable holding the sweep interval in milliseconds.
/// Unset means no background sweeper.
pub const ENV_SWEEP_INTERVAL_MS: &str = "GUTIL_CACHE_SWEEP_INTERVAL_MS";
