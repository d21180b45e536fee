//! Cache configuration.
//!
//! Durations are carried as [`Duration`] in code and as whole milliseconds in
//! JSON and environment variables.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use gutil_core::constants::{DEFAULT_TTL, ENV_DEFAULT_TTL_MS, ENV_SWEEP_INTERVAL_MS};
use gutil_core::error::{GutilError, Result};

/// Cache configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// TTL used by `set_default`. Zero never expires.
    #[serde(rename = "default_ttl_ms", with = "millis")]
    pub default_ttl: Duration,
    /// Period of the background sweeper, if any.
    #[serde(rename = "sweep_interval_ms", with = "opt_millis")]
    pub sweep_interval: Option<Duration>,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            default_ttl: DEFAULT_TTL,
            sweep_interval: None,
        }
    }
}

impl CacheConfig {
    /// Sets the TTL used by `set_default`.
    pub fn with_default_ttl(mut self, ttl: Duration) -> Self {
        self.default_ttl = ttl;
        self
    }

    /// Enables the background sweeper with the given period.
    pub fn with_sweep_interval(mut self, interval: Duration) -> Self {
        self.sweep_interval = Some(interval);
        self
    }

    /// Checks the configuration for values the cache cannot run with.
    pub fn validate(&self) -> Result<()> {
        match self.sweep_interval {
            Some(interval) if interval.is_zero() => Err(GutilError::InvalidSweepInterval(interval)),
            _ => Ok(()),
        }
    }

    /// Parses and validates a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads `GUTIL_CACHE_DEFAULT_TTL_MS` and `GUTIL_CACHE_SWEEP_INTERVAL_MS`.
    ///
    /// Unset variables keep their defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds a configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(ms) = parse_millis(&lookup, ENV_DEFAULT_TTL_MS)? {
            config.default_ttl = ms;
        }
        config.sweep_interval = parse_millis(&lookup, ENV_SWEEP_INTERVAL_MS)?;

        config.validate()?;
        Ok(config)
    }
}

fn parse_millis<F>(lookup: &F, name: &str) -> Result<Option<Duration>>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(name) else {
        return Ok(None);
    };
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse::<u64>()
        .map(|ms| Some(Duration::from_millis(ms)))
        .map_err(|_| GutilError::ConfigError(format!("{name}: expected milliseconds, got '{raw}'")))
}

fn to_millis(d: &Duration) -> u64 {
    u64::try_from(d.as_millis()).unwrap_or(u64::MAX)
}

mod millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(super::to_millis(d))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        u64::deserialize(d).map(Duration::from_millis)
    }
}

mod opt_millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(d: &Option<Duration>, s: S) -> Result<S::Ok, S::Error> {
        match d {
            Some(d) => s.serialize_some(&super::to_millis(d)),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Duration>, D::Error> {
        Option::<u64>::deserialize(d).map(|ms| ms.map(Duration::from_millis))
    }
}
