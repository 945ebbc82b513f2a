//! Cache settings sourced from the environment.

use serde::{Deserialize, Serialize};
use tracing::debug;

use paramcache_core::constants::{
    DEFAULT_CACHE_ENABLED, DEFAULT_CACHE_TTL_SECONDS, DEFAULT_VERBOSE, ENV_CACHE_ENABLED,
    ENV_CACHE_TIMEOUT, ENV_VERBOSE,
};

/// Behaviour switches for [`ParamCache`](crate::ParamCache).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheSettings {
    /// When false every lookup goes straight to the remote store
    pub cache_enabled: bool,
    /// Lifetime of a cached value unless a call overrides it
    pub default_ttl_seconds: u64,
    /// Log hits and misses at `info` instead of `debug`
    pub verbose: bool,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            cache_enabled: DEFAULT_CACHE_ENABLED,
            default_ttl_seconds: DEFAULT_CACHE_TTL_SECONDS,
            verbose: DEFAULT_VERBOSE,
        }
    }
}

impl CacheSettings {
    /// Defaults with `SSM_CACHE_ENABLED`, `SSM_CACHE_TIMEOUT` and `SSM_VERBOSE` applied.
    pub fn from_env() -> Self {
        let mut settings = Self::default();
        settings.apply_env();
        settings
    }

    /// Applies environment overrides on top of the current values.
    pub fn apply_env(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Applies overrides read through `lookup` on top of the current values.
    ///
    /// Unset variables leave the current value alone. A TTL that is not a
    /// non-negative integer is ignored and the current TTL is kept.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(ENV_CACHE_ENABLED) {
            self.cache_enabled = parse_enabled(&raw);
        }

        if let Some(raw) = lookup(ENV_VERBOSE) {
            self.verbose = parse_flag(&raw);
        }

        if let Some(raw) = lookup(ENV_CACHE_TIMEOUT) {
            match raw.trim().parse::<i64>() {
                Ok(ttl) if ttl >= 0 => self.default_ttl_seconds = ttl as u64,
                Ok(ttl) => {
                    debug!(ttl, kept = self.default_ttl_seconds, "Ignoring negative {}", ENV_CACHE_TIMEOUT)
                }
                Err(_) => {
                    debug!(value = %raw, kept = self.default_ttl_seconds, "Ignoring non-numeric {}", ENV_CACHE_TIMEOUT)
                }
            }
        }
    }

    /// Sets the default TTL.
    pub fn with_ttl(mut self, seconds: u64) -> Self {
        self.default_ttl_seconds = seconds;
        self
    }

    /// Turns read-through caching off.
    pub fn no_cache(mut self) -> Self {
        self.cache_enabled = false;
        self
    }

    /// Sets diagnostic logging.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

/// Caching stays on unless the value explicitly says off.
fn parse_enabled(raw: &str) -> bool {
    !matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "false" | "0" | "no" | "off"
    )
}

/// Opt-in flags are off unless the value explicitly says on.
fn parse_flag(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "true" | "1" | "yes" | "on"
    )
}
