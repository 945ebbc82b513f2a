//! Read-through parameter cache.

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::instrument;

use paramcache_cache::{CacheStats, TtlCache};
use paramcache_core::clock::{Clock, SystemClock};
use paramcache_core::error::{ParamCacheError, Result};
use paramcache_core::types::Parameter;

use crate::provider::ClientProvider;
use crate::settings::CacheSettings;

/// Logs at `info` when verbose, `debug` otherwise.
macro_rules! diag {
    ($verbose:expr, $($arg:tt)+) => {
        if $verbose {
            tracing::info!($($arg)+)
        } else {
            tracing::debug!($($arg)+)
        }
    };
}

/// Where a lookup's value came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LookupSource {
    /// Served from a fresh cache entry, no remote call.
    Cache,
    /// Fetched from the remote store; `cached_for` is the TTL written, if any.
    Remote {
        /// Seconds the value was cached for, `None` when not written
        cached_for: Option<u64>,
    },
}

/// A value together with its origin.
#[derive(Clone, Debug)]
pub struct Lookup {
    /// The parameter as returned by the remote store
    pub parameter: Parameter,
    /// Cache hit or remote fetch
    pub source: LookupSource,
}

impl Lookup {
    /// Returns true if no remote call was made.
    pub fn from_cache(&self) -> bool {
        self.source == LookupSource::Cache
    }
}

/// Read-through TTL cache in front of a remote parameter store.
///
/// Construct once and share behind an `Arc`; all methods take `&self`.
///
/// ```rust,ignore
/// let cache = Arc::new(ParamCache::from_env());
/// let password = cache.get("/app/db/password").await?.value;
/// let feature = cache.get_with_ttl("/app/flags/beta", 20).await?;
/// ```
pub struct ParamCache {
    settings: RwLock<CacheSettings>,
    cache: TtlCache<Parameter>,
    provider: ClientProvider,
    clock: Arc<dyn Clock>,
}

impl ParamCache {
    /// Creates a cache on the system clock.
    pub fn new(settings: CacheSettings, provider: ClientProvider) -> Self {
        Self::with_clock(settings, provider, Arc::new(SystemClock))
    }

    /// Creates a cache on a custom clock.
    pub fn with_clock(
        settings: CacheSettings,
        provider: ClientProvider,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            settings: RwLock::new(settings),
            cache: TtlCache::new(),
            provider,
            clock,
        }
    }

    /// Creates an SSM-backed cache configured from the environment.
    ///
    /// A `.env` file in the working directory is loaded first if present.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        Self::new(CacheSettings::from_env(), ClientProvider::from_env())
    }

    /// Returns a snapshot of the current settings.
    pub fn settings(&self) -> CacheSettings {
        self.settings.read().clone()
    }

    /// Re-applies environment overrides on top of the current settings.
    pub fn reload_settings(&self) -> CacheSettings {
        let mut settings = self.settings.write();
        settings.apply_env();
        settings.clone()
    }

    /// Changes settings in place.
    pub fn update_settings<F>(&self, update: F)
    where
        F: FnOnce(&mut CacheSettings),
    {
        update(&mut self.settings.write());
    }

    /// The underlying name → value map.
    pub fn cache(&self) -> &TtlCache<Parameter> {
        &self.cache
    }

    /// The remote store provider.
    pub fn provider(&self) -> &ClientProvider {
        &self.provider
    }

    /// Cache statistics as of now.
    pub fn stats(&self) -> CacheStats {
        self.cache.stats(self.clock.now_epoch_secs())
    }

    /// Returns `name`, from cache when fresh, otherwise from the remote store.
    pub async fn get(&self, name: &str) -> Result<Parameter> {
        self.lookup(name, None).await.map(|l| l.parameter)
    }

    /// Like [`get`](Self::get) but caches a fetched value for `ttl_seconds`.
    ///
    /// `0` bypasses the cache for this call: no read and no write.
    pub async fn get_with_ttl(&self, name: &str, ttl_seconds: u64) -> Result<Parameter> {
        self.lookup(name, Some(ttl_seconds)).await.map(|l| l.parameter)
    }

    /// Full read-through lookup, reporting where the value came from.
    #[instrument(skip(self))]
    pub async fn lookup(&self, name: &str, ttl_override: Option<u64>) -> Result<Lookup> {
        if name.is_empty() {
            return Err(ParamCacheError::Validation(
                "parameter name must not be empty".into(),
            ));
        }

        let settings = self.settings();
        let ttl = ttl_override.unwrap_or(settings.default_ttl_seconds);
        let use_cache = settings.cache_enabled && ttl_override != Some(0);

        if use_cache {
            if let Some(parameter) = self.cache.get(name, self.clock.now_epoch_secs()) {
                diag!(settings.verbose, name, "ParamCache: {} - from cache", name);
                return Ok(Lookup {
                    parameter,
                    source: LookupSource::Cache,
                });
            }
        }

        let parameter = self.provider.fetch(name).await?;

        let cached_for = if use_cache && ttl > 0 {
            let now = self.clock.now_epoch_secs();
            self.cache.insert_for(name, parameter.clone(), now, ttl);
            diag!(
                settings.verbose,
                name,
                ttl,
                "ParamCache: {} - not from cache, caching for {} seconds",
                name,
                ttl
            );
            Some(ttl)
        } else {
            diag!(settings.verbose, name, "ParamCache: {} - not from cache, not cached", name);
            None
        };

        Ok(Lookup {
            parameter,
            source: LookupSource::Remote { cached_for },
        })
    }
}

impl std::fmt::Debug for ParamCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParamCache")
            .field("settings", &*self.settings.read())
            .field("entries", &self.cache.len())
            .field("provider", &self.provider)
            .finish()
    }
}
