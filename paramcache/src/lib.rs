//! # paramcache
//!
//! Read-through TTL cache in front of AWS SSM Parameter Store.
//!
//! A lookup returns the cached value while it is fresh and otherwise fetches
//! it from SSM (with decryption), caches it for the configured TTL, and
//! returns it. Errors from SSM are logged and returned, never cached.
//!
//! Configuration comes from the environment:
//!
//! | Variable | Effect | Default |
//! |---|---|---|
//! | `SSM_CACHE_ENABLED` | `false`/`0`/`no`/`off` (any case) disables caching | enabled |
//! | `SSM_CACHE_TIMEOUT` | default TTL in seconds, non-negative integer | 300 |
//! | `SSM_VERBOSE` | `true`/`1`/`yes`/`on` logs hits and misses at `info` | off |
//! | `AWS_REGION` | region override of the SSM client | inherited from the AWS provider chain |
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use paramcache::ParamCache;
//!
//! paramcache::init_tracing(false);
//! let cache = Arc::new(ParamCache::from_env());
//!
//! let db_password = cache.get("/app/db/password").await?;
//! let always_fresh = cache.get_with_ttl("/app/flags/kill-switch", 0).await?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

mod logging;
mod memory;
mod param_cache;
mod provider;
mod settings;

pub use logging::{init_json_tracing, init_tracing};
pub use memory::MemoryStore;
pub use param_cache::{Lookup, LookupSource, ParamCache};
pub use provider::{ClientProvider, StoreFactory};
pub use settings::CacheSettings;

pub use paramcache_cache::CacheStats;
pub use paramcache_core::{
    Clock, ManualClock, ParamCacheError, Parameter, ParameterStore, ParameterType, Result,
    SystemClock,
};
pub use paramcache_ssm::{SsmClient, SsmConfig};
