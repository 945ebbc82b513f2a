//! TTL map for paramcache.
//!
//! In-memory mapping from parameter name to value with an absolute expiry.
//! Entries are only ever inserted or overwritten; a stale entry stays in
//! place and reads as absent until the next write replaces it.

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

mod cache;

pub use cache::{CacheStats, TtlCache};
