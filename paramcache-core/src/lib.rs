//! # paramcache core
//!
//! Core types, errors, and traits shared by the paramcache crates.
//!
//! - **Types**: the [`Parameter`] value returned by the remote store
//! - **Errors**: [`ParamCacheError`] and the crate-wide [`Result`] alias
//! - **Constants**: environment variable names and defaults
//! - **Traits**: [`ParameterStore`] (the remote fetch seam) and [`Clock`]
//!
//! ## Example
//!
//! ```rust
//! use paramcache_core::{Clock, ManualClock};
//!
//! let clock = ManualClock::new(1_000);
//! clock.advance(101);
//! assert_eq!(clock.now_epoch_secs(), 1_101);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, clippy::all)]

pub mod clock;
pub mod constants;
pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at crate root
pub use clock::{Clock, ManualClock, SystemClock};
pub use constants::*;
pub use error::{ParamCacheError, Result};
pub use traits::*;
pub use types::*;
