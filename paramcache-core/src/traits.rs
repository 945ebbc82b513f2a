//! Common traits for paramcache.
//!
//! These traits define the seams between the cache and the outside world,
//! so the remote store can be replaced in tests.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::Parameter;

// ═══════════════════════════════════════════════════════════════════════════════
// PARAMETER STORE TRAIT
// ═══════════════════════════════════════════════════════════════════════════════

/// Interface for fetching a parameter by name from a remote store.
///
/// Implementations might use:
/// - AWS SSM Parameter Store (production)
/// - An in-memory map (tests, local development)
#[async_trait]
pub trait ParameterStore: Send + Sync {
    /// Fetches a single parameter.
    ///
    /// `with_decryption` asks the store to decrypt `SecureString` values.
    /// A missing name must surface as `ParamCacheError::ParameterNotFound`.
    async fn get_parameter(&self, name: &str, with_decryption: bool) -> Result<Parameter>;
}
