//! In-memory parameter store.
//!
//! Stands in for SSM in tests and local development. Every call is counted
//! so callers can assert how often the remote side was reached.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use parking_lot::RwLock;

use paramcache_core::error::{ParamCacheError, Result};
use paramcache_core::traits::ParameterStore;
use paramcache_core::types::Parameter;

/// In-memory [`ParameterStore`] with call counting.
#[derive(Debug, Default)]
pub struct MemoryStore {
    parameters: RwLock<HashMap<String, Parameter>>,
    calls: AtomicUsize,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a plain `String` parameter, replacing any previous value.
    pub fn put(&self, name: &str, value: &str) {
        self.put_parameter(Parameter::new(name, value));
    }

    /// Stores a parameter, bumping its version if the name already exists.
    pub fn put_parameter(&self, mut parameter: Parameter) {
        let mut parameters = self.parameters.write();
        if let Some(previous) = parameters.get(&parameter.name) {
            parameter.version = previous.version + 1;
        }
        parameters.insert(parameter.name.clone(), parameter);
    }

    /// Number of `get_parameter` calls served so far, failures included.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ParameterStore for MemoryStore {
    async fn get_parameter(&self, name: &str, _with_decryption: bool) -> Result<Parameter> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.parameters
            .read()
            .get(name)
            .cloned()
            .ok_or_else(|| ParamCacheError::ParameterNotFound(name.to_string()))
    }
}
