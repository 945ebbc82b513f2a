//! Lazily constructed, shared handle to the remote store.

use std::future::Future;
use std::sync::Arc;

use futures::future::{BoxFuture, FutureExt};
use tokio::sync::Mutex;
use tracing::{debug, instrument, warn};

use paramcache_core::error::{ParamCacheError, Result};
use paramcache_core::traits::ParameterStore;
use paramcache_core::types::Parameter;
use paramcache_ssm::{SsmClient, SsmConfig};

/// Builds a new remote store handle.
pub type StoreFactory =
    Box<dyn Fn() -> BoxFuture<'static, Result<Arc<dyn ParameterStore>>> + Send + Sync>;

/// Owns the remote store handle and performs remote fetches.
///
/// The handle is built on first use and reused afterwards. Construction runs
/// while the slot lock is held, so concurrent first calls still build it once.
pub struct ClientProvider {
    factory: StoreFactory,
    handle: Mutex<Option<Arc<dyn ParameterStore>>>,
}

impl ClientProvider {
    /// Provider that loads an [`SsmClient`] from `config`.
    ///
    /// Anything `config` leaves unset, the region included, is inherited from
    /// the AWS default provider chain.
    pub fn ssm(config: SsmConfig) -> Self {
        Self::with_factory(move || {
            let config = config.clone();
            async move {
                let store: Arc<dyn ParameterStore> = Arc::new(SsmClient::load(config).await);
                Ok::<_, ParamCacheError>(store)
            }
        })
    }

    /// Provider for an SSM client configured from the environment.
    pub fn from_env() -> Self {
        Self::ssm(SsmConfig::from_env())
    }

    /// Provider that builds handles with `factory`.
    pub fn with_factory<F, Fut>(factory: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Arc<dyn ParameterStore>>> + Send + 'static,
    {
        Self {
            factory: Box::new(move || factory().boxed()),
            handle: Mutex::new(None),
        }
    }

    /// Provider around a ready-made handle.
    ///
    /// After [`reset`](Self::reset) the same handle is handed out again.
    pub fn with_store(store: Arc<dyn ParameterStore>) -> Self {
        let template = Arc::clone(&store);
        Self {
            factory: Box::new(move || {
                let store = Arc::clone(&template);
                async move { Ok::<_, ParamCacheError>(store) }.boxed()
            }),
            handle: Mutex::new(Some(store)),
        }
    }

    /// Returns `existing` when given, otherwise the shared handle.
    ///
    /// The shared handle is constructed on the first call and after a reset.
    pub async fn provide(
        &self,
        existing: Option<Arc<dyn ParameterStore>>,
    ) -> Result<Arc<dyn ParameterStore>> {
        if let Some(store) = existing {
            return Ok(store);
        }

        let mut handle = self.handle.lock().await;
        if let Some(store) = handle.as_ref() {
            return Ok(Arc::clone(store));
        }

        let store = (self.factory)().await?;
        debug!("Constructed remote store handle");
        *handle = Some(Arc::clone(&store));
        Ok(store)
    }

    /// Drops the shared handle so the next call constructs a fresh one.
    pub async fn reset(&self) {
        self.handle.lock().await.take();
    }

    /// Returns true once a shared handle exists.
    pub async fn is_initialized(&self) -> bool {
        self.handle.lock().await.is_some()
    }

    /// Fetches `name` from the remote store with decryption requested.
    ///
    /// Errors are logged and returned unchanged. There is no retry.
    #[instrument(skip(self))]
    pub async fn fetch(&self, name: &str) -> Result<Parameter> {
        let store = self.provide(None).await.map_err(|e| {
            warn!(error = %e, "Failed to construct remote store handle");
            e
        })?;

        store.get_parameter(name, true).await.map_err(|e| {
            warn!(name, error = %e, "Remote fetch failed");
            e
        })
    }
}

impl std::fmt::Debug for ClientProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // A slot that is busy being built reports as uninitialized.
        let initialized = self.handle.try_lock().map(|h| h.is_some()).unwrap_or(false);
        f.debug_struct("ClientProvider")
            .field("initialized", &initialized)
            .finish()
    }
}
