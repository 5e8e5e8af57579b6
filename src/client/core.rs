use crate::client::endpoint::ApiRequest;
use crate::config::Config;
use crate::transport::HttpTransport;
use crate::Result;
use arc_swap::{ArcSwap, ArcSwapOption};
use serde_json::Value;
use std::sync::Arc;

/// Client for one Evolution API gateway.
///
/// Holds the selected instance and the active credential. Both are swapped
/// atomically, so a client can be shared behind an `Arc`; each request reads
/// them exactly once when it is dispatched.
pub struct EvolutionClient {
    pub(crate) transport: Arc<HttpTransport>,
    pub(crate) global_api_key: Arc<String>,
    pub(crate) instance: ArcSwapOption<String>,
    pub(crate) credential: ArcSwap<String>,
}

impl EvolutionClient {
    /// Create a client from a config, authenticating with its global key.
    pub fn new(config: &Config) -> Result<Self> {
        crate::client::builder::EvolutionClientBuilder::new()
            .config(config.clone())
            .build()
    }

    /// Create a client from `EVOLUTION_API_URL` / `EVOLUTION_API_KEY`.
    pub fn from_env() -> Result<Self> {
        crate::client::builder::EvolutionClientBuilder::new().build()
    }

    pub fn builder() -> crate::client::builder::EvolutionClientBuilder {
        crate::client::builder::EvolutionClientBuilder::new()
    }

    pub fn base_url(&self) -> &str {
        self.transport.base_url().as_str()
    }

    /// Select the instance that instance-scoped endpoints operate on.
    pub fn select_instance(&self, name: impl Into<String>) {
        self.instance.store(Some(Arc::new(name.into())));
    }

    pub fn clear_instance(&self) {
        self.instance.store(None);
    }

    pub fn instance(&self) -> Option<String> {
        self.instance.load_full().map(|name| name.as_ref().clone())
    }

    /// Authenticate subsequent requests with an instance-specific key.
    pub fn set_credential(&self, key: impl Into<String>) {
        self.credential.store(Arc::new(key.into()));
    }

    /// Go back to the global API key.
    pub fn use_global_credential(&self) {
        self.credential.store(Arc::clone(&self.global_api_key));
    }

    /// The credential the next request will carry.
    pub fn credential(&self) -> String {
        self.credential.load_full().as_ref().clone()
    }

    pub fn is_using_global_credential(&self) -> bool {
        self.credential.load().as_str() == self.global_api_key.as_str()
    }

    pub fn global_api_key(&self) -> &str {
        &self.global_api_key
    }

    /// Send an arbitrary request through the same dispatch path as the
    /// typed methods. Useful for gateway endpoints this crate does not wrap.
    pub async fn call(&self, request: ApiRequest) -> Result<Value> {
        self.dispatch(request).await
    }
}

impl std::fmt::Debug for EvolutionClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EvolutionClient")
            .field("base_url", &self.base_url())
            .field("instance", &self.instance())
            .field("using_global_credential", &self.is_using_global_credential())
            .finish()
    }
}
