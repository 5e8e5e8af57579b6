use crate::client::core::EvolutionClient;
use crate::config::Config;
use crate::transport::HttpTransport;
use crate::Result;
use arc_swap::{ArcSwap, ArcSwapOption};
use std::sync::Arc;
use std::time::Duration;

/// Builder for creating clients with custom configuration.
///
/// Without an explicit [`Config`] the builder reads one from the
/// environment (see [`Config::from_env`]).
#[derive(Debug, Default)]
pub struct EvolutionClientBuilder {
    config: Option<Config>,
    instance: Option<String>,
    credential: Option<String>,
    timeout: Option<Duration>,
    /// Override base URL (primarily for testing with mock servers)
    base_url_override: Option<String>,
}

impl EvolutionClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Pre-select the instance.
    pub fn instance(mut self, name: impl Into<String>) -> Self {
        self.instance = Some(name.into());
        self
    }

    /// Start with an instance-specific key instead of the global one.
    pub fn credential(mut self, key: impl Into<String>) -> Self {
        self.credential = Some(key.into());
        self
    }

    /// Per-request timeout enforced by the HTTP transport.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the base URL from the config.
    pub fn base_url_override(mut self, base_url: impl Into<String>) -> Self {
        self.base_url_override = Some(base_url.into());
        self
    }

    pub fn build(self) -> Result<EvolutionClient> {
        let mut config = match self.config {
            Some(config) => config,
            None => Config::from_env()?,
        };
        if let Some(url) = self.base_url_override {
            config.set_url(url);
        }
        config.validate()?;

        let transport = Arc::new(HttpTransport::with_timeout(&config, self.timeout)?);
        let global_api_key = Arc::new(config.api_key().to_string());
        let credential = match self.credential {
            Some(key) => Arc::new(key),
            None => Arc::clone(&global_api_key),
        };

        Ok(EvolutionClient {
            transport,
            global_api_key,
            instance: ArcSwapOption::new(self.instance.map(Arc::new)),
            credential: ArcSwap::new(credential),
        })
    }
}
