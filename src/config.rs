//! Connection settings for the gateway.
//!
//! A [`Config`] is a plain holder for the base URL and the global API key.
//! It can be built in code, from the process environment, or from a YAML or
//! JSON file.

use crate::{Error, ErrorContext, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use url::Url;

pub const ENV_URL: &str = "EVOLUTION_API_URL";
pub const ENV_API_KEY: &str = "EVOLUTION_API_KEY";
pub const ENV_TIMEOUT_SECS: &str = "EVOLUTION_HTTP_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(alias = "url")]
    base_url: String,
    api_key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    timeout_secs: Option<u64>,
}

impl Config {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            timeout_secs: None,
        }
    }

    pub fn url(&self) -> &str {
        &self.base_url
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn set_url(&mut self, url: impl Into<String>) {
        self.base_url = url.into();
    }

    pub fn set_api_key(&mut self, api_key: impl Into<String>) {
        self.api_key = api_key.into();
    }

    pub fn timeout_secs(&self) -> Option<u64> {
        self.timeout_secs
    }

    pub fn set_timeout_secs(&mut self, secs: Option<u64>) {
        self.timeout_secs = secs;
    }

    /// Read `EVOLUTION_API_URL`, `EVOLUTION_API_KEY` and the optional
    /// `EVOLUTION_HTTP_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self> {
        let base_url = required_env(ENV_URL, "config.base_url")?;
        let api_key = required_env(ENV_API_KEY, "config.api_key")?;
        let timeout_secs = match std::env::var(ENV_TIMEOUT_SECS) {
            Ok(raw) => Some(raw.trim().parse::<u64>().map_err(|e| {
                Error::configuration_with_context(
                    format!("{} must be a whole number of seconds", ENV_TIMEOUT_SECS),
                    ErrorContext::new()
                        .with_field_path("config.timeout_secs")
                        .with_details(e.to_string())
                        .with_source("config"),
                )
            })?),
            Err(_) => None,
        };
        Ok(Self {
            base_url,
            api_key,
            timeout_secs,
        })
    }

    /// Load from a `.yaml`/`.yml` or `.json` file. Keys are `base_url`
    /// (or `url`), `api_key` and optional `timeout_secs`.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        let parse_ctx = || {
            ErrorContext::new()
                .with_details(path.display().to_string())
                .with_source("config")
        };

        match ext.as_deref() {
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content).map_err(|e| {
                Error::configuration_with_context(
                    format!("invalid YAML config: {}", e),
                    parse_ctx(),
                )
            }),
            Some("json") => serde_json::from_str(&content).map_err(|e| {
                Error::configuration_with_context(
                    format!("invalid JSON config: {}", e),
                    parse_ctx(),
                )
            }),
            _ => Err(Error::configuration_with_context(
                "unsupported config file extension (expected .yaml, .yml or .json)",
                parse_ctx(),
            )),
        }
    }

    /// Check that the base URL is an absolute http(s) URL.
    pub fn validate(&self) -> Result<()> {
        self.parsed_url()?;
        if self.api_key.is_empty() {
            tracing::warn!("global API key is empty; the gateway will likely reject requests");
        }
        Ok(())
    }

    pub(crate) fn parsed_url(&self) -> Result<Url> {
        let invalid = |details: String| {
            Error::configuration_with_context(
                "base URL must be an absolute http(s) URL",
                ErrorContext::new()
                    .with_field_path("config.base_url")
                    .with_details(details)
                    .with_source("config"),
            )
        };
        let url = Url::parse(self.base_url.trim()).map_err(|e| invalid(e.to_string()))?;
        match url.scheme() {
            "http" | "https" if !url.cannot_be_a_base() => Ok(url),
            other => Err(invalid(format!("unsupported scheme '{}'", other))),
        }
    }
}

/// Serializes tests that read or write the `EVOLUTION_*` env vars.
#[cfg(test)]
pub(crate) fn env_guard() -> std::sync::MutexGuard<'static, ()> {
    static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
    ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn required_env(name: &str, field: &str) -> Result<String> {
    match std::env::var(name) {
        Ok(v) if !v.trim().is_empty() => Ok(v.trim().to_string()),
        _ => Err(Error::configuration_with_context(
            format!("{} is not set", name),
            ErrorContext::new()
                .with_field_path(field)
                .with_source("config"),
        )),
    }
}
