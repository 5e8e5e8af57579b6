use super::{HttpMethod, HttpRequest, HttpResponse, TransportError};
use crate::config::{Config, ENV_TIMEOUT_SECS};
use crate::{Error, ErrorContext, Result};
use reqwest::header::CONTENT_TYPE;
use reqwest::Proxy;
use serde_json::Value;
use std::env;
use std::time::Duration;
use url::Url;

pub struct HttpTransport {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpTransport {
    pub fn new(config: &Config) -> Result<Self> {
        Self::with_timeout(config, None)
    }

    /// Build a transport; an explicit `timeout` wins over the config and the
    /// `EVOLUTION_HTTP_TIMEOUT_SECS` env var. Without any of them the
    /// reqwest defaults apply.
    pub fn with_timeout(config: &Config, timeout: Option<Duration>) -> Result<Self> {
        let base_url = config.parsed_url()?;

        let timeout = timeout.or_else(|| {
            config
                .timeout_secs()
                .or_else(|| {
                    env::var(ENV_TIMEOUT_SECS)
                        .ok()
                        .and_then(|s| s.parse::<u64>().ok())
                })
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs)
        });

        let mut builder = reqwest::Client::builder()
            .pool_max_idle_per_host(
                env::var("EVOLUTION_HTTP_POOL_MAX_IDLE_PER_HOST")
                    .ok()
                    .and_then(|s| s.parse::<usize>().ok())
                    .unwrap_or(32),
            )
            .pool_idle_timeout(Some(Duration::from_secs(90)));

        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        if let Ok(proxy_url) = env::var("EVOLUTION_PROXY_URL") {
            if let Ok(proxy) = Proxy::all(&proxy_url) {
                builder = builder.proxy(proxy);
            }
        }

        let client = builder
            .build()
            .map_err(|e| Error::Transport(TransportError::Request(e.to_string())))?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn url_for(&self, segments: &[String]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                Error::configuration_with_context(
                    "base URL cannot carry a path",
                    ErrorContext::new()
                        .with_field_path("config.base_url")
                        .with_details(self.base_url.to_string())
                        .with_source("transport"),
                )
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Perform one round trip. Every request carries `Content-Type:
    /// application/json` and `apikey: <credential>`.
    pub async fn execute(&self, request: &HttpRequest, credential: &str) -> Result<HttpResponse> {
        let url = self.url_for(&request.segments)?;

        let mut req = match request.method {
            HttpMethod::Get => self.client.get(url),
            HttpMethod::Post => self.client.post(url),
            HttpMethod::Put => self.client.put(url),
            HttpMethod::Delete => self.client.delete(url),
        };

        req = req
            .header(CONTENT_TYPE, "application/json")
            .header("apikey", credential);

        if !request.query.is_empty() {
            req = req.query(&request.query);
        }

        if let Some(body) = &request.body {
            req = req.json(body);
        }

        let response = req
            .send()
            .await
            .map_err(|e| Error::Transport(TransportError::from_send(e)))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| Error::Transport(TransportError::Body(e)))?;
        let body = decode_body(&text);

        if !status.is_success() {
            return Err(Error::Remote {
                status: status.as_u16(),
                body,
            });
        }

        Ok(HttpResponse {
            status: status.as_u16(),
            body,
        })
    }
}

/// Empty bodies decode to `null`; anything that is not JSON is kept as a
/// JSON string so callers still see what the gateway sent.
pub(crate) fn decode_body(text: &str) -> Value {
    if text.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
}
