//! Webhook configuration.

use super::object;
use crate::client::catalog;
use crate::client::{ApiRequest, EvolutionClient};
use crate::types::Extra;
use crate::utils::merge_defaults;
use crate::Result;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

pub const DEFAULT_WEBHOOK_URL: &str = "https://webhook.site";
pub const DEFAULT_WEBHOOK_EVENTS: [&str; 3] = ["MESSAGES_UPSERT", "MESSAGES_UPDATE", "SEND_MESSAGE"];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Post each event to `<url>/<event-name>` instead of a single URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_by_events: Option<bool>,
    /// Inline media as base64 in event payloads.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_base64: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub events: Option<Vec<String>>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl WebhookConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Default::default()
        }
    }

    pub fn events<I, S>(mut self, events: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.events = Some(events.into_iter().map(Into::into).collect());
        self
    }
}

fn webhook_defaults() -> Map<String, Value> {
    object(json!({
        "enabled": true,
        "url": DEFAULT_WEBHOOK_URL,
        "webhookByEvents": false,
        "webhookBase64": false,
        "events": DEFAULT_WEBHOOK_EVENTS,
    }))
}

impl EvolutionClient {
    pub async fn set_webhook(&self, config: &WebhookConfig) -> Result<Value> {
        let body = merge_defaults(webhook_defaults(), config)?;
        self.dispatch(ApiRequest::new(catalog::WEBHOOK_SET).body(body))
            .await
    }

    pub async fn find_webhook(&self) -> Result<Value> {
        self.dispatch(ApiRequest::new(catalog::WEBHOOK_FIND)).await
    }
}
