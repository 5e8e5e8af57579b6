//! OpenAI bot integration.

use super::object;
use crate::client::catalog;
use crate::client::{ApiRequest, EvolutionClient};
use crate::types::Extra;
use crate::utils::merge_defaults;
use crate::Result;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenAiBotConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub openai_creds_id: Option<String>,
    /// `assistant` or `chatCompletion`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bot_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger_operator: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expire: Option<u32>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// Named OpenAI credentials stored on the gateway.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenAiCreds {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl std::fmt::Debug for OpenAiCreds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiCreds")
            .field("name", &self.name)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

fn bot_defaults() -> Map<String, Value> {
    object(json!({
        "enabled": true,
        "openaiCredsId": "",
        "botType": "assistant",
        "triggerType": "keyword",
        "triggerOperator": "equals",
        "triggerValue": "ai",
        "expire": 20,
    }))
}

fn creds_defaults() -> Map<String, Value> {
    object(json!({
        "name": "default",
        "apiKey": "",
    }))
}

impl EvolutionClient {
    pub async fn create_openai_bot(&self, config: &OpenAiBotConfig) -> Result<Value> {
        let body = merge_defaults(bot_defaults(), config)?;
        self.dispatch(ApiRequest::new(catalog::OPENAI_CREATE).body(body))
            .await
    }

    pub async fn set_openai_creds(&self, creds: &OpenAiCreds) -> Result<Value> {
        let body = merge_defaults(creds_defaults(), creds)?;
        self.dispatch(ApiRequest::new(catalog::OPENAI_CREDS).body(body))
            .await
    }
}
