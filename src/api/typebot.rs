//! Typebot integration.

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
pub struct TypebotConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub typebot: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger_operator: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger_value: Option<String>,
    /// Session expiry in minutes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expire: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword_finish: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay_message: Option<u64>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypebotStart {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote_jid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_session: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<Vec<Value>>,
    #[serde(flatten)]
    pub extra: Extra,
}

fn typebot_defaults() -> Map<String, Value> {
    object(json!({
        "enabled": true,
        "url": "https://bot.example.com",
        "typebot": "my-typebot",
        "triggerType": "keyword",
        "triggerOperator": "equals",
        "triggerValue": "start",
        "expire": 20,
        "keywordFinish": "#SAIR",
        "delayMessage": 1000,
    }))
}

fn start_defaults() -> Map<String, Value> {
    object(json!({
        "remoteJid": "",
        "startSession": false,
        "variables": [],
    }))
}

impl EvolutionClient {
    pub async fn create_typebot(&self, config: &TypebotConfig) -> Result<Value> {
        let body = merge_defaults(typebot_defaults(), config)?;
        self.dispatch(ApiRequest::new(catalog::TYPEBOT_CREATE).body(body))
            .await
    }

    pub async fn find_typebots(&self) -> Result<Value> {
        self.dispatch(ApiRequest::new(catalog::TYPEBOT_FIND)).await
    }

    pub async fn fetch_typebot(&self, typebot_id: &str) -> Result<Value> {
        self.dispatch(ApiRequest::new(catalog::TYPEBOT_FETCH).segment(typebot_id))
            .await
    }

    pub async fn start_typebot(&self, start: &TypebotStart) -> Result<Value> {
        let body = merge_defaults(start_defaults(), start)?;
        self.dispatch(ApiRequest::new(catalog::TYPEBOT_START).body(body))
            .await
    }
}
