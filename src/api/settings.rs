//! Instance behaviour settings.
//!
//! Field names follow the gateway's camelCase schema.

use super::object;
use crate::client::catalog;
use crate::client::{ApiRequest, EvolutionClient};
use crate::types::Extra;
use crate::utils::merge_defaults;
use crate::Result;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

pub const DEFAULT_CALL_REJECTION_MESSAGE: &str = "I do not accept calls";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reject_call: Option<bool>,
    /// Reply sent to rejected callers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub msg_call: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub groups_ignore: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub always_online: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_messages: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sync_full_history: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_status: Option<bool>,
    #[serde(flatten)]
    pub extra: Extra,
}

fn settings_defaults() -> Map<String, Value> {
    object(json!({
        "rejectCall": true,
        "msgCall": DEFAULT_CALL_REJECTION_MESSAGE,
        "groupsIgnore": false,
        "alwaysOnline": true,
        "readMessages": false,
        "syncFullHistory": false,
        "readStatus": false,
    }))
}

impl EvolutionClient {
    /// Defaults reject calls, stay always online and skip read receipts.
    pub async fn set_settings(&self, settings: &Settings) -> Result<Value> {
        let body = merge_defaults(settings_defaults(), settings)?;
        self.dispatch(ApiRequest::new(catalog::SETTINGS_SET).body(body))
            .await
    }

    pub async fn find_settings(&self) -> Result<Value> {
        self.dispatch(ApiRequest::new(catalog::SETTINGS_FIND)).await
    }
}
