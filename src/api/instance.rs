//! Instance lifecycle.

use super::object;
use crate::client::catalog;
use crate::client::{ApiRequest, EvolutionClient};
use crate::types::{Extra, PresenceStatus};
use crate::utils::merge_defaults;
use crate::Result;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use tracing::debug;

pub const DEFAULT_INTEGRATION: &str = "WHATSAPP-BAILEYS";

/// Overrides for [`EvolutionClient::create_instance`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstanceOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qrcode: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub integration: Option<String>,
    /// Phone number to pair with instead of scanning a QR code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    /// Instance key to register; the gateway generates one when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

fn create_defaults(instance: Option<&str>) -> Map<String, Value> {
    let mut defaults = object(json!({
        "qrcode": true,
        "integration": DEFAULT_INTEGRATION,
    }));
    if let Some(name) = instance {
        defaults.insert("instanceName".to_string(), json!(name));
    }
    defaults
}

/// The instance key in a create response: `hash` as a string, or the
/// older `{"hash": {"apikey": "..."}}` shape.
fn issued_key(response: &Value) -> Option<&str> {
    let hash = response.get("hash")?;
    hash.as_str()
        .or_else(|| hash.get("apikey").and_then(Value::as_str))
        .filter(|key| !key.is_empty())
}

impl EvolutionClient {
    /// Create an instance. Defaults: `instanceName` = selected instance (if
    /// any), `qrcode: true`, `integration: "WHATSAPP-BAILEYS"`.
    ///
    /// When the gateway returns an instance key it becomes the active
    /// credential for every later call on this client.
    pub async fn create_instance(&self, options: &InstanceOptions) -> Result<Value> {
        let instance = self.instance();
        let body = merge_defaults(create_defaults(instance.as_deref()), options)?;
        let response = self
            .dispatch(ApiRequest::new(catalog::INSTANCE_CREATE).body(body))
            .await?;

        if let Some(key) = issued_key(&response) {
            debug!("switching to instance key issued by the gateway");
            self.set_credential(key);
        }
        Ok(response)
    }

    pub async fn fetch_instances(&self, instance_name: Option<&str>) -> Result<Value> {
        self.dispatch(
            ApiRequest::new(catalog::INSTANCE_FETCH).query_opt("instanceName", instance_name),
        )
        .await
    }

    /// Get the pairing QR code, or a pairing code for `number`.
    pub async fn connect_instance(&self, number: Option<&str>) -> Result<Value> {
        self.dispatch(ApiRequest::new(catalog::INSTANCE_CONNECT).query_opt("number", number))
            .await
    }

    pub async fn restart_instance(&self) -> Result<Value> {
        self.dispatch(ApiRequest::new(catalog::INSTANCE_RESTART)).await
    }

    pub async fn set_presence(&self, presence: PresenceStatus) -> Result<Value> {
        self.dispatch(
            ApiRequest::new(catalog::INSTANCE_SET_PRESENCE).body(json!({ "presence": presence })),
        )
        .await
    }

    pub async fn get_connection_state(&self) -> Result<Value> {
        self.dispatch(ApiRequest::new(catalog::INSTANCE_CONNECTION_STATE))
            .await
    }

    pub async fn logout_instance(&self) -> Result<Value> {
        self.dispatch(ApiRequest::new(catalog::INSTANCE_LOGOUT)).await
    }

    /// Delete the selected instance. Always authenticates with the global
    /// key and leaves the client on the global credential, since the
    /// instance key dies with the instance.
    pub async fn delete_instance(&self) -> Result<Value> {
        self.use_global_credential();
        self.dispatch(ApiRequest::new(catalog::INSTANCE_DELETE)).await
    }
}
