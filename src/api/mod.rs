//! Endpoint methods, one per gateway operation, grouped by resource.
//!
//! | Module | Gateway resource |
//! |--------|------------------|
//! | [`instance`] | `/instance/*` lifecycle, presence, connection state |
//! | [`webhook`] | `/webhook/*` |
//! | [`settings`] | `/settings/*` |
//! | [`message`] | `/message/*` sending |
//! | [`group`] | `/group/*` administration |
//! | [`chat`] | `/chat/*` lookups and housekeeping |
//! | `typebot` | `/typebot/*` (feature `typebot`) |
//! | `openai` | `/openai/*` (feature `openai`) |
//!
//! Methods that take an options struct merge it over the endpoint's default
//! body: fields left as `None` keep the default, set fields win.

pub mod chat;
pub mod group;
pub mod instance;
pub mod message;
pub mod settings;
pub mod webhook;

#[cfg(feature = "openai")]
pub mod openai;
#[cfg(feature = "typebot")]
pub mod typebot;

pub use group::GroupConfig;
pub use instance::InstanceOptions;
pub use message::{Button, ButtonsMessage, ListMessage, ListRow, ListSection, MediaMessage};
pub use settings::Settings;
pub use webhook::WebhookConfig;

#[cfg(feature = "openai")]
pub use openai::{OpenAiBotConfig, OpenAiCreds};
#[cfg(feature = "typebot")]
pub use typebot::{TypebotConfig, TypebotStart};

use serde::Serialize;
use serde_json::{Map, Value};

/// Unwrap a `json!({...})` literal into its map.
pub(crate) fn object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

/// Insert `key` only when a value is present.
pub(crate) fn insert_opt<T: Serialize>(
    map: &mut Map<String, Value>,
    key: &str,
    value: Option<T>,
) -> crate::Result<()> {
    if let Some(value) = value {
        map.insert(key.to_string(), serde_json::to_value(value)?);
    }
    Ok(())
}
