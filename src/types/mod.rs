//! Request-side types shared across resources.
//!
//! Responses are not modelled: every endpoint returns the decoded
//! [`serde_json::Value`] exactly as the gateway sent it.

pub mod message;

pub use message::{ChatPresence, MediaSource, MediaType, MessageOptions, SendOptions};

use serde::{Deserialize, Serialize};

/// Presence an instance advertises to its contacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PresenceStatus {
    #[default]
    Available,
    Unavailable,
    Composing,
    Recording,
    Paused,
}

/// A JSON object of extra fields passed through to the gateway untouched.
pub type Extra = serde_json::Map<String, serde_json::Value>;
