//! Message send options and media payloads.

use super::Extra;
use base64::Engine as _;
use serde::{Deserialize, Serialize, Serializer};
use std::path::Path;

/// Typing indicator shown before a message is delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatPresence {
    Composing,
    Recording,
    Paused,
}

/// Nested `options` object accepted by the send endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SendOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub presence: Option<ChatPresence>,
}

/// Optional fields spread into every send-message body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageOptions {
    /// Delay in milliseconds before sending.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub presence: Option<ChatPresence>,
    /// Message being quoted, in the gateway's key/message shape.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quoted: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<SendOptions>,
    /// Any other body field the gateway accepts (`linkPreview`,
    /// `mentioned`, ...). Spread into the body last.
    #[serde(flatten)]
    pub extra: Extra,
}

impl MessageOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn delay(mut self, millis: u64) -> Self {
        self.delay = Some(millis);
        self
    }

    pub fn presence(mut self, presence: ChatPresence) -> Self {
        self.presence = Some(presence);
        self
    }

    pub fn quoted(mut self, quoted: serde_json::Value) -> Self {
        self.quoted = Some(quoted);
        self
    }

    /// Set an arbitrary body field. Overrides the endpoint's own field of
    /// the same name.
    pub fn field(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Image,
    Video,
    Audio,
    Document,
}

/// Where media content comes from. Raw bytes are sent base64-encoded.
#[derive(Debug, Clone, PartialEq)]
pub enum MediaSource {
    Url(String),
    Base64(String),
    Bytes(Vec<u8>),
}

impl MediaSource {
    /// The value sent on the wire: a URL or a base64 string.
    pub fn to_wire(&self) -> String {
        match self {
            MediaSource::Url(s) | MediaSource::Base64(s) => s.clone(),
            MediaSource::Bytes(bytes) => base64::engine::general_purpose::STANDARD.encode(bytes),
        }
    }
}

impl Serialize for MediaSource {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_wire())
    }
}

impl From<&str> for MediaSource {
    fn from(value: &str) -> Self {
        MediaSource::Url(value.to_string())
    }
}

impl From<String> for MediaSource {
    fn from(value: String) -> Self {
        MediaSource::Url(value)
    }
}

impl From<Vec<u8>> for MediaSource {
    fn from(value: Vec<u8>) -> Self {
        MediaSource::Bytes(value)
    }
}

pub(crate) fn guess_mime_type(path: &Path) -> Option<&'static str> {
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_lowercase();
    let mt = match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "webp" => "image/webp",
        "gif" => "image/gif",
        "mp4" => "video/mp4",
        "3gp" => "video/3gpp",
        "mp3" => "audio/mpeg",
        "ogg" | "opus" => "audio/ogg",
        "m4a" => "audio/mp4",
        "wav" => "audio/wav",
        "pdf" => "application/pdf",
        "txt" => "text/plain",
        "csv" => "text/csv",
        "zip" => "application/zip",
        _ => return None,
    };
    Some(mt)
}

pub(crate) fn media_type_for(mime: &str) -> MediaType {
    match mime.split('/').next().unwrap_or("") {
        "image" => MediaType::Image,
        "video" => MediaType::Video,
        "audio" => MediaType::Audio,
        _ => MediaType::Document,
    }
}
