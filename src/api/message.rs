//! Sending messages.
//!
//! Every body starts as `{"number": ..., <endpoint fields>}` and the
//! caller's [`MessageOptions`] are spread over it.

use super::{insert_opt, object};
use crate::client::catalog;
use crate::client::{ApiRequest, Endpoint, EvolutionClient};
use crate::types::message::{guess_mime_type, media_type_for};
use crate::types::{Extra, MediaSource, MediaType, MessageOptions};
use crate::utils::merge_defaults;
use crate::Result;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use std::path::Path;

/// Generic media message for `sendMedia`. Defaults to a PNG image.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaMessage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mediatype: Option<MediaType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mimetype: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media: Option<MediaSource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl MediaMessage {
    pub fn new(media: impl Into<MediaSource>) -> Self {
        Self {
            media: Some(media.into()),
            ..Default::default()
        }
    }

    /// Read a local file, base64-encode it and infer mime and media type
    /// from the extension.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        let mimetype = guess_mime_type(path).unwrap_or("application/octet-stream");
        Ok(Self {
            mediatype: Some(media_type_for(mimetype)),
            mimetype: Some(mimetype.to_string()),
            media: Some(MediaSource::Bytes(bytes)),
            file_name: path
                .file_name()
                .and_then(|n| n.to_str())
                .map(String::from),
            ..Default::default()
        })
    }

    pub fn caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Button {
    pub text: String,
    pub id: String,
}

impl Button {
    pub fn new(text: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            id: id.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonsMessage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buttons: Option<Vec<Button>>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListRow {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub row_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListSection {
    pub title: String,
    pub rows: Vec<ListRow>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListMessage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sections: Option<Vec<ListSection>>,
    #[serde(flatten)]
    pub extra: Extra,
}

fn media_defaults(number: &str) -> Map<String, Value> {
    object(json!({
        "number": number,
        "mediatype": MediaType::Image,
        "mimetype": "image/png",
    }))
}

fn buttons_defaults(number: &str) -> Map<String, Value> {
    object(json!({
        "number": number,
        "title": "Title Button",
        "description": "Description Button",
        "footerText": "Footer Button",
        "buttons": [
            Button::new("Response 1", "1"),
            Button::new("Response 2", "2"),
        ],
    }))
}

fn list_defaults(number: &str) -> Map<String, Value> {
    object(json!({
        "number": number,
        "title": "List Title",
        "description": "List description",
        "buttonText": "Click Here",
        "footerText": "footer list",
    }))
}

impl EvolutionClient {
    async fn send(
        &self,
        endpoint: Endpoint,
        base: Map<String, Value>,
        options: &MessageOptions,
    ) -> Result<Value> {
        let body = merge_defaults(base, options)?;
        self.dispatch(ApiRequest::new(endpoint).body(body)).await
    }

    pub async fn send_text(
        &self,
        number: &str,
        text: &str,
        options: &MessageOptions,
    ) -> Result<Value> {
        let base = object(json!({ "number": number, "text": text }));
        self.send(catalog::MESSAGE_SEND_TEXT, base, options).await
    }

    pub async fn send_image(
        &self,
        number: &str,
        image: impl Into<MediaSource>,
        caption: Option<&str>,
        options: &MessageOptions,
    ) -> Result<Value> {
        let mut base = object(json!({ "number": number, "image": image.into() }));
        insert_opt(&mut base, "caption", caption)?;
        self.send(catalog::MESSAGE_SEND_IMAGE, base, options).await
    }

    pub async fn send_video(
        &self,
        number: &str,
        video: impl Into<MediaSource>,
        caption: Option<&str>,
        options: &MessageOptions,
    ) -> Result<Value> {
        let mut base = object(json!({ "number": number, "video": video.into() }));
        insert_opt(&mut base, "caption", caption)?;
        self.send(catalog::MESSAGE_SEND_VIDEO, base, options).await
    }

    pub async fn send_audio(
        &self,
        number: &str,
        audio: impl Into<MediaSource>,
        options: &MessageOptions,
    ) -> Result<Value> {
        let base = object(json!({ "number": number, "audio": audio.into() }));
        self.send(catalog::MESSAGE_SEND_AUDIO, base, options).await
    }

    pub async fn send_document(
        &self,
        number: &str,
        document: impl Into<MediaSource>,
        filename: Option<&str>,
        options: &MessageOptions,
    ) -> Result<Value> {
        let mut base = object(json!({ "number": number, "document": document.into() }));
        insert_opt(&mut base, "filename", filename)?;
        self.send(catalog::MESSAGE_SEND_DOCUMENT, base, options).await
    }

    pub async fn send_location(
        &self,
        number: &str,
        latitude: f64,
        longitude: f64,
        options: &MessageOptions,
    ) -> Result<Value> {
        let base = object(json!({
            "number": number,
            "latitude": latitude,
            "longitude": longitude,
        }));
        self.send(catalog::MESSAGE_SEND_LOCATION, base, options).await
    }

    /// `contact` is passed through as-is: a vCard string or the gateway's
    /// structured contact list.
    pub async fn send_contact<C>(
        &self,
        number: &str,
        contact: &C,
        options: &MessageOptions,
    ) -> Result<Value>
    where
        C: Serialize + ?Sized,
    {
        let mut base = object(json!({ "number": number }));
        base.insert("contact".to_string(), serde_json::to_value(contact)?);
        self.send(catalog::MESSAGE_SEND_CONTACT, base, options).await
    }

    pub async fn send_reaction(
        &self,
        number: &str,
        message_id: &str,
        reaction: &str,
    ) -> Result<Value> {
        let body = json!({
            "number": number,
            "messageId": message_id,
            "reaction": reaction,
        });
        self.dispatch(ApiRequest::new(catalog::MESSAGE_SEND_REACTION).body(body))
            .await
    }

    pub async fn reply(
        &self,
        number: &str,
        text: &str,
        message_id: &str,
        options: &MessageOptions,
    ) -> Result<Value> {
        let base = object(json!({
            "number": number,
            "text": text,
            "messageId": message_id,
        }));
        self.send(catalog::MESSAGE_REPLY, base, options).await
    }

    pub async fn send_media(&self, number: &str, media: &MediaMessage) -> Result<Value> {
        let body = merge_defaults(media_defaults(number), media)?;
        self.dispatch(ApiRequest::new(catalog::MESSAGE_SEND_MEDIA).body(body))
            .await
    }

    pub async fn send_buttons(&self, number: &str, buttons: &ButtonsMessage) -> Result<Value> {
        let body = merge_defaults(buttons_defaults(number), buttons)?;
        self.dispatch(ApiRequest::new(catalog::MESSAGE_SEND_BUTTONS).body(body))
            .await
    }

    pub async fn send_list(&self, number: &str, list: &ListMessage) -> Result<Value> {
        let body = merge_defaults(list_defaults(number), list)?;
        self.dispatch(ApiRequest::new(catalog::MESSAGE_SEND_LIST).body(body))
            .await
    }
}
