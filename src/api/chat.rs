//! Chat lookups and housekeeping.

use crate::client::catalog;
use crate::client::{ApiRequest, Endpoint, EvolutionClient};
use crate::Result;
use serde_json::{json, Value};

impl EvolutionClient {
    async fn chat_action(&self, endpoint: Endpoint, chat_id: &str) -> Result<Value> {
        self.dispatch(ApiRequest::new(endpoint).body(json!({ "chatId": chat_id })))
            .await
    }

    pub async fn find_chat(&self, chat_id: &str) -> Result<Value> {
        self.dispatch(ApiRequest::new(catalog::CHAT_FIND).query("id", chat_id))
            .await
    }

    pub async fn fetch_all_chats(&self) -> Result<Value> {
        self.dispatch(ApiRequest::new(catalog::CHAT_FETCH_ALL)).await
    }

    pub async fn fetch_private_chats(&self) -> Result<Value> {
        self.dispatch(ApiRequest::new(catalog::CHAT_FETCH_PRIVATE)).await
    }

    pub async fn fetch_group_chats(&self) -> Result<Value> {
        self.dispatch(ApiRequest::new(catalog::CHAT_FETCH_GROUP)).await
    }

    /// Message history of a chat, optionally limited to `count` entries.
    pub async fn fetch_messages(&self, chat_id: &str, count: Option<u32>) -> Result<Value> {
        self.dispatch(
            ApiRequest::new(catalog::CHAT_FETCH_MESSAGES)
                .query("id", chat_id)
                .query_opt("count", count),
        )
        .await
    }

    pub async fn mark_message_as_read(&self, message_id: &str) -> Result<Value> {
        self.dispatch(
            ApiRequest::new(catalog::CHAT_MARK_READ).body(json!({ "messageId": message_id })),
        )
        .await
    }

    pub async fn archive_chat(&self, chat_id: &str) -> Result<Value> {
        self.chat_action(catalog::CHAT_ARCHIVE, chat_id).await
    }

    pub async fn unarchive_chat(&self, chat_id: &str) -> Result<Value> {
        self.chat_action(catalog::CHAT_UNARCHIVE, chat_id).await
    }

    pub async fn delete_chat(&self, chat_id: &str) -> Result<Value> {
        self.chat_action(catalog::CHAT_DELETE, chat_id).await
    }

    pub async fn clear_chat(&self, chat_id: &str) -> Result<Value> {
        self.chat_action(catalog::CHAT_CLEAR, chat_id).await
    }

    pub async fn delete_message(&self, message_id: &str) -> Result<Value> {
        self.dispatch(
            ApiRequest::new(catalog::CHAT_DELETE_MESSAGE)
                .body(json!({ "messageId": message_id })),
        )
        .await
    }

    /// Check which of `numbers` are registered on WhatsApp.
    pub async fn is_whatsapp_number(&self, numbers: &[impl AsRef<str>]) -> Result<Value> {
        let numbers: Vec<&str> = numbers.iter().map(|n| n.as_ref()).collect();
        self.dispatch(
            ApiRequest::new(catalog::CHAT_WHATSAPP_NUMBERS).body(json!({ "numbers": numbers })),
        )
        .await
    }

    /// Search contacts. `filter` becomes the `where` clause; `None` matches all.
    pub async fn find_contacts(&self, filter: Option<Value>) -> Result<Value> {
        self.dispatch(
            ApiRequest::new(catalog::CHAT_FIND_CONTACTS)
                .body(json!({ "where": filter.unwrap_or_else(|| json!({})) })),
        )
        .await
    }

    /// Search stored messages. `filter` becomes the `where` clause.
    pub async fn find_messages(&self, filter: Option<Value>) -> Result<Value> {
        self.dispatch(
            ApiRequest::new(catalog::CHAT_FIND_MESSAGES)
                .body(json!({ "where": filter.unwrap_or_else(|| json!({})) })),
        )
        .await
    }

    pub async fn find_chats(&self) -> Result<Value> {
        self.dispatch(ApiRequest::new(catalog::CHAT_FIND_CHATS)).await
    }

    pub async fn fetch_profile_picture(&self, number: &str) -> Result<Value> {
        self.dispatch(
            ApiRequest::new(catalog::CHAT_PROFILE_PICTURE).body(json!({ "number": number })),
        )
        .await
    }
}
