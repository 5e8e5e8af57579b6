//! Group administration.

use super::object;
use crate::client::catalog;
use crate::client::{ApiRequest, Endpoint, EvolutionClient};
use crate::types::{Extra, MediaSource};
use crate::utils::merge_defaults;
use crate::Result;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

pub const DEFAULT_GROUP_SUBJECT: &str = "New Group";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub participants: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl GroupConfig {
    pub fn new<I, S>(subject: impl Into<String>, participants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            subject: Some(subject.into()),
            participants: Some(participants.into_iter().map(Into::into).collect()),
            ..Default::default()
        }
    }
}

fn group_defaults() -> Map<String, Value> {
    object(json!({
        "subject": DEFAULT_GROUP_SUBJECT,
        "participants": [],
    }))
}

fn participants_body(group_jid: &str, participants: &[impl AsRef<str>]) -> Value {
    let participants: Vec<&str> = participants.iter().map(|p| p.as_ref()).collect();
    json!({ "groupJid": group_jid, "participants": participants })
}

impl EvolutionClient {
    async fn update_participants(
        &self,
        endpoint: Endpoint,
        group_jid: &str,
        participants: &[impl AsRef<str>],
    ) -> Result<Value> {
        self.dispatch(ApiRequest::new(endpoint).body(participants_body(group_jid, participants)))
            .await
    }

    /// Create a group. Defaults: subject "New Group", no participants.
    pub async fn create_group(&self, config: &GroupConfig) -> Result<Value> {
        let body = merge_defaults(group_defaults(), config)?;
        self.dispatch(ApiRequest::new(catalog::GROUP_CREATE).body(body))
            .await
    }

    pub async fn update_group_subject(&self, group_jid: &str, subject: &str) -> Result<Value> {
        self.dispatch(
            ApiRequest::new(catalog::GROUP_UPDATE_SUBJECT)
                .body(json!({ "groupJid": group_jid, "subject": subject })),
        )
        .await
    }

    pub async fn update_group_description(
        &self,
        group_jid: &str,
        description: &str,
    ) -> Result<Value> {
        self.dispatch(
            ApiRequest::new(catalog::GROUP_UPDATE_DESCRIPTION)
                .body(json!({ "groupJid": group_jid, "description": description })),
        )
        .await
    }

    /// `image` is a URL or base64 content.
    pub async fn update_group_picture(
        &self,
        group_jid: &str,
        image: impl Into<MediaSource>,
    ) -> Result<Value> {
        self.dispatch(
            ApiRequest::new(catalog::GROUP_UPDATE_PICTURE)
                .body(json!({ "groupJid": group_jid, "image": image.into() })),
        )
        .await
    }

    pub async fn add_participants(
        &self,
        group_jid: &str,
        participants: &[impl AsRef<str>],
    ) -> Result<Value> {
        self.update_participants(catalog::GROUP_ADD_PARTICIPANTS, group_jid, participants)
            .await
    }

    pub async fn remove_participants(
        &self,
        group_jid: &str,
        participants: &[impl AsRef<str>],
    ) -> Result<Value> {
        self.update_participants(catalog::GROUP_REMOVE_PARTICIPANTS, group_jid, participants)
            .await
    }

    pub async fn promote_participants(
        &self,
        group_jid: &str,
        participants: &[impl AsRef<str>],
    ) -> Result<Value> {
        self.update_participants(catalog::GROUP_PROMOTE_PARTICIPANTS, group_jid, participants)
            .await
    }

    pub async fn demote_participants(
        &self,
        group_jid: &str,
        participants: &[impl AsRef<str>],
    ) -> Result<Value> {
        self.update_participants(catalog::GROUP_DEMOTE_PARTICIPANTS, group_jid, participants)
            .await
    }

    pub async fn fetch_invite_code(&self, group_jid: &str) -> Result<Value> {
        self.dispatch(ApiRequest::new(catalog::GROUP_INVITE_CODE).query("id", group_jid))
            .await
    }

    pub async fn revoke_invite_code(&self, group_jid: &str) -> Result<Value> {
        self.dispatch(
            ApiRequest::new(catalog::GROUP_REVOKE_INVITE_CODE)
                .body(json!({ "groupJid": group_jid })),
        )
        .await
    }

    pub async fn get_group_info(&self, group_jid: &str) -> Result<Value> {
        self.dispatch(ApiRequest::new(catalog::GROUP_INFO).query("id", group_jid))
            .await
    }

    pub async fn leave_group(&self, group_jid: &str) -> Result<Value> {
        self.dispatch(ApiRequest::new(catalog::GROUP_LEAVE).body(json!({ "groupJid": group_jid })))
            .await
    }
}
