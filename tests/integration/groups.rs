//! Group administration endpoints.

use crate::mock_server::{MockGateway, INSTANCE};
use evolution_api_client::GroupConfig;
use mockito::Matcher;
use serde_json::json;

const GROUP: &str = "120363000000000000@g.us";

fn path(action: &str) -> String {
    format!("/group/{}/{}", action, INSTANCE)
}

#[tokio::test]
async fn create_group_merges_defaults() {
    let mut gw = MockGateway::new().await;
    let mock = gw
        .expect("POST", &path("create"))
        .match_body(Matcher::Json(json!({
            "subject": "New Group",
            "participants": ["5511999990000"]
        })))
        .with_body(r#"{"id":"120363000000000000@g.us","subject":"New Group"}"#)
        .create_async()
        .await;

    let config = GroupConfig {
        participants: Some(vec!["5511999990000".into()]),
        ..Default::default()
    };
    let created = gw.client.create_group(&config).await.unwrap();
    assert_eq!(created["id"], GROUP);
    mock.assert_async().await;
}

#[tokio::test]
async fn metadata_updates_post_group_jid() {
    let mut gw = MockGateway::new().await;
    let subject = gw
        .expect("POST", &path("updateGroupSubject"))
        .match_body(Matcher::Json(json!({"groupJid": GROUP, "subject": "Ops"})))
        .create_async()
        .await;
    let description = gw
        .expect("POST", &path("updateGroupDescription"))
        .match_body(Matcher::Json(json!({"groupJid": GROUP, "description": "On-call"})))
        .create_async()
        .await;
    let picture = gw
        .expect("POST", &path("updateGroupPicture"))
        .match_body(Matcher::Json(json!({
            "groupJid": GROUP,
            "image": "https://cdn.example.com/logo.png"
        })))
        .create_async()
        .await;

    gw.client.update_group_subject(GROUP, "Ops").await.unwrap();
    gw.client
        .update_group_description(GROUP, "On-call")
        .await
        .unwrap();
    gw.client
        .update_group_picture(GROUP, "https://cdn.example.com/logo.png")
        .await
        .unwrap();

    subject.assert_async().await;
    description.assert_async().await;
    picture.assert_async().await;
}

#[tokio::test]
async fn participant_actions_share_body_shape() {
    let mut gw = MockGateway::new().await;
    let body = json!({"groupJid": GROUP, "participants": ["5511999990000", "5511999990001"]});
    let mut mocks = Vec::new();
    for action in [
        "addParticipants",
        "removeParticipants",
        "promoteParticipants",
        "demoteParticipants",
    ] {
        mocks.push(
            gw.expect("POST", &path(action))
                .match_body(Matcher::Json(body.clone()))
                .create_async()
                .await,
        );
    }

    let people = ["5511999990000", "5511999990001"];
    gw.client.add_participants(GROUP, &people).await.unwrap();
    gw.client.remove_participants(GROUP, &people).await.unwrap();
    gw.client.promote_participants(GROUP, &people).await.unwrap();
    gw.client.demote_participants(GROUP, &people).await.unwrap();

    for mock in mocks {
        mock.assert_async().await;
    }
}

#[tokio::test]
async fn invite_code_info_and_leave() {
    let mut gw = MockGateway::new().await;
    let invite = gw
        .server
        .mock("GET", path("inviteCode").as_str())
        .match_query(Matcher::UrlEncoded("id".into(), GROUP.into()))
        .with_body(r#"{"code":"AbCdEf"}"#)
        .create_async()
        .await;
    let info = gw
        .server
        .mock("GET", path("getInfo").as_str())
        .match_query(Matcher::UrlEncoded("id".into(), GROUP.into()))
        .with_body(r#"{"subject":"Ops"}"#)
        .create_async()
        .await;
    let revoke = gw
        .expect("PUT", &path("revokeInviteCode"))
        .match_body(Matcher::Json(json!({"groupJid": GROUP})))
        .create_async()
        .await;
    let leave = gw
        .expect("DELETE", &path("leaveGroup"))
        .match_body(Matcher::Json(json!({"groupJid": GROUP})))
        .create_async()
        .await;

    let code = gw.client.fetch_invite_code(GROUP).await.unwrap();
    assert_eq!(code["code"], "AbCdEf");
    let group = gw.client.get_group_info(GROUP).await.unwrap();
    assert_eq!(group["subject"], "Ops");
    gw.client.revoke_invite_code(GROUP).await.unwrap();
    gw.client.leave_group(GROUP).await.unwrap();

    invite.assert_async().await;
    info.assert_async().await;
    revoke.assert_async().await;
    leave.assert_async().await;
}
