//! Message sending endpoints.

use crate::mock_server::{MockGateway, INSTANCE};
use evolution_api_client::{
    Button, ButtonsMessage, ChatPresence, ListMessage, MediaMessage, MediaSource, MessageOptions,
};
use mockito::Matcher;
use serde_json::json;

fn path(action: &str) -> String {
    format!("/message/{}/{}", action, INSTANCE)
}

#[tokio::test]
async fn send_text_spreads_options_into_body() {
    let mut gw = MockGateway::new().await;
    let mock = gw
        .expect("POST", &path("sendText"))
        .match_body(Matcher::Json(json!({
            "number": "1234567890",
            "text": "Test message",
            "delay": 1000,
            "presence": "composing"
        })))
        .with_body(r#"{"key":{"id":"BAE5"},"status":"PENDING"}"#)
        .create_async()
        .await;

    let options = MessageOptions::new()
        .delay(1000)
        .presence(ChatPresence::Composing);
    let sent = gw
        .client
        .send_text("1234567890", "Test message", &options)
        .await
        .unwrap();
    assert_eq!(sent["key"]["id"], "BAE5");
    mock.assert_async().await;
}

#[tokio::test]
async fn send_text_passes_through_extra_gateway_fields() {
    let mut gw = MockGateway::new().await;
    let mock = gw
        .expect("POST", &path("sendText"))
        .match_body(Matcher::Json(json!({
            "number": "1234567890",
            "text": "see https://example.com",
            "linkPreview": true,
            "mentioned": ["5511999990000@s.whatsapp.net"]
        })))
        .create_async()
        .await;

    let options = MessageOptions::new()
        .field("linkPreview", true)
        .field("mentioned", json!(["5511999990000@s.whatsapp.net"]));
    gw.client
        .send_text("1234567890", "see https://example.com", &options)
        .await
        .unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn media_sends_omit_absent_captions() {
    let mut gw = MockGateway::new().await;
    let image = gw
        .expect("POST", &path("sendImage"))
        .match_body(Matcher::Json(json!({
            "number": "5511",
            "image": "https://cdn.example.com/cat.png"
        })))
        .create_async()
        .await;
    let video = gw
        .expect("POST", &path("sendVideo"))
        .match_body(Matcher::Json(json!({
            "number": "5511",
            "video": "https://cdn.example.com/clip.mp4",
            "caption": "look"
        })))
        .create_async()
        .await;
    let audio = gw
        .expect("POST", &path("sendAudio"))
        .match_body(Matcher::Json(json!({"number": "5511", "audio": "AAEC"})))
        .create_async()
        .await;
    let document = gw
        .expect("POST", &path("sendDocument"))
        .match_body(Matcher::Json(json!({
            "number": "5511",
            "document": "https://cdn.example.com/a.pdf",
            "filename": "a.pdf"
        })))
        .create_async()
        .await;

    let none = MessageOptions::default();
    gw.client
        .send_image("5511", "https://cdn.example.com/cat.png", None, &none)
        .await
        .unwrap();
    gw.client
        .send_video("5511", "https://cdn.example.com/clip.mp4", Some("look"), &none)
        .await
        .unwrap();
    gw.client
        .send_audio("5511", MediaSource::Bytes(vec![0, 1, 2]), &none)
        .await
        .unwrap();
    gw.client
        .send_document("5511", "https://cdn.example.com/a.pdf", Some("a.pdf"), &none)
        .await
        .unwrap();

    image.assert_async().await;
    video.assert_async().await;
    audio.assert_async().await;
    document.assert_async().await;
}

#[tokio::test]
async fn location_contact_reaction_and_reply() {
    let mut gw = MockGateway::new().await;
    let location = gw
        .expect("POST", &path("sendLocation"))
        .match_body(Matcher::Json(json!({
            "number": "5511",
            "latitude": -23.55,
            "longitude": -46.63
        })))
        .create_async()
        .await;
    let contact = gw
        .expect("POST", &path("sendContact"))
        .match_body(Matcher::Json(json!({
            "number": "5511",
            "contact": [{"fullName": "Ana", "phoneNumber": "5511999990000"}]
        })))
        .create_async()
        .await;
    let reaction = gw
        .expect("POST", &path("sendReaction"))
        .match_body(Matcher::Json(json!({
            "number": "5511",
            "messageId": "BAE5",
            "reaction": "👍"
        })))
        .create_async()
        .await;
    let reply = gw
        .expect("POST", &path("reply"))
        .match_body(Matcher::Json(json!({
            "number": "5511",
            "text": "on it",
            "messageId": "BAE5",
            "delay": 250
        })))
        .create_async()
        .await;

    let none = MessageOptions::default();
    gw.client
        .send_location("5511", -23.55, -46.63, &none)
        .await
        .unwrap();
    gw.client
        .send_contact(
            "5511",
            &json!([{"fullName": "Ana", "phoneNumber": "5511999990000"}]),
            &none,
        )
        .await
        .unwrap();
    gw.client.send_reaction("5511", "BAE5", "👍").await.unwrap();
    gw.client
        .reply("5511", "on it", "BAE5", &MessageOptions::new().delay(250))
        .await
        .unwrap();

    location.assert_async().await;
    contact.assert_async().await;
    reaction.assert_async().await;
    reply.assert_async().await;
}

#[tokio::test]
async fn send_media_buttons_and_list_defaults() {
    let mut gw = MockGateway::new().await;
    let media = gw
        .expect("POST", &path("sendMedia"))
        .match_body(Matcher::Json(json!({
            "number": "5511",
            "mediatype": "image",
            "mimetype": "image/png",
            "media": "https://cdn.example.com/cat.png",
            "caption": "cat"
        })))
        .create_async()
        .await;
    let buttons = gw
        .expect("POST", &path("sendButtons"))
        .match_body(Matcher::Json(json!({
            "number": "5511",
            "title": "Would you like to know more?",
            "description": "Select an option below",
            "footerText": "Footer Button",
            "buttons": [
                {"text": "Yes, tell me more", "id": "more"},
                {"text": "No, thanks", "id": "stop"}
            ]
        })))
        .create_async()
        .await;
    let list = gw
        .expect("POST", &path("sendList"))
        .match_body(Matcher::Json(json!({
            "number": "5511",
            "title": "List Title",
            "description": "List description",
            "buttonText": "Click Here",
            "footerText": "footer list"
        })))
        .create_async()
        .await;

    gw.client
        .send_media(
            "5511",
            &MediaMessage::new("https://cdn.example.com/cat.png").caption("cat"),
        )
        .await
        .unwrap();
    gw.client
        .send_buttons(
            "5511",
            &ButtonsMessage {
                title: Some("Would you like to know more?".into()),
                description: Some("Select an option below".into()),
                buttons: Some(vec![
                    Button::new("Yes, tell me more", "more"),
                    Button::new("No, thanks", "stop"),
                ]),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    gw.client
        .send_list("5511", &ListMessage::default())
        .await
        .unwrap();

    media.assert_async().await;
    buttons.assert_async().await;
    list.assert_async().await;
}
