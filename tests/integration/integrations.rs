//! Optional bot integrations, compiled with the `typebot` / `openai` features.

use crate::mock_server::{MockGateway, INSTANCE};
use mockito::Matcher;
use serde_json::json;

#[cfg(feature = "typebot")]
#[tokio::test]
async fn typebot_create_start_and_lookup() {
    use evolution_api_client::{TypebotConfig, TypebotStart};

    let mut gw = MockGateway::new().await;
    let create = gw
        .expect("POST", &format!("/typebot/create/{}", INSTANCE))
        .match_body(Matcher::PartialJson(json!({
            "enabled": true,
            "url": "https://typebot.example.com",
            "typebot": "support-flow",
            "triggerType": "keyword",
            "keywordFinish": "#SAIR"
        })))
        .create_async()
        .await;
    let start = gw
        .expect("POST", &format!("/typebot/start/{}", INSTANCE))
        .match_body(Matcher::Json(json!({
            "remoteJid": "5511999990000@s.whatsapp.net",
            "startSession": true,
            "variables": []
        })))
        .create_async()
        .await;
    let find = gw
        .expect("GET", &format!("/typebot/find/{}", INSTANCE))
        .with_body("[]")
        .create_async()
        .await;
    let fetch = gw
        .expect("GET", &format!("/typebot/fetch/tb-1/{}", INSTANCE))
        .with_body(r#"{"id":"tb-1"}"#)
        .create_async()
        .await;

    gw.client
        .create_typebot(&TypebotConfig {
            url: Some("https://typebot.example.com".into()),
            typebot: Some("support-flow".into()),
            ..Default::default()
        })
        .await
        .unwrap();
    gw.client
        .start_typebot(&TypebotStart {
            remote_jid: Some("5511999990000@s.whatsapp.net".into()),
            start_session: Some(true),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(gw.client.find_typebots().await.unwrap(), json!([]));
    assert_eq!(gw.client.fetch_typebot("tb-1").await.unwrap()["id"], "tb-1");

    create.assert_async().await;
    start.assert_async().await;
    find.assert_async().await;
    fetch.assert_async().await;
}

#[cfg(feature = "openai")]
#[tokio::test]
async fn openai_bot_and_credentials() {
    use evolution_api_client::{OpenAiBotConfig, OpenAiCreds};

    let mut gw = MockGateway::new().await;
    let creds = gw
        .expect("POST", &format!("/openai/creds/{}", INSTANCE))
        .match_body(Matcher::Json(json!({"name": "prod", "apiKey": "sk-test"})))
        .with_body(r#"{"id":"cred-1"}"#)
        .create_async()
        .await;
    let bot = gw
        .expect("POST", &format!("/openai/create/{}", INSTANCE))
        .match_body(Matcher::PartialJson(json!({
            "enabled": true,
            "openaiCredsId": "cred-1",
            "botType": "chatCompletion"
        })))
        .create_async()
        .await;

    let stored = gw
        .client
        .set_openai_creds(&OpenAiCreds {
            name: Some("prod".into()),
            api_key: Some("sk-test".into()),
            ..Default::default()
        })
        .await
        .unwrap();
    gw.client
        .create_openai_bot(&OpenAiBotConfig {
            openai_creds_id: stored["id"].as_str().map(String::from),
            bot_type: Some("chatCompletion".into()),
            ..Default::default()
        })
        .await
        .unwrap();

    creds.assert_async().await;
    bot.assert_async().await;
}
