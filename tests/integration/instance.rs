//! Instance lifecycle endpoints.

use crate::mock_server::{MockGateway, GLOBAL_KEY, INSTANCE};
use evolution_api_client::{InstanceOptions, PresenceStatus};
use mockito::Matcher;
use serde_json::json;

#[tokio::test]
async fn create_instance_merges_defaults_and_adopts_hash() {
    let mut gw = MockGateway::new().await;
    let create = gw
        .expect("POST", "/instance/create")
        .match_header("apikey", GLOBAL_KEY)
        .match_body(Matcher::Json(json!({
            "instanceName": INSTANCE,
            "qrcode": false,
            "integration": "WHATSAPP-BAILEYS"
        })))
        .with_body(r#"{"instance":{"instanceName":"test-instance"},"hash":"issued-key"}"#)
        .create_async()
        .await;
    let follow_up = gw
        .expect("GET", &format!("/instance/connectionState/{}", INSTANCE))
        .match_header("apikey", "issued-key")
        .create_async()
        .await;

    let options = InstanceOptions {
        qrcode: Some(false),
        ..Default::default()
    };
    let created = gw.client.create_instance(&options).await.unwrap();
    assert_eq!(created["hash"], "issued-key");
    assert_eq!(gw.client.credential(), "issued-key");

    gw.client.get_connection_state().await.unwrap();
    create.assert_async().await;
    follow_up.assert_async().await;
}

#[tokio::test]
async fn create_instance_without_hash_keeps_credential() {
    let mut gw = MockGateway::new().await;
    let _mock = gw
        .expect("POST", "/instance/create")
        .with_body(r#"{"instance":{"status":"created"}}"#)
        .create_async()
        .await;

    gw.client.create_instance(&InstanceOptions::default()).await.unwrap();
    assert!(gw.client.is_using_global_credential());
}

#[tokio::test]
async fn create_instance_without_selection_omits_name() {
    let mut gw = MockGateway::new().await;
    gw.client.clear_instance();
    let mock = gw
        .expect("POST", "/instance/create")
        .match_body(Matcher::Json(json!({
            "qrcode": true,
            "integration": "WHATSAPP-BAILEYS"
        })))
        .create_async()
        .await;

    gw.client.create_instance(&InstanceOptions::default()).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn fetch_instances_with_and_without_name() {
    let mut gw = MockGateway::new().await;
    let all = gw
        .expect("GET", "/instance/fetchInstances")
        .with_body("[]")
        .create_async()
        .await;
    let one = gw
        .expect("GET", "/instance/fetchInstances?instanceName=foo")
        .with_body(r#"[{"instance":{"instanceName":"foo"}}]"#)
        .create_async()
        .await;

    assert_eq!(gw.client.fetch_instances(None).await.unwrap(), json!([]));
    let found = gw.client.fetch_instances(Some("foo")).await.unwrap();
    assert_eq!(found[0]["instance"]["instanceName"], "foo");
    all.assert_async().await;
    one.assert_async().await;
}

#[tokio::test]
async fn connect_instance_with_and_without_number() {
    let mut gw = MockGateway::new().await;
    let qr = gw
        .expect("GET", &format!("/instance/connect/{}", INSTANCE))
        .with_body(r#"{"base64":"data:image/png;base64,AAA"}"#)
        .create_async()
        .await;
    let pairing = gw
        .expect(
            "GET",
            &format!("/instance/connect/{}?number=5511987654321", INSTANCE),
        )
        .with_body(r#"{"pairingCode":"ABCD-1234"}"#)
        .create_async()
        .await;

    gw.client.connect_instance(None).await.unwrap();
    let code = gw.client.connect_instance(Some("5511987654321")).await.unwrap();
    assert_eq!(code["pairingCode"], "ABCD-1234");
    qr.assert_async().await;
    pairing.assert_async().await;
}

#[tokio::test]
async fn presence_restart_and_logout_paths() {
    let mut gw = MockGateway::new().await;
    let presence = gw
        .expect("POST", &format!("/instance/setPresence/{}", INSTANCE))
        .match_body(Matcher::Json(json!({"presence": "unavailable"})))
        .create_async()
        .await;
    let default_presence = gw
        .expect("POST", &format!("/instance/setPresence/{}", INSTANCE))
        .match_body(Matcher::Json(json!({"presence": "available"})))
        .create_async()
        .await;
    let restart = gw
        .expect("POST", &format!("/instance/restart/{}", INSTANCE))
        .create_async()
        .await;
    let logout = gw
        .expect("DELETE", &format!("/instance/logout/{}", INSTANCE))
        .create_async()
        .await;

    gw.client.set_presence(PresenceStatus::Unavailable).await.unwrap();
    gw.client.set_presence(PresenceStatus::default()).await.unwrap();
    gw.client.restart_instance().await.unwrap();
    gw.client.logout_instance().await.unwrap();

    presence.assert_async().await;
    default_presence.assert_async().await;
    restart.assert_async().await;
    logout.assert_async().await;
}

#[tokio::test]
async fn delete_instance_uses_and_restores_global_key() {
    let mut gw = MockGateway::new().await;
    let delete = gw
        .expect("DELETE", &format!("/instance/delete/{}", INSTANCE))
        .match_header("apikey", GLOBAL_KEY)
        .create_async()
        .await;

    gw.client.set_credential("instance-key");
    gw.client.delete_instance().await.unwrap();
    assert!(gw.client.is_using_global_credential());
    delete.assert_async().await;
}
