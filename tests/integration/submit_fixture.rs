use anyhow::Result;
use serial_test::serial;
use std::path::PathBuf;

use crate::test_utils::*;

use signed_messages_client::MessageClient;
use signed_messages_core::SignedMessage;

#[tokio::test]
#[serial]
async fn integration_submit_fixture() -> Result<()> {
    // Spawn the server
    let (rx, _handle) = spawn(default_server_config())?;
    let _ = rx.await?;

    let server_url = server();

    // Signed outside this workspace with a local offset and
    // characters that are escaped in the signed bytes
    let file = PathBuf::from("fixtures/signed-message.json");
    let body = std::fs::read(&file)?;
    let expected = SignedMessage::from_json(&body)?;

    let client = reqwest::Client::new();
    let response = client
        .post(server_url.join("submit")?)
        .header("content-type", "application/json")
        .body(body)
        .send()
        .await?;
    assert_eq!(201, response.status().as_u16());

    let messages = MessageClient::messages(server_url).await?;
    assert_eq!(vec![expected], messages);
    assert_eq!(
        "2024-05-01T12:30:00.25+09:00",
        serde_json::to_value(&messages[0])?["message"]["timestamp"]
    );
    assert!(messages[0].verify());

    Ok(())
}
