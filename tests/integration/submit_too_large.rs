use anyhow::Result;
use serial_test::serial;

use crate::test_utils::*;

use signed_messages_client::MessageClient;
use signed_messages_server::config::ApiConfig;

#[tokio::test]
#[serial]
async fn integration_submit_too_large() -> Result<()> {
    let api = ApiConfig {
        body_limit: 512,
        ..Default::default()
    };

    // Spawn the server
    let (rx, _handle) = spawn(api_server_config(api))?;
    let _ = rx.await?;

    let server_url = server();

    // Just over the limit so the body is written with the headers
    let signed = mock_signed_message(&"a".repeat(256));
    let body = serde_json::to_vec(&signed)?;
    assert!(body.len() > 512);

    let result = MessageClient::submit(server_url.clone(), &signed).await;
    assert_status(result, 413);

    // Nothing was stored
    let messages = MessageClient::messages(server_url).await?;
    assert!(messages.is_empty());

    Ok(())
}
