use anyhow::Result;
use serial_test::serial;

use crate::test_utils::*;

use signed_messages_client::MessageClient;
use signed_messages_server::config::ApiConfig;

#[tokio::test]
#[serial]
async fn integration_sign_test_disabled() -> Result<()> {
    let api = ApiConfig {
        sign_test: false,
        ..Default::default()
    };

    // Spawn the server
    let (rx, _handle) = spawn(api_server_config(api))?;
    let _ = rx.await?;

    let result = MessageClient::sign_test(server()).await;
    assert_status(result, 404);

    Ok(())
}
