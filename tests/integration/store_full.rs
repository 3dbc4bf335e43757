use anyhow::Result;
use serial_test::serial;

use crate::test_utils::*;

use signed_messages_client::MessageClient;
use signed_messages_server::config::StorageConfig;

#[tokio::test]
#[serial]
async fn integration_store_full() -> Result<()> {
    let storage = StorageConfig { capacity: Some(1) };

    // Spawn the server
    let (rx, _handle) = spawn(storage_server_config(storage))?;
    let _ = rx.await?;

    let server_url = server();

    MessageClient::submit(server_url.clone(), &mock_signed_message("first"))
        .await?;

    let result = MessageClient::submit(
        server_url.clone(),
        &mock_signed_message("second"),
    )
    .await;
    assert_status(result, 507);

    let messages = MessageClient::messages(server_url).await?;
    assert_eq!(1, messages.len());

    Ok(())
}
