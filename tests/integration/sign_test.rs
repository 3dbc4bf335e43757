use anyhow::Result;
use serial_test::serial;

use crate::test_utils::*;

use signed_messages_client::MessageClient;

#[tokio::test]
#[serial]
async fn integration_sign_test() -> Result<()> {
    // Spawn the server
    let (rx, _handle) = spawn(default_server_config())?;
    let _ = rx.await?;

    let server_url = server();

    let signed = MessageClient::sign_test(server_url.clone()).await?;
    assert!(signed.verify());

    // The response is accepted by the submit endpoint unchanged
    MessageClient::submit(server_url.clone(), &signed).await?;

    let messages = MessageClient::messages(server_url).await?;
    assert_eq!(vec![signed], messages);

    Ok(())
}
