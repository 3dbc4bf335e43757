use anyhow::Result;
use serial_test::serial;

use crate::test_utils::*;

use signed_messages_client::MessageClient;
use signed_messages_core::{Message, SignedMessage};

#[tokio::test]
#[serial]
async fn integration_submit_unauthorized() -> Result<()> {
    // Spawn the server
    let (rx, _handle) = spawn(default_server_config())?;
    let _ = rx.await?;

    let server_url = server();

    let signed = mock_signed_message("hello");

    // Content changed after signing
    let tampered = SignedMessage {
        message: Message::new("hello!", signed.message.timestamp()),
        ..signed.clone()
    };
    let result = MessageClient::submit(server_url.clone(), &tampered).await;
    assert_status(result, 401);

    // Signature from a different key
    let other = mock_signed_message("hello");
    let swapped = SignedMessage {
        public_key: other.public_key,
        ..signed.clone()
    };
    let result = MessageClient::submit(server_url.clone(), &swapped).await;
    assert_status(result, 401);

    // Not hex encoded
    let garbage = SignedMessage {
        signature: String::from("not-hex"),
        public_key: String::from("not-hex"),
        ..signed
    };
    let result = MessageClient::submit(server_url.clone(), &garbage).await;
    assert_status(result, 401);

    // Nothing was stored
    let messages = MessageClient::messages(server_url).await?;
    assert!(messages.is_empty());

    Ok(())
}
