use anyhow::Result;
use serial_test::serial;

use crate::test_utils::*;

use signed_messages_server::ServerInfo;

#[tokio::test]
#[serial]
async fn integration_api_info() -> Result<()> {
    // Spawn the server
    let (rx, _handle) = spawn(default_server_config())?;
    let _ = rx.await?;

    let url = server().join("api")?;
    let response = reqwest::get(url).await?;
    assert_eq!(200, response.status().as_u16());

    let info: ServerInfo = response.json().await?;
    assert_eq!("integration-test", info.name);
    assert_eq!("0.0.0", info.version);

    Ok(())
}
