use anyhow::Result;
use axum_server::Handle;
use std::{net::SocketAddr, sync::Arc, thread};
use tokio::sync::oneshot;
use url::Url;

use signed_messages_core::{
    generate_signing_key, sign_message, Message, SignedMessage,
};
use signed_messages_server::{
    config::{ApiConfig, StorageConfig},
    Server, ServerConfig, ServerInfo, State,
};

const ADDR: &str = "127.0.0.1:9009";
const SERVER: &str = "http://localhost:9009";

struct MockServer {
    handle: Handle,
}

impl MockServer {
    fn new() -> Result<Self> {
        Ok(Self {
            handle: Handle::new(),
        })
    }

    async fn start(&self, config: ServerConfig) -> Result<()> {
        let addr: SocketAddr = ADDR.parse::<SocketAddr>()?;

        tracing::info!("start mock server {:#?}", addr);

        let state = Arc::new(State::new(
            config,
            ServerInfo {
                name: String::from("integration-test"),
                version: String::from("0.0.0"),
            },
        ));

        let server = Server::new();
        server.start(addr, state, self.handle.clone()).await?;
        Ok(())
    }

    /// Run the mock server in a separate thread.
    fn spawn(
        tx: oneshot::Sender<SocketAddr>,
        config: ServerConfig,
    ) -> Result<ShutdownHandle> {
        let server = MockServer::new()?;
        let listen_handle = server.handle.clone();
        let user_handle = server.handle.clone();

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().unwrap();
            runtime.block_on(async move {
                loop {
                    if let Some(addr) = listen_handle.listening().await {
                        tracing::info!("server has started {:#?}", addr);
                        tx.send(addr)
                            .expect("failed to send listening notification");
                        break;
                    }
                }
            });
        });

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().unwrap();
            runtime.block_on(async {
                server.start(config).await.expect("failed to start server");
            });
        });

        Ok(ShutdownHandle(user_handle))
    }
}

/// Ensure the server is shutdown when the handle is dropped.
pub struct ShutdownHandle(Handle);

impl Drop for ShutdownHandle {
    fn drop(&mut self) {
        tracing::info!("shutdown mock server");
        self.0.shutdown();
    }
}

pub fn default_server_config() -> ServerConfig {
    ServerConfig::default()
}

pub fn api_server_config(api: ApiConfig) -> ServerConfig {
    let mut config = default_server_config();
    config.api = api;
    config
}

pub fn storage_server_config(storage: StorageConfig) -> ServerConfig {
    let mut config = default_server_config();
    config.storage = storage;
    config
}

pub fn spawn(
    config: ServerConfig,
) -> Result<(oneshot::Receiver<SocketAddr>, ShutdownHandle)> {
    let (tx, rx) = oneshot::channel::<SocketAddr>();
    let handle = MockServer::spawn(tx, config)?;
    Ok((rx, handle))
}

pub fn server() -> Url {
    Url::parse(SERVER).expect("failed to parse server URL")
}

pub fn mock_signed_message(content: &str) -> SignedMessage {
    let signing_key = generate_signing_key();
    sign_message(&signing_key, Message::now(content))
}

/// Assert a client result failed with a status code.
pub fn assert_status<T>(
    result: signed_messages_client::Result<T>,
    expected: u16,
) {
    let code = if let Err(signed_messages_client::Error::ResponseCode(code)) =
        result
    {
        Some(code)
    } else {
        None
    };
    assert_eq!(Some(expected), code);
}
