use axum_server::Handle;
use std::{net::SocketAddr, path::PathBuf, str::FromStr, sync::Arc};

pub mod config;
mod error;
mod handlers;
pub mod store;
mod server;

pub type Result<T> = std::result::Result<T, error::Error>;

pub use config::ServerConfig;
pub use error::Error;
pub use server::{Server, ServerInfo, ServerState, State};

/// Start a server using the given bind address and configuration.
pub async fn start(bind: String, config: PathBuf) -> Result<()> {
    let name = env!("CARGO_PKG_NAME").to_string();
    let version = env!("CARGO_PKG_VERSION").to_string();
    let config = ServerConfig::load(&config)?;
    let handle = Handle::new();
    let state = Arc::new(State::new(config, ServerInfo { name, version }));
    let addr = SocketAddr::from_str(&bind)?;
    let server = Server::new();
    server.start(addr, state, handle).await?;
    Ok(())
}
