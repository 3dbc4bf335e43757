use std::{net::SocketAddr, sync::Arc};

use axum::{
    extract::Extension,
    http::{header::CONTENT_TYPE, HeaderValue, Method},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use axum_server::{tls_rustls::RustlsConfig, Handle};
use serde::{Deserialize, Serialize};
use tower_http::{
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
};

use crate::{
    config::TlsConfig,
    handlers::{MessageHandler, SignTestHandler},
    store::{self, BoxedStore},
    Result, ServerConfig,
};

/// State shared by the request handlers.
pub type ServerState = Arc<State>;

/// Server state.
pub struct State {
    /// The server configuration.
    pub config: ServerConfig,
    /// Server information.
    pub info: ServerInfo,
    /// Store for verified messages.
    pub store: BoxedStore,
}

impl State {
    /// Create state using the store described by the configuration.
    pub fn new(config: ServerConfig, info: ServerInfo) -> Self {
        let store = store::build(&config);
        Self {
            config,
            info,
            store,
        }
    }
}

/// Server information.
#[derive(Debug, Serialize, Deserialize)]
pub struct ServerInfo {
    /// Name of the crate.
    pub name: String,
    /// Version of the crate.
    pub version: String,
}

#[derive(Default)]
pub struct Server;

impl Server {
    /// Create a new server.
    pub fn new() -> Self {
        Self
    }

    /// Start the server.
    pub async fn start(
        &self,
        addr: SocketAddr,
        state: ServerState,
        handle: Handle,
    ) -> Result<()> {
        let origins = Server::read_origins(&state.config)?;
        let tls = state.config.tls.as_ref().cloned();

        if let Some(tls) = tls {
            self.run_tls(addr, state, handle, origins, tls).await
        } else {
            self.run(addr, state, handle, origins).await
        }
    }

    /// Start the server running on HTTPS.
    async fn run_tls(
        &self,
        addr: SocketAddr,
        state: ServerState,
        handle: Handle,
        origins: Option<Vec<HeaderValue>>,
        tls: TlsConfig,
    ) -> Result<()> {
        let tls = RustlsConfig::from_pem_file(&tls.cert, &tls.key).await?;
        let app = Server::router(state, origins);
        tracing::info!("listening on {}", addr);
        axum_server::bind_rustls(addr, tls)
            .handle(handle)
            .serve(app.into_make_service())
            .await?;
        Ok(())
    }

    /// Start the server running on HTTP.
    async fn run(
        &self,
        addr: SocketAddr,
        state: ServerState,
        handle: Handle,
        origins: Option<Vec<HeaderValue>>,
    ) -> Result<()> {
        let app = Server::router(state, origins);
        tracing::info!("listening on {}", addr);
        axum_server::bind(addr)
            .handle(handle)
            .serve(app.into_make_service())
            .await?;
        Ok(())
    }

    fn read_origins(config: &ServerConfig) -> Result<Option<Vec<HeaderValue>>> {
        if let Some(cors) = &config.cors {
            let mut origins = Vec::new();
            for url in cors.origins.iter() {
                origins.push(HeaderValue::from_str(
                    url.as_str().trim_end_matches('/'),
                )?);
            }
            Ok(Some(origins))
        } else {
            Ok(None)
        }
    }

    fn router(state: ServerState, origins: Option<Vec<HeaderValue>>) -> Router {
        let cors = CorsLayer::new()
            .allow_methods(vec![Method::GET, Method::POST])
            .allow_headers(vec![CONTENT_TYPE]);

        let cors = if let Some(origins) = origins {
            cors.allow_origin(origins)
        } else {
            cors.allow_origin(Any)
        };

        let limit = state.config.api.body_limit;

        let mut app = Router::new()
            .route("/api", get(api))
            .route("/submit", post(MessageHandler::submit))
            .route("/messages", get(MessageHandler::list));

        if state.config.api.sign_test {
            app = app.route("/sign-test", get(SignTestHandler::get));
        }

        app.layer(RequestBodyLimitLayer::new(limit))
            .layer(cors)
            .layer(Extension(state))
    }
}

/// Serve the API identity page.
pub(crate) async fn api(
    Extension(state): Extension<ServerState>,
) -> impl IntoResponse {
    Json(serde_json::json!(&state.info))
}
