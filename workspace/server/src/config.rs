use serde::Deserialize;
use std::path::{Path, PathBuf};
use url::Url;

use crate::{Error, Result};

#[derive(Debug, Default, Deserialize)]
pub struct ServerConfig {
    /// Configuration for the HTTP API.
    #[serde(default)]
    pub api: ApiConfig,

    /// Configuration for the message store.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Configuration for TLS encryption.
    pub tls: Option<TlsConfig>,

    /// Configuration for CORS.
    pub cors: Option<CorsConfig>,

    /// Path the file was loaded from used to determine
    /// relative paths.
    #[serde(skip)]
    file: Option<PathBuf>,
}

impl ServerConfig {
    /// Load a configuration file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        if !path.as_ref().is_file() {
            return Err(Error::NotFile(path.as_ref().to_path_buf()));
        }

        let contents = std::fs::read_to_string(path.as_ref())?;
        let mut config: ServerConfig = toml::from_str(&contents)?;
        config.file = Some(path.as_ref().canonicalize()?);

        let dir = config.directory();

        if let (Some(tls), Some(dir)) = (config.tls.as_mut(), dir) {
            if tls.cert.is_relative() {
                tls.cert = dir.join(&tls.cert);
            }
            if tls.key.is_relative() {
                tls.key = dir.join(&tls.key);
            }

            tls.cert = tls.cert.canonicalize()?;
            tls.key = tls.key.canonicalize()?;
        }

        Ok(config)
    }

    /// Parent directory of the configuration file.
    fn directory(&self) -> Option<PathBuf> {
        self.file
            .as_ref()
            .and_then(|p| p.parent())
            .map(|p| p.to_path_buf())
    }
}

fn default_body_limit() -> usize {
    1024 * 64
}

fn default_sign_test() -> bool {
    true
}

#[derive(Debug, Deserialize)]
pub struct ApiConfig {
    /// Maximum size of request bodies.
    #[serde(default = "default_body_limit")]
    pub body_limit: usize,
    /// Serve the endpoint that signs a sample message.
    #[serde(default = "default_sign_test")]
    pub sign_test: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            body_limit: default_body_limit(),
            sign_test: default_sign_test(),
        }
    }
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct StorageConfig {
    /// Maximum number of messages to keep, unbounded when not set.
    pub capacity: Option<usize>,
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct TlsConfig {
    /// Path to the certificate.
    pub cert: PathBuf,
    /// Path to the certificate key file.
    pub key: PathBuf,
}

#[derive(Debug, Default, Deserialize)]
pub struct CorsConfig {
    /// List of CORS origins allowed to call the server.
    pub origins: Vec<Url>,
}
