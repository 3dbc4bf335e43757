use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("path {0} is not a directory")]
    NotDirectory(PathBuf),

    #[error("file {0} does not exist")]
    NotFile(PathBuf),

    #[error("file {0} already exists")]
    FileExists(PathBuf),

    #[error("passwords do not match")]
    PasswordMismatch,

    #[error("unexpected response status code {0}")]
    ResponseCode(u16),

    #[error(transparent)]
    Core(#[from] signed_messages_core::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Url(#[from] url::ParseError),

    #[error(transparent)]
    Request(#[from] reqwest::Error),

    #[error(transparent)]
    KeyStore(#[from] web3_keystore::KeyStoreError),

    #[error(transparent)]
    Ecdsa(#[from] p256::ecdsa::Error),

    #[error(transparent)]
    Readline(#[from] rustyline::error::ReadlineError),
}
