use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("file {0} does not exist")]
    NotFile(PathBuf),

    #[error("message store is full, capacity is {0}")]
    StoreFull(usize),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    AddrParse(#[from] std::net::AddrParseError),

    #[error(transparent)]
    HeaderValue(#[from] axum::http::header::InvalidHeaderValue),
}
