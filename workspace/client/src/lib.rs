//! Client for the signed messages server.
mod client;
mod commands;
mod error;
mod helpers;
mod input;

pub type Result<T> = std::result::Result<T, error::Error>;

pub use client::MessageClient;
pub use commands::{keygen, list, sign, submit, verify_file};
pub use error::Error;
pub use helpers::read_keystore_file;
