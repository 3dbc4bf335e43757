use secrecy::ExposeSecret;
use std::path::{Path, PathBuf};
use url::Url;
use web3_keystore::encrypt;

use signed_messages_core::{
    generate_signing_key, public_key_hex, sign_message, Message,
    SignedMessage,
};

use crate::{helpers, input, Error, MessageClient, Result};

/// Number of public key hex characters used to name keystore files.
const KEYSTORE_NAME_LEN: usize = 16;

/// Generate a signing key and write it to an encrypted keystore
/// in the directory.
///
/// Returns the hex encoded public key.
pub async fn keygen(dir: PathBuf) -> Result<String> {
    if !dir.is_dir() {
        return Err(Error::NotDirectory(dir));
    }

    let password = input::read_new_password()?;

    let key = generate_signing_key();
    let public_key = public_key_hex(&key);

    // Skip the point tag so names differ between keys
    let name = &public_key[2..2 + KEYSTORE_NAME_LEN];
    let file = dir.join(format!("{}.json", name));
    if file.exists() {
        return Err(Error::FileExists(file));
    }

    let keystore = encrypt(
        &mut rand::thread_rng(),
        key.to_bytes(),
        password.expose_secret(),
        Some(public_key.clone()),
    )?;

    let buffer = serde_json::to_vec_pretty(&keystore)?;
    std::fs::write(&file, buffer)?;
    tracing::info!(file = ?file, "wrote keystore");

    Ok(public_key)
}

/// Sign message content with the key in a keystore.
pub async fn sign(key: PathBuf, content: String) -> Result<SignedMessage> {
    let signing_key = helpers::read_keystore_file(key)?;
    Ok(sign_message(&signing_key, Message::now(content)))
}

/// Sign message content and submit it to a server.
pub async fn submit(
    server: Url,
    key: PathBuf,
    content: String,
) -> Result<SignedMessage> {
    let signed = sign(key, content).await?;
    MessageClient::submit(server, &signed).await?;
    Ok(signed)
}

/// List the verified messages on a server.
pub async fn list(server: Url) -> Result<Vec<SignedMessage>> {
    MessageClient::messages(server).await
}

/// Verify a signed message stored as JSON in a file.
pub fn verify_file(file: impl AsRef<Path>) -> Result<bool> {
    let file = file.as_ref();
    if !file.is_file() {
        return Err(Error::NotFile(file.to_path_buf()));
    }
    let buffer = std::fs::read(file)?;
    let signed = SignedMessage::from_json(&buffer)?;
    Ok(signed.verify())
}
