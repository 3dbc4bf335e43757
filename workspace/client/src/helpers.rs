use secrecy::{ExposeSecret, Secret};
use std::path::Path;

use signed_messages_core::SigningKey;
use web3_keystore::{decrypt, KeyStore};

use crate::{input::read_password, Error, Result};

/// Environment variable that supplies the keystore passphrase.
pub(crate) const KEYSTORE_PASSWORD_ENV: &str = "SIGMSG_KEYSTORE_PASSWORD";

/// Read a keystore file into a signing key.
///
/// The passphrase is taken from the environment when set,
/// otherwise the user is prompted.
pub fn read_keystore_file(key: impl AsRef<Path>) -> Result<SigningKey> {
    let key = key.as_ref();
    if !key.is_file() {
        return Err(Error::NotFile(key.to_path_buf()));
    }

    let buffer = std::fs::read(key)?;
    let keystore: KeyStore = serde_json::from_slice(&buffer)?;

    let password = match std::env::var(KEYSTORE_PASSWORD_ENV) {
        Ok(password) => Secret::new(password),
        Err(_) => read_password("Keystore passphrase: ")?,
    };

    let key = decrypt(&keystore, password.expose_secret())?;
    Ok(SigningKey::from_bytes(&key)?)
}
