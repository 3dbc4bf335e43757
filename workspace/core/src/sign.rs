//! Signing helpers used to produce messages the verifier accepts.
use p256::ecdsa::{signature::DigestSigner, Signature, SigningKey};

use crate::{
    codec::encode_hex, verify::digest, Message, PublicKey, SignedMessage,
};

/// Generate a random signing key.
pub fn generate_signing_key() -> SigningKey {
    SigningKey::random(&mut rand::thread_rng())
}

/// Hex encoded uncompressed public key for a signing key.
pub fn public_key_hex(signing_key: &SigningKey) -> String {
    let public_key: PublicKey = signing_key.verifying_key().into();
    encode_hex(public_key.to_uncompressed())
}

/// Sign the SHA-256 digest of a message and return the DER encoding.
pub fn sign(signing_key: &SigningKey, message: &[u8]) -> Vec<u8> {
    let signature: Signature = signing_key.sign_digest(digest(message));
    signature.to_der().as_bytes().to_vec()
}

/// Sign the canonical encoding of a message.
pub fn sign_message(
    signing_key: &SigningKey,
    message: Message,
) -> SignedMessage {
    let signature = sign(signing_key, &message.canonical_bytes());
    SignedMessage {
        message,
        signature: encode_hex(signature),
        public_key: public_key_hex(signing_key),
    }
}
