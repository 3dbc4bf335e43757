//! Digest and signature verification.
use p256::ecdsa::{signature::DigestVerifier, Signature};
use sha2::{Digest, Sha256};

use crate::{Error, PublicKey, Result};

/// SHA-256 state primed with the message bytes.
pub fn digest(message: &[u8]) -> Sha256 {
    Sha256::new_with_prefix(message)
}

/// Decode an ASN.1 DER encoded signature.
///
/// Both scalars must be non-zero and less than the curve order.
pub fn decode_signature(bytes: &[u8]) -> Result<Signature> {
    Signature::from_der(bytes).map_err(|_| Error::InvalidSignature)
}

pub(crate) fn check_signature(
    public_key: &PublicKey,
    signature: &[u8],
    message: &[u8],
) -> Result<()> {
    let signature = decode_signature(signature)?;
    public_key
        .verifying_key()
        .verify_digest(digest(message), &signature)
        .map_err(|_| Error::VerificationFailed)
}

/// Verify a DER signature over the SHA-256 digest of a message.
pub fn verify_signature(
    public_key: &PublicKey,
    signature: &[u8],
    message: &[u8],
) -> bool {
    check_signature(public_key, signature, message).is_ok()
}
