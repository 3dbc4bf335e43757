//! Verification of hex encoded keys and signatures.
use crate::{
    codec::decode_hex, key::decode_public_key, verify::check_signature, Result,
};

/// Verify a signature over message bytes using hex encoded inputs.
///
/// Returns the reason verification failed; use [`verify`] when the
/// reason must not be revealed.
pub fn try_verify(
    public_key_hex: &str,
    signature_hex: &str,
    message: &[u8],
) -> Result<()> {
    let public_key = decode_hex(public_key_hex)?;
    let signature = decode_hex(signature_hex)?;
    let public_key = decode_public_key(&public_key)?;
    check_signature(&public_key, &signature, message)
}

/// Determine if a signature over message bytes is valid.
///
/// The message bytes are verified exactly as given; callers are
/// expected to pass the canonical encoding of the message. Every
/// failure yields `false`.
pub fn verify(
    public_key_hex: &str,
    signature_hex: &str,
    message: &[u8],
) -> bool {
    try_verify(public_key_hex, signature_hex, message).is_ok()
}
