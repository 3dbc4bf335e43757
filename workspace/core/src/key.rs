//! Public key decoding for the P-256 curve.
use p256::ecdsa::VerifyingKey;

use crate::{Error, Result};

/// Length of an uncompressed SEC1 point: tag plus two 32 byte coordinates.
pub const UNCOMPRESSED_POINT_LEN: usize = 65;

/// Tag byte that prefixes an uncompressed SEC1 point.
const UNCOMPRESSED_TAG: u8 = 0x04;

/// Public key that is known to be a valid point on the curve.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PublicKey(VerifyingKey);

impl PublicKey {
    /// Encode as an uncompressed SEC1 point.
    pub fn to_uncompressed(&self) -> [u8; UNCOMPRESSED_POINT_LEN] {
        let point = self.0.to_encoded_point(false);
        let mut bytes = [0u8; UNCOMPRESSED_POINT_LEN];
        bytes.copy_from_slice(point.as_bytes());
        bytes
    }

    pub(crate) fn verifying_key(&self) -> &VerifyingKey {
        &self.0
    }
}

impl From<VerifyingKey> for PublicKey {
    fn from(value: VerifyingKey) -> Self {
        Self(value)
    }
}

/// Decode an uncompressed SEC1 point into a public key.
///
/// Only the 65 byte `0x04 || x || y` form is accepted. The point
/// must satisfy the curve equation; compressed points, the identity
/// and off-curve coordinates are all rejected.
pub fn decode_public_key(bytes: &[u8]) -> Result<PublicKey> {
    if bytes.len() != UNCOMPRESSED_POINT_LEN || bytes[0] != UNCOMPRESSED_TAG {
        return Err(Error::InvalidKey);
    }

    let key =
        VerifyingKey::from_sec1_bytes(bytes).map_err(|_| Error::InvalidKey)?;
    Ok(PublicKey(key))
}
