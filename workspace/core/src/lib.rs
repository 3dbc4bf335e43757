//! Canonical encoding and signature verification for signed messages.
//!
//! Messages are signed with ECDSA over NIST P-256 using SHA-256;
//! public keys travel as hex-encoded uncompressed SEC1 points and
//! signatures as hex-encoded ASN.1 DER.
mod canonical;
mod codec;
mod error;
mod key;
mod message;
mod service;
mod sign;
mod verify;

pub use canonical::{serialize, CANONICAL_VERSION};
pub use codec::{decode_hex, encode_hex};
pub use error::Error;
pub use key::{decode_public_key, PublicKey, UNCOMPRESSED_POINT_LEN};
pub use message::{Message, SignedMessage};
pub use service::{try_verify, verify};
pub use sign::{generate_signing_key, public_key_hex, sign, sign_message};
pub use verify::{decode_signature, digest, verify_signature};

/// Re-exported so callers can hold keys without depending on `p256`.
pub use p256::ecdsa::SigningKey;

pub type Result<T> = std::result::Result<T, error::Error>;
