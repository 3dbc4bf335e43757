use thiserror::Error;

/// Reasons a signed message can fail to verify.
///
/// These are only observable through [`crate::try_verify`] and the
/// individual decoders; [`crate::verify`] collapses all of them to `false`.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid hex encoding: {0}")]
    InvalidEncoding(#[from] hex::FromHexError),

    #[error("invalid public key")]
    InvalidKey,

    #[error("invalid signature encoding")]
    InvalidSignature,

    #[error("signature verification failed")]
    VerificationFailed,

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
