//! Types for messages and their signatures.
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::{canonical, service, Result};

/// Message content and the time it was written.
///
/// Fields are private so a message cannot change after the bytes
/// for a signature have been computed from it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Message {
    content: String,
    #[serde(with = "time::serde::rfc3339")]
    timestamp: OffsetDateTime,
}

impl Message {
    /// Create a new message.
    pub fn new(content: impl Into<String>, timestamp: OffsetDateTime) -> Self {
        Self {
            content: content.into(),
            timestamp,
        }
    }

    /// Create a message stamped with the current UTC time.
    pub fn now(content: impl Into<String>) -> Self {
        Self::new(content, OffsetDateTime::now_utc())
    }

    /// Content of the message.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Timestamp of the message.
    pub fn timestamp(&self) -> OffsetDateTime {
        self.timestamp
    }

    /// Bytes that are hashed when signing this message.
    pub fn canonical_bytes(&self) -> Vec<u8> {
        canonical::serialize(self)
    }
}

// The offset is part of the signed bytes so two messages at the same
// instant with different offsets are not equal.
impl PartialEq for Message {
    fn eq(&self, other: &Self) -> bool {
        self.content == other.content
            && self.timestamp == other.timestamp
            && self.timestamp.offset() == other.timestamp.offset()
    }
}

impl Eq for Message {}

/// Message with a detached signature and the signer's public key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedMessage {
    /// The signed message.
    pub message: Message,
    /// DER signature encoded as hex.
    pub signature: String,
    /// Uncompressed SEC1 public key encoded as hex.
    #[serde(rename = "publicKey")]
    pub public_key: String,
}

impl SignedMessage {
    /// Parse a signed message from JSON.
    pub fn from_json(buffer: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(buffer)?)
    }

    /// Determine if the signature is valid for the canonical
    /// encoding of the message.
    pub fn verify(&self) -> bool {
        service::verify(
            &self.public_key,
            &self.signature,
            &self.message.canonical_bytes(),
        )
    }
}
