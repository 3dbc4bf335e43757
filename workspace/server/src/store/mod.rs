//! Storage for messages that passed verification.
use async_trait::async_trait;

use signed_messages_core::SignedMessage;

mod memory;

pub use memory::MemoryStore;

use crate::{config::ServerConfig, Result};

/// Store shared by the request handlers.
pub type BoxedStore = Box<dyn MessageStore + Send + Sync + 'static>;

/// Trait for a message store.
///
/// Implementations must serialize concurrent appends and reads.
#[async_trait]
pub trait MessageStore {
    /// Append a verified message.
    async fn append(&self, message: SignedMessage) -> Result<()>;

    /// List all messages in the order they were appended.
    async fn list(&self) -> Result<Vec<SignedMessage>>;

    /// Number of stored messages.
    async fn len(&self) -> Result<usize>;
}

/// Build the store for a server configuration.
pub fn build(config: &ServerConfig) -> BoxedStore {
    Box::new(MemoryStore::new(config.storage.capacity))
}
