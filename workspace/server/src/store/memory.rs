use async_trait::async_trait;
use tokio::sync::RwLock;

use signed_messages_core::SignedMessage;

use super::MessageStore;
use crate::{Error, Result};

/// Message store held in memory.
#[derive(Default)]
pub struct MemoryStore {
    messages: RwLock<Vec<SignedMessage>>,
    capacity: Option<usize>,
}

impl MemoryStore {
    /// Create a store, optionally limited to a number of messages.
    pub fn new(capacity: Option<usize>) -> Self {
        Self {
            messages: RwLock::new(Vec::new()),
            capacity,
        }
    }
}

#[async_trait]
impl MessageStore for MemoryStore {
    async fn append(&self, message: SignedMessage) -> Result<()> {
        let mut writer = self.messages.write().await;
        if let Some(capacity) = self.capacity {
            if writer.len() >= capacity {
                return Err(Error::StoreFull(capacity));
            }
        }
        writer.push(message);
        Ok(())
    }

    async fn list(&self) -> Result<Vec<SignedMessage>> {
        let reader = self.messages.read().await;
        Ok(reader.clone())
    }

    async fn len(&self) -> Result<usize> {
        let reader = self.messages.read().await;
        Ok(reader.len())
    }
}
