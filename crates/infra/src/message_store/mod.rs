//! Message persistence: store trait plus in-memory and Postgres backends.

mod in_memory;
#[cfg(feature = "postgres")]
mod postgres;

pub use in_memory::InMemoryMessageStore;
#[cfg(feature = "postgres")]
pub use postgres::PostgresMessageStore;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

use pedidos_messaging::Message;

/// Storage-level error.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backend refused or failed the operation.
    #[error("database error: {0}")]
    Database(String),

    /// A stored record could not be decoded back into a [`Message`].
    #[error("stored record is malformed: {0}")]
    Corrupt(String),
}

/// Persistence seam for relayed messages.
#[async_trait]
pub trait MessageStore: Send + Sync {
    /// Append one message record.
    async fn append(&self, message: Message) -> Result<(), StoreError>;

    /// Most recent messages, newest first.
    async fn recent(&self, limit: usize) -> Result<Vec<Message>, StoreError>;

    /// Inbound messages with `received_at` inside `[from, to]` (inclusive),
    /// oldest first.
    async fn inbound_between(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<Message>, StoreError>;
}
