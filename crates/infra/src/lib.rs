//! `pedidos-infra` — persistence backends for message records.
//!
//! The [`message_store::MessageStore`] trait is the seam between the HTTP
//! layer and storage; an in-memory implementation serves dev/test, a
//! Postgres implementation (feature `postgres`) serves deployments.

pub mod message_store;

pub use message_store::{InMemoryMessageStore, MessageStore, StoreError};

#[cfg(feature = "postgres")]
pub use message_store::PostgresMessageStore;
