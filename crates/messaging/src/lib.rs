//! `pedidos-messaging` — persisted message records.
//!
//! One record per message relayed in either direction, carrying the parsed
//! order (client + items) alongside provider metadata.

pub mod message;

pub use message::{DeliveryStatus, Direction, Message};
