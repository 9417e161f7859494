//! `pedidos-reporting` — inventory aggregation over persisted messages.
//!
//! Consumes the parser's pre-normalized `items`, so grouping by product
//! string is exact; no catalog lookup or fuzzy matching happens here.

pub mod inventory;

pub use inventory::{ProductTotal, summarize};
