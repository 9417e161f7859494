use axum::{
    Router,
    routing::{get, post},
};

pub mod messages;
pub mod reports;
pub mod system;
pub mod webhook;

/// Router for all relay endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/health", get(system::health))
        .route("/messages/send", post(messages::send))
        .route("/messages", get(messages::list))
        .route("/webhooks/whatsapp", post(webhook::receive))
        .route("/reports/inventory", get(reports::inventory))
}
