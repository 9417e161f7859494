use std::sync::Arc;

use axum::{
    Form,
    extract::Extension,
    http::{StatusCode, header},
    response::IntoResponse,
};
use chrono::Utc;

use pedidos_messaging::{DeliveryStatus, Message};
use pedidos_parser::parse_order;
use pedidos_provider::TwilioWebhook;

use crate::app::services::AppServices;

/// Empty TwiML reply; the relay never auto-responds to the sender.
const EMPTY_TWIML: &str = "<Response></Response>";

/// Inbound provider webhook.
///
/// Message callbacks are parsed for an order and persisted; status callbacks
/// for our own sends are persisted as outbound records. Store failures are
/// logged and swallowed — the provider always gets a 200 TwiML reply.
pub async fn receive(
    Extension(services): Extension<Arc<AppServices>>,
    Form(payload): Form<TwilioWebhook>,
) -> axum::response::Response {
    let body = payload.body.clone().unwrap_or_default();
    let phone = payload.counterparty().unwrap_or("unknown").to_string();
    let status = DeliveryStatus::from_provider(payload.message_status.as_deref());
    let sid = payload.message_sid.clone();
    let metadata = serde_json::to_value(&payload).unwrap_or(serde_json::Value::Null);

    let message = if payload.is_inbound() {
        let order = parse_order(&body);
        Message::inbound(phone, body, order, status, sid.clone(), metadata, Utc::now())
    } else {
        let mut record = Message::outbound(phone, body, status, sid.clone(), Utc::now());
        record.metadata = metadata;
        record
    };

    let client = message.client.clone();
    let item_count = message.items.len();
    match services.store().append(message).await {
        Ok(()) => tracing::info!(
            sid = sid.as_deref().unwrap_or("none"),
            ?client,
            item_count,
            "webhook stored"
        ),
        Err(e) => tracing::warn!("failed to store webhook message: {e}"),
    }

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/xml")],
        EMPTY_TWIML,
    )
        .into_response()
}
