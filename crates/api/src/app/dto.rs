use chrono::{DateTime, Utc};
use serde::Deserialize;

use pedidos_messaging::Message;
use pedidos_reporting::ProductTotal;

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct SendMessageRequest {
    pub to: String,
    pub body: String,
}

#[derive(Debug, Deserialize)]
pub struct ListMessagesQuery {
    pub limit: Option<usize>,
}

/// RFC3339 bounds; both optional. Missing `from` means "since the beginning",
/// missing `to` means "until now".
#[derive(Debug, Deserialize)]
pub struct InventoryReportQuery {
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
}

// -------------------------
// JSON mapping helpers
// -------------------------

pub fn message_to_json(message: &Message) -> serde_json::Value {
    serde_json::json!({
        "id": message.id.to_string(),
        "phone": message.phone,
        "body": message.body,
        "direction": message.direction.as_str(),
        "client": message.client,
        "items": message.items,
        "status": message.status.as_str(),
        "provider_sid": message.provider_sid,
        "received_at": message.received_at,
    })
}

pub fn report_to_json(
    from: DateTime<Utc>,
    to: DateTime<Utc>,
    totals: &[ProductTotal],
) -> serde_json::Value {
    serde_json::json!({
        "from": from,
        "to": to,
        "products": totals,
    })
}
