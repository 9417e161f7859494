use chrono::{DateTime, Utc};
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use pedidos_core::{DomainError, MessageId};
use pedidos_parser::{OrderItem, ParsedOrder};

/// Direction of a relayed message, from the service's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    #[serde(rename = "in")]
    Inbound,
    #[serde(rename = "out")]
    Outbound,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Inbound => "in",
            Direction::Outbound => "out",
        }
    }
}

impl FromStr for Direction {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "in" => Ok(Direction::Inbound),
            "out" => Ok(Direction::Outbound),
            other => Err(DomainError::validation(format!(
                "direction must be \"in\" or \"out\", got {other:?}"
            ))),
        }
    }
}

/// Provider-reported delivery state of a message.
///
/// Unrecognized provider values collapse to `Unknown` rather than failing the
/// record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryStatus {
    Queued,
    Sent,
    Delivered,
    Read,
    Failed,
    Unknown,
}

impl DeliveryStatus {
    /// Map a raw provider status string (e.g. Twilio's `MessageStatus`).
    pub fn from_provider(raw: Option<&str>) -> Self {
        match raw.map(str::to_ascii_lowercase).as_deref() {
            Some("queued") | Some("accepted") => DeliveryStatus::Queued,
            Some("sent") => DeliveryStatus::Sent,
            Some("delivered") => DeliveryStatus::Delivered,
            Some("read") => DeliveryStatus::Read,
            Some("failed") | Some("undelivered") => DeliveryStatus::Failed,
            _ => DeliveryStatus::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryStatus::Queued => "queued",
            DeliveryStatus::Sent => "sent",
            DeliveryStatus::Delivered => "delivered",
            DeliveryStatus::Read => "read",
            DeliveryStatus::Failed => "failed",
            DeliveryStatus::Unknown => "unknown",
        }
    }
}

impl FromStr for DeliveryStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "queued" => Ok(DeliveryStatus::Queued),
            "sent" => Ok(DeliveryStatus::Sent),
            "delivered" => Ok(DeliveryStatus::Delivered),
            "read" => Ok(DeliveryStatus::Read),
            "failed" => Ok(DeliveryStatus::Failed),
            "unknown" => Ok(DeliveryStatus::Unknown),
            other => Err(DomainError::validation(format!(
                "unknown delivery status {other:?}"
            ))),
        }
    }
}

/// One persisted message record.
///
/// `items` is empty for plain chat messages; a non-empty list marks the
/// record as an order for downstream reporting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    /// Counterparty address as reported by the provider (e.g. `whatsapp:+549...`).
    pub phone: String,
    pub body: String,
    pub direction: Direction,
    pub client: Option<String>,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    pub status: DeliveryStatus,
    pub provider_sid: Option<String>,
    /// Raw provider payload, kept for auditing.
    pub metadata: serde_json::Value,
    pub received_at: DateTime<Utc>,
}

impl Message {
    /// Record an inbound message together with its parsed order.
    pub fn inbound(
        phone: impl Into<String>,
        body: impl Into<String>,
        order: ParsedOrder,
        status: DeliveryStatus,
        provider_sid: Option<String>,
        metadata: serde_json::Value,
        received_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: MessageId::new(),
            phone: phone.into(),
            body: body.into(),
            direction: Direction::Inbound,
            client: order.client,
            items: order.items,
            status,
            provider_sid,
            metadata,
            received_at,
        }
    }

    /// Record an outbound message we handed to the provider.
    pub fn outbound(
        phone: impl Into<String>,
        body: impl Into<String>,
        status: DeliveryStatus,
        provider_sid: Option<String>,
        sent_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: MessageId::new(),
            phone: phone.into(),
            body: body.into(),
            direction: Direction::Outbound,
            client: None,
            items: Vec::new(),
            status,
            provider_sid,
            metadata: serde_json::Value::Null,
            received_at: sent_at,
        }
    }

    pub fn is_order(&self) -> bool {
        !self.items.is_empty()
    }
}
