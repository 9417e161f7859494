use std::sync::Arc;

use axum::{
    Json,
    extract::{Extension, Query},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;

use pedidos_core::DomainError;
use pedidos_messaging::{DeliveryStatus, Message};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

const DEFAULT_LIST_LIMIT: usize = 50;

pub async fn send(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::SendMessageRequest>,
) -> axum::response::Response {
    if let Err(e) = validate_send(&body) {
        return errors::domain_error_to_response(e);
    }

    let receipt = match services.sender().send_text(&body.to, &body.body).await {
        Ok(receipt) => receipt,
        Err(e) => {
            tracing::warn!("provider send failed: {e}");
            return errors::provider_error_to_response(e);
        }
    };

    let status = DeliveryStatus::from_provider(receipt.status.as_deref());
    let message = Message::outbound(
        body.to,
        body.body,
        status,
        Some(receipt.sid.clone()),
        Utc::now(),
    );
    let id = message.id;

    if let Err(e) = services.store().append(message).await {
        return errors::store_error_to_response(e);
    }

    (
        StatusCode::OK,
        Json(serde_json::json!({
            "ok": true,
            "sid": receipt.sid,
            "id": id.to_string(),
        })),
    )
        .into_response()
}

fn validate_send(req: &dto::SendMessageRequest) -> Result<(), DomainError> {
    if req.to.trim().is_empty() {
        return Err(DomainError::validation("to must not be empty"));
    }
    if req.body.trim().is_empty() {
        return Err(DomainError::validation("body must not be empty"));
    }
    Ok(())
}

pub async fn list(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<dto::ListMessagesQuery>,
) -> axum::response::Response {
    let limit = query.limit.unwrap_or(DEFAULT_LIST_LIMIT);

    match services.store().recent(limit).await {
        Ok(messages) => {
            let rows: Vec<_> = messages.iter().map(dto::message_to_json).collect();
            (StatusCode::OK, Json(serde_json::Value::Array(rows))).into_response()
        }
        Err(e) => errors::store_error_to_response(e),
    }
}
