use std::sync::Arc;

use axum::{
    Json,
    extract::{Extension, Query},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::{DateTime, Utc};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub async fn inventory(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<dto::InventoryReportQuery>,
) -> axum::response::Response {
    let from = query.from.unwrap_or(DateTime::<Utc>::MIN_UTC);
    let to = query.to.unwrap_or_else(Utc::now);

    let messages = match services.store().inbound_between(from, to).await {
        Ok(messages) => messages,
        Err(e) => return errors::store_error_to_response(e),
    };

    let totals = pedidos_reporting::summarize(&messages);
    (StatusCode::OK, Json(dto::report_to_json(from, to, &totals))).into_response()
}
