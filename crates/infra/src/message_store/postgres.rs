//! Postgres-backed message store.
//!
//! One row per relayed message; the parsed `items` list and raw provider
//! payload are kept as JSONB so the report query stays a plain range scan.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row, postgres::PgRow};

use pedidos_core::MessageId;
use pedidos_messaging::{DeliveryStatus, Direction, Message};

use super::{MessageStore, StoreError};

pub struct PostgresMessageStore {
    pool: PgPool,
}

impl PostgresMessageStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create the messages table and index if missing.
    ///
    /// Called once at startup; repeat calls are no-ops.
    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS messages (
                id UUID PRIMARY KEY,
                phone TEXT NOT NULL,
                body TEXT NOT NULL,
                direction TEXT NOT NULL,
                client TEXT,
                items JSONB NOT NULL DEFAULT '[]'::jsonb,
                status TEXT NOT NULL,
                provider_sid TEXT,
                metadata JSONB NOT NULL DEFAULT 'null'::jsonb,
                received_at TIMESTAMPTZ NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(db_err)?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS messages_received_at_idx \
             ON messages (received_at DESC)",
        )
        .execute(&self.pool)
        .await
        .map_err(db_err)?;

        tracing::debug!("messages schema ensured");
        Ok(())
    }
}

fn db_err(e: sqlx::Error) -> StoreError {
    StoreError::Database(e.to_string())
}

fn row_to_message(row: &PgRow) -> Result<Message, StoreError> {
    let id: uuid::Uuid = row.try_get("id").map_err(db_err)?;

    let direction: String = row.try_get("direction").map_err(db_err)?;
    let direction: Direction = direction
        .parse()
        .map_err(|e: pedidos_core::DomainError| StoreError::Corrupt(e.to_string()))?;

    // Unrecognized stored statuses degrade to Unknown instead of failing the
    // whole listing.
    let status: String = row.try_get("status").map_err(db_err)?;
    let status = status.parse().unwrap_or(DeliveryStatus::Unknown);

    let items: serde_json::Value = row.try_get("items").map_err(db_err)?;
    let items = serde_json::from_value(items)
        .map_err(|e| StoreError::Corrupt(format!("items column: {e}")))?;

    Ok(Message {
        id: MessageId::from_uuid(id),
        phone: row.try_get("phone").map_err(db_err)?,
        body: row.try_get("body").map_err(db_err)?,
        direction,
        client: row.try_get("client").map_err(db_err)?,
        items,
        status,
        provider_sid: row.try_get("provider_sid").map_err(db_err)?,
        metadata: row.try_get("metadata").map_err(db_err)?,
        received_at: row.try_get("received_at").map_err(db_err)?,
    })
}

#[async_trait]
impl MessageStore for PostgresMessageStore {
    async fn append(&self, message: Message) -> Result<(), StoreError> {
        let items = serde_json::to_value(&message.items)
            .map_err(|e| StoreError::Corrupt(format!("items: {e}")))?;

        sqlx::query(
            r#"
            INSERT INTO messages (
                id, phone, body, direction, client, items,
                status, provider_sid, metadata, received_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(message.id.as_uuid())
        .bind(&message.phone)
        .bind(&message.body)
        .bind(message.direction.as_str())
        .bind(&message.client)
        .bind(items)
        .bind(message.status.as_str())
        .bind(&message.provider_sid)
        .bind(&message.metadata)
        .bind(message.received_at)
        .execute(&self.pool)
        .await
        .map_err(db_err)?;

        Ok(())
    }

    async fn recent(&self, limit: usize) -> Result<Vec<Message>, StoreError> {
        let rows = sqlx::query(
            "SELECT * FROM messages ORDER BY received_at DESC LIMIT $1",
        )
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(db_err)?;

        rows.iter().map(row_to_message).collect()
    }

    async fn inbound_between(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<Message>, StoreError> {
        let rows = sqlx::query(
            r#"
            SELECT * FROM messages
            WHERE direction = 'in' AND received_at >= $1 AND received_at <= $2
            ORDER BY received_at ASC
            "#,
        )
        .bind(from)
        .bind(to)
        .fetch_all(&self.pool)
        .await
        .map_err(db_err)?;

        rows.iter().map(row_to_message).collect()
    }
}
