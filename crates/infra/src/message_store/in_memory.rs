//! In-memory message store (dev/test).

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use pedidos_messaging::{Direction, Message};

use super::{MessageStore, StoreError};

/// Append-only in-memory store.
#[derive(Debug, Default)]
pub struct InMemoryMessageStore {
    inner: Mutex<Vec<Message>>,
}

impl InMemoryMessageStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl MessageStore for InMemoryMessageStore {
    async fn append(&self, message: Message) -> Result<(), StoreError> {
        self.inner.lock().unwrap().push(message);
        Ok(())
    }

    async fn recent(&self, limit: usize) -> Result<Vec<Message>, StoreError> {
        let mut all = self.inner.lock().unwrap().clone();
        all.sort_by(|a, b| b.received_at.cmp(&a.received_at));
        all.truncate(limit);
        Ok(all)
    }

    async fn inbound_between(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<Message>, StoreError> {
        let mut rows: Vec<Message> = self
            .inner
            .lock()
            .unwrap()
            .iter()
            .filter(|m| {
                m.direction == Direction::Inbound && m.received_at >= from && m.received_at <= to
            })
            .cloned()
            .collect();
        rows.sort_by(|a, b| a.received_at.cmp(&b.received_at));
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use pedidos_messaging::DeliveryStatus;
    use pedidos_parser::parse_order;

    fn inbound_at(body: &str, received_at: DateTime<Utc>) -> Message {
        Message::inbound(
            "whatsapp:+5491100000000",
            body,
            parse_order(body),
            DeliveryStatus::Unknown,
            None,
            serde_json::Value::Null,
            received_at,
        )
    }

    #[tokio::test]
    async fn recent_returns_newest_first_up_to_limit() {
        let store = InMemoryMessageStore::new();
        let base = Utc::now();
        for offset in 0..5 {
            store
                .append(inbound_at("1 pan", base + Duration::seconds(offset)))
                .await
                .unwrap();
        }

        let recent = store.recent(3).await.unwrap();
        assert_eq!(recent.len(), 3);
        assert!(recent[0].received_at > recent[1].received_at);
        assert!(recent[1].received_at > recent[2].received_at);
    }

    #[tokio::test]
    async fn inbound_between_filters_direction_and_range() {
        let store = InMemoryMessageStore::new();
        let base = Utc::now();

        store.append(inbound_at("2 arroz", base)).await.unwrap();
        store
            .append(inbound_at("3 pan", base + Duration::days(2)))
            .await
            .unwrap();
        store
            .append(Message::outbound(
                "+5491100000000",
                "listo",
                DeliveryStatus::Queued,
                None,
                base,
            ))
            .await
            .unwrap();

        let rows = store
            .inbound_between(base - Duration::hours(1), base + Duration::hours(1))
            .await
            .unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].body, "2 arroz");
    }

    #[tokio::test]
    async fn inbound_between_is_oldest_first() {
        let store = InMemoryMessageStore::new();
        let base = Utc::now();
        store
            .append(inbound_at("2 arroz", base + Duration::seconds(10)))
            .await
            .unwrap();
        store.append(inbound_at("1 pan", base)).await.unwrap();

        let rows = store
            .inbound_between(base - Duration::hours(1), base + Duration::hours(1))
            .await
            .unwrap();
        assert_eq!(rows[0].body, "1 pan");
        assert_eq!(rows[1].body, "2 arroz");
    }
}
