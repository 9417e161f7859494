use std::sync::Arc;

use pedidos_infra::{InMemoryMessageStore, MessageStore};
use pedidos_provider::{TwilioClient, WhatsappSender};

use crate::config::ApiConfig;

/// Shared handles behind the routes: message store and provider client,
/// both behind their trait seams so tests can substitute doubles.
#[derive(Clone)]
pub struct AppServices {
    store: Arc<dyn MessageStore>,
    sender: Arc<dyn WhatsappSender>,
}

impl AppServices {
    pub fn new(store: Arc<dyn MessageStore>, sender: Arc<dyn WhatsappSender>) -> Self {
        Self { store, sender }
    }

    pub fn store(&self) -> &Arc<dyn MessageStore> {
        &self.store
    }

    pub fn sender(&self) -> &Arc<dyn WhatsappSender> {
        &self.sender
    }
}

/// Wire services from config: the Twilio client plus an in-memory store, or
/// the Postgres store when `USE_PERSISTENT_STORE=true` and the `postgres`
/// feature is enabled.
pub async fn build_services(config: &ApiConfig) -> AppServices {
    let sender: Arc<dyn WhatsappSender> = Arc::new(TwilioClient::new(config.provider.clone()));

    if config.use_persistent_store {
        #[cfg(feature = "postgres")]
        {
            return AppServices::new(build_postgres_store(config).await, sender);
        }
        #[cfg(not(feature = "postgres"))]
        tracing::warn!(
            "USE_PERSISTENT_STORE=true but postgres feature not enabled, falling back to in-memory"
        );
    }

    AppServices::new(Arc::new(InMemoryMessageStore::new()), sender)
}

#[cfg(feature = "postgres")]
async fn build_postgres_store(config: &ApiConfig) -> Arc<dyn MessageStore> {
    use pedidos_infra::PostgresMessageStore;

    let database_url = config
        .database_url
        .clone()
        .expect("DATABASE_URL must be set when USE_PERSISTENT_STORE=true");

    let pool = sqlx::PgPool::connect(&database_url)
        .await
        .expect("failed to connect to Postgres");

    let store = PostgresMessageStore::new(pool);
    store
        .ensure_schema()
        .await
        .expect("failed to ensure messages schema");

    Arc::new(store)
}
