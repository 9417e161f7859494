//! Process configuration, resolved from the environment once at startup and
//! passed down explicitly; no module-level client or pool construction.

use anyhow::Context;

use pedidos_provider::TwilioConfig;

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub provider: TwilioConfig,
    pub port: u16,
    pub use_persistent_store: bool,
    pub database_url: Option<String>,
}

impl ApiConfig {
    /// Read configuration from the environment.
    ///
    /// Missing provider credentials fall back to dev defaults with a
    /// warning, so the service can boot locally without a Twilio account.
    pub fn from_env() -> anyhow::Result<Self> {
        let account_sid = env_or_dev("TWILIO_ACCOUNT_SID", "ACdev");
        let auth_token = env_or_dev("TWILIO_AUTH_TOKEN", "dev-token");
        let from_number = env_or_dev("TWILIO_WHATSAPP_FROM", "+14155238886");

        let mut provider = TwilioConfig::new(account_sid, auth_token, from_number);
        if let Ok(base_url) = std::env::var("TWILIO_BASE_URL") {
            provider = provider.with_base_url(base_url);
        }

        let port = match std::env::var("PORT") {
            Ok(raw) => raw.parse::<u16>().context("PORT must be a TCP port number")?,
            Err(_) => 8080,
        };

        let use_persistent_store = std::env::var("USE_PERSISTENT_STORE")
            .unwrap_or_else(|_| "false".to_string())
            .parse::<bool>()
            .unwrap_or(false);

        Ok(Self {
            provider,
            port,
            use_persistent_store,
            database_url: std::env::var("DATABASE_URL").ok(),
        })
    }
}

fn env_or_dev(key: &str, fallback: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| {
        tracing::warn!("{key} not set; using dev default");
        fallback.to_string()
    })
}
