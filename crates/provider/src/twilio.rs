//! Twilio WhatsApp transport.

use async_trait::async_trait;
use serde::Deserialize;

use crate::sender::{ProviderError, SendReceipt, WhatsappSender};

pub const DEFAULT_BASE_URL: &str = "https://api.twilio.com";

/// Credentials and addressing for the Twilio messages API.
///
/// Built explicitly by the caller (typically from env vars in `main`); no
/// globals, no construction-time side effects.
#[derive(Debug, Clone)]
pub struct TwilioConfig {
    pub account_sid: String,
    pub auth_token: String,
    /// Sender number, with or without the `whatsapp:` prefix.
    pub from_number: String,
    pub base_url: String,
}

impl TwilioConfig {
    pub fn new(
        account_sid: impl Into<String>,
        auth_token: impl Into<String>,
        from_number: impl Into<String>,
    ) -> Self {
        Self {
            account_sid: account_sid.into(),
            auth_token: auth_token.into(),
            from_number: from_number.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

/// Production [`WhatsappSender`] backed by the Twilio REST API.
pub struct TwilioClient {
    config: TwilioConfig,
    http: reqwest::Client,
}

impl TwilioClient {
    pub fn new(config: TwilioConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    fn messages_url(&self) -> String {
        format!(
            "{}/2010-04-01/Accounts/{}/Messages.json",
            self.config.base_url.trim_end_matches('/'),
            self.config.account_sid
        )
    }
}

/// Address in Twilio's `whatsapp:<E.164>` channel form.
fn whatsapp_addr(number: &str) -> String {
    if number.starts_with("whatsapp:") {
        number.to_string()
    } else {
        format!("whatsapp:{number}")
    }
}

#[derive(Debug, Deserialize)]
struct MessageCreated {
    sid: String,
    status: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct TwilioErrorBody {
    code: Option<i64>,
    message: Option<String>,
}

#[async_trait]
impl WhatsappSender for TwilioClient {
    async fn send_text(&self, to: &str, body: &str) -> Result<SendReceipt, ProviderError> {
        let params = [
            ("From", whatsapp_addr(&self.config.from_number)),
            ("To", whatsapp_addr(to)),
            ("Body", body.to_string()),
        ];

        let response = self
            .http
            .post(self.messages_url())
            .basic_auth(&self.config.account_sid, Some(&self.config.auth_token))
            .form(&params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let err: TwilioErrorBody = response.json().await.unwrap_or_default();
            let message = match (err.code, err.message) {
                (Some(code), Some(message)) => format!("{message} (code {code})"),
                (None, Some(message)) => message,
                (Some(code), None) => format!("error code {code}"),
                (None, None) => "no error body".to_string(),
            };
            tracing::warn!(status = status.as_u16(), "twilio rejected send: {message}");
            return Err(ProviderError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        let created: MessageCreated = response.json().await?;
        Ok(SendReceipt {
            sid: created.sid,
            status: created.status,
        })
    }
}
