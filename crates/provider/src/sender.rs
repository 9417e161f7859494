use async_trait::async_trait;
use thiserror::Error;

/// Failure modes of an outbound provider call.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The request never completed (connect, DNS, timeout, body decode).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The provider answered with a non-success status.
    #[error("provider rejected message ({status}): {message}")]
    Rejected { status: u16, message: String },
}

/// Acknowledgement returned by the provider for an accepted message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendReceipt {
    pub sid: String,
    /// Raw provider status (e.g. `"queued"`); mapping to a typed delivery
    /// status is the caller's concern.
    pub status: Option<String>,
}

/// Outbound send seam.
#[async_trait]
pub trait WhatsappSender: Send + Sync {
    async fn send_text(&self, to: &str, body: &str) -> Result<SendReceipt, ProviderError>;
}
