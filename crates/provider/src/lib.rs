//! `pedidos-provider` — WhatsApp provider integration.
//!
//! Outbound sends go through the [`WhatsappSender`] trait so the HTTP layer
//! can be exercised with a test double; [`twilio::TwilioClient`] is the
//! production implementation. Inbound webhook payloads are decoded into
//! [`webhook::TwilioWebhook`].

pub mod sender;
pub mod twilio;
pub mod webhook;

pub use sender::{ProviderError, SendReceipt, WhatsappSender};
pub use twilio::{TwilioClient, TwilioConfig};
pub use webhook::TwilioWebhook;
