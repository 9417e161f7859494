//! Typed inbound webhook payload.
//!
//! Twilio posts `application/x-www-form-urlencoded` bodies to a single
//! webhook URL for both inbound messages and status callbacks, so every
//! field is optional and the two kinds are told apart by which fields are
//! present.

use serde::{Deserialize, Serialize};

/// Subset of the Twilio webhook form fields the relay cares about.
///
/// Unknown fields are ignored on deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TwilioWebhook {
    #[serde(rename = "MessageSid", skip_serializing_if = "Option::is_none")]
    pub message_sid: Option<String>,
    #[serde(rename = "AccountSid", skip_serializing_if = "Option::is_none")]
    pub account_sid: Option<String>,
    #[serde(rename = "From", skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(rename = "To", skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    #[serde(rename = "Body", skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(rename = "MessageStatus", skip_serializing_if = "Option::is_none")]
    pub message_status: Option<String>,
    #[serde(rename = "ProfileName", skip_serializing_if = "Option::is_none")]
    pub profile_name: Option<String>,
    #[serde(rename = "WaId", skip_serializing_if = "Option::is_none")]
    pub wa_id: Option<String>,
    #[serde(rename = "NumMedia", skip_serializing_if = "Option::is_none")]
    pub num_media: Option<String>,
}

impl TwilioWebhook {
    /// `From` is only set on inbound message callbacks; status callbacks for
    /// our own sends carry `To` instead.
    pub fn is_inbound(&self) -> bool {
        self.from.is_some()
    }

    /// Counterparty address, whichever side the callback reports.
    pub fn counterparty(&self) -> Option<&str> {
        self.from.as_deref().or(self.to.as_deref())
    }
}
