//! API request and response types

use serde::{Deserialize, Serialize};

/// Call id used when the provider omits `CallSid`
pub const UNKNOWN_CALL_SID: &str = "unknown";

/// Form fields posted by the telephony provider on every webhook
#[derive(Debug, Default, Deserialize)]
pub struct WebhookForm {
    #[serde(rename = "CallSid")]
    pub call_sid: Option<String>,
    /// Caller's phone number
    #[serde(rename = "From")]
    pub from: Option<String>,
    /// Keys pressed; absent or empty when the gather timed out
    #[serde(rename = "Digits")]
    pub digits: Option<String>,
}

impl WebhookForm {
    pub fn call_sid(&self) -> &str {
        self.call_sid
            .as_deref()
            .map(str::trim)
            .filter(|sid| !sid.is_empty())
            .unwrap_or(UNKNOWN_CALL_SID)
    }
}

/// Response for the health check
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    pub active_sessions: usize,
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}
