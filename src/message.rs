// src/message.rs
use serde::{Deserialize, Serialize};

#[derive(Debug)]
pub struct ChatRequest {
    pub message: String,
}

impl ChatRequest {
    /// Parse a raw request body. Anything that is not a JSON object with a
    /// string `message` yields `None`.
    pub fn parse(body: &[u8]) -> Option<Self> {
        let value: serde_json::Value = serde_json::from_slice(body).ok()?;
        let message = value.as_object()?.get("message")?.as_str()?;
        Some(Self {
            message: message.to_string(),
        })
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub reply: String,
    pub status: String,
}

impl ChatResponse {
    pub fn success(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            status: "success".to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Truncate a message for logging, keeping at most `max` characters.
pub fn log_preview(message: &str, max: usize) -> &str {
    match message.char_indices().nth(max) {
        Some((idx, _)) => &message[..idx],
        None => message,
    }
}
