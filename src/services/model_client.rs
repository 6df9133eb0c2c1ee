// src/services/model_client.rs
use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("request to model service failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("model service returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("could not decode model response: {0}")]
    Decode(String),
}

/// Reply of a chat-completion call. Both layers are optional: a response
/// that decodes but lacks either is a domain failure, not a transport one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatCompletion {
    #[serde(default)]
    pub message: Option<CompletionMessage>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompletionMessage {
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

impl ChatCompletion {
    pub fn with_content(content: impl Into<String>) -> Self {
        Self {
            message: Some(CompletionMessage {
                role: Some("assistant".to_string()),
                content: Some(content.into()),
            }),
        }
    }

    pub fn content(&self) -> Option<&str> {
        self.message.as_ref()?.content.as_deref()
    }
}

/// A single request/response chat call against a language model.
#[async_trait]
pub trait ModelClient: Send + Sync {
    async fn chat(&self, model: &str, message: &str) -> Result<ChatCompletion, UpstreamError>;
}

#[derive(Serialize)]
struct ChatReq<'a> {
    model: &'a str,
    messages: [Msg<'a>; 1],
    stream: bool,
}

#[derive(Serialize)]
struct Msg<'a> {
    role: &'static str,
    content: &'a str,
}

/// Client for Ollama's `/api/chat` endpoint.
#[derive(Clone, Debug)]
pub struct OllamaClient {
    http: reqwest::Client,
    base_url: String,
    timeout: Option<Duration>,
}

impl OllamaClient {
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout,
        }
    }
}

#[async_trait]
impl ModelClient for OllamaClient {
    async fn chat(&self, model: &str, message: &str) -> Result<ChatCompletion, UpstreamError> {
        let mut req = self
            .http
            .post(format!("{}/api/chat", self.base_url))
            .json(&ChatReq {
                model,
                messages: [Msg {
                    role: "user",
                    content: message,
                }],
                stream: false,
            });
        // No deadline unless one was configured.
        if let Some(timeout) = self.timeout {
            req = req.timeout(timeout);
        }

        let resp = req.send().await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(UpstreamError::Status { status, body });
        }

        let bytes = resp.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| UpstreamError::Decode(e.to_string()))
    }
}
