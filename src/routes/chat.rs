use axum::{
    Json,
    body::Bytes,
    extract::{State, rejection::BytesRejection},
};
use tracing::{error, info, warn};

use crate::{
    error::AppError,
    message::{ChatRequest, ChatResponse, log_preview},
    services::retry::with_retry,
    state::SharedState,
};

const LOG_PREVIEW_CHARS: usize = 50;

pub async fn chat_handler(
    State(state): State<SharedState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let body = body.map_err(|rejection| {
        warn!(error = %rejection, "Could not read request body");
        invalid_request()
    })?;
    let Some(payload) = ChatRequest::parse(&body) else {
        return Err(invalid_request());
    };

    let message = payload.message.trim();
    if message.is_empty() {
        return Err(AppError::BadRequest("Message cannot be empty.".to_string()));
    }

    info!(
        "Received message request: {}...",
        log_preview(message, LOG_PREVIEW_CHARS)
    );

    let client = state.model.as_ref();
    let model = state.config.model.as_str();
    let completion = with_retry(&state.config.retry, || client.chat(model, message))
        .await
        .map_err(|e| {
            error!(error = %e, "Unexpected error");
            AppError::Unexpected(e.to_string())
        })?;

    let Some(reply) = completion.content() else {
        error!(?completion, "Chat error: Failed to get valid response from model");
        return Err(AppError::InvalidModelResponse);
    };

    Ok(Json(ChatResponse::success(reply)))
}

fn invalid_request() -> AppError {
    AppError::BadRequest("Invalid request. Message is required.".to_string())
}
