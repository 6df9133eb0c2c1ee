// src/error.rs
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::message::ErrorResponse;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error("Failed to get valid response from model")]
    InvalidModelResponse,

    /// Carries the internal detail for logs; the client only sees a generic message.
    #[error("unexpected error: {0}")]
    Unexpected(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidModelResponse | AppError::Unexpected(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn body(&self) -> ErrorResponse {
        match self {
            AppError::BadRequest(msg) => ErrorResponse {
                error: msg.clone(),
                status: None,
            },
            AppError::InvalidModelResponse => ErrorResponse {
                error: self.to_string(),
                status: Some("error".to_string()),
            },
            AppError::Unexpected(_) => ErrorResponse {
                error: "An unexpected error occurred".to_string(),
                status: Some("error".to_string()),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self.body())).into_response()
    }
}
