pub mod handlers;
pub mod messages;
pub mod responses;

use axum::{
    Json,
    extract::rejection::{BytesRejection, JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use mongodb::bson::oid;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Error body returned by every failing endpoint.
///
/// `message` is a stable, human-readable summary. `error` carries the
/// underlying parser or driver text when there is one and is omitted
/// otherwise.
///
/// ```json
/// { "message": "Invalid request data", "error": "EOF while parsing an object" }
/// ```
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub message: String,
    /// Underlying error text, when available
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Application error type that can be converted to HTTP responses.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("JSON extraction error: {0}")]
    JsonExtractorRejection(#[from] JsonRejection),

    #[error("Invalid ObjectId: {0}")]
    InvalidObjectId(#[from] oid::Error),

    #[error("Body extraction error: {0}")]
    BodyExtractorRejection(#[from] BytesRejection),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Internal Server Error: {message}: {error}")]
    InternalServerError { message: String, error: String },
}

impl AppError {
    pub fn internal(message: impl Into<String>, error: impl Into<String>) -> Self {
        AppError::InternalServerError {
            message: message.into(),
            error: error.into(),
        }
    }

    /// HTTP status this error renders with
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::JsonExtractorRejection(_)
            | AppError::InvalidObjectId(_)
            | AppError::BodyExtractorRejection(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InternalServerError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let (message, error) = match self {
            AppError::JsonExtractorRejection(e) => {
                tracing::info!("Invalid request body: {}", e.body_text());
                (
                    messages::INVALID_REQUEST_DATA.to_string(),
                    Some(e.body_text()),
                )
            }
            AppError::InvalidObjectId(e) => {
                tracing::info!("Invalid ObjectId: {}", e);
                (messages::INVALID_ID.to_string(), None)
            }
            AppError::BodyExtractorRejection(e) => {
                tracing::info!("Unreadable request body: {}", e.body_text());
                (
                    messages::INVALID_REQUEST_DATA.to_string(),
                    Some(e.body_text()),
                )
            }
            AppError::NotFound(message) => {
                tracing::info!("Not found: {}", message);
                (message, None)
            }
            AppError::InternalServerError { message, error } => {
                tracing::error!(error = %error, "{}", message);
                (message, Some(error))
            }
        };

        error_response(status, message, error).into_response()
    }
}

/// Build an error response from its parts.
///
/// # Example
///
/// ```rust,ignore
/// use axum::http::StatusCode;
/// use axum_helpers::errors::error_response;
///
/// let response = error_response(StatusCode::BAD_REQUEST, "Invalid ID format", None);
/// ```
pub fn error_response(
    status: StatusCode,
    message: impl Into<String>,
    error: Option<String>,
) -> (StatusCode, Json<ErrorResponse>) {
    let body = Json(ErrorResponse {
        message: message.into(),
        error,
    });

    (status, body)
}
