use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::{error_response, messages};

/// Fallback handler for unmatched routes.
pub async fn not_found() -> Response {
    error_response(StatusCode::NOT_FOUND, messages::NOT_FOUND_RESOURCE, None).into_response()
}
