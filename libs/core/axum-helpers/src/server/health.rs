use axum::{Json, Router, routing::get};

use crate::http::MessageResponse;

/// Liveness handler. Always `{"message": "pong"}`; touches no dependencies.
pub async fn ping() -> Json<MessageResponse> {
    Json(MessageResponse::new("pong"))
}

/// Router with `GET /ping`, for infrastructure health checks.
pub fn ping_router() -> Router {
    Router::new().route("/ping", get(ping))
}
