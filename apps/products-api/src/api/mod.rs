//! API routes module

pub mod products;

use axum::Router;
use axum_helpers::ping_router;

use crate::state::AppState;

/// Create all API routes
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .nest("/api/v1/products", products::router(state))
        .merge(ping_router())
}
