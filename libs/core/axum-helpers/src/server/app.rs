use crate::errors::handlers::not_found;
use crate::http::cors;
use axum::{Json, Router, middleware, routing::get};
use core_config::server::ServerConfig;
use std::io;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info};
use utoipa::OpenApi;

/// Binds the configured address and serves `router` until the process exits.
///
/// # Errors
/// Returns an error if the listener cannot bind or the server fails.
pub async fn create_app(router: Router, server_config: &ServerConfig) -> io::Result<()> {
    let listener = tokio::net::TcpListener::bind(server_config.address()).await?;

    info!("Server starting on {}", listener.local_addr()?);
    axum::serve(listener, router)
        .await
        .inspect_err(|e| {
            tracing::error!("Server encountered an error: {:?}", e);
        })?;

    Ok(())
}

/// Wraps application routes with the cross-cutting pieces every service gets:
///
/// - `GET /api-docs/openapi.json` serving `T`'s OpenAPI document
/// - JSON 404 fallback for unmatched paths
/// - Permissive CORS, answering every `OPTIONS` with 204
/// - Request tracing spans
///
/// `routes` should already have its state applied.
pub fn create_router<T>(routes: Router) -> Router
where
    T: OpenApi + 'static,
{
    let openapi = T::openapi();

    Router::new()
        .route(
            "/api-docs/openapi.json",
            get(move || {
                let openapi = openapi.clone();
                async move { Json(openapi) }
            }),
        )
        .merge(routes)
        .fallback(not_found)
        .layer(middleware::from_fn(cors))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}
