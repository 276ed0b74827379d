//! # Axum Helpers
//!
//! Utilities and middleware shared by the HTTP services in this workspace.
//!
//! ## Modules
//!
//! - **[`server`]**: Router assembly, listener startup, liveness route
//! - **[`http`]**: HTTP middleware (CORS) and shared response bodies
//! - **[`errors`]**: Error type and the JSON error body it renders
//! - **[`extractors`]**: ObjectId path and JSON body extractors
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum::Router;
//! use axum_helpers::server::{create_app, create_router};
//! use core_config::server::ServerConfig;
//! use utoipa::OpenApi;
//!
//! #[derive(OpenApi)]
//! #[openapi(paths())]
//! struct ApiDoc;
//!
//! #[tokio::main]
//! async fn main() -> std::io::Result<()> {
//!     let router = create_router::<ApiDoc>(Router::new());
//!     create_app(router, &ServerConfig::default()).await
//! }
//! ```

pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

// Re-export server types
pub use server::{create_app, create_router, ping_router};

// Re-export HTTP middleware and bodies
pub use http::{MessageResponse, cors};

// Re-export error types
pub use errors::{AppError, ErrorResponse};

// Re-export extractors
pub use extractors::{JsonBody, ObjectIdPath};
