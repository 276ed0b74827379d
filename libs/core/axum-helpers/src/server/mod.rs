//! Server infrastructure module.
//!
//! This module provides:
//! - Router assembly with OpenAPI document, fallback, tracing and CORS
//! - Listener startup
//! - The database-independent `/ping` liveness route
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::server::{create_app, create_router, ping_router};
//!
//! let router = create_router::<ApiDoc>(api_routes.merge(ping_router()));
//! create_app(router, &ServerConfig::default()).await?;
//! ```

pub mod app;
pub mod health;

pub use app::{create_app, create_router};
pub use health::ping_router;
