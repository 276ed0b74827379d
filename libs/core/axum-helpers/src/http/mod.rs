//! HTTP middleware and shared response bodies.
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::http::cors;
//!
//! let app = Router::new().layer(axum::middleware::from_fn(cors));
//! ```

pub mod cors;
pub mod response;

pub use cors::cors;
pub use response::MessageResponse;
