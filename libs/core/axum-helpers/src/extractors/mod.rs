//! Custom extractors for Axum handlers.
//!
//! Both extractors reject with [`AppError`](crate::AppError), so a malformed
//! path or body renders the standard error body before the handler runs.

pub mod json_body;
pub mod object_id_path;

pub use json_body::JsonBody;
pub use object_id_path::ObjectIdPath;
