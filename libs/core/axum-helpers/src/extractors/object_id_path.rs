//! ObjectId path parameter extractor.

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
    response::{IntoResponse, Response},
};
use mongodb::bson::oid::ObjectId;

/// Extractor for a single ObjectId path parameter.
///
/// Accepts exactly 24 hex characters. Anything else is rejected with
/// 400 `{"message": "Invalid ID format"}` and the handler never runs.
///
/// # Example
/// ```ignore
/// use axum::{Router, routing::get};
/// use axum_helpers::ObjectIdPath;
///
/// async fn get_product(ObjectIdPath(id): ObjectIdPath) -> String {
///     id.to_hex()
/// }
///
/// let app = Router::new().route("/products/{id}", get(get_product));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ObjectIdPath(pub ObjectId);

impl<S> FromRequestParts<S> for ObjectIdPath
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| e.into_response())?;

        ObjectId::parse_str(&id)
            .map(ObjectIdPath)
            .map_err(|e| AppError::from(e).into_response())
    }
}
