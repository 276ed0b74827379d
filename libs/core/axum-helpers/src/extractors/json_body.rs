//! JSON body extractor with the service's error shape.

use crate::errors::AppError;
use axum::{
    body::Bytes,
    extract::{FromRequest, Json, Request},
};
use serde::de::DeserializeOwned;

/// JSON extractor that rejects with [`AppError`].
///
/// The body is decoded as JSON whatever its `Content-Type`. Malformed JSON,
/// a body of the wrong shape, or a body that cannot be read all become
/// 400 `{"message": "Invalid request data", "error": "<parser text>"}`.
///
/// # Example
/// ```ignore
/// use axum::{Router, routing::post};
/// use axum_helpers::JsonBody;
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct Rename {
///     name: String,
/// }
///
/// async fn rename(JsonBody(payload): JsonBody<Rename>) -> String {
///     payload.name
/// }
///
/// let app = Router::new().route("/rename", post(rename));
/// ```
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await?;
        let Json(data) = Json::<T>::from_bytes(&bytes)?;
        Ok(JsonBody(data))
    }
}
