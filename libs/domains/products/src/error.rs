use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use mongodb::bson::oid::ObjectId;
use strum::Display;
use thiserror::Error;

/// Store operation that failed, rendered as the public error message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum StoreOperation {
    #[strum(to_string = "Error fetching data from MongoDB")]
    Fetch,
    #[strum(to_string = "Error decoding document")]
    Decode,
    #[strum(to_string = "Cursor iteration error")]
    Cursor,
    #[strum(to_string = "Error fetching product")]
    FindOne,
    #[strum(to_string = "Error inserting product into MongoDB")]
    Insert,
    #[strum(to_string = "Error updating product")]
    Update,
    #[strum(to_string = "Error deleting product")]
    Delete,
}

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("Product not found: {0}")]
    NotFound(ObjectId),

    #[error("{operation}: {message}")]
    Store {
        operation: StoreOperation,
        message: String,
    },
}

pub type ProductResult<T> = Result<T, ProductError>;

impl ProductError {
    /// Wrap a driver error for the given operation, for use with `map_err`
    pub fn store(
        operation: StoreOperation,
    ) -> impl FnOnce(mongodb::error::Error) -> ProductError {
        move |err| ProductError::Store {
            operation,
            message: err.to_string(),
        }
    }
}

/// Convert ProductError to AppError for standardized error responses
impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::NotFound(_) => AppError::NotFound("Product not found".to_string()),
            ProductError::Store { operation, message } => {
                AppError::internal(operation.to_string(), message)
            }
        }
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
