use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::error::ProductResult;
use crate::models::{ProductDocument, ProductInput};

/// Repository trait for Product persistence
///
/// Each method performs exactly one operation against the store.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Every product, in store order
    async fn list(&self) -> ProductResult<Vec<ProductDocument>>;

    /// Insert a product and return what was stored
    async fn create(&self, document: ProductDocument) -> ProductResult<ProductDocument>;

    /// Get a product by ID
    async fn get_by_id(&self, id: ObjectId) -> ProductResult<Option<ProductDocument>>;

    /// Overwrite name and price. Returns the number of matched documents.
    async fn update(&self, id: ObjectId, input: ProductInput) -> ProductResult<u64>;

    /// Delete a product by ID. Returns the number of deleted documents.
    async fn delete(&self, id: ObjectId) -> ProductResult<u64>;
}
