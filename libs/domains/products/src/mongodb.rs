//! MongoDB implementation of ProductRepository

use async_trait::async_trait;
use mongodb::{
    bson::{doc, oid::ObjectId},
    Collection, Database,
};
use tracing::instrument;

use crate::error::{ProductError, ProductResult, StoreOperation};
use crate::models::{ProductDocument, ProductInput};
use crate::repository::ProductRepository;

const DEFAULT_COLLECTION: &str = "products";

/// MongoDB implementation of the ProductRepository
#[derive(Clone)]
pub struct MongoProductRepository {
    collection: Collection<ProductDocument>,
}

impl MongoProductRepository {
    /// Create a new MongoProductRepository over the `products` collection
    pub fn new(db: &Database) -> Self {
        Self::from_collection(db.collection::<ProductDocument>(DEFAULT_COLLECTION))
    }

    /// Wrap an existing collection handle
    pub fn from_collection(collection: Collection<ProductDocument>) -> Self {
        Self { collection }
    }
}

#[async_trait]
impl ProductRepository for MongoProductRepository {
    #[instrument(skip(self))]
    async fn list(&self) -> ProductResult<Vec<ProductDocument>> {
        let mut cursor = self
            .collection
            .find(doc! {})
            .await
            .map_err(ProductError::store(StoreOperation::Fetch))?;

        let mut products = Vec::new();
        while cursor
            .advance()
            .await
            .map_err(ProductError::store(StoreOperation::Cursor))?
        {
            let product = cursor
                .deserialize_current()
                .map_err(ProductError::store(StoreOperation::Decode))?;
            products.push(product);
        }

        tracing::debug!(count = products.len(), "Listed products");
        Ok(products)
    }

    #[instrument(skip(self, document), fields(product_id = %document.id))]
    async fn create(&self, document: ProductDocument) -> ProductResult<ProductDocument> {
        self.collection
            .insert_one(&document)
            .await
            .map_err(ProductError::store(StoreOperation::Insert))?;
        Ok(document)
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: ObjectId) -> ProductResult<Option<ProductDocument>> {
        self.collection
            .find_one(doc! { "_id": id })
            .await
            .map_err(ProductError::store(StoreOperation::FindOne))
    }

    #[instrument(skip(self, input))]
    async fn update(&self, id: ObjectId, input: ProductInput) -> ProductResult<u64> {
        let update = doc! {
            "$set": {
                "name": input.name,
                "price": input.price,
            }
        };

        let result = self
            .collection
            .update_one(doc! { "_id": id }, update)
            .await
            .map_err(ProductError::store(StoreOperation::Update))?;
        Ok(result.matched_count)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: ObjectId) -> ProductResult<u64> {
        let result = self
            .collection
            .delete_one(doc! { "_id": id })
            .await
            .map_err(ProductError::store(StoreOperation::Delete))?;
        Ok(result.deleted_count)
    }
}
