//! Product Service - Business logic layer

use mongodb::bson::oid::ObjectId;
use std::sync::Arc;
use tracing::instrument;

use crate::error::{ProductError, ProductResult};
use crate::models::{Product, ProductDocument, ProductInput};
use crate::repository::ProductRepository;

/// Product service sitting between the HTTP handlers and the repository
///
/// Converts stored documents into their API shape and turns a missing
/// document on lookup into [`ProductError::NotFound`].
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    /// Create a new ProductService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// List every product
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> ProductResult<Vec<Product>> {
        let documents = self.repository.list().await?;
        Ok(documents.into_iter().map(Product::from).collect())
    }

    /// Create a new product with a server-generated ID
    #[instrument(skip(self, input), fields(product_name = %input.name))]
    pub async fn create_product(&self, input: ProductInput) -> ProductResult<Product> {
        let document = self.repository.create(ProductDocument::new(input)).await?;
        tracing::info!(product_id = %document.id, "Product created");
        Ok(document.into())
    }

    /// Get a product by ID
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: ObjectId) -> ProductResult<Product> {
        self.repository
            .get_by_id(id)
            .await?
            .map(Product::from)
            .ok_or(ProductError::NotFound(id))
    }

    /// Overwrite name and price of a product
    ///
    /// An ID that matches nothing is not an error.
    #[instrument(skip(self, input))]
    pub async fn update_product(&self, id: ObjectId, input: ProductInput) -> ProductResult<()> {
        let matched = self.repository.update(id, input).await?;
        if matched == 0 {
            tracing::debug!(product_id = %id, "Update matched no product");
        }
        Ok(())
    }

    /// Delete a product
    ///
    /// Deleting an ID that matches nothing is not an error.
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: ObjectId) -> ProductResult<()> {
        let deleted = self.repository.delete(id).await?;
        if deleted == 0 {
            tracing::debug!(product_id = %id, "Delete matched no product");
        }
        Ok(())
    }
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
