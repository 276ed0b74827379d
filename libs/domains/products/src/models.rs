use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Product as stored in MongoDB
///
/// Stored documents missing `name` or `price` decode with zero values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: f64,
}

impl ProductDocument {
    /// Build a new document with a freshly generated ObjectId
    pub fn new(input: ProductInput) -> Self {
        Self {
            id: ObjectId::new(),
            name: input.name,
            price: input.price,
        }
    }
}

/// Product as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// 24-character hex ObjectId
    #[serde(default, skip_serializing_if = "String::is_empty")]
    #[schema(example = "65a1b2c3d4e5f60718293a4b")]
    pub id: String,
    #[schema(example = "Widget")]
    pub name: String,
    #[schema(example = 9.99)]
    pub price: f64,
}

impl From<ProductDocument> for Product {
    fn from(doc: ProductDocument) -> Self {
        Self {
            id: doc.id.to_hex(),
            name: doc.name,
            price: doc.price,
        }
    }
}

/// Request body for create and update
///
/// Missing fields take their zero value. Unknown fields, `id` included,
/// are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, ToSchema)]
pub struct ProductInput {
    #[serde(default)]
    #[schema(example = "Widget")]
    pub name: String,
    #[serde(default)]
    #[schema(example = 9.99)]
    pub price: f64,
}

/// `{"data": [...]}`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProductListResponse {
    pub data: Vec<Product>,
}

/// `{"data": {...}}`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProductResponse {
    pub data: Product,
}

/// `{"message": "...", "data": {...}}`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProductCreatedResponse {
    pub message: String,
    pub data: Product,
}
