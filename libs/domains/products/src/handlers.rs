//! HTTP handlers for Products API

use axum::{extract::State, routing::get, Json, Router};
use axum_helpers::{
    errors::responses::{
        BadRequestBodyResponse, BadRequestObjectIdOrBodyResponse, BadRequestObjectIdResponse,
        InternalServerErrorResponse, NotFoundResponse,
    },
    ErrorResponse, JsonBody, MessageResponse, ObjectIdPath,
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::ProductResult;
use crate::models::{
    Product, ProductCreatedResponse, ProductInput, ProductListResponse, ProductResponse,
};
use crate::repository::ProductRepository;
use crate::service::ProductService;

pub const PRODUCT_INSERTED: &str = "Product inserted successfully";
pub const PRODUCT_UPDATED: &str = "Product updated successfully";
pub const PRODUCT_DELETED: &str = "Product deleted successfully";

/// OpenAPI documentation for Products API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_products,
        create_product,
        get_product,
        update_product,
        delete_product,
    ),
    components(
        schemas(
            Product, ProductInput, ProductListResponse, ProductResponse,
            ProductCreatedResponse, MessageResponse, ErrorResponse
        ),
        responses(
            NotFoundResponse,
            BadRequestBodyResponse,
            BadRequestObjectIdResponse,
            BadRequestObjectIdOrBodyResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Products", description = "Product management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the products router with all HTTP endpoints
pub fn router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_products).post(create_product))
        .route(
            "/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        .with_state(shared_service)
}

/// List all products
#[utoipa::path(
    get,
    path = "",
    tag = "Products",
    responses(
        (status = 200, description = "List of products", body = ProductListResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
) -> ProductResult<Json<ProductListResponse>> {
    let data = service.list_products().await?;
    Ok(Json(ProductListResponse { data }))
}

/// Create a new product
#[utoipa::path(
    post,
    path = "",
    tag = "Products",
    request_body = ProductInput,
    responses(
        (status = 200, description = "Product inserted successfully", body = ProductCreatedResponse),
        (status = 400, response = BadRequestBodyResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    JsonBody(input): JsonBody<ProductInput>,
) -> ProductResult<Json<ProductCreatedResponse>> {
    let data = service.create_product(input).await?;
    Ok(Json(ProductCreatedResponse {
        message: PRODUCT_INSERTED.to_string(),
        data,
    }))
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = String, Path, description = "Product ObjectId (24 hex characters)")
    ),
    responses(
        (status = 200, description = "Product found", body = ProductResponse),
        (status = 400, response = BadRequestObjectIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    ObjectIdPath(id): ObjectIdPath,
) -> ProductResult<Json<ProductResponse>> {
    let data = service.get_product(id).await?;
    Ok(Json(ProductResponse { data }))
}

/// Update a product's name and price
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = String, Path, description = "Product ObjectId (24 hex characters)")
    ),
    request_body = ProductInput,
    responses(
        (status = 200, description = "Product updated successfully", body = MessageResponse),
        (status = 400, response = BadRequestObjectIdOrBodyResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    ObjectIdPath(id): ObjectIdPath,
    JsonBody(input): JsonBody<ProductInput>,
) -> ProductResult<Json<MessageResponse>> {
    service.update_product(id, input).await?;
    Ok(Json(MessageResponse::new(PRODUCT_UPDATED)))
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = String, Path, description = "Product ObjectId (24 hex characters)")
    ),
    responses(
        (status = 200, description = "Product deleted successfully", body = MessageResponse),
        (status = 400, response = BadRequestObjectIdResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    ObjectIdPath(id): ObjectIdPath,
) -> ProductResult<Json<MessageResponse>> {
    service.delete_product(id).await?;
    Ok(Json(MessageResponse::new(PRODUCT_DELETED)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ProductError, StoreOperation};
    use crate::models::ProductDocument;
    use crate::repository::MockProductRepository;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use mongodb::bson::oid::ObjectId;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn app(mock: MockProductRepository) -> Router {
        router(ProductService::new(mock))
    }

    async fn send(app: Router, method: &str, uri: &str, body: Option<&str>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                builder = builder.header("content-type", "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        let response = app.oneshot(builder.body(body).unwrap()).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    fn widget() -> ProductDocument {
        ProductDocument::new(ProductInput {
            name: "Widget".to_string(),
            price: 9.99,
        })
    }

    #[tokio::test]
    async fn test_list_wraps_products_in_data() {
        let doc = widget();
        let id = doc.id.to_hex();
        let mut mock = MockProductRepository::new();
        mock.expect_list().returning(move || Ok(vec![doc.clone()]));

        let (status, body) = send(app(mock), "GET", "/", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({"data": [{"id": id, "name": "Widget", "price": 9.99}]})
        );
    }

    #[tokio::test]
    async fn test_list_empty_returns_empty_array() {
        let mut mock = MockProductRepository::new();
        mock.expect_list().returning(|| Ok(vec![]));

        let (status, body) = send(app(mock), "GET", "/", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"data": []}));
    }

    #[tokio::test]
    async fn test_list_decode_error() {
        let mut mock = MockProductRepository::new();
        mock.expect_list().returning(|| {
            Err(ProductError::Store {
                operation: StoreOperation::Decode,
                message: "invalid type".to_string(),
            })
        });

        let (status, body) = send(app(mock), "GET", "/", None).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], "Error decoding document");
        assert_eq!(body["error"], "invalid type");
    }

    #[tokio::test]
    async fn test_create_returns_inserted_message() {
        let mut mock = MockProductRepository::new();
        mock.expect_create()
            .times(1)
            .returning(|doc| Ok(doc));

        let (status, body) = send(
            app(mock),
            "POST",
            "/",
            Some(r#"{"name":"Widget","price":9.99}"#),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], PRODUCT_INSERTED);
        assert_eq!(body["data"]["name"], "Widget");
        assert_eq!(body["data"]["price"], 9.99);
        let id = body["data"]["id"].as_str().unwrap();
        assert!(ObjectId::parse_str(id).is_ok());
    }

    #[tokio::test]
    async fn test_create_ignores_client_supplied_id() {
        let client_id = "65a1b2c3d4e5f60718293a4b";
        let mut mock = MockProductRepository::new();
        mock.expect_create()
            .withf(move |doc| doc.id.to_hex() != client_id)
            .returning(|doc| Ok(doc));

        let body = format!(r#"{{"id":"{client_id}","name":"Widget","price":1}}"#);
        let (status, body) = send(app(mock), "POST", "/", Some(&body)).await;
        assert_eq!(status, StatusCode::OK);
        assert_ne!(body["data"]["id"], client_id);
    }

    #[tokio::test]
    async fn test_create_malformed_body_skips_store() {
        let mock = MockProductRepository::new();

        let (status, body) = send(app(mock), "POST", "/", Some(r#"{"name":"#)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Invalid request data");
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_create_store_error() {
        let mut mock = MockProductRepository::new();
        mock.expect_create().returning(|_| {
            Err(ProductError::Store {
                operation: StoreOperation::Insert,
                message: "duplicate key".to_string(),
            })
        });

        let (status, body) = send(
            app(mock),
            "POST",
            "/",
            Some(r#"{"name":"Widget","price":9.99}"#),
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], "Error inserting product into MongoDB");
        assert_eq!(body["error"], "duplicate key");
    }

    #[tokio::test]
    async fn test_get_found() {
        let doc = widget();
        let id = doc.id;
        let mut mock = MockProductRepository::new();
        mock.expect_get_by_id()
            .withf(move |candidate| *candidate == id)
            .returning(move |_| Ok(Some(doc.clone())));

        let (status, body) = send(app(mock), "GET", &format!("/{}", id.to_hex()), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["id"], id.to_hex());
        assert_eq!(body["data"]["name"], "Widget");
    }

    #[tokio::test]
    async fn test_get_missing_is_404() {
        let mut mock = MockProductRepository::new();
        mock.expect_get_by_id().returning(|_| Ok(None));

        let uri = format!("/{}", ObjectId::new().to_hex());
        let (status, body) = send(app(mock), "GET", &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"message": "Product not found"}));
    }

    #[tokio::test]
    async fn test_get_lookup_failure_is_500() {
        let mut mock = MockProductRepository::new();
        mock.expect_get_by_id().returning(|_| {
            Err(ProductError::Store {
                operation: StoreOperation::FindOne,
                message: "timeout".to_string(),
            })
        });

        let uri = format!("/{}", ObjectId::new().to_hex());
        let (status, body) = send(app(mock), "GET", &uri, None).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], "Error fetching product");
    }

    #[tokio::test]
    async fn test_invalid_ids_never_reach_store() {
        let cases = [
            ("GET", "/not-a-valid-id", None),
            ("PUT", "/not-a-valid-id", Some(r#"{"name":"x","price":1}"#)),
            ("DELETE", "/not-a-valid-id", None),
            ("GET", "/65a1b2c3d4e5f60718293a4", None),
            ("GET", "/zza1b2c3d4e5f60718293a4b", None),
        ];

        for (method, uri, body) in cases {
            // No expectations: any repository call panics.
            let mock = MockProductRepository::new();
            let (status, response) = send(app(mock), method, uri, body).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{method} {uri}");
            assert_eq!(response, json!({"message": "Invalid ID format"}));
        }
    }

    #[tokio::test]
    async fn test_update_checks_id_before_body() {
        let mock = MockProductRepository::new();
        let (status, body) = send(app(mock), "PUT", "/bad", Some("not json")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Invalid ID format");
    }

    #[tokio::test]
    async fn test_update_malformed_body() {
        let mock = MockProductRepository::new();
        let uri = format!("/{}", ObjectId::new().to_hex());
        let (status, body) = send(app(mock), "PUT", &uri, Some("not json")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Invalid request data");
    }

    #[tokio::test]
    async fn test_update_without_match_reports_success() {
        let mut mock = MockProductRepository::new();
        mock.expect_update()
            .withf(|_, input| input.name == "Renamed" && input.price == 5.0)
            .times(1)
            .returning(|_, _| Ok(0));

        let uri = format!("/{}", ObjectId::new().to_hex());
        let (status, body) = send(
            app(mock),
            "PUT",
            &uri,
            Some(r#"{"name":"Renamed","price":5}"#),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"message": PRODUCT_UPDATED}));
    }

    #[tokio::test]
    async fn test_update_store_error() {
        let mut mock = MockProductRepository::new();
        mock.expect_update().returning(|_, _| {
            Err(ProductError::Store {
                operation: StoreOperation::Update,
                message: "write conflict".to_string(),
            })
        });

        let uri = format!("/{}", ObjectId::new().to_hex());
        let (status, body) = send(app(mock), "PUT", &uri, Some(r#"{"name":"x"}"#)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], "Error updating product");
        assert_eq!(body["error"], "write conflict");
    }

    #[tokio::test]
    async fn test_delete_same_response_with_or_without_match() {
        for deleted in [0_u64, 1] {
            let mut mock = MockProductRepository::new();
            mock.expect_delete()
                .times(1)
                .returning(move |_| Ok(deleted));

            let uri = format!("/{}", ObjectId::new().to_hex());
            let (status, body) = send(app(mock), "DELETE", &uri, None).await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body, json!({"message": PRODUCT_DELETED}));
        }
    }

    #[test]
    fn test_openapi_lists_product_paths() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/{id}"));
        assert!(doc.components.is_some());
    }

    #[test]
    fn test_openapi_update_documents_both_bad_request_causes() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();
        let bad_request = &doc["paths"]["/{id}"]["put"]["responses"]["400"];
        assert_eq!(
            bad_request["$ref"],
            "#/components/responses/BadRequestObjectIdOrBodyResponse"
        );

        let description = doc["components"]["responses"]["BadRequestObjectIdOrBodyResponse"]
            ["description"]
            .as_str()
            .unwrap();
        assert!(description.contains("ObjectId"));
        assert!(description.contains("body"));
    }

    #[tokio::test]
    async fn test_create_accepts_json_without_json_content_type() {
        let mut mock = MockProductRepository::new();
        mock.expect_create().times(1).returning(|doc| Ok(doc));

        let request = Request::builder()
            .method("POST")
            .uri("/")
            .header("content-type", "application/x-www-form-urlencoded")
            .body(Body::from(r#"{"name":"Widget","price":9.99}"#))
            .unwrap();
        let response = app(mock).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["message"], PRODUCT_INSERTED);
        assert_eq!(body["data"]["name"], "Widget");
    }

    #[tokio::test]
    async fn test_update_accepts_json_without_content_type() {
        let mut mock = MockProductRepository::new();
        mock.expect_update()
            .withf(|_, input| input.name == "Gadget" && input.price == 2.0)
            .times(1)
            .returning(|_, _| Ok(1));

        let request = Request::builder()
            .method("PUT")
            .uri(format!("/{}", ObjectId::new().to_hex()))
            .body(Body::from(r#"{"name":"Gadget","price":2}"#))
            .unwrap();
        let response = app(mock).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
