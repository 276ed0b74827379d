//! Reusable OpenAPI response types for consistent API documentation.

use super::ErrorResponse;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error",
    content_type = "application/json",
    example = json!({
        "message": "Error fetching data from MongoDB",
        "error": "server selection timeout"
    })
)]
pub struct InternalServerErrorResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - malformed JSON body",
    content_type = "application/json",
    example = json!({
        "message": "Invalid request data",
        "error": "Failed to parse the request body as JSON: EOF while parsing an object at line 1 column 1"
    })
)]
pub struct BadRequestBodyResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - malformed ObjectId",
    content_type = "application/json",
    example = json!({
        "message": "Invalid ID format"
    })
)]
pub struct BadRequestObjectIdResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Not Found",
    content_type = "application/json",
    example = json!({
        "message": "Product not found"
    })
)]
pub struct NotFoundResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - malformed ObjectId or request body",
    content_type = "application/json",
    example = json!({
        "message": "Invalid request data",
        "error": "Failed to parse the request body as JSON: EOF while parsing an object at line 1 column 1"
    })
)]
pub struct BadRequestObjectIdOrBodyResponse(pub ErrorResponse);
