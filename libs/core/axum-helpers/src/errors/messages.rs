//! Standard error messages for consistent error responses.

pub const INVALID_ID: &str = "Invalid ID format";
pub const INVALID_REQUEST_DATA: &str = "Invalid request data";
pub const NOT_FOUND_RESOURCE: &str = "The requested resource was not found";
