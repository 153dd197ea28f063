//! API response envelope
//!
//! Every Atrium API responds with the same envelope: `{ success, data }` on
//! success, `{ success: false, error }` on failure, and a pagination block
//! for list endpoints. Keeping this in one place keeps the product apps'
//! client code generic.

use serde::Serialize;
use serde_json::{json, Value};

use crate::error::Error;

/// Pagination inputs supplied by the handler
#[derive(Debug, Clone, Copy)]
pub struct PaginationParams {
    pub page: u64,
    pub page_size: u64,
    pub total_items: u64,
}

/// Pagination block included in paginated responses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    pub page: u64,
    pub page_size: u64,
    pub total_items: u64,
    pub total_pages: u64,
    pub has_next: bool,
    pub has_previous: bool,
}

impl From<PaginationParams> for PaginationMeta {
    fn from(params: PaginationParams) -> Self {
        let total_pages = if params.page_size > 0 {
            params.total_items.div_ceil(params.page_size)
        } else {
            0
        };

        Self {
            page: params.page,
            page_size: params.page_size,
            total_items: params.total_items,
            total_pages,
            has_next: params.page < total_pages,
            has_previous: params.page > 1,
        }
    }
}

/// Wrap a payload in the success envelope
pub fn success_response<T: Serialize>(data: T) -> Value {
    json!({
        "success": true,
        "data": data,
    })
}

/// Wrap a platform error in the error envelope
pub fn error_response(error: &Error) -> Value {
    json!({
        "success": false,
        "error": {
            "code": error.error_code(),
            "message": error.to_string(),
            "userMessage": error.user_message(),
        },
    })
}

/// Wrap a list payload with its pagination block
pub fn paginated_response<T: Serialize>(data: &[T], pagination: PaginationParams) -> Value {
    json!({
        "success": true,
        "data": data,
        "pagination": PaginationMeta::from(pagination),
    })
}
