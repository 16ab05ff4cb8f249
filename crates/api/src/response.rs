//! Shared response envelope types for API handlers.
//!
//! Successful responses use a `{ "success": true, "data": ... }` envelope;
//! errors use `{ "success": false, "error": ..., "code": ... }` (see
//! [`crate::error::AppError`]). Use [`DataResponse`] instead of ad-hoc
//! `serde_json::json!` so handlers stay type-checked.

use serde::Serialize;

/// Standard `{ "success": true, "data": T }` response envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Json(DataResponse::new(items)))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
}

impl<T: Serialize> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}
