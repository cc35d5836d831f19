//! Handler for unmatched routes.

use axum::http::Uri;
use serde_json::json;

use crate::error::AppError;

/// Answers unknown paths with the standard JSON error body.
pub async fn not_found_handler(uri: Uri) -> AppError {
    AppError::not_found(
        "The requested resource was not found",
        json!({ "path": uri.path() }),
    )
}
