//! Handler for link shortening endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode, Uri},
};
use std::borrow::Cow;
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::domain::StoreError;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::extract_host::request_base_url;
use crate::utils::url_normalizer::{validate_target_url, with_default_scheme};

/// Creates a short link for a long URL.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/a/b" }
/// ```
///
/// Surrounding whitespace is trimmed. When the service runs with
/// `ASSUME_HTTPS=true`, scheme-less input gets an `https://` prefix.
///
/// Without `BASE_URL`, `short_url` uses the request `Host` and the scheme
/// from `X-Forwarded-Proto` (or the request URI), defaulting to `http`.
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// {
///   "short_code": "aZ3k9Q",
///   "short_url": "http://localhost:5000/aZ3k9Q",
///   "original_url": "https://example.com/a/b"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the body is not valid JSON, lacks `url`,
/// or the URL is empty or not an absolute HTTP/HTTPS URL. The URL is checked
/// before the `Host` header, so a bad URL is always reported as such.
pub async fn shorten_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    uri: Uri,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    let Json(mut payload) = payload?;
    payload.url = payload.url.trim().to_string();
    payload.validate()?;

    let target_url = if state.assume_https {
        with_default_scheme(&payload.url)
    } else {
        Cow::Borrowed(payload.url.as_str())
    };

    validate_target_url(&target_url).map_err(|e| StoreError::invalid_url(e.to_string()))?;

    let base_url = match &state.base_url {
        Some(base_url) => base_url.clone(),
        None => request_base_url(&headers, &uri)?,
    };

    let link = state.link_service.shorten(&target_url).await?;
    let short_url = state.link_service.short_url(&base_url, &link.code);

    Ok((
        StatusCode::CREATED,
        Json(ShortenResponse {
            short_code: link.code,
            short_url,
            original_url: link.target_url,
        }),
    ))
}
