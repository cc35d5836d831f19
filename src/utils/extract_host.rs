//! Public host and scheme extraction from HTTP requests.

use crate::AppError;
use axum::http::{HeaderMap, Uri, header};
use serde_json::json;

const X_FORWARDED_PROTO: &str = "x-forwarded-proto";

/// Extracts the `Host` header, port included, for building short URLs.
///
/// Unlike routing by domain, the port is kept: a service reached on
/// `localhost:5000` must hand out `http://localhost:5000/{code}`.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if:
/// - The `Host` header is missing or empty
/// - The header value contains invalid UTF-8
/// - The value contains characters that cannot appear in an authority
///
/// # Examples
///
/// ```ignore
/// let mut headers = HeaderMap::new();
/// headers.insert(header::HOST, "localhost:5000".parse().unwrap());
///
/// assert_eq!(extract_host_from_headers(&headers).unwrap(), "localhost:5000");
/// ```
pub fn extract_host_from_headers(headers: &HeaderMap) -> Result<String, AppError> {
    let host = headers
        .get(header::HOST)
        .ok_or_else(|| AppError::bad_request("Missing Host header", json!({})))?
        .to_str()
        .map_err(|_| AppError::bad_request("Invalid Host header", json!({})))?
        .trim();

    if host.is_empty() || host.contains(['/', '\\', '@', ' ', '?', '#']) {
        return Err(AppError::bad_request(
            "Invalid Host header",
            json!({ "host": host }),
        ));
    }

    Ok(host.to_string())
}

/// Scheme the client used to reach the service.
///
/// Priority:
/// 1. First value of `X-Forwarded-Proto`, when it is `http` or `https`
/// 2. The request URI scheme, when absolute
/// 3. `http`
pub fn request_scheme(headers: &HeaderMap, uri: &Uri) -> &'static str {
    let forwarded = headers
        .get(X_FORWARDED_PROTO)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim);

    match forwarded.or(uri.scheme_str()) {
        Some(s) if s.eq_ignore_ascii_case("https") => "https",
        _ => "http",
    }
}

/// Builds `{scheme}://{host}` for a request when no base URL is configured.
///
/// # Errors
///
/// Same as [`extract_host_from_headers`].
pub fn request_base_url(headers: &HeaderMap, uri: &Uri) -> Result<String, AppError> {
    let host = extract_host_from_headers(headers)?;
    Ok(format!("{}://{}", request_scheme(headers, uri), host))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderMap, HeaderValue, header};

    fn headers_with_host(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static(value));
        headers
    }

    #[test]
    fn test_extract_host_simple() {
        let result = extract_host_from_headers(&headers_with_host("example.com"));
        assert_eq!(result.unwrap(), "example.com");
    }

    #[test]
    fn test_extract_host_keeps_port() {
        let result = extract_host_from_headers(&headers_with_host("localhost:5000"));
        assert_eq!(result.unwrap(), "localhost:5000");
    }

    #[test]
    fn test_extract_host_ipv6_with_port() {
        let result = extract_host_from_headers(&headers_with_host("[::1]:8080"));
        assert_eq!(result.unwrap(), "[::1]:8080");
    }

    #[test]
    fn test_extract_host_missing_header() {
        let result = extract_host_from_headers(&HeaderMap::new());
        assert!(matches!(result, Err(AppError::Validation { .. })));
    }

    #[test]
    fn test_extract_host_rejects_path_injection() {
        let result = extract_host_from_headers(&headers_with_host("evil.com/phish"));
        assert!(result.is_err());

        let result = extract_host_from_headers(&headers_with_host("user@evil.com"));
        assert!(result.is_err());
    }

    #[test]
    fn test_request_scheme_defaults_to_http() {
        let uri: Uri = "/api/shorten".parse().unwrap();
        assert_eq!(request_scheme(&HeaderMap::new(), &uri), "http");
    }

    #[test]
    fn test_request_scheme_from_absolute_uri() {
        let uri: Uri = "https://s.example.com/api/shorten".parse().unwrap();
        assert_eq!(request_scheme(&HeaderMap::new(), &uri), "https");
    }

    #[test]
    fn test_request_scheme_from_forwarded_proto() {
        let uri: Uri = "/api/shorten".parse().unwrap();
        let mut headers = headers_with_host("s.example.com");
        headers.insert(X_FORWARDED_PROTO, HeaderValue::from_static("HTTPS, http"));

        assert_eq!(request_scheme(&headers, &uri), "https");
        assert_eq!(
            request_base_url(&headers, &uri).unwrap(),
            "https://s.example.com"
        );
    }

    #[test]
    fn test_request_scheme_ignores_unknown_forwarded_proto() {
        let uri: Uri = "/api/shorten".parse().unwrap();
        let mut headers = HeaderMap::new();
        headers.insert(X_FORWARDED_PROTO, HeaderValue::from_static("gopher"));

        assert_eq!(request_scheme(&headers, &uri), "http");
    }

    #[test]
    fn test_extract_host_invalid_utf8() {
        let mut headers = HeaderMap::new();
        if let Ok(value) = HeaderValue::from_bytes(&[0xFF, 0xFE, 0xFD]) {
            headers.insert(header::HOST, value);
            assert!(extract_host_from_headers(&headers).is_err());
        }
    }
}
