//! Target URL validation and optional scheme defaulting.

use std::borrow::Cow;
use url::{Host, Url};

/// Longest target URL accepted.
pub const MAX_URL_LENGTH: usize = 2048;

/// Reasons a target URL is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UrlValidationError {
    #[error("URL cannot be empty")]
    Empty,

    #[error("URL is longer than {MAX_URL_LENGTH} characters")]
    TooLong,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL must contain a host")]
    MissingHost,

    #[error("Host '{0}' is not a valid domain name")]
    InvalidHost(String),
}

/// Checks that `input` is an absolute `http`/`https` URL with a usable host.
///
/// # Rules
///
/// 1. Non-empty, at most [`MAX_URL_LENGTH`] characters, no whitespace or control characters
/// 2. Parses as an absolute URL (relative input such as `example.com` is rejected)
/// 3. Scheme is `http` or `https`
/// 4. Host is an IP address, `localhost`, or a dotted domain name
///
/// # Examples
///
/// ```ignore
/// assert!(validate_target_url("https://example.com/a/b").is_ok());
/// assert!(validate_target_url("example.com").is_err());
/// assert!(validate_target_url("ftp://example.com").is_err());
/// ```
pub fn validate_target_url(input: &str) -> Result<Url, UrlValidationError> {
    if input.is_empty() {
        return Err(UrlValidationError::Empty);
    }
    if input.len() > MAX_URL_LENGTH {
        return Err(UrlValidationError::TooLong);
    }
    // The raw input is stored and later sent back in a Location header.
    if input.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(UrlValidationError::InvalidFormat(
            "URL contains whitespace or control characters".to_string(),
        ));
    }

    let url = Url::parse(input).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlValidationError::UnsupportedProtocol),
    }

    match url.host() {
        None => return Err(UrlValidationError::MissingHost),
        Some(Host::Ipv4(_)) | Some(Host::Ipv6(_)) => {}
        Some(Host::Domain(domain)) => {
            let domain = domain.trim_end_matches('.');
            let dotted = domain.contains('.') && !domain.starts_with('.');
            if !(dotted || domain.eq_ignore_ascii_case("localhost")) {
                return Err(UrlValidationError::InvalidHost(domain.to_string()));
            }
        }
    }

    Ok(url)
}

/// Prefixes `https://` onto input that carries no scheme at all.
///
/// Input that already starts with any scheme is returned unchanged, so
/// `ftp://host` is still rejected by [`validate_target_url`]. A `://` later
/// in the input, such as inside a query parameter, does not count.
pub fn with_default_scheme(input: &str) -> Cow<'_, str> {
    if input.is_empty() || has_leading_scheme(input) {
        Cow::Borrowed(input)
    } else {
        Cow::Owned(format!("https://{input}"))
    }
}

/// True if `input` matches `^[A-Za-z][A-Za-z0-9+.-]*://`.
fn has_leading_scheme(input: &str) -> bool {
    let Some((scheme, _)) = input.split_once("://") else {
        return false;
    };

    let mut chars = scheme.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '.' | '-'))
}
