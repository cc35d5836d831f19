//! Failures reported by the short-link store.

/// Errors returned by store operations.
///
/// `InvalidUrl` and `NotFound` are caller errors and are never retried.
/// `Backend` only comes from an external key-value backend; the in-memory
/// store never produces it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("Invalid URL: {reason}")]
    InvalidUrl { reason: String },

    #[error("Short code '{code}' not found")]
    NotFound { code: String },

    #[error("Storage backend error: {0}")]
    Backend(String),
}

impl StoreError {
    pub fn invalid_url(reason: impl Into<String>) -> Self {
        Self::InvalidUrl {
            reason: reason.into(),
        }
    }

    pub fn not_found(code: impl Into<String>) -> Self {
        Self::NotFound { code: code.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            StoreError::invalid_url("missing scheme").to_string(),
            "Invalid URL: missing scheme"
        );
        assert_eq!(
            StoreError::not_found("abc123").to_string(),
            "Short code 'abc123' not found"
        );
        assert_eq!(
            StoreError::Backend("connection refused".into()).to_string(),
            "Storage backend error: connection refused"
        );
    }
}
