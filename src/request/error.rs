//! Error types for request construction and normalization.

use thiserror::Error;

/// Errors raised synchronously by request setters.
#[derive(Debug, Clone, Error)]
pub enum RequestError {
    /// URL or proxy is malformed, not http(s), or missing for a query operation
    #[error("invalid URL '{url}': {reason}\n  Suggestion: {suggestion}")]
    InvalidUrl {
        /// The offending URL text
        url: String,
        /// Why the URL is invalid
        reason: String,
        /// How to fix the issue
        suggestion: String,
    },

    /// Timeout is negative, not finite, or too large
    #[error("invalid {name} '{value}': {reason}\n  Suggestion: Use a non-negative number of seconds")]
    InvalidTimeout {
        /// The timeout attribute
        name: String,
        /// The rejected value in seconds
        value: f64,
        /// Why it was rejected
        reason: String,
    },

    /// Header name or value is not valid HTTP
    #[error("invalid header '{name}': {reason}")]
    InvalidHeader {
        /// The header name as given
        name: String,
        /// Why it was rejected
        reason: String,
    },
}

impl RequestError {
    /// Creates an `InvalidUrl` error for text that does not start with `http`
    /// or whose scheme is not http/https.
    #[must_use]
    pub fn not_http(url: &str) -> Self {
        Self::InvalidUrl {
            url: url.to_string(),
            reason: "URL must use the http or https scheme".to_string(),
            suggestion: "Use http:// or https:// URLs".to_string(),
        }
    }

    /// Creates an `InvalidUrl` error for text that fails to parse.
    #[must_use]
    pub fn malformed(url: &str, parse_error: &str) -> Self {
        Self::InvalidUrl {
            url: url.to_string(),
            reason: parse_error.to_string(),
            suggestion: "Check the URL format and try again".to_string(),
        }
    }

    /// Creates an `InvalidUrl` error for a query operation without a URL.
    #[must_use]
    pub fn missing_url() -> Self {
        Self::InvalidUrl {
            url: String::new(),
            reason: "request has no URL to carry a query".to_string(),
            suggestion: "Set the request URL before setting its query".to_string(),
        }
    }

    /// Creates an `InvalidTimeout` error.
    #[must_use]
    pub fn invalid_timeout(name: &str, value: f64, reason: &str) -> Self {
        Self::InvalidTimeout {
            name: name.to_string(),
            value,
            reason: reason.to_string(),
        }
    }

    /// Creates an `InvalidHeader` error.
    #[must_use]
    pub fn invalid_header(name: &str, reason: &str) -> Self {
        Self::InvalidHeader {
            name: name.to_string(),
            reason: reason.to_string(),
        }
    }
}
