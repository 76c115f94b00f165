//! Minimal response value returned by backends.

use std::borrow::Cow;

use reqwest::header::HeaderMap;

use crate::cookies::{Cookie, CookieSource};

/// Response produced by an [`crate::adapter::Adapter`].
#[derive(Debug, Clone, Default)]
pub struct Response {
    code: u16,
    headers: HeaderMap,
    raw_body: Vec<u8>,
}

impl Response {
    /// Creates a response with the given status code, no headers and no body.
    #[must_use]
    pub fn new(code: u16) -> Self {
        Self {
            code,
            ..Self::default()
        }
    }

    /// Replaces the response headers.
    #[must_use]
    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers = headers;
        self
    }

    /// Replaces the raw response body.
    #[must_use]
    pub fn with_body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.raw_body = body.into();
        self
    }

    /// Returns the HTTP status code.
    #[must_use]
    pub fn code(&self) -> u16 {
        self.code
    }

    /// Returns the response headers.
    #[must_use]
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Returns the body bytes as received.
    #[must_use]
    pub fn raw_body(&self) -> &[u8] {
        &self.raw_body
    }

    /// Returns the body as text, replacing invalid UTF-8.
    #[must_use]
    pub fn body(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.raw_body)
    }

    /// Returns true unless the status code is 2xx.
    #[must_use]
    pub fn is_error(&self) -> bool {
        !(200..300).contains(&self.code)
    }
}

impl CookieSource for Response {
    fn cookies(&self) -> Vec<Cookie> {
        Cookie::list_from_headers(&self.headers)
    }
}
