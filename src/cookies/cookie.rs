use std::fmt;

use reqwest::header::{HeaderMap, SET_COOKIE};

/// A single cookie taken from a raw `Set-Cookie` value.
///
/// Only the leading `name=value` pair matters; attributes after the first
/// `;` are ignored and nothing is validated. The raw text is redacted in
/// Debug output.
#[derive(Clone, PartialEq, Eq)]
pub struct Cookie {
    raw: String,
}

impl Cookie {
    /// Wraps a raw `Set-Cookie` value such as `token=abc; Path=/; HttpOnly`.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    /// Extracts every `Set-Cookie` header value as a cookie.
    ///
    /// Bytes that are not valid UTF-8 are replaced, so no value is dropped.
    #[must_use]
    pub fn list_from_headers(headers: &HeaderMap) -> Vec<Self> {
        headers
            .get_all(SET_COOKIE)
            .iter()
            .map(|value| Self::new(String::from_utf8_lossy(value.as_bytes())))
            .collect()
    }

    /// Returns the text before the first `=`.
    #[must_use]
    pub fn name(&self) -> &str {
        self.raw.split_once('=').map_or(self.raw.as_str(), |(name, _)| name)
    }

    /// Returns the text before the first `;`, i.e. the `name=value` pair.
    ///
    /// Cookie values are sensitive; avoid logging the return value.
    #[must_use]
    pub fn name_and_value(&self) -> &str {
        self.raw
            .split_once(';')
            .map_or(self.raw.as_str(), |(pair, _)| pair)
    }
}

impl From<&str> for Cookie {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for Cookie {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

impl fmt::Debug for Cookie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cookie")
            .field("name", &self.name())
            .field("value", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use reqwest::header::HeaderValue;

    use super::*;

    #[test]
    fn test_cookie_name_and_value_strip_attributes() {
        let cookie = Cookie::new("token=choc-choc-chip; Path=/; HttpOnly");
        assert_eq!(cookie.name(), "token");
        assert_eq!(cookie.name_and_value(), "token=choc-choc-chip");
    }

    #[test]
    fn test_cookie_without_attributes() {
        let cookie = Cookie::new("a=1");
        assert_eq!(cookie.name(), "a");
        assert_eq!(cookie.name_and_value(), "a=1");
    }

    #[test]
    fn test_cookie_value_containing_equals() {
        let cookie = Cookie::new("data=a=b; Secure");
        assert_eq!(cookie.name(), "data");
        assert_eq!(cookie.name_and_value(), "data=a=b");
    }

    #[test]
    fn test_cookie_without_equals_is_not_validated() {
        let cookie = Cookie::new("flag");
        assert_eq!(cookie.name(), "flag");
        assert_eq!(cookie.name_and_value(), "flag");
    }

    #[test]
    fn test_cookie_debug_redacts_value() {
        let cookie = Cookie::new("session=secret-value");
        let debug = format!("{cookie:?}");
        assert!(debug.contains("session"));
        assert!(!debug.contains("secret-value"), "got: {debug}");
    }

    #[test]
    fn test_cookie_list_from_headers() {
        let mut headers = HeaderMap::new();
        headers.append(SET_COOKIE, HeaderValue::from_static("a=1; Path=/"));
        headers.append(SET_COOKIE, HeaderValue::from_static("b=2"));
        headers.append("x-other", HeaderValue::from_static("c=3"));

        let cookies = Cookie::list_from_headers(&headers);
        let names: Vec<&str> = cookies.iter().map(Cookie::name).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn test_cookie_list_from_headers_keeps_obs_text_values() {
        let mut headers = HeaderMap::new();
        headers.append(SET_COOKIE, HeaderValue::from_bytes(b"lang=caf\xe9; Path=/").unwrap());
        headers.append(SET_COOKIE, HeaderValue::from_static("b=2"));

        let cookies = Cookie::list_from_headers(&headers);
        assert_eq!(cookies.len(), 2);
        assert_eq!(cookies[0].name(), "lang");
        assert_eq!(cookies[0].name_and_value(), "lang=caf\u{fffd}");
    }

    #[test]
    fn test_cookie_list_from_headers_empty() {
        assert!(Cookie::list_from_headers(&HeaderMap::new()).is_empty());
    }
}
