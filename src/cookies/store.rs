use std::borrow::Borrow;
use std::collections::HashMap;

use super::Cookie;

/// Deduplicating store of cookies for follow-up requests.
///
/// Keyed by cookie name. A later cookie with a known name replaces the
/// stored pair but keeps its original position.
///
/// # Example
///
/// ```
/// use http_adapter::cookies::{Cookie, CookieStore};
///
/// let mut store = CookieStore::new();
/// store.add([Cookie::new("token=choc-choc-chip; Path=/; HttpOnly")]);
/// assert_eq!(store.fetch().as_deref(), Some("token=choc-choc-chip"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct CookieStore {
    entries: Vec<(String, String)>,
    positions: HashMap<String, usize>,
}

impl CookieStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds cookies, replacing the stored pair for names already present.
    pub fn add<I>(&mut self, cookies: I)
    where
        I: IntoIterator,
        I::Item: Borrow<Cookie>,
    {
        for item in cookies {
            let cookie: &Cookie = item.borrow();
            let name = cookie.name();
            let pair = cookie.name_and_value().to_string();
            match self.positions.get(name) {
                Some(&index) => self.entries[index].1 = pair,
                None => {
                    self.positions.insert(name.to_string(), self.entries.len());
                    self.entries.push((name.to_string(), pair));
                }
            }
        }
    }

    /// Returns the `Cookie` header value, or `None` when the store is empty.
    #[must_use]
    pub fn fetch(&self) -> Option<String> {
        if self.entries.is_empty() {
            return None;
        }
        let pairs: Vec<&str> = self.entries.iter().map(|(_, pair)| pair.as_str()).collect();
        Some(pairs.join(";"))
    }

    /// Returns the number of distinct cookie names stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no cookies are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
