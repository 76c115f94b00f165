//! Cookie parsing and accumulation across requests.
//!
//! Cookies returned by one response are collected into a [`CookieStore`] and
//! replayed as a single `Cookie` header on the next request.

mod cookie;
mod store;

pub use cookie::Cookie;
pub use store::CookieStore;

/// Anything that can hand over a list of cookies, e.g. a [`crate::Response`].
pub trait CookieSource {
    /// Returns the cookies this source carries, in order.
    fn cookies(&self) -> Vec<Cookie>;
}

impl CookieSource for [Cookie] {
    fn cookies(&self) -> Vec<Cookie> {
        self.to_vec()
    }
}

impl CookieSource for Vec<Cookie> {
    fn cookies(&self) -> Vec<Cookie> {
        self.clone()
    }
}

impl<const N: usize> CookieSource for [Cookie; N] {
    fn cookies(&self) -> Vec<Cookie> {
        self.to_vec()
    }
}
