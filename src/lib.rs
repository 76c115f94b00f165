//! HTTP adapter library
//!
//! A unification layer over interchangeable HTTP transport backends. Callers
//! describe a request once and dispatch it through whichever backend is
//! installed, without depending on any single backend's API.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//! - [`adapter`] - Backend registry with explicit selection and default probing
//! - [`request`] - Request description with URL, header, body and query normalization
//! - [`auth`] - Mutually exclusive HTTP auth methods and SSL client-auth settings
//! - [`cookies`] - Cookie parsing and the per-request cookie store
//! - [`response`] - Minimal response value returned by backends
//!
//! This crate performs no network I/O itself; backends implementing
//! [`Adapter`] do.

// Clippy lints - strict for library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod adapter;
pub mod auth;
pub mod cookies;
pub mod request;
pub mod response;

// Re-export commonly used types
pub use adapter::{
    Adapter, AdapterDescriptor, AdapterError, AdapterHandle, AdapterRegistry, DEFAULT_LOAD_ORDER,
    DependencyLoader, InstalledDependencies, LoadError,
};
pub use auth::{AuthConfig, AuthType, Credentials, SslConfig, VerifyMode};
pub use cookies::{Cookie, CookieSource, CookieStore};
pub use request::{
    ATTRIBUTES, BodyCallback, Payload, Request, RequestError, RequestOptions, redact_credentials,
};
pub use response::Response;

// Backends and callers name methods and headers through these.
pub use reqwest::Method;
pub use reqwest::header;
