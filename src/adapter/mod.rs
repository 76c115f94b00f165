//! Adapter registry for interchangeable HTTP transport backends.
//!
//! Backends implement [`Adapter`] and declare themselves to an
//! [`AdapterRegistry`] together with the dependencies they need at runtime.
//! The registry resolves which backend executes a [`Request`], either by
//! explicit name or by probing a fixed load order for the first backend whose
//! dependencies are available.
//!
//! # Architecture
//!
//! - [`Adapter`] - Async trait that backends implement
//! - [`AdapterHandle`] - Shared handle to a registered backend, compared by identity
//! - [`AdapterDescriptor`] - `{name, handle, dependencies}` registration record
//! - [`AdapterRegistry`] - Catalog plus explicit/default resolution
//! - [`DependencyLoader`] - Availability probe for backend dependencies
//!
//! # Example
//!
//! ```
//! use http_adapter::adapter::{AdapterRegistry, InstalledDependencies};
//!
//! let registry = AdapterRegistry::new(InstalledDependencies::new(["net/http"]));
//! assert!(registry.is_empty());
//! assert!(registry.resolve_current().is_err());
//! ```

mod error;
mod loader;
mod registry;

pub use error::{AdapterError, LoadError};
pub use loader::{DependencyLoader, InstalledDependencies};
pub use registry::AdapterRegistry;

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Method;

use crate::request::Request;
use crate::response::Response;

/// Candidate adapter names probed, in order, when no adapter is chosen explicitly.
pub const DEFAULT_LOAD_ORDER: [&str; 4] = ["httpclient", "curb", "em_http", "net_http"];

/// Shared execution contract for HTTP transport backends.
///
/// # Object Safety
///
/// This trait uses `async_trait` so backends can be stored as
/// `Arc<dyn Adapter>` inside the registry.
#[async_trait]
pub trait Adapter: Send + Sync {
    /// Executes `request` with the given HTTP method.
    ///
    /// Backends own the socket I/O, honor `open_timeout`/`read_timeout`, and
    /// feed streamed body chunks to the request's `on_body` callback if set.
    async fn execute(&self, method: Method, request: &Request) -> Result<Response, AdapterError>;
}

/// Shared handle to a backend implementation.
///
/// Two handles are equal only when they point at the same backend instance,
/// which is what the registry's reverse lookup keys on.
#[derive(Clone)]
pub struct AdapterHandle(Arc<dyn Adapter>);

impl AdapterHandle {
    /// Wraps a backend in a new handle.
    #[must_use]
    pub fn new<A: Adapter + 'static>(adapter: A) -> Self {
        Self(Arc::new(adapter))
    }

    /// Returns the wrapped backend.
    #[must_use]
    pub fn adapter(&self) -> &dyn Adapter {
        self.0.as_ref()
    }

    /// Executes the request through the wrapped backend.
    ///
    /// # Errors
    ///
    /// Propagates whatever the backend reports.
    pub async fn execute(
        &self,
        method: Method,
        request: &Request,
    ) -> Result<Response, AdapterError> {
        self.0.execute(method, request).await
    }

    fn address(&self) -> *const () {
        Arc::as_ptr(&self.0).cast::<()>()
    }
}

impl From<Arc<dyn Adapter>> for AdapterHandle {
    fn from(adapter: Arc<dyn Adapter>) -> Self {
        Self(adapter)
    }
}

impl PartialEq for AdapterHandle {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.address(), other.address())
    }
}

impl Eq for AdapterHandle {}

impl Hash for AdapterHandle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.address().hash(state);
    }
}

impl fmt::Debug for AdapterHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AdapterHandle({:p})", self.address())
    }
}

/// Registration record for one backend.
#[derive(Debug, Clone)]
pub struct AdapterDescriptor {
    /// Name the backend is selected by.
    pub name: String,
    /// The backend implementation.
    pub handle: AdapterHandle,
    /// Dependencies that must all load, in order, for the backend to be usable.
    pub dependencies: Vec<String>,
}

impl AdapterDescriptor {
    /// Creates a new descriptor.
    #[must_use]
    pub fn new<I, S>(name: impl Into<String>, handle: AdapterHandle, dependencies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            handle,
            dependencies: dependencies.into_iter().map(Into::into).collect(),
        }
    }
}
