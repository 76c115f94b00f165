//! Adapter registry with explicit selection and default probing.
//!
//! The [`AdapterRegistry`] records backend descriptors and decides which one
//! executes a request. An explicit choice is validated and its dependencies
//! loaded eagerly; otherwise the load order is probed and the first loadable
//! candidate is memoized as the default.

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use reqwest::Method;
use tracing::{debug, info, warn};

use super::{
    AdapterDescriptor, AdapterError, AdapterHandle, DEFAULT_LOAD_ORDER, DependencyLoader,
    InstalledDependencies,
};
use crate::request::{Request, redact_credentials};
use crate::response::Response;

/// Catalog of backend descriptors plus the adapter resolution algorithm.
///
/// One registry is constructed explicitly and passed to every call site that
/// dispatches requests. Registration never fails because a backend is absent;
/// failure is deferred until a backend is actually required.
pub struct AdapterRegistry {
    adapters: HashMap<String, AdapterDescriptor>,
    names_by_handle: HashMap<AdapterHandle, String>,
    load_order: Vec<String>,
    loader: Box<dyn DependencyLoader>,
    current: Option<String>,
    default: OnceLock<String>,
}

impl AdapterRegistry {
    /// Creates an empty registry probing [`DEFAULT_LOAD_ORDER`].
    #[must_use]
    pub fn new(loader: impl DependencyLoader + 'static) -> Self {
        Self::with_load_order(loader, DEFAULT_LOAD_ORDER)
    }

    /// Creates an empty registry probing the given candidate names in order.
    #[must_use]
    pub fn with_load_order<I, S>(loader: impl DependencyLoader + 'static, load_order: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            adapters: HashMap::new(),
            names_by_handle: HashMap::new(),
            load_order: load_order.into_iter().map(Into::into).collect(),
            loader: Box::new(loader),
            current: None,
            default: OnceLock::new(),
        }
    }

    /// Registers (or replaces) a backend under `name`.
    ///
    /// Replacing a backend drops the previous handle from reverse lookups
    /// unless another name still holds it.
    #[tracing::instrument(skip(self, handle, dependencies))]
    pub fn register<I, S>(&mut self, name: &str, handle: AdapterHandle, dependencies: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let descriptor = AdapterDescriptor::new(name, handle.clone(), dependencies);
        debug!(
            dependencies = ?descriptor.dependencies,
            "Registering adapter"
        );

        if let Some(previous) = self.adapters.insert(name.to_string(), descriptor)
            && previous.handle != handle
        {
            // The old handle may still be registered under another name.
            let still_registered = self
                .adapters
                .iter()
                .find(|(_, descriptor)| descriptor.handle == previous.handle)
                .map(|(other, _)| other.clone());
            match still_registered {
                Some(other) => {
                    self.names_by_handle.insert(previous.handle, other);
                }
                None => {
                    self.names_by_handle.remove(&previous.handle);
                }
            }
        }
        self.names_by_handle.insert(handle, name.to_string());
    }

    /// Returns the number of registered adapters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.adapters.len()
    }

    /// Returns true if no adapters are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adapters.is_empty()
    }

    /// Returns the registered adapter names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.adapters.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Returns the candidate names probed for the default adapter.
    #[must_use]
    pub fn load_order(&self) -> &[String] {
        &self.load_order
    }

    /// Returns the descriptor registered under `name`.
    #[must_use]
    pub fn descriptor(&self, name: &str) -> Option<&AdapterDescriptor> {
        self.adapters.get(name)
    }

    /// Checks that `name` is registered.
    ///
    /// # Errors
    ///
    /// Returns `AdapterError::UnknownAdapter` for unregistered names.
    pub fn validate(&self, name: &str) -> Result<(), AdapterError> {
        if self.adapters.contains_key(name) {
            Ok(())
        } else {
            Err(AdapterError::unknown(name))
        }
    }

    /// Loads every dependency of `name` in order, stopping at the first failure.
    ///
    /// # Errors
    ///
    /// Returns `AdapterError::UnknownAdapter` for unregistered names and
    /// `AdapterError::DependencyUnavailable` naming the first dependency that
    /// failed to load.
    pub fn load_dependencies(&self, name: &str) -> Result<(), AdapterError> {
        let descriptor = self
            .adapters
            .get(name)
            .ok_or_else(|| AdapterError::unknown(name))?;

        for dependency in &descriptor.dependencies {
            self.loader.load(dependency).map_err(|err| {
                AdapterError::dependency_unavailable(name, &err.dependency, &err.reason)
            })?;
        }
        Ok(())
    }

    /// Probes whether `name` is usable. Never fails.
    #[must_use]
    pub fn try_load_dependencies(&self, name: &str) -> bool {
        match self.load_dependencies(name) {
            Ok(()) => true,
            Err(err) => {
                debug!(adapter = name, error = %err, "Adapter unavailable");
                false
            }
        }
    }

    /// Sets or clears the explicit adapter override.
    ///
    /// `None` clears the override and forgets the memoized default so the
    /// next resolution probes again.
    ///
    /// # Errors
    ///
    /// Returns `AdapterError::UnknownAdapter` or
    /// `AdapterError::DependencyUnavailable` when the named adapter cannot be
    /// used. The previous selection is kept in that case.
    #[tracing::instrument(skip(self))]
    pub fn set_current(&mut self, name: Option<&str>) -> Result<(), AdapterError> {
        let Some(name) = name else {
            self.current = None;
            self.default.take();
            debug!("Cleared adapter override");
            return Ok(());
        };

        self.load_dependencies(name)?;
        self.current = Some(name.to_string());
        info!(adapter = name, "Adapter override set");
        Ok(())
    }

    /// Returns the name of the adapter used when none is requested explicitly.
    ///
    /// The explicit override wins. Otherwise the load order is probed once and
    /// the first candidate whose dependencies load is memoized; unregistered or
    /// unloadable candidates are skipped. A failed probe is not memoized.
    ///
    /// # Errors
    ///
    /// Returns `AdapterError::NoAdapterAvailable` if no candidate loads.
    #[tracing::instrument(skip(self))]
    pub fn resolve_current(&self) -> Result<String, AdapterError> {
        if let Some(name) = &self.current {
            return Ok(name.clone());
        }
        if let Some(name) = self.default.get() {
            return Ok(name.clone());
        }

        let probed = self.probe_default()?;
        // A concurrent caller may have stored its result first; everyone sees that one.
        Ok(self.default.get_or_init(|| probed).clone())
    }

    /// Returns the handle to use, by explicit name or by default resolution.
    ///
    /// # Errors
    ///
    /// Explicit names fail with `UnknownAdapter` or `DependencyUnavailable`;
    /// default resolution fails with `NoAdapterAvailable`.
    pub fn resolve_for_use(&self, name: Option<&str>) -> Result<AdapterHandle, AdapterError> {
        let name = match name {
            Some(name) => {
                self.load_dependencies(name)?;
                name.to_string()
            }
            None => self.resolve_current()?,
        };

        self.adapters
            .get(&name)
            .map(|descriptor| descriptor.handle.clone())
            .ok_or_else(|| AdapterError::unknown(&name))
    }

    /// Returns the name a handle is registered under, if any.
    #[must_use]
    pub fn identify(&self, handle: &AdapterHandle) -> Option<&str> {
        self.names_by_handle.get(handle).map(String::as_str)
    }

    /// Resolves a backend and executes `request` with it.
    ///
    /// # Errors
    ///
    /// Returns any resolution error from [`Self::resolve_for_use`], or the
    /// backend's own execution error.
    #[tracing::instrument(skip(self, request), fields(method = %method, adapter))]
    pub async fn execute(
        &self,
        method: Method,
        request: &Request,
        adapter: Option<&str>,
    ) -> Result<Response, AdapterError> {
        let handle = self.resolve_for_use(adapter)?;
        let name = self.identify(&handle).unwrap_or("unknown");
        tracing::Span::current().record("adapter", name);
        debug!(
            url = %request.url().map(redact_credentials).unwrap_or_default(),
            "Executing request"
        );

        let response = handle.execute(method, request).await;
        match &response {
            Ok(response) => debug!(code = response.code(), "Adapter returned response"),
            Err(err) => warn!(error = %err, "Adapter failed"),
        }
        response
    }

    fn probe_default(&self) -> Result<String, AdapterError> {
        for candidate in &self.load_order {
            if !self.adapters.contains_key(candidate) {
                debug!(adapter = %candidate, "Skipping unregistered candidate");
                continue;
            }
            if self.try_load_dependencies(candidate) {
                info!(adapter = %candidate, "Default adapter selected");
                return Ok(candidate.clone());
            }
        }

        warn!(candidates = ?self.load_order, "No adapter could be loaded");
        Err(AdapterError::none_available(&self.load_order))
    }
}

impl fmt::Debug for AdapterRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdapterRegistry")
            .field("adapters", &self.names())
            .field("load_order", &self.load_order)
            .field("current", &self.current)
            .field("default", &self.default.get())
            .finish_non_exhaustive()
    }
}

impl Default for AdapterRegistry {
    fn default() -> Self {
        Self::new(InstalledDependencies::default())
    }
}
