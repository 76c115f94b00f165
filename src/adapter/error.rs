//! Error types for adapter registration and resolution.
//!
//! Messages follow the What/Why/Fix pattern used across the crate.

use thiserror::Error;

/// Errors that can occur while resolving or running an adapter.
#[derive(Debug, Clone, Error)]
pub enum AdapterError {
    /// The requested adapter name is not registered
    #[error("unknown adapter '{name}': {reason}\n  Suggestion: {suggestion}")]
    UnknownAdapter {
        /// The adapter name that was requested
        name: String,
        /// Why the lookup failed
        reason: String,
        /// How to fix the issue
        suggestion: String,
    },

    /// An explicitly requested adapter cannot load one of its dependencies
    #[error(
        "adapter '{name}' is unavailable: dependency '{dependency}' could not be loaded ({reason})\n  Suggestion: Install '{dependency}' or choose another adapter"
    )]
    DependencyUnavailable {
        /// The adapter whose dependencies failed
        name: String,
        /// The first dependency that failed to load
        dependency: String,
        /// Why the dependency failed to load
        reason: String,
    },

    /// No candidate in the load order could be loaded
    #[error(
        "no adapter available: tried {tried_count} candidate(s) [{candidates}]\n  Suggestion: Install one of the supported HTTP backends"
    )]
    NoAdapterAvailable {
        /// Candidates that were probed, in order
        candidates: String,
        /// Number of candidates probed
        tried_count: usize,
    },

    /// A backend failed while executing a request
    #[error("adapter '{name}' failed to execute request to {url}: {reason}")]
    Execution {
        /// The adapter that failed
        name: String,
        /// The request URL
        url: String,
        /// The backend's failure description
        reason: String,
    },
}

impl AdapterError {
    /// Creates an `UnknownAdapter` error.
    #[must_use]
    pub fn unknown(name: &str) -> Self {
        Self::UnknownAdapter {
            name: name.to_string(),
            reason: "no adapter is registered under this name".to_string(),
            suggestion: "Register the adapter first or use one of the registered names"
                .to_string(),
        }
    }

    /// Creates a `DependencyUnavailable` error.
    #[must_use]
    pub fn dependency_unavailable(name: &str, dependency: &str, reason: &str) -> Self {
        Self::DependencyUnavailable {
            name: name.to_string(),
            dependency: dependency.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Creates a `NoAdapterAvailable` error listing the probed candidates.
    #[must_use]
    pub fn none_available(candidates: &[String]) -> Self {
        Self::NoAdapterAvailable {
            candidates: candidates.join(", "),
            tried_count: candidates.len(),
        }
    }

    /// Creates an `Execution` error. Intended for backend implementations.
    #[must_use]
    pub fn execution(name: &str, url: &str, reason: &str) -> Self {
        Self::Execution {
            name: name.to_string(),
            url: url.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Failure to load a single adapter dependency.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot load '{dependency}': {reason}")]
pub struct LoadError {
    /// The dependency identifier
    pub dependency: String,
    /// Why loading failed
    pub reason: String,
}

impl LoadError {
    /// Creates a new load error.
    #[must_use]
    pub fn new(dependency: &str, reason: &str) -> Self {
        Self {
            dependency: dependency.to_string(),
            reason: reason.to_string(),
        }
    }
}
