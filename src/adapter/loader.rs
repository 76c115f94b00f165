//! Dependency loading for adapter availability probing.

use std::collections::HashSet;
use std::sync::Mutex;

use tracing::trace;

use super::error::LoadError;

/// Makes adapter dependencies available, one identifier at a time.
///
/// Implementations must be idempotent: loading an already loaded dependency
/// succeeds without side effects.
pub trait DependencyLoader: Send + Sync {
    /// Attempts to load a single dependency.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError`] when the dependency is not installed or fails to
    /// initialize.
    fn load(&self, dependency: &str) -> Result<(), LoadError>;
}

/// Loader backed by a fixed set of installed dependency identifiers.
///
/// Loading succeeds for any identifier in the installed set and records it as
/// loaded. The installed set never changes after construction.
#[derive(Debug, Default)]
pub struct InstalledDependencies {
    installed: HashSet<String>,
    loaded: Mutex<HashSet<String>>,
}

impl InstalledDependencies {
    /// Creates a loader that knows about the given installed dependencies.
    #[must_use]
    pub fn new<I, S>(installed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            installed: installed.into_iter().map(Into::into).collect(),
            loaded: Mutex::new(HashSet::new()),
        }
    }

    /// Returns true if the dependency is installed.
    #[must_use]
    pub fn is_installed(&self, dependency: &str) -> bool {
        self.installed.contains(dependency)
    }

    /// Returns true if the dependency has been loaded at least once.
    #[must_use]
    pub fn is_loaded(&self, dependency: &str) -> bool {
        self.loaded
            .lock()
            .map(|loaded| loaded.contains(dependency))
            .unwrap_or(false)
    }
}

impl DependencyLoader for InstalledDependencies {
    fn load(&self, dependency: &str) -> Result<(), LoadError> {
        if !self.is_installed(dependency) {
            return Err(LoadError::new(dependency, "not installed"));
        }

        // A poisoned set only loses bookkeeping; the dependency is still installed.
        if let Ok(mut loaded) = self.loaded.lock()
            && loaded.insert(dependency.to_string())
        {
            trace!(dependency, "dependency loaded");
        }
        Ok(())
    }
}
