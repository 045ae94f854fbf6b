//! Target directory — named lookup of configured targets.
//!
//! The composition root builds one directory from configuration and hands it
//! to the HTTP layer by reference; there is no ambient global state.

use std::collections::HashMap;

use wakehub_domain::error::{NotFoundError, WakehubError};
use wakehub_domain::target::Target;

/// Immutable registry of targets, keyed by name.
pub struct TargetDirectory {
    targets: HashMap<String, Target>,
}

impl TargetDirectory {
    /// Build a directory from configured targets. Later duplicates win.
    pub fn new(targets: impl IntoIterator<Item = Target>) -> Self {
        Self {
            targets: targets
                .into_iter()
                .map(|target| (target.name.clone(), target))
                .collect(),
        }
    }

    /// Look up a target by name.
    ///
    /// # Errors
    ///
    /// Returns [`WakehubError::NotFound`] when no target carries `name`.
    pub fn get(&self, name: &str) -> Result<&Target, WakehubError> {
        self.targets.get(name).ok_or_else(|| {
            NotFoundError {
                kind: "Target",
                name: name.to_string(),
            }
            .into()
        })
    }

    /// All known target names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.targets.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of configured targets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Whether no targets are configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}
