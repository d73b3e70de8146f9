//! crates/flaglog/src/registry.rs
//! Set of categories whose messages may pass the gate.

use std::collections::BTreeSet;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Thread-safe set of enabled categories.
///
/// Categories are compared by exact string equality. The registry starts
/// empty; a category that is not enabled never passes the gated path. All
/// operations are idempotent and none can fail: a poisoned lock is
/// recovered rather than reported, so logging keeps working after a panic
/// elsewhere.
#[derive(Debug, Default)]
pub struct CategoryRegistry {
    enabled: RwLock<BTreeSet<String>>,
}

impl CategoryRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, BTreeSet<String>> {
        self.enabled.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, BTreeSet<String>> {
        self.enabled.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Enables `category`. Returns `true` when it was not enabled before.
    pub fn enable(&self, category: &str) -> bool {
        if self.is_enabled(category) {
            return false;
        }
        let inserted = self.write().insert(category.to_owned());
        if inserted {
            tracing::debug!(target: "flaglog::registry", category, "category enabled");
        }
        inserted
    }

    /// Enables every category yielded by `categories`.
    pub fn enable_all<I, S>(&self, categories: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut enabled = self.write();
        for category in categories {
            let category = category.as_ref();
            if !enabled.contains(category) {
                enabled.insert(category.to_owned());
                tracing::debug!(target: "flaglog::registry", category, "category enabled");
            }
        }
    }

    /// Disables `category`. Returns `true` when it was enabled before;
    /// disabling an absent category is a no-op.
    pub fn disable(&self, category: &str) -> bool {
        let removed = self.write().remove(category);
        if removed {
            tracing::debug!(target: "flaglog::registry", category, "category disabled");
        }
        removed
    }

    /// Disables every category.
    pub fn disable_all(&self) {
        let mut enabled = self.write();
        let count = enabled.len();
        enabled.clear();
        tracing::debug!(target: "flaglog::registry", count, "all categories disabled");
    }

    /// Reports whether `category` is enabled.
    #[must_use]
    pub fn is_enabled(&self, category: &str) -> bool {
        self.read().contains(category)
    }

    /// Returns the enabled categories in sorted order.
    #[must_use]
    pub fn enabled(&self) -> Vec<String> {
        self.read().iter().cloned().collect()
    }

    /// Returns the number of enabled categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Reports whether no category is enabled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }
}
