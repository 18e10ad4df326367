//! In-memory accumulator for check results.

use super::{CheckId, CheckResult};
use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock};
use tracing::debug;

/// Last-write-wins map from [`CheckId`] to the latest [`CheckResult`].
///
/// A single store-wide lock serializes writers; each check only ever writes its
/// own key, and the lock is held only for the insert itself. Results never
/// expire.
///
/// # Example
///
/// ```rust
/// use quality_guard::core::{CheckDetails, CheckResult, ResultStore};
///
/// let store = ResultStore::new();
/// assert!(store.overall_status());
///
/// store.record(CheckResult::from_details(CheckDetails::Duplicates { duplicate_count: 3 }));
/// assert!(!store.overall_status());
/// ```
#[derive(Debug, Default)]
pub struct ResultStore {
    results: RwLock<BTreeMap<CheckId, CheckResult>>,
}

impl ResultStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a result under its check id, returning the result it replaced.
    pub fn record(&self, result: CheckResult) -> Option<CheckResult> {
        let id = result.check_id();
        let previous = self
            .results
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id, result);

        if previous.is_some() {
            debug!(check.id = %id, "Overwrote previous check result");
        }
        previous
    }

    /// Returns the latest result of a check, if it has run.
    pub fn get(&self, id: CheckId) -> Option<CheckResult> {
        self.results
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&id)
            .cloned()
    }

    /// Copies the current contents of the store.
    pub fn snapshot(&self) -> BTreeMap<CheckId, CheckResult> {
        self.results
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn len(&self) -> usize {
        self.results
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Logical AND of every stored status; true when nothing has run.
    pub fn overall_status(&self) -> bool {
        self.results
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .all(|result| result.status)
    }

    /// Removes all stored results.
    pub fn clear(&self) {
        self.results
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}
