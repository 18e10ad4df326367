//! Aggregated validation summary.

use super::{CheckId, CheckResult, ResultStore};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

/// Snapshot of every stored check result plus dataset dimensions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationSummary {
    /// When the summary was taken (RFC 3339 in JSON)
    pub timestamp: DateTime<Utc>,
    /// Number of rows in the dataset
    pub total_rows: usize,
    /// Number of columns in the dataset
    pub total_columns: usize,
    /// Latest result of every check that has run
    pub checks: BTreeMap<CheckId, CheckResult>,
    /// AND of all check statuses; true when no check has run
    pub overall_status: bool,
}

impl ValidationSummary {
    /// Builds a summary from the current contents of `store`.
    pub fn from_store(store: &ResultStore, total_rows: usize, total_columns: usize) -> Self {
        let checks = store.snapshot();
        let overall_status = checks.values().all(|result| result.status);
        Self {
            timestamp: Utc::now(),
            total_rows,
            total_columns,
            checks,
            overall_status,
        }
    }

    pub fn is_success(&self) -> bool {
        self.overall_status
    }

    /// Identifiers of checks that passed.
    pub fn passed_checks(&self) -> Vec<CheckId> {
        self.checks
            .iter()
            .filter(|(_, result)| result.status)
            .map(|(id, _)| *id)
            .collect()
    }

    /// Identifiers of checks that failed.
    pub fn failed_checks(&self) -> Vec<CheckId> {
        self.checks
            .iter()
            .filter(|(_, result)| !result.status)
            .map(|(id, _)| *id)
            .collect()
    }
}
