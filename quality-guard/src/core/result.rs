//! Check result types.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Fixed identifier under which a check's result is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckId {
    MissingValues,
    Duplicates,
    Outliers,
    Schema,
}

impl CheckId {
    /// All check identifiers.
    pub const ALL: [CheckId; 4] = [
        CheckId::MissingValues,
        CheckId::Duplicates,
        CheckId::Outliers,
        CheckId::Schema,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CheckId::MissingValues => "missing_values",
            CheckId::Duplicates => "duplicates",
            CheckId::Outliers => "outliers",
            CheckId::Schema => "schema",
        }
    }
}

impl fmt::Display for CheckId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Check-specific payload of a [`CheckResult`].
///
/// Serializes without a tag, so the JSON shape of each variant is exactly the
/// details object of that check.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CheckDetails {
    /// Flagged column -> missing fraction
    MissingValues(BTreeMap<String, f64>),
    /// Number of rows repeating an earlier row
    Duplicates { duplicate_count: usize },
    /// Numeric column -> ascending outlier row indices
    Outliers(BTreeMap<String, Vec<usize>>),
    /// Columns whose type category did not match, in expected order
    Schema { mismatched_columns: Vec<String> },
}

impl CheckDetails {
    /// The check that produces this kind of details.
    pub fn check_id(&self) -> CheckId {
        match self {
            CheckDetails::MissingValues(_) => CheckId::MissingValues,
            CheckDetails::Duplicates { .. } => CheckId::Duplicates,
            CheckDetails::Outliers(_) => CheckId::Outliers,
            CheckDetails::Schema { .. } => CheckId::Schema,
        }
    }

    /// Whether these details describe a clean dataset.
    pub fn passed(&self) -> bool {
        match self {
            CheckDetails::MissingValues(flagged) => flagged.is_empty(),
            CheckDetails::Duplicates { duplicate_count } => *duplicate_count == 0,
            CheckDetails::Outliers(outliers) => outliers.values().all(Vec::is_empty),
            CheckDetails::Schema { mismatched_columns } => mismatched_columns.is_empty(),
        }
    }

    /// Number of individual findings (flagged columns, duplicate rows, outlier rows, mismatches).
    pub fn issue_count(&self) -> usize {
        match self {
            CheckDetails::MissingValues(flagged) => flagged.len(),
            CheckDetails::Duplicates { duplicate_count } => *duplicate_count,
            CheckDetails::Outliers(outliers) => outliers.values().map(Vec::len).sum(),
            CheckDetails::Schema { mismatched_columns } => mismatched_columns.len(),
        }
    }
}

/// Outcome of a single check run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckResult {
    /// True iff the check found nothing to report
    pub status: bool,
    /// Check-specific findings
    pub details: CheckDetails,
}

impl CheckResult {
    /// Builds a result whose status is derived from the details.
    pub fn from_details(details: CheckDetails) -> Self {
        Self {
            status: details.passed(),
            details,
        }
    }

    pub fn check_id(&self) -> CheckId {
        self.details.check_id()
    }

    pub fn is_success(&self) -> bool {
        self.status
    }
}
