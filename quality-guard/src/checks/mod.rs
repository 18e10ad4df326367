//! Data quality checks.
//!
//! Each check is an independent, stateless evaluation over a [`Dataset`]:
//!
//! - [`MissingValuesCheck`]: columns whose missing fraction exceeds a threshold
//! - [`DuplicatesCheck`]: rows repeating an earlier row over a column subset
//! - [`OutliersCheck`]: numeric values outside a mean ± n·σ band
//! - [`SchemaCheck`]: columns absent or of an unexpected [`TypeCategory`]
//!
//! Parameters are validated when a check is constructed and referenced
//! columns at the start of [`QualityCheck::evaluate`], so a failing check
//! never produces a partial result.
//!
//! ```rust
//! use quality_guard::checks::{MissingValuesCheck, QualityCheck};
//! use quality_guard::dataset::Dataset;
//! use arrow::array::Int64Array;
//! use arrow::datatypes::{DataType, Field, Schema};
//! use arrow::record_batch::RecordBatch;
//! use std::sync::Arc;
//!
//! let schema = Arc::new(Schema::new(vec![Field::new("id", DataType::Int64, true)]));
//! let batch = RecordBatch::try_new(
//!     schema,
//!     vec![Arc::new(Int64Array::from(vec![Some(1), None, Some(3)]))],
//! )?;
//!
//! let result = MissingValuesCheck::new(0.5)?.evaluate(&Dataset::new(batch))?;
//! assert!(result.status);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! [`TypeCategory`]: crate::dataset::TypeCategory

mod duplicates;
mod missing;
mod outliers;
mod schema;

pub use duplicates::{count_duplicate_rows, DuplicatesCheck};
pub use missing::MissingValuesCheck;
pub use outliers::{outlier_indices, ColumnStats, OutliersCheck};
pub use schema::{ColumnExpectation, ExpectedSchema, SchemaCheck};

use crate::core::{CheckId, CheckResult};
use crate::dataset::Dataset;
use crate::error::{QualityError, Result};
use std::fmt::Debug;

/// A single data quality check.
///
/// Implementations must be pure: the result depends only on the dataset and
/// the check's own parameters.
pub trait QualityCheck: Debug + Send + Sync {
    /// The identifier the result is stored under.
    fn id(&self) -> CheckId;

    /// Runs the check against `dataset`.
    fn evaluate(&self, dataset: &Dataset) -> Result<CheckResult>;
}

/// Accepts fractions in `[0, 1]`; rejects everything else, including NaN.
pub fn validate_threshold(threshold: f64) -> Result<f64> {
    if (0.0..=1.0).contains(&threshold) {
        Ok(threshold)
    } else {
        Err(QualityError::invalid_parameter(
            "threshold",
            threshold,
            "must lie in [0, 1]",
        ))
    }
}

/// Accepts any non-negative band width, including infinity; rejects NaN.
pub fn validate_n_std(n_std: f64) -> Result<f64> {
    if n_std >= 0.0 {
        Ok(n_std)
    } else {
        Err(QualityError::invalid_parameter(
            "n_std",
            n_std,
            "must be greater than or equal to 0",
        ))
    }
}
