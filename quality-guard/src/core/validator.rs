//! The validation engine.

use super::{CheckDetails, CheckResult, ResultStore, ValidationSummary, ValidatorConfig};
use crate::checks::{
    DuplicatesCheck, ExpectedSchema, MissingValuesCheck, OutliersCheck, QualityCheck, SchemaCheck,
};
use crate::dataset::Dataset;
use crate::error::Result;
use std::collections::BTreeMap;
use tracing::{info, instrument};

/// Runs quality checks against one dataset and accumulates their results.
///
/// Every check overwrites its own entry in the validator's [`ResultStore`];
/// [`get_validation_summary`](Self::get_validation_summary) aggregates whatever
/// has run so far. Validators never share state, and a validator is `Sync`,
/// so independent checks may run from several threads at once.
///
/// # Example
///
/// ```rust
/// use quality_guard::core::DataQualityValidator;
/// use quality_guard::dataset::Dataset;
/// use arrow::array::Int64Array;
/// use arrow::datatypes::{DataType, Field, Schema};
/// use arrow::record_batch::RecordBatch;
/// use std::sync::Arc;
///
/// let schema = Arc::new(Schema::new(vec![Field::new("A", DataType::Int64, false)]));
/// let batch = RecordBatch::try_new(
///     schema,
///     vec![Arc::new(Int64Array::from(vec![1, 1, 2, 2, 3]))],
/// )?;
///
/// let validator = DataQualityValidator::new(Dataset::new(batch));
/// assert!(validator.get_validation_summary().overall_status);
///
/// assert_eq!(validator.check_duplicates(None)?, 2);
/// assert!(!validator.get_validation_summary().overall_status);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct DataQualityValidator {
    dataset: Dataset,
    config: ValidatorConfig,
    results: ResultStore,
}

impl DataQualityValidator {
    /// Creates a validator with the default configuration.
    pub fn new(dataset: Dataset) -> Self {
        Self {
            dataset,
            config: ValidatorConfig::default(),
            results: ResultStore::new(),
        }
    }

    /// Creates a validator with a custom configuration.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` if the configured threshold or band width is out of range.
    pub fn with_config(dataset: Dataset, config: ValidatorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            dataset,
            config,
            results: ResultStore::new(),
        })
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    pub fn results(&self) -> &ResultStore {
        &self.results
    }

    /// Evaluates `check` and stores its result. A failing check stores nothing.
    pub fn run_check(&self, check: &dyn QualityCheck) -> Result<CheckResult> {
        let result = check.evaluate(&self.dataset)?;
        self.results.record(result.clone());
        Ok(result)
    }

    /// Columns whose missing fraction exceeds `threshold`, with their fractions.
    pub fn check_missing_values(&self, threshold: f64) -> Result<BTreeMap<String, f64>> {
        let flagged = MissingValuesCheck::new(threshold)?.flagged_columns(&self.dataset)?;
        self.record(CheckDetails::MissingValues(flagged.clone()));
        Ok(flagged)
    }

    /// Number of rows repeating an earlier row over `subset` (all columns when `None`).
    pub fn check_duplicates(&self, subset: Option<&[&str]>) -> Result<usize> {
        let check = match subset {
            None => DuplicatesCheck::all_columns(),
            Some(columns) => DuplicatesCheck::on_columns(columns.iter().copied()),
        };
        let duplicate_count = check.duplicate_count(&self.dataset)?;
        self.record(CheckDetails::Duplicates { duplicate_count });
        Ok(duplicate_count)
    }

    /// Outlier row indices per numeric column among `columns`.
    pub fn check_outliers(
        &self,
        columns: &[&str],
        n_std: f64,
    ) -> Result<BTreeMap<String, Vec<usize>>> {
        let outliers = OutliersCheck::new(columns.iter().copied(), n_std)?
            .find_outliers(&self.dataset)?;
        self.record(CheckDetails::Outliers(outliers.clone()));
        Ok(outliers)
    }

    /// Expected columns that are absent or of a different type category.
    pub fn validate_schema(&self, expected: &ExpectedSchema) -> Result<Vec<String>> {
        let mismatched_columns =
            SchemaCheck::new(expected.clone()).mismatched_columns(&self.dataset)?;
        self.record(CheckDetails::Schema {
            mismatched_columns: mismatched_columns.clone(),
        });
        Ok(mismatched_columns)
    }

    /// Aggregates the stored results. Has no side effects.
    pub fn get_validation_summary(&self) -> ValidationSummary {
        ValidationSummary::from_store(
            &self.results,
            self.dataset.row_count(),
            self.dataset.column_count(),
        )
    }

    /// Runs every check with the configured parameters and returns the summary.
    ///
    /// Outliers are checked on all numeric columns; the schema check runs only
    /// when the configuration has an expected schema.
    #[instrument(skip(self), fields(data.rows = self.dataset.row_count(), data.columns = self.dataset.column_count()))]
    pub fn run_all(&self) -> Result<ValidationSummary> {
        self.run_check(&MissingValuesCheck::new(self.config.missing_threshold)?)?;
        self.run_check(&DuplicatesCheck::all_columns())?;
        self.run_check(&OutliersCheck::new(
            self.dataset.numeric_columns(),
            self.config.n_std,
        )?)?;
        if let Some(expected) = &self.config.expected_schema {
            self.run_check(&SchemaCheck::new(expected.clone()))?;
        }

        let summary = self.get_validation_summary();
        info!(
            validation.passed = summary.overall_status,
            validation.failed_checks = summary.failed_checks().len(),
            "Completed all checks"
        );
        Ok(summary)
    }

    fn record(&self, details: CheckDetails) {
        self.results.record(CheckResult::from_details(details));
    }
}
