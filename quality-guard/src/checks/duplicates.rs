//! Duplicate-row check.

use super::QualityCheck;
use crate::core::{CheckDetails, CheckId, CheckResult};
use crate::dataset::Dataset;
use crate::error::Result;
use arrow::array::{ArrayRef, AsArray, Float64Array};
use arrow::compute::cast;
use arrow::datatypes::{DataType, Float64Type};
use arrow::row::{RowConverter, SortField};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Counts rows whose values over a column subset repeat an earlier row.
///
/// The first occurrence of each distinct combination is never counted. Nulls
/// compare equal to nulls.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DuplicatesCheck {
    subset: Option<Vec<String>>,
}

impl DuplicatesCheck {
    /// Compares rows across every column.
    pub fn all_columns() -> Self {
        Self { subset: None }
    }

    /// Compares rows across the given columns only.
    ///
    /// An empty subset compares nothing, so every row after the first counts
    /// as a duplicate.
    pub fn on_columns<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            subset: Some(columns.into_iter().map(Into::into).collect()),
        }
    }

    pub fn subset(&self) -> Option<&[String]> {
        self.subset.as_deref()
    }

    /// Number of duplicate rows in `dataset`.
    #[instrument(skip(self, dataset), fields(check.id = "duplicates", check.subset = ?self.subset))]
    pub fn duplicate_count(&self, dataset: &Dataset) -> Result<usize> {
        let columns: Vec<ArrayRef> = match &self.subset {
            None => dataset.batch().columns().to_vec(),
            Some(names) => {
                dataset.require_columns(names)?;
                names
                    .iter()
                    .map(|name| dataset.column(name).cloned())
                    .collect::<Result<_>>()?
            }
        };

        let duplicate_count = count_duplicate_rows(&columns, dataset.row_count())?;
        debug!(
            data.rows = dataset.row_count(),
            check.duplicate_count = duplicate_count,
            "Evaluated duplicate rows"
        );
        Ok(duplicate_count)
    }
}

impl QualityCheck for DuplicatesCheck {
    fn id(&self) -> CheckId {
        CheckId::Duplicates
    }

    fn evaluate(&self, dataset: &Dataset) -> Result<CheckResult> {
        Ok(CheckResult::from_details(CheckDetails::Duplicates {
            duplicate_count: self.duplicate_count(dataset)?,
        }))
    }
}

/// Counts rows in `columns` that repeat an earlier row.
///
/// Rows are encoded with Arrow's row format, so equality is exact value
/// equality for every supported data type. Float columns are normalized first:
/// `NaN` is missing like null, and `-0.0` equals `0.0`.
pub fn count_duplicate_rows(columns: &[ArrayRef], row_count: usize) -> Result<usize> {
    if row_count == 0 {
        return Ok(0);
    }
    if columns.is_empty() {
        return Ok(row_count - 1);
    }

    let columns = columns
        .iter()
        .map(normalize_floats)
        .collect::<Result<Vec<_>>>()?;
    let fields = columns
        .iter()
        .map(|column| SortField::new(column.data_type().clone()))
        .collect();
    let converter = RowConverter::new(fields)?;
    let rows = converter.convert_columns(&columns)?;

    let mut seen = HashSet::with_capacity(rows.num_rows());
    Ok(rows.iter().filter(|row| !seen.insert(*row)).count())
}

fn normalize_floats(column: &ArrayRef) -> Result<ArrayRef> {
    match column.data_type() {
        DataType::Float16 | DataType::Float32 | DataType::Float64 => {
            let values = cast(column.as_ref(), &DataType::Float64)?;
            let normalized: Float64Array = values
                .as_primitive::<Float64Type>()
                .iter()
                .map(|value| {
                    value
                        .filter(|v| !v.is_nan())
                        .map(|v| if v == 0.0 { 0.0 } else { v })
                })
                .collect();
            let normalized: ArrayRef = Arc::new(normalized);
            Ok(normalized)
        }
        _ => Ok(Arc::clone(column)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::QualityError;
    use crate::test_fixtures::{
        create_customer_dataset, create_empty_dataset, create_int_dataset,
        create_numeric_dataset, create_transaction_dataset,
    };

    fn duplicate_count(result: &CheckResult) -> usize {
        match result.details {
            CheckDetails::Duplicates { duplicate_count } => duplicate_count,
            ref other => panic!("unexpected details: {other:?}"),
        }
    }

    #[test]
    fn test_only_later_repeats_count() {
        let dataset = create_int_dataset("A", vec![1, 1, 2, 2, 3]);
        let result = DuplicatesCheck::all_columns().evaluate(&dataset).unwrap();
        assert_eq!(duplicate_count(&result), 2);
        assert!(!result.status);
    }

    #[test]
    fn test_full_row_and_subset_duplicates() {
        let dataset = create_transaction_dataset();

        let full = DuplicatesCheck::all_columns().evaluate(&dataset).unwrap();
        assert_eq!(duplicate_count(&full), 2);

        let by_status = DuplicatesCheck::on_columns(["status"])
            .evaluate(&dataset)
            .unwrap();
        assert_eq!(duplicate_count(&by_status), 7);

        let by_user = DuplicatesCheck::on_columns(["user_id", "amount"])
            .evaluate(&dataset)
            .unwrap();
        assert_eq!(duplicate_count(&by_user), 2);
    }

    #[test]
    fn test_unique_rows_pass() {
        let dataset = create_customer_dataset();
        let result = DuplicatesCheck::all_columns().evaluate(&dataset).unwrap();
        assert!(result.status);
        assert_eq!(duplicate_count(&result), 0);
    }

    #[test]
    fn test_nulls_compare_equal() {
        let dataset = create_numeric_dataset("v", vec![None, Some(1.0), None, Some(1.0)]);
        let result = DuplicatesCheck::all_columns().evaluate(&dataset).unwrap();
        assert_eq!(duplicate_count(&result), 2);
    }

    #[test]
    fn test_float_missing_and_signed_zero_compare_equal() {
        let cases = [
            vec![Some(f64::NAN), None],
            vec![Some(f64::NAN), Some(-f64::NAN)],
            vec![Some(0.0), Some(-0.0)],
        ];
        for values in cases {
            let dataset = create_numeric_dataset("v", values.clone());
            let result = DuplicatesCheck::all_columns().evaluate(&dataset).unwrap();
            assert_eq!(duplicate_count(&result), 1, "values: {values:?}");
        }

        let dataset = create_numeric_dataset("v", vec![Some(0.0), Some(1.0), Some(f64::NAN)]);
        let result = DuplicatesCheck::all_columns().evaluate(&dataset).unwrap();
        assert_eq!(duplicate_count(&result), 0);
    }

    #[test]
    fn test_unknown_subset_column() {
        let dataset = create_transaction_dataset();
        let err = DuplicatesCheck::on_columns(["status", "region"])
            .evaluate(&dataset)
            .unwrap_err();
        assert!(matches!(err, QualityError::ColumnNotFound { column } if column == "region"));
    }

    #[test]
    fn test_empty_subset_and_empty_dataset() {
        let dataset = create_int_dataset("A", vec![1, 2, 3]);
        let result = DuplicatesCheck::on_columns(Vec::<String>::new())
            .evaluate(&dataset)
            .unwrap();
        assert_eq!(duplicate_count(&result), 2);

        let empty = create_empty_dataset();
        let result = DuplicatesCheck::all_columns().evaluate(&empty).unwrap();
        assert_eq!(duplicate_count(&result), 0);
        assert!(result.status);
    }
}
