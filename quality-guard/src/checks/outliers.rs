//! Standard-deviation outlier check.

use super::{validate_n_std, QualityCheck};
use crate::core::{CheckDetails, CheckId, CheckResult};
use crate::dataset::Dataset;
use crate::error::Result;
use std::collections::BTreeMap;
use tracing::{debug, instrument};

/// Mean and sample standard deviation over the non-missing values of a column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnStats {
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation (n - 1 denominator)
    pub std_dev: f64,
}

impl ColumnStats {
    /// Returns `None` when fewer than two values are present, since the sample
    /// standard deviation is undefined.
    pub fn from_values(values: &[Option<f64>]) -> Option<Self> {
        let present: Vec<f64> = values.iter().flatten().copied().collect();
        let count = present.len();
        if count < 2 {
            return None;
        }

        let (mut mean, mut std_dev) = scaled_moments(&present, 1.0);
        if !(mean.is_finite() && std_dev.is_finite()) {
            // Large finite values overflow the sums; retry relative to the largest magnitude.
            let scale = present.iter().fold(0.0_f64, |max, v| max.max(v.abs()));
            if scale.is_finite() && scale > 0.0 {
                (mean, std_dev) = scaled_moments(&present, scale);
            }
        }

        Some(Self {
            count,
            mean,
            std_dev,
        })
    }

    /// Inclusive band `[mean - n_std·σ, mean + n_std·σ]`.
    pub fn bounds(&self, n_std: f64) -> (f64, f64) {
        let width = n_std * self.std_dev;
        (self.mean - width, self.mean + width)
    }
}

/// Two-pass mean and sample standard deviation of `values / scale`, scaled back.
fn scaled_moments(values: &[f64], scale: f64) -> (f64, f64) {
    let count = values.len() as f64;
    let mean = values.iter().map(|v| v / scale).sum::<f64>() / count;
    let squared_deviations: f64 = values.iter().map(|v| (v / scale - mean).powi(2)).sum();
    let std_dev = (squared_deviations / (count - 1.0)).sqrt();
    (mean * scale, std_dev * scale)
}

/// Row indices whose value lies strictly outside the `n_std` band, ascending.
///
/// Missing values are never outliers. A column with fewer than two values or a
/// zero (or non-finite) standard deviation has no outliers.
pub fn outlier_indices(values: &[Option<f64>], n_std: f64) -> Vec<usize> {
    let Some(stats) = ColumnStats::from_values(values) else {
        return Vec::new();
    };
    if !stats.std_dev.is_finite() || stats.std_dev == 0.0 {
        return Vec::new();
    }

    let (lower, upper) = stats.bounds(n_std);
    values
        .iter()
        .enumerate()
        .filter_map(|(index, value)| match value {
            Some(v) if *v < lower || *v > upper => Some(index),
            _ => None,
        })
        .collect()
}

/// Flags numeric values more than `n_std` sample standard deviations from
/// their column mean.
///
/// Requested columns that are not numeric are skipped without an entry.
#[derive(Debug, Clone, PartialEq)]
pub struct OutliersCheck {
    columns: Vec<String>,
    n_std: f64,
}

impl OutliersCheck {
    /// Creates the check.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` if `n_std` is negative or NaN.
    pub fn new<I, S>(columns: I, n_std: f64) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(Self {
            columns: columns.into_iter().map(Into::into).collect(),
            n_std: validate_n_std(n_std)?,
        })
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn n_std(&self) -> f64 {
        self.n_std
    }

    /// Outlier row indices for every numeric requested column.
    #[instrument(skip(self, dataset), fields(check.id = "outliers", check.n_std = self.n_std))]
    pub fn find_outliers(&self, dataset: &Dataset) -> Result<BTreeMap<String, Vec<usize>>> {
        dataset.require_columns(&self.columns)?;

        let mut outliers = BTreeMap::new();
        for column in &self.columns {
            let category = dataset.type_of(column)?;
            if !category.is_numeric() {
                debug!(check.column = %column, column.category = %category, "Skipping non-numeric column");
                continue;
            }

            let values = dataset.numeric_values(column)?;
            let indices = outlier_indices(&values, self.n_std);
            debug!(check.column = %column, check.outliers = indices.len(), "Evaluated outliers");
            outliers.insert(column.clone(), indices);
        }
        Ok(outliers)
    }
}

impl QualityCheck for OutliersCheck {
    fn id(&self) -> CheckId {
        CheckId::Outliers
    }

    fn evaluate(&self, dataset: &Dataset) -> Result<CheckResult> {
        Ok(CheckResult::from_details(CheckDetails::Outliers(
            self.find_outliers(dataset)?,
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::QualityError;
    use crate::test_fixtures::{create_customer_dataset, create_int_dataset, create_numeric_dataset};

    fn outliers(result: &CheckResult) -> &BTreeMap<String, Vec<usize>> {
        match &result.details {
            CheckDetails::Outliers(outliers) => outliers,
            other => panic!("unexpected details: {other:?}"),
        }
    }

    #[test]
    fn test_column_stats_sample_std() {
        let stats = ColumnStats::from_values(&[Some(2.0), Some(4.0), None, Some(6.0)]).unwrap();
        assert_eq!(stats.count, 3);
        assert_eq!(stats.mean, 4.0);
        assert_eq!(stats.std_dev, 2.0);
        assert_eq!(stats.bounds(1.5), (1.0, 7.0));

        assert!(ColumnStats::from_values(&[Some(1.0), None]).is_none());
    }

    #[test]
    fn test_large_finite_values_do_not_overflow() {
        let values = vec![Some(1e308), Some(1e308), Some(1e308), Some(1e308), Some(-1e308)];
        let stats = ColumnStats::from_values(&values).unwrap();
        assert!(stats.mean.is_finite());
        assert!(stats.std_dev.is_finite());

        let dataset = create_numeric_dataset("v", values);
        let result = OutliersCheck::new(["v"], 1.0).unwrap().evaluate(&dataset).unwrap();
        assert_eq!(outliers(&result)["v"], vec![4]);
    }

    #[test]
    fn test_infinite_values_have_no_outliers() {
        let values = [Some(1.0), Some(f64::INFINITY), Some(2.0)];
        assert!(outlier_indices(&values, 1.0).is_empty());
    }

    #[test]
    fn test_single_extreme_value() {
        let dataset = create_int_dataset("B", vec![10, 12, 11, 13, 1000]);

        // With five samples no value can exceed ~1.79 sample standard deviations.
        let result = OutliersCheck::new(["B"], 2.0).unwrap().evaluate(&dataset).unwrap();
        assert_eq!(outliers(&result)["B"], Vec::<usize>::new());
        assert!(result.status);

        let result = OutliersCheck::new(["B"], 1.5).unwrap().evaluate(&dataset).unwrap();
        assert_eq!(outliers(&result)["B"], vec![4]);
        assert!(!result.status);
    }

    #[test]
    fn test_zero_width_band_flags_everything_off_the_mean() {
        let dataset = create_numeric_dataset(
            "v",
            vec![Some(1.0), Some(2.0), Some(3.0), None, Some(2.0)],
        );
        let result = OutliersCheck::new(["v"], 0.0).unwrap().evaluate(&dataset).unwrap();
        assert_eq!(outliers(&result)["v"], vec![0, 2]);
    }

    #[test]
    fn test_degenerate_columns_have_no_outliers() {
        let constant = create_int_dataset("c", vec![5, 5, 5, 5]);
        let result = OutliersCheck::new(["c"], 0.0).unwrap().evaluate(&constant).unwrap();
        assert!(outliers(&result)["c"].is_empty());

        let sparse = create_numeric_dataset("s", vec![None, Some(100.0), None]);
        let result = OutliersCheck::new(["s"], 1.0).unwrap().evaluate(&sparse).unwrap();
        assert!(outliers(&result)["s"].is_empty());
        assert!(result.status);
    }

    #[test]
    fn test_text_columns_are_skipped() {
        let dataset = create_customer_dataset();
        let result = OutliersCheck::new(["name", "email"], 3.0)
            .unwrap()
            .evaluate(&dataset)
            .unwrap();
        assert!(outliers(&result).is_empty());
        assert!(result.status);

        let result = OutliersCheck::new(["name", "age"], 3.0)
            .unwrap()
            .evaluate(&dataset)
            .unwrap();
        let keys: Vec<_> = outliers(&result).keys().cloned().collect();
        assert_eq!(keys, vec!["age"]);
    }

    #[test]
    fn test_missing_column_fails_before_computation() {
        let dataset = create_customer_dataset();
        let err = OutliersCheck::new(["age", "height"], 3.0)
            .unwrap()
            .evaluate(&dataset)
            .unwrap_err();
        assert!(matches!(err, QualityError::ColumnNotFound { column } if column == "height"));
    }

    #[test]
    fn test_negative_n_std_is_rejected() {
        let err = OutliersCheck::new(["age"], -1.0).unwrap_err();
        assert!(matches!(err, QualityError::InvalidParameter { .. }));
    }
}
