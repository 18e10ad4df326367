//! Missing-value check.

use super::{validate_threshold, QualityCheck};
use crate::core::{CheckDetails, CheckId, CheckResult};
use crate::dataset::Dataset;
use crate::error::Result;
use std::collections::BTreeMap;
use tracing::{debug, instrument};

/// Flags columns whose missing fraction is strictly greater than a threshold.
///
/// A column exactly at the threshold is not flagged. On an empty dataset every
/// fraction is defined as 0.
#[derive(Debug, Clone, PartialEq)]
pub struct MissingValuesCheck {
    threshold: f64,
}

impl MissingValuesCheck {
    /// Creates the check.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` if `threshold` is outside `[0, 1]`. Values are never clamped.
    pub fn new(threshold: f64) -> Result<Self> {
        Ok(Self {
            threshold: validate_threshold(threshold)?,
        })
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Missing fraction of every column, in dataset order.
    pub fn missing_fractions(dataset: &Dataset) -> Result<Vec<(String, f64)>> {
        let total_rows = dataset.row_count();
        dataset
            .column_names()
            .into_iter()
            .map(|name| {
                let fraction = if total_rows == 0 {
                    0.0
                } else {
                    dataset.missing_count(&name)? as f64 / total_rows as f64
                };
                Ok((name, fraction))
            })
            .collect()
    }

    /// Columns above the threshold, mapped to their missing fraction.
    #[instrument(skip(self, dataset), fields(check.id = "missing_values", check.threshold = self.threshold))]
    pub fn flagged_columns(&self, dataset: &Dataset) -> Result<BTreeMap<String, f64>> {
        let flagged: BTreeMap<String, f64> = Self::missing_fractions(dataset)?
            .into_iter()
            .filter(|(_, fraction)| *fraction > self.threshold)
            .collect();

        debug!(
            data.rows = dataset.row_count(),
            check.flagged_columns = flagged.len(),
            "Evaluated missing values"
        );
        Ok(flagged)
    }
}

impl QualityCheck for MissingValuesCheck {
    fn id(&self) -> CheckId {
        CheckId::MissingValues
    }

    fn evaluate(&self, dataset: &Dataset) -> Result<CheckResult> {
        Ok(CheckResult::from_details(CheckDetails::MissingValues(
            self.flagged_columns(dataset)?,
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::QualityError;
    use crate::test_fixtures::{create_customer_dataset, create_empty_dataset, create_int_dataset};

    fn flagged(result: &CheckResult) -> &BTreeMap<String, f64> {
        match &result.details {
            CheckDetails::MissingValues(flagged) => flagged,
            other => panic!("unexpected details: {other:?}"),
        }
    }

    #[test]
    fn test_flags_columns_above_threshold() {
        let dataset = create_customer_dataset();
        let result = MissingValuesCheck::new(0.25).unwrap().evaluate(&dataset).unwrap();

        assert!(!result.status);
        let flagged = flagged(&result);
        let names: Vec<_> = flagged.keys().cloned().collect();
        assert_eq!(names, vec!["email", "name", "phone", "score"]);
        assert!((flagged["phone"] - 0.4).abs() < 1e-12);
        assert!(!flagged.contains_key("age"));
    }

    #[test]
    fn test_fraction_equal_to_threshold_is_not_flagged() {
        let dataset = create_customer_dataset();
        // phone is exactly 40% missing
        let result = MissingValuesCheck::new(0.4).unwrap().evaluate(&dataset).unwrap();
        assert!(result.status);
        assert!(flagged(&result).is_empty());
    }

    #[test]
    fn test_zero_threshold_with_complete_data() {
        let dataset = create_int_dataset("A", vec![1, 1, 2, 2, 3]);
        let result = MissingValuesCheck::new(0.0).unwrap().evaluate(&dataset).unwrap();
        assert!(result.status);
        assert!(flagged(&result).is_empty());
    }

    #[test]
    fn test_empty_dataset_has_zero_fractions() {
        let dataset = create_empty_dataset();
        let fractions = MissingValuesCheck::missing_fractions(&dataset).unwrap();
        assert_eq!(
            fractions,
            vec![("id".to_string(), 0.0), ("label".to_string(), 0.0)]
        );

        let result = MissingValuesCheck::new(0.0).unwrap().evaluate(&dataset).unwrap();
        assert!(result.status);
    }

    #[test]
    fn test_out_of_range_threshold_is_rejected() {
        for threshold in [-0.1, 1.5, f64::NAN] {
            let err = MissingValuesCheck::new(threshold).unwrap_err();
            assert!(matches!(err, QualityError::InvalidParameter { .. }));
        }
    }
}
