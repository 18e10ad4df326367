//! Validator configuration.

use crate::checks::{validate_n_std, validate_threshold, ExpectedSchema};
use crate::error::{QualityError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default maximum acceptable missing fraction per column.
pub const DEFAULT_MISSING_THRESHOLD: f64 = 0.1;

/// Default outlier band width, in sample standard deviations.
pub const DEFAULT_N_STD: f64 = 3.0;

/// Parameters used by [`DataQualityValidator::run_all`](super::DataQualityValidator::run_all).
///
/// Every field has a default, so a configuration document only needs the
/// values it overrides:
///
/// ```rust
/// use quality_guard::core::ValidatorConfig;
///
/// let config = ValidatorConfig::from_json_str(r#"{"n_std": 2.5}"#).unwrap();
/// assert_eq!(config.n_std, 2.5);
/// assert_eq!(config.missing_threshold, 0.1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidatorConfig {
    /// Missing fraction a column may reach before it is flagged
    pub missing_threshold: f64,
    /// Outlier band half-width in standard deviations
    pub n_std: f64,
    /// Schema to enforce; the schema check is skipped when absent
    pub expected_schema: Option<ExpectedSchema>,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            missing_threshold: DEFAULT_MISSING_THRESHOLD,
            n_std: DEFAULT_N_STD,
            expected_schema: None,
        }
    }
}

impl ValidatorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the missing-value threshold.
    pub fn with_missing_threshold(mut self, threshold: f64) -> Self {
        self.missing_threshold = threshold;
        self
    }

    /// Sets the outlier band width.
    pub fn with_n_std(mut self, n_std: f64) -> Self {
        self.n_std = n_std;
        self
    }

    /// Sets the schema enforced by `run_all`.
    pub fn with_expected_schema(mut self, schema: ExpectedSchema) -> Self {
        self.expected_schema = Some(schema);
        self
    }

    /// Applies the same range rules as the checks themselves.
    pub fn validate(&self) -> Result<()> {
        validate_threshold(self.missing_threshold)?;
        validate_n_std(self.n_std)?;
        Ok(())
    }

    /// Parses and validates a JSON configuration document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| QualityError::Configuration(format!("invalid validator config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads a JSON configuration file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::TypeCategory;

    #[test]
    fn test_defaults() {
        let config = ValidatorConfig::default();
        assert_eq!(config.missing_threshold, 0.1);
        assert_eq!(config.n_std, 3.0);
        assert!(config.expected_schema.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_and_validation() {
        let config = ValidatorConfig::new().with_missing_threshold(1.2);
        assert!(matches!(
            config.validate(),
            Err(QualityError::InvalidParameter { .. })
        ));

        let config = ValidatorConfig::new().with_n_std(-1.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_json_with_schema() {
        let config = ValidatorConfig::from_json_str(
            r#"{
                "missing_threshold": 0.25,
                "expected_schema": [
                    {"column": "id", "category": "integer"},
                    {"column": "name", "category": "text"}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(config.missing_threshold, 0.25);
        let schema = config.expected_schema.unwrap();
        assert_eq!(schema.len(), 2);
        assert_eq!(schema.get("id"), Some(TypeCategory::Integer));
    }

    #[test]
    fn test_json_rejects_bad_documents() {
        assert!(matches!(
            ValidatorConfig::from_json_str("{not json"),
            Err(QualityError::Configuration(_))
        ));
        assert!(matches!(
            ValidatorConfig::from_json_str(r#"{"threshold": 0.2}"#),
            Err(QualityError::Configuration(_))
        ));
        assert!(matches!(
            ValidatorConfig::from_json_str(r#"{"missing_threshold": 2.0}"#),
            Err(QualityError::InvalidParameter { .. })
        ));
    }
}
