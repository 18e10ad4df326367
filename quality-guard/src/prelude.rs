//! Prelude for commonly used types and traits in quality-guard.

pub use crate::checks::{
    DuplicatesCheck, ExpectedSchema, MissingValuesCheck, OutliersCheck, QualityCheck, SchemaCheck,
};
pub use crate::core::{
    CheckDetails, CheckId, CheckResult, DataQualityValidator, ValidationSummary, ValidatorConfig,
};
pub use crate::dataset::{Dataset, TypeCategory};
pub use crate::error::{QualityError, Result};
pub use crate::formatters::{FormatterConfig, HumanFormatter, JsonFormatter, SummaryFormatter};
pub use crate::sources::{CsvOptions, CsvSource};
