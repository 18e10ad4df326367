//! Schema conformance check.

use super::QualityCheck;
use crate::core::{CheckDetails, CheckId, CheckResult};
use crate::dataset::{Dataset, TypeCategory};
use crate::error::{QualityError, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::{debug, instrument};

/// Expected type category of one column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnExpectation {
    pub column: String,
    pub category: TypeCategory,
}

/// Ordered mapping from column name to expected [`TypeCategory`].
///
/// Setting a column twice replaces its category and keeps its original
/// position. Parses from the `name:type, name:type` notation:
///
/// ```rust
/// use quality_guard::checks::ExpectedSchema;
/// use quality_guard::dataset::TypeCategory;
///
/// let schema: ExpectedSchema = "id:integer, price:float".parse().unwrap();
/// assert_eq!(schema.get("price"), Some(TypeCategory::Float));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpectedSchema {
    columns: Vec<ColumnExpectation>,
}

impl ExpectedSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the expectation for `column`.
    pub fn column(mut self, column: impl Into<String>, category: TypeCategory) -> Self {
        self.insert(column, category);
        self
    }

    /// Adds or replaces the expectation for `column` in place.
    pub fn insert(&mut self, column: impl Into<String>, category: TypeCategory) {
        let column = column.into();
        match self.columns.iter_mut().find(|e| e.column == column) {
            Some(existing) => existing.category = category,
            None => self.columns.push(ColumnExpectation { column, category }),
        }
    }

    /// The expected category of `column`, if it has one.
    pub fn get(&self, column: &str) -> Option<TypeCategory> {
        self.columns
            .iter()
            .find(|e| e.column == column)
            .map(|e| e.category)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ColumnExpectation> {
        self.columns.iter()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Captures the current categories of every column of `dataset`.
    pub fn from_dataset(dataset: &Dataset) -> Self {
        dataset
            .schema()
            .fields()
            .iter()
            .map(|field| {
                (
                    field.name().clone(),
                    TypeCategory::from_data_type(field.data_type()),
                )
            })
            .collect()
    }
}

impl<S: Into<String>> FromIterator<(S, TypeCategory)> for ExpectedSchema {
    fn from_iter<I: IntoIterator<Item = (S, TypeCategory)>>(iter: I) -> Self {
        let mut schema = ExpectedSchema::new();
        for (column, category) in iter {
            schema.insert(column, category);
        }
        schema
    }
}

impl FromStr for ExpectedSchema {
    type Err = QualityError;

    fn from_str(s: &str) -> Result<Self> {
        let mut schema = ExpectedSchema::new();
        for item in s.split(',').map(str::trim).filter(|item| !item.is_empty()) {
            let (column, category) = item.split_once(':').ok_or_else(|| {
                QualityError::invalid_parameter("expected_schema", item, "expected 'column:type'")
            })?;
            let column = column.trim();
            if column.is_empty() {
                return Err(QualityError::invalid_parameter(
                    "expected_schema",
                    item,
                    "column name is empty",
                ));
            }
            schema.insert(column, category.parse()?);
        }
        Ok(schema)
    }
}

/// Reports expected columns that are absent or whose category differs.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaCheck {
    expected: ExpectedSchema,
}

impl SchemaCheck {
    pub fn new(expected: ExpectedSchema) -> Self {
        Self { expected }
    }

    pub fn expected(&self) -> &ExpectedSchema {
        &self.expected
    }

    /// Expected columns that are absent or differ, in expected order.
    #[instrument(skip(self, dataset), fields(check.id = "schema", check.expected_columns = self.expected.len()))]
    pub fn mismatched_columns(&self, dataset: &Dataset) -> Result<Vec<String>> {
        let mut mismatched_columns = Vec::new();
        for expectation in self.expected.iter() {
            let matches = dataset.has_column(&expectation.column)
                && dataset.type_of(&expectation.column)? == expectation.category;
            if !matches {
                mismatched_columns.push(expectation.column.clone());
            }
        }

        debug!(
            check.mismatched = mismatched_columns.len(),
            "Evaluated schema conformance"
        );
        Ok(mismatched_columns)
    }
}

impl QualityCheck for SchemaCheck {
    fn id(&self) -> CheckId {
        CheckId::Schema
    }

    fn evaluate(&self, dataset: &Dataset) -> Result<CheckResult> {
        Ok(CheckResult::from_details(CheckDetails::Schema {
            mismatched_columns: self.mismatched_columns(dataset)?,
        }))
    }
}
