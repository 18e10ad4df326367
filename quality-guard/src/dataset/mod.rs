//! Read-only view over the tabular data under validation.
//!
//! A [`Dataset`] wraps a single Arrow [`RecordBatch`]. Loaders that produce
//! several batches go through [`Dataset::try_from_batches`], which concatenates
//! them so row indices are stable positions across the whole table.

mod types;

pub use types::TypeCategory;

use crate::error::{QualityError, Result};
use arrow::array::{Array, ArrayRef, AsArray};
use arrow::compute::{cast, concat_batches};
use arrow::datatypes::{DataType, Float64Type, SchemaRef};
use arrow::record_batch::RecordBatch;

/// An immutable, in-memory table of named, typed columns.
#[derive(Debug, Clone)]
pub struct Dataset {
    batch: RecordBatch,
}

impl Dataset {
    /// Wraps an existing record batch.
    pub fn new(batch: RecordBatch) -> Self {
        Self { batch }
    }

    /// Builds a dataset from a sequence of batches sharing `schema`.
    ///
    /// An empty batch list yields an empty dataset with the given columns.
    pub fn try_from_batches(schema: SchemaRef, batches: &[RecordBatch]) -> Result<Self> {
        let batch = match batches {
            [] => RecordBatch::new_empty(schema),
            [single] => single.clone(),
            _ => concat_batches(&schema, batches)?,
        };
        Ok(Self { batch })
    }

    /// The Arrow schema of the dataset.
    pub fn schema(&self) -> SchemaRef {
        self.batch.schema()
    }

    /// The underlying record batch.
    pub fn batch(&self) -> &RecordBatch {
        &self.batch
    }

    pub fn row_count(&self) -> usize {
        self.batch.num_rows()
    }

    pub fn column_count(&self) -> usize {
        self.batch.num_columns()
    }

    /// Column names in dataset order.
    pub fn column_names(&self) -> Vec<String> {
        self.batch
            .schema()
            .fields()
            .iter()
            .map(|field| field.name().clone())
            .collect()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.batch.schema().column_with_name(name).is_some()
    }

    /// Returns the canonical type category of a column.
    pub fn type_of(&self, name: &str) -> Result<TypeCategory> {
        let schema = self.batch.schema();
        let (_, field) = schema
            .column_with_name(name)
            .ok_or_else(|| QualityError::column_not_found(name))?;
        Ok(TypeCategory::from_data_type(field.data_type()))
    }

    /// Names of the integer and float columns, in dataset order.
    pub fn numeric_columns(&self) -> Vec<String> {
        self.batch
            .schema()
            .fields()
            .iter()
            .filter(|field| TypeCategory::from_data_type(field.data_type()).is_numeric())
            .map(|field| field.name().clone())
            .collect()
    }

    /// Returns the array backing a column.
    pub fn column(&self, name: &str) -> Result<&ArrayRef> {
        self.batch
            .column_by_name(name)
            .ok_or_else(|| QualityError::column_not_found(name))
    }

    /// Fails with the first name in `names` that is not a dataset column.
    pub fn require_columns<S: AsRef<str>>(&self, names: &[S]) -> Result<()> {
        match names.iter().find(|name| !self.has_column(name.as_ref())) {
            Some(missing) => Err(QualityError::column_not_found(missing.as_ref())),
            None => Ok(()),
        }
    }

    /// Counts the missing cells of a column.
    ///
    /// Nulls are missing; in floating point columns `NaN` is missing too.
    pub fn missing_count(&self, name: &str) -> Result<usize> {
        let column = self.column(name)?;
        match column.data_type() {
            DataType::Null => Ok(column.len()),
            DataType::Float16 | DataType::Float32 | DataType::Float64 => {
                let values = cast(column.as_ref(), &DataType::Float64)?;
                Ok(values
                    .as_primitive::<Float64Type>()
                    .iter()
                    .filter(|value| value.map_or(true, f64::is_nan))
                    .count())
            }
            _ => Ok(column.null_count()),
        }
    }

    /// Reads a numeric column as `f64`, with `None` for missing cells.
    ///
    /// Fails with `InvalidParameter` if the column is not numeric.
    pub fn numeric_values(&self, name: &str) -> Result<Vec<Option<f64>>> {
        let category = self.type_of(name)?;
        if !category.is_numeric() {
            return Err(QualityError::invalid_parameter(
                "column",
                name,
                format!("expected a numeric column, found {category}"),
            ));
        }

        let values = cast(self.column(name)?.as_ref(), &DataType::Float64)?;
        Ok(values
            .as_primitive::<Float64Type>()
            .iter()
            .map(|value| value.filter(|v| !v.is_nan()))
            .collect())
    }

    /// Returns the first `n` rows as a new dataset.
    pub fn head(&self, n: usize) -> Dataset {
        let length = n.min(self.row_count());
        Dataset::new(self.batch.slice(0, length))
    }
}

impl From<RecordBatch> for Dataset {
    fn from(batch: RecordBatch) -> Self {
        Self::new(batch)
    }
}
