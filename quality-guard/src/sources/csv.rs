//! CSV file source implementation.

use crate::dataset::Dataset;
use crate::error::{QualityError, Result};
use arrow::csv::reader::Format;
use arrow::csv::ReaderBuilder;
use arrow::datatypes::SchemaRef;
use arrow::record_batch::RecordBatch;
use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Options for configuring CSV file reading.
#[derive(Debug, Clone)]
pub struct CsvOptions {
    /// Whether the CSV file has a header row
    pub has_header: bool,
    /// Field delimiter (default: ',')
    pub delimiter: u8,
    /// Quote character (default: '"')
    pub quote: u8,
    /// Schema to use (if None, will be inferred)
    pub schema: Option<SchemaRef>,
    /// Maximum records to read for schema inference
    pub schema_infer_max_records: usize,
    /// Rows decoded per record batch
    pub batch_size: usize,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            has_header: true,
            delimiter: b',',
            quote: b'"',
            schema: None,
            schema_infer_max_records: 1000,
            batch_size: 8192,
        }
    }
}

impl CsvOptions {
    fn format(&self) -> Format {
        Format::default()
            .with_header(self.has_header)
            .with_delimiter(self.delimiter)
            .with_quote(self.quote)
    }
}

/// A CSV file that loads into a [`Dataset`].
///
/// # Examples
///
/// ```rust,no_run
/// use quality_guard::sources::{CsvOptions, CsvSource};
///
/// # fn example() -> quality_guard::error::Result<()> {
/// let dataset = CsvSource::new("data/users.csv").load()?;
///
/// let tsv = CsvSource::with_options(
///     "data/users.tsv",
///     CsvOptions { delimiter: b'\t', ..Default::default() },
/// )
/// .load()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct CsvSource {
    path: PathBuf,
    options: CsvOptions,
}

impl CsvSource {
    /// Creates a source with default options.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_options(path, CsvOptions::default())
    }

    pub fn with_options(path: impl Into<PathBuf>, options: CsvOptions) -> Self {
        Self {
            path: path.into(),
            options,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn options(&self) -> &CsvOptions {
        &self.options
    }

    /// Reads the whole file into memory.
    #[instrument(skip(self), fields(source.type = "CSV", source.path = %self.path.display()))]
    pub fn load(&self) -> Result<Dataset> {
        let file = File::open(&self.path).map_err(|e| {
            QualityError::data_source_with_source(
                "CSV",
                format!("failed to open {}", self.path.display()),
                Box::new(e),
            )
        })?;

        let dataset = read_csv(BufReader::new(file), &self.options)?;
        info!(
            data.rows = dataset.row_count(),
            data.columns = dataset.column_count(),
            "Loaded CSV dataset"
        );
        Ok(dataset)
    }
}

/// Reads CSV from any seekable reader, inferring the schema when none is given.
pub fn read_csv<R: Read + Seek>(mut reader: R, options: &CsvOptions) -> Result<Dataset> {
    let format = options.format();

    let schema = match &options.schema {
        Some(schema) => Arc::clone(schema),
        None => {
            let (schema, records) = format
                .infer_schema(&mut reader, Some(options.schema_infer_max_records))
                .map_err(|e| csv_error("failed to infer schema", e))?;
            debug!(inference.records = records, "Inferred CSV schema");
            reader.rewind()?;
            Arc::new(schema)
        }
    };

    let csv_reader = ReaderBuilder::new(Arc::clone(&schema))
        .with_format(format)
        .with_batch_size(options.batch_size)
        .build(reader)
        .map_err(|e| csv_error("failed to create reader", e))?;

    let batches = csv_reader
        .collect::<std::result::Result<Vec<RecordBatch>, _>>()
        .map_err(|e| csv_error("failed to decode records", e))?;

    Dataset::try_from_batches(schema, &batches)
}

fn csv_error(message: &str, error: arrow::error::ArrowError) -> QualityError {
    QualityError::data_source_with_source("CSV", message, Box::new(error))
}
