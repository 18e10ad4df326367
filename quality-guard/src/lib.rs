//! # quality-guard - Data quality checks for tabular datasets
//!
//! quality-guard inspects an in-memory Arrow table for common quality
//! problems and keeps the latest verdict of each check in a summary that can
//! be rendered for people or machines.
//!
//! ## Quick Start
//!
//! ```rust
//! use quality_guard::prelude::*;
//! use arrow::array::{Float64Array, Int64Array};
//! use arrow::datatypes::{DataType, Field, Schema};
//! use arrow::record_batch::RecordBatch;
//! use std::sync::Arc;
//!
//! # fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
//! let schema = Arc::new(Schema::new(vec![
//!     Field::new("A", DataType::Int64, false),
//!     Field::new("B", DataType::Float64, false),
//! ]));
//! let batch = RecordBatch::try_new(
//!     schema,
//!     vec![
//!         Arc::new(Int64Array::from(vec![1, 1, 2, 2, 3])),
//!         Arc::new(Float64Array::from(vec![10.0, 12.0, 11.0, 13.0, 1000.0])),
//!     ],
//! )?;
//!
//! let validator = DataQualityValidator::new(Dataset::new(batch));
//! assert!(validator.check_missing_values(0.0)?.is_empty());
//! let subset: &[&str] = &["A"];
//! assert_eq!(validator.check_duplicates(Some(subset))?, 2);
//! assert_eq!(validator.check_outliers(&["B"], 1.5)?["B"], vec![4]);
//!
//! let summary = validator.get_validation_summary();
//! assert!(!summary.overall_status);
//! println!("{}", HumanFormatter::new().format(&summary)?);
//! # Ok(())
//! # }
//! ```
//!
//! ## Checks
//!
//! - **Missing values**: columns whose null fraction exceeds a threshold
//! - **Duplicates**: rows repeating an earlier row over a column subset
//! - **Outliers**: numeric values outside `mean ± n_std * std`
//! - **Schema**: columns absent or of an unexpected [`TypeCategory`](dataset::TypeCategory)
//!
//! Each check overwrites its own entry in the validator's result store, and
//! the summary reports the AND of every stored status.
//!
//! ## Logging
//!
//! Check evaluations emit `tracing` spans and events. Install a subscriber
//! with [`logging::setup::init_logging`] or your own.

pub mod checks;
pub mod core;
pub mod dataset;
pub mod error;
pub mod formatters;
pub mod logging;
pub mod prelude;
pub mod sources;

#[cfg(test)]
mod test_fixtures;
