//! Core validation types for quality-guard.
//!
//! ## Overview
//!
//! - **[`DataQualityValidator`]**: owns a dataset and runs checks against it
//! - **[`CheckResult`]**: status plus check-specific [`CheckDetails`]
//! - **[`ResultStore`]**: latest result per [`CheckId`], last write wins
//! - **[`ValidationSummary`]**: aggregated report with an overall status
//! - **[`ValidatorConfig`]**: parameters used by `run_all`
//!
//! ## Architecture
//!
//! ```text
//! DataQualityValidator
//!     ├── Dataset (read-only)
//!     ├── ValidatorConfig
//!     └── ResultStore
//!         ├── missing_values -> CheckResult
//!         ├── duplicates     -> CheckResult
//!         ├── outliers       -> CheckResult
//!         └── schema         -> CheckResult
//! ```
//!
//! ## Overall status
//!
//! The summary's `overall_status` is the AND of every stored status. With no
//! checks run it is `true`.

mod config;
mod result;
mod store;
mod summary;
mod validator;

pub use config::{ValidatorConfig, DEFAULT_MISSING_THRESHOLD, DEFAULT_N_STD};
pub use result::{CheckDetails, CheckId, CheckResult};
pub use store::ResultStore;
pub use summary::ValidationSummary;
pub use validator::DataQualityValidator;
