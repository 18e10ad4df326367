//! Summary formatting for people and machines.
//!
//! # Examples
//!
//! ```rust
//! use quality_guard::core::ResultStore;
//! use quality_guard::core::ValidationSummary;
//! use quality_guard::formatters::{FormatterConfig, HumanFormatter, JsonFormatter, SummaryFormatter};
//!
//! let summary = ValidationSummary::from_store(&ResultStore::new(), 0, 0);
//!
//! let text = HumanFormatter::with_config(FormatterConfig::minimal())
//!     .format(&summary)
//!     .unwrap();
//! assert!(text.contains("Validation PASSED"));
//!
//! let json = JsonFormatter::new().with_pretty(false).format(&summary).unwrap();
//! assert!(json.contains("\"overall_status\":true"));
//! ```

use crate::core::{CheckDetails, CheckResult, ValidationSummary};
use crate::error::{QualityError, Result};
use std::fmt::Write;

/// Configuration options for formatting validation summaries.
#[derive(Debug, Clone)]
pub struct FormatterConfig {
    /// Whether to use colorized output (human formatter)
    pub use_colors: bool,
    /// Whether to include the summary timestamp
    pub include_timestamps: bool,
    /// Whether to list individual findings under each check
    pub include_details: bool,
    /// Maximum findings listed per check (`None` for all)
    pub max_items: Option<usize>,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            use_colors: true,
            include_timestamps: true,
            include_details: true,
            max_items: None,
        }
    }
}

impl FormatterConfig {
    /// Only the verdict and per-check status lines.
    pub fn minimal() -> Self {
        Self {
            use_colors: false,
            include_timestamps: false,
            include_details: false,
            max_items: Some(0),
        }
    }

    /// Plain text with bounded output, for CI logs.
    pub fn ci() -> Self {
        Self {
            use_colors: false,
            include_timestamps: true,
            include_details: true,
            max_items: Some(20),
        }
    }

    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    pub fn with_timestamps(mut self, include: bool) -> Self {
        self.include_timestamps = include;
        self
    }

    pub fn with_details(mut self, include: bool) -> Self {
        self.include_details = include;
        self
    }

    /// Sets the maximum number of findings listed per check.
    pub fn with_max_items(mut self, max: Option<usize>) -> Self {
        self.max_items = max;
        self
    }
}

/// Renders a [`ValidationSummary`] as text.
pub trait SummaryFormatter {
    fn format(&self, summary: &ValidationSummary) -> Result<String>;

    /// Formats with a configuration other than the formatter's own.
    fn format_with_config(
        &self,
        summary: &ValidationSummary,
        config: &FormatterConfig,
    ) -> Result<String>;
}

/// Formats summaries as JSON.
///
/// The document carries `timestamp`, `total_rows`, `total_columns`, `checks`
/// (keyed by check id, each with `status` and `details`) and
/// `overall_status`. `timestamp` is dropped when the configuration excludes
/// timestamps.
#[derive(Debug, Clone)]
pub struct JsonFormatter {
    config: FormatterConfig,
    pretty: bool,
}

impl JsonFormatter {
    pub fn new() -> Self {
        Self::with_config(FormatterConfig::default())
    }

    pub fn with_config(config: FormatterConfig) -> Self {
        Self {
            config,
            pretty: true,
        }
    }

    /// Sets whether to use pretty-printed JSON.
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl SummaryFormatter for JsonFormatter {
    fn format(&self, summary: &ValidationSummary) -> Result<String> {
        self.format_with_config(summary, &self.config)
    }

    fn format_with_config(
        &self,
        summary: &ValidationSummary,
        config: &FormatterConfig,
    ) -> Result<String> {
        let mut value = serde_json::to_value(summary).map_err(serialization_error)?;
        if !config.include_timestamps {
            if let Some(object) = value.as_object_mut() {
                object.remove("timestamp");
            }
        }

        if self.pretty {
            serde_json::to_string_pretty(&value).map_err(serialization_error)
        } else {
            serde_json::to_string(&value).map_err(serialization_error)
        }
    }
}

fn serialization_error(e: serde_json::Error) -> QualityError {
    QualityError::Serialization(format!("Failed to serialize summary to JSON: {e}"))
}

/// Formats summaries for terminal output.
#[derive(Debug, Clone)]
pub struct HumanFormatter {
    config: FormatterConfig,
}

impl HumanFormatter {
    pub fn new() -> Self {
        Self::with_config(FormatterConfig::default())
    }

    pub fn with_config(config: FormatterConfig) -> Self {
        Self { config }
    }
}

impl Default for HumanFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl SummaryFormatter for HumanFormatter {
    fn format(&self, summary: &ValidationSummary) -> Result<String> {
        self.format_with_config(summary, &self.config)
    }

    fn format_with_config(
        &self,
        summary: &ValidationSummary,
        config: &FormatterConfig,
    ) -> Result<String> {
        render_human(summary, config)
            .map_err(|e| QualityError::Serialization(format!("Failed to render summary: {e}")))
    }
}

fn render_human(
    summary: &ValidationSummary,
    config: &FormatterConfig,
) -> std::result::Result<String, std::fmt::Error> {
    let mut output = String::new();

    writeln!(output)?;
    if summary.overall_status {
        writeln!(output, "✅ {}", paint("Validation PASSED", GREEN, config))?;
    } else {
        writeln!(output, "❌ {}", paint("Validation FAILED", RED, config))?;
    }
    writeln!(output)?;

    writeln!(
        output,
        "Dataset: {} rows x {} columns",
        summary.total_rows, summary.total_columns
    )?;
    if config.include_timestamps {
        writeln!(output, "Timestamp: {}", summary.timestamp.to_rfc3339())?;
    }

    writeln!(output)?;
    if summary.checks.is_empty() {
        writeln!(output, "No checks have been run.")?;
    } else {
        writeln!(
            output,
            "📊 Checks: {} passed, {} failed",
            summary.passed_checks().len(),
            summary.failed_checks().len()
        )?;
    }

    for (id, result) in &summary.checks {
        let status = if result.status {
            paint("PASS", GREEN, config)
        } else {
            paint("FAIL", RED, config)
        };
        writeln!(output, "   [{status}] {id}: {}", headline(result))?;

        if config.include_details {
            let items = findings(&result.details);
            let shown = config.max_items.map_or(items.len(), |max| max.min(items.len()));
            for item in &items[..shown] {
                writeln!(output, "      - {item}")?;
            }
            if items.len() > shown {
                writeln!(output, "      ... and {} more", items.len() - shown)?;
            }
        }
    }

    writeln!(output)?;
    Ok(output)
}

const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";

fn paint(text: &str, color: &str, config: &FormatterConfig) -> String {
    if config.use_colors {
        format!("{color}{text}\x1b[0m")
    } else {
        text.to_string()
    }
}

fn headline(result: &CheckResult) -> String {
    match &result.details {
        CheckDetails::MissingValues(flagged) => {
            format!("{} column(s) above the missing-value threshold", flagged.len())
        }
        CheckDetails::Duplicates { duplicate_count } => {
            format!("{duplicate_count} duplicate row(s)")
        }
        CheckDetails::Outliers(outliers) => format!(
            "{} outlier(s) across {} column(s)",
            result.details.issue_count(),
            outliers.len()
        ),
        CheckDetails::Schema { mismatched_columns } => {
            format!("{} mismatched column(s)", mismatched_columns.len())
        }
    }
}

/// One line per listed finding.
fn findings(details: &CheckDetails) -> Vec<String> {
    match details {
        CheckDetails::MissingValues(flagged) => flagged
            .iter()
            .map(|(column, fraction)| format!("{column}: {:.1}% missing", fraction * 100.0))
            .collect(),
        CheckDetails::Duplicates { .. } => Vec::new(),
        CheckDetails::Outliers(outliers) => outliers
            .iter()
            .filter(|(_, rows)| !rows.is_empty())
            .map(|(column, rows)| format!("{column}: rows {rows:?}"))
            .collect(),
        CheckDetails::Schema { mismatched_columns } => mismatched_columns.clone(),
    }
}
