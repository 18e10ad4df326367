//! Runs every check from a JSON configuration with structured logging enabled.
//!
//! Run with:
//! ```bash
//! RUST_LOG=quality_guard=debug cargo run --example config_validation
//! ```

use quality_guard::logging::setup::{init_logging, LoggingConfig};
use quality_guard::prelude::*;
use tracing::info;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    init_logging(LoggingConfig::development())?;

    let csv_data = "sensor,reading,unit\n\
                    a,20.1,C\n\
                    b,19.8,C\n\
                    c,,C\n\
                    d,20.4,\n\
                    e,95.0,C\n\
                    f,20.0,C\n";
    let data_path = std::env::temp_dir().join("quality_guard_readings.csv");
    std::fs::write(&data_path, csv_data)?;

    let config = ValidatorConfig::from_json_str(
        r#"{
            "missing_threshold": 0.2,
            "n_std": 1.5,
            "expected_schema": [
                {"column": "sensor", "category": "text"},
                {"column": "reading", "category": "float"}
            ]
        }"#,
    )?;
    info!(?config, "Loaded validator configuration");

    let dataset = CsvSource::new(&data_path).load()?;
    let validator = DataQualityValidator::with_config(dataset, config)?;
    let summary = validator.run_all()?;

    let formatter = HumanFormatter::with_config(FormatterConfig::ci());
    println!("{}", formatter.format(&summary)?);

    std::fs::remove_file(&data_path)?;
    if !summary.overall_status {
        std::process::exit(1);
    }
    Ok(())
}
