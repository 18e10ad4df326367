//! Basic validation example demonstrating quality-guard's core operations.
//!
//! This example shows how to:
//! - Load a CSV file into a dataset
//! - Run each check individually and read its findings
//! - Render the accumulated summary for people and machines
//!
//! Run with:
//! ```bash
//! cargo run --example basic_validation
//! ```

use quality_guard::prelude::*;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let csv_data = r#"customer_id,name,email,age,registration_date,last_purchase_amount
1,Alice Johnson,alice@example.com,28,2023-01-15,150.50
2,Bob Smith,bob@example.com,35,2023-02-20,200.00
3,Carol Davis,carol@example.com,42,2023-03-10,75.25
4,David Wilson,david@example.com,31,2023-04-05,300.00
5,Eve Brown,eve@example.com,26,2023-05-12,125.75
6,Frank Miller,,38,2023-06-18,180.00
7,Grace Lee,grace@example.com,29,2023-07-22,
8,Henry Taylor,henry@example.com,,2023-08-30,220.50
9,Iris Martinez,iris@example.com,33,2023-09-14,195.25
9,Iris Martinez,iris@example.com,33,2023-09-14,195.25
10,Jack Anderson,jack@example.com,45,2023-10-25,4000.00"#;

    let file_path = std::env::temp_dir().join("quality_guard_customers.csv");
    std::fs::write(&file_path, csv_data)?;

    let dataset = CsvSource::new(&file_path).load()?;
    println!(
        "Loaded {} rows x {} columns",
        dataset.row_count(),
        dataset.column_count()
    );

    println!("\nFirst rows:");
    let preview = dataset.head(3);
    println!("{}", arrow::util::pretty::pretty_format_batches(&[preview.batch().clone()])?);

    let validator = DataQualityValidator::new(dataset);

    println!("\nColumns with more than 5% missing values:");
    for (column, fraction) in validator.check_missing_values(0.05)? {
        println!("  {column}: {:.1}%", fraction * 100.0);
    }

    let duplicates = validator.check_duplicates(None)?;
    println!("\nDuplicate rows: {duplicates}");

    let by_customer: &[&str] = &["customer_id"];
    let repeated_ids = validator.check_duplicates(Some(by_customer))?;
    println!("Repeated customer ids: {repeated_ids}");

    println!("\nOutliers (2 standard deviations):");
    for (column, rows) in validator.check_outliers(&["age", "last_purchase_amount"], 2.0)? {
        println!("  {column}: rows {rows:?}");
    }

    let expected: ExpectedSchema =
        "customer_id:integer, name:text, age:integer, registration_date:temporal, loyalty_tier:text"
            .parse()?;
    println!("\nSchema mismatches: {:?}", validator.validate_schema(&expected)?);

    let summary = validator.get_validation_summary();
    println!("{}", HumanFormatter::new().format(&summary)?);
    println!("{}", JsonFormatter::new().format(&summary)?);

    std::fs::remove_file(&file_path)?;
    Ok(())
}
