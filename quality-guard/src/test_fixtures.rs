//! Common test fixtures for data validation scenarios.
//!
//! Small hand-built tables with known null, duplicate and type patterns, so
//! unit tests can assert exact results.

use crate::dataset::Dataset;
use arrow::array::{Float64Array, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use std::sync::Arc;

/// Customer records with various null patterns.
///
/// Missing fractions: id 0.0, name 0.3, email 0.3, phone 0.4, age 0.2, score 0.3.
pub fn create_customer_dataset() -> Dataset {
    let schema = Arc::new(Schema::new(vec![
        Field::new("id", DataType::Int64, false),
        Field::new("name", DataType::Utf8, true),
        Field::new("email", DataType::Utf8, true),
        Field::new("phone", DataType::Utf8, true),
        Field::new("age", DataType::Int64, true),
        Field::new("score", DataType::Float64, true),
    ]));

    let batch = RecordBatch::try_new(
        schema,
        vec![
            Arc::new(Int64Array::from(vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10])),
            Arc::new(StringArray::from(vec![
                Some("Alice"),
                None,
                Some("Charlie"),
                Some("David"),
                None,
                Some("Frank"),
                Some("Grace"),
                None,
                Some("Ivan"),
                Some("Jane"),
            ])),
            Arc::new(StringArray::from(vec![
                Some("alice@example.com"),
                Some("bob@example.com"),
                None,
                Some("david@example.com"),
                Some("eve@example.com"),
                None,
                Some("grace@example.com"),
                Some("henry@example.com"),
                None,
                Some("jane@example.com"),
            ])),
            Arc::new(StringArray::from(vec![
                Some("555-0001"),
                Some("555-0002"),
                Some("555-0003"),
                None,
                None,
                None,
                Some("555-0007"),
                Some("555-0008"),
                Some("555-0009"),
                None,
            ])),
            Arc::new(Int64Array::from(vec![
                Some(25),
                Some(30),
                Some(35),
                Some(40),
                None,
                Some(28),
                None,
                Some(33),
                Some(29),
                Some(31),
            ])),
            Arc::new(Float64Array::from(vec![
                Some(85.5),
                Some(92.0),
                None,
                Some(78.5),
                Some(88.0),
                Some(91.5),
                Some(76.0),
                None,
                None,
                Some(83.5),
            ])),
        ],
    )
    .expect("customer fixture is well formed");

    Dataset::new(batch)
}

/// Transactions where rows 3 and 6 repeat rows 0 and 1 exactly.
pub fn create_transaction_dataset() -> Dataset {
    let schema = Arc::new(Schema::new(vec![
        Field::new("transaction_id", DataType::Utf8, false),
        Field::new("user_id", DataType::Int64, false),
        Field::new("amount", DataType::Float64, false),
        Field::new("status", DataType::Utf8, false),
    ]));

    let batch = RecordBatch::try_new(
        schema,
        vec![
            Arc::new(StringArray::from(vec![
                "TX001", "TX002", "TX003", "TX001", "TX004", // TX001 is duplicated
                "TX005", "TX002", "TX006", "TX007", "TX008", // TX002 is duplicated
            ])),
            Arc::new(Int64Array::from(vec![
                101, 102, 103, 101, 104, 105, 102, 106, 107, 108,
            ])),
            Arc::new(Float64Array::from(vec![
                100.50, 250.00, 75.25, 100.50, 300.00, 150.75, 250.00, 80.00, 425.50, 60.00,
            ])),
            Arc::new(StringArray::from(vec![
                "completed",
                "pending",
                "completed",
                "completed",
                "failed",
                "completed",
                "pending",
                "completed",
                "completed",
                "pending",
            ])),
        ],
    )
    .expect("transaction fixture is well formed");

    Dataset::new(batch)
}

/// A single nullable Float64 column.
pub fn create_numeric_dataset(name: &str, values: Vec<Option<f64>>) -> Dataset {
    let schema = Arc::new(Schema::new(vec![Field::new(name, DataType::Float64, true)]));
    let batch = RecordBatch::try_new(schema, vec![Arc::new(Float64Array::from(values))])
        .expect("numeric fixture is well formed");
    Dataset::new(batch)
}

/// A single non-null Int64 column.
pub fn create_int_dataset(name: &str, values: Vec<i64>) -> Dataset {
    let schema = Arc::new(Schema::new(vec![Field::new(name, DataType::Int64, false)]));
    let batch = RecordBatch::try_new(schema, vec![Arc::new(Int64Array::from(values))])
        .expect("integer fixture is well formed");
    Dataset::new(batch)
}

/// A table with columns but no rows.
pub fn create_empty_dataset() -> Dataset {
    let schema = Arc::new(Schema::new(vec![
        Field::new("id", DataType::Int64, true),
        Field::new("label", DataType::Utf8, true),
    ]));
    Dataset::new(RecordBatch::new_empty(schema))
}
