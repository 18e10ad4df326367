//! Benchmarks for the duplicate, outlier and missing-value checks.

use arrow::array::{ArrayRef, Float64Array, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use quality_guard::core::DataQualityValidator;
use quality_guard::dataset::Dataset;
use std::hint::black_box;
use std::sync::Arc;

fn create_dataset(rows: usize) -> Dataset {
    let schema = Arc::new(Schema::new(vec![
        Field::new("id", DataType::Int64, false),
        Field::new("category", DataType::Utf8, true),
        Field::new("amount", DataType::Float64, true),
    ]));

    let ids = Int64Array::from_iter_values((0..rows as i64).map(|i| i % (rows as i64 / 2 + 1)));
    let categories = StringArray::from_iter((0..rows).map(|i| {
        if i % 17 == 0 {
            None
        } else {
            Some(format!("cat_{}", i % 8))
        }
    }));
    let amounts = Float64Array::from_iter((0..rows).map(|i| {
        if i % 23 == 0 {
            None
        } else {
            Some((i % 100) as f64 * 1.5 + if i % 997 == 0 { 10_000.0 } else { 0.0 })
        }
    }));

    let columns: Vec<ArrayRef> = vec![Arc::new(ids), Arc::new(categories), Arc::new(amounts)];
    Dataset::new(RecordBatch::try_new(schema, columns).expect("valid batch"))
}

fn bench_checks(c: &mut Criterion) {
    let mut group = c.benchmark_group("checks");

    for rows in [1_000, 10_000, 100_000] {
        let validator = DataQualityValidator::new(create_dataset(rows));

        group.bench_with_input(BenchmarkId::new("duplicates", rows), &rows, |b, _| {
            b.iter(|| validator.check_duplicates(black_box(None)))
        });
        group.bench_with_input(BenchmarkId::new("outliers", rows), &rows, |b, _| {
            b.iter(|| validator.check_outliers(black_box(&["amount", "id"]), black_box(3.0)))
        });
        group.bench_with_input(BenchmarkId::new("missing_values", rows), &rows, |b, _| {
            b.iter(|| validator.check_missing_values(black_box(0.05)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_checks);
criterion_main!(benches);
