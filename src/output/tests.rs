//! Tests for output module

use super::*;
use crate::error::PersistError;
use crate::types::{JsonObject, OutputFormat};
use arrow::array::Array;
use arrow::datatypes::DataType;
use pretty_assertions::assert_eq;
use serde_json::json;
use std::path::Path;
use tempfile::tempdir;

fn obj(value: serde_json::Value) -> JsonObject {
    match value {
        serde_json::Value::Object(map) => map,
        other => panic!("expected object, got {other}"),
    }
}

// ============================================================================
// ResultSet Tests
// ============================================================================

#[test]
fn test_merge_first_page_becomes_accumulator() {
    let page = vec![obj(json!({"id": 1})), obj(json!({"id": 2}))];
    let set = ResultSet::merge(None, page.clone());
    assert_eq!(set.rows(), page.as_slice());
    assert_eq!(set.columns(), ["id".to_string()]);
}

#[test]
fn test_merge_appends_in_order() {
    let first = ResultSet::merge(None, vec![obj(json!({"id": "A"})), obj(json!({"id": "B"}))]);
    let merged = ResultSet::merge(Some(first), vec![obj(json!({"id": "C"}))]);

    let ids: Vec<_> = merged.rows().iter().map(|r| r["id"].clone()).collect();
    assert_eq!(ids, vec![json!("A"), json!("B"), json!("C")]);
}

#[test]
fn test_columns_first_seen_order() {
    let mut set = ResultSet::from_rows(vec![obj(json!({"title": "x", "score": 1}))]);
    set.append(vec![obj(json!({"score": 2, "tags": ["rust"], "title": "y"}))]);

    let mut expected: Vec<String> = obj(json!({"title": "x", "score": 1}))
        .keys()
        .cloned()
        .collect();
    expected.push("tags".to_string());
    assert_eq!(set.columns(), expected.as_slice());
}

#[test]
fn test_duplicates_are_kept() {
    let row = obj(json!({"question_id": 7}));
    let mut set = ResultSet::from_rows(vec![row.clone()]);
    set.append(vec![row]);
    assert_eq!(set.len(), 2);
}

#[test]
fn test_empty_result_set() {
    let set = ResultSet::new();
    assert!(set.is_empty());
    assert!(set.columns().is_empty());
    let batch = set.to_record_batch(CSV_INDEX_COLUMN).unwrap();
    assert_eq!(batch.num_rows(), 0);
    assert_eq!(batch.num_columns(), 1);
}

// ============================================================================
// Column Inference Tests
// ============================================================================

#[test]
fn test_infer_columns() {
    let rows = vec![
        obj(json!({"int": 1, "mixed": 1, "flag": true, "nested": {"a": 1}, "empty": null})),
        obj(json!({"int": 2, "mixed": 2.5, "flag": false, "nested": [1, 2]})),
    ];
    let columns: Vec<String> = ["int", "mixed", "flag", "nested", "empty", "absent"]
        .iter()
        .map(ToString::to_string)
        .collect();

    let types = infer_columns(&columns, &rows);
    assert_eq!(
        types,
        vec![
            ColumnType::Int64,
            ColumnType::Float64,
            ColumnType::Boolean,
            ColumnType::Utf8,
            ColumnType::Null,
            ColumnType::Null,
        ]
    );
}

#[test]
fn test_conflicting_types_fall_back_to_string() {
    let rows = vec![obj(json!({"v": 1})), obj(json!({"v": "one"}))];
    let types = infer_columns(&["v".to_string()], &rows);
    assert_eq!(types, vec![ColumnType::Utf8]);
}

#[test]
fn test_record_batch_layout() {
    let set = ResultSet::from_rows(vec![
        obj(json!({"id": 10, "owner": {"display_name": "ann"}})),
        obj(json!({"id": 11})),
    ]);
    let batch = set.to_record_batch("index").unwrap();
    let schema = batch.schema();

    assert_eq!(batch.num_rows(), 2);
    assert_eq!(schema.field(0).name(), "index");
    assert_eq!(schema.field(0).data_type(), &DataType::UInt64);
    assert_eq!(schema.field(1).name(), "id");
    assert_eq!(schema.field(1).data_type(), &DataType::Int64);
    assert_eq!(schema.field(2).name(), "owner");
    assert_eq!(schema.field(2).data_type(), &DataType::Utf8);
    assert!(batch.column(2).is_null(1));
}

// ============================================================================
// Writer Tests
// ============================================================================

#[test]
fn test_output_path() {
    let path = output_path(Path::new("out"), "rust async", "csv");
    assert_eq!(path, Path::new("out").join("rust async.csv"));
}

#[test]
fn test_sink_for_format() {
    assert_eq!(sink_for(OutputFormat::Csv).extension(), "csv");
    assert_eq!(sink_for(OutputFormat::Parquet).extension(), "parquet");
}

#[test]
fn test_csv_sink_writes_index_and_header() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("query.csv");

    let set = ResultSet::from_rows(vec![
        obj(json!({"id": 1})),
        obj(json!({"id": 2})),
        obj(json!({"id": 3})),
    ]);
    let rows = CsvSink.write(&set, &path).unwrap();
    assert_eq!(rows, 3);

    let content = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines, vec![",id", "0,1", "1,2", "2,3"]);
}

#[test]
fn test_csv_sink_quotes_and_nulls() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("query.csv");

    let mut set = ResultSet::from_rows(vec![obj(json!({"title": "plain"}))]);
    set.append(vec![obj(json!({"title": "a, b"}))]);
    set.append(vec![obj(json!({"tags": ["x"]}))]);
    CsvSink.write(&set, &path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(
        lines,
        vec![
            ",title,tags",
            "0,plain,",
            "1,\"a, b\",",
            "2,,\"[\"\"x\"\"]\"",
        ]
    );
}

#[test]
fn test_csv_sink_missing_directory() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing").join("query.csv");

    let set = ResultSet::from_rows(vec![obj(json!({"id": 1}))]);
    let err = CsvSink.write(&set, &path).unwrap_err();
    assert!(matches!(err, PersistError::Io { .. }));
}

#[test]
fn test_parquet_sink_roundtrip_row_count() {
    use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;

    let dir = tempdir().unwrap();
    let path = dir.path().join("query.parquet");

    let set = ResultSet::from_rows(vec![
        obj(json!({"id": 1, "title": "a"})),
        obj(json!({"id": 2, "title": "b"})),
    ]);
    let sink = ParquetSink::with_config(ParquetWriterConfig::default().uncompressed());
    assert_eq!(sink.write(&set, &path).unwrap(), 2);

    let file = std::fs::File::open(&path).unwrap();
    let reader = ParquetRecordBatchReaderBuilder::try_new(file)
        .unwrap()
        .build()
        .unwrap();
    let total: usize = reader.map(|b| b.unwrap().num_rows()).sum();
    assert_eq!(total, 2);
}
