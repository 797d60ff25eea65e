//! Column type inference and JSON to Arrow conversion
//!
//! Every column gets one flat type so the batch can go to CSV as well as
//! Parquet. Nested objects and arrays are kept as compact JSON text.

use crate::error::PersistError;
use crate::types::{JsonObject, JsonValue};
use arrow::array::{ArrayRef, BooleanArray, Float64Array, Int64Array, StringArray, UInt64Array};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use std::sync::Arc;

/// Flat column type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    /// Only nulls or missing values seen so far
    Null,
    Boolean,
    Int64,
    Float64,
    Utf8,
}

impl ColumnType {
    /// Infer the type of one JSON value
    fn of(value: &JsonValue) -> Self {
        match value {
            JsonValue::Null => Self::Null,
            JsonValue::Bool(_) => Self::Boolean,
            JsonValue::Number(n) => {
                if n.is_i64() {
                    Self::Int64
                } else {
                    Self::Float64
                }
            }
            JsonValue::String(_) | JsonValue::Array(_) | JsonValue::Object(_) => Self::Utf8,
        }
    }

    /// Merge two types into a compatible type
    fn merge(self, other: Self) -> Self {
        match (self, other) {
            (a, b) if a == b => a,
            (Self::Null, other) | (other, Self::Null) => other,
            (Self::Int64, Self::Float64) | (Self::Float64, Self::Int64) => Self::Float64,
            _ => Self::Utf8,
        }
    }

    /// Arrow type for this column; all-null columns become strings
    fn data_type(self) -> DataType {
        match self {
            Self::Boolean => DataType::Boolean,
            Self::Int64 => DataType::Int64,
            Self::Float64 => DataType::Float64,
            Self::Null | Self::Utf8 => DataType::Utf8,
        }
    }
}

/// Infer one type per column across all rows
pub fn infer_columns(columns: &[String], rows: &[JsonObject]) -> Vec<ColumnType> {
    columns
        .iter()
        .map(|name| {
            rows.iter()
                .filter_map(|row| row.get(name))
                .fold(ColumnType::Null, |acc, v| acc.merge(ColumnType::of(v)))
        })
        .collect()
}

/// Build a RecordBatch with a leading index column followed by `columns`
pub fn to_record_batch(
    columns: &[String],
    rows: &[JsonObject],
    index_column: &str,
) -> Result<RecordBatch, PersistError> {
    let types = infer_columns(columns, rows);

    let mut fields = Vec::with_capacity(columns.len() + 1);
    let mut arrays: Vec<ArrayRef> = Vec::with_capacity(columns.len() + 1);

    fields.push(Field::new(index_column, DataType::UInt64, false));
    arrays.push(Arc::new(UInt64Array::from_iter_values(0..rows.len() as u64)));

    for (name, column_type) in columns.iter().zip(types) {
        let values: Vec<Option<&JsonValue>> = rows
            .iter()
            .map(|row| row.get(name).filter(|v| !v.is_null()))
            .collect();
        fields.push(Field::new(name, column_type.data_type(), true));
        arrays.push(build_array(&values, column_type));
    }

    RecordBatch::try_new(Arc::new(Schema::new(fields)), arrays).map_err(PersistError::encode)
}

/// Build an Arrow array from JSON values
fn build_array(values: &[Option<&JsonValue>], column_type: ColumnType) -> ArrayRef {
    match column_type {
        ColumnType::Boolean => {
            let arr: BooleanArray = values.iter().map(|v| v.and_then(JsonValue::as_bool)).collect();
            Arc::new(arr)
        }
        ColumnType::Int64 => {
            let arr: Int64Array = values.iter().map(|v| v.and_then(JsonValue::as_i64)).collect();
            Arc::new(arr)
        }
        ColumnType::Float64 => {
            let arr: Float64Array = values.iter().map(|v| v.and_then(JsonValue::as_f64)).collect();
            Arc::new(arr)
        }
        ColumnType::Null | ColumnType::Utf8 => {
            let arr: StringArray = values
                .iter()
                .map(|v| {
                    v.map(|v| match v {
                        JsonValue::String(s) => s.clone(),
                        _ => v.to_string(),
                    })
                })
                .collect();
            Arc::new(arr)
        }
    }
}
