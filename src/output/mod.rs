//! Output module
//!
//! Accumulates search items into a [`ResultSet`] and persists it.
//!
//! # Overview
//!
//! This module provides:
//! - `ResultSet` - ordered rows plus the union of their field names
//! - Column type inference and conversion to an Arrow RecordBatch
//! - `ResultSink` implementations for CSV and Parquet files

mod result_set;
mod schema;
mod writer;

pub use result_set::ResultSet;
pub use schema::{infer_columns, to_record_batch, ColumnType};
pub use writer::{
    output_path, sink_for, CsvSink, ParquetSink, ParquetWriterConfig, ResultSink,
    CSV_INDEX_COLUMN, PARQUET_INDEX_COLUMN,
};

#[cfg(test)]
mod tests;
