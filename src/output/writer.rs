//! Result set writers
//!
//! A [`ResultSink`] persists a finished [`ResultSet`]. Failures come back as
//! [`PersistError`] so the caller can report them without aborting.

use super::result_set::ResultSet;
use crate::error::PersistError;
use crate::types::OutputFormat;
use parquet::arrow::ArrowWriter;
use parquet::basic::Compression;
use parquet::file::properties::WriterProperties;
use std::fs::File;
use std::path::{Path, PathBuf};

/// Header of the row index column in CSV output
pub const CSV_INDEX_COLUMN: &str = "";

/// Name of the row index column in Parquet output
pub const PARQUET_INDEX_COLUMN: &str = "index";

/// Persists a finished result set
pub trait ResultSink: Send + Sync {
    /// File extension written by this sink
    fn extension(&self) -> &'static str;

    /// Write the result set to `path`, returning the number of rows written
    fn write(&self, results: &ResultSet, path: &Path) -> Result<usize, PersistError>;
}

/// Output file path for a query: `<dir>/<query>.<extension>`
pub fn output_path(dir: &Path, query: &str, extension: &str) -> PathBuf {
    dir.join(format!("{query}.{extension}"))
}

/// Sink for an output format
pub fn sink_for(format: OutputFormat) -> Box<dyn ResultSink> {
    match format {
        OutputFormat::Csv => Box::new(CsvSink),
        OutputFormat::Parquet => Box::new(ParquetSink::default()),
    }
}

fn create_file(path: &Path) -> Result<File, PersistError> {
    File::create(path).map_err(|e| PersistError::io(path.display().to_string(), e))
}

// ============================================================================
// CSV
// ============================================================================

/// Comma-separated output with a header row and a leading row index
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvSink;

impl ResultSink for CsvSink {
    fn extension(&self) -> &'static str {
        OutputFormat::Csv.extension()
    }

    fn write(&self, results: &ResultSet, path: &Path) -> Result<usize, PersistError> {
        let batch = results.to_record_batch(CSV_INDEX_COLUMN)?;
        let file = create_file(path)?;

        let mut writer = arrow::csv::WriterBuilder::new()
            .with_header(true)
            .build(file);
        writer.write(&batch)?;

        Ok(batch.num_rows())
    }
}

// ============================================================================
// Parquet
// ============================================================================

/// Configuration for Parquet output
#[derive(Debug, Clone)]
pub struct ParquetWriterConfig {
    compression: Compression,
}

impl Default for ParquetWriterConfig {
    fn default() -> Self {
        Self {
            compression: Compression::SNAPPY,
        }
    }
}

impl ParquetWriterConfig {
    /// Use no compression
    #[must_use]
    pub fn uncompressed(mut self) -> Self {
        self.compression = Compression::UNCOMPRESSED;
        self
    }

    fn build_properties(&self) -> WriterProperties {
        WriterProperties::builder()
            .set_compression(self.compression)
            .build()
    }
}

/// Parquet output with an `index` column
#[derive(Debug, Clone, Default)]
pub struct ParquetSink {
    config: ParquetWriterConfig,
}

impl ParquetSink {
    /// Create a Parquet sink with custom settings
    pub fn with_config(config: ParquetWriterConfig) -> Self {
        Self { config }
    }
}

impl ResultSink for ParquetSink {
    fn extension(&self) -> &'static str {
        OutputFormat::Parquet.extension()
    }

    fn write(&self, results: &ResultSet, path: &Path) -> Result<usize, PersistError> {
        let batch = results.to_record_batch(PARQUET_INDEX_COLUMN)?;
        let file = create_file(path)?;

        let mut writer =
            ArrowWriter::try_new(file, batch.schema(), Some(self.config.build_properties()))?;
        writer.write(&batch)?;
        writer.close()?;

        Ok(batch.num_rows())
    }
}
