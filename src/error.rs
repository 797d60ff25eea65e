//! Error types for sosq
//!
//! Two error types live here. [`Error`] covers everything that aborts a
//! search run (configuration, transport, decoding). [`PersistError`] covers
//! only the final save step, which the fetch loop reports but never
//! propagates.

use thiserror::Error;

/// The main error type for sosq
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    // ============================================================================
    // HTTP Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("StackExchange API error {id} ({name}): {message}")]
    Api {
        id: u32,
        name: String,
        message: String,
    },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Data Processing Errors
    // ============================================================================
    #[error("Failed to decode response: {message}")]
    Decode { message: String },
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }
}

/// Result type alias for sosq
pub type Result<T> = std::result::Result<T, Error>;

/// Failure while persisting a finished result set
#[derive(Error, Debug)]
pub enum PersistError {
    /// The output file could not be created or written
    #[error("failed to write {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The rows could not be encoded into the output format
    #[error("failed to encode output: {message}")]
    Encode { message: String },
}

impl PersistError {
    /// Create an I/O persistence error for a path
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create an encoding persistence error
    pub fn encode(message: impl std::fmt::Display) -> Self {
        Self::Encode {
            message: message.to_string(),
        }
    }
}

impl From<arrow::error::ArrowError> for PersistError {
    fn from(e: arrow::error::ArrowError) -> Self {
        match e {
            arrow::error::ArrowError::IoError(path, source) => Self::io(path, source),
            other => Self::encode(other),
        }
    }
}

impl From<parquet::errors::ParquetError> for PersistError {
    fn from(e: parquet::errors::ParquetError) -> Self {
        Self::encode(e)
    }
}
