//! # sosq
//!
//! Pulls every page of a StackExchange advanced search and saves the merged
//! items as a table.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use sosq::{PageFetchLoop, SearchConfig, SearchQuery};
//!
//! #[tokio::main]
//! async fn main() -> sosq::Result<()> {
//!     let fetch_loop = PageFetchLoop::from_config(&SearchConfig::default())?;
//!     let query = SearchQuery::new("rust borrow checker", "my-key", "my-token");
//!
//!     // Writes ./rust borrow checker.csv
//!     let outcome = fetch_loop.run(&query).await?;
//!     println!("{} rows", outcome.results.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                      PageFetchLoop                        │
//! │   while has_more && quota_remaining > 500: fetch, merge   │
//! └───────────────────────────────────────────────────────────┘
//!                               │
//! ┌───────────┬─────────────┬───┴─────────┬───────────────────┐
//! │  Request  │    HTTP     │   Decode    │      Output       │
//! ├───────────┼─────────────┼─────────────┼───────────────────┤
//! │ Query     │ GET + query │ PageResponse│ ResultSet         │
//! │ Page n    │ gzip        │ API errors  │ CSV / Parquet     │
//! └───────────┴─────────────┴─────────────┴───────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Runtime configuration
pub mod config;

/// HTTP client
pub mod http;

/// Query and page request parameters
pub mod request;

/// Response decoding
pub mod decode;

/// Pagination termination state
pub mod pagination;

/// Result set accumulation and file output
pub mod output;

/// The page-fetch loop
pub mod engine;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::SearchConfig;
pub use engine::{PageFetchLoop, SearchOutcome};
pub use error::{Error, PersistError, Result};
pub use output::ResultSet;
pub use request::SearchQuery;
pub use types::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
