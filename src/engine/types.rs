//! Engine types

use crate::error::PersistError;
use crate::output::ResultSet;
use crate::pagination::StopReason;
use std::path::PathBuf;

/// Whether the result file was written
#[derive(Debug)]
pub enum Persisted {
    /// File written
    Saved {
        /// Where it was written
        path: PathBuf,
        /// Rows written
        rows: usize,
    },
    /// Writing failed; the rows are still in [`SearchOutcome::results`]
    Failed(PersistError),
}

impl Persisted {
    /// Check if the file was written
    pub fn is_saved(&self) -> bool {
        matches!(self, Self::Saved { .. })
    }
}

/// Counters for one run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchStats {
    /// Pages fetched
    pub pages: u32,
    /// Records fetched
    pub records: u64,
    /// Quota left after the last page
    pub quota_remaining: Option<i64>,
    /// Wall time of the run
    pub duration_ms: u64,
}

/// Everything a completed run produced
#[derive(Debug)]
pub struct SearchOutcome {
    /// Every fetched item in page order
    pub results: ResultSet,
    /// Which condition ended pagination
    pub stop_reason: StopReason,
    /// Persistence status
    pub persisted: Persisted,
    /// Run counters
    pub stats: FetchStats,
}
