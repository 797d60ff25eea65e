//! Execution engine module
//!
//! The page-fetch loop and the page source it drives.
//!
//! # Overview
//!
//! The engine module provides:
//! - `PageFetchLoop` - fetches pages until exhaustion or quota depletion,
//!   merges them into one `ResultSet` and persists it
//! - `PageSource` - the fetch seam, implemented over HTTP by `StackExchangeSource`
//! - `SearchOutcome` - the result set plus how the run ended

mod source;
mod types;

pub use source::{PageSource, StackExchangeSource};
pub use types::{FetchStats, Persisted, SearchOutcome};

use crate::config::SearchConfig;
use crate::error::Result;
use crate::output::{output_path, sink_for, ResultSet, ResultSink};
use crate::pagination::{NextPage, PaginationState, StopReason};
use crate::request::{PageRequestParams, SearchQuery};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Drives pagination for one query at a time
pub struct PageFetchLoop {
    source: Box<dyn PageSource>,
    sink: Box<dyn ResultSink>,
    output_dir: PathBuf,
}

impl PageFetchLoop {
    /// Create a loop from its collaborators
    pub fn new(source: Box<dyn PageSource>, sink: Box<dyn ResultSink>) -> Self {
        Self {
            source,
            sink,
            output_dir: PathBuf::from("."),
        }
    }

    /// Build a loop against the StackExchange API from a config
    pub fn from_config(config: &SearchConfig) -> Result<Self> {
        let source = StackExchangeSource::from_config(config)?;
        Ok(Self::new(Box::new(source), sink_for(config.format)).with_output_dir(&config.output_dir))
    }

    /// Set the directory the result file is written to
    #[must_use]
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Fetch every page for `query`, persist the merged rows, return them
    ///
    /// A fetch or decode failure aborts the run and discards the pages
    /// gathered so far. A persistence failure is logged and reported in
    /// [`SearchOutcome::persisted`]; the rows are still returned.
    pub async fn run(&self, query: &SearchQuery) -> Result<SearchOutcome> {
        let start = Instant::now();
        let mut params = PageRequestParams::first(query);
        let mut state = PaginationState::new();
        let mut accumulator: Option<ResultSet> = None;

        info!("Starting search for: {}", query.text);

        while state.should_continue() {
            let page = params.page();
            let response = self.source.fetch_page(&params).await?;
            let record_count = response.len();

            if let Some(backoff) = response.backoff {
                warn!("API requested a {backoff}s backoff on page {page}");
            }
            if let Some(quota_max) = response.quota_max {
                debug!("Quota: {} of {quota_max} remaining", response.quota_remaining);
            }

            let next = state.process_response(&response);
            accumulator = Some(ResultSet::merge(accumulator, response.items));

            info!("Page {page} ok: {record_count} records");

            match next {
                NextPage::Continue(next_page) => params = params.with_page(next_page),
                NextPage::Done(reason) => debug!("Stopping after page {page}: {reason}"),
            }
        }

        let results = accumulator.unwrap_or_default();
        let stop_reason = state.stop_reason().unwrap_or(StopReason::Exhausted);

        let path = output_path(&self.output_dir, &query.text, self.sink.extension());
        let persisted = match self.sink.write(&results, &path) {
            Ok(rows) => {
                info!("Saved {rows} rows to {}", path.display());
                Persisted::Saved { path, rows }
            }
            Err(e) => {
                warn!("Not saved: {e}");
                Persisted::Failed(e)
            }
        };

        let stats = FetchStats {
            pages: state.pages_fetched,
            records: state.total_fetched,
            quota_remaining: state.quota_remaining,
            duration_ms: start.elapsed().as_millis() as u64,
        };

        info!(
            "Finished search for '{}': {} records over {} pages ({stop_reason})",
            query.text, stats.records, stats.pages
        );

        Ok(SearchOutcome {
            results,
            stop_reason,
            persisted,
            stats,
        })
    }
}

impl std::fmt::Debug for PageFetchLoop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageFetchLoop")
            .field("output_dir", &self.output_dir)
            .field("extension", &self.sink.extension())
            .finish_non_exhaustive()
    }
}
