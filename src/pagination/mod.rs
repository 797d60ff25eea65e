//! Pagination module
//!
//! Tracks when the page-fetch loop should stop.
//!
//! # Overview
//!
//! Two flags drive termination: `has_more` (the API has another page) and
//! `quota_ok` (the key still has more than [`QUOTA_THRESHOLD`] requests left).
//! Both start `true` and are only ever lowered by response data.

mod types;

pub use types::{NextPage, PaginationState, StopReason, QUOTA_THRESHOLD};

#[cfg(test)]
mod tests;
