//! Search request module
//!
//! Holds the caller-supplied [`SearchQuery`] and the per-page
//! [`PageRequestParams`] sent to the StackExchange search endpoint.
//!
//! # Overview
//!
//! Every directive except the page number is fixed for the lifetime of one
//! query. Advancing to the next page builds a new params value instead of
//! mutating the current one.

mod params;

pub use params::{
    PageRequestParams, SearchQuery, DEFAULT_FILTER, DEFAULT_ORDER, DEFAULT_SITE, DEFAULT_SORT,
    PAGE_SIZE,
};
