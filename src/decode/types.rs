//! Decoded response types

use crate::types::JsonObject;
use serde::{Deserialize, Serialize};

/// One page of search results
///
/// `items`, `has_more` and `quota_remaining` are required; a body missing any
/// of them fails to decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageResponse {
    /// Result records for this page
    pub items: Vec<JsonObject>,
    /// Whether another page exists
    pub has_more: bool,
    /// Requests left in the key's daily quota
    pub quota_remaining: i64,
    /// Size of the daily quota
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quota_max: Option<i64>,
    /// Seconds the API asks clients to wait before hitting this method again
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backoff: Option<u64>,
}

impl PageResponse {
    /// Create a page response with the required fields only
    pub fn new(items: Vec<JsonObject>, has_more: bool, quota_remaining: i64) -> Self {
        Self {
            items,
            has_more,
            quota_remaining,
            quota_max: None,
            backoff: None,
        }
    }

    /// Number of records on this page
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether this page carries no records
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// StackExchange error envelope
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub error_id: u32,
    pub error_name: String,
    pub error_message: String,
}
