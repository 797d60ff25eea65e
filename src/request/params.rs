//! Query and page parameter types

use crate::http::RequestConfig;
use serde::{Deserialize, Serialize};

/// Number of items requested per page (the API maximum)
pub const PAGE_SIZE: u32 = 100;

/// Site searched
pub const DEFAULT_SITE: &str = "stackoverflow";

/// Sort direction
pub const DEFAULT_ORDER: &str = "asc";

/// Sort key
pub const DEFAULT_SORT: &str = "creation";

/// Response filter; `withbody` adds question bodies to each item
pub const DEFAULT_FILTER: &str = "withbody";

/// A search as supplied by the caller
///
/// The key and access token are passed through untouched.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    /// Free-text query (`q`)
    pub text: String,
    /// Application key (`key`)
    pub key: String,
    /// OAuth access token (`access_token`)
    pub access_token: String,
}

impl SearchQuery {
    /// Create a new search query
    pub fn new(
        text: impl Into<String>,
        key: impl Into<String>,
        access_token: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            key: key.into(),
            access_token: access_token.into(),
        }
    }
}

impl std::fmt::Debug for SearchQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchQuery")
            .field("text", &self.text)
            .field("key", &"***")
            .field("access_token", &"***")
            .finish()
    }
}

/// Parameters for one page request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequestParams {
    query: SearchQuery,
    page: u32,
}

impl PageRequestParams {
    /// Parameters for the first page of a query
    pub fn first(query: &SearchQuery) -> Self {
        Self {
            query: query.clone(),
            page: 1,
        }
    }

    /// Same parameters with a different page number
    #[must_use]
    pub fn with_page(&self, page: u32) -> Self {
        Self {
            query: self.query.clone(),
            page,
        }
    }

    /// Current page number (1-indexed)
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Query-string pairs in request order
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("q", self.query.text.clone()),
            ("key", self.query.key.clone()),
            ("access_token", self.query.access_token.clone()),
            ("pagesize", PAGE_SIZE.to_string()),
            ("site", DEFAULT_SITE.to_string()),
            ("order", DEFAULT_ORDER.to_string()),
            ("sort", DEFAULT_SORT.to_string()),
            ("filter", DEFAULT_FILTER.to_string()),
            ("page", self.page.to_string()),
        ]
    }

    /// Build an HTTP request config carrying these parameters
    pub fn to_request_config(&self) -> RequestConfig {
        self.to_pairs()
            .into_iter()
            .fold(RequestConfig::new(), |config, (key, value)| {
                config.query(key, value)
            })
    }
}
