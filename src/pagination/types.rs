//! Pagination state and results

use crate::decode::PageResponse;

/// Remaining quota at or below which fetching stops
pub const QUOTA_THRESHOLD: i64 = 500;

/// Why pagination ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The API reported `has_more = false`
    Exhausted,
    /// `quota_remaining` dropped to the threshold while more pages existed
    QuotaDepleted,
}

impl std::fmt::Display for StopReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exhausted => write!(f, "no more results"),
            Self::QuotaDepleted => write!(f, "quota depleted"),
        }
    }
}

/// Result of processing a page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextPage {
    /// Fetch this page number next
    Continue(u32),
    /// Stop fetching
    Done(StopReason),
}

impl NextPage {
    /// Check if this is a done result
    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done(_))
    }

    /// Check if this is a continue result
    pub fn is_continue(&self) -> bool {
        matches!(self, Self::Continue(_))
    }
}

/// Tracks pagination state during iteration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationState {
    /// Page number of the next request (1-indexed)
    pub page: u32,
    /// Pages processed so far
    pub pages_fetched: u32,
    /// Records seen so far
    pub total_fetched: u64,
    /// Last reported remaining quota
    pub quota_remaining: Option<i64>,
    has_more: bool,
    quota_ok: bool,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self {
            page: 1,
            pages_fetched: 0,
            total_fetched: 0,
            quota_remaining: None,
            has_more: true,
            quota_ok: true,
        }
    }
}

impl PaginationState {
    /// Create a new pagination state starting at page 1
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether another page should be requested
    pub fn should_continue(&self) -> bool {
        self.has_more && self.quota_ok
    }

    /// Whether the API still reports more pages
    pub fn has_more(&self) -> bool {
        self.has_more
    }

    /// Whether the quota is still above the threshold
    pub fn quota_ok(&self) -> bool {
        self.quota_ok
    }

    /// Why pagination stopped, if it has
    pub fn stop_reason(&self) -> Option<StopReason> {
        if !self.has_more {
            Some(StopReason::Exhausted)
        } else if !self.quota_ok {
            Some(StopReason::QuotaDepleted)
        } else {
            None
        }
    }

    /// Record a fetched page and decide what comes next
    ///
    /// A flag that has gone false stays false.
    pub fn process_response(&mut self, response: &PageResponse) -> NextPage {
        self.pages_fetched += 1;
        self.total_fetched += response.len() as u64;
        self.quota_remaining = Some(response.quota_remaining);

        self.has_more = self.has_more && response.has_more;
        self.quota_ok = self.quota_ok && response.quota_remaining > QUOTA_THRESHOLD;
        self.page += 1;

        match self.stop_reason() {
            Some(reason) => NextPage::Done(reason),
            None => NextPage::Continue(self.page),
        }
    }
}
