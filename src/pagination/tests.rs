//! Tests for pagination module

use super::*;
use crate::decode::PageResponse;
use crate::types::JsonObject;
use test_case::test_case;

fn page(count: usize, has_more: bool, quota_remaining: i64) -> PageResponse {
    PageResponse::new(vec![JsonObject::new(); count], has_more, quota_remaining)
}

#[test]
fn test_pagination_state_default() {
    let state = PaginationState::new();
    assert_eq!(state.page, 1);
    assert_eq!(state.pages_fetched, 0);
    assert_eq!(state.total_fetched, 0);
    assert!(state.has_more());
    assert!(state.quota_ok());
    assert!(state.should_continue());
    assert_eq!(state.stop_reason(), None);
}

#[test]
fn test_continue_advances_page() {
    let mut state = PaginationState::new();

    let next = state.process_response(&page(100, true, 9_000));
    assert_eq!(next, NextPage::Continue(2));
    assert!(next.is_continue());

    let next = state.process_response(&page(100, true, 8_999));
    assert_eq!(next, NextPage::Continue(3));
    assert_eq!(state.pages_fetched, 2);
    assert_eq!(state.total_fetched, 200);
    assert_eq!(state.quota_remaining, Some(8_999));
}

#[test]
fn test_exhausted_stops() {
    let mut state = PaginationState::new();
    let next = state.process_response(&page(3, false, 9_000));
    assert_eq!(next, NextPage::Done(StopReason::Exhausted));
    assert!(next.is_done());
    assert!(!state.should_continue());
}

#[test_case(10_000, true ; "well above threshold")]
#[test_case(501, true ; "one above threshold")]
#[test_case(500, false ; "at threshold")]
#[test_case(0, false ; "empty quota")]
fn test_quota_threshold(quota_remaining: i64, keeps_going: bool) {
    let mut state = PaginationState::new();
    let next = state.process_response(&page(100, true, quota_remaining));
    assert_eq!(next.is_continue(), keeps_going);
    assert_eq!(state.quota_ok(), keeps_going);
    if !keeps_going {
        assert_eq!(next, NextPage::Done(StopReason::QuotaDepleted));
    }
}

#[test]
fn test_exhaustion_reported_before_quota() {
    let mut state = PaginationState::new();
    let next = state.process_response(&page(1, false, 10));
    assert_eq!(next, NextPage::Done(StopReason::Exhausted));
    assert!(!state.quota_ok());
}

#[test]
fn test_flags_never_reset() {
    let mut state = PaginationState::new();
    state.process_response(&page(1, true, 400));
    assert!(!state.quota_ok());

    // A later response with plenty of quota does not revive the loop
    let next = state.process_response(&page(1, true, 9_000));
    assert!(next.is_done());
    assert!(!state.quota_ok());
}

#[test]
fn test_stop_reason_display() {
    assert_eq!(StopReason::Exhausted.to_string(), "no more results");
    assert_eq!(StopReason::QuotaDepleted.to_string(), "quota depleted");
}
