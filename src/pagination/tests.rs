//! Tests for the pagination module

use super::*;

#[test]
fn test_initial_params_start_at_page_one() {
    let paginator = PageCountPaginator::new(100);
    let state = PaginationState::new();

    let params = paginator.page_params(&state);
    assert!(params.contains(&("count".to_string(), "100".to_string())));
    assert!(params.contains(&("page".to_string(), "1".to_string())));
}

#[test]
fn test_full_page_continues_to_next_page() {
    let paginator = PageCountPaginator::new(100);
    let mut state = PaginationState::new();

    let next = paginator.process_page(100, &mut state);
    assert!(next.is_continue());
    assert_eq!(state.page, 2);
    assert_eq!(state.total_fetched, 100);
    assert!(!state.done);

    if let NextPage::Continue { query_params } = next {
        assert!(query_params.contains(&("page".to_string(), "2".to_string())));
    }
}

#[test]
fn test_short_page_terminates() {
    let paginator = PageCountPaginator::new(100);
    let mut state = PaginationState::new();

    assert!(paginator.process_page(100, &mut state).is_continue());
    assert!(paginator.process_page(42, &mut state).is_done());
    assert!(state.done);
    assert_eq!(state.total_fetched, 142);
}

#[test]
fn test_empty_page_terminates() {
    let paginator = PageCountPaginator::new(100);
    let mut state = PaginationState::new();

    assert!(paginator.process_page(100, &mut state).is_continue());
    assert!(paginator.process_page(0, &mut state).is_done());
    assert_eq!(state.total_fetched, 100);
}

#[test]
fn test_page_sequence_counts() {
    // Pages of sizes [N, N, N, k] with k < N must yield 3N + k records
    // across exactly four process_page calls.
    let n = 50;
    let paginator = PageCountPaginator::new(n);
    let mut state = PaginationState::new();

    for _ in 0..3 {
        assert!(paginator.process_page(n as usize, &mut state).is_continue());
    }
    assert!(paginator.process_page(7, &mut state).is_done());
    assert_eq!(state.total_fetched, u64::from(3 * n) + 7);
    assert_eq!(state.page, 4);
}

#[test]
fn test_custom_param_names() {
    let paginator = PageCountPaginator::new(10).with_params("p", "limit");
    let state = PaginationState::new();

    let params = paginator.page_params(&state);
    assert!(params.contains(&("limit".to_string(), "10".to_string())));
    assert!(params.contains(&("p".to_string(), "1".to_string())));
}
