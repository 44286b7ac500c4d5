//! Tests for the window module

use super::*;
use test_case::test_case;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn params_map(params: Vec<(String, String)>) -> std::collections::HashMap<String, String> {
    params.into_iter().collect()
}

#[test]
fn test_no_bookmark_uses_start_date() {
    let params = window_params(
        WindowVariant::OpenEnded,
        None,
        date(2024, 1, 1),
        date(2024, 6, 1),
    )
    .unwrap();

    let map = params_map(params);
    assert_eq!(map.get("dateFrom").map(String::as_str), Some("2024-01-01"));
    assert!(!map.contains_key("dateTo"));
}

#[test]
fn test_bookmark_opens_one_day_earlier() {
    let params = window_params(
        WindowVariant::OpenEnded,
        Some("2024-03-10"),
        date(2024, 1, 1),
        date(2024, 6, 1),
    )
    .unwrap();

    let map = params_map(params);
    assert_eq!(map.get("dateFrom").map(String::as_str), Some("2024-03-09"));
}

#[test_case("2024-05-01T09:30:00Z", "2024-04-30"; "timestamp bookmark")]
#[test_case("2024-03-01", "2024-02-29"; "leap day rollback")]
#[test_case("2024-01-01T00:00:00.000Z", "2023-12-31"; "year boundary")]
fn test_bookmark_date_portion(bookmark: &str, expected_from: &str) {
    let params = window_params(
        WindowVariant::OpenEnded,
        Some(bookmark),
        date(2023, 1, 1),
        date(2024, 6, 1),
    )
    .unwrap();

    let map = params_map(params);
    assert_eq!(map.get("dateFrom").map(String::as_str), Some(expected_from));
}

#[test]
fn test_bounded_window_sets_date_to() {
    let params = window_params(
        WindowVariant::BoundedToToday,
        Some("2024-05-01"),
        date(2024, 1, 1),
        date(2024, 5, 14),
    )
    .unwrap();

    let map = params_map(params);
    assert_eq!(map.get("dateFrom").map(String::as_str), Some("2024-04-30"));
    assert_eq!(map.get("dateTo").map(String::as_str), Some("2024-05-14"));
}

#[test]
fn test_malformed_bookmark_is_a_state_error() {
    let err = window_params(
        WindowVariant::OpenEnded,
        Some("garbage"),
        date(2024, 1, 1),
        date(2024, 6, 1),
    )
    .unwrap_err();

    assert!(err.to_string().contains("Malformed bookmark"));
}
