#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn elapsed_is_difference_of_marks() {
    assert_eq!(load_time_ms(1_000_000.0, 1_000_850.0), Some(850.0));
}

#[test]
fn unset_load_end_yields_nothing() {
    assert_eq!(load_time_ms(1_000_000.0, 0.0), None);
}

#[test]
fn missing_navigation_start_yields_nothing() {
    assert_eq!(load_time_ms(0.0, 500.0), None);
}

#[test]
fn threshold_is_exclusive() {
    assert_eq!(verdict(2_000.0, 2_000.0), LoadVerdict::Normal);
    assert_eq!(verdict(2_000.5, 2_000.0), LoadVerdict::Slow);
}

#[test]
fn log_load_time_returns_verdict() {
    assert_eq!(log_load_time(350.0, 2_000.0), LoadVerdict::Normal);
    assert_eq!(log_load_time(4_200.0, 2_000.0), LoadVerdict::Slow);
}
