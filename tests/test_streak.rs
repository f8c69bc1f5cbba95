//! Streak calculation tests.

mod common;

use common::{agg, record};
use wordstats::stats::{aggregate, longest_streak, streak};

// ---------------------------------------------------------------------------
// streak
// ---------------------------------------------------------------------------

#[test]
fn empty_series_has_no_streak() {
    assert_eq!(streak(&[]), 0);
}

#[test]
fn single_active_day_is_one() {
    assert_eq!(streak(&[agg("2024-01-01", 100, 100)]), 1);
}

#[test]
fn last_day_without_net_change_breaks_streak() {
    let daily = vec![
        agg("2024-01-01", 100, 100),
        agg("2024-01-02", 150, 50),
        agg("2024-01-03", 150, 0),
    ];
    assert_eq!(streak(&daily), 0);
}

#[test]
fn counts_consecutive_calendar_days() {
    let daily = vec![
        agg("2024-01-01", 100, 100),
        agg("2024-01-03", 150, 50),
        agg("2024-01-04", 170, 20),
        agg("2024-01-05", 160, -10),
    ];
    assert_eq!(streak(&daily), 3);
}

#[test]
fn gap_day_stops_the_walk() {
    let records = vec![
        record("2024-01-01 10:00:00", "a", 100, 100),
        record("2024-01-03 09:00:00", "a", 150, 50),
    ];
    assert_eq!(streak(&aggregate(&records)), 1);
}

#[test]
fn zero_day_in_the_middle_stops_the_walk() {
    let daily = vec![
        agg("2024-01-01", 100, 100),
        agg("2024-01-02", 100, 0),
        agg("2024-01-03", 130, 30),
    ];
    assert_eq!(streak(&daily), 1);
}

#[test]
fn streak_is_anchored_at_last_data_day() {
    let daily = vec![
        agg("2023-06-10", 10, 10),
        agg("2023-06-11", 20, 10),
    ];
    assert_eq!(streak(&daily), 2);
}

#[test]
fn crosses_month_and_year_boundaries() {
    let daily = vec![
        agg("2023-12-30", 10, 10),
        agg("2023-12-31", 20, 10),
        agg("2024-01-01", 30, 10),
    ];
    assert_eq!(streak(&daily), 3);
}

// ---------------------------------------------------------------------------
// longest_streak
// ---------------------------------------------------------------------------

#[test]
fn longest_streak_of_empty_is_zero() {
    assert_eq!(longest_streak(&[]), 0);
}

#[test]
fn longest_streak_finds_earlier_run() {
    let daily = vec![
        agg("2024-01-01", 10, 10),
        agg("2024-01-02", 20, 10),
        agg("2024-01-03", 30, 10),
        agg("2024-01-05", 40, 10),
        agg("2024-01-06", 40, 0),
    ];
    assert_eq!(longest_streak(&daily), 3);
    assert_eq!(streak(&daily), 0);
}

#[test]
fn longest_streak_is_split_by_zero_days() {
    let daily = vec![
        agg("2024-01-01", 10, 10),
        agg("2024-01-02", 10, 0),
        agg("2024-01-03", 20, 10),
        agg("2024-01-04", 30, 10),
    ];
    assert_eq!(longest_streak(&daily), 2);
}
