//! Dashboard assembly tests.

mod common;

use common::{day, record, sample_records};
use wordstats::stats::assemble;
use wordstats::{TimeWindow, ViewModel};

#[test]
fn empty_records_give_zero_defaults() {
    let view = assemble(&[], TimeWindow::Week, day("2024-01-04"));
    assert!(view.daily.is_empty());
    assert!(view.recent_saves.is_empty());
    assert_eq!(view.latest_total, 0);
    assert_eq!(view.latest_net_change, 0);
    assert_eq!(view.writing_streak, 0);
    assert_eq!(view.longest_streak, 0);
    assert_eq!(view.active_days, 0);
    assert_eq!(view.window_investment, 0);
    assert_eq!(view.chart.len(), 7);
    assert!(view.chart.iter().all(|p| p.total_words.is_none()));
    assert!(view.heatmap.is_empty());
}

#[test]
fn week_view_of_sample_log() {
    let view = assemble(&sample_records(), TimeWindow::Week, day("2024-01-04"));

    assert_eq!(view.daily.len(), 3);
    assert_eq!(view.latest_total, 200);
    assert_eq!(view.latest_net_change, 50);
    assert_eq!(view.writing_streak, 2);
    assert_eq!(view.longest_streak, 2);
    assert_eq!(view.active_days, 3);
    assert_eq!(view.window_investment, 260);
    assert_eq!(view.heatmap.len(), 3);

    assert_eq!(view.chart.len(), 7);
    assert_eq!(view.chart[0].date, day("2023-12-29"));
    assert_eq!(view.chart[2].total_words, None);
    assert_eq!(view.chart[3].total_words, Some(100));
    assert_eq!(view.chart[4].daily_words, 0);
    assert_eq!(view.chart[4].total_words, Some(100));
    assert_eq!(view.chart[6].total_words, Some(200));
}

#[test]
fn recent_saves_are_newest_first() {
    let view = assemble(&sample_records(), TimeWindow::Week, day("2024-01-04"));
    let totals: Vec<_> = view.recent_saves.iter().map(|r| r.total_words).collect();
    assert_eq!(totals, vec![200, 150, 180]);
}

#[test]
fn recent_saves_returns_all_when_fewer_than_three() {
    let records = vec![
        record("2024-01-01 10:00:00", "a", 10, 10),
        record("2024-01-01 11:00:00", "a", 25, 15),
    ];
    let view = assemble(&records, TimeWindow::Week, day("2024-01-01"));
    let totals: Vec<_> = view.recent_saves.iter().map(|r| r.total_words).collect();
    assert_eq!(totals, vec![25, 10]);
}

#[test]
fn latest_total_uses_last_raw_record_not_last_day() {
    // Input order is not chronological: the last raw record is from an
    // earlier day than the last aggregate.
    let records = vec![
        record("2024-01-02 10:00:00", "a", 300, 300),
        record("2024-01-01 10:00:00", "a", 120, 120),
    ];
    let view = assemble(&records, TimeWindow::Week, day("2024-01-02"));
    assert_eq!(view.latest_total, 120);
    assert_eq!(view.daily.last().unwrap().total_words, 300);
}

#[test]
fn window_limits_chart_but_not_streak() {
    let view = assemble(&sample_records(), TimeWindow::Week, day("2024-01-10"));
    assert_eq!(view.daily.len(), 3);
    assert_eq!(view.writing_streak, 2);
    assert_eq!(view.active_days, 1);
    assert_eq!(view.window_investment, 50);
    assert_eq!(view.chart[0].date, day("2024-01-04"));
    assert_eq!(view.chart[0].total_words, Some(200));
    assert!(view.chart.iter().all(|p| p.total_words == Some(200)));
}

#[test]
fn window_presets_set_chart_length() {
    let records = sample_records();
    let today = day("2024-06-01");
    assert_eq!(assemble(&records, TimeWindow::Week, today).chart.len(), 7);
    assert_eq!(assemble(&records, TimeWindow::Month, today).chart.len(), 30);
    let year = assemble(&records, TimeWindow::Year, today);
    assert_eq!(year.chart.len(), 180);
    assert_eq!(year.active_days, 3);
}

#[test]
fn time_window_parses_labels() {
    assert_eq!("week".parse::<TimeWindow>().unwrap(), TimeWindow::Week);
    assert_eq!("Month".parse::<TimeWindow>().unwrap(), TimeWindow::Month);
    assert_eq!(" year ".parse::<TimeWindow>().unwrap(), TimeWindow::Year);
    assert!("decade".parse::<TimeWindow>().is_err());
    assert_eq!(TimeWindow::Year.days(), 180);
    assert_eq!(TimeWindow::Year.to_string(), "year");
}

#[test]
fn view_model_serializes_camel_case() {
    let view = assemble(&sample_records(), TimeWindow::Week, day("2024-01-04"));
    let json = serde_json::to_value(&view).unwrap();
    assert_eq!(json["writingStreak"], 2);
    assert_eq!(json["latestTotal"], 200);
    assert_eq!(json["latestNetChange"], 50);
    assert_eq!(json["daily"][0]["totalInvestment"], 100);
    assert_eq!(json["recentSaves"][0]["timestamp"], "2024-01-04T08:15:00");
    assert!(json["chart"][0]["totalWords"].is_null());

    let back: ViewModel = serde_json::from_value(json).unwrap();
    assert_eq!(back, view);
}

#[test]
fn window_investment_saturates() {
    let records = vec![
        record("2024-01-01 09:00:00", "a", 0, i64::MIN),
        record("2024-01-01 10:00:00", "a", 0, i64::MIN),
        record("2024-01-02 09:00:00", "a", 5, i64::MIN),
        record("2024-01-02 10:00:00", "a", 5, i64::MIN),
    ];
    let view = assemble(&records, TimeWindow::Week, day("2024-01-02"));
    assert_eq!(view.window_investment, u64::MAX);
    assert_eq!(view.latest_net_change, 5);
}
