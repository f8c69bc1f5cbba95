//! Consecutive-day writing streaks.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::models::DailyAggregate;

/// Count consecutive calendar days of nonzero net change, walking backward
/// from the date of the last aggregate.
///
/// The walk moves one calendar day at a time and stops at the first day that
/// has no aggregate or whose `net_change` is zero. Anchoring on the last data
/// day (not today) means an old streak still reports its length.
pub fn streak(daily: &[DailyAggregate]) -> u32 {
    let Some(last) = daily.last() else {
        return 0;
    };

    let by_date: HashMap<NaiveDate, i64> =
        daily.iter().map(|d| (d.date, d.net_change)).collect();

    let mut count = 0u32;
    let mut cursor = Some(last.date);
    while let Some(date) = cursor {
        match by_date.get(&date) {
            Some(&net) if net != 0 => {
                count += 1;
                cursor = date.pred_opt();
            }
            _ => break,
        }
    }
    count
}

/// Longest run of consecutive calendar days with nonzero net change anywhere
/// in the series.
pub fn longest_streak(daily: &[DailyAggregate]) -> u32 {
    let mut longest = 0u32;
    let mut run = 0u32;
    let mut prev: Option<NaiveDate> = None;

    for day in daily {
        if day.net_change == 0 {
            run = 0;
            prev = None;
            continue;
        }
        let adjacent = prev.and_then(|p| p.succ_opt()) == Some(day.date);
        run = if adjacent { run + 1 } else { 1 };
        longest = longest.max(run);
        prev = Some(day.date);
    }
    longest
}
