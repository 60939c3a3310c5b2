//! Daily submission streaks

use std::collections::BTreeSet;

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

/// Current and longest consecutive-day runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StreakSummary {
    pub current: u32,
    pub longest: u32,
}

/// Compute streaks from submission timestamps.
///
/// Timestamps are truncated to calendar days in UTC and deduplicated; two
/// days are consecutive iff they differ by exactly one day. `current` is
/// the trailing run in the data — it does not require the most recent
/// submission to be today.
pub fn compute_streak(timestamps: &[DateTime<Utc>]) -> StreakSummary {
    if timestamps.is_empty() {
        return StreakSummary { current: 0, longest: 0 };
    }

    // BTreeSet gives dedup and ascending order in one pass.
    let days: BTreeSet<NaiveDate> = timestamps.iter().map(|t| t.date_naive()).collect();

    let mut current = 1;
    let mut longest = 1;
    let mut prev: Option<NaiveDate> = None;

    for day in days {
        if let Some(prev_day) = prev {
            current = if (day - prev_day).num_days() == 1 {
                current + 1
            } else {
                1
            };
            longest = longest.max(current);
        }
        prev = Some(day);
    }

    StreakSummary { current, longest }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn day(d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, d, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(compute_streak(&[]), StreakSummary { current: 0, longest: 0 });
    }

    #[test]
    fn test_single_day() {
        assert_eq!(compute_streak(&[day(1)]), StreakSummary { current: 1, longest: 1 });
    }

    #[test]
    fn test_three_consecutive_days() {
        let dates = [day(1), day(2), day(3)];
        assert_eq!(compute_streak(&dates), StreakSummary { current: 3, longest: 3 });
    }

    #[test]
    fn test_gap_resets_run() {
        let dates = [day(1), day(3)];
        assert_eq!(compute_streak(&dates), StreakSummary { current: 1, longest: 1 });
    }

    #[test]
    fn test_current_is_trailing_run() {
        // Longest run of 3 early on, then a gap and a fresh 2-day run.
        let dates = [day(1), day(2), day(3), day(10), day(11)];
        assert_eq!(compute_streak(&dates), StreakSummary { current: 2, longest: 3 });
    }

    #[test]
    fn test_same_day_submissions_count_once() {
        let dates = [day(5), day(5), day(6), day(6), day(6)];
        assert_eq!(compute_streak(&dates), StreakSummary { current: 2, longest: 2 });
    }

    #[test]
    fn test_unordered_input() {
        let dates = [day(12), day(10), day(11)];
        assert_eq!(compute_streak(&dates), StreakSummary { current: 3, longest: 3 });
    }

    #[test]
    fn test_truncation_uses_utc_midnight() {
        let late = Utc.with_ymd_and_hms(2025, 6, 1, 23, 59, 0).unwrap();
        let early = Utc.with_ymd_and_hms(2025, 6, 2, 0, 1, 0).unwrap();
        assert_eq!(compute_streak(&[late, early]), StreakSummary { current: 2, longest: 2 });
    }
}
