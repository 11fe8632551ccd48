use crate::domain::model::PollTimeWindow;

const SECONDS_PER_DAY: i64 = 86_400;
const SECONDS_PER_HOUR: i64 = 3_600;

/// Hours credited to one window.
///
/// Only the time-of-day part of `end - start` counts: the span is reduced
/// modulo one day before dividing by an hour, so whole days and leftover
/// minutes are dropped, and a window whose end precedes its start wraps
/// around (one hour backwards counts as 23).
pub fn window_hours(window: &PollTimeWindow) -> i64 {
    let elapsed = (window.end - window.start).num_seconds();
    elapsed.rem_euclid(SECONDS_PER_DAY) / SECONDS_PER_HOUR
}

/// Total poll duration in whole hours across all windows.
pub fn total_hours(windows: &[PollTimeWindow]) -> i64 {
    windows.iter().map(window_hours).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn window(start: &str, end: &str) -> PollTimeWindow {
        let parse = |s| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M").unwrap();
        PollTimeWindow {
            start: parse(start),
            end: parse(end),
        }
    }

    #[test]
    fn test_same_day_window() {
        assert_eq!(window_hours(&window("2024-01-01T09:00", "2024-01-01T17:00")), 8);
    }

    #[test]
    fn test_minutes_are_truncated() {
        assert_eq!(window_hours(&window("2024-01-01T09:00", "2024-01-01T10:59")), 1);
        assert_eq!(window_hours(&window("2024-01-01T09:00", "2024-01-01T09:59")), 0);
    }

    #[test]
    fn test_cross_midnight_window() {
        assert_eq!(window_hours(&window("2024-01-01T23:00", "2024-01-02T01:00")), 2);
    }

    #[test]
    fn test_whole_days_are_dropped() {
        // 26 hours elapsed, only the 2 beyond the full day count
        assert_eq!(window_hours(&window("2024-01-01T09:00", "2024-01-02T11:00")), 2);
        assert_eq!(window_hours(&window("2024-01-01T09:00", "2024-01-02T09:00")), 0);
    }

    #[test]
    fn test_reversed_window_wraps() {
        assert_eq!(window_hours(&window("2024-01-01T10:00", "2024-01-01T09:00")), 23);
        assert_eq!(window_hours(&window("2024-01-01T10:00", "2024-01-01T09:30")), 23);
    }

    #[test]
    fn test_total_hours() {
        let windows = vec![
            window("2024-01-01T09:00", "2024-01-01T17:00"),
            window("2024-01-02T09:00", "2024-01-02T13:00"),
        ];
        assert_eq!(total_hours(&windows), 12);
        assert_eq!(total_hours(&[]), 0);
    }
}
