//! Constants for the dashboard and per-user health statistics.

use std::ops::RangeInclusive;

/// Risk score shown on the dashboard when the user has no predictions yet.
pub const DEFAULT_DASHBOARD_RISK_SCORE: i32 = 85;

/// Average risk reported by health-stats when the user has no predictions.
pub const DEFAULT_STATS_RISK_SCORE: i32 = 0;

/// Number of predictions returned by the history endpoint.
pub const PREDICTION_HISTORY_LIMIT: i64 = 10;

/// Number of predictions and alerts shown on the dashboard.
pub const DASHBOARD_RECENT_LIMIT: i64 = 5;

/// Window, in days, covered by the dashboard's daily risk trend.
pub const HEALTH_TREND_WINDOW_DAYS: i64 = 7;

/// Range of the placeholder community engagement score.
pub const COMMUNITY_SCORE_RANGE: RangeInclusive<i32> = 70..=95;

/// Truncate an optional SQL average to a whole score, falling back to `default`.
pub fn truncate_average(avg: Option<f64>, default: i32) -> i32 {
    avg.map(|v| v.trunc() as i32).unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_average_drops_fraction() {
        assert_eq!(truncate_average(Some(47.9), 0), 47);
        assert_eq!(truncate_average(Some(30.0), 0), 30);
    }

    #[test]
    fn test_truncate_average_default() {
        assert_eq!(
            truncate_average(None, DEFAULT_DASHBOARD_RISK_SCORE),
            DEFAULT_DASHBOARD_RISK_SCORE
        );
        assert_eq!(truncate_average(None, DEFAULT_STATS_RISK_SCORE), 0);
    }
}
