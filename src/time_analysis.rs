//! Moving/waiting time segmentation over a time-sorted run.
//!
//! GPS loggers keep sampling while the runner stands at a crossing, so the
//! split between moving and waiting comes from the gap length between
//! consecutive samples, not from speed.

use chrono::NaiveDateTime;

use crate::track_point::TrackPoint;

/// Gaps shorter than this count as moving; anything longer is a wait.
pub const MOVING_GAP_THRESHOLD_SECS: i64 = 10;

#[derive(Debug, Clone, Default)]
pub struct TimeBreakdown {
    pub moving_seconds: i64,
    pub waiting_seconds: i64,
}

impl TimeBreakdown {
    pub fn total_seconds(&self) -> i64 {
        self.moving_seconds + self.waiting_seconds
    }
}

/// Signed whole-second difference `b - a`; negative when out of order.
pub fn seconds_between(a: NaiveDateTime, b: NaiveDateTime) -> i64 {
    b.signed_duration_since(a).num_seconds()
}

/// Split the run into moving and waiting time using the fixed gap threshold.
///
/// Out-of-order samples produce negative gaps; they accrue signed rather
/// than aborting the report.
pub fn segment_time(points: &[TrackPoint]) -> TimeBreakdown {
    let mut breakdown = TimeBreakdown::default();

    for pair in points.windows(2) {
        let gap = seconds_between(pair[0].time, pair[1].time);
        if gap < MOVING_GAP_THRESHOLD_SECS {
            breakdown.moving_seconds += gap;
        } else {
            breakdown.waiting_seconds += gap;
        }
    }

    breakdown
}

/// Render an accumulated duration as `HH:MM:SS`. Hours do not wrap at 24.
pub fn format_duration(total_seconds: i64) -> String {
    let sign = if total_seconds < 0 { "-" } else { "" };
    let seconds = total_seconds.abs();
    format!(
        "{}{:02}:{:02}:{:02}",
        sign,
        seconds / 3600,
        (seconds % 3600) / 60,
        seconds % 60
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::track_point::parse_timestamp;

    fn point_at(time: &str) -> TrackPoint {
        TrackPoint::new(38.892483, -99.318208, 602.1, parse_timestamp(time).unwrap())
    }

    #[test]
    fn test_seconds_between_is_signed() {
        let a = parse_timestamp("2025-01-15T06:00:00").unwrap();
        let b = parse_timestamp("2025-01-15T06:00:42").unwrap();

        assert_eq!(seconds_between(a, b), 42);
        assert_eq!(seconds_between(b, a), -42);
        assert_eq!(seconds_between(a, a), 0);
    }

    #[test]
    fn test_gap_classification_split() {
        // Consecutive gaps of 5s, 15s and 3s.
        let points = vec![
            point_at("2025-01-15T06:00:00"),
            point_at("2025-01-15T06:00:05"),
            point_at("2025-01-15T06:00:20"),
            point_at("2025-01-15T06:00:23"),
        ];

        let breakdown = segment_time(&points);
        assert_eq!(breakdown.moving_seconds, 8);
        assert_eq!(breakdown.waiting_seconds, 15);
        assert_eq!(breakdown.total_seconds(), 23);
    }

    #[test]
    fn test_boundary_gap_is_waiting() {
        // Exactly 10s falls on the waiting side of the threshold.
        let points = vec![
            point_at("2025-01-15T06:00:00"),
            point_at("2025-01-15T06:00:10"),
        ];

        let breakdown = segment_time(&points);
        assert_eq!(breakdown.moving_seconds, 0);
        assert_eq!(breakdown.waiting_seconds, 10);
    }

    #[test]
    fn test_out_of_order_gap_accrues_signed() {
        let points = vec![
            point_at("2025-01-15T06:00:20"),
            point_at("2025-01-15T06:00:05"),
            point_at("2025-01-15T06:00:09"),
        ];

        let breakdown = segment_time(&points);
        assert_eq!(breakdown.moving_seconds, -11);
        assert_eq!(breakdown.waiting_seconds, 0);
    }

    #[test]
    fn test_short_sequences_have_no_gaps() {
        assert_eq!(segment_time(&[]).total_seconds(), 0);
        assert_eq!(
            segment_time(&[point_at("2025-01-15T06:00:00")]).total_seconds(),
            0
        );
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0), "00:00:00");
        assert_eq!(format_duration(59), "00:00:59");
        assert_eq!(format_duration(3661), "01:01:01");
        assert_eq!(format_duration(-75), "-00:01:15");
    }

    #[test]
    fn test_format_duration_does_not_wrap_at_24h() {
        assert_eq!(format_duration(90_000), "25:00:00");
        assert_eq!(format_duration(360_000), "100:00:00");
    }
}
