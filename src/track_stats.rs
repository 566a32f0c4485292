//! Track quality summary: how dense and how regular a recording is.

use geo::{point, HaversineDistance};

use crate::time_analysis::seconds_between;
use crate::track_point::TrackPoint;

#[derive(Debug, Clone, Default)]
pub struct TrackSummary {
    pub point_count: usize,
    pub average_spacing_m: f64,
    pub average_interval_seconds: f64,
}

/// Summarize a time-sorted recording: how many points, how far apart on
/// average, and how often the device sampled. Empty and single-point
/// recordings yield zeroed averages.
pub fn summarize_track(points: &[TrackPoint]) -> TrackSummary {
    let mut summary = TrackSummary {
        point_count: points.len(),
        ..TrackSummary::default()
    };

    if points.len() < 2 {
        return summary;
    }

    let spacing_total: f64 = points
        .windows(2)
        .map(|pair| {
            let from = point!(x: pair[0].longitude, y: pair[0].latitude);
            let to = point!(x: pair[1].longitude, y: pair[1].latitude);
            from.haversine_distance(&to)
        })
        .sum();
    summary.average_spacing_m = spacing_total / (points.len() - 1) as f64;

    // Only forward gaps say anything about the sampling cadence.
    let intervals: Vec<i64> = points
        .windows(2)
        .map(|pair| seconds_between(pair[0].time, pair[1].time))
        .filter(|&gap| gap > 0)
        .collect();
    if !intervals.is_empty() {
        summary.average_interval_seconds =
            intervals.iter().sum::<i64>() as f64 / intervals.len() as f64;
    }

    summary
}
