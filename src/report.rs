//! Assembles the structured run report the driver prints.
//!
//! The report owns both recordings for the lifetime of one run. Each
//! section sorts by the key it needs: elevation for the range section,
//! time for everything downstream of it.

use crate::elevation::elevation_gain;
use crate::geometry::total_distance_km;
use crate::reconcile::{reconcile, ReconciliationReport};
use crate::time_analysis::{segment_time, TimeBreakdown};
use crate::track_point::TrackPoint;
use crate::track_stats::{summarize_track, TrackSummary};

#[derive(Debug, Clone, Default)]
pub struct ElevationRange {
    pub lowest_m: f64,
    pub highest_m: f64,
}

#[derive(Debug)]
pub struct RunReport {
    pub elevation_range: ElevationRange,
    pub elevation_gain_m: f64,
    pub total_distance_km: f64,
    pub time_breakdown: TimeBreakdown,
    pub summary_a: TrackSummary,
    pub summary_b: TrackSummary,
    pub reconciliation: ReconciliationReport,
}

impl RunReport {
    /// Build every report section over the two recordings of one run.
    /// Sections other than reconciliation describe recording A.
    pub fn build(mut run_a: Vec<TrackPoint>, mut run_b: Vec<TrackPoint>) -> RunReport {
        run_a.sort_by(|x, y| x.elevation.total_cmp(&y.elevation));
        let elevation_range = ElevationRange {
            lowest_m: run_a.first().map(|p| p.elevation).unwrap_or(0.0),
            highest_m: run_a.last().map(|p| p.elevation).unwrap_or(0.0),
        };

        run_a.sort_by_key(|p| p.time);
        run_b.sort_by_key(|p| p.time);

        let elevations: Vec<f64> = run_a.iter().map(|p| p.elevation).collect();

        RunReport {
            elevation_range,
            elevation_gain_m: elevation_gain(&elevations),
            total_distance_km: total_distance_km(&run_a),
            time_breakdown: segment_time(&run_a),
            summary_a: summarize_track(&run_a),
            summary_b: summarize_track(&run_b),
            reconciliation: reconcile(&run_a, &run_b),
        }
    }
}
