//! Reconciliation of two recordings of the same run.
//!
//! Both devices are expected to have sampled the same physical run. This
//! module merges the two time-sorted sequences with two cursors and
//! classifies every step, without mutating either input. A point present in
//! only one recording is reported missing from the other, and a synthesized
//! copy keeps the aligned output sequences in step.

use crate::track_point::TrackPoint;

/// Maximum coordinate difference, in degrees, before a matched pair is
/// flagged inconsistent. Roughly 111 m of latitude at the equator.
pub const COORDINATE_TOLERANCE_DEG: f64 = 0.001;

#[derive(Debug, Clone)]
pub enum AlignmentDecision {
    /// Both devices recorded this instant.
    Matched {
        a: TrackPoint,
        b: TrackPoint,
        consistent: bool,
    },
    /// Only device A recorded this instant; B gets a synthesized copy.
    MissingInB { a: TrackPoint },
    /// Only device B recorded this instant; A gets a synthesized copy.
    MissingInA { b: TrackPoint },
}

#[derive(Debug, Clone, Default)]
pub struct ReconciliationReport {
    pub decisions: Vec<AlignmentDecision>,
    pub missing_count: usize,
    pub inconsistent_count: usize,
    /// Recording A with synthesized stand-ins for points only B captured.
    pub aligned_a: Vec<TrackPoint>,
    /// Recording B with synthesized stand-ins for points only A captured.
    pub aligned_b: Vec<TrackPoint>,
}

impl ReconciliationReport {
    fn push_matched(&mut self, a: &TrackPoint, b: &TrackPoint) {
        let consistent = coordinates_consistent(a, b);
        if !consistent {
            self.inconsistent_count += 1;
        }
        self.aligned_a.push(a.clone());
        self.aligned_b.push(b.clone());
        self.decisions.push(AlignmentDecision::Matched {
            a: a.clone(),
            b: b.clone(),
            consistent,
        });
    }

    fn push_missing_in_b(&mut self, a: &TrackPoint) {
        self.missing_count += 1;
        self.aligned_a.push(a.clone());
        self.aligned_b.push(a.clone());
        self.decisions
            .push(AlignmentDecision::MissingInB { a: a.clone() });
    }

    fn push_missing_in_a(&mut self, b: &TrackPoint) {
        self.missing_count += 1;
        self.aligned_a.push(b.clone());
        self.aligned_b.push(b.clone());
        self.decisions
            .push(AlignmentDecision::MissingInA { b: b.clone() });
    }
}

/// Whether two matched points agree within the coordinate tolerance.
/// A difference of exactly the tolerance still counts as consistent.
fn coordinates_consistent(a: &TrackPoint, b: &TrackPoint) -> bool {
    (a.latitude - b.latitude).abs() <= COORDINATE_TOLERANCE_DEG
        && (a.longitude - b.longitude).abs() <= COORDINATE_TOLERANCE_DEG
}

/// Merge two time-sorted recordings and classify every position.
///
/// Synthesized pairs are never tolerance-checked: a point cannot disagree
/// with its own copy. Duplicate timestamps within one recording simply
/// match (or report missing) in sequence order.
pub fn reconcile(run_a: &[TrackPoint], run_b: &[TrackPoint]) -> ReconciliationReport {
    let mut report = ReconciliationReport::default();
    let mut ia = 0;
    let mut ib = 0;

    while ia < run_a.len() && ib < run_b.len() {
        let a = &run_a[ia];
        let b = &run_b[ib];

        if a.time < b.time {
            report.push_missing_in_b(a);
            ia += 1;
        } else if a.time > b.time {
            report.push_missing_in_a(b);
            ib += 1;
        } else {
            report.push_matched(a, b);
            ia += 1;
            ib += 1;
        }
    }

    // Whatever is left in one recording is missing from the other.
    for a in &run_a[ia..] {
        report.push_missing_in_b(a);
    }
    for b in &run_b[ib..] {
        report.push_missing_in_a(b);
    }

    report
}
