use std::path::Path;
use std::process;

mod elevation;
mod geometry;
mod loader;
mod reconcile;
mod report;
mod time_analysis;
mod track_point;
mod track_stats;

use loader::load_track_points;
use reconcile::AlignmentDecision;
use report::RunReport;
use time_analysis::format_duration;
use track_stats::TrackSummary;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("ERROR: Please provide two data file names as command arguments.");
        process::exit(1);
    }

    println!("📄 Loading run data from: {}", args[1]);
    let run_a = load_track_points(Path::new(&args[1]))?;
    println!("✅ Loaded {} points", run_a.len());

    println!("📄 Loading run data from: {}", args[2]);
    let run_b = load_track_points(Path::new(&args[2]))?;
    println!("✅ Loaded {} points\n", run_b.len());

    let report = RunReport::build(run_a, run_b);
    print_report(&report);

    Ok(())
}

fn print_report(report: &RunReport) {
    println!("=====================");
    println!("Elevation Report");
    println!("=====================");
    println!("Highest Elevation: {:.2}m", report.elevation_range.highest_m);
    println!("Lowest Elevation: {:.2}m\n", report.elevation_range.lowest_m);

    println!("=====================");
    println!("Elevation Gain Report");
    println!("=====================");
    println!("Elevation Gain: +{:.2}m\n", report.elevation_gain_m);

    println!("=====================");
    println!("Distance Report");
    println!("=====================");
    println!("Total distance: {:.2}km\n", report.total_distance_km);

    println!("=====================");
    println!("Time Report");
    println!("=====================");
    let time = &report.time_breakdown;
    println!(
        "Moving time: {} ({}s)",
        format_duration(time.moving_seconds),
        time.moving_seconds
    );
    println!(
        "Wait time: {} ({}s)",
        format_duration(time.waiting_seconds),
        time.waiting_seconds
    );
    println!(
        "Total time: {} ({}s)\n",
        format_duration(time.total_seconds()),
        time.total_seconds()
    );

    println!("=====================");
    println!("Track Quality Report");
    println!("=====================");
    print_track_summary("Data Set A", &report.summary_a);
    print_track_summary("Data Set B", &report.summary_b);
    println!();

    println!("==========================================");
    println!("Inconsistent/Missing Data Reports");
    println!("==========================================");
    for decision in &report.reconciliation.decisions {
        match decision {
            AlignmentDecision::MissingInB { a } => {
                println!("Data point {} missing in Data Set B", a);
            }
            AlignmentDecision::MissingInA { b } => {
                println!("Data point {} missing in Data Set A", b);
            }
            AlignmentDecision::Matched { a, b, consistent } => {
                if !consistent {
                    println!("Data points are inconsistent:");
                    println!("{}", a);
                    println!("{}", b);
                }
            }
        }
    }
    println!(
        "\nNumber of missing data points: {}",
        report.reconciliation.missing_count
    );
    println!(
        "Number of inconsistent data points: {}",
        report.reconciliation.inconsistent_count
    );
}

fn print_track_summary(label: &str, summary: &TrackSummary) {
    println!(
        "{}: {} points, {:.1}m average spacing, {:.1}s average interval",
        label, summary.point_count, summary.average_spacing_m, summary.average_interval_seconds
    );
}
