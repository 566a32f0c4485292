//! Loads run data files into track point sequences.
//!
//! Two input formats are understood: comma-separated run logs
//! (`latitude,longitude,elevation,time` with one header line) and GPX track
//! files. A malformed CSV row aborts the whole load, so no partial report
//! can be produced from a bad file. GPX points are kept only when they
//! carry both an elevation and a timestamp.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Deserialize;

use crate::track_point::{parse_timestamp, FormatError, TrackPoint};

#[derive(Debug, Deserialize)]
struct RawTrackRecord {
    latitude: f64,
    longitude: f64,
    elevation: f64,
    time: String,
}

/// Load a run data file, dispatching on its extension.
pub fn load_track_points(path: &Path) -> Result<Vec<TrackPoint>, Box<dyn std::error::Error>> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    match extension.as_str() {
        "gpx" => load_gpx_file(path),
        _ => load_csv_file(path),
    }
}

/// Read a comma-separated run log: one header line, then one sample per row.
pub fn load_csv_file(path: &Path) -> Result<Vec<TrackPoint>, Box<dyn std::error::Error>> {
    let file = File::open(path).map_err(|e| format!("failed to open {}: {}", path.display(), e))?;
    read_csv_points(BufReader::new(file))
}

fn read_csv_points<R: Read>(reader: R) -> Result<Vec<TrackPoint>, Box<dyn std::error::Error>> {
    let mut rdr = csv::Reader::from_reader(reader);
    let mut points = Vec::new();

    for (row, result) in rdr.deserialize::<RawTrackRecord>().enumerate() {
        // Rows are numbered from 2: line 1 is the header.
        let record =
            result.map_err(|e| FormatError::new(format!("malformed row {}: {}", row + 2, e)))?;
        let time = parse_timestamp(record.time.trim())
            .map_err(|e| FormatError::new(format!("row {}: {}", row + 2, e)))?;
        points.push(TrackPoint::new(
            record.latitude,
            record.longitude,
            record.elevation,
            time,
        ));
    }

    Ok(points)
}

/// Read a GPX file, keeping track points that carry elevation and time.
pub fn load_gpx_file(path: &Path) -> Result<Vec<TrackPoint>, Box<dyn std::error::Error>> {
    let file = File::open(path).map_err(|e| format!("failed to open {}: {}", path.display(), e))?;
    let gpx = gpx::read(BufReader::new(file))
        .map_err(|e| format!("failed to parse GPX {}: {}", path.display(), e))?;

    let mut points = Vec::new();
    for track in &gpx.tracks {
        for segment in &track.segments {
            for waypoint in &segment.points {
                let elevation = match waypoint.elevation {
                    Some(e) => e,
                    None => continue,
                };
                let time = match waypoint.time.and_then(gpx_time_to_naive) {
                    Some(t) => t,
                    None => continue,
                };
                points.push(TrackPoint::new(
                    waypoint.point().y(),
                    waypoint.point().x(),
                    elevation,
                    time,
                ));
            }
        }
    }

    if points.is_empty() {
        return Err(format!(
            "no track points with elevation and time in {}",
            path.display()
        )
        .into());
    }

    Ok(points)
}

fn gpx_time_to_naive(time: gpx::Time) -> Option<NaiveDateTime> {
    let formatted = time.format().ok()?;
    let parsed = formatted.parse::<DateTime<Utc>>().ok()?;
    Some(parsed.naive_utc())
}
