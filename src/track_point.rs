//! GPS track point entity and field-level parsing.
//!
//! One `TrackPoint` is a single device reading: position in degrees,
//! elevation in meters and a second-precision timestamp. Input rows that do
//! not match the expected shape are rejected with a `FormatError` before
//! any report runs.

use std::fmt;

use chrono::NaiveDateTime;

/// Wire format for timestamps: ISO-8601 date and time, no timezone.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

#[derive(Debug, Clone, PartialEq)]
pub struct TrackPoint {
    pub latitude: f64,
    pub longitude: f64,
    pub elevation: f64,
    pub time: NaiveDateTime,
}

impl TrackPoint {
    pub fn new(latitude: f64, longitude: f64, elevation: f64, time: NaiveDateTime) -> Self {
        TrackPoint {
            latitude,
            longitude,
            elevation,
            time,
        }
    }
}

impl fmt::Display for TrackPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}  {:.6}, {:.6} ({:.2}m)",
            self.time.format(TIMESTAMP_FORMAT),
            self.latitude,
            self.longitude,
            self.elevation
        )
    }
}

/// Malformed input: wrong field count, non-numeric field or bad timestamp.
#[derive(Debug, Clone)]
pub struct FormatError {
    message: String,
}

impl FormatError {
    pub fn new(message: impl Into<String>) -> Self {
        FormatError {
            message: message.into(),
        }
    }
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for FormatError {}

/// Parse a timestamp in the fixed `YYYY-MM-DDTHH:MM:SS` wire format.
pub fn parse_timestamp(value: &str) -> Result<NaiveDateTime, FormatError> {
    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT).map_err(|_| {
        FormatError::new(format!(
            "invalid timestamp '{}', expected YYYY-MM-DDTHH:MM:SS",
            value
        ))
    })
}

fn parse_numeric_field(value: &str, name: &str) -> Result<f64, FormatError> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| FormatError::new(format!("invalid {} '{}', expected a number", name, value)))
}

/// Parse one `latitude,longitude,elevation,time` row into a `TrackPoint`.
pub fn parse_track_point(fields: &[&str]) -> Result<TrackPoint, FormatError> {
    if fields.len() != 4 {
        return Err(FormatError::new(format!(
            "expected 4 fields (latitude,longitude,elevation,time), got {}",
            fields.len()
        )));
    }

    Ok(TrackPoint {
        latitude: parse_numeric_field(fields[0], "latitude")?,
        longitude: parse_numeric_field(fields[1], "longitude")?,
        elevation: parse_numeric_field(fields[2], "elevation")?,
        time: parse_timestamp(fields[3].trim())?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_row() {
        let fields = ["38.892483", "-99.318208", "602.10", "2025-01-15T06:04:31"];
        let point = parse_track_point(&fields).unwrap();

        assert!((point.latitude - 38.892483).abs() < 1e-9);
        assert!((point.longitude + 99.318208).abs() < 1e-9);
        assert!((point.elevation - 602.10).abs() < 1e-9);
        assert_eq!(point.time, parse_timestamp("2025-01-15T06:04:31").unwrap());
    }

    #[test]
    fn test_parse_rejects_wrong_field_count() {
        let fields = ["38.892483", "-99.318208", "602.10"];
        assert!(parse_track_point(&fields).is_err());

        let fields = ["38.892483", "-99.318208", "602.10", "2025-01-15T06:04:31", "extra"];
        assert!(parse_track_point(&fields).is_err());
    }

    #[test]
    fn test_parse_rejects_non_numeric_field() {
        let fields = ["north", "-99.318208", "602.10", "2025-01-15T06:04:31"];
        assert!(parse_track_point(&fields).is_err());

        let fields = ["38.892483", "-99.318208", "high", "2025-01-15T06:04:31"];
        assert!(parse_track_point(&fields).is_err());
    }

    #[test]
    fn test_parse_rejects_malformed_timestamp() {
        assert!(parse_timestamp("2025-01-15 06:04:31").is_err());
        assert!(parse_timestamp("2025-01-15T06:04:31Z").is_err());
        assert!(parse_timestamp("2025-01-15T06:04:31.250").is_err());
        assert!(parse_timestamp("2025-01-15T06:04").is_err());
        assert!(parse_timestamp("").is_err());
    }

    #[test]
    fn test_display_format() {
        let fields = ["38.892483", "-99.318208", "602.1", "2025-01-15T06:04:31"];
        let point = parse_track_point(&fields).unwrap();

        assert_eq!(
            point.to_string(),
            "2025-01-15T06:04:31  38.892483, -99.318208 (602.10m)"
        );
    }
}
