//! Point normalization: flatten raw track input into a route and a transcript.

use std::ops::RangeInclusive;
use std::str::FromStr;

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};

use crate::domain::track::{TrackFile, TrackPoint};
use crate::domain::trip::{Route, RouteTranscript, TripPoint};
use crate::domain::AppError;

const NAIVE_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const LATITUDE_RANGE: RangeInclusive<f64> = -90.0..=90.0;
const LONGITUDE_RANGE: RangeInclusive<f64> = -180.0..=180.0;

/// A point supplied directly by the caller instead of a track file.
#[derive(Debug, Clone, PartialEq)]
pub struct InlinePoint {
    pub latitude: f64,
    pub longitude: f64,
    pub timestamp: Option<DateTime<Utc>>,
}

impl FromStr for InlinePoint {
    type Err = AppError;

    /// Parse `"<lat>,<lon>[,<timestamp>]"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| AppError::parse_error("inline point", format!("'{s}': {reason}"));

        let mut fields = s.splitn(3, ',').map(str::trim);
        let latitude = fields
            .next()
            .filter(|f| !f.is_empty())
            .ok_or_else(|| invalid("missing latitude"))?
            .parse::<f64>()
            .map_err(|_| invalid("latitude is not a number"))?;
        let longitude = fields
            .next()
            .ok_or_else(|| invalid("missing longitude"))?
            .parse::<f64>()
            .map_err(|_| invalid("longitude is not a number"))?;
        check_coordinates(latitude, longitude).map_err(|reason| invalid(reason.as_str()))?;
        let timestamp = match fields.next().filter(|f| !f.is_empty()) {
            Some(raw) => Some(parse_timestamp(raw).ok_or_else(|| invalid("unrecognized timestamp"))?),
            None => None,
        };

        Ok(Self { latitude, longitude, timestamp })
    }
}

/// Reject coordinates that are not finite or lie outside the WGS84 ranges.
///
/// NaN and infinities fail the range checks as well.
pub fn check_coordinates(latitude: f64, longitude: f64) -> Result<(), String> {
    if !LATITUDE_RANGE.contains(&latitude) {
        return Err(format!("latitude {latitude} is outside -90..=90"));
    }
    if !LONGITUDE_RANGE.contains(&longitude) {
        return Err(format!("longitude {longitude} is outside -180..=180"));
    }
    Ok(())
}

/// Parse an RFC 3339 timestamp, or a naive `YYYY-MM-DD HH:MM:SS` read as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, NAIVE_TIMESTAMP_FORMAT).ok().map(|naive| naive.and_utc())
}

/// Flatten a decoded track file.
///
/// Only track/segment points become the route; waypoints and planned routes
/// are narrated in the transcript but never drawn.
pub fn normalize(track_file: &TrackFile, source: &str) -> Result<(Route, RouteTranscript), AppError> {
    let points: Vec<TripPoint> = track_file
        .tracks
        .iter()
        .flat_map(|track| &track.segments)
        .flat_map(|segment| &segment.points)
        .map(to_trip_point)
        .collect();

    let route = Route::new(points)
        .ok_or_else(|| AppError::parse_error(source, "no track points to render"))?;

    Ok((route, transcribe(track_file)))
}

/// Build a route from caller-supplied points.
pub fn normalize_inline(points: &[InlinePoint]) -> Result<(Route, RouteTranscript), AppError> {
    let trip_points: Vec<TripPoint> = points
        .iter()
        .map(|p| TripPoint {
            latitude: p.latitude,
            longitude: p.longitude,
            elevation: None,
            timestamp: p.timestamp,
        })
        .collect();

    let route = Route::new(trip_points)
        .ok_or_else(|| AppError::parse_error("inline points", "no track points to render"))?;

    let mut text = String::from("Trip Data:\n\nTrip Points:\n");
    for point in route.points() {
        let mut fields = vec![format!("Lat: {}", point.latitude), format!("Lon: {}", point.longitude)];
        if let Some(time) = point.timestamp {
            fields.push(format!("Time: {}", format_time(&time)));
        }
        text.push_str(&format!("  {}\n", fields.join(", ")));
    }

    Ok((route, RouteTranscript::new(text)))
}

fn to_trip_point(point: &TrackPoint) -> TripPoint {
    TripPoint {
        latitude: point.lat,
        longitude: point.lon,
        elevation: point.ele,
        timestamp: point.time,
    }
}

/// Render tracks, then waypoints, then routes, one line per point.
fn transcribe(track_file: &TrackFile) -> RouteTranscript {
    let mut text = String::from("GPX Data:\n");

    if !track_file.tracks.is_empty() {
        text.push_str("\nTracks:\n");
        for track in &track_file.tracks {
            if let Some(name) = &track.name {
                text.push_str(&format!("  Name: {name}\n"));
            }
            for segment in &track.segments {
                text.push_str("    Segment Points:\n");
                for point in &segment.points {
                    text.push_str(&format!("      {}\n", point_line(point, false)));
                }
            }
        }
    }

    if !track_file.waypoints.is_empty() {
        text.push_str("\nWaypoints:\n");
        for waypoint in &track_file.waypoints {
            text.push_str(&format!("  {}\n", point_line(waypoint, true)));
        }
    }

    if !track_file.routes.is_empty() {
        text.push_str("\nRoutes:\n");
        for route in &track_file.routes {
            if let Some(name) = &route.name {
                text.push_str(&format!("  Name: {name}\n"));
            }
            text.push_str("    Route Points:\n");
            for point in &route.points {
                text.push_str(&format!("      {}\n", point_line(point, true)));
            }
        }
    }

    RouteTranscript::new(text)
}

fn point_line(point: &TrackPoint, with_labels: bool) -> String {
    let mut fields = Vec::with_capacity(6);
    if with_labels && let Some(name) = &point.name {
        fields.push(format!("Name: {name}"));
    }
    fields.push(format!("Lat: {}", point.lat));
    fields.push(format!("Lon: {}", point.lon));
    if let Some(ele) = point.ele {
        fields.push(format!("Elev: {ele}"));
    }
    if let Some(time) = &point.time {
        fields.push(format!("Time: {}", format_time(time)));
    }
    if with_labels && let Some(desc) = &point.desc {
        fields.push(format!("Description: {desc}"));
    }
    fields.join(", ")
}

fn format_time(time: &DateTime<Utc>) -> String {
    time.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}
