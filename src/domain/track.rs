//! Raw track data as decoded from a GPX document.
//!
//! Mirrors the GPX element tree closely enough for the normalizer to walk it
//! in document order; nothing here is interpreted yet.

use chrono::{DateTime, Utc};

/// Decoded contents of one track file.
#[derive(Debug, Default, Clone)]
pub struct TrackFile {
    pub tracks: Vec<Track>,
    pub waypoints: Vec<TrackPoint>,
    pub routes: Vec<PlannedRoute>,
}

impl TrackFile {
    /// Number of recorded points across all tracks and segments.
    pub fn track_point_count(&self) -> usize {
        self.tracks.iter().flat_map(|t| &t.segments).map(|s| s.points.len()).sum()
    }
}

/// A single GPX point (`wpt`, `rtept` or `trkpt`).
#[derive(Debug, Clone, PartialEq)]
pub struct TrackPoint {
    pub lat: f64,
    pub lon: f64,
    pub ele: Option<f64>,
    pub time: Option<DateTime<Utc>>,
    pub name: Option<String>,
    pub desc: Option<String>,
}

impl TrackPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon, ele: None, time: None, name: None, desc: None }
    }
}

/// A recorded track (`<trk>`).
#[derive(Debug, Default, Clone)]
pub struct Track {
    pub name: Option<String>,
    pub segments: Vec<TrackSegment>,
}

/// A contiguous run of recorded points (`<trkseg>`).
#[derive(Debug, Default, Clone)]
pub struct TrackSegment {
    pub points: Vec<TrackPoint>,
}

/// A planned route (`<rte>`), distinct from what was recorded.
#[derive(Debug, Default, Clone)]
pub struct PlannedRoute {
    pub name: Option<String>,
    pub points: Vec<TrackPoint>,
}
