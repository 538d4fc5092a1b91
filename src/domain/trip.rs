//! Normalized trip points and the route built from them.

use std::fmt;

use chrono::{DateTime, Utc};

/// One recorded position of the trip.
#[derive(Debug, Clone, PartialEq)]
pub struct TripPoint {
    pub latitude: f64,
    pub longitude: f64,
    pub elevation: Option<f64>,
    pub timestamp: Option<DateTime<Utc>>,
}

impl TripPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude, elevation: None, timestamp: None }
    }

    pub fn with_elevation(mut self, elevation: f64) -> Self {
        self.elevation = Some(elevation);
        self
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// True when both points sit on exactly the same coordinate.
    ///
    /// Compares bit patterns, so elevation and time never take part.
    pub fn same_position(&self, other: &TripPoint) -> bool {
        self.latitude.to_bits() == other.latitude.to_bits()
            && self.longitude.to_bits() == other.longitude.to_bits()
    }
}

/// Ordered, non-empty sequence of trip points in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    points: Vec<TripPoint>,
}

impl Route {
    /// Build a route, returning `None` for an empty point list.
    pub fn new(points: Vec<TripPoint>) -> Option<Self> {
        if points.is_empty() { None } else { Some(Self { points }) }
    }

    pub fn points(&self) -> &[TripPoint] {
        &self.points
    }

    pub fn first(&self) -> &TripPoint {
        &self.points[0]
    }

    pub fn last(&self) -> &TripPoint {
        &self.points[self.points.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false; kept for API symmetry with slices.
    pub fn is_empty(&self) -> bool {
        false
    }
}

/// Text rendering of the raw track data, fed to the generation backend only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTranscript(String);

impl RouteTranscript {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RouteTranscript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
