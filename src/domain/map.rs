//! Map description derived from a classified route, and the rendered document.

use crate::domain::classify::{ClassifiedRoute, PointRole};

/// Initial zoom level of the rendered map.
pub const DEFAULT_ZOOM: u8 = 14;
/// Stroke weight of the route path.
pub const PATH_WEIGHT: u8 = 5;
/// Opening tag the assembler splices generated content after.
pub const BODY_MARKER: &str = "<body>";

const MISSING_TIME_POPUP: &str = "Time: not recorded";

/// Marker palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerColor {
    Green,
    Red,
    Purple,
    Blue,
}

impl MarkerColor {
    /// Color for a role; the end of a loop gets its own color.
    pub fn for_role(role: PointRole, is_loop: bool) -> Self {
        match role {
            PointRole::Start => MarkerColor::Green,
            PointRole::End if is_loop => MarkerColor::Purple,
            PointRole::End => MarkerColor::Red,
            PointRole::Waypoint => MarkerColor::Blue,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MarkerColor::Green => "green",
            MarkerColor::Red => "red",
            MarkerColor::Purple => "purple",
            MarkerColor::Blue => "blue",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub latitude: f64,
    pub longitude: f64,
    pub role: PointRole,
    pub color: MarkerColor,
    pub popup: String,
}

/// Path through all points in route order, `(lat, lon)` vertices.
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    pub vertices: Vec<(f64, f64)>,
    pub color: MarkerColor,
    pub weight: u8,
}

/// Everything the map page shows, before serialization.
#[derive(Debug, Clone, PartialEq)]
pub struct MapModel {
    pub center: (f64, f64),
    pub zoom: u8,
    pub markers: Vec<Marker>,
    pub path: Polyline,
}

impl MapModel {
    /// Describe a classified route: centered on its first point, one marker per point.
    pub fn from_route(route: &ClassifiedRoute) -> Self {
        let first = &route.first().point;

        let markers = route
            .points
            .iter()
            .map(|classified| Marker {
                latitude: classified.point.latitude,
                longitude: classified.point.longitude,
                role: classified.role,
                color: MarkerColor::for_role(classified.role, route.is_loop),
                popup: match classified.point.timestamp {
                    Some(time) => format!("Time: {}", time.format("%Y-%m-%d %H:%M:%S")),
                    None => MISSING_TIME_POPUP.to_string(),
                },
            })
            .collect();

        let vertices =
            route.points.iter().map(|p| (p.point.latitude, p.point.longitude)).collect();

        Self {
            center: (first.latitude, first.longitude),
            zoom: DEFAULT_ZOOM,
            markers,
            path: Polyline { vertices, color: MarkerColor::Blue, weight: PATH_WEIGHT },
        }
    }
}

/// Serialized map page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapDocument {
    html: String,
}

impl MapDocument {
    pub fn new(html: impl Into<String>) -> Self {
        Self { html: html.into() }
    }

    pub fn html(&self) -> &str {
        &self.html
    }
}
