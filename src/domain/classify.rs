//! Route shape detection and per-point roles.

use crate::domain::trip::{Route, TripPoint};

/// Part a point plays in the rendered route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointRole {
    Start,
    End,
    Waypoint,
}

impl PointRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            PointRole::Start => "start",
            PointRole::End => "end",
            PointRole::Waypoint => "waypoint",
        }
    }
}

/// A trip point with its role attached.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedPoint {
    pub point: TripPoint,
    pub role: PointRole,
}

/// Classified points plus the route-level loop flag.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedRoute {
    pub points: Vec<ClassifiedPoint>,
    pub is_loop: bool,
}

impl ClassifiedRoute {
    pub fn first(&self) -> &ClassifiedPoint {
        &self.points[0]
    }

    pub fn count_role(&self, role: PointRole) -> usize {
        self.points.iter().filter(|p| p.role == role).count()
    }
}

/// Assign start/end/waypoint roles and detect loops.
///
/// A one-point route yields a single `Start` point; its loop flag is set
/// because the first and last point are the same point.
pub fn classify(route: &Route) -> ClassifiedRoute {
    let is_loop = route.first().same_position(route.last());
    let last_index = route.len() - 1;

    let points = route
        .points()
        .iter()
        .enumerate()
        .map(|(index, point)| {
            let role = if index == 0 {
                PointRole::Start
            } else if index == last_index {
                PointRole::End
            } else {
                PointRole::Waypoint
            };
            ClassifiedPoint { point: point.clone(), role }
        })
        .collect();

    ClassifiedRoute { points, is_loop }
}
