//! Leaflet page rendering for classified routes.

use geojson::{Feature, FeatureCollection, Geometry, Value};
use serde_json::{Map, Value as JsonValue};
use tracing::debug;

use crate::domain::map::{MapModel, Marker, Polyline};
use crate::domain::prompt::{TemplateContext, TemplateRenderer};
use crate::domain::{AppError, ClassifiedRoute, MapDocument};
use crate::ports::MapRenderer;

pub const MAP_TEMPLATE: &str = "map.html.j2";
const MAP_ELEMENT_ID: &str = "map";
const MAP_TITLE: &str = "Walk Summary";

/// Renders a route as a standalone Leaflet page with the route data inlined as GeoJSON.
#[derive(Debug, Clone, Default)]
pub struct LeafletMapRenderer<R> {
    templates: R,
}

impl<R: TemplateRenderer> LeafletMapRenderer<R> {
    pub fn new(templates: R) -> Self {
        Self { templates }
    }
}

impl<R: TemplateRenderer> MapRenderer for LeafletMapRenderer<R> {
    fn render(&self, route: &ClassifiedRoute) -> Result<MapDocument, AppError> {
        let model = MapModel::from_route(route);
        let features = to_feature_collection(&model);
        let json = serde_json::to_string(&features).map_err(|err| AppError::Template {
            template: MAP_TEMPLATE.to_string(),
            reason: format!("failed to serialize route features: {err}"),
        })?;

        let context = TemplateContext::new()
            .with_var("title", MAP_TITLE)
            .with_var("map_id", MAP_ELEMENT_ID)
            .with_var("center_lat", model.center.0.to_string())
            .with_var("center_lon", model.center.1.to_string())
            .with_var("zoom", model.zoom.to_string())
            .with_var("features", escape_script_data(&json));

        let html = self.templates.render(MAP_TEMPLATE, &context)?;
        debug!(markers = model.markers.len(), vertices = model.path.vertices.len(), "rendered map");
        Ok(MapDocument::new(html))
    }
}

/// Markers as Point features, then the path as a LineString when it has at
/// least two vertices. Coordinates are `[lon, lat]`.
pub fn to_feature_collection(model: &MapModel) -> FeatureCollection {
    let mut features: Vec<Feature> = model.markers.iter().map(marker_to_feature).collect();
    if model.path.vertices.len() >= 2 {
        features.push(path_to_feature(&model.path));
    }

    FeatureCollection { bbox: None, features, foreign_members: None }
}

fn marker_to_feature(marker: &Marker) -> Feature {
    let geometry = Geometry::new(Value::Point(vec![marker.longitude, marker.latitude]));

    let mut props = Map::new();
    props.insert("role".to_string(), JsonValue::String(marker.role.as_str().to_string()));
    props.insert("color".to_string(), JsonValue::String(marker.color.as_str().to_string()));
    props.insert("popup".to_string(), JsonValue::String(marker.popup.clone()));

    Feature {
        bbox: None,
        geometry: Some(geometry),
        id: None,
        properties: Some(props),
        foreign_members: None,
    }
}

fn path_to_feature(path: &Polyline) -> Feature {
    let coords: Vec<Vec<f64>> = path.vertices.iter().map(|&(lat, lon)| vec![lon, lat]).collect();
    let geometry = Geometry::new(Value::LineString(coords));

    let mut props = Map::new();
    props.insert("color".to_string(), JsonValue::String(path.color.as_str().to_string()));
    props.insert("weight".to_string(), JsonValue::Number(path.weight.into()));

    Feature {
        bbox: None,
        geometry: Some(geometry),
        id: None,
        properties: Some(props),
        foreign_members: None,
    }
}

/// Keep inlined JSON from closing the surrounding `<script>` element.
fn escape_script_data(json: &str) -> String {
    json.replace("</", "<\\/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::template::EmbeddedTemplateRenderer;
    use crate::domain::classify::classify;
    use crate::domain::map::BODY_MARKER;
    use crate::domain::trip::{Route, TripPoint};

    fn classified(coords: &[(f64, f64)]) -> ClassifiedRoute {
        let points = coords.iter().map(|&(lat, lon)| TripPoint::new(lat, lon)).collect();
        classify(&Route::new(points).unwrap())
    }

    fn geometry_kinds(collection: &FeatureCollection) -> Vec<&'static str> {
        collection
            .features
            .iter()
            .map(|f| match f.geometry.as_ref().map(|g| &g.value) {
                Some(Value::Point(_)) => "point",
                Some(Value::LineString(_)) => "line",
                _ => "other",
            })
            .collect()
    }

    #[test]
    fn markers_then_path() {
        let model = MapModel::from_route(&classified(&[(45.0, -75.0), (45.1, -75.1), (45.2, -75.2)]));
        let collection = to_feature_collection(&model);
        assert_eq!(geometry_kinds(&collection), vec!["point", "point", "point", "line"]);

        let first = &collection.features[0];
        assert_eq!(first.geometry.as_ref().unwrap().value, Value::Point(vec![-75.0, 45.0]));
        let props = first.properties.as_ref().unwrap();
        assert_eq!(props["color"], "green");
        assert_eq!(props["role"], "start");

        let line = collection.features[3].properties.as_ref().unwrap();
        assert_eq!(line["color"], "blue");
        assert_eq!(line["weight"], 5);
    }

    #[test]
    fn single_point_has_no_line() {
        let model = MapModel::from_route(&classified(&[(45.0, -75.0)]));
        let collection = to_feature_collection(&model);
        assert_eq!(geometry_kinds(&collection), vec!["point"]);
    }

    #[test]
    fn rendered_page_has_one_body_marker_and_the_route() {
        let renderer = LeafletMapRenderer::new(EmbeddedTemplateRenderer::new());
        let document = renderer.render(&classified(&[(45.43, -75.70), (45.42, -75.69)])).unwrap();
        let html = document.html();

        assert_eq!(html.matches(BODY_MARKER).count(), 1);
        assert!(html.contains("leaflet"));
        assert!(html.contains("setView([45.43, -75.7], 14)"));
        assert!(html.contains("\"LineString\""));
        assert!(html.contains("<div id=\"map\">"));
    }

    #[test]
    fn script_closing_sequences_are_escaped() {
        assert_eq!(escape_script_data(r#"{"popup":"</script>"}"#), r#"{"popup":"<\/script>"}"#);
    }
}
