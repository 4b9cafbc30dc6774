//! Conversion from GeoJSON text into the typed document model
//!
//! The `geojson` crate does the structural parsing. Type tags are checked
//! first so that an unknown geometry surfaces as its own error kind instead
//! of a generic parse failure.

use std::str::FromStr;

use ::geojson::{feature::Id, GeoJson};
use serde_json::{Map, Value};

use crate::error::ConvertError;

use super::types::{Document, Feature, FeatureId, Geometry, Position};

const GEOMETRY_TYPES: [&str; 6] = [
    "Point",
    "MultiPoint",
    "LineString",
    "MultiLineString",
    "Polygon",
    "MultiPolygon",
];

/// Parse a JSON value into a [`Document`]
///
/// Accepts a `Feature`, a `FeatureCollection`, or any bare geometry.
pub fn parse_document(value: Value) -> Result<Document, ConvertError> {
    check_document(&value)?;
    let document = match GeoJson::from_json_value(value)? {
        GeoJson::Feature(feature) => Document::Feature(convert_feature(feature)?),
        GeoJson::FeatureCollection(collection) => Document::FeatureCollection(
            collection
                .features
                .into_iter()
                .map(convert_feature)
                .collect::<Result<_, _>>()?,
        ),
        GeoJson::Geometry(geometry) => Document::Geometry(convert_geometry(geometry.value)?),
    };
    Ok(document)
}

impl FromStr for Document {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: Value = serde_json::from_str(s)?;
        parse_document(value)
    }
}

fn convert_feature(feature: ::geojson::Feature) -> Result<Feature, ConvertError> {
    let geometry = match feature.geometry {
        Some(geometry) => Some(convert_geometry(geometry.value)?),
        None => None,
    };
    let id = feature.id.map(|id| match id {
        Id::String(s) => FeatureId::String(s),
        Id::Number(n) => FeatureId::Number(n),
    });
    Ok(Feature {
        geometry,
        properties: feature.properties.unwrap_or_default(),
        id,
    })
}

fn convert_geometry(value: ::geojson::Value) -> Result<Geometry, ConvertError> {
    use ::geojson::Value as G;

    let geometry = match value {
        G::Point(p) => Geometry::Point(position(&p)?),
        G::MultiPoint(points) => Geometry::MultiPoint(positions(&points)?),
        G::LineString(line) => Geometry::LineString(positions(&line)?),
        G::MultiLineString(lines) => Geometry::MultiLineString(rings(&lines)?),
        G::Polygon(polygon) => Geometry::Polygon(rings(&polygon)?),
        G::MultiPolygon(polygons) => Geometry::MultiPolygon(
            polygons
                .iter()
                .map(|polygon| rings(polygon))
                .collect::<Result<_, _>>()?,
        ),
        G::GeometryCollection(children) => Geometry::GeometryCollection(
            children
                .into_iter()
                .map(|child| convert_geometry(child.value))
                .collect::<Result<_, _>>()?,
        ),
    };
    Ok(geometry)
}

/// `[x, y, ...]`; altitude and further members are ignored
fn position(coords: &[f64]) -> Result<Position, ConvertError> {
    match coords {
        [x, y, ..] => Ok(Position::new(*x, *y)),
        _ => Err(ConvertError::malformed(format!(
            "position needs at least 2 numbers, found {}",
            coords.len()
        ))),
    }
}

fn positions(coords: &[Vec<f64>]) -> Result<Vec<Position>, ConvertError> {
    coords.iter().map(|p| position(p)).collect()
}

fn rings(coords: &[Vec<Vec<f64>>]) -> Result<Vec<Vec<Position>>, ConvertError> {
    coords.iter().map(|ring| positions(ring)).collect()
}

fn check_document(value: &Value) -> Result<(), ConvertError> {
    let object = as_object(value, "document")?;
    match type_tag(object, "document")? {
        "Feature" => check_feature(value),
        "FeatureCollection" => object
            .get("features")
            .and_then(Value::as_array)
            .ok_or_else(|| {
                ConvertError::malformed("FeatureCollection is missing a 'features' array")
            })?
            .iter()
            .try_for_each(check_feature),
        _ => check_geometry(value),
    }
}

fn check_feature(value: &Value) -> Result<(), ConvertError> {
    let object = as_object(value, "feature")?;
    let kind = type_tag(object, "feature")?;
    if kind != "Feature" {
        return Err(ConvertError::malformed(format!(
            "expected a Feature, found '{}'",
            kind
        )));
    }
    match object.get("geometry") {
        None => Err(ConvertError::malformed("Feature is missing 'geometry'")),
        Some(Value::Null) => Ok(()),
        Some(geometry) => check_geometry(geometry),
    }
}

fn check_geometry(value: &Value) -> Result<(), ConvertError> {
    let object = as_object(value, "geometry")?;
    match type_tag(object, "geometry")? {
        "GeometryCollection" => object
            .get("geometries")
            .and_then(Value::as_array)
            .ok_or_else(|| {
                ConvertError::malformed("GeometryCollection is missing a 'geometries' array")
            })?
            .iter()
            .try_for_each(check_geometry),
        kind if GEOMETRY_TYPES.contains(&kind) => Ok(()),
        kind => Err(ConvertError::unsupported(kind)),
    }
}

fn as_object<'a>(value: &'a Value, what: &str) -> Result<&'a Map<String, Value>, ConvertError> {
    value
        .as_object()
        .ok_or_else(|| ConvertError::malformed(format!("{} must be a JSON object", what)))
}

fn type_tag<'a>(object: &'a Map<String, Value>, what: &str) -> Result<&'a str, ConvertError> {
    match object.get("type") {
        Some(Value::String(kind)) => Ok(kind.as_str()),
        Some(_) => Err(ConvertError::malformed(format!(
            "{} 'type' must be a string",
            what
        ))),
        None => Err(ConvertError::malformed(format!(
            "{} is missing 'type'",
            what
        ))),
    }
}
