//! Typed GeoJSON data model
//!
//! All values here are immutable once parsed and live for one conversion call.

use std::borrow::Cow;
use std::fmt;

use serde_json::{Map, Number, Value};

/// A 2D position in input coordinate space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Closed ordered sequence of positions bounding a polygon or a hole
pub type Ring = Vec<Position>;

/// Polygon rings: the first ring is the exterior, the rest are holes
pub type PolygonRings = Vec<Ring>;

/// The seven GeoJSON geometry variants
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Point(Position),
    MultiPoint(Vec<Position>),
    LineString(Vec<Position>),
    MultiLineString(Vec<Vec<Position>>),
    Polygon(PolygonRings),
    MultiPolygon(Vec<PolygonRings>),
    GeometryCollection(Vec<Geometry>),
}

impl Geometry {
    /// Visit every position reachable from this geometry, in input order
    pub fn for_each_position(&self, f: &mut impl FnMut(Position)) {
        match self {
            Geometry::Point(p) => f(*p),
            Geometry::MultiPoint(points) | Geometry::LineString(points) => {
                points.iter().copied().for_each(f)
            }
            Geometry::MultiLineString(lines) | Geometry::Polygon(lines) => {
                lines.iter().flatten().copied().for_each(f)
            }
            Geometry::MultiPolygon(polygons) => {
                polygons.iter().flatten().flatten().copied().for_each(f)
            }
            Geometry::GeometryCollection(children) => {
                for child in children {
                    child.for_each_position(f);
                }
            }
        }
    }
}

/// Feature identifier, kept outside `properties` in GeoJSON
#[derive(Debug, Clone, PartialEq)]
pub enum FeatureId {
    String(String),
    Number(Number),
}

impl fmt::Display for FeatureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeatureId::String(s) => f.write_str(s),
            FeatureId::Number(n) => write!(f, "{}", n),
        }
    }
}

/// A geometry plus its property data
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Feature {
    /// `None` when the feature's geometry member is JSON `null`
    pub geometry: Option<Geometry>,
    pub properties: Map<String, Value>,
    pub id: Option<FeatureId>,
}

impl Feature {
    /// Wrap a bare geometry as an anonymous feature with empty properties
    pub fn from_geometry(geometry: Geometry) -> Self {
        Self {
            geometry: Some(geometry),
            properties: Map::new(),
            id: None,
        }
    }

    /// Set the feature properties
    pub fn with_properties(mut self, properties: Map<String, Value>) -> Self {
        self.properties = properties;
        self
    }

    /// Set the feature identifier
    pub fn with_id(mut self, id: FeatureId) -> Self {
        self.id = Some(id);
        self
    }
}

/// A parsed GeoJSON document
#[derive(Debug, Clone, PartialEq)]
pub enum Document {
    Feature(Feature),
    FeatureCollection(Vec<Feature>),
    Geometry(Geometry),
}

impl Document {
    /// Features in document order
    ///
    /// A bare geometry normalizes to one anonymous feature.
    pub fn features(&self) -> Vec<Cow<'_, Feature>> {
        match self {
            Document::Feature(feature) => vec![Cow::Borrowed(feature)],
            Document::FeatureCollection(features) => features.iter().map(Cow::Borrowed).collect(),
            Document::Geometry(geometry) => {
                vec![Cow::Owned(Feature::from_geometry(geometry.clone()))]
            }
        }
    }

    /// Visit every position in the document, across all features
    pub fn for_each_position(&self, f: &mut impl FnMut(Position)) {
        match self {
            Document::Feature(feature) => {
                if let Some(geometry) = &feature.geometry {
                    geometry.for_each_position(f);
                }
            }
            Document::FeatureCollection(features) => {
                for geometry in features.iter().filter_map(|feat| feat.geometry.as_ref()) {
                    geometry.for_each_position(f);
                }
            }
            Document::Geometry(geometry) => geometry.for_each_position(f),
        }
    }
}
