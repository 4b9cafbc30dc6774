//! Geometry encoding into SVG path data
//!
//! Every geometry variant becomes `d` attribute data so that each feature
//! renders as a single `<path>` element:
//!
//! - `Point`: a full circle drawn as two half arcs
//! - `LineString`: `M` to the first position, `L` to the rest, left open
//! - `Polygon`: one `Z`-closed subpath per ring, exterior first; winding is
//!   passed through so fill-rule styling decides how holes render
//! - `Multi*` and `GeometryCollection`: the parts' subpaths in input order

use crate::geojson::{Geometry, Position};
use crate::mapping::LinearMapping;

use super::number::{format_number, format_pair};

/// A point in viewport pixel space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A segment in a resolved path
#[derive(Debug, Clone, PartialEq)]
pub enum PathSegment {
    /// Start a new subpath
    MoveTo(Point),
    /// Straight line to point
    LineTo(Point),
    /// Circular arc to point
    ArcTo {
        end: Point,
        radius: f64,
        large_arc: bool,
        sweep: bool,
    },
    /// Close the current subpath
    Close,
}

/// Path segments ready for SVG rendering
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedPath {
    pub segments: Vec<PathSegment>,
}

impl ResolvedPath {
    /// Number of subpaths (one per `MoveTo`)
    pub fn subpath_count(&self) -> usize {
        self.segments
            .iter()
            .filter(|s| matches!(s, PathSegment::MoveTo(_)))
            .count()
    }

    /// Convert to SVG path `d` attribute string
    pub fn to_svg_d(&self, precision: Option<u32>) -> String {
        self.segments
            .iter()
            .map(|seg| match seg {
                PathSegment::MoveTo(p) => format!("M{}", format_pair(p.x, p.y, precision)),
                PathSegment::LineTo(p) => format!("L{}", format_pair(p.x, p.y, precision)),
                PathSegment::ArcTo {
                    end,
                    radius,
                    large_arc,
                    sweep,
                } => {
                    let r = format_number(*radius, precision);
                    format!(
                        "A{},{} 0 {},{} {}",
                        r,
                        r,
                        u8::from(*large_arc),
                        u8::from(*sweep),
                        format_pair(end.x, end.y, precision)
                    )
                }
                PathSegment::Close => "Z".to_string(),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Encodes geometries against one shared mapping
#[derive(Debug, Clone, Copy)]
pub struct PathEncoder<'a> {
    mapping: &'a LinearMapping,
    point_radius: f64,
    precision: Option<u32>,
}

impl<'a> PathEncoder<'a> {
    pub fn new(mapping: &'a LinearMapping, point_radius: f64, precision: Option<u32>) -> Self {
        Self {
            mapping,
            point_radius,
            precision,
        }
    }

    /// Path data for each encoded unit of a geometry
    ///
    /// A geometry collection yields one entry per leaf child, each encoded
    /// independently; every other variant yields exactly one entry.
    pub fn encode(&self, geometry: &Geometry) -> Vec<String> {
        match geometry {
            Geometry::GeometryCollection(children) => children
                .iter()
                .flat_map(|child| self.encode(child))
                .collect(),
            other => vec![self.resolve(other).to_svg_d(self.precision)],
        }
    }

    /// Path data for a whole geometry merged into one `d` attribute
    pub fn encode_joined(&self, geometry: &Geometry) -> String {
        self.encode(geometry)
            .into_iter()
            .filter(|d| !d.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Resolve a geometry into pixel-space segments
    pub fn resolve(&self, geometry: &Geometry) -> ResolvedPath {
        let mut path = ResolvedPath::default();
        self.push_geometry(geometry, &mut path.segments);
        path
    }

    fn push_geometry(&self, geometry: &Geometry, out: &mut Vec<PathSegment>) {
        match geometry {
            Geometry::Point(p) => self.push_circle(*p, out),
            Geometry::MultiPoint(points) => {
                for p in points {
                    self.push_circle(*p, out);
                }
            }
            Geometry::LineString(line) => self.push_line(line, false, out),
            Geometry::MultiLineString(lines) => {
                for line in lines {
                    self.push_line(line, false, out);
                }
            }
            Geometry::Polygon(rings) => self.push_polygon(rings, out),
            Geometry::MultiPolygon(polygons) => {
                for rings in polygons {
                    self.push_polygon(rings, out);
                }
            }
            Geometry::GeometryCollection(children) => {
                for child in children {
                    self.push_geometry(child, out);
                }
            }
        }
    }

    fn map(&self, position: Position) -> Point {
        let (x, y) = self.mapping.apply(position);
        Point::new(x, y)
    }

    fn push_circle(&self, center: Position, out: &mut Vec<PathSegment>) {
        let c = self.map(center);
        let r = self.point_radius;
        let left = Point::new(c.x - r, c.y);
        let right = Point::new(c.x + r, c.y);
        out.push(PathSegment::MoveTo(left));
        for end in [right, left] {
            out.push(PathSegment::ArcTo {
                end,
                radius: r,
                large_arc: true,
                sweep: true,
            });
        }
        out.push(PathSegment::Close);
    }

    fn push_line(&self, line: &[Position], closed: bool, out: &mut Vec<PathSegment>) {
        let Some((first, rest)) = line.split_first() else {
            return;
        };
        out.push(PathSegment::MoveTo(self.map(*first)));
        out.extend(rest.iter().map(|p| PathSegment::LineTo(self.map(*p))));
        if closed {
            out.push(PathSegment::Close);
        }
    }

    fn push_polygon(&self, rings: &[Vec<Position>], out: &mut Vec<PathSegment>) {
        for ring in rings {
            self.push_line(ring, true, out);
        }
    }
}
