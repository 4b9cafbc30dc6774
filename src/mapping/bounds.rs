//! Bounding box of a document's input coordinates

use crate::error::ConvertError;
use crate::geojson::{Document, Position};

/// Axis-aligned extent of every coordinate in a document
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl BoundingBox {
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Zero-sized box around a single position
    pub fn around(position: Position) -> Self {
        Self::new(position.x, position.y, position.x, position.y)
    }

    /// Grow this box to include a position
    pub fn expand_to_include(&mut self, position: Position) {
        self.min_x = self.min_x.min(position.x);
        self.min_y = self.min_y.min(position.y);
        self.max_x = self.max_x.max(position.x);
        self.max_y = self.max_y.max(position.y);
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Compute the extent of every coordinate reachable from the document
    ///
    /// Fails with [`ConvertError::EmptyGeometry`] when there is nothing to measure.
    pub fn of_document(doc: &Document) -> Result<Self, ConvertError> {
        let mut bounds: Option<BoundingBox> = None;
        doc.for_each_position(&mut |p| {
            let mut b = bounds.unwrap_or_else(|| BoundingBox::around(p));
            b.expand_to_include(p);
            bounds = Some(b);
        });
        bounds.ok_or(ConvertError::EmptyGeometry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geojson::{Feature, Geometry};

    #[test]
    fn test_bounds_span_all_features() {
        let doc = Document::FeatureCollection(vec![
            Feature::from_geometry(Geometry::Point(Position::new(-5.0, 3.0))),
            Feature::from_geometry(Geometry::LineString(vec![
                Position::new(2.0, -1.0),
                Position::new(7.0, 4.0),
            ])),
        ]);
        let bounds = BoundingBox::of_document(&doc).unwrap();
        assert_eq!(bounds, BoundingBox::new(-5.0, -1.0, 7.0, 4.0));
        assert_eq!(bounds.width(), 12.0);
        assert_eq!(bounds.height(), 5.0);
    }

    #[test]
    fn test_empty_document_fails() {
        let doc = Document::FeatureCollection(vec![]);
        assert!(matches!(
            BoundingBox::of_document(&doc),
            Err(ConvertError::EmptyGeometry)
        ));
    }

    #[test]
    fn test_empty_collections_fail() {
        let doc = Document::Geometry(Geometry::GeometryCollection(vec![Geometry::MultiPoint(
            vec![],
        )]));
        assert!(matches!(
            BoundingBox::of_document(&doc),
            Err(ConvertError::EmptyGeometry)
        ));
    }
}
