//! Linear fit-to-viewport mapping
//!
//! The document's bounding box is stretched onto `[0, width] x [0, height]`
//! with independent X and Y scales, so the aspect ratio is not preserved.
//! The Y axis is flipped: input Y grows upward, SVG Y grows downward.
//!
//! ## Degenerate extents
//!
//! When every coordinate shares the same X (or Y), the scale on that axis
//! is 1 and the collapsed axis stays anchored at the left (or bottom) edge.
//! When the whole extent collapses to one point, that point is placed at the
//! viewport center instead.

use log::debug;

use crate::config::ViewportSpec;
use crate::error::ConvertError;
use crate::geojson::{Document, Position};

use super::bounds::BoundingBox;

/// Affine map from input coordinates to viewport pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearMapping {
    pub min_x: f64,
    pub min_y: f64,
    pub scale_x: f64,
    pub scale_y: f64,
    /// Pixel offset added on X (non-zero only for a single-point extent)
    pub offset_x: f64,
    /// Pixel offset subtracted on Y (non-zero only for a single-point extent)
    pub offset_y: f64,
    pub height: f64,
}

impl LinearMapping {
    /// Derive the mapping that fills `viewport` with `bounds`
    pub fn fit(bounds: &BoundingBox, viewport: ViewportSpec) -> Self {
        let width = f64::from(viewport.width);
        let height = f64::from(viewport.height);

        let scale_x = axis_scale(bounds.min_x, bounds.max_x, width);
        let scale_y = axis_scale(bounds.min_y, bounds.max_y, height);
        let (offset_x, offset_y) = if bounds.width() == 0.0 && bounds.height() == 0.0 {
            (width / 2.0, height / 2.0)
        } else {
            (0.0, 0.0)
        };

        Self {
            min_x: bounds.min_x,
            min_y: bounds.min_y,
            scale_x,
            scale_y,
            offset_x,
            offset_y,
            height,
        }
    }

    /// Map one input position to viewport pixels
    pub fn apply(&self, position: Position) -> (f64, f64) {
        let px = self.offset_x + distance(position.x, self.min_x, self.scale_x);
        let py = self.height - self.offset_y - distance(position.y, self.min_y, self.scale_y);
        (px, py)
    }
}

// Halved coordinates keep extents wider than f64::MAX finite; halving and
// doubling are exact, so ordinary ranges map the same as `(v - min) * scale`.

fn axis_scale(min: f64, max: f64, size: f64) -> f64 {
    if max == min {
        1.0
    } else {
        size / (max / 2.0 - min / 2.0) / 2.0
    }
}

fn distance(value: f64, min: f64, scale: f64) -> f64 {
    (value / 2.0 - min / 2.0) * scale * 2.0
}

/// Compute the mapping for a whole document
///
/// The bounding box covers every feature, so all features share one mapping.
pub fn compute_mapping(
    doc: &Document,
    viewport: ViewportSpec,
) -> Result<LinearMapping, ConvertError> {
    let bounds = BoundingBox::of_document(doc)?;
    let mapping = LinearMapping::fit(&bounds, viewport);
    debug!(
        "bounds x=[{}, {}] y=[{}, {}], scale=({}, {})",
        bounds.min_x, bounds.max_x, bounds.min_y, bounds.max_y, mapping.scale_x, mapping.scale_y
    );
    Ok(mapping)
}
