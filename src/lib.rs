//! geojson2svg - Convert GeoJSON documents into SVG path elements
//!
//! This library maps the extent of a GeoJSON document onto a fixed-size
//! viewport and encodes every feature as one `<path>` element, with
//! attributes pulled from feature properties or set literally.
//!
//! # Example
//!
//! ```rust
//! use geojson2svg::{convert_str, ConversionOptions, ViewportSpec};
//!
//! let options = ConversionOptions::new().with_viewport(ViewportSpec::new(100, 50).unwrap());
//! let paths = convert_str(
//!     r#"{"type": "LineString", "coordinates": [[0, 0], [10, 0]]}"#,
//!     &options,
//! )
//! .unwrap();
//!
//! assert_eq!(paths, vec![r#"<path d="M0,50 L100,50"/>"#]);
//! ```

pub mod attributes;
pub mod config;
pub mod error;
pub mod geojson;
pub mod mapping;
pub mod renderer;

pub use attributes::{resolve_attributes, Attribute, AttributeRule};
pub use config::{ConfigError, ConversionOptions, ViewportSpec};
pub use error::ConvertError;
pub use crate::geojson::{parse_document, Document, Feature, Geometry};
pub use mapping::{compute_mapping, LinearMapping};
pub use renderer::{render_document, PathEncoder, SvgConfig};

use log::debug;

/// Convert a document into one `<path>` element per feature, in order
///
/// The coordinate mapping is computed once over the whole document before
/// any feature is encoded. Structural errors abort the conversion; missing
/// properties only drop the affected attribute.
///
/// # Example
///
/// ```rust
/// use geojson2svg::{convert, AttributeRule, ConversionOptions, Document};
///
/// let doc: Document = r#"{"type": "Feature", "properties": {"name": "x"},
///     "geometry": {"type": "Point", "coordinates": [0, 0]}}"#.parse().unwrap();
/// let options = ConversionOptions::new()
///     .with_attribute(AttributeRule::literal("class", "region"))
///     .with_attribute(AttributeRule::dynamic("name", None));
///
/// let paths = convert(&doc, &options).unwrap();
/// assert_eq!(paths.len(), 1);
/// assert!(paths[0].ends_with(r#" class="region" name="x"/>"#));
/// ```
pub fn convert(doc: &Document, options: &ConversionOptions) -> Result<Vec<String>, ConvertError> {
    let mapping = compute_mapping(doc, options.viewport)?;
    let encoder = PathEncoder::new(&mapping, options.point_radius, options.precision);

    let elements: Vec<String> = doc
        .features()
        .iter()
        .enumerate()
        .map(|(index, feature)| {
            let d = feature
                .geometry
                .as_ref()
                .map(|g| encoder.encode_joined(g))
                .unwrap_or_default();
            let attributes = resolve_attributes(feature, &options.attributes);
            debug!(
                "feature {}: {} path bytes, {} attributes",
                index,
                d.len(),
                attributes.len()
            );
            renderer::path_element(&d, &attributes)
        })
        .collect();

    Ok(elements)
}

/// Parse GeoJSON text and convert it
pub fn convert_str(source: &str, options: &ConversionOptions) -> Result<Vec<String>, ConvertError> {
    let doc: Document = source.parse()?;
    convert(&doc, options)
}

/// Parse, convert, and wrap the result into an SVG document
///
/// # Example
///
/// ```rust
/// use geojson2svg::{render, ConversionOptions, SvgConfig};
///
/// let svg = render(
///     r#"{"type": "Point", "coordinates": [0, 0]}"#,
///     &ConversionOptions::default(),
///     &SvgConfig::default(),
/// )
/// .unwrap();
/// assert!(svg.contains(r#"viewBox="0 0 1920 1080""#));
/// ```
pub fn render(
    source: &str,
    options: &ConversionOptions,
    svg: &SvgConfig,
) -> Result<String, ConvertError> {
    let elements = convert_str(source, options)?;
    Ok(render_document(&elements, options.viewport, svg))
}
