//! SVG output for converted features
//!
//! Geometry encoding into path data, numeric formatting of coordinates,
//! and assembly of path elements and the surrounding document.

pub mod config;
pub mod number;
pub mod path;
pub mod svg;

pub use config::SvgConfig;
pub use number::format_number;
pub use path::{PathEncoder, PathSegment, ResolvedPath};
pub use svg::{escape_xml, path_element, render_document, SvgBuilder};
