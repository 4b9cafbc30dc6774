//! GeoJSON document model and parsing
//!
//! Text is parsed by the `geojson` crate, then converted into the closed
//! [`Geometry`] sum type so that every variant is matched exhaustively
//! downstream.

mod parse;
pub mod types;

pub use parse::parse_document;
pub use types::*;
