//! Coordinate mapping from input space to viewport pixels
//!
//! The mapping is computed once per conversion over the entire document,
//! before any feature is encoded.

pub mod bounds;
pub mod transform;

pub use bounds::BoundingBox;
pub use transform::{compute_mapping, LinearMapping};
