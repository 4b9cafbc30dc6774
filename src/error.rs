//! Error types for document parsing and conversion

use thiserror::Error;

/// Errors that abort a conversion
///
/// Every variant is structural: once one is raised no partial output is
/// valid. Per-feature attribute lookup misses are not errors.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Input text is not JSON at all
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Input is JSON but not a recognizable GeoJSON document shape
    #[error("malformed document: {reason}")]
    MalformedDocument { reason: String },

    /// The document contains no coordinates, so no mapping can be established
    #[error("document contains no coordinates")]
    EmptyGeometry,

    /// A geometry `type` tag is not one of the supported variants
    #[error("unsupported geometry type '{kind}'")]
    UnsupportedGeometry { kind: String },

    /// An attribute rule token cannot be split into its required parts
    #[error("invalid attribute rule '{rule}': {reason}")]
    InvalidAttributeRule { rule: String, reason: String },
}

impl ConvertError {
    /// Create a malformed document error
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedDocument {
            reason: reason.into(),
        }
    }

    /// Create an unsupported geometry error
    pub fn unsupported(kind: impl Into<String>) -> Self {
        Self::UnsupportedGeometry { kind: kind.into() }
    }

    /// Create an invalid attribute rule error
    pub fn invalid_rule(rule: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidAttributeRule {
            rule: rule.into(),
            reason: reason.into(),
        }
    }
}

impl From<::geojson::Error> for ConvertError {
    /// Type tags are validated before this point; what remains is shape
    fn from(err: ::geojson::Error) -> Self {
        Self::malformed(err.to_string())
    }
}
