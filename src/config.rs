//! Conversion options and their TOML file form

use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

use crate::attributes::AttributeRule;
use crate::error::ConvertError;

/// Errors that can occur when building or loading options
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read options file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse options TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("invalid viewport {width}x{height}: dimensions must be positive")]
    InvalidViewport { width: u32, height: u32 },
    #[error("invalid point radius {0}: must be a non-negative number")]
    InvalidRadius(f64),
    #[error(transparent)]
    InvalidRule(#[from] ConvertError),
}

/// Output viewport size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportSpec {
    pub width: u32,
    pub height: u32,
}

impl ViewportSpec {
    /// Create a viewport, rejecting zero dimensions
    pub fn new(width: u32, height: u32) -> Result<Self, ConfigError> {
        if width == 0 || height == 0 {
            return Err(ConfigError::InvalidViewport { width, height });
        }
        Ok(Self { width, height })
    }
}

impl Default for ViewportSpec {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
        }
    }
}

/// Options for one conversion call
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionOptions {
    pub viewport: ViewportSpec,
    /// Applied in order; later rules win on name collisions
    pub attributes: Vec<AttributeRule>,
    /// Radius of the circle drawn for each point
    pub point_radius: f64,
    /// Fractional digits in path data; `None` keeps full precision
    pub precision: Option<u32>,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            viewport: ViewportSpec::default(),
            attributes: vec![],
            point_radius: 4.5,
            precision: None,
        }
    }
}

/// TOML structure for deserializing options
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlOptions {
    viewport: Option<TomlViewport>,
    precision: Option<u32>,
    radius: Option<f64>,
    attributes: Option<TomlAttributes>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlViewport {
    width: u32,
    height: u32,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlAttributes {
    #[serde(default)]
    dynamic: Vec<String>,
    #[serde(default, rename = "static")]
    literal: Vec<String>,
}

impl ConversionOptions {
    /// Create options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load options from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        content.parse()
    }

    /// Set the viewport size
    pub fn with_viewport(mut self, viewport: ViewportSpec) -> Self {
        self.viewport = viewport;
        self
    }

    /// Set the number of fractional digits
    pub fn with_precision(mut self, precision: u32) -> Self {
        self.precision = Some(precision);
        self
    }

    /// Set the point radius
    pub fn with_point_radius(mut self, radius: f64) -> Result<Self, ConfigError> {
        if !(radius >= 0.0 && radius.is_finite()) {
            return Err(ConfigError::InvalidRadius(radius));
        }
        self.point_radius = radius;
        Ok(self)
    }

    /// Append an attribute rule
    pub fn with_attribute(mut self, rule: AttributeRule) -> Self {
        self.attributes.push(rule);
        self
    }
}

impl FromStr for ConversionOptions {
    type Err = ConfigError;

    fn from_str(content: &str) -> Result<Self, Self::Err> {
        let parsed: TomlOptions = toml::from_str(content)?;
        let mut options = ConversionOptions::default();

        if let Some(vp) = parsed.viewport {
            options = options.with_viewport(ViewportSpec::new(vp.width, vp.height)?);
        }
        if let Some(precision) = parsed.precision {
            options = options.with_precision(precision);
        }
        if let Some(radius) = parsed.radius {
            options = options.with_point_radius(radius)?;
        }
        if let Some(attrs) = parsed.attributes {
            for token in &attrs.dynamic {
                options = options.with_attribute(AttributeRule::parse_dynamic(token)?);
            }
            for token in &attrs.literal {
                options = options.with_attribute(AttributeRule::parse_static(token)?);
            }
        }

        Ok(options)
    }
}
