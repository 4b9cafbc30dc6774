//! Attribute rules for per-feature SVG attributes
//!
//! A rule either pulls a value out of a feature's properties (dynamic) or
//! always emits a literal (static). Missing properties never abort a
//! conversion; the rule just produces nothing for that feature.

use log::warn;
use serde_json::{Map, Value};

use crate::error::ConvertError;
use crate::geojson::Feature;

/// A configured attribute rule
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeRule {
    /// Look up `property_path` (dot separated) in the feature's properties
    /// and emit it as `rename`, or as the last path segment when unset
    Dynamic {
        property_path: String,
        rename: Option<String>,
    },
    /// Emit `name="value"` on every element
    Static { name: String, value: String },
}

impl AttributeRule {
    /// Create a dynamic rule
    pub fn dynamic(property_path: impl Into<String>, rename: Option<String>) -> Self {
        Self::Dynamic {
            property_path: property_path.into(),
            rename,
        }
    }

    /// Create a static rule
    pub fn literal(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Static {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Parse a `propertyPath[:renameKey]` token
    pub fn parse_dynamic(token: &str) -> Result<Self, ConvertError> {
        let mut parts = token.split(':');
        let path = parts.next().unwrap_or_default();
        let rename = parts.next();
        if parts.next().is_some() {
            return Err(ConvertError::invalid_rule(
                token,
                "expected 'propertyPath[:renameKey]'",
            ));
        }
        if path.is_empty() || path.split('.').any(str::is_empty) {
            return Err(ConvertError::invalid_rule(token, "empty property path segment"));
        }
        match rename {
            Some("") => Err(ConvertError::invalid_rule(token, "empty rename key")),
            rename => Self::dynamic(path, rename.map(str::to_string)).with_valid_name(token),
        }
    }

    /// Parse a `name:value` token; the value may itself contain `:`
    pub fn parse_static(token: &str) -> Result<Self, ConvertError> {
        let (name, value) = token
            .split_once(':')
            .ok_or_else(|| ConvertError::invalid_rule(token, "expected 'name:value'"))?;
        if name.is_empty() {
            return Err(ConvertError::invalid_rule(token, "empty attribute name"));
        }
        Self::literal(name, value).with_valid_name(token)
    }

    /// Reject a parsed rule whose attribute name cannot appear in markup
    fn with_valid_name(self, token: &str) -> Result<Self, ConvertError> {
        let name = self.attribute_name();
        if !is_valid_attribute_name(name) {
            return Err(ConvertError::invalid_rule(
                token,
                format!("'{}' is not a valid XML attribute name", name),
            ));
        }
        Ok(self)
    }

    /// The attribute name this rule emits
    pub fn attribute_name(&self) -> &str {
        match self {
            AttributeRule::Dynamic {
                property_path,
                rename,
            } => rename.as_deref().unwrap_or_else(|| {
                property_path.rsplit('.').next().unwrap_or(property_path)
            }),
            AttributeRule::Static { name, .. } => name,
        }
    }
}

/// A resolved attribute, value not yet escaped
#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

impl Attribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Result of walking a property path
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Lookup<'a> {
    /// Some segment does not exist
    Absent,
    /// The path exists and holds JSON `null`
    Null,
    Found(&'a Value),
}

/// Walk a dotted path through nested objects and arrays
///
/// Numeric segments index into arrays.
pub fn lookup_path<'a>(properties: &'a Map<String, Value>, path: &str) -> Lookup<'a> {
    let mut segments = path.split('.');
    let Some(first) = segments.next() else {
        return Lookup::Absent;
    };
    let Some(mut current) = properties.get(first) else {
        return Lookup::Absent;
    };
    for segment in segments {
        let next = match current {
            Value::Object(map) => map.get(segment),
            Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
            _ => None,
        };
        match next {
            Some(value) => current = value,
            None => return Lookup::Absent,
        }
    }
    match current {
        Value::Null => Lookup::Null,
        value => Lookup::Found(value),
    }
}

/// Render a JSON value as attribute text
///
/// Strings are used verbatim; everything else is compact JSON.
pub fn stringify_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Resolve all rules for one feature
///
/// Names are unique in the output. On a collision the later rule's value
/// replaces the earlier one in place.
pub fn resolve_attributes(feature: &Feature, rules: &[AttributeRule]) -> Vec<Attribute> {
    let mut resolved: Vec<Attribute> = Vec::with_capacity(rules.len());

    for rule in rules {
        let name = rule.attribute_name();
        if !is_valid_attribute_name(name) {
            warn!("skipping attribute with invalid name '{}'", name);
            continue;
        }
        if name == "d" {
            warn!("skipping attribute 'd': reserved for path data");
            continue;
        }

        let value = match rule {
            AttributeRule::Static { value, .. } => value.clone(),
            AttributeRule::Dynamic { property_path, .. } => {
                match resolve_dynamic(feature, property_path) {
                    Some(value) => value,
                    None => continue,
                }
            }
        };

        match resolved.iter_mut().find(|a| a.name == name) {
            Some(existing) => existing.value = value,
            None => resolved.push(Attribute::new(name, value)),
        }
    }

    resolved
}

fn resolve_dynamic(feature: &Feature, property_path: &str) -> Option<String> {
    match lookup_path(&feature.properties, property_path) {
        Lookup::Found(value) => Some(stringify_value(value)),
        Lookup::Null => None,
        // GeoJSON keeps the identifier next to, not inside, `properties`
        Lookup::Absent if property_path == "id" => feature.id.as_ref().map(|id| id.to_string()),
        Lookup::Absent => None,
    }
}

/// Check a name against the XML `Name` production
fn is_valid_attribute_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if is_name_start_char(c) => chars.all(is_name_char),
        _ => false,
    }
}

fn is_name_start_char(c: char) -> bool {
    matches!(c,
        ':' | '_' | 'A'..='Z' | 'a'..='z'
        | '\u{C0}'..='\u{D6}'
        | '\u{D8}'..='\u{F6}'
        | '\u{F8}'..='\u{2FF}'
        | '\u{370}'..='\u{37D}'
        | '\u{37F}'..='\u{1FFF}'
        | '\u{200C}'..='\u{200D}'
        | '\u{2070}'..='\u{218F}'
        | '\u{2C00}'..='\u{2FEF}'
        | '\u{3001}'..='\u{D7FF}'
        | '\u{F900}'..='\u{FDCF}'
        | '\u{FDF0}'..='\u{FFFD}'
        | '\u{10000}'..='\u{EFFFF}')
}

fn is_name_char(c: char) -> bool {
    is_name_start_char(c)
        || matches!(c,
            '-' | '.' | '0'..='9' | '\u{B7}' | '\u{300}'..='\u{36F}' | '\u{203F}'..='\u{2040}')
}
