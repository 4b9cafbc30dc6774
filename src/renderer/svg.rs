//! SVG element and document generation

use crate::attributes::Attribute;
use crate::config::ViewportSpec;

use super::SvgConfig;

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="no"?>"#;
const SVG_DOCTYPE: &str = r#"<!DOCTYPE svg PUBLIC "-//W3C//DTD SVG 1.1//EN" "http://www.w3.org/Graphics/SVG/1.1/DTD/svg11.dtd">"#;

/// Build a `<path>` element: `d` first, then attributes in order
///
/// Attribute values are XML-escaped here, whatever their source.
pub fn path_element(d: &str, attributes: &[Attribute]) -> String {
    let attrs: String = attributes
        .iter()
        .map(|a| format!(r#" {}="{}""#, a.name, escape_xml(&a.value)))
        .collect();
    format!(r#"<path d="{}"{}/>"#, d, attrs)
}

/// Build SVG documents incrementally
pub struct SvgBuilder {
    config: SvgConfig,
    elements: Vec<String>,
}

impl SvgBuilder {
    /// Create a new SVG builder
    pub fn new(config: SvgConfig) -> Self {
        Self {
            config,
            elements: vec![],
        }
    }

    fn indent_str(&self) -> &str {
        if self.config.pretty_print {
            "  "
        } else {
            ""
        }
    }

    fn newline(&self) -> &str {
        if self.config.pretty_print {
            "\n"
        } else {
            ""
        }
    }

    /// Add a pre-built element
    pub fn add_element(&mut self, element: impl Into<String>) {
        self.elements.push(element.into());
    }

    /// Build the final output
    ///
    /// In paths-only mode the elements are emitted one per line with no
    /// envelope at all.
    pub fn build(self, viewport: ViewportSpec) -> String {
        if self.config.paths_only {
            return self.elements.join("\n");
        }

        let nl = self.newline();
        let mut svg = String::new();

        if self.config.standalone {
            svg.push_str(XML_DECLARATION);
            svg.push_str(nl);
            svg.push_str(SVG_DOCTYPE);
            svg.push_str(nl);
        }

        svg.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = viewport.width,
            h = viewport.height
        ));
        svg.push_str(nl);

        for elem in &self.elements {
            svg.push_str(self.indent_str());
            svg.push_str(elem);
            svg.push_str(nl);
        }

        svg.push_str("</svg>");
        svg
    }
}

/// Wrap converted elements into an SVG document (or bare paths)
pub fn render_document(elements: &[String], viewport: ViewportSpec, config: &SvgConfig) -> String {
    let mut builder = SvgBuilder::new(config.clone());
    for element in elements {
        builder.add_element(element.as_str());
    }
    builder.build(viewport)
}

/// Escape special XML characters for use inside a double-quoted attribute
pub fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
