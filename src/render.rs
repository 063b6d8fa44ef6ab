//! HTML Rendering for the component arena
//!
//! Renders finished component trees to HTML strings.

use crate::attr::DeclarationsExt;
use crate::id::NodeId;
use crate::node::{Child, Dom};

// =============================================================================
// RenderConfig
// =============================================================================

/// Default attribute name for node handles.
pub const DEFAULT_ID_ATTR: &str = "data-node-id";

/// Configuration for HTML rendering.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Whether to emit node handle attributes, so a host can map DOM
    /// elements back to arena nodes.
    pub emit_ids: bool,
    /// Attribute name for node handles (default: "data-node-id").
    pub id_attr_name: String,
}

impl RenderConfig {
    /// Development config (emit IDs).
    pub const DEV: Self = Self {
        emit_ids: true,
        id_attr_name: String::new(), // Will use DEFAULT_ID_ATTR
    };

    /// Production config (no IDs).
    pub const PROD: Self = Self {
        emit_ids: false,
        id_attr_name: String::new(),
    };

    /// Create a new config.
    pub fn new(emit_ids: bool) -> Self {
        Self {
            emit_ids,
            id_attr_name: DEFAULT_ID_ATTR.to_string(),
        }
    }

    /// Set custom attribute name for node handles.
    pub fn with_id_attr(mut self, attr_name: impl Into<String>) -> Self {
        self.id_attr_name = attr_name.into();
        self
    }

    /// Get the attribute name for node handles.
    pub fn id_attr(&self) -> &str {
        if self.id_attr_name.is_empty() {
            DEFAULT_ID_ATTR
        } else {
            &self.id_attr_name
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::PROD
    }
}

// =============================================================================
// Node Rendering
// =============================================================================

/// Render one node and its subtree to an HTML string.
pub fn render_node(dom: &Dom, id: NodeId, config: &RenderConfig) -> String {
    let mut output = String::new();
    render_element(dom, id, config, &mut output);
    output
}

fn render_element(dom: &Dom, id: NodeId, config: &RenderConfig, output: &mut String) {
    let elem = &dom[id];
    let tag = elem.tag.as_str();

    output.push('<');
    output.push_str(tag);

    if !elem.markers.is_empty() {
        push_attr(output, "class", &elem.markers.to_class_attr());
    }

    if !elem.style.is_empty() {
        push_attr(output, "style", &elem.style.to_style_attr());
    }

    if config.emit_ids {
        push_attr(output, config.id_attr(), &id.to_attr_value());
    }

    output.push('>');

    for child in &elem.children {
        match child {
            Child::Element(child) => render_element(dom, *child, config, output),
            Child::Text(text) => output.push_str(&escape_html(text)),
        }
    }

    output.push_str("</");
    output.push_str(tag);
    output.push('>');
}

fn push_attr(output: &mut String, name: &str, value: &str) {
    output.push(' ');
    output.push_str(name);
    output.push_str("=\"");
    output.push_str(&escape_attr(value));
    output.push('"');
}

/// Escape HTML special characters.
fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            _ => result.push(c),
        }
    }
    result
}

/// Escape attribute value special characters.
fn escape_attr(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '"' => result.push_str("&quot;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            _ => result.push(c),
        }
    }
    result
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::HtmlBuilder;
    use crate::color::PackedColor;
    use crate::style::{Format, TriState};

    #[test]
    fn test_render_text_component() {
        let mut b = HtmlBuilder::default();
        let node = b.create_text("a < b");

        let html = render_node(b.dom(), node, &RenderConfig::PROD);
        assert_eq!(
            html,
            "<span class=\"rendered-component\"><span>a &lt; b</span></span>"
        );
    }

    #[test]
    fn test_render_style_and_formats() {
        let mut b = HtmlBuilder::default();
        let node = b.create_text("x");
        b.set_color(node, PackedColor::rgb(0xFF, 0, 0), true);
        b.set_format(node, TriState::False, Format::Bold, true);

        let html = render_node(b.dom(), node, &RenderConfig::PROD);
        assert!(html.starts_with(
            "<span class=\"rendered-component rendered-component--non-bold\" \
             style=\"color: #ff0000; --shadow-color: #ff00003c\">"
        ));
    }

    #[test]
    fn test_render_hover_container() {
        let mut b = HtmlBuilder::default();
        let node = b.create_text("");
        let tip = b.create_text("tip");
        b.set_hover_text(node, Some(&[tip]));

        let html = render_node(b.dom(), node, &RenderConfig::PROD);
        assert!(html.contains("<div class=\"rendered-component__hover-text\">"));
        assert!(html.contains("rendered-component rendered-component-line"));
    }

    #[test]
    fn test_emit_ids() {
        let mut b = HtmlBuilder::default();
        let node = b.create_text("");

        let html = render_node(b.dom(), node, &RenderConfig::DEV);
        assert!(html.contains(&format!("data-node-id=\"{}\"", node.to_attr_value())));

        let config = RenderConfig::new(true).with_id_attr("data-my-id");
        let html = render_node(b.dom(), node, &config);
        assert!(html.contains("data-my-id="));
        assert!(!html.contains("data-node-id"));

        assert!(!render_node(b.dom(), node, &RenderConfig::default()).contains("data-node-id"));
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape_html("<script>"), "&lt;script&gt;");
        assert_eq!(escape_html("a & b"), "a &amp; b");
        assert_eq!(escape_attr("say \"hi\""), "say &quot;hi&quot;");
    }
}
