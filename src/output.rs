//! Finished component trees handed to the host.

use crate::id::NodeId;
use crate::node::Dom;
use crate::render::{RenderConfig, render_node};

/// Arena plus the ordered root nodes, one per output line
#[derive(Debug)]
pub struct ComponentOutput {
    dom: Dom,
    roots: Vec<NodeId>,
}

impl ComponentOutput {
    pub fn new(dom: Dom, roots: Vec<NodeId>) -> Self {
        Self { dom, roots }
    }

    pub fn dom(&self) -> &Dom {
        &self.dom
    }

    /// Root nodes in line order
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Render each root to its own HTML string
    pub fn render_lines(&self, config: &RenderConfig) -> Vec<String> {
        self.roots
            .iter()
            .map(|root| render_node(&self.dom, *root, config))
            .collect()
    }

    /// Render all lines back to back
    pub fn render_html(&self, config: &RenderConfig) -> String {
        self.render_lines(config).concat()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::HtmlBuilder;
    use crate::marker::Marker;

    #[test]
    fn test_finish_marks_lines() {
        let mut b = HtmlBuilder::default();
        let first = b.create_text("one");
        let second = b.create_text("two");
        let output = b.finish(&[first, second]);

        assert_eq!(output.roots(), &[first, second]);
        assert!(output.dom()[first].has_marker(Marker::Line));
        assert!(output.dom()[second].has_marker(Marker::Line));

        let lines = output.render_lines(&RenderConfig::PROD);
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains(">one<"));
        assert!(lines[1].contains(">two<"));
        assert_eq!(output.render_html(&RenderConfig::PROD), lines.concat());
    }

    #[test]
    fn test_empty_output() {
        let output = HtmlBuilder::default().finish(&[]);
        assert!(output.render_lines(&RenderConfig::DEV).is_empty());
        assert_eq!(output.render_html(&RenderConfig::DEV), "");
    }
}
