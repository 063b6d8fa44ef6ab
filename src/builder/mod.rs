//! Component realization on top of the [`Dom`] arena.
//!
//! [`HtmlBuilder`] holds the state both deployment profiles share:
//! - node creation (`create_text`, `create_key`, `create_translate`)
//! - style application with override/extend semantics ([`style`])
//! - the visible/hover partitioning of a node's children ([`structure`])
//!
//! Profiles wrap a builder and only decide what to do with actions.

pub mod style;
pub mod structure;
pub mod translate;

pub use structure::{HoverEntity, HoverItem};
pub use style::SHADOW_ALPHA;
pub use translate::{Segment, split_template};

use crate::id::NodeId;
use crate::lookup::HostLookups;
use crate::marker::Marker;
use crate::node::{Child, Dom, Tag};
use crate::output::ComponentOutput;

/// Separator that marks a keybinding display name as a translation key
const TRANSLATION_KEY_SEPARATOR: char = '.';

// =============================================================================
// HtmlBuilder
// =============================================================================

/// Shared realization state: the arena plus host lookups
#[derive(Debug, Default)]
pub struct HtmlBuilder {
    dom: Dom,
    lookups: HostLookups,
}

impl HtmlBuilder {
    pub fn new(lookups: HostLookups) -> Self {
        Self {
            dom: Dom::new(),
            lookups,
        }
    }

    /// Arena with every node created so far
    pub fn dom(&self) -> &Dom {
        &self.dom
    }

    pub fn lookups(&self) -> &HostLookups {
        &self.lookups
    }

    /// Tag every root as a rendered line and hand the tree over
    pub fn finish(mut self, roots: &[NodeId]) -> ComponentOutput {
        for &root in roots {
            self.dom[root].markers.insert(Marker::Line);
        }
        ComponentOutput::new(self.dom, roots.to_vec())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Visual node builder
    // ─────────────────────────────────────────────────────────────────────────

    /// Create a component holding `text`.
    ///
    /// Non-empty text is nested in an inner leaf `span`: bare text cannot be
    /// hit-tested, and an empty component must not expose a text region.
    pub fn create_text(&mut self, text: &str) -> NodeId {
        let node = self.dom.create(Tag::Span);
        self.dom[node].markers.insert(Marker::Component);

        if !text.is_empty() {
            let leaf = self.dom.create(Tag::Span);
            self.dom.append_text(leaf, text);
            self.dom.append_child(node, leaf);
        }

        node
    }

    /// Replace the content of the node's last text leaf.
    ///
    /// The leaf `span` itself is kept and only its text is swapped. Replacing
    /// the leaf with bare text would lose the hit-testing region and make a
    /// second call fail; keeping it is deliberate, so repeated calls succeed.
    ///
    /// Returns `false` if the node has no text leaf (empty text components and
    /// pure containers).
    pub fn set_text(&mut self, node: NodeId, text: &str) -> bool {
        let leaf = self.dom[node]
            .children
            .iter()
            .rev()
            .filter_map(Child::as_element)
            .find(|id| {
                let elem = &self.dom[*id];
                elem.tag == Tag::Span && !elem.is_component()
            });

        let Some(leaf) = leaf else {
            return false;
        };

        self.dom.retain_children(leaf, |_, _| false);
        self.dom.append_text(leaf, text);
        true
    }

    /// Create a component showing a keybinding.
    ///
    /// Fallback chain: unresolved binding → literal key; binding without a
    /// `.` → binding as text; binding as translation key → translation, or
    /// the binding itself when that fails.
    pub fn create_key(&mut self, key: &str) -> NodeId {
        let Some(binding) = self.lookups.keybind(key) else {
            tracing::trace!(key, "unresolved keybind");
            return self.create_text(key);
        };

        if !binding.contains(TRANSLATION_KEY_SEPARATOR) {
            return self.create_text(&binding);
        }

        match self.lookups.translation(&binding) {
            Some(translation) => self.create_text(&translation),
            None => {
                tracing::trace!(key, %binding, "keybind names an unresolved translation");
                self.create_text(&binding)
            }
        }
    }

    /// Create a component from a translation template.
    ///
    /// `fallback` is accepted for interface compatibility but not consulted:
    /// an unresolved key, or a template referencing a missing argument, renders
    /// the literal key.
    pub fn create_translate(
        &mut self,
        key: &str,
        with: &[NodeId],
        _fallback: Option<&str>,
    ) -> NodeId {
        let Some(template) = self.lookups.translation(key) else {
            tracing::trace!(key, "unresolved translation");
            return self.create_text(key);
        };

        let Some(segments) = split_template(&template, with.len()) else {
            tracing::debug!(key, arguments = with.len(), "placeholder out of range");
            return self.create_text(key);
        };

        let nodes: Vec<NodeId> = segments
            .into_iter()
            .map(|segment| match segment {
                Segment::Literal(text) => self.create_text(text),
                Segment::Argument(index) => with[index],
            })
            .collect();

        if let [single] = nodes.as_slice() {
            return *single;
        }

        let container = self.create_text("");
        self.set_children(container, Some(&nodes));
        container
    }
}
