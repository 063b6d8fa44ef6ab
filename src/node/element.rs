//! Element type - one container per visual node
//!
//! The core building block of the component arena.

use crate::attr::{Declarations, DeclarationsExt};
use crate::id::NodeId;
use crate::marker::{Marker, MarkerSet};

use super::{Child, Children};

// =============================================================================
// Tag
// =============================================================================

/// Container tag name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    /// Inline container: components and text leaves
    Span,
    /// Block container: hover content
    Div,
}

impl Tag {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Span => "span",
            Self::Div => "div",
        }
    }
}

// =============================================================================
// Element
// =============================================================================

/// Container element with markers, inline style and children
#[derive(Debug, Clone)]
pub struct Element {
    /// Container tag
    pub tag: Tag,
    /// Reserved boolean tags (partition membership, explicit formats)
    pub markers: MarkerSet,
    /// Inline style declarations
    pub style: Declarations,
    /// Ordered child list
    pub children: Children,
    pub(crate) parent: Option<NodeId>,
}

impl Element {
    /// Create a detached element without markers or children
    pub fn new(tag: Tag) -> Self {
        Self {
            tag,
            markers: MarkerSet::EMPTY,
            style: Declarations::new(),
            children: Children::new(),
            parent: None,
        }
    }

    /// Current parent, `None` while detached
    #[inline]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Marker and style access
    // ─────────────────────────────────────────────────────────────────────────

    #[inline]
    pub fn has_marker(&self, marker: Marker) -> bool {
        self.markers.contains(marker)
    }

    /// Check if this element is a component container
    #[inline]
    pub fn is_component(&self) -> bool {
        self.has_marker(Marker::Component)
    }

    /// Check if this element is the hover-content container
    #[inline]
    pub fn is_hover_container(&self) -> bool {
        self.has_marker(Marker::HoverText)
    }

    /// Inline style property value
    pub fn property(&self, name: &str) -> Option<&str> {
        self.style.get_property(name)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Child helpers
    // ─────────────────────────────────────────────────────────────────────────

    /// Check if element has no children
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of direct children (all node types)
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Iterate over child element handles
    pub fn child_elements(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.children.iter().filter_map(Child::as_element)
    }

    /// Index of a child element in the child list
    pub(crate) fn position_of(&self, child: NodeId) -> Option<usize> {
        self.children
            .iter()
            .position(|c| c.as_element() == Some(child))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_basics() {
        let mut elem = Element::new(Tag::Span);
        assert_eq!(elem.tag.as_str(), "span");
        assert!(elem.is_empty());
        assert!(!elem.is_component());
        assert_eq!(elem.parent(), None);

        elem.markers.insert(Marker::Component);
        elem.children.push(Child::Element(NodeId::from_raw(3)));
        elem.children.push(Child::Text("x".into()));
        assert!(elem.is_component());
        assert_eq!(elem.child_count(), 2);
        assert_eq!(elem.child_elements().collect::<Vec<_>>(), vec![NodeId::from_raw(3)]);
        assert_eq!(elem.position_of(NodeId::from_raw(3)), Some(0));
        assert_eq!(elem.position_of(NodeId::from_raw(4)), None);
    }
}
