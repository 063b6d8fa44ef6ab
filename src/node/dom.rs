//! Dom arena and related utilities
//!
//! Owns every element created while realizing one component tree, with
//! mutation and traversal APIs addressed by [`NodeId`].

use std::ops::{Index, IndexMut};

use compact_str::CompactString;

use crate::id::NodeId;

use super::{Child, Element, Tag};

// =============================================================================
// Dom
// =============================================================================

/// Arena of elements
///
/// Elements are never freed individually: a node removed from its parent is
/// merely detached and stays addressable until the arena is dropped.
///
/// Indexing with a handle issued by another arena panics like an
/// out-of-bounds slice access.
#[derive(Debug, Clone, Default)]
pub struct Dom {
    elements: Vec<Element>,
}

impl Dom {
    /// Create an empty arena
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty arena with room for `capacity` elements
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            elements: Vec::with_capacity(capacity),
        }
    }

    /// Allocate a fresh, detached element
    pub fn create(&mut self, tag: Tag) -> NodeId {
        let id = NodeId(self.elements.len() as u32);
        self.elements.push(Element::new(tag));
        id
    }

    /// Get an element, `None` for foreign handles
    pub fn get(&self, id: NodeId) -> Option<&Element> {
        self.elements.get(id.index())
    }

    /// Get an element mutably, `None` for foreign handles
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Element> {
        self.elements.get_mut(id.index())
    }

    /// Number of elements ever allocated (attached or not)
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutation API
    // ─────────────────────────────────────────────────────────────────────────

    /// Append `child` as the last child of `parent`.
    ///
    /// A child that is already attached somewhere is moved. Returns `false`
    /// (and leaves the tree untouched) if the move would make a node its own
    /// ancestor.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> bool {
        if self.is_ancestor_or_self(child, parent) {
            tracing::warn!(%parent, %child, "refusing to attach a node below itself");
            return false;
        }
        self.detach(child);
        self[parent].children.push(Child::Element(child));
        self[child].parent = Some(parent);
        true
    }

    /// Append a raw text child to `parent`
    pub fn append_text(&mut self, parent: NodeId, text: impl Into<CompactString>) {
        self[parent].children.push(Child::Text(text.into()));
    }

    /// Remove `id` from its parent's child list, if attached
    pub fn detach(&mut self, id: NodeId) {
        let Some(parent) = self[id].parent.take() else {
            return;
        };
        if let Some(pos) = self[parent].position_of(id) {
            self[parent].children.remove(pos);
        }
    }

    /// Keep only the children for which `keep` returns true.
    ///
    /// The predicate sees the arena in its pre-removal state. Removed element
    /// children are detached.
    pub fn retain_children<F>(&mut self, parent: NodeId, mut keep: F)
    where
        F: FnMut(&Dom, &Child) -> bool,
    {
        let verdicts: Vec<bool> = {
            let dom: &Dom = self;
            dom[parent]
                .children
                .iter()
                .map(|child| keep(dom, child))
                .collect()
        };

        let children = std::mem::take(&mut self[parent].children);
        let mut kept = super::Children::with_capacity(children.len());
        for (child, keep) in children.into_iter().zip(verdicts) {
            if keep {
                kept.push(child);
            } else if let Child::Element(id) = child {
                self[id].parent = None;
            }
        }
        self[parent].children = kept;
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Query API
    // ─────────────────────────────────────────────────────────────────────────

    /// Current parent of a node
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self[id].parent
    }

    /// Direct children of a node
    pub fn children(&self, id: NodeId) -> &[Child] {
        &self[id].children
    }

    /// Check whether `ancestor` is `node` or one of its ancestors
    pub fn is_ancestor_or_self(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self[id].parent;
        }
        false
    }

    /// Concatenated text of the node and all its descendants
    pub fn text_content(&self, id: NodeId) -> String {
        let mut result = String::new();
        self.collect_text(id, &mut result);
        result
    }

    fn collect_text(&self, id: NodeId, buf: &mut String) {
        for child in &self[id].children {
            match child {
                Child::Text(t) => buf.push_str(t),
                Child::Element(e) => self.collect_text(*e, buf),
            }
        }
    }

    /// Iterate over a node and all its descendant elements (depth-first)
    pub fn descendants(&self, root: NodeId) -> Descendants<'_> {
        Descendants {
            dom: self,
            stack: vec![root],
        }
    }

    /// Find all elements below (and including) `root` matching predicate
    pub fn find_all<F>(&self, root: NodeId, predicate: F) -> Vec<NodeId>
    where
        F: Fn(&Element) -> bool,
    {
        self.descendants(root)
            .filter(|id| predicate(&self[*id]))
            .collect()
    }
}

impl Index<NodeId> for Dom {
    type Output = Element;

    fn index(&self, id: NodeId) -> &Element {
        &self.elements[id.index()]
    }
}

impl IndexMut<NodeId> for Dom {
    fn index_mut(&mut self, id: NodeId) -> &mut Element {
        &mut self.elements[id.index()]
    }
}

// =============================================================================
// Descendants - depth-first element traversal
// =============================================================================

/// Depth-first iterator over element handles
pub struct Descendants<'a> {
    dom: &'a Dom,
    stack: Vec<NodeId>,
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        // Push children in reverse order so they're visited left-to-right
        self.stack
            .extend(self.dom[id].children.iter().rev().filter_map(Child::as_element));
        Some(id)
    }
}
