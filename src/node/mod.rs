//! Node types for the component arena.
//!
//! This module provides `Element`, `Child` and the `Dom` arena that owns
//! every element created while realizing one component tree.
//!
//! # Key Features
//!
//! - One element per visual node, addressed by a `Copy` [`NodeId`]
//! - Visible and hover content share one child list, told apart by markers
//! - DOM move semantics: attaching an attached node detaches it first

mod element;
mod dom;

pub use element::{Element, Tag};
pub use dom::{Descendants, Dom};

use compact_str::CompactString;
use smallvec::SmallVec;

use crate::id::NodeId;

/// Entry in an element's child list - either a nested element or raw text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Child {
    Element(NodeId),
    Text(CompactString),
}

impl Child {
    /// Check if this is an element child.
    #[inline]
    pub fn is_element(&self) -> bool {
        matches!(self, Child::Element(_))
    }

    /// Check if this is a text child.
    #[inline]
    pub fn is_text(&self) -> bool {
        matches!(self, Child::Text(_))
    }

    /// Get the element handle.
    #[inline]
    pub fn as_element(&self) -> Option<NodeId> {
        match self {
            Child::Element(id) => Some(*id),
            _ => None,
        }
    }

    /// Get the text content.
    #[inline]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Child::Text(t) => Some(t),
            _ => None,
        }
    }
}

/// Type alias for children collection.
pub type Children = SmallVec<[Child; 4]>;
