//! Opaque node handles
//!
//! Every visual node lives in the [`Dom`](crate::node::Dom) arena and is
//! addressed by a [`NodeId`]. Handles are plain indices:
//! - **Identity**: two handles are the same node iff they compare equal
//! - **Lifetime**: a handle stays valid for the whole lifetime of its arena,
//!   detachment from a parent never invalidates it
//!
//! Handles are only meaningful for the arena that issued them.

use std::fmt;

// =============================================================================
// NodeId
// =============================================================================

/// Handle of one visual node (one container element)
///
/// # Memory Layout
///
/// - 4 bytes (u32)
/// - Copy, no heap allocation
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[must_use]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Create a NodeId from a raw arena index.
    ///
    /// Prefer the handles returned by the builder; this exists for hosts that
    /// round-trip ids through rendered `data-node-id` attributes.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Get the raw u32 representation
    #[inline]
    pub const fn as_raw(&self) -> u32 {
        self.0
    }

    #[inline]
    pub(crate) const fn index(&self) -> usize {
        self.0 as usize
    }

    /// Return the id serialized for use in `data-node-id` attributes.
    ///
    /// Lowercase hex, no leading `#`.
    #[inline]
    pub fn to_attr_value(self) -> String {
        format!("{:x}", self.as_raw())
    }

    /// Parse an id previously produced by [`NodeId::to_attr_value`].
    pub fn from_attr_value(value: &str) -> Option<Self> {
        u32::from_str_radix(value, 16).ok().map(Self)
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:x}", self.0)
    }
}

// =============================================================================
// Tests
// =============================================================================
