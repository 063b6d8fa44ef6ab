//! Marker-class vocabulary
//!
//! Partition membership and explicit format state are boolean tags on an
//! element. Internally they are bits of a [`MarkerSet`]; only the renderer
//! flattens them into a `class` attribute.
//!
//! Bit layout:
//! - 0: component base marker
//! - 1: rendered line
//! - 2: hover-content container
//! - 3 + 2·ordinal: format true
//! - 4 + 2·ordinal: format false

use std::fmt;

use crate::style::{Format, TriState};

/// Base class of every component node
pub const COMPONENT_CLASS: &str = "rendered-component";

/// Class of a rendered line (root output lines and tooltip lines)
pub const LINE_CLASS: &str = "rendered-component-line";

/// Class of the hover-content container
pub const HOVER_TEXT_CLASS: &str = "rendered-component__hover-text";

// =============================================================================
// Marker
// =============================================================================

/// One reserved boolean tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    /// Base marker of a component container
    Component,
    /// Element renders as its own line
    Line,
    /// Container of the hover content partition
    HoverText,
    /// Explicit format opt-in
    FormatTrue(Format),
    /// Explicit format opt-out
    FormatFalse(Format),
}

impl Marker {
    /// Marker that encodes an explicit format value, `None` for unset
    pub fn for_format(format: Format, value: TriState) -> Option<Self> {
        match value {
            TriState::True => Some(Self::FormatTrue(format)),
            TriState::False => Some(Self::FormatFalse(format)),
            TriState::Unset => None,
        }
    }

    const fn bit(self) -> u16 {
        let shift = match self {
            Self::Component => 0,
            Self::Line => 1,
            Self::HoverText => 2,
            Self::FormatTrue(format) => 3 + 2 * format.ordinal(),
            Self::FormatFalse(format) => 4 + 2 * format.ordinal(),
        };
        1 << shift
    }

    /// Class name at the host boundary
    pub fn class_name(self) -> String {
        match self {
            Self::Component => COMPONENT_CLASS.to_string(),
            Self::Line => LINE_CLASS.to_string(),
            Self::HoverText => HOVER_TEXT_CLASS.to_string(),
            Self::FormatTrue(format) => format!("{COMPONENT_CLASS}--{}", format.name()),
            Self::FormatFalse(format) => format!("{COMPONENT_CLASS}--non-{}", format.name()),
        }
    }

    /// Every marker, in class-attribute order
    pub fn all() -> impl Iterator<Item = Marker> {
        [Self::Component, Self::Line, Self::HoverText]
            .into_iter()
            .chain(Format::ALL.into_iter().flat_map(|format| {
                [Self::FormatTrue(format), Self::FormatFalse(format)]
            }))
    }
}

// =============================================================================
// MarkerSet
// =============================================================================

/// Small set of [`Marker`]s attached to one element
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MarkerSet(u16);

impl MarkerSet {
    pub const EMPTY: Self = Self(0);

    /// Add a marker, returning whether it was newly inserted
    pub fn insert(&mut self, marker: Marker) -> bool {
        let fresh = !self.contains(marker);
        self.0 |= marker.bit();
        fresh
    }

    /// Remove a marker, returning whether it was present
    pub fn remove(&mut self, marker: Marker) -> bool {
        let present = self.contains(marker);
        self.0 &= !marker.bit();
        present
    }

    #[inline]
    pub fn contains(&self, marker: Marker) -> bool {
        self.0 & marker.bit() != 0
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Current explicit value of a format
    pub fn format(&self, format: Format) -> TriState {
        if self.contains(Marker::FormatTrue(format)) {
            TriState::True
        } else if self.contains(Marker::FormatFalse(format)) {
            TriState::False
        } else {
            TriState::Unset
        }
    }

    /// Replace the explicit value of a format; both markers are cleared first
    pub fn set_format(&mut self, format: Format, value: TriState) {
        self.remove(Marker::FormatTrue(format));
        self.remove(Marker::FormatFalse(format));
        if let Some(marker) = Marker::for_format(format, value) {
            self.insert(marker);
        }
    }

    /// Iterate over contained markers in class-attribute order
    pub fn iter(&self) -> impl Iterator<Item = Marker> + '_ {
        Marker::all().filter(|marker| self.contains(*marker))
    }

    /// Flat `class` attribute value
    pub fn to_class_attr(&self) -> String {
        self.iter()
            .map(Marker::class_name)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Debug for MarkerSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl FromIterator<Marker> for MarkerSet {
    fn from_iter<T: IntoIterator<Item = Marker>>(iter: T) -> Self {
        let mut set = Self::EMPTY;
        for marker in iter {
            set.insert(marker);
        }
        set
    }
}
