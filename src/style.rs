//! Style state vocabulary
//!
//! Formats are tri-state: [`TriState::Unset`] defers to whatever an ancestor
//! renders, while `True`/`False` are explicit opt-in and opt-out.

use std::fmt;
use std::str::FromStr;

use crate::color::PackedColor;

// =============================================================================
// TriState
// =============================================================================

/// Three-valued flag: unset, true or false
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TriState {
    #[default]
    Unset,
    True,
    False,
}

impl TriState {
    /// Whether an explicit value is present
    #[inline]
    pub fn is_set(self) -> bool {
        self != Self::Unset
    }

    /// Explicit value, if any
    #[inline]
    pub fn as_bool(self) -> Option<bool> {
        match self {
            Self::Unset => None,
            Self::True => Some(true),
            Self::False => Some(false),
        }
    }
}

impl From<bool> for TriState {
    fn from(value: bool) -> Self {
        if value { Self::True } else { Self::False }
    }
}

impl From<Option<bool>> for TriState {
    fn from(value: Option<bool>) -> Self {
        value.map_or(Self::Unset, Self::from)
    }
}

// =============================================================================
// Format
// =============================================================================

/// Text decoration kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Bold,
    Italic,
    Obfuscated,
    Strikethrough,
    Underlined,
}

impl Format {
    /// All formats in ordinal order
    pub const ALL: [Format; 5] = [
        Self::Bold,
        Self::Italic,
        Self::Obfuscated,
        Self::Strikethrough,
        Self::Underlined,
    ];

    /// Stable ordinal, used for bit positions
    #[inline]
    pub const fn ordinal(self) -> usize {
        self as usize
    }

    /// Lowercase name as used in markup and class names
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bold => "bold",
            Self::Italic => "italic",
            Self::Obfuscated => "obfuscated",
            Self::Strikethrough => "strikethrough",
            Self::Underlined => "underlined",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Format name not known to this crate
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown format `{0}`")]
pub struct UnknownFormat(pub String);

impl FromStr for Format {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|format| format.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownFormat(s.to_string()))
    }
}

// =============================================================================
// FormatStates / StyleBundle
// =============================================================================

/// One [`TriState`] per [`Format`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FormatStates([TriState; 5]);

impl FormatStates {
    /// Every format unset
    pub const UNSET: Self = Self([TriState::Unset; 5]);

    pub fn get(&self, format: Format) -> TriState {
        self.0[format.ordinal()]
    }

    pub fn set(&mut self, format: Format, value: TriState) {
        self.0[format.ordinal()] = value;
    }

    /// Iterate over the formats that carry an explicit value
    pub fn explicit(&self) -> impl Iterator<Item = (Format, TriState)> + '_ {
        Format::ALL
            .into_iter()
            .map(|format| (format, self.get(format)))
            .filter(|(_, value)| value.is_set())
    }
}

/// Default style of a slot: color, shadow color and all five formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StyleBundle {
    pub color: Option<PackedColor>,
    pub shadow_color: Option<PackedColor>,
    pub formats: FormatStates,
}

impl StyleBundle {
    /// Bundle without any attribute
    pub const EMPTY: Self = Self {
        color: None,
        shadow_color: None,
        formats: FormatStates::UNSET,
    };

    pub const fn with_color(mut self, color: PackedColor) -> Self {
        self.color = Some(color);
        self
    }

    pub const fn with_shadow_color(mut self, color: PackedColor) -> Self {
        self.shadow_color = Some(color);
        self
    }

    pub const fn with_format(mut self, format: Format, value: TriState) -> Self {
        self.formats.0[format.ordinal()] = value;
        self
    }

    /// Whether no attribute is present
    pub fn is_empty(&self) -> bool {
        self.color.is_none() && self.shadow_color.is_none() && self.formats.explicit().next().is_none()
    }
}
