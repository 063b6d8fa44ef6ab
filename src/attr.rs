//! Inline style declarations for VDOM elements
//!
//! Elements only ever carry a handful of properties (`color`,
//! `--shadow-color`), so declarations are a small ordered vector of
//! property/value pairs rather than a map.

use compact_str::CompactString;
use smallvec::SmallVec;

/// CSS property holding the foreground color
pub const COLOR_PROPERTY: &str = "color";

/// CSS custom property holding the text-shadow color
pub const SHADOW_COLOR_PROPERTY: &str = "--shadow-color";

/// Inline style declarations as property/value pairs, in insertion order
pub type Declarations = SmallVec<[(CompactString, CompactString); 2]>;

/// Extension trait for property operations on Declarations
pub trait DeclarationsExt {
    /// Get a property value by name
    fn get_property(&self, name: &str) -> Option<&str>;

    /// Check whether a property carries a non-blank value
    fn has_property(&self, name: &str) -> bool;

    /// Set a property value (insert or update in place)
    fn set_property(&mut self, name: &str, value: impl Into<CompactString>);

    /// Remove a property by name, returning the old value if present
    fn remove_property(&mut self, name: &str) -> Option<CompactString>;

    /// Serialize as a `style` attribute value
    fn to_style_attr(&self) -> String;
}

impl DeclarationsExt for Declarations {
    fn get_property(&self, name: &str) -> Option<&str> {
        self.iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    fn has_property(&self, name: &str) -> bool {
        self.get_property(name)
            .is_some_and(|v| !v.trim().is_empty())
    }

    fn set_property(&mut self, name: &str, value: impl Into<CompactString>) {
        let value = value.into();
        if let Some(decl) = self.iter_mut().find(|(k, _)| k == name) {
            decl.1 = value;
        } else {
            self.push((CompactString::from(name), value));
        }
    }

    fn remove_property(&mut self, name: &str) -> Option<CompactString> {
        self.iter()
            .position(|(k, _)| k == name)
            .map(|pos| self.remove(pos).1)
    }

    fn to_style_attr(&self) -> String {
        self.iter()
            .map(|(k, v)| format!("{k}: {v}"))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

// =============================================================================
// Tests
// =============================================================================
