//! Style application with override/extend semantics.
//!
//! Every setter has a non-overriding mode that leaves an explicit prior value
//! alone. Direct calls from the interpreter override; the non-overriding mode
//! is used to derive shadow colors and to fill in slot defaults.

use crate::attr::{COLOR_PROPERTY, DeclarationsExt, SHADOW_COLOR_PROPERTY};
use crate::color::PackedColor;
use crate::id::NodeId;
use crate::slot::{SlotContext, SlotType};
use crate::style::{Format, TriState};

use super::HtmlBuilder;

/// Alpha of the shadow color derived from a foreground color (0–255)
pub const SHADOW_ALPHA: u8 = 60;

impl HtmlBuilder {
    /// Set the foreground color.
    ///
    /// Without `override_`, an already present color wins. Whenever the color
    /// is written, a shadow color with [`SHADOW_ALPHA`] is derived through the
    /// non-overriding path.
    pub fn set_color(&mut self, node: NodeId, color: PackedColor, override_: bool) {
        let style = &mut self.dom[node].style;
        if !override_ && style.has_property(COLOR_PROPERTY) {
            return;
        }

        style.set_property(COLOR_PROPERTY, color.as_non_alpha_hex());
        self.apply_shadow_color(node, color.with_alpha(SHADOW_ALPHA), false);
    }

    /// Set the shadow color, replacing any previous one
    pub fn set_shadow_color(&mut self, node: NodeId, color: PackedColor) {
        self.apply_shadow_color(node, color, true);
    }

    fn apply_shadow_color(&mut self, node: NodeId, color: PackedColor, override_: bool) {
        let style = &mut self.dom[node].style;
        if !override_ && style.has_property(SHADOW_COLOR_PROPERTY) {
            return;
        }

        style.set_property(SHADOW_COLOR_PROPERTY, color.as_alpha_hex());
    }

    /// Set one tri-state format.
    ///
    /// Without `override_`, an explicit prior value (true or false) wins.
    /// Otherwise both markers are cleared and the one matching `value` is
    /// added; `Unset` leaves neither, so the node inherits again.
    pub fn set_format(&mut self, node: NodeId, value: TriState, format: Format, override_: bool) {
        let markers = &mut self.dom[node].markers;
        if !override_ && markers.format(format).is_set() {
            return;
        }

        markers.set_format(format, value);
    }

    /// [`HtmlBuilder::set_format`] for formats named by the interpreter.
    ///
    /// Unknown names are logged and ignored.
    pub fn set_format_named(&mut self, node: NodeId, value: TriState, name: &str, override_: bool) {
        match name.parse::<Format>() {
            Ok(format) => self.set_format(node, value, format, override_),
            Err(err) => tracing::warn!(%node, "{err}, ignoring"),
        }
    }

    /// Fill in the slot's default style without replacing explicit choices
    pub fn extend_default_styles(&mut self, node: NodeId, slot: SlotType) {
        let defaults = SlotContext::embedded(slot).default_style;

        if let Some(color) = defaults.color {
            self.set_color(node, color, false);
        }

        if let Some(shadow) = defaults.shadow_color {
            self.apply_shadow_color(node, shadow, false);
        }

        for (format, value) in defaults.formats.explicit() {
            self.set_format(node, value, format, false);
        }
    }
}
