//! The capability contract driven by the markup interpreter.
//!
//! The interpreter walks its syntax tree depth-first and, per markup node,
//! creates a component, styles it, records its actions and finally attaches
//! children and hover content. [`ComponentConstructor`] is that contract.
//!
//! Two deployment profiles implement it:
//! - [`HtmlRenderer`]: accepts every feature, silently ignoring what a
//!   browser preview cannot execute (clicks, insertion, fonts)
//! - [`EditorPreview`]: fails on every feature but hover text, to surface
//!   fidelity gaps while editing
//!
//! Both share the node, style and structure semantics of
//! [`HtmlBuilder`](crate::builder::HtmlBuilder).

mod preview;
mod renderer;

pub use preview::EditorPreview;
pub use renderer::HtmlRenderer;

use std::fmt;

use crate::builder::{HoverEntity, HoverItem};
use crate::color::PackedColor;
use crate::error::ComponentResult;
use crate::id::NodeId;
use crate::slot::{SlotContext, SlotType};
use crate::style::{Format, TriState};

// =============================================================================
// ConstructorFeature
// =============================================================================

/// Features whose support depends on the deployment profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstructorFeature {
    ClickChangePage,
    ClickCopyToClipboard,
    ClickOpenFile,
    ClickOpenUrl,
    ClickRunCommand,
    ClickSuggestCommand,
    HoverItem,
    HoverEntity,
    HoverText,
    Insert,
    Font,
}

impl ConstructorFeature {
    pub const ALL: [ConstructorFeature; 11] = [
        Self::ClickChangePage,
        Self::ClickCopyToClipboard,
        Self::ClickOpenFile,
        Self::ClickOpenUrl,
        Self::ClickRunCommand,
        Self::ClickSuggestCommand,
        Self::HoverItem,
        Self::HoverEntity,
        Self::HoverText,
        Self::Insert,
        Self::Font,
    ];

    /// Kebab-case name used in diagnostics
    pub const fn name(self) -> &'static str {
        match self {
            Self::ClickChangePage => "click-change-page",
            Self::ClickCopyToClipboard => "click-copy-to-clipboard",
            Self::ClickOpenFile => "click-open-file",
            Self::ClickOpenUrl => "click-open-url",
            Self::ClickRunCommand => "click-run-command",
            Self::ClickSuggestCommand => "click-suggest-command",
            Self::HoverItem => "hover-item",
            Self::HoverEntity => "hover-entity",
            Self::HoverText => "hover-text",
            Self::Insert => "insert",
            Self::Font => "font",
        }
    }
}

impl fmt::Display for ConstructorFeature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// ComponentConstructor
// =============================================================================

/// Operations the interpreter invokes while realizing a component tree
///
/// All calls are synchronous. Handles returned by one constructor are only
/// valid with that constructor.
pub trait ComponentConstructor {
    /// Profile name used in diagnostics and errors
    const PROFILE: &'static str;

    /// Whether the profile can represent a feature
    fn does_support(&self, feature: ConstructorFeature) -> bool;

    /// Separator and default style of a slot in this embedding
    fn slot_context(&self, slot: SlotType) -> SlotContext;

    // ─────────────────────────────────────────────────────────────────────────
    // Node creation
    // ─────────────────────────────────────────────────────────────────────────

    fn create_text_component(&mut self, text: &str) -> NodeId;

    /// Replace the text of a text component, `false` if it has none
    fn set_text(&mut self, component: NodeId, text: &str) -> bool;

    fn create_key_component(&mut self, key: &str) -> NodeId;

    /// `fallback` is currently inert, see [`HtmlBuilder::create_translate`]
    ///
    /// [`HtmlBuilder::create_translate`]: crate::builder::HtmlBuilder::create_translate
    fn create_translate_component(
        &mut self,
        key: &str,
        with: &[NodeId],
        fallback: Option<&str>,
    ) -> NodeId;

    // ─────────────────────────────────────────────────────────────────────────
    // Style
    // ─────────────────────────────────────────────────────────────────────────

    fn set_color(&mut self, component: NodeId, color: PackedColor, override_: bool);

    fn set_shadow_color(&mut self, component: NodeId, color: PackedColor);

    fn set_format(&mut self, component: NodeId, value: TriState, format: Format);

    /// Set a format by name; unknown names are logged and ignored
    fn set_format_named(&mut self, component: NodeId, value: TriState, name: &str);

    impl_format_setters!(Bold, Italic, Obfuscated, Strikethrough, Underlined);

    fn set_font(&mut self, component: NodeId, font: Option<&str>) -> ComponentResult<()>;

    // ─────────────────────────────────────────────────────────────────────────
    // Structure
    // ─────────────────────────────────────────────────────────────────────────

    /// Replace the visible children, keeping hover content
    fn set_children(&mut self, component: NodeId, children: Option<&[NodeId]>);

    /// Last call on a finished component; returns the handle to emit
    fn finalize_component(&mut self, component: NodeId) -> NodeId {
        component
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Actions
    // ─────────────────────────────────────────────────────────────────────────

    fn set_click_change_page_action(&mut self, component: NodeId, value: &str) -> ComponentResult<()>;

    fn set_click_copy_to_clipboard_action(&mut self, component: NodeId, value: &str) -> ComponentResult<()>;

    fn set_click_open_file_action(&mut self, component: NodeId, value: &str) -> ComponentResult<()>;

    fn set_click_open_url_action(&mut self, component: NodeId, value: &str) -> ComponentResult<()>;

    fn set_click_run_command_action(&mut self, component: NodeId, value: &str) -> ComponentResult<()>;

    fn set_click_suggest_command_action(&mut self, component: NodeId, value: &str) -> ComponentResult<()>;

    fn set_hover_text_action(&mut self, component: NodeId, text: NodeId) -> ComponentResult<()>;

    fn set_hover_item_action(&mut self, component: NodeId, item: HoverItem) -> ComponentResult<()>;

    fn set_hover_entity_action(&mut self, component: NodeId, entity: HoverEntity) -> ComponentResult<()>;

    fn set_insert_action(&mut self, component: NodeId, value: &str) -> ComponentResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::HtmlBuilder;
    use crate::marker::Marker;

    /// Drives both profiles through the same construction sequence
    fn build_styled_tree<C: ComponentConstructor>(ctor: &mut C) -> (NodeId, NodeId) {
        let root = ctor.create_text_component("");
        let child = ctor.create_text_component("Hello");
        ctor.set_bold_format(child, TriState::True);
        ctor.set_italic_format(child, TriState::False);
        ctor.set_color(child, PackedColor::rgb(0x55, 0xFF, 0x55), false);
        ctor.set_children(root, Some(&[child]));
        (ctor.finalize_component(root), child)
    }

    fn assert_styled_tree(builder: &HtmlBuilder, root: NodeId, child: NodeId) {
        let dom = builder.dom();
        assert_eq!(dom.parent(child), Some(root));
        assert!(dom[child].has_marker(Marker::FormatTrue(Format::Bold)));
        assert!(dom[child].has_marker(Marker::FormatFalse(Format::Italic)));
        assert_eq!(dom[child].property("color"), Some("#55ff55"));
        assert_eq!(dom.text_content(root), "Hello");
    }

    #[test]
    fn test_profiles_share_node_semantics() {
        let mut renderer = HtmlRenderer::default();
        let (root, child) = build_styled_tree(&mut renderer);
        assert_styled_tree(renderer.builder(), root, child);

        let mut preview = EditorPreview::default();
        let (root, child) = build_styled_tree(&mut preview);
        assert_styled_tree(preview.builder(), root, child);
    }

    #[test]
    fn test_feature_names() {
        assert_eq!(ConstructorFeature::ClickCopyToClipboard.to_string(), "click-copy-to-clipboard");
        let mut names: Vec<_> = ConstructorFeature::ALL.iter().map(|f| f.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), ConstructorFeature::ALL.len());
    }

    #[test]
    fn test_slot_context_uses_embedding() {
        let renderer = HtmlRenderer::default();
        assert_eq!(renderer.slot_context(SlotType::Chat).separator, None);
        assert_eq!(
            EditorPreview::default().slot_context(SlotType::ItemLore),
            SlotContext::baseline(SlotType::ItemLore)
        );
    }
}
