//! Editor preview profile.

use crate::builder::{HoverEntity, HoverItem, HtmlBuilder};
use crate::error::{ComponentError, ComponentResult};
use crate::id::NodeId;
use crate::lookup::HostLookups;
use crate::node::Dom;
use crate::output::ComponentOutput;

use super::{ComponentConstructor, ConstructorFeature};

/// Preview used while editing markup
///
/// Only hover text is representable. Every other optional feature fails with
/// [`ComponentError::Unsupported`] so the editor can flag it.
#[derive(Debug, Default)]
pub struct EditorPreview {
    builder: HtmlBuilder,
}

impl EditorPreview {
    pub fn new(lookups: HostLookups) -> Self {
        Self {
            builder: HtmlBuilder::new(lookups),
        }
    }

    pub fn builder(&self) -> &HtmlBuilder {
        &self.builder
    }

    pub fn dom(&self) -> &Dom {
        self.builder.dom()
    }

    /// Emit `roots` as the finished output lines
    pub fn finish(self, roots: &[NodeId]) -> ComponentOutput {
        self.builder.finish(roots)
    }
}

impl ComponentConstructor for EditorPreview {
    const PROFILE: &'static str = "editor-preview";

    delegate_to_builder!(builder);

    fn does_support(&self, feature: ConstructorFeature) -> bool {
        feature == ConstructorFeature::HoverText
    }

    fn set_font(&mut self, _component: NodeId, _font: Option<&str>) -> ComponentResult<()> {
        Err(ComponentError::unsupported(ConstructorFeature::Font, Self::PROFILE))
    }

    reject_actions!(
        set_click_change_page_action => ClickChangePage,
        set_click_copy_to_clipboard_action => ClickCopyToClipboard,
        set_click_open_file_action => ClickOpenFile,
        set_click_open_url_action => ClickOpenUrl,
        set_click_run_command_action => ClickRunCommand,
        set_click_suggest_command_action => ClickSuggestCommand,
        set_insert_action => Insert,
    );

    fn set_hover_text_action(&mut self, component: NodeId, text: NodeId) -> ComponentResult<()> {
        self.builder.set_hover_text(component, Some(&[text]));
        Ok(())
    }

    fn set_hover_item_action(&mut self, _component: NodeId, _item: HoverItem) -> ComponentResult<()> {
        Err(ComponentError::unsupported(ConstructorFeature::HoverItem, Self::PROFILE))
    }

    fn set_hover_entity_action(&mut self, _component: NodeId, _entity: HoverEntity) -> ComponentResult<()> {
        Err(ComponentError::unsupported(ConstructorFeature::HoverEntity, Self::PROFILE))
    }
}
