//! Full renderer profile.

use crate::builder::{HoverEntity, HoverItem, HtmlBuilder};
use crate::error::ComponentResult;
use crate::id::NodeId;
use crate::lookup::HostLookups;
use crate::node::Dom;
use crate::output::ComponentOutput;

use super::{ComponentConstructor, ConstructorFeature};

/// Renders everything it can and silently drops the rest
///
/// Click actions, insertion and fonts have no browser equivalent and are
/// accepted as no-ops. Hover variants become real tooltip content.
#[derive(Debug, Default)]
pub struct HtmlRenderer {
    builder: HtmlBuilder,
}

impl HtmlRenderer {
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

impl ComponentConstructor for HtmlRenderer {
    const PROFILE: &'static str = "renderer";

    delegate_to_builder!(builder);

    fn does_support(&self, _feature: ConstructorFeature) -> bool {
        true
    }

    fn set_font(&mut self, component: NodeId, font: Option<&str>) -> ComponentResult<()> {
        tracing::trace!(%component, ?font, "fonts are not rendered");
        Ok(())
    }

    accept_actions!(
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

    fn set_hover_item_action(&mut self, component: NodeId, item: HoverItem) -> ComponentResult<()> {
        self.builder.set_hover_item(component, item);
        Ok(())
    }

    fn set_hover_entity_action(&mut self, component: NodeId, entity: HoverEntity) -> ComponentResult<()> {
        self.builder.set_hover_entity(component, entity);
        Ok(())
    }
}
