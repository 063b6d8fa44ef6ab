//! Visible and hover content partitions of a node.
//!
//! Both partitions live in the node's single child list. The hover partition
//! is one `div` carrying [`Marker::HoverText`]; everything else is visible
//! content. Each setter only touches its own partition.

use uuid::Uuid;

use crate::id::NodeId;
use crate::marker::Marker;
use crate::node::{Child, Dom, Tag};
use crate::slot::SlotType;

use super::HtmlBuilder;

const DEFAULT_MATERIAL: &str = "stone";
const NAMESPACE_PREFIX: &str = "minecraft:";

/// Tooltip of an item
#[derive(Debug, Clone, Default)]
pub struct HoverItem {
    /// Material id, `stone` when absent; a `minecraft:` namespace is dropped
    pub material: Option<String>,
    /// Stack size, not displayed
    pub count: Option<u32>,
    /// Explicit name; the material's translation is used when absent
    pub name: Option<NodeId>,
    pub lore: Option<Vec<NodeId>>,
    /// Not displayed
    pub hide_properties: bool,
}

/// Tooltip of an entity
#[derive(Debug, Clone)]
pub struct HoverEntity {
    /// Entity type id, a `minecraft:` namespace is dropped
    pub entity_type: String,
    pub id: Uuid,
    pub name: Option<NodeId>,
}

fn is_hover_container(dom: &Dom, child: &Child) -> bool {
    child
        .as_element()
        .is_some_and(|id| dom[id].is_hover_container())
}

fn strip_namespace(id: &str) -> String {
    id.strip_prefix(NAMESPACE_PREFIX).unwrap_or(id).to_lowercase()
}

impl HtmlBuilder {
    /// Replace the visible child components of `node`.
    ///
    /// Only element children other than the hover container are removed.
    /// The hover container and raw text (such as the padding of an empty
    /// hover line) stay where they are; `None` appends nothing.
    pub fn set_children(&mut self, node: NodeId, children: Option<&[NodeId]>) {
        self.dom
            .retain_children(node, |dom, child| child.is_text() || is_hover_container(dom, child));

        for &child in children.unwrap_or_default() {
            self.dom.append_child(node, child);
        }
    }

    /// Replace the hover content of `node`.
    ///
    /// Each line is tagged as a rendered line and gets a single space when it
    /// has no content, so it still occupies a line box. `None` removes the
    /// hover container altogether.
    pub fn set_hover_text(&mut self, node: NodeId, lines: Option<&[NodeId]>) {
        self.dom
            .retain_children(node, |dom, child| !is_hover_container(dom, child));

        let Some(lines) = lines else {
            return;
        };

        let container = self.dom.create(Tag::Div);
        self.dom[container].markers.insert(Marker::HoverText);

        for &line in lines {
            self.dom[line].markers.insert(Marker::Line);
            if self.dom[line].is_empty() {
                self.dom.append_text(line, " ");
            }
            self.dom.append_child(container, line);
        }

        self.dom.append_child(node, container);
    }

    /// Hover content of `node`, if any
    pub fn hover_container(&self, node: NodeId) -> Option<NodeId> {
        self.dom[node]
            .child_elements()
            .find(|id| self.dom[*id].is_hover_container())
    }

    /// Show an item tooltip: name line followed by lore lines
    pub fn set_hover_item(&mut self, node: NodeId, item: HoverItem) {
        let name = match item.name {
            Some(name) => {
                self.extend_default_styles(name, SlotType::ItemName);
                name
            }
            None => {
                let material = item.material.as_deref().unwrap_or(DEFAULT_MATERIAL);
                let key = format!("block.minecraft.{}", strip_namespace(material));
                self.create_translate(&key, &[], None)
            }
        };

        let mut lines = vec![name];
        for line in item.lore.unwrap_or_default() {
            self.extend_default_styles(line, SlotType::ItemLore);
            lines.push(line);
        }

        self.set_hover_text(node, Some(&lines));
    }

    /// Show an entity tooltip: optional name, type line and id line
    pub fn set_hover_entity(&mut self, node: NodeId, entity: HoverEntity) {
        let mut lines = Vec::with_capacity(3);

        if let Some(name) = entity.name {
            self.extend_default_styles(name, SlotType::EntityName);
            lines.push(name);
        }

        let type_key = format!("entity.minecraft.{}", strip_namespace(&entity.entity_type));
        let type_name = self.create_translate(&type_key, &[], None);
        lines.push(self.create_translate("gui.entity_tooltip.type", &[type_name], None));
        lines.push(self.create_text(&entity.id.to_string()));

        self.set_hover_text(node, Some(&lines));
    }
}

#[cfg(test)]
mod tests {
    use crate::attr::COLOR_PROPERTY;
    use crate::lookup::{HostLookups, LookupTable, NoLookup};
    use crate::style::{Format, TriState};

    use super::*;

    fn visible(b: &HtmlBuilder, node: NodeId) -> Vec<NodeId> {
        b.dom()[node]
            .child_elements()
            .filter(|id| !b.dom()[*id].is_hover_container())
            .collect()
    }

    fn hover_lines(b: &HtmlBuilder, node: NodeId) -> Vec<String> {
        let container = b.hover_container(node).expect("hover container");
        b.dom()[container]
            .child_elements()
            .map(|line| b.dom().text_content(line))
            .collect()
    }

    #[test]
    fn test_set_children_replaces_visible_content() {
        let mut b = HtmlBuilder::default();
        let node = b.create_text("");
        let a = b.create_text("a");
        let c = b.create_text("c");
        let d = b.create_text("d");

        b.set_children(node, Some(&[a, c]));
        assert_eq!(visible(&b, node), vec![a, c]);

        b.set_children(node, Some(&[d]));
        assert_eq!(visible(&b, node), vec![d]);
        assert_eq!(b.dom().parent(a), None);

        b.set_children(node, None);
        assert!(b.dom()[node].is_empty());
    }

    #[test]
    fn test_set_children_keeps_hover_content() {
        let mut b = HtmlBuilder::default();
        let node = b.create_text("label");
        let tip = b.create_text("tip");
        b.set_hover_text(node, Some(&[tip]));
        let container = b.hover_container(node).unwrap();

        let a = b.create_text("a");
        let c = b.create_text("c");
        b.set_children(node, Some(&[a]));
        b.set_children(node, Some(&[c]));

        assert_eq!(visible(&b, node), vec![c]);
        assert_eq!(b.hover_container(node), Some(container));
        assert_eq!(hover_lines(&b, node), vec!["tip"]);
        assert_eq!(b.dom()[node].children[0], Child::Element(container));
    }

    #[test]
    fn test_set_hover_text_replaces_and_removes() {
        let mut b = HtmlBuilder::default();
        let node = b.create_text("label");
        let first = b.create_text("first");
        b.set_hover_text(node, Some(&[first]));
        let old = b.hover_container(node).unwrap();

        let second = b.create_text("second");
        b.set_hover_text(node, Some(&[second]));
        assert_ne!(b.hover_container(node), Some(old));
        assert_eq!(hover_lines(&b, node), vec!["second"]);
        assert_eq!(b.dom().text_content(node), "labelsecond");

        b.set_hover_text(node, None);
        assert_eq!(b.hover_container(node), None);
        assert_eq!(b.dom().text_content(node), "label");
    }

    #[test]
    fn test_empty_hover_list_then_none() {
        let mut b = HtmlBuilder::default();
        let node = b.create_text("label");
        b.set_hover_text(node, Some(&[]));
        let container = b.hover_container(node).unwrap();
        assert!(b.dom()[container].is_empty());

        b.set_hover_text(node, None);
        assert_eq!(b.hover_container(node), None);
    }

    #[test]
    fn test_hover_lines_are_marked_and_padded() {
        let mut b = HtmlBuilder::default();
        let node = b.create_text("label");
        let empty = b.create_text("");
        let full = b.create_text("text");
        b.set_hover_text(node, Some(&[empty, full]));

        assert!(b.dom()[empty].has_marker(Marker::Line));
        assert!(b.dom()[full].has_marker(Marker::Line));
        assert_eq!(b.dom().children(empty), &[Child::Text(" ".into())]);
        assert_eq!(hover_lines(&b, node), vec![" ", "text"]);
    }

    #[test]
    fn test_set_children_keeps_line_padding() {
        let mut b = HtmlBuilder::default();
        let node = b.create_text("label");
        let empty = b.create_text("");
        b.set_hover_text(node, Some(&[empty]));

        b.set_children(empty, None);
        assert_eq!(b.dom().text_content(empty), " ");

        let extra = b.create_text("x");
        b.set_children(empty, Some(&[extra]));
        b.set_children(empty, Some(&[]));
        assert_eq!(b.dom().children(empty), &[Child::Text(" ".into())]);
        assert_eq!(b.dom().parent(extra), None);
    }

    #[test]
    fn test_hover_item_with_translated_material() {
        let translations = LookupTable::new().with("block.minecraft.diamond_block", "Block of Diamond");
        let mut b = HtmlBuilder::new(HostLookups::new(NoLookup, translations));
        let node = b.create_text("hover me");
        let lore = b.create_text("Shiny");

        b.set_hover_item(
            node,
            HoverItem {
                material: Some("minecraft:DIAMOND_BLOCK".to_string()),
                count: Some(3),
                lore: Some(vec![lore]),
                ..Default::default()
            },
        );

        assert_eq!(hover_lines(&b, node), vec!["Block of Diamond", "Shiny"]);
        assert_eq!(b.dom()[lore].property(COLOR_PROPERTY), Some("#aa00aa"));
        assert_eq!(b.dom()[lore].markers.format(Format::Italic), TriState::True);
    }

    #[test]
    fn test_hover_item_defaults_to_stone_and_styles_explicit_name() {
        let mut b = HtmlBuilder::default();
        let node = b.create_text("hover me");
        b.set_hover_item(node, HoverItem::default());
        assert_eq!(hover_lines(&b, node), vec!["block.minecraft.stone"]);

        let name = b.create_text("Excalibur");
        b.set_hover_item(
            node,
            HoverItem {
                name: Some(name),
                ..Default::default()
            },
        );
        assert_eq!(hover_lines(&b, node), vec!["Excalibur"]);
        assert_eq!(b.dom()[name].markers.format(Format::Italic), TriState::True);
        assert_eq!(b.dom()[name].property(COLOR_PROPERTY), Some("#ffffff"));
    }

    #[test]
    fn test_hover_entity() {
        let translations = LookupTable::new()
            .with("gui.entity_tooltip.type", "Type: %s")
            .with("entity.minecraft.creeper", "Creeper");
        let mut b = HtmlBuilder::new(HostLookups::new(NoLookup, translations));
        let node = b.create_text("hover me");
        let name = b.create_text("Bob");
        let id = Uuid::from_u128(0x1234_5678_9abc_def0_1234_5678_9abc_def0);

        b.set_hover_entity(
            node,
            HoverEntity {
                entity_type: "minecraft:creeper".to_string(),
                id,
                name: Some(name),
            },
        );

        assert_eq!(
            hover_lines(&b, node),
            vec![
                "Bob".to_string(),
                "Type: Creeper".to_string(),
                "12345678-9abc-def0-1234-56789abcdef0".to_string(),
            ]
        );
        assert_eq!(b.dom()[name].property(COLOR_PROPERTY), Some("#ffffff"));
    }

    #[test]
    fn test_hover_entity_without_name() {
        let mut b = HtmlBuilder::default();
        let node = b.create_text("hover me");
        b.set_hover_entity(
            node,
            HoverEntity {
                entity_type: "Pig".to_string(),
                id: Uuid::nil(),
                name: None,
            },
        );
        assert_eq!(
            hover_lines(&b, node),
            vec![
                "gui.entity_tooltip.type".to_string(),
                "00000000-0000-0000-0000-000000000000".to_string(),
            ]
        );
    }
}
