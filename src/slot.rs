//! Slot kinds and their default styles
//!
//! A slot is the place a component ends up in (a chat line, an item name, ...).
//! Each slot has a default style that tooltip content extends, and a line
//! separator the interpreter uses when joining multiple roots.

use crate::color::PackedColor;
use crate::style::{Format, StyleBundle, TriState};

/// Fixed set of rendering contexts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotType {
    Chat,
    ItemName,
    ItemLore,
    EntityName,
}

impl SlotType {
    pub const ALL: [SlotType; 4] = [Self::Chat, Self::ItemName, Self::ItemLore, Self::EntityName];
}

/// Separator and default style of a slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotContext {
    /// Character joining multiple lines into one component, `None` to keep
    /// every line a separate root
    pub separator: Option<char>,
    pub default_style: StyleBundle,
}

impl SlotContext {
    pub const fn new(separator: Option<char>, default_style: StyleBundle) -> Self {
        Self {
            separator,
            default_style,
        }
    }

    /// Platform baseline context of a slot
    pub const fn baseline(slot: SlotType) -> Self {
        match slot {
            SlotType::Chat => Self::new(Some('\n'), StyleBundle::EMPTY),
            SlotType::ItemName => Self::new(
                None,
                StyleBundle::EMPTY
                    .with_color(PackedColor::WHITE)
                    .with_format(Format::Italic, TriState::True),
            ),
            SlotType::ItemLore => Self::new(
                None,
                StyleBundle::EMPTY
                    .with_color(PackedColor::DARK_PURPLE)
                    .with_format(Format::Italic, TriState::True),
            ),
            SlotType::EntityName => {
                Self::new(None, StyleBundle::EMPTY.with_color(PackedColor::WHITE))
            }
        }
    }

    /// Context used by the HTML embedding
    ///
    /// Chat keeps its baseline style but drops the separator: every root line
    /// is emitted as its own element.
    pub const fn embedded(slot: SlotType) -> Self {
        let baseline = Self::baseline(slot);
        match slot {
            SlotType::Chat => Self::new(None, baseline.default_style),
            _ => baseline,
        }
    }
}
