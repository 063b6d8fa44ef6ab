//! Prelude module for common imports.
//!
//! ```ignore
//! use component_vdom::prelude::*;
//! ```

// Handles and arena
pub use crate::id::NodeId;
pub use crate::node::{Child, Dom, Element, Tag};

// Style
pub use crate::color::PackedColor;
pub use crate::marker::{Marker, MarkerSet};
pub use crate::slot::{SlotContext, SlotType};
pub use crate::style::{Format, StyleBundle, TriState};

// Lookups
pub use crate::lookup::{HostLookups, KeybindResolver, LookupTable, NoLookup, TranslationResolver};

// Realization
pub use crate::builder::{HoverEntity, HoverItem, HtmlBuilder};
pub use crate::constructor::{ComponentConstructor, ConstructorFeature, EditorPreview, HtmlRenderer};

// Output and rendering
pub use crate::output::ComponentOutput;
pub use crate::render::{DEFAULT_ID_ATTR, RenderConfig, render_node};

// Error
pub use crate::error::{ComponentError, ComponentResult};

// Platform
#[cfg(feature = "platform")]
pub use crate::platform::{
    FormatWarning, FormatWarnings, HostFormatError, HostFormatter, HostPlatform,
    InterpretationPlatform,
};
