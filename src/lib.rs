//! component-vdom - Chat component trees realized as an HTML virtual DOM
//!
//! ## Core Concepts
//!
//! **One handle per visual node**: every component is a [`NodeId`] into a
//! [`Dom`] arena, backed by exactly one container element. Visible children
//! and hover lines share that element's child list and are told apart by
//! marker classes, not by node types.
//!
//! **Two deployment profiles**: [`HtmlRenderer`] and [`EditorPreview`] both
//! implement [`ComponentConstructor`] and only differ in how they treat
//! features a browser cannot represent.
//!
//! ## Modules
//! - `node`: `Dom` arena, `Element`, `Child`
//! - `builder`: node creation, style application, translation, partitions
//! - `constructor`: the capability contract and its two profiles
//! - `render` / `output`: HTML rendering of finished trees
//! - `platform`: host text utilities for the interpreter
//!
//! ## Usage
//!
//! ```ignore
//! use component_vdom::prelude::*;
//!
//! let translations = LookupTable::new().with("chat.type.text", "<%s> %s");
//! let mut ctor = HtmlRenderer::new(HostLookups::new(NoLookup, translations));
//!
//! let name = ctor.create_text_component("Steve");
//! ctor.set_color(name, PackedColor::rgb(0x55, 0xFF, 0xFF), true);
//! let message = ctor.create_text_component("hi");
//! let line = ctor.create_translate_component("chat.type.text", &[name, message], None);
//!
//! let html = ctor.finish(&[line]).render_html(&RenderConfig::PROD);
//! ```

#[macro_use]
mod macros;

// =============================================================================
// Core modules
// =============================================================================

/// Node handles
pub mod id;

/// Inline style declarations
pub mod attr;

/// Marker-class vocabulary
pub mod marker;

/// Packed RGBA colors
pub mod color;

/// Tri-state formats and style bundles
pub mod style;

/// Slot kinds and their default styles
pub mod slot;

/// Element arena: Dom, Element, Child
pub mod node;

/// Keybinding and translation lookups resolved by the host
pub mod lookup;

// =============================================================================
// Realization
// =============================================================================

/// Node creation, styling, translation and partitions
pub mod builder;

/// Capability contract and deployment profiles
pub mod constructor;

/// Finished component trees
pub mod output;

/// HTML rendering
pub mod render;

/// Host text utilities
#[cfg(feature = "platform")]
pub mod platform;

/// Error types
pub mod error;

/// Prelude for common imports
pub mod prelude;

// =============================================================================
// Re-exports
// =============================================================================

pub use builder::HtmlBuilder;
pub use constructor::{ComponentConstructor, ConstructorFeature, EditorPreview, HtmlRenderer};
pub use error::{ComponentError, ComponentResult};
pub use id::NodeId;
pub use node::Dom;
pub use output::ComponentOutput;
