//! Constructor boilerplate macros
//!
//! Both deployment profiles share most of the capability contract and only
//! differ in how they treat actions. These macros generate the shared and the
//! per-profile method sets. All macros use `paste` or `$crate` paths so they
//! expand the same way in every module.

// =============================================================================
// Trait-side generation
// =============================================================================

/// Generate `set_xxx_format` shorthands as default trait methods
///
/// # Generated methods per format:
/// - `set_<format>_format(&mut self, component, value)` - overriding set
macro_rules! impl_format_setters {
    ($($variant:ident),* $(,)?) => {
        ::paste::paste! {
            $(
                #[doc = "Set the " $variant:lower " format, overriding any previous value"]
                fn [<set_ $variant:lower _format>](
                    &mut self,
                    component: $crate::id::NodeId,
                    value: $crate::style::TriState,
                ) {
                    self.set_format(component, value, $crate::style::Format::$variant);
                }
            )*
        }
    };
}

// =============================================================================
// Profile-side generation
// =============================================================================

/// Generate the node, style and structure methods by delegating to an
/// [`HtmlBuilder`](crate::builder::HtmlBuilder) field
macro_rules! delegate_to_builder {
    ($field:ident) => {
        fn slot_context(&self, slot: $crate::slot::SlotType) -> $crate::slot::SlotContext {
            $crate::slot::SlotContext::embedded(slot)
        }

        fn create_text_component(&mut self, text: &str) -> $crate::id::NodeId {
            self.$field.create_text(text)
        }

        fn set_text(&mut self, component: $crate::id::NodeId, text: &str) -> bool {
            self.$field.set_text(component, text)
        }

        fn create_key_component(&mut self, key: &str) -> $crate::id::NodeId {
            self.$field.create_key(key)
        }

        fn create_translate_component(
            &mut self,
            key: &str,
            with: &[$crate::id::NodeId],
            fallback: Option<&str>,
        ) -> $crate::id::NodeId {
            self.$field.create_translate(key, with, fallback)
        }

        fn set_color(
            &mut self,
            component: $crate::id::NodeId,
            color: $crate::color::PackedColor,
            override_: bool,
        ) {
            self.$field.set_color(component, color, override_);
        }

        fn set_shadow_color(&mut self, component: $crate::id::NodeId, color: $crate::color::PackedColor) {
            self.$field.set_shadow_color(component, color);
        }

        fn set_format(
            &mut self,
            component: $crate::id::NodeId,
            value: $crate::style::TriState,
            format: $crate::style::Format,
        ) {
            self.$field.set_format(component, value, format, true);
        }

        fn set_format_named(
            &mut self,
            component: $crate::id::NodeId,
            value: $crate::style::TriState,
            name: &str,
        ) {
            self.$field.set_format_named(component, value, name, true);
        }

        fn set_children(&mut self, component: $crate::id::NodeId, children: Option<&[$crate::id::NodeId]>) {
            self.$field.set_children(component, children);
        }
    };
}

/// Generate string-valued action setters that are accepted and ignored
///
/// # Example
/// ```ignore
/// accept_actions!(set_click_open_url_action => ClickOpenUrl);
/// ```
macro_rules! accept_actions {
    ($($method:ident => $feature:ident),* $(,)?) => {
        $(
            fn $method(
                &mut self,
                component: $crate::id::NodeId,
                value: &str,
            ) -> $crate::error::ComponentResult<()> {
                tracing::trace!(
                    %component,
                    value,
                    feature = %$crate::constructor::ConstructorFeature::$feature,
                    "action not representable, ignored"
                );
                Ok(())
            }
        )*
    };
}

/// Generate string-valued action setters that fail as unsupported
macro_rules! reject_actions {
    ($($method:ident => $feature:ident),* $(,)?) => {
        $(
            fn $method(
                &mut self,
                _component: $crate::id::NodeId,
                _value: &str,
            ) -> $crate::error::ComponentResult<()> {
                Err($crate::error::ComponentError::unsupported(
                    $crate::constructor::ConstructorFeature::$feature,
                    Self::PROFILE,
                ))
            }
        )*
    };
}
