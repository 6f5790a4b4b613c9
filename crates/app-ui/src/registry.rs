//! Typed component registry
//!
//! Maps spec type tags to render implementations. Registration pairs a props
//! type with a style factory; at render time the registry validates the
//! node's resolved props by deserializing into that type, pulls the memoized
//! sheet for the active theme, and calls the implementation. Validation
//! failure and unknown tags both degrade to an omitted node with a dev
//! diagnostic, never a hard failure.

use serde::de::DeserializeOwned;
use serde_json::Value;
use spec_engine::{ComponentResolver, RenderContext, RenderNode};
use std::collections::HashMap;

use crate::styles::{StyleCache, StyleFactory, StyleSheet};
use crate::theme::{Theme, ThemeState};

type RenderFn =
    Box<dyn Fn(RenderContext<'_>, &Theme, &StyleSheet) -> Option<RenderNode> + Send + Sync>;

struct Entry {
    styles: StyleCache,
    render: RenderFn,
}

/// Component registry keyed by spec type tag
///
/// Immutable once handed to a screen host; all registration happens up
/// front in [`crate::components::standard_registry`].
pub struct Registry {
    theme: ThemeState,
    entries: HashMap<String, Entry>,
}

impl Registry {
    /// Create an empty registry rendering against the given theme handle
    pub fn new(theme: ThemeState) -> Self {
        Self {
            theme,
            entries: HashMap::new(),
        }
    }

    /// The theme handle this registry renders against
    pub fn theme(&self) -> &ThemeState {
        &self.theme
    }

    /// Register a component under a type tag.
    ///
    /// `P` is the props schema: resolved props must deserialize into it or
    /// the node is omitted. The style factory runs once per theme change.
    pub fn register<P, F>(&mut self, name: impl Into<String>, styles: StyleFactory, render: F)
    where
        P: DeserializeOwned,
        F: Fn(P, RenderContext<'_>, &Theme, &StyleSheet) -> RenderNode + Send + Sync + 'static,
    {
        let render_fn: RenderFn = Box::new(move |ctx, theme, sheet| {
            let props = match serde_json::from_value::<P>(Value::Object(ctx.props.clone())) {
                Ok(props) => props,
                Err(error) => {
                    if cfg!(debug_assertions) {
                        tracing::warn!(key = ctx.key, %error, "invalid props, node omitted");
                    }
                    return None;
                }
            };
            Some(render(props, ctx, theme, sheet))
        });
        self.entries.insert(
            name.into(),
            Entry {
                styles: StyleCache::new(styles),
                render: render_fn,
            },
        );
    }

    /// Whether a type tag is registered
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Number of registered components
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ComponentResolver for Registry {
    fn render_component(&self, type_tag: &str, ctx: RenderContext<'_>) -> Option<RenderNode> {
        let Some(entry) = self.entries.get(type_tag) else {
            if cfg!(debug_assertions) {
                tracing::warn!(type_tag, key = ctx.key, "unknown component tag, node omitted");
            }
            return None;
        };
        let theme = self.theme.current();
        let sheet = entry.styles.get(&theme);
        (entry.render)(ctx, &theme, &sheet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::styles::StyleSheet;
    use serde::Deserialize;
    use serde_json::{json, Map};
    use spec_core::UiElement;
    use spec_engine::StateStore;

    #[derive(Deserialize)]
    struct LabelProps {
        label: String,
    }

    fn label_registry() -> Registry {
        let mut registry = Registry::new(ThemeState::default());
        registry.register::<LabelProps, _>(
            "Label",
            |theme| StyleSheet::new().with("text", json!({ "color": theme.colors.text })),
            |props: LabelProps, _ctx, _theme, sheet| {
                RenderNode::new("text").text(props.label).style(sheet.get("text"))
            },
        );
        registry
    }

    fn ctx<'a>(
        element: &'a UiElement,
        store: &'a StateStore,
        props: Map<String, serde_json::Value>,
    ) -> RenderContext<'a> {
        RenderContext {
            key: "node",
            element,
            props,
            children: Vec::new(),
            emit: None,
            store,
        }
    }

    #[test]
    fn test_render_with_valid_props() {
        let registry = label_registry();
        let element = UiElement::new("Label");
        let store = StateStore::new(Map::new());
        let props = match json!({ "label": "hi" }) {
            serde_json::Value::Object(map) => map,
            _ => unreachable!(),
        };
        let node = registry
            .render_component("Label", ctx(&element, &store, props))
            .unwrap();
        assert_eq!(node.text.as_deref(), Some("hi"));
        assert_eq!(node.style["color"], json!("#333333"));
    }

    #[test]
    fn test_invalid_props_omit_node() {
        let registry = label_registry();
        let element = UiElement::new("Label");
        let store = StateStore::new(Map::new());
        // label is required and null does not deserialize into String
        let props = match json!({ "label": null }) {
            serde_json::Value::Object(map) => map,
            _ => unreachable!(),
        };
        assert!(registry
            .render_component("Label", ctx(&element, &store, props))
            .is_none());
    }

    #[test]
    fn test_unknown_tag_omits_node() {
        let registry = label_registry();
        let element = UiElement::new("Mystery");
        let store = StateStore::new(Map::new());
        assert!(registry
            .render_component("Mystery", ctx(&element, &store, Map::new()))
            .is_none());
    }

    #[test]
    fn test_theme_switch_restyles() {
        let registry = label_registry();
        let element = UiElement::new("Label");
        let store = StateStore::new(Map::new());
        let props = match json!({ "label": "hi" }) {
            serde_json::Value::Object(map) => map,
            _ => unreachable!(),
        };

        registry.theme().set_dark(true);
        let node = registry
            .render_component("Label", ctx(&element, &store, props))
            .unwrap();
        assert_eq!(node.style["color"], json!("#e0e0e0"));
    }
}
