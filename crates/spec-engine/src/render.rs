//! Render driver and abstract output tree
//!
//! The driver walks a document from its root, applies visibility gating and
//! repeat instantiation, resolves each element's props against the current
//! state, and hands the node to a [`ComponentResolver`]. The resolver (the
//! component registry downstream) returns a [`RenderNode`] — a serializable
//! description of what to paint — or `None` to omit the node. Omission is
//! how authoring mistakes degrade: one bad node never blanks a screen.

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use spec_core::document::Spec;
use spec_core::element::UiElement;
use spec_core::value::PropValue;
use std::sync::Arc;

use crate::resolve::{eval_predicate, resolve_props, resolve_value, Scope};
use crate::store::StateStore;

// =============================================================================
// Output Tree
// =============================================================================

/// A rendered node: the abstract output handed to the platform frontend
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RenderNode {
    /// Key of the element this node was rendered from
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub key: String,

    /// Primitive kind ("view", "text", "text-input", "switch", ...)
    pub kind: String,

    /// Resolved display attributes
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub attrs: Map<String, Value>,

    /// Text content for text-bearing kinds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Computed style values
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub style: Map<String, Value>,

    /// Rendered children, in order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<RenderNode>,

    /// Events this node responds to
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub events: Vec<EventBinding>,
}

impl RenderNode {
    /// Create a node of the given kind
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            ..Self::default()
        }
    }

    /// Set an attribute
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    /// Set an attribute when present
    pub fn maybe_attr(self, name: impl Into<String>, value: Option<impl Into<Value>>) -> Self {
        match value {
            Some(value) => self.attr(name, value),
            None => self,
        }
    }

    /// Set the text content
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Merge style values in (later writes win)
    pub fn style(mut self, style: Map<String, Value>) -> Self {
        self.style.extend(style);
        self
    }

    /// Set a single style value
    pub fn style_attr(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.style.insert(name.into(), value.into());
        self
    }

    /// Append a child node
    pub fn child(mut self, node: RenderNode) -> Self {
        self.children.push(node);
        self
    }

    /// Append child nodes in order
    pub fn children(mut self, nodes: Vec<RenderNode>) -> Self {
        self.children.extend(nodes);
        self
    }

    /// Attach an event binding
    pub fn event(mut self, binding: EventBinding) -> Self {
        self.events.push(binding);
        self
    }

    /// Depth-first search for the node rendered from `key`
    pub fn find(&self, key: &str) -> Option<&RenderNode> {
        if self.key == key {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(key))
    }

    /// All nodes of a kind, depth-first
    pub fn find_kind<'a>(&'a self, kind: &str, out: &mut Vec<&'a RenderNode>) {
        if self.kind == kind {
            out.push(self);
        }
        for child in &self.children {
            child.find_kind(kind, out);
        }
    }
}

// =============================================================================
// Events
// =============================================================================

/// A user-originated event routed back to an element's `on` binding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventBinding {
    /// Key of the element that owns the binding
    pub element: String,
    /// Event name, e.g. `press`
    pub event: String,
    /// Repeat-instance index, when the element was rendered inside a repeat
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,
}

/// Shared queue of emitted events awaiting dispatch
#[derive(Clone, Default)]
pub struct EventSink {
    inner: Arc<Mutex<Vec<EventBinding>>>,
}

impl EventSink {
    /// Create an empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an event
    pub fn push(&self, binding: EventBinding) {
        self.inner.lock().push(binding);
    }

    /// Take all queued events
    pub fn drain(&self) -> Vec<EventBinding> {
        std::mem::take(&mut *self.inner.lock())
    }
}

/// Per-node event emitter, present only when the element has `on` bindings.
///
/// Components hold this as an `Option`, so "guard before emitting" is a
/// compile-time property rather than a runtime crash risk.
#[derive(Clone)]
pub struct Emitter {
    element: String,
    index: Option<usize>,
    sink: EventSink,
}

impl Emitter {
    /// The binding a node should carry for an event it responds to
    pub fn binding(&self, event: impl Into<String>) -> EventBinding {
        EventBinding {
            element: self.element.clone(),
            event: event.into(),
            index: self.index,
        }
    }

    /// Request dispatch of an event
    pub fn emit(&self, event: impl Into<String>) {
        self.sink.push(self.binding(event));
    }
}

// =============================================================================
// Driver
// =============================================================================

/// Everything a render implementation receives for one node
pub struct RenderContext<'a> {
    /// The element's document key
    pub key: &'a str,
    /// The raw element descriptor
    pub element: &'a UiElement,
    /// Props with all deferred expressions resolved
    pub props: Map<String, Value>,
    /// Already-rendered children, in order
    pub children: Vec<RenderNode>,
    /// Present only when the element has `on` bindings
    pub emit: Option<Emitter>,
    /// Live store handle, for two-way state bindings
    pub store: &'a StateStore,
}

/// The seam between the engine and the component registry
pub trait ComponentResolver {
    /// Render one node, or `None` to omit it (unknown tag, invalid props)
    fn render_component(&self, type_tag: &str, ctx: RenderContext<'_>) -> Option<RenderNode>;
}

/// One render pass over a document
pub struct Renderer<'a> {
    spec: &'a Spec,
    store: &'a StateStore,
    sink: EventSink,
}

impl<'a> Renderer<'a> {
    /// Create a renderer over a document and its store
    pub fn new(spec: &'a Spec, store: &'a StateStore) -> Self {
        Self {
            spec,
            store,
            sink: EventSink::new(),
        }
    }

    /// The sink emitters created during this pass feed into
    pub fn sink(&self) -> EventSink {
        self.sink.clone()
    }

    /// Render the document from its root against the current state
    pub fn render(&self, resolver: &dyn ComponentResolver) -> Option<RenderNode> {
        let state = self.store.snapshot();
        self.render_key(&self.spec.root, &state, None, resolver)
    }

    fn render_key(
        &self,
        key: &str,
        state: &Value,
        scope: Option<Scope<'_>>,
        resolver: &dyn ComponentResolver,
    ) -> Option<RenderNode> {
        let Some(element) = self.spec.elements.get(key) else {
            if cfg!(debug_assertions) {
                tracing::warn!(key, "skipping reference to missing element");
            }
            return None;
        };

        if let Some(predicate) = &element.visible {
            if !eval_predicate(predicate, state, scope) {
                return None;
            }
        }

        let children = match &element.repeat {
            Some(repeat) => {
                let items =
                    resolve_value(&PropValue::Path(repeat.path.clone()), state, scope);
                let items = match items {
                    Value::Array(items) => items,
                    Value::Null => Vec::new(),
                    _ => {
                        if cfg!(debug_assertions) {
                            tracing::warn!(
                                key,
                                path = %repeat.path,
                                "repeat target is not a sequence"
                            );
                        }
                        Vec::new()
                    }
                };
                let mut rendered = Vec::new();
                for (index, item) in items.iter().enumerate() {
                    let scope = Scope { item, index };
                    for child in &element.children {
                        rendered
                            .extend(self.render_key(child, state, Some(scope), resolver));
                    }
                }
                rendered
            }
            None => element
                .children
                .iter()
                .filter_map(|child| self.render_key(child, state, scope, resolver))
                .collect(),
        };

        let props = resolve_props(&element.props, state, scope);
        let emit = (!element.on.is_empty()).then(|| Emitter {
            element: key.to_string(),
            index: scope.map(|s| s.index),
            sink: self.sink.clone(),
        });

        let ctx = RenderContext {
            key,
            element,
            props,
            children,
            emit,
            store: self.store,
        };
        let mut node = resolver.render_component(&element.element_type, ctx)?;
        node.key = key.to_string();
        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use spec_core::document::state_object;
    use spec_core::element::ActionBinding;
    use spec_core::value::{Operand, Predicate};
    use std::collections::BTreeMap;

    /// Resolver that renders every element as a plain "view" carrying its
    /// resolved props as attrs, wiring "press" when the element binds it.
    struct EchoResolver;

    impl ComponentResolver for EchoResolver {
        fn render_component(&self, type_tag: &str, ctx: RenderContext<'_>) -> Option<RenderNode> {
            if type_tag == "Unknown" {
                return None;
            }
            let mut node = RenderNode::new("view").children(ctx.children);
            node.attrs = ctx.props;
            if let Some(emit) = &ctx.emit {
                node = node.event(emit.binding("press"));
            }
            Some(node)
        }
    }

    fn render(spec: &Spec, state: Value) -> Option<RenderNode> {
        let store = StateStore::new(state_object(state));
        Renderer::new(spec, &store).render(&EchoResolver)
    }

    fn spec_of(elements: Vec<(&str, UiElement)>) -> Spec {
        Spec {
            root: "root".to_string(),
            state: Default::default(),
            elements: elements
                .into_iter()
                .map(|(k, e)| (k.to_string(), e))
                .collect(),
        }
    }

    // ==========================================================================
    // Walk Tests
    // ==========================================================================

    #[test]
    fn test_children_render_in_order() {
        let spec = spec_of(vec![
            ("root", UiElement::new("Container").children(["a", "b"])),
            ("a", UiElement::new("Heading")),
            ("b", UiElement::new("Paragraph")),
        ]);
        let tree = render(&spec, json!({})).unwrap();
        assert_eq!(tree.key, "root");
        let keys: Vec<&str> = tree.children.iter().map(|c| c.key.as_str()).collect();
        assert_eq!(keys, vec!["a", "b"]);
    }

    #[test]
    fn test_missing_child_is_skipped() {
        let spec = spec_of(vec![(
            "root",
            UiElement::new("Container").children(["ghost", "a"]),
        ), ("a", UiElement::new("Heading"))]);
        let tree = render(&spec, json!({})).unwrap();
        assert_eq!(tree.children.len(), 1);
        assert_eq!(tree.children[0].key, "a");
    }

    #[test]
    fn test_unrenderable_node_omitted_but_siblings_survive() {
        let spec = spec_of(vec![
            ("root", UiElement::new("Container").children(["bad", "good"])),
            ("bad", UiElement::new("Unknown")),
            ("good", UiElement::new("Heading")),
        ]);
        let tree = render(&spec, json!({})).unwrap();
        assert_eq!(tree.children.len(), 1);
        assert_eq!(tree.children[0].key, "good");
    }

    #[test]
    fn test_props_resolved_before_render() {
        let spec = spec_of(vec![(
            "root",
            UiElement::new("Heading").prop("text", spec_core::PropValue::path("/name")),
        )]);
        let tree = render(&spec, json!({ "name": "jane" })).unwrap();
        assert_eq!(tree.attrs["text"], json!("jane"));
    }

    // ==========================================================================
    // Visibility Tests
    // ==========================================================================

    #[test]
    fn test_visible_false_prunes_subtree() {
        let spec = spec_of(vec![
            ("root", UiElement::new("Container").child("hidden")),
            (
                "hidden",
                UiElement::new("Heading")
                    .visible(Predicate::Neq(Operand::path("/name"), Operand::lit(""))),
            ),
        ]);
        let tree = render(&spec, json!({ "name": "" })).unwrap();
        assert!(tree.children.is_empty());

        let tree = render(&spec, json!({ "name": "x" })).unwrap();
        assert_eq!(tree.children.len(), 1);
    }

    // ==========================================================================
    // Repeat Tests
    // ==========================================================================

    #[test]
    fn test_repeat_instantiates_children_per_item() {
        let spec = spec_of(vec![
            (
                "root",
                UiElement::new("Column").child("item").repeat("/todos"),
            ),
            (
                "item",
                UiElement::new("ListItem")
                    .prop("title", spec_core::PropValue::path("$item/text"))
                    .on(
                        "press",
                        ActionBinding::new("removeState")
                            .param("path", "/todos")
                            .param("index", "$index"),
                    ),
            ),
        ]);
        let tree = render(
            &spec,
            json!({ "todos": [{ "text": "one" }, { "text": "two" }] }),
        )
        .unwrap();

        assert_eq!(tree.children.len(), 2);
        assert_eq!(tree.children[0].attrs["title"], json!("one"));
        assert_eq!(tree.children[1].attrs["title"], json!("two"));
        assert_eq!(tree.children[1].events[0].index, Some(1));
    }

    #[test]
    fn test_repeat_over_missing_sequence_is_empty() {
        let spec = spec_of(vec![
            ("root", UiElement::new("Column").child("item").repeat("/todos")),
            ("item", UiElement::new("ListItem")),
        ]);
        let tree = render(&spec, json!({})).unwrap();
        assert!(tree.children.is_empty());
    }

    // ==========================================================================
    // Emitter Tests
    // ==========================================================================

    #[test]
    fn test_emitter_absent_without_bindings() {
        struct Probe;
        impl ComponentResolver for Probe {
            fn render_component(&self, _: &str, ctx: RenderContext<'_>) -> Option<RenderNode> {
                assert!(ctx.emit.is_none());
                Some(RenderNode::new("view"))
            }
        }
        let spec = spec_of(vec![("root", UiElement::new("Heading"))]);
        let store = StateStore::new(Default::default());
        Renderer::new(&spec, &store).render(&Probe).unwrap();
    }

    #[test]
    fn test_emit_queues_into_sink() {
        let spec = spec_of(vec![(
            "root",
            UiElement::new("Button").on("press", ActionBinding::new("login")),
        )]);
        let store = StateStore::new(Default::default());

        struct Pressing;
        impl ComponentResolver for Pressing {
            fn render_component(&self, _: &str, ctx: RenderContext<'_>) -> Option<RenderNode> {
                if let Some(emit) = &ctx.emit {
                    emit.emit("press");
                }
                Some(RenderNode::new("view"))
            }
        }

        let renderer = Renderer::new(&spec, &store);
        renderer.render(&Pressing).unwrap();
        let drained = renderer.sink().drain();
        assert_eq!(drained.len(), 1);
        assert_eq!(drained[0].element, "root");
        assert_eq!(drained[0].event, "press");
    }
}
