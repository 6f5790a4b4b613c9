//! Element descriptors
//!
//! The atomic unit of a spec document. An element names the registry entry
//! that renders it, carries an opaque props bag (validated only by that
//! entry's schema, after expression resolution), and references its children
//! by sibling key rather than by nesting. The key indirection is what lets
//! independently authored fragments merge without deep-copying trees.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::value::{Predicate, PropValue};

/// A single element descriptor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiElement {
    /// Registry type tag identifying the render implementation
    #[serde(rename = "type")]
    pub element_type: String,

    /// Opaque props bag; primitive values or deferred expressions
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub props: BTreeMap<String, PropValue>,

    /// Ordered keys of child elements in the same document
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<String>,

    /// Event bindings, e.g. `press` → action invocation
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub on: BTreeMap<String, ActionBinding>,

    /// Instantiate this element's children once per item of a bound sequence
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repeat: Option<RepeatBinding>,

    /// Predicate gating whether the node appears in the resolved tree
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible: Option<Predicate>,
}

impl UiElement {
    /// Create an element with the given type tag and no props
    pub fn new(element_type: impl Into<String>) -> Self {
        Self {
            element_type: element_type.into(),
            props: BTreeMap::new(),
            children: Vec::new(),
            on: BTreeMap::new(),
            repeat: None,
            visible: None,
        }
    }

    /// Set a prop
    pub fn prop(mut self, name: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.props.insert(name.into(), value.into());
        self
    }

    /// Append a child key
    pub fn child(mut self, key: impl Into<String>) -> Self {
        self.children.push(key.into());
        self
    }

    /// Append several child keys in order
    pub fn children<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.children.extend(keys.into_iter().map(Into::into));
        self
    }

    /// Bind an event to an action invocation
    pub fn on(mut self, event: impl Into<String>, binding: ActionBinding) -> Self {
        self.on.insert(event.into(), binding);
        self
    }

    /// Repeat this element's children per item of the sequence at `path`
    pub fn repeat(mut self, path: impl Into<String>) -> Self {
        self.repeat = Some(RepeatBinding { path: path.into() });
        self
    }

    /// Gate visibility on a predicate
    pub fn visible(mut self, predicate: Predicate) -> Self {
        self.visible = Some(predicate);
        self
    }
}

/// An action invocation attached to an element event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionBinding {
    /// Name resolved against the action-handler table at dispatch time
    pub action: String,

    /// Invocation params; values may be deferred expressions
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub params: BTreeMap<String, PropValue>,
}

impl ActionBinding {
    /// Create a binding with no params
    pub fn new(action: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            params: BTreeMap::new(),
        }
    }

    /// Add a param
    pub fn param(mut self, name: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }
}

/// Declares an element's children as a template over a state-bound sequence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepeatBinding {
    /// State path of the sequence to instantiate over
    pub path: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{Operand, Predicate};
    use serde_json::json;

    #[test]
    fn test_element_builder() {
        let element = UiElement::new("Button")
            .prop("label", "save")
            .prop("size", "lg")
            .on("press", ActionBinding::new("login").param("email", PropValue::path("/email")));

        assert_eq!(element.element_type, "Button");
        assert_eq!(element.props.len(), 2);
        let binding = &element.on["press"];
        assert_eq!(binding.action, "login");
        assert_eq!(binding.params["email"], PropValue::path("/email"));
    }

    #[test]
    fn test_element_serialization_shape() {
        let element = UiElement::new("Heading")
            .prop("text", PropValue::path("/name"))
            .visible(Predicate::Neq(Operand::path("/name"), Operand::lit("")));

        let wire = serde_json::to_value(&element).unwrap();
        assert_eq!(
            wire,
            json!({
                "type": "Heading",
                "props": { "text": { "$path": "/name" } },
                "visible": { "neq": [{ "path": "/name" }, ""] },
            })
        );
    }

    #[test]
    fn test_element_deserialization_defaults() {
        let element: UiElement =
            serde_json::from_value(json!({ "type": "Divider" })).unwrap();
        assert!(element.props.is_empty());
        assert!(element.children.is_empty());
        assert!(element.on.is_empty());
        assert!(element.repeat.is_none());
        assert!(element.visible.is_none());
    }

    #[test]
    fn test_repeat_binding() {
        let element: UiElement = serde_json::from_value(json!({
            "type": "Column",
            "children": ["todoItem"],
            "repeat": { "path": "/todos" },
        }))
        .unwrap();
        assert_eq!(element.repeat.unwrap().path, "/todos");
    }
}
