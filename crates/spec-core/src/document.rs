//! The spec document
//!
//! A complete screen: a root key, an initial-state object, and a flat mapping
//! of globally unique keys to element descriptors. Builders never check that
//! referenced children exist; [`Spec::validate`] is the opt-in structural
//! check the screen host runs at mount time.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

use crate::element::UiElement;
use crate::error::{Result, SpecError};

/// A complete spec document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spec {
    /// Key of the root element
    pub root: String,

    /// Initial screen state, exactly as the author supplied it
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub state: Map<String, Value>,

    /// All elements, keyed by globally unique string keys
    pub elements: BTreeMap<String, UiElement>,
}

impl Spec {
    /// Validate document structure.
    ///
    /// Checks, in order per element:
    /// - the root key resolves to an element,
    /// - every `children` key resolves to an element,
    /// - no key is claimed as a child by two parents,
    /// - the reachable subgraph is acyclic.
    ///
    /// Unreachable elements are tolerated; merged fragments may carry
    /// elements a screen ends up not wiring in.
    pub fn validate(&self) -> Result<()> {
        if !self.elements.contains_key(&self.root) {
            return Err(SpecError::MissingRoot(self.root.clone()));
        }

        let mut parent_of: BTreeMap<&str, &str> = BTreeMap::new();
        let mut on_stack: Vec<&str> = Vec::new();
        self.walk(&self.root, &mut parent_of, &mut on_stack)
    }

    fn walk<'a>(
        &'a self,
        key: &'a str,
        parent_of: &mut BTreeMap<&'a str, &'a str>,
        on_stack: &mut Vec<&'a str>,
    ) -> Result<()> {
        let element = match self.elements.get(key) {
            Some(element) => element,
            // Caught by the parent's child loop; unreachable from validate().
            None => return Ok(()),
        };

        on_stack.push(key);

        for child in &element.children {
            if on_stack.iter().any(|k| *k == child.as_str()) {
                on_stack.pop();
                return Err(SpecError::Cycle(child.clone()));
            }
            if let Some(first) = parent_of.get(child.as_str()) {
                on_stack.pop();
                return Err(SpecError::MultipleParents {
                    child: child.clone(),
                    first: (*first).to_string(),
                    second: key.to_string(),
                });
            }
            if !self.elements.contains_key(child) {
                on_stack.pop();
                return Err(SpecError::MissingChild {
                    parent: key.to_string(),
                    child: child.clone(),
                });
            }
            parent_of.insert(child.as_str(), key);
            self.walk(child, parent_of, on_stack)?;
        }

        on_stack.pop();
        Ok(())
    }
}

/// Coerce a `json!` literal into a state object.
///
/// Non-object values yield an empty state; authored specs always use object
/// literals, this just keeps call sites free of pattern matching.
pub fn state_object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}
