//! Keyed element fragments
//!
//! A fragment is the unit of composition: a mapping from unique string keys
//! to element descriptors, produced by a builder and merged into a screen.
//! Merging never overwrites — a key written twice is an authoring error and
//! fails the merge rather than letting the last writer silently win.

use std::collections::BTreeMap;

use crate::element::UiElement;
use crate::error::{Result, SpecError};

/// An ordered mapping of element keys to descriptors
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fragment {
    elements: BTreeMap<String, UiElement>,
}

impl Fragment {
    /// Create an empty fragment
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an element, failing if the key is already taken
    pub fn insert(&mut self, key: impl Into<String>, element: UiElement) -> Result<()> {
        let key = key.into();
        if self.elements.contains_key(&key) {
            return Err(SpecError::DuplicateKey(key));
        }
        self.elements.insert(key, element);
        Ok(())
    }

    /// Merge another fragment in, failing on any shared key
    pub fn merge(&mut self, other: Fragment) -> Result<()> {
        for (key, element) in other.elements {
            self.insert(key, element)?;
        }
        Ok(())
    }

    /// Look up an element by key
    pub fn get(&self, key: &str) -> Option<&UiElement> {
        self.elements.get(key)
    }

    /// Whether a key is present
    pub fn contains_key(&self, key: &str) -> bool {
        self.elements.contains_key(key)
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the fragment holds no elements
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Iterate over keys
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.elements.keys()
    }

    /// Consume into the underlying mapping
    pub fn into_elements(self) -> BTreeMap<String, UiElement> {
        self.elements
    }
}
