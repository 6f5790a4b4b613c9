//! Themed style sheets
//!
//! A style sheet is a bag of named styles built from a theme. Components
//! declare a factory function and read styles by name at render time; the
//! cache rebuilds the sheet only when the active theme instance changes,
//! detected by `Arc` pointer identity against the theme singletons.

use parking_lot::RwLock;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::theme::Theme;

/// A single style: display attribute names to values
pub type Style = Map<String, Value>;

/// Convert a `json!` object literal into a [`Style`]
pub fn style(value: Value) -> Style {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

/// Named styles built from one theme
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleSheet {
    styles: BTreeMap<String, Style>,
}

impl StyleSheet {
    /// Create an empty sheet
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a named style from a `json!` object literal
    pub fn with(mut self, name: impl Into<String>, value: Value) -> Self {
        self.styles.insert(name.into(), style(value));
        self
    }

    /// Get a named style, empty when absent
    pub fn get(&self, name: &str) -> Style {
        self.styles.get(name).cloned().unwrap_or_default()
    }
}

/// Factory producing a sheet for a theme
pub type StyleFactory = fn(&Theme) -> StyleSheet;

/// Per-component memo of the last built sheet
///
/// One slot is enough: the active theme changes rarely, and every node of a
/// render pass sees the same theme instance.
pub struct StyleCache {
    build: StyleFactory,
    slot: RwLock<Option<(Arc<Theme>, Arc<StyleSheet>)>>,
}

impl StyleCache {
    /// Create a cache over a style factory
    pub fn new(build: StyleFactory) -> Self {
        Self {
            build,
            slot: RwLock::new(None),
        }
    }

    /// The sheet for `theme`, rebuilt only when the theme instance changed
    pub fn get(&self, theme: &Arc<Theme>) -> Arc<StyleSheet> {
        if let Some((cached, sheet)) = &*self.slot.read() {
            if Arc::ptr_eq(cached, theme) {
                return Arc::clone(sheet);
            }
        }
        let sheet = Arc::new((self.build)(theme));
        *self.slot.write() = Some((Arc::clone(theme), Arc::clone(&sheet)));
        sheet
    }
}
