//! Path-addressed state store
//!
//! A cloneable handle over one screen's state tree. Paths are JSON Pointers
//! (`/count`, `/form/email`). Reads of absent paths yield `None`; writes
//! create missing intermediate objects. Every write notifies subscribed
//! listeners with the path and the new value, after the lock is released, so
//! listeners are free to read the store again.

use parking_lot::RwLock;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use std::marker::PhantomData;
use std::sync::Arc;

/// Listener invoked after each write with `(path, new_value)`
pub type ChangeListener = Arc<dyn Fn(&str, &Value) + Send + Sync>;

struct StoreInner {
    state: Value,
    listeners: Vec<ChangeListener>,
}

/// Cloneable handle to a screen's live state
///
/// Handlers and bindings hold this handle rather than a snapshot, so every
/// read observes the state current at call time.
#[derive(Clone)]
pub struct StateStore {
    inner: Arc<RwLock<StoreInner>>,
}

impl StateStore {
    /// Create a store seeded with the given state object
    pub fn new(initial: Map<String, Value>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(StoreInner {
                state: Value::Object(initial),
                listeners: Vec::new(),
            })),
        }
    }

    /// Clone the full current state tree
    pub fn snapshot(&self) -> Value {
        self.inner.read().state.clone()
    }

    /// Read the value at a path, if present
    pub fn get(&self, path: &str) -> Option<Value> {
        self.inner.read().state.pointer(path).cloned()
    }

    /// Write a value at a path, creating missing intermediate objects.
    ///
    /// A path that descends into a non-container (e.g. through a string) is
    /// dropped with a dev diagnostic rather than clobbering the obstruction.
    pub fn set(&self, path: &str, value: Value) {
        let listeners = {
            let mut inner = self.inner.write();
            if !write_pointer(&mut inner.state, path, value.clone()) {
                if cfg!(debug_assertions) {
                    tracing::warn!(path, "state write dropped: path is obstructed");
                }
                return;
            }
            inner.listeners.clone()
        };
        for listener in listeners {
            listener(path, &value);
        }
    }

    /// Register a change listener for the lifetime of the store
    pub fn subscribe(&self, listener: ChangeListener) {
        self.inner.write().listeners.push(listener);
    }

    /// Create a typed two-way binding for a leaf path
    pub fn bind<T>(&self, path: impl Into<String>) -> StateBinding<T> {
        StateBinding {
            store: self.clone(),
            path: path.into(),
            _marker: PhantomData,
        }
    }
}

/// Write through a JSON Pointer, creating missing objects along the way.
/// Returns false when an existing non-container value blocks the path.
fn write_pointer(state: &mut Value, path: &str, value: Value) -> bool {
    if path.is_empty() || !path.starts_with('/') {
        return false;
    }
    let segments: Vec<String> = path[1..]
        .split('/')
        .map(|s| s.replace("~1", "/").replace("~0", "~"))
        .collect();

    let mut current = state;
    for (i, segment) in segments.iter().enumerate() {
        let last = i == segments.len() - 1;
        match current {
            Value::Object(map) => {
                if last {
                    map.insert(segment.clone(), value);
                    return true;
                }
                current = map
                    .entry(segment.clone())
                    .or_insert_with(|| Value::Object(Map::new()));
            }
            Value::Array(items) => {
                let index = match segment.parse::<usize>() {
                    Ok(index) if index < items.len() => index,
                    _ => return false,
                };
                if last {
                    items[index] = value;
                    return true;
                }
                current = &mut items[index];
            }
            _ => return false,
        }
    }
    false
}

/// Typed two-way binding to a single state path
///
/// The primitive components use for `statePath` props: read the current
/// value, write on change. Both halves go through the live store.
pub struct StateBinding<T> {
    store: StateStore,
    path: String,
    _marker: PhantomData<fn() -> T>,
}

impl<T> StateBinding<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Read the current value, if present and of the expected shape
    pub fn get(&self) -> Option<T> {
        let value = self.store.get(&self.path)?;
        serde_json::from_value(value).ok()
    }

    /// Write a new value
    pub fn set(&self, value: T) {
        match serde_json::to_value(value) {
            Ok(value) => self.store.set(&self.path, value),
            Err(error) => {
                if cfg!(debug_assertions) {
                    tracing::warn!(path = %self.path, %error, "binding write dropped");
                }
            }
        }
    }

    /// The bound path
    pub fn path(&self) -> &str {
        &self.path
    }
}
