//! Screen host
//!
//! Mounts one spec document for the lifetime of a screen: seeds the state
//! store, mirrors `/darkMode` writes into the process theme, builds the
//! action table once, and drives render passes through the component
//! registry. A render pass that panics is contained and replaced by a small
//! error surface; the host itself stays usable afterwards.

use std::collections::HashMap;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;

use parking_lot::Mutex;
use serde_json::{Map, Value};

use app_state::{
    ActionContext, ActionHandler, ActionHandlers, AlertQueue, Navigator, SessionState,
};
use app_ui::{standard_registry, Registry, ThemeState};
use spec_core::{PropValue, Spec};
use spec_engine::{
    resolve_params, resolve_value, EventBinding, EventSink, RenderNode, Renderer, Scope,
    StateStore,
};

use crate::screen::{screen_config, ScreenConfig, ScreenType};

/// Everything a screen supplies when mounting a document
pub struct HostOptions {
    navigator: Arc<dyn Navigator>,
    theme: ThemeState,
    session: SessionState,
    alerts: AlertQueue,
    extra_state: Map<String, Value>,
    extra_handlers: HashMap<String, Arc<dyn ActionHandler>>,
}

impl HostOptions {
    /// Options with a navigator and defaults for everything else
    pub fn new(navigator: Arc<dyn Navigator>) -> Self {
        Self {
            navigator,
            theme: ThemeState::default(),
            session: SessionState::new(),
            alerts: AlertQueue::new(),
            extra_state: Map::new(),
            extra_handlers: HashMap::new(),
        }
    }

    /// Share an existing theme handle instead of a fresh light one
    pub fn theme(mut self, theme: ThemeState) -> Self {
        self.theme = theme;
        self
    }

    /// Share an existing session handle
    pub fn session(mut self, session: SessionState) -> Self {
        self.session = session;
        self
    }

    /// Share an existing alert queue
    pub fn alerts(mut self, alerts: AlertQueue) -> Self {
        self.alerts = alerts;
        self
    }

    /// State entries merged over the document's own initial state.
    ///
    /// On a key collision the screen-supplied entry wins; route params
    /// override spec defaults this way.
    pub fn extra_state(mut self, extra: Map<String, Value>) -> Self {
        self.extra_state = extra;
        self
    }

    /// Handlers merged over the standard table; extra wins on collision
    pub fn extra_handlers(mut self, extra: HashMap<String, Arc<dyn ActionHandler>>) -> Self {
        self.extra_handlers = extra;
        self
    }
}

/// A mounted document and everything needed to drive it
pub struct ScreenHost {
    spec: Spec,
    screen: ScreenType,
    store: StateStore,
    registry: Registry,
    handlers: ActionHandlers,
    theme: ThemeState,
    session: SessionState,
    alerts: AlertQueue,
    sink: Mutex<EventSink>,
    invalid: Option<String>,
}

impl ScreenHost {
    /// Mount a document.
    ///
    /// A structurally invalid document still mounts; it renders the error
    /// surface and ignores events instead of failing the screen outright.
    pub fn mount(spec: Spec, screen: ScreenType, options: HostOptions) -> Self {
        let mut initial = spec.state.clone();
        initial.extend(options.extra_state);

        let invalid = spec.validate().err().map(|error| error.to_string());
        if let Some(message) = &invalid {
            if cfg!(debug_assertions) {
                tracing::warn!(%message, "mounting invalid document");
            }
        }

        let store = StateStore::new(initial);
        let theme = options.theme;
        let mirror = theme.clone();
        store.subscribe(Arc::new(move |path: &str, value: &Value| {
            if path == "/darkMode" {
                mirror.set_dark(value.as_bool().unwrap_or(false));
            }
        }));

        let registry = standard_registry(theme.clone());
        let handlers = ActionHandlers::standard_with(
            ActionContext {
                store: store.clone(),
                session: options.session.clone(),
                navigator: options.navigator,
                alerts: options.alerts.clone(),
            },
            options.extra_handlers,
        );

        Self {
            spec,
            screen,
            store,
            registry,
            handlers,
            theme,
            session: options.session,
            alerts: options.alerts,
            sink: Mutex::new(EventSink::new()),
            invalid,
        }
    }

    /// The mounted document's state store
    pub fn store(&self) -> &StateStore {
        &self.store
    }

    /// The theme handle the host mirrors `/darkMode` into
    pub fn theme(&self) -> &ThemeState {
        &self.theme
    }

    /// The session handle auth actions write to
    pub fn session(&self) -> &SessionState {
        &self.session
    }

    /// Alerts queued by `showAlert` since the last drain
    pub fn alerts(&self) -> &AlertQueue {
        &self.alerts
    }

    /// Chrome for this screen under the current theme
    pub fn config(&self) -> ScreenConfig {
        screen_config(self.screen, &self.theme.current())
    }

    /// Run one render pass against current state.
    ///
    /// Always yields a node: a failed pass yields the error surface and an
    /// all-hidden document yields an empty view.
    pub fn render(&self) -> RenderNode {
        if let Some(message) = &self.invalid {
            return error_surface(message);
        }

        let renderer = Renderer::new(&self.spec, &self.store);
        *self.sink.lock() = renderer.sink();

        match catch_unwind(AssertUnwindSafe(|| renderer.render(&self.registry))) {
            Ok(Some(node)) => node,
            Ok(None) => RenderNode::new("view"),
            Err(panic) => {
                let message = panic_message(panic);
                if cfg!(debug_assertions) {
                    tracing::warn!(%message, "render pass panicked");
                }
                error_surface(&message)
            }
        }
    }

    /// Events emitted by components during the most recent render pass
    pub fn drain_events(&self) -> Vec<EventBinding> {
        self.sink.lock().drain()
    }

    /// Route one emitted event into its element's action binding.
    ///
    /// Params are resolved against live state, with repeat scope
    /// reconstructed from the binding's instance index. Unknown elements,
    /// events and actions are no-ops with a dev diagnostic.
    pub async fn emit(&self, binding: &EventBinding) {
        if self.invalid.is_some() {
            return;
        }
        let Some(element) = self.spec.elements.get(&binding.element) else {
            if cfg!(debug_assertions) {
                tracing::warn!(element = %binding.element, "event for unknown element");
            }
            return;
        };
        let Some(action) = element.on.get(&binding.event) else {
            if cfg!(debug_assertions) {
                tracing::warn!(
                    element = %binding.element,
                    event = %binding.event,
                    "event without binding"
                );
            }
            return;
        };

        let state = self.store.snapshot();
        let item = binding
            .index
            .and_then(|index| self.repeat_item(&binding.element, index, &state));
        let scope = match (&item, binding.index) {
            (Some(item), Some(index)) => Some(Scope { item, index }),
            _ => None,
        };

        let params = resolve_params(&action.params, &state, scope);
        if let Err(error) = self.handlers.dispatch(&action.action, params).await {
            if cfg!(debug_assertions) {
                tracing::warn!(%error, "event dispatch failed");
            }
        }
    }

    /// Drain the sink and dispatch everything in emission order
    pub async fn pump(&self) {
        for binding in self.drain_events() {
            self.emit(&binding).await;
        }
    }

    /// The sequence item behind a repeat instance, found by walking up to
    /// the repeating ancestor of the emitting element
    fn repeat_item(&self, element: &str, index: usize, state: &Value) -> Option<Value> {
        for (key, candidate) in &self.spec.elements {
            let Some(repeat) = &candidate.repeat else {
                continue;
            };
            if !self.subtree_contains(key, element) {
                continue;
            }
            let items = resolve_value(&PropValue::path(&repeat.path), state, None);
            return items.as_array().and_then(|items| items.get(index)).cloned();
        }
        None
    }

    fn subtree_contains(&self, key: &str, target: &str) -> bool {
        let Some(element) = self.spec.elements.get(key) else {
            return false;
        };
        element
            .children
            .iter()
            .any(|child| child == target || self.subtree_contains(child, target))
    }
}

/// The fallback tree shown when a pass fails or the document is invalid
fn error_surface(message: &str) -> RenderNode {
    RenderNode::new("view")
        .style_attr("flex", 1)
        .style_attr("alignItems", "center")
        .style_attr("justifyContent", "center")
        .style_attr("padding", 24)
        .child(
            RenderNode::new("text")
                .text("Something went wrong")
                .style_attr("fontSize", 18)
                .style_attr("fontWeight", "600")
                .style_attr("marginBottom", 8),
        )
        .child(
            RenderNode::new("text")
                .text(message)
                .style_attr("fontSize", 14)
                .style_attr("color", "#888")
                .style_attr("textAlign", "center"),
        )
}

fn panic_message(panic: Box<dyn std::any::Any + Send>) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        "render failed".to_string()
    }
}
