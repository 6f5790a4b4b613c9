//! Action-handler table
//!
//! Spec events name actions by string; this table maps those names to
//! handlers. The table is built once and never mutated afterwards, so a
//! screen's behavior cannot drift while it is mounted. Callers may supply
//! extra handlers at build time, and an extra handler wins over a standard
//! one under the same name.
//!
//! Handlers validate their params by deserializing into a typed schema and
//! silently ignore invocations that do not fit, with a dev diagnostic.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};
use spec_core::Operand;
use spec_engine::StateStore;
use std::collections::HashMap;
use std::sync::Arc;

use crate::alerts::{Alert, AlertQueue};
use crate::navigation::Navigator;
use crate::session::{SessionState, User};

/// Resolved params of one action invocation
pub type Params = Map<String, Value>;

/// Dispatch errors
#[derive(Debug, thiserror::Error)]
pub enum ActionError {
    /// The action name is not in the table
    #[error("unknown action: {0}")]
    UnknownAction(String),
}

/// One entry in the action table
#[async_trait]
pub trait ActionHandler: Send + Sync {
    /// Run the action with resolved params
    async fn run(&self, params: Params);
}

/// Everything the standard handlers act on
pub struct ActionContext {
    /// The mounted document's state store
    pub store: StateStore,
    /// Session to sign in/out of
    pub session: SessionState,
    /// Router for navigate/goBack
    pub navigator: Arc<dyn Navigator>,
    /// Queue for requested alerts
    pub alerts: AlertQueue,
}

/// Immutable string-keyed action table
pub struct ActionHandlers {
    handlers: HashMap<String, Arc<dyn ActionHandler>>,
}

impl ActionHandlers {
    /// Build the standard table
    pub fn standard(ctx: ActionContext) -> Self {
        Self::standard_with(ctx, HashMap::new())
    }

    /// Build the standard table plus caller-supplied handlers.
    ///
    /// On a name collision the extra handler wins.
    pub fn standard_with(
        ctx: ActionContext,
        extra: HashMap<String, Arc<dyn ActionHandler>>,
    ) -> Self {
        let mut handlers: HashMap<String, Arc<dyn ActionHandler>> = HashMap::new();

        handlers.insert(
            "increment".to_string(),
            Arc::new(Counter {
                name: "increment",
                store: ctx.store.clone(),
                sign: 1.0,
            }),
        );
        handlers.insert(
            "decrement".to_string(),
            Arc::new(Counter {
                name: "decrement",
                store: ctx.store.clone(),
                sign: -1.0,
            }),
        );
        handlers.insert(
            "login".to_string(),
            Arc::new(Login {
                session: ctx.session.clone(),
            }),
        );
        handlers.insert(
            "signup".to_string(),
            Arc::new(Signup {
                session: ctx.session.clone(),
            }),
        );
        handlers.insert(
            "logout".to_string(),
            Arc::new(Logout {
                session: ctx.session.clone(),
            }),
        );
        handlers.insert(
            "navigate".to_string(),
            Arc::new(Navigate {
                navigator: Arc::clone(&ctx.navigator),
            }),
        );
        handlers.insert(
            "goBack".to_string(),
            Arc::new(GoBack {
                navigator: Arc::clone(&ctx.navigator),
            }),
        );
        handlers.insert(
            "pushState".to_string(),
            Arc::new(PushState {
                store: ctx.store.clone(),
            }),
        );
        handlers.insert(
            "removeState".to_string(),
            Arc::new(RemoveState {
                store: ctx.store.clone(),
            }),
        );
        handlers.insert(
            "showAlert".to_string(),
            Arc::new(ShowAlert {
                alerts: ctx.alerts.clone(),
            }),
        );

        handlers.extend(extra);
        Self { handlers }
    }

    /// Whether an action name is in the table
    pub fn contains(&self, action: &str) -> bool {
        self.handlers.contains_key(action)
    }

    /// Run the named action
    pub async fn dispatch(&self, action: &str, params: Params) -> Result<(), ActionError> {
        match self.handlers.get(action) {
            Some(handler) => {
                handler.run(params).await;
                Ok(())
            }
            None => Err(ActionError::UnknownAction(action.to_string())),
        }
    }
}

/// Parse params into a handler's schema, ignoring the invocation on failure
fn parse<P: DeserializeOwned>(action: &str, params: Params) -> Option<P> {
    match serde_json::from_value(Value::Object(params)) {
        Ok(parsed) => Some(parsed),
        Err(error) => {
            if cfg!(debug_assertions) {
                tracing::warn!(action, %error, "invalid action params, ignoring");
            }
            None
        }
    }
}

/// Prefer integer JSON numbers when the value is integral
fn number(n: f64) -> Value {
    if n.fract() == 0.0 && n.abs() < 9e15 {
        Value::from(n as i64)
    } else {
        Value::from(n)
    }
}

// =============================================================================
// Counter Actions
// =============================================================================

fn default_step() -> f64 {
    1.0
}

#[derive(Deserialize)]
struct CounterParams {
    path: String,
    #[serde(default = "default_step")]
    step: f64,
}

struct Counter {
    name: &'static str,
    store: StateStore,
    sign: f64,
}

#[async_trait]
impl ActionHandler for Counter {
    async fn run(&self, params: Params) {
        let Some(p) = parse::<CounterParams>(self.name, params) else {
            return;
        };
        if p.path.is_empty() {
            return;
        }
        let current = self
            .store
            .get(&p.path)
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        self.store.set(&p.path, number(current + self.sign * p.step));
    }
}

// =============================================================================
// Auth Actions
// =============================================================================

#[derive(Deserialize)]
struct LoginParams {
    email: String,
}

struct Login {
    session: SessionState,
}

#[async_trait]
impl ActionHandler for Login {
    async fn run(&self, params: Params) {
        let Some(p) = parse::<LoginParams>("login", params) else {
            return;
        };
        if p.email.is_empty() {
            return;
        }
        self.session.sign_in(User::from_email("", p.email));
    }
}

#[derive(Deserialize)]
struct SignupParams {
    #[serde(default)]
    name: String,
    email: String,
}

struct Signup {
    session: SessionState,
}

#[async_trait]
impl ActionHandler for Signup {
    async fn run(&self, params: Params) {
        let Some(p) = parse::<SignupParams>("signup", params) else {
            return;
        };
        if p.email.is_empty() {
            return;
        }
        self.session.sign_in(User::from_email(&p.name, p.email));
    }
}

struct Logout {
    session: SessionState,
}

#[async_trait]
impl ActionHandler for Logout {
    async fn run(&self, _params: Params) {
        self.session.sign_out();
    }
}

// =============================================================================
// Navigation Actions
// =============================================================================

#[derive(Deserialize)]
struct NavigateParams {
    screen: String,
    #[serde(default)]
    params: Option<Map<String, Value>>,
}

struct Navigate {
    navigator: Arc<dyn Navigator>,
}

#[async_trait]
impl ActionHandler for Navigate {
    async fn run(&self, params: Params) {
        let Some(p) = parse::<NavigateParams>("navigate", params) else {
            return;
        };
        self.navigator.navigate(&p.screen, p.params);
    }
}

struct GoBack {
    navigator: Arc<dyn Navigator>,
}

#[async_trait]
impl ActionHandler for GoBack {
    async fn run(&self, _params: Params) {
        self.navigator.go_back();
    }
}

// =============================================================================
// State Actions
// =============================================================================

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PushParams {
    path: String,
    value: Value,
    clear_path: Option<String>,
}

struct PushState {
    store: StateStore,
}

/// Substitute `{ "path": "/x" }` reference objects inside a pushed value
/// with the state they point at. Reference detection is the operand wire
/// decoding, so the two formats cannot drift apart.
fn resolve_refs(value: Value, state: &Value) -> Value {
    match Operand::from_wire(value) {
        Operand::Path(path) => state.pointer(&path).cloned().unwrap_or(Value::Null),
        Operand::Literal(Value::Object(map)) => Value::Object(
            map.into_iter()
                .map(|(k, v)| (k, resolve_refs(v, state)))
                .collect(),
        ),
        Operand::Literal(Value::Array(items)) => Value::Array(
            items
                .into_iter()
                .map(|item| resolve_refs(item, state))
                .collect(),
        ),
        Operand::Literal(other) => other,
    }
}

#[async_trait]
impl ActionHandler for PushState {
    async fn run(&self, params: Params) {
        let Some(p) = parse::<PushParams>("pushState", params) else {
            return;
        };
        let snapshot = self.store.snapshot();
        let value = resolve_refs(p.value, &snapshot);

        let mut items = self
            .store
            .get(&p.path)
            .and_then(|v| v.as_array().cloned())
            .unwrap_or_default();
        items.push(value);
        self.store.set(&p.path, Value::Array(items));

        if let Some(clear) = p.clear_path {
            self.store.set(&clear, Value::from(""));
        }
    }
}

#[derive(Deserialize)]
struct RemoveParams {
    path: String,
    index: usize,
}

struct RemoveState {
    store: StateStore,
}

#[async_trait]
impl ActionHandler for RemoveState {
    async fn run(&self, params: Params) {
        let Some(p) = parse::<RemoveParams>("removeState", params) else {
            return;
        };
        let Some(Value::Array(mut items)) = self.store.get(&p.path) else {
            return;
        };
        if p.index >= items.len() {
            return;
        }
        items.remove(p.index);
        self.store.set(&p.path, Value::Array(items));
    }
}

// =============================================================================
// Alert Actions
// =============================================================================

#[derive(Deserialize)]
struct ShowAlertParams {
    title: Option<String>,
    message: Option<String>,
}

struct ShowAlert {
    alerts: AlertQueue,
}

#[async_trait]
impl ActionHandler for ShowAlert {
    async fn run(&self, params: Params) {
        let Some(p) = parse::<ShowAlertParams>("showAlert", params) else {
            return;
        };
        self.alerts.push(Alert {
            title: p.title,
            message: p.message,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::MockNavigator;
    use serde_json::json;

    fn params_of(value: Value) -> Params {
        match value {
            Value::Object(map) => map,
            _ => Params::new(),
        }
    }

    fn context(store: StateStore) -> ActionContext {
        let mut navigator = MockNavigator::new();
        navigator.expect_navigate().return_const(());
        navigator.expect_go_back().return_const(());
        ActionContext {
            store,
            session: SessionState::new(),
            navigator: Arc::new(navigator),
            alerts: AlertQueue::new(),
        }
    }

    fn store_with(value: Value) -> StateStore {
        StateStore::new(params_of(value))
    }

    // ==========================================================================
    // Counter Tests
    // ==========================================================================

    #[tokio::test]
    async fn test_increment_default_step() {
        let store = store_with(json!({ "count": 7 }));
        let handlers = ActionHandlers::standard(context(store.clone()));
        handlers
            .dispatch("increment", params_of(json!({ "path": "/count" })))
            .await
            .unwrap();
        assert_eq!(store.get("/count"), Some(json!(8)));
    }

    #[tokio::test]
    async fn test_decrement_custom_step() {
        let store = store_with(json!({ "count": 10 }));
        let handlers = ActionHandlers::standard(context(store.clone()));
        handlers
            .dispatch("decrement", params_of(json!({ "path": "/count", "step": 3 })))
            .await
            .unwrap();
        assert_eq!(store.get("/count"), Some(json!(7)));
    }

    #[tokio::test]
    async fn test_counter_starts_from_zero() {
        let store = store_with(json!({}));
        let handlers = ActionHandlers::standard(context(store.clone()));
        handlers
            .dispatch("increment", params_of(json!({ "path": "/count" })))
            .await
            .unwrap();
        assert_eq!(store.get("/count"), Some(json!(1)));
    }

    #[tokio::test]
    async fn test_increment_decrement_are_inverses() {
        let store = store_with(json!({ "count": 3 }));
        let handlers = ActionHandlers::standard(context(store.clone()));
        handlers
            .dispatch("increment", params_of(json!({ "path": "/count", "step": 5 })))
            .await
            .unwrap();
        handlers
            .dispatch("decrement", params_of(json!({ "path": "/count", "step": 5 })))
            .await
            .unwrap();
        assert_eq!(store.get("/count"), Some(json!(3)));
    }

    #[tokio::test]
    async fn test_counter_ignores_missing_path() {
        let store = store_with(json!({ "count": 7 }));
        let handlers = ActionHandlers::standard(context(store.clone()));
        handlers
            .dispatch("increment", params_of(json!({ "step": 2 })))
            .await
            .unwrap();
        assert_eq!(store.get("/count"), Some(json!(7)));
    }

    // ==========================================================================
    // Auth Tests
    // ==========================================================================

    #[tokio::test]
    async fn test_login_derives_name_from_email() {
        let ctx = context(store_with(json!({})));
        let session = ctx.session.clone();
        let handlers = ActionHandlers::standard(ctx);

        handlers
            .dispatch("login", params_of(json!({ "email": "jane@example.com" })))
            .await
            .unwrap();
        let user = session.current().unwrap();
        assert_eq!(user.name, "jane");
        assert_eq!(user.email, "jane@example.com");
    }

    #[tokio::test]
    async fn test_login_requires_email() {
        let ctx = context(store_with(json!({})));
        let session = ctx.session.clone();
        let handlers = ActionHandlers::standard(ctx);

        handlers.dispatch("login", params_of(json!({}))).await.unwrap();
        handlers
            .dispatch("login", params_of(json!({ "email": "" })))
            .await
            .unwrap();
        assert!(!session.is_signed_in());
    }

    #[tokio::test]
    async fn test_signup_prefers_given_name() {
        let ctx = context(store_with(json!({})));
        let session = ctx.session.clone();
        let handlers = ActionHandlers::standard(ctx);

        handlers
            .dispatch(
                "signup",
                params_of(json!({ "name": "Jane D", "email": "jane@example.com" })),
            )
            .await
            .unwrap();
        assert_eq!(session.current().unwrap().name, "Jane D");

        handlers
            .dispatch("signup", params_of(json!({ "email": "sam@example.com" })))
            .await
            .unwrap();
        assert_eq!(session.current().unwrap().name, "sam");
    }

    #[tokio::test]
    async fn test_logout_clears_session() {
        let ctx = context(store_with(json!({})));
        let session = ctx.session.clone();
        session.sign_in(User::from_email("", "jane@example.com"));
        let handlers = ActionHandlers::standard(ctx);

        handlers.dispatch("logout", Params::new()).await.unwrap();
        assert!(!session.is_signed_in());
    }

    // ==========================================================================
    // Navigation Tests
    // ==========================================================================

    #[tokio::test]
    async fn test_navigate_routes_with_params() {
        let mut navigator = MockNavigator::new();
        navigator
            .expect_navigate()
            .withf(|screen, params| {
                screen == "/order/[id]"
                    && params.as_ref().map(|p| p["id"] == json!("1234")) == Some(true)
            })
            .times(1)
            .return_const(());

        let handlers = ActionHandlers::standard(ActionContext {
            store: store_with(json!({})),
            session: SessionState::new(),
            navigator: Arc::new(navigator),
            alerts: AlertQueue::new(),
        });
        handlers
            .dispatch(
                "navigate",
                params_of(json!({ "screen": "/order/[id]", "params": { "id": "1234" } })),
            )
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_go_back() {
        let mut navigator = MockNavigator::new();
        navigator.expect_go_back().times(1).return_const(());

        let handlers = ActionHandlers::standard(ActionContext {
            store: store_with(json!({})),
            session: SessionState::new(),
            navigator: Arc::new(navigator),
            alerts: AlertQueue::new(),
        });
        handlers.dispatch("goBack", Params::new()).await.unwrap();
    }

    // ==========================================================================
    // State Action Tests
    // ==========================================================================

    #[tokio::test]
    async fn test_push_state_resolves_refs_and_clears() {
        let store = store_with(json!({ "todos": [], "newTodo": "learn rust" }));
        let handlers = ActionHandlers::standard(context(store.clone()));
        handlers
            .dispatch(
                "pushState",
                params_of(json!({
                    "path": "/todos",
                    "value": { "text": { "path": "/newTodo" } },
                    "clearPath": "/newTodo",
                })),
            )
            .await
            .unwrap();
        assert_eq!(
            store.get("/todos"),
            Some(json!([{ "text": "learn rust" }]))
        );
        assert_eq!(store.get("/newTodo"), Some(json!("")));
    }

    #[tokio::test]
    async fn test_push_state_ref_detection_matches_operand_wire_form() {
        let store = store_with(json!({ "items": [], "src": "resolved" }));
        let handlers = ActionHandlers::standard(context(store.clone()));
        handlers
            .dispatch(
                "pushState",
                params_of(json!({
                    "path": "/items",
                    "value": {
                        "ref": { "path": "/src" },
                        "notRef": { "path": "/src", "extra": 1 },
                        "nonStringPath": { "path": 3 },
                    },
                })),
            )
            .await
            .unwrap();
        // Only single-key objects with a string path are references, exactly
        // as Operand::from_wire decodes them.
        assert_eq!(
            store.get("/items"),
            Some(json!([{
                "ref": "resolved",
                "notRef": { "path": "/src", "extra": 1 },
                "nonStringPath": { "path": 3 },
            }]))
        );
    }

    #[tokio::test]
    async fn test_push_state_creates_missing_sequence() {
        let store = store_with(json!({}));
        let handlers = ActionHandlers::standard(context(store.clone()));
        handlers
            .dispatch(
                "pushState",
                params_of(json!({ "path": "/todos", "value": "x" })),
            )
            .await
            .unwrap();
        assert_eq!(store.get("/todos"), Some(json!(["x"])));
    }

    #[tokio::test]
    async fn test_remove_state_by_index() {
        let store = store_with(json!({ "todos": ["a", "b", "c"] }));
        let handlers = ActionHandlers::standard(context(store.clone()));
        handlers
            .dispatch(
                "removeState",
                params_of(json!({ "path": "/todos", "index": 1 })),
            )
            .await
            .unwrap();
        assert_eq!(store.get("/todos"), Some(json!(["a", "c"])));
    }

    #[tokio::test]
    async fn test_remove_state_out_of_bounds_is_ignored() {
        let store = store_with(json!({ "todos": ["a"] }));
        let handlers = ActionHandlers::standard(context(store.clone()));
        handlers
            .dispatch(
                "removeState",
                params_of(json!({ "path": "/todos", "index": 5 })),
            )
            .await
            .unwrap();
        assert_eq!(store.get("/todos"), Some(json!(["a"])));
    }

    // ==========================================================================
    // Alert Tests
    // ==========================================================================

    #[tokio::test]
    async fn test_show_alert_queues() {
        let ctx = context(store_with(json!({})));
        let alerts = ctx.alerts.clone();
        let handlers = ActionHandlers::standard(ctx);

        handlers
            .dispatch(
                "showAlert",
                params_of(json!({ "title": "hello!", "message": "hi" })),
            )
            .await
            .unwrap();
        let drained = alerts.drain();
        assert_eq!(drained.len(), 1);
        assert_eq!(drained[0].title.as_deref(), Some("hello!"));
    }

    // ==========================================================================
    // Table Tests
    // ==========================================================================

    #[tokio::test]
    async fn test_unknown_action_errors() {
        let handlers = ActionHandlers::standard(context(store_with(json!({}))));
        let result = handlers.dispatch("explode", Params::new()).await;
        assert!(matches!(result, Err(ActionError::UnknownAction(_))));
    }

    #[tokio::test]
    async fn test_extra_handler_wins_collision() {
        struct Marker {
            store: StateStore,
        }
        #[async_trait]
        impl ActionHandler for Marker {
            async fn run(&self, _params: Params) {
                self.store.set("/ran", json!(true));
            }
        }

        let store = store_with(json!({ "count": 0 }));
        let extra: HashMap<String, Arc<dyn ActionHandler>> = HashMap::from_iter([(
            "increment".to_string(),
            Arc::new(Marker {
                store: store.clone(),
            }) as Arc<dyn ActionHandler>,
        )]);
        let handlers = ActionHandlers::standard_with(context(store.clone()), extra);

        handlers
            .dispatch("increment", params_of(json!({ "path": "/count" })))
            .await
            .unwrap();
        assert_eq!(store.get("/count"), Some(json!(0)));
        assert_eq!(store.get("/ran"), Some(json!(true)));
    }
}
