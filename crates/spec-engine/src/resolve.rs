//! Expression resolution
//!
//! Turns deferred prop values into plain JSON against a state snapshot.
//! Downstream of this module (the registry and its schemas) only ever sees
//! fully-resolved literals. Missing path reads resolve to `null`; call sites
//! supply their own defaults, a miss is never an error.

use serde_json::{Map, Number, Value};
use spec_core::value::{Operand, Predicate, PropValue};
use std::collections::BTreeMap;

/// Prefix addressing the current repeat item, e.g. `$item/text`
const ITEM_PREFIX: &str = "$item";

/// Literal action-param placeholder for the current repeat index
const INDEX_PLACEHOLDER: &str = "$index";

/// Repeat-instance scope: the current item and its index
#[derive(Debug, Clone, Copy)]
pub struct Scope<'a> {
    /// The sequence item this instance was created for
    pub item: &'a Value,
    /// Zero-based instance index
    pub index: usize,
}

/// Read a path against state, honoring the `$item` scope prefix
fn read_path(path: &str, state: &Value, scope: Option<Scope<'_>>) -> Value {
    if let Some(rest) = path.strip_prefix(ITEM_PREFIX) {
        let Some(scope) = scope else {
            return Value::Null;
        };
        if rest.is_empty() {
            return scope.item.clone();
        }
        return scope.item.pointer(rest).cloned().unwrap_or(Value::Null);
    }
    state.pointer(path).cloned().unwrap_or(Value::Null)
}

/// Resolve one prop value to plain JSON
pub fn resolve_value(value: &PropValue, state: &Value, scope: Option<Scope<'_>>) -> Value {
    match value {
        PropValue::Literal(value) => value.clone(),
        PropValue::Path(path) => read_path(path, state, scope),
        PropValue::Conditional { cond, then, otherwise } => {
            if eval_predicate(cond, state, scope) {
                resolve_value(then, state, scope)
            } else {
                resolve_value(otherwise, state, scope)
            }
        }
    }
}

/// Resolve an element's props bag to plain JSON
pub fn resolve_props(
    props: &BTreeMap<String, PropValue>,
    state: &Value,
    scope: Option<Scope<'_>>,
) -> Map<String, Value> {
    props
        .iter()
        .map(|(name, value)| (name.clone(), resolve_value(value, state, scope)))
        .collect()
}

/// Resolve action params to plain JSON.
///
/// In addition to ordinary resolution, the literal string `"$index"`
/// resolves to the repeat index when a scope is active — the way specs route
/// "which instance was pressed" into a handler.
pub fn resolve_params(
    params: &BTreeMap<String, PropValue>,
    state: &Value,
    scope: Option<Scope<'_>>,
) -> Map<String, Value> {
    params
        .iter()
        .map(|(name, value)| {
            let resolved = match (value, scope) {
                (PropValue::Literal(Value::String(s)), Some(scope))
                    if s == INDEX_PLACEHOLDER =>
                {
                    Value::Number(Number::from(scope.index as u64))
                }
                _ => resolve_value(value, state, scope),
            };
            (name.clone(), resolved)
        })
        .collect()
}

/// Evaluate a predicate against state
pub fn eval_predicate(predicate: &Predicate, state: &Value, scope: Option<Scope<'_>>) -> bool {
    let operand = |op: &Operand| -> Value {
        match op {
            Operand::Path(path) => read_path(path, state, scope),
            Operand::Literal(value) => value.clone(),
        }
    };
    match predicate {
        Predicate::Eq(a, b) => values_equal(&operand(a), &operand(b)),
        Predicate::Neq(a, b) => !values_equal(&operand(a), &operand(b)),
        Predicate::Gt(a, b) => compare(&operand(a), &operand(b), |o| o > 0.0),
        Predicate::Gte(a, b) => compare(&operand(a), &operand(b), |o| o >= 0.0),
        Predicate::Lt(a, b) => compare(&operand(a), &operand(b), |o| o < 0.0),
        Predicate::Lte(a, b) => compare(&operand(a), &operand(b), |o| o <= 0.0),
    }
}

/// Value equality with numeric normalization (`1` equals `1.0`)
fn values_equal(a: &Value, b: &Value) -> bool {
    match (a.as_f64(), b.as_f64()) {
        (Some(a), Some(b)) => a == b,
        _ => a == b,
    }
}

/// Numeric ordering; non-numeric operands never satisfy an ordering
fn compare(a: &Value, b: &Value, check: impl Fn(f64) -> bool) -> bool {
    match (a.as_f64(), b.as_f64()) {
        (Some(a), Some(b)) => check(a - b),
        _ => false,
    }
}
