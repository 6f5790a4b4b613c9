//! Deferred prop values and predicates
//!
//! Props in a spec document are either plain JSON literals or deferred
//! expressions the rendering engine resolves against current state:
//!
//! - `{"$path": "/count"}` reads the value at a state path
//! - `{"$cond": <predicate>, "$then": <value>, "$else": <value>}` branches
//!
//! Predicates compare two operands, each a state path (`{"path": "/x"}`) or
//! a literal. This module owns only the wire format; evaluation lives in the
//! engine, so the registry layer downstream only ever sees resolved literals.
//!
//! State paths are JSON Pointers (`/`-prefixed). Paths starting with `$item`
//! resolve into the current repeat item; the literal string `"$index"` in
//! action params resolves to the current repeat index.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

// =============================================================================
// Prop Values
// =============================================================================

/// A prop value: a literal or a deferred expression
#[derive(Debug, Clone, PartialEq)]
pub enum PropValue {
    /// A plain JSON value, passed through unchanged
    Literal(Value),
    /// Read the value at a state path at resolution time
    Path(String),
    /// Branch on a predicate at resolution time
    Conditional {
        /// The predicate to evaluate
        cond: Predicate,
        /// Value when the predicate holds
        then: Box<PropValue>,
        /// Value when it does not
        otherwise: Box<PropValue>,
    },
}

impl PropValue {
    /// Create a literal prop value
    pub fn lit(value: impl Into<Value>) -> Self {
        PropValue::Literal(value.into())
    }

    /// Create a path-bound prop value
    pub fn path(path: impl Into<String>) -> Self {
        PropValue::Path(path.into())
    }

    /// Create a conditional prop value
    pub fn cond(cond: Predicate, then: PropValue, otherwise: PropValue) -> Self {
        PropValue::Conditional {
            cond,
            then: Box::new(then),
            otherwise: Box::new(otherwise),
        }
    }

    /// Encode to the JSON wire form
    pub fn to_wire(&self) -> Value {
        match self {
            PropValue::Literal(value) => value.clone(),
            PropValue::Path(path) => {
                let mut map = Map::new();
                map.insert("$path".to_string(), Value::String(path.clone()));
                Value::Object(map)
            }
            PropValue::Conditional { cond, then, otherwise } => {
                let mut map = Map::new();
                map.insert("$cond".to_string(), cond.to_wire());
                map.insert("$then".to_string(), then.to_wire());
                map.insert("$else".to_string(), otherwise.to_wire());
                Value::Object(map)
            }
        }
    }

    /// Decode from the JSON wire form
    ///
    /// Objects carrying a `$path` or `$cond` key are expressions; anything
    /// else is a literal. An object that wants a literal `$path` key has no
    /// escape hatch, matching the source format.
    pub fn from_wire(value: Value) -> Result<Self, String> {
        let map = match value {
            Value::Object(map) => map,
            other => return Ok(PropValue::Literal(other)),
        };

        if let Some(path) = map.get("$path") {
            let path = path
                .as_str()
                .ok_or_else(|| "$path must be a string".to_string())?;
            return Ok(PropValue::Path(path.to_string()));
        }

        if let Some(cond) = map.get("$cond") {
            let cond = Predicate::from_wire(cond.clone())?;
            let then = map
                .get("$then")
                .cloned()
                .ok_or_else(|| "$cond requires $then".to_string())?;
            let otherwise = map
                .get("$else")
                .cloned()
                .ok_or_else(|| "$cond requires $else".to_string())?;
            return Ok(PropValue::Conditional {
                cond,
                then: Box::new(Self::from_wire(then)?),
                otherwise: Box::new(Self::from_wire(otherwise)?),
            });
        }

        Ok(PropValue::Literal(Value::Object(map)))
    }
}

impl From<&str> for PropValue {
    fn from(value: &str) -> Self {
        PropValue::Literal(Value::String(value.to_string()))
    }
}

impl From<String> for PropValue {
    fn from(value: String) -> Self {
        PropValue::Literal(Value::String(value))
    }
}

impl From<bool> for PropValue {
    fn from(value: bool) -> Self {
        PropValue::Literal(Value::Bool(value))
    }
}

impl From<i64> for PropValue {
    fn from(value: i64) -> Self {
        PropValue::Literal(value.into())
    }
}

impl From<f64> for PropValue {
    fn from(value: f64) -> Self {
        PropValue::Literal(value.into())
    }
}

impl From<Value> for PropValue {
    fn from(value: Value) -> Self {
        PropValue::Literal(value)
    }
}

impl Serialize for PropValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_wire().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for PropValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::from_wire(value).map_err(D::Error::custom)
    }
}

// =============================================================================
// Predicates
// =============================================================================

/// A comparison over two operands, e.g. `{"gt": [{"path": "/count"}, 5]}`
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// Value equality (numbers compare numerically)
    Eq(Operand, Operand),
    /// Value inequality
    Neq(Operand, Operand),
    /// Numeric greater-than
    Gt(Operand, Operand),
    /// Numeric greater-or-equal
    Gte(Operand, Operand),
    /// Numeric less-than
    Lt(Operand, Operand),
    /// Numeric less-or-equal
    Lte(Operand, Operand),
}

impl Predicate {
    /// The wire operator name and operand pair
    fn parts(&self) -> (&'static str, &Operand, &Operand) {
        match self {
            Predicate::Eq(a, b) => ("eq", a, b),
            Predicate::Neq(a, b) => ("neq", a, b),
            Predicate::Gt(a, b) => ("gt", a, b),
            Predicate::Gte(a, b) => ("gte", a, b),
            Predicate::Lt(a, b) => ("lt", a, b),
            Predicate::Lte(a, b) => ("lte", a, b),
        }
    }

    /// Encode to the JSON wire form
    pub fn to_wire(&self) -> Value {
        let (op, a, b) = self.parts();
        let mut map = Map::new();
        map.insert(op.to_string(), Value::Array(vec![a.to_wire(), b.to_wire()]));
        Value::Object(map)
    }

    /// Decode from the JSON wire form
    pub fn from_wire(value: Value) -> Result<Self, String> {
        let map = match value {
            Value::Object(map) if map.len() == 1 => map,
            _ => return Err("predicate must be a single-operator object".to_string()),
        };
        let (op, operands) = map
            .into_iter()
            .next()
            .ok_or_else(|| "empty predicate".to_string())?;
        let pair = operands
            .as_array()
            .filter(|a| a.len() == 2)
            .ok_or_else(|| format!("'{op}' expects exactly two operands"))?;
        let a = Operand::from_wire(pair[0].clone());
        let b = Operand::from_wire(pair[1].clone());
        match op.as_str() {
            "eq" => Ok(Predicate::Eq(a, b)),
            "neq" => Ok(Predicate::Neq(a, b)),
            "gt" => Ok(Predicate::Gt(a, b)),
            "gte" => Ok(Predicate::Gte(a, b)),
            "lt" => Ok(Predicate::Lt(a, b)),
            "lte" => Ok(Predicate::Lte(a, b)),
            other => Err(format!("unknown predicate operator '{other}'")),
        }
    }
}

impl Serialize for Predicate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_wire().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Predicate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::from_wire(value).map_err(D::Error::custom)
    }
}

// =============================================================================
// Operands
// =============================================================================

/// One side of a predicate: a state path or a literal
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    /// Read the state path at evaluation time
    Path(String),
    /// A literal comparison value
    Literal(Value),
}

impl Operand {
    /// Create a path operand
    pub fn path(path: impl Into<String>) -> Self {
        Operand::Path(path.into())
    }

    /// Create a literal operand
    pub fn lit(value: impl Into<Value>) -> Self {
        Operand::Literal(value.into())
    }

    /// Encode to the JSON wire form
    pub fn to_wire(&self) -> Value {
        match self {
            Operand::Path(path) => {
                let mut map = Map::new();
                map.insert("path".to_string(), Value::String(path.clone()));
                Value::Object(map)
            }
            Operand::Literal(value) => value.clone(),
        }
    }

    /// Decode from the JSON wire form
    ///
    /// A single-key object `{"path": "..."}` is a path reference; everything
    /// else is a literal.
    pub fn from_wire(value: Value) -> Self {
        if let Value::Object(map) = &value {
            if map.len() == 1 {
                if let Some(Value::String(path)) = map.get("path") {
                    return Operand::Path(path.clone());
                }
            }
        }
        Operand::Literal(value)
    }
}
