// Argument payloads recorded alongside each reversible edit

use std::fmt;
use std::rc::Rc;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::document::DocumentHandle;

/// A JSON-like edit payload value.
///
/// `Unset` is an explicit sentinel distinct from key absence: an object
/// property set to `Unset` tells a handler to clear that field, while a
/// missing property leaves the field untouched. Objects keep insertion
/// order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ArgValue {
    /// Explicitly cleared; serializes as JSON `null`
    Unset,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<ArgValue>),
    Object(IndexMap<String, ArgValue>),
}

impl ArgValue {
    pub fn is_unset(&self) -> bool {
        matches!(self, ArgValue::Unset)
    }

    /// Build an object value from `(key, value)` pairs, keeping order.
    pub fn object<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, ArgValue)>,
    {
        ArgValue::Object(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Build a list value.
    pub fn list<I>(items: I) -> Self
    where
        I: IntoIterator<Item = ArgValue>,
    {
        ArgValue::List(items.into_iter().collect())
    }
}

impl From<bool> for ArgValue {
    fn from(value: bool) -> Self {
        ArgValue::Bool(value)
    }
}

impl From<i64> for ArgValue {
    fn from(value: i64) -> Self {
        ArgValue::Int(value)
    }
}

impl From<f64> for ArgValue {
    fn from(value: f64) -> Self {
        ArgValue::Float(value)
    }
}

impl From<&str> for ArgValue {
    fn from(value: &str) -> Self {
        ArgValue::Str(value.to_string())
    }
}

impl From<String> for ArgValue {
    fn from(value: String) -> Self {
        ArgValue::Str(value)
    }
}

/// Convert a JSON edit payload. JSON `null` becomes `Unset`, so a payload
/// like `{"line.color": null}` keeps its clear-this-field meaning.
impl From<serde_json::Value> for ArgValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => ArgValue::Unset,
            serde_json::Value::Bool(b) => ArgValue::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => ArgValue::Int(i),
                None => ArgValue::Float(n.as_f64().unwrap_or_default()),
            },
            serde_json::Value::String(s) => ArgValue::Str(s),
            serde_json::Value::Array(items) => {
                ArgValue::List(items.into_iter().map(Into::into).collect())
            }
            serde_json::Value::Object(entries) => {
                ArgValue::Object(entries.into_iter().map(|(k, v)| (k, v.into())).collect())
            }
        }
    }
}

/// One element of a recorded argument list: either the live document handle
/// or a plain payload value.
pub enum Arg<D> {
    /// The live document; snapshots pass it through by identity
    Doc(DocumentHandle<D>),
    /// A payload value, owned by the recorded call
    Value(ArgValue),
}

impl<D> Arg<D> {
    /// The document handle, when this element is the live document.
    pub fn doc(&self) -> Option<&DocumentHandle<D>> {
        match self {
            Arg::Doc(handle) => Some(handle),
            Arg::Value(_) => None,
        }
    }

    /// The payload value, when this element is one.
    pub fn value(&self) -> Option<&ArgValue> {
        match self {
            Arg::Value(value) => Some(value),
            Arg::Doc(_) => None,
        }
    }
}

// Manual impls: deriving would demand `D: Clone`/`D: Debug`/`D: PartialEq`,
// which the handle never needs.
impl<D> Clone for Arg<D> {
    fn clone(&self) -> Self {
        match self {
            Arg::Doc(handle) => Arg::Doc(Rc::clone(handle)),
            Arg::Value(value) => Arg::Value(value.clone()),
        }
    }
}

impl<D> fmt::Debug for Arg<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arg::Doc(_) => f.write_str("Doc(..)"),
            Arg::Value(value) => write!(f, "Value({value:?})"),
        }
    }
}

/// Document elements compare by handle identity, values by content.
impl<D> PartialEq for Arg<D> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Arg::Doc(a), Arg::Doc(b)) => Rc::ptr_eq(a, b),
            (Arg::Value(a), Arg::Value(b)) => a == b,
            _ => false,
        }
    }
}

impl<D> From<ArgValue> for Arg<D> {
    fn from(value: ArgValue) -> Self {
        Arg::Value(value)
    }
}
