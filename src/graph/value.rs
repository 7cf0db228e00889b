//! Scalar attribute values stored in node and edge columns

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A single attribute cell
///
/// An unset cell is represented by the absence of a value (`None` at the
/// accessor level), never by an empty string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
}

impl AttrValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttrValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            AttrValue::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Numeric view; integers widen to floats
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            AttrValue::Int(n) => Some(*n as f64),
            AttrValue::Float(x) => Some(*x),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AttrValue::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Bool(b) => write!(f, "{}", b),
            AttrValue::Int(n) => write!(f, "{}", n),
            AttrValue::Float(x) => write!(f, "{}", x),
            AttrValue::String(s) => write!(f, "{}", s),
        }
    }
}

impl From<&str> for AttrValue {
    fn from(s: &str) -> Self {
        AttrValue::String(s.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(s: String) -> Self {
        AttrValue::String(s)
    }
}

impl From<i64> for AttrValue {
    fn from(n: i64) -> Self {
        AttrValue::Int(n)
    }
}

impl From<i32> for AttrValue {
    fn from(n: i32) -> Self {
        AttrValue::Int(n as i64)
    }
}

impl From<f64> for AttrValue {
    fn from(x: f64) -> Self {
        AttrValue::Float(x)
    }
}

impl From<bool> for AttrValue {
    fn from(b: bool) -> Self {
        AttrValue::Bool(b)
    }
}

/// Extra (non-reserved) columns of a single row
pub type Attrs = BTreeMap<String, AttrValue>;

/// Values written by a `set_*_attr` call
///
/// A broadcast value is applied to every targeted row. A sequence must
/// carry exactly one value per targeted row.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrInput {
    Broadcast(AttrValue),
    Each(Vec<AttrValue>),
}

impl AttrInput {
    pub fn each<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<AttrValue>,
    {
        AttrInput::Each(values.into_iter().map(Into::into).collect())
    }

    /// Value for the `i`-th targeted row; callers check the length first
    pub(crate) fn value_at(&self, i: usize) -> &AttrValue {
        match self {
            AttrInput::Broadcast(v) => v,
            AttrInput::Each(values) => &values[i],
        }
    }

    pub(crate) fn len(&self) -> Option<usize> {
        match self {
            AttrInput::Broadcast(_) => None,
            AttrInput::Each(values) => Some(values.len()),
        }
    }
}

impl From<AttrValue> for AttrInput {
    fn from(v: AttrValue) -> Self {
        AttrInput::Broadcast(v)
    }
}

impl From<&str> for AttrInput {
    fn from(s: &str) -> Self {
        AttrInput::Broadcast(s.into())
    }
}

impl From<String> for AttrInput {
    fn from(s: String) -> Self {
        AttrInput::Broadcast(s.into())
    }
}

impl From<i64> for AttrInput {
    fn from(n: i64) -> Self {
        AttrInput::Broadcast(n.into())
    }
}

impl From<f64> for AttrInput {
    fn from(x: f64) -> Self {
        AttrInput::Broadcast(x.into())
    }
}

impl From<bool> for AttrInput {
    fn from(b: bool) -> Self {
        AttrInput::Broadcast(b.into())
    }
}

impl From<Vec<AttrValue>> for AttrInput {
    fn from(values: Vec<AttrValue>) -> Self {
        AttrInput::Each(values)
    }
}

impl From<Vec<&str>> for AttrInput {
    fn from(values: Vec<&str>) -> Self {
        AttrInput::each(values)
    }
}

impl From<Vec<String>> for AttrInput {
    fn from(values: Vec<String>) -> Self {
        AttrInput::each(values)
    }
}

impl From<Vec<i64>> for AttrInput {
    fn from(values: Vec<i64>) -> Self {
        AttrInput::each(values)
    }
}

impl From<Vec<f64>> for AttrInput {
    fn from(values: Vec<f64>) -> Self {
        AttrInput::each(values)
    }
}
