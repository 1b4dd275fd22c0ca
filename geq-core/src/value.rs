// geq-core/src/value.rs

use std::collections::BTreeMap;

use crate::options::Accessor;

/// A dynamically typed element of a plain sequence.
///
/// Plain sequences are heterogeneous: any element may be a number, a string,
/// a structured record or something that cannot be compared at all. Only
/// `Number` and `Str` take part in comparisons; everything else produces the
/// not-comparable sentinel at its index.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Number(f64),
    Str(String),
    Bool(bool),
    Null,
    /// A structured element. Accessors pull the comparable value out of it.
    Record(BTreeMap<String, Value>),
    List(Vec<Value>),
    /// Callable value, only meaningful as the `accessor` entry of a raw
    /// options record.
    Func(Accessor),
}

/// A borrowed comparable scalar: a number or a string.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scalar<'a> {
    Number(f64),
    Str(&'a str),
}

/// Which operand an accessor is being applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// The collection being compared (side `0`).
    Primary,
    /// The comparator collection (side `1`).
    Comparator,
}

impl Side {
    pub fn index(&self) -> usize {
        match self {
            Side::Primary => 0,
            Side::Comparator => 1,
        }
    }
}

impl Value {
    /// Builds a `Value::Record` from key/value pairs.
    pub fn record<K, I>(fields: I) -> Value
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        Value::Record(fields.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Returns the comparable view of this value, if it has one.
    pub fn as_scalar(&self) -> Option<Scalar<'_>> {
        match self {
            Value::Number(n) => Some(Scalar::Number(*n)),
            Value::Str(s) => Some(Scalar::Str(s)),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Field lookup on a record; `None` for every other variant.
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Record(fields) => fields.get(key),
            _ => None,
        }
    }

    /// Whether this is a structured (record) element.
    pub fn is_structured(&self) -> bool {
        matches!(self, Value::Record(_))
    }

    /// Short name of the variant, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::Str(_) => "string",
            Value::Bool(_) => "boolean",
            Value::Null => "null",
            Value::Record(_) => "record",
            Value::List(_) => "list",
            Value::Func(_) => "function",
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

impl From<Accessor> for Value {
    fn from(accessor: Accessor) -> Self {
        Value::Func(accessor)
    }
}

/// Plain sequence of numbers.
pub fn numbers(values: &[f64]) -> Vec<Value> {
    values.iter().map(|&n| Value::Number(n)).collect()
}

/// Plain sequence of strings.
pub fn strings(values: &[&str]) -> Vec<Value> {
    values.iter().map(|&s| Value::from(s)).collect()
}
