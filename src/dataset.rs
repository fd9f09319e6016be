//! Records, column values and class labels
//!
//! Training data is a list of records, each exposing a mapping from column
//! name to an optional [`Value`] plus an assigned class [`Label`]. Records are
//! owned by the caller and never mutated here.

use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A single column value of a record.
///
/// `Display` produces the textual form used to name categorical branches, so
/// it must stay stable across releases.
#[derive(Debug, Clone)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl Value {
    /// Numeric view of the value, if it has one.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(v) => Some(*v as f64),
            Value::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(v) => Some(v),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Bool(v) => write!(f, "{}", v),
            Value::Int(v) => write!(f, "{}", v),
            Value::Float(v) => write!(f, "{}", v),
            Value::Text(v) => write!(f, "{}", v),
        }
    }
}

// Floats are compared and hashed by their bit pattern so that features
// holding values stay usable as hash keys.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a.to_bits() == b.to_bits(),
            (Value::Text(a), Value::Text(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Value::Bool(v) => {
                0u8.hash(state);
                v.hash(state);
            }
            Value::Int(v) => {
                1u8.hash(state);
                v.hash(state);
            }
            Value::Float(v) => {
                2u8.hash(state);
                v.to_bits().hash(state);
            }
            Value::Text(v) => {
                3u8.hash(state);
                v.hash(state);
            }
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v as i64)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

/// Discrete class labels
///
/// Labels are comparable and hashable by value and act as histogram keys
/// during training. `name` is the human readable form, `print_value` the form
/// embedded verbatim into the tree export.
pub trait Label: Clone + Eq + Hash + fmt::Debug {
    fn name(&self) -> String;

    fn print_value(&self) -> String {
        self.name()
    }
}

impl Label for bool {
    fn name(&self) -> String {
        self.to_string()
    }
}

impl Label for i64 {
    fn name(&self) -> String {
        self.to_string()
    }
}

impl Label for usize {
    fn name(&self) -> String {
        self.to_string()
    }
}

impl Label for String {
    fn name(&self) -> String {
        self.clone()
    }
}

impl Label for &'static str {
    fn name(&self) -> String {
        self.to_string()
    }
}

/// A record with named, optional column values.
pub trait Record {
    /// Value of the given column, or `None` if the record does not carry it.
    fn value(&self, column: &str) -> Option<&Value>;
}

/// A labeled record used for training.
pub trait Sample: Record {
    type Label: Label;

    fn label(&self) -> &Self::Label;
}

impl<R: Record + ?Sized> Record for &R {
    fn value(&self, column: &str) -> Option<&Value> {
        (**self).value(column)
    }
}

impl<S: Sample + ?Sized> Sample for &S {
    type Label = S::Label;

    fn label(&self) -> &Self::Label {
        (**self).label()
    }
}

/// Map-backed labeled record.
#[derive(Debug, Clone, PartialEq)]
pub struct SimpleSample<L: Label> {
    values: HashMap<String, Value>,
    label: L,
}

impl<L: Label> SimpleSample<L> {
    pub fn new(label: L) -> Self {
        SimpleSample {
            values: HashMap::new(),
            label,
        }
    }

    pub fn with(mut self, column: &str, value: impl Into<Value>) -> Self {
        self.values.insert(column.to_string(), value.into());
        self
    }
}

impl<L: Label> Record for SimpleSample<L> {
    fn value(&self, column: &str) -> Option<&Value> {
        self.values.get(column)
    }
}

impl<L: Label> Sample for SimpleSample<L> {
    type Label = L;

    fn label(&self) -> &L {
        &self.label
    }
}

/// Map-backed unlabeled record, for classification input.
#[derive(Debug, Clone, Default)]
pub struct SimpleRecord {
    values: HashMap<String, Value>,
}

impl SimpleRecord {
    pub fn new() -> Self {
        SimpleRecord {
            values: HashMap::new(),
        }
    }

    pub fn with(mut self, column: &str, value: impl Into<Value>) -> Self {
        self.values.insert(column.to_string(), value.into());
        self
    }
}

impl Record for SimpleRecord {
    fn value(&self, column: &str) -> Option<&Value> {
        self.values.get(column)
    }
}
