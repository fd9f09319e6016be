//! Predicate vocabulary
//!
//! Ready-made column tests for building [`PredicateFeature`]s, each paired
//! with the display name that identifies it in branch names, tree exports and
//! feature equality. The name and the closure are generated together here so
//! they cannot drift apart; custom predicates built with
//! [`NamedPredicate::new`] carry that responsibility themselves.
//!
//! [`PredicateFeature`]: crate::PredicateFeature

use std::fmt;
use std::sync::Arc;

use crate::dataset::Value;

pub(crate) type PredicateFn = Arc<dyn Fn(&Value) -> bool + Send + Sync>;

/// A column test paired with its display name.
#[derive(Clone)]
pub struct NamedPredicate {
    pub(crate) test: PredicateFn,
    pub(crate) name: String,
}

impl NamedPredicate {
    /// Pair an arbitrary test with a display name.
    ///
    /// The name takes part in feature equality, so it must describe the test
    /// accurately and uniquely within a column.
    pub fn new(name: impl Into<String>, test: impl Fn(&Value) -> bool + Send + Sync + 'static) -> Self {
        NamedPredicate {
            test: Arc::new(test),
            name: name.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Debug for NamedPredicate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("NamedPredicate")
            .field("name", &self.name)
            .finish()
    }
}

/// Matches values equal to `value`.
pub fn equals(value: impl Into<Value>) -> NamedPredicate {
    let value = value.into();
    let name = format!("= {}", value);
    NamedPredicate::new(name, move |v| *v == value)
}

/// Matches numeric values strictly greater than `value`.
pub fn more_than(value: f64) -> NamedPredicate {
    NamedPredicate::new(format!("> {}", value), move |v| {
        v.as_f64().map_or(false, |x| x > value)
    })
}

/// Matches numeric values strictly less than `value`.
pub fn less_than(value: f64) -> NamedPredicate {
    NamedPredicate::new(format!("< {}", value), move |v| {
        v.as_f64().map_or(false, |x| x < value)
    })
}

/// Matches numeric values greater than or equal to `value`.
pub fn at_least(value: f64) -> NamedPredicate {
    NamedPredicate::new(format!(">= {}", value), move |v| {
        v.as_f64().map_or(false, |x| x >= value)
    })
}

/// Matches numeric values less than or equal to `value`.
pub fn at_most(value: f64) -> NamedPredicate {
    NamedPredicate::new(format!("<= {}", value), move |v| {
        v.as_f64().map_or(false, |x| x <= value)
    })
}

/// Matches numeric values in the half-open interval `(from, to]`.
pub fn between(from: f64, to: f64) -> NamedPredicate {
    NamedPredicate::new(format!("between {} and {}", from, to), move |v| {
        v.as_f64().map_or(false, |x| x > from && x <= to)
    })
}

/// Matches text values starting with `prefix`.
pub fn starts_with(prefix: &str) -> NamedPredicate {
    let prefix = prefix.to_string();
    NamedPredicate::new(format!("starts with {}", prefix), move |v| {
        v.as_str().map_or(false, |s| s.starts_with(&prefix))
    })
}

/// Matches text values ending with `suffix`.
pub fn ends_with(suffix: &str) -> NamedPredicate {
    let suffix = suffix.to_string();
    NamedPredicate::new(format!("ends with {}", suffix), move |v| {
        v.as_str().map_or(false, |s| s.ends_with(&suffix))
    })
}

/// Matches text values containing `needle`.
pub fn contains(needle: &str) -> NamedPredicate {
    let needle = needle.to_string();
    NamedPredicate::new(format!("contains {}", needle), move |v| {
        v.as_str().map_or(false, |s| s.contains(&needle))
    })
}
