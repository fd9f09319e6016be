//! Split features
//!
//! A [`Feature`] is a test over one data column that partitions records into
//! named branches. Three variants exist: a [`PredicateFeature`] splits in two
//! (`"false"`/`"true"`), a [`CategoricalFeature`] splits into one branch per
//! declared category, and a [`GroupedPredicates`] feature splits into one
//! branch per sub-predicate (typically the bins of a discretised numeric
//! column). Splitting is deterministic: identical input always produces the
//! same branches in the same order, with per-branch record order preserved.
//!
//! Feature equality is defined over the column and the display name, not the
//! test itself — a closure cannot be compared. Constructors generate the name
//! and the test together; code building a [`NamedPredicate`] by hand must keep
//! the two in lock-step or equality silently lies.

pub mod predicate;

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::dataset::{Record, Value};
use crate::error::{Error, Result};

pub use predicate::NamedPredicate;

/// One named partition produced by a split.
#[derive(Debug)]
pub struct Branch<'a, S> {
    pub name: String,
    pub samples: Vec<&'a S>,
}

impl<'a, S> Branch<'a, S> {
    fn new(name: impl Into<String>, samples: Vec<&'a S>) -> Self {
        Branch {
            name: name.into(),
            samples,
        }
    }
}

/// Binary split on a single column test.
#[derive(Clone)]
pub struct PredicateFeature {
    column: String,
    name: String,
    test: predicate::PredicateFn,
}

impl PredicateFeature {
    /// Feature named `"<column> <predicate name>"`.
    pub fn new(column: impl Into<String>, predicate: NamedPredicate) -> Self {
        let column = column.into();
        let name = format!("{} {}", column, predicate.name);
        PredicateFeature {
            column,
            name,
            test: predicate.test,
        }
    }

    /// Equality test against `value`, e.g. `equals("x1", true)` is named
    /// `"x1 = true"`.
    pub fn equals(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new(column, predicate::equals(value))
    }

    /// True if the record's column value passes the test. A missing value
    /// never passes.
    pub fn matches(&self, record: &impl Record) -> bool {
        match record.value(&self.column) {
            Some(value) => (self.test)(value),
            None => false,
        }
    }

    pub fn column(&self) -> &str {
        &self.column
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Debug for PredicateFeature {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("PredicateFeature")
            .field("column", &self.column)
            .field("name", &self.name)
            .finish()
    }
}

// The closure cannot be compared, so the display name stands in for it.
impl PartialEq for PredicateFeature {
    fn eq(&self, other: &Self) -> bool {
        self.column == other.column && self.name == other.name
    }
}

impl Eq for PredicateFeature {}

impl Hash for PredicateFeature {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.column.hash(state);
        self.name.hash(state);
    }
}

/// Multi-way split over a fixed set of category values.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CategoricalFeature {
    column: String,
    name: String,
    categories: Vec<Value>,
}

impl CategoricalFeature {
    /// Feature over an explicit category list. Branches are emitted in the
    /// order given here.
    pub fn with_categories(column: impl Into<String>, categories: Vec<Value>) -> Self {
        let column = column.into();
        let name = format!("{} with {} categories", column, categories.len());
        CategoricalFeature {
            column,
            name,
            categories,
        }
    }

    /// Derive the category set from training data: the distinct values of the
    /// column, in first-seen order. Records without the column are skipped.
    pub fn from_data<S: Record>(column: impl Into<String>, samples: &[S]) -> Self {
        let column = column.into();
        let mut categories: Vec<Value> = Vec::new();
        for sample in samples {
            if let Some(value) = sample.value(&column) {
                if !categories.contains(value) {
                    categories.push(value.clone());
                }
            }
        }
        Self::with_categories(column, categories)
    }

    /// True if the record's column value is one of the declared categories.
    pub fn matches(&self, record: &impl Record) -> bool {
        match record.value(&self.column) {
            Some(value) => self.categories.contains(value),
            None => false,
        }
    }

    pub fn column(&self) -> &str {
        &self.column
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn categories(&self) -> &[Value] {
        &self.categories
    }
}

/// Multi-way split over an ordered group of predicates on one column.
///
/// Records are assigned to the first matching predicate, so overlapping
/// predicates resolve by position. Records matching none are dropped from the
/// split.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GroupedPredicates {
    column: String,
    name: String,
    predicates: Vec<PredicateFeature>,
}

impl GroupedPredicates {
    /// Group predicates over a shared column. Fails on an empty group or a
    /// predicate bound to a different column.
    pub fn new(column: impl Into<String>, predicates: Vec<PredicateFeature>) -> Result<Self> {
        let column = column.into();
        if predicates.is_empty() {
            return Err(Error::Parameters(
                "a predicate group needs at least one predicate".to_string(),
            ));
        }
        if let Some(stray) = predicates.iter().find(|p| p.column() != column) {
            return Err(Error::Parameters(format!(
                "predicate {} does not test column {}",
                stray.name(),
                column
            )));
        }
        let name = format!("{} multi split with predicates", column);
        Ok(GroupedPredicates {
            column,
            name,
            predicates,
        })
    }

    /// First predicate in the group that the record passes.
    pub fn matching_predicate(&self, record: &impl Record) -> Option<&PredicateFeature> {
        self.predicates.iter().find(|p| p.matches(record))
    }

    pub fn matches(&self, record: &impl Record) -> bool {
        self.matching_predicate(record).is_some()
    }

    pub fn column(&self) -> &str {
        &self.column
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn predicates(&self) -> &[PredicateFeature] {
        &self.predicates
    }
}

/// A split test over one data column.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Feature {
    Predicate(PredicateFeature),
    Categorical(CategoricalFeature),
    Grouped(GroupedPredicates),
}

impl Feature {
    /// Binary feature from a named predicate.
    pub fn predicate(column: impl Into<String>, predicate: NamedPredicate) -> Self {
        Feature::Predicate(PredicateFeature::new(column, predicate))
    }

    /// Binary equality feature, e.g. `Feature::equals("x1", true)`.
    pub fn equals(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Feature::Predicate(PredicateFeature::equals(column, value))
    }

    /// Categorical feature over an explicit category list.
    pub fn categorical(column: impl Into<String>, categories: Vec<Value>) -> Self {
        Feature::Categorical(CategoricalFeature::with_categories(column, categories))
    }

    /// Categorical feature with categories derived from training data.
    pub fn categorical_from_data<S: Record>(column: impl Into<String>, samples: &[S]) -> Self {
        Feature::Categorical(CategoricalFeature::from_data(column, samples))
    }

    /// Grouped multi-way feature over predicates sharing one column.
    pub fn grouped(column: impl Into<String>, predicates: Vec<PredicateFeature>) -> Result<Self> {
        GroupedPredicates::new(column, predicates).map(Feature::Grouped)
    }

    pub fn column(&self) -> &str {
        match self {
            Feature::Predicate(f) => f.column(),
            Feature::Categorical(f) => f.column(),
            Feature::Grouped(f) => f.column(),
        }
    }

    /// Display name; together with the column it identifies the feature.
    pub fn name(&self) -> &str {
        match self {
            Feature::Predicate(f) => f.name(),
            Feature::Categorical(f) => f.name(),
            Feature::Grouped(f) => f.name(),
        }
    }

    /// Membership test. Total: a record missing the column is simply `false`.
    pub fn matches(&self, record: &impl Record) -> bool {
        match self {
            Feature::Predicate(f) => f.matches(record),
            Feature::Categorical(f) => f.matches(record),
            Feature::Grouped(f) => f.matches(record),
        }
    }

    /// Partition `samples` into named branches.
    ///
    /// * Predicate: `"false"` branch, then `"true"`, absent sides skipped.
    /// * Categorical: one branch per declared category in declaration order,
    ///   empty branches included; records with unknown or missing values are
    ///   dropped.
    /// * Grouped: one branch per matched sub-predicate in group order, named
    ///   after the sub-predicate; non-matching records are dropped.
    pub fn split<'a, S: Record>(&self, samples: &[&'a S]) -> Vec<Branch<'a, S>> {
        match self {
            Feature::Predicate(feature) => {
                let mut no = Vec::new();
                let mut yes = Vec::new();
                for &sample in samples {
                    if feature.matches(&sample) {
                        yes.push(sample);
                    } else {
                        no.push(sample);
                    }
                }
                let mut branches = Vec::new();
                if !no.is_empty() {
                    branches.push(Branch::new("false", no));
                }
                if !yes.is_empty() {
                    branches.push(Branch::new("true", yes));
                }
                branches
            }
            Feature::Categorical(feature) => {
                let mut buckets: Vec<Vec<&'a S>> =
                    feature.categories.iter().map(|_| Vec::new()).collect();
                for &sample in samples {
                    if let Some(value) = sample.value(&feature.column) {
                        if let Some(idx) = feature.categories.iter().position(|c| c == value) {
                            buckets[idx].push(sample);
                        }
                    }
                }
                feature
                    .categories
                    .iter()
                    .zip(buckets)
                    .map(|(category, bucket)| Branch::new(category.to_string(), bucket))
                    .collect()
            }
            Feature::Grouped(feature) => {
                let mut buckets: Vec<Vec<&'a S>> =
                    feature.predicates.iter().map(|_| Vec::new()).collect();
                for &sample in samples {
                    if let Some(idx) = feature.predicates.iter().position(|p| p.matches(&sample)) {
                        buckets[idx].push(sample);
                    }
                }
                feature
                    .predicates
                    .iter()
                    .zip(buckets)
                    .filter(|(_, bucket)| !bucket.is_empty())
                    .map(|(predicate, bucket)| Branch::new(predicate.name(), bucket))
                    .collect()
            }
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
