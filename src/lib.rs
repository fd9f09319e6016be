//!
//! # Decision tree learning over named-column records
//!
//! `quercus` trains classification models from labeled tabular data by
//! recursive partitioning and combines them into bagged ensembles. Records
//! are plain column-name → optional-value mappings, and splits are driven by
//! [`Feature`]s — predicate tests, categorical memberships or grouped
//! predicate bins over a column — so heterogeneous and partially missing data
//! needs no up-front encoding into a numeric matrix.
//!
//! # The big picture
//!
//! Training data ([`Sample`]s) and a candidate [`Feature`] list flow into a
//! [`DecisionTree`], which grows nodes by repeatedly picking the feature with
//! the lowest weighted [`Impurity`] until a stopping rule fires. A
//! [`RandomForest`] fans that pipeline out over bootstrapped rows and
//! subsampled columns and classifies by majority vote.
//!
//! All hyperparameters go through checked parameter sets ([`ParamGuard`]),
//! fitted models are immutable and safe to share between threads, and a tree
//! can be exported into a JSON document understood by external tooling.
//!
//! # Example
//!
//! ```rust
//! use quercus::{DecisionTree, Feature, SimpleRecord, SimpleSample};
//!
//! // the boolean AND function as a labeled truth table
//! let samples = vec![
//!     SimpleSample::new(true).with("x1", true).with("x2", true),
//!     SimpleSample::new(false).with("x1", true).with("x2", false),
//!     SimpleSample::new(false).with("x1", false).with("x2", true),
//!     SimpleSample::new(false).with("x1", false).with("x2", false),
//! ];
//! let features = vec![
//!     Feature::equals("x1", true),
//!     Feature::equals("x2", true),
//! ];
//!
//! let tree = DecisionTree::<bool>::params()
//!     .train(&samples, &features)
//!     .unwrap();
//!
//! let query = SimpleRecord::new().with("x1", true).with("x2", true);
//! assert_eq!(tree.classify(&query).unwrap(), true);
//! ```
//!

mod dataset;
mod ensemble;
pub mod error;
mod executor;
mod feature;
mod histogram;
mod impurity;
mod param_guard;
mod split;
mod tree;

pub use dataset::{Label, Record, Sample, SimpleRecord, SimpleSample, Value};
pub use ensemble::{RandomForest, RandomForestParams, RandomForestValidParams};
pub use executor::{InlineExecutor, TaskExecutor, ThreadPoolExecutor};
pub use feature::{
    predicate, Branch, CategoricalFeature, Feature, GroupedPredicates, NamedPredicate,
    PredicateFeature,
};
pub use histogram::LabelHistogram;
pub use impurity::Impurity;
pub use param_guard::ParamGuard;
pub use split::BestSplitFinder;
pub use tree::{
    DecisionTree, DecisionTreeParams, DecisionTreeValidParams, MissingBranchPolicy, Node, NodeIter,
};

pub use error::{Error, Result};
