//! End-to-end tree training and classification on small boolean functions.

use quercus::{
    predicate, DecisionTree, Error, Feature, MissingBranchPolicy, PredicateFeature, SimpleRecord,
    SimpleSample,
};

fn boolean_features() -> Vec<Feature> {
    vec![
        Feature::equals("x1", true),
        Feature::equals("x1", false),
        Feature::equals("x2", true),
        Feature::equals("x2", false),
    ]
}

fn truth_table(labels: [bool; 4]) -> Vec<SimpleSample<bool>> {
    vec![
        SimpleSample::new(labels[0]).with("x1", true).with("x2", true),
        SimpleSample::new(labels[1]).with("x1", true).with("x2", false),
        SimpleSample::new(labels[2]).with("x1", false).with("x2", true),
        SimpleSample::new(labels[3]).with("x1", false).with("x2", false),
    ]
}

/// Learning AND grows this tree:
///
/// ```text
///            x1 = true
///            /       \
///         false      true
///          /            \
///     LABEL_FALSE     x2 = true
///                      /    \
///                   false   true
///                    /         \
///              LABEL_FALSE   LABEL_TRUE
/// ```
#[test]
fn trains_the_and_function() {
    let tree = DecisionTree::<bool>::params()
        .train(&truth_table([true, false, false, false]), &boolean_features())
        .unwrap();

    let root = tree.root();
    assert_eq!(root.name(), "x1 = true");
    assert_eq!(root.label(), None);

    let negative = &root.children()[0];
    assert_eq!(negative.branch(), "false");
    assert_eq!(negative.name(), "Leaf");
    assert_eq!(negative.label(), Some(&false));

    let positive = &root.children()[1];
    assert_eq!(positive.branch(), "true");
    assert_eq!(positive.name(), "x2 = true");
    assert_eq!(positive.label(), None);
    assert_eq!(positive.children()[0].label(), Some(&false));
    assert_eq!(positive.children()[1].label(), Some(&true));
}

/// Learning OR splits on x1 and only needs x2 on the negative branch.
#[test]
fn trains_the_or_function() {
    let tree = DecisionTree::<bool>::params()
        .train(&truth_table([true, true, true, false]), &boolean_features())
        .unwrap();

    let root = tree.root();
    assert_eq!(root.name(), "x1 = true");

    let negative = &root.children()[0];
    assert_eq!(negative.name(), "x2 = true");
    assert_eq!(negative.children()[0].label(), Some(&false));
    assert_eq!(negative.children()[1].label(), Some(&true));

    let positive = &root.children()[1];
    assert_eq!(positive.name(), "Leaf");
    assert_eq!(positive.label(), Some(&true));
}

/// Learning XOR needs x2 on both branches.
#[test]
fn trains_the_xor_function() {
    let tree = DecisionTree::<bool>::params()
        .train(&truth_table([false, true, true, false]), &boolean_features())
        .unwrap();

    let root = tree.root();
    assert_eq!(root.name(), "x1 = true");

    let negative = &root.children()[0];
    assert_eq!(negative.name(), "x2 = true");
    assert_eq!(negative.label(), None);
    assert_eq!(negative.children()[0].label(), Some(&false));
    assert_eq!(negative.children()[1].label(), Some(&true));

    let positive = &root.children()[1];
    assert_eq!(positive.name(), "x2 = true");
    assert_eq!(positive.label(), None);
    assert_eq!(positive.children()[0].label(), Some(&true));
    assert_eq!(positive.children()[1].label(), Some(&false));
}

#[test]
fn trains_a_threshold_feature() {
    let samples = vec![
        SimpleSample::new(false).with("x1", 1),
        SimpleSample::new(false).with("x1", 2),
        SimpleSample::new(true).with("x1", 3),
        SimpleSample::new(true).with("x1", 4),
    ];
    let features = vec![
        Feature::predicate("x1", predicate::more_than(0.0)),
        Feature::predicate("x1", predicate::more_than(1.0)),
        Feature::predicate("x1", predicate::more_than(2.0)),
    ];

    let tree = DecisionTree::<bool>::params()
        .train(&samples, &features)
        .unwrap();

    let root = tree.root();
    assert_eq!(root.name(), "x1 > 2");
    assert_eq!(root.children()[0].branch(), "false");
    assert_eq!(root.children()[0].label(), Some(&false));
    assert_eq!(root.children()[1].branch(), "true");
    assert_eq!(root.children()[1].label(), Some(&true));
}

#[test]
fn classifies_the_and_function() {
    let tree = DecisionTree::<bool>::params()
        .train(&truth_table([true, false, false, false]), &boolean_features())
        .unwrap();

    let record = |x1: bool, x2: bool| SimpleRecord::new().with("x1", x1).with("x2", x2);
    assert_eq!(tree.classify(&record(true, true)).unwrap(), true);
    assert_eq!(tree.classify(&record(true, false)).unwrap(), false);
    assert_eq!(tree.classify(&record(false, true)).unwrap(), false);
    assert_eq!(tree.classify(&record(false, false)).unwrap(), false);
}

fn grouped_bin_data() -> (Vec<SimpleSample<bool>>, Vec<Feature>) {
    let samples = vec![
        SimpleSample::new(true).with("x1", 1).with("x2", 1),
        SimpleSample::new(true).with("x1", 1).with("x2", 1),
        SimpleSample::new(false).with("x1", 1).with("x2", 0),
        SimpleSample::new(false).with("x1", 0).with("x2", 1),
        SimpleSample::new(false).with("x1", 0).with("x2", 0),
    ];
    let features = vec![
        Feature::equals("x1", 0),
        Feature::equals("x1", 1),
        Feature::grouped(
            "x2",
            vec![
                PredicateFeature::equals("x2", 0),
                PredicateFeature::equals("x2", 1),
                PredicateFeature::equals("x2", 2),
            ],
        )
        .unwrap(),
    ];
    (samples, features)
}

/// A value never observed in training reaches a split with no matching
/// branch; by default the deepest node answers with its majority label.
#[test]
fn classifies_across_a_missing_branch() {
    let (samples, features) = grouped_bin_data();
    let tree = DecisionTree::<bool>::params()
        .train(&samples, &features)
        .unwrap();

    // x2 = 2 never occurred, so the grouped split has no branch for it
    let unseen = SimpleRecord::new().with("x1", 1).with("x2", 2);
    assert_eq!(tree.classify(&unseen).unwrap(), true);
}

#[test]
fn strict_policy_fails_on_a_missing_branch() {
    let (samples, features) = grouped_bin_data();
    let tree = DecisionTree::<bool>::params()
        .missing_branch(MissingBranchPolicy::Fail)
        .train(&samples, &features)
        .unwrap();

    let unseen = SimpleRecord::new().with("x1", 1).with("x2", 2);
    match tree.classify(&unseen) {
        Err(Error::BranchNotFound { node, .. }) => {
            assert_eq!(node, "x2 multi split with predicates")
        }
        other => panic!("expected BranchNotFound, got {:?}", other),
    }
}

#[test]
fn classification_tolerates_missing_columns() {
    let tree = DecisionTree::<bool>::params()
        .train(&truth_table([true, false, false, false]), &boolean_features())
        .unwrap();

    // no x2 at all: the predicate reads as false and traversal continues
    let partial = SimpleRecord::new().with("x1", true);
    assert_eq!(tree.classify(&partial).unwrap(), false);
}

#[test]
fn retraining_is_idempotent() {
    let samples = truth_table([false, true, true, false]);
    let features = boolean_features();

    let first = DecisionTree::<bool>::params()
        .train(&samples, &features)
        .unwrap();
    let second = DecisionTree::<bool>::params()
        .train(&samples, &features)
        .unwrap();

    assert_eq!(first, second);
    assert_eq!(first.export_json().unwrap(), second.export_json().unwrap());
}
