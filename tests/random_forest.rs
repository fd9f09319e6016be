//! Random forest ensemble tests.

use rand::rngs::SmallRng;
use rand::SeedableRng;

use quercus::{Error, Feature, ParamGuard, RandomForest, SimpleRecord, SimpleSample};

/// 40 rows where column "y" decides the label and "noise" carries nothing.
fn separable_data() -> Vec<SimpleSample<bool>> {
    (0..40)
        .map(|i| {
            let positive = i % 5 != 0;
            SimpleSample::new(positive)
                .with("y", positive)
                .with("noise", i % 3)
        })
        .collect()
}

fn separable_features() -> Vec<Feature> {
    vec![
        Feature::equals("y", true),
        Feature::equals("noise", 0),
        Feature::equals("noise", 1),
    ]
}

#[test]
fn rejects_bad_fractions_before_training() {
    // empty training data: if validation did not come first, training would
    // fail with NotEnoughSamples instead of a parameter error
    let samples: Vec<SimpleSample<bool>> = Vec::new();

    for fraction in [0.0, 1.0, -0.5, 2.0] {
        let result = RandomForest::<bool>::params(5)
            .bootstrap_fraction(fraction)
            .train(&samples, &separable_features());
        assert!(matches!(result, Err(Error::Parameters(_))));

        let result = RandomForest::<bool>::params(5)
            .feature_fraction(fraction)
            .train(&samples, &separable_features());
        assert!(matches!(result, Err(Error::Parameters(_))));
    }
}

#[test]
fn rejects_fewer_than_two_trees_before_training() {
    let samples: Vec<SimpleSample<bool>> = Vec::new();
    let result = RandomForest::<bool>::params(1).train(&samples, &separable_features());
    assert!(matches!(result, Err(Error::Parameters(_))));
}

#[test]
fn trains_one_model_per_tree() {
    let forest = RandomForest::<bool>::params(8)
        .bootstrap_fraction(0.9)
        .feature_fraction(0.9)
        .train(&separable_data(), &separable_features())
        .unwrap();

    assert_eq!(forest.trees().len(), 8);
}

#[test]
fn majority_vote_follows_the_decisive_column() {
    let forest = RandomForest::<bool>::params(15)
        .bootstrap_fraction(0.9)
        .feature_fraction(0.9)
        .seed(7)
        .train(&separable_data(), &separable_features())
        .unwrap();

    let positive = SimpleRecord::new().with("y", true).with("noise", 1);
    let negative = SimpleRecord::new().with("y", false).with("noise", 1);
    assert_eq!(forest.classify(&positive).unwrap(), true);
    assert_eq!(forest.classify(&negative).unwrap(), false);
}

#[test]
fn homogeneous_data_yields_a_unanimous_vote() {
    // every tree collapses to a leaf regardless of its bootstrap draw
    let samples: Vec<_> = (0..30)
        .map(|i| SimpleSample::new(true).with("y", i % 2 == 0))
        .collect();

    let forest = RandomForest::<bool>::params(5)
        .train(&samples, &[Feature::equals("y", true)])
        .unwrap();

    let record = SimpleRecord::new().with("y", false);
    assert_eq!(forest.classify(&record).unwrap(), true);
}

#[test]
fn a_fixed_seed_reproduces_the_forest() {
    let samples = separable_data();
    let features = separable_features();

    let first = RandomForest::<bool>::params(10)
        .bootstrap_fraction(0.8)
        .feature_fraction(0.6)
        .seed(42)
        .train(&samples, &features)
        .unwrap();
    let second = RandomForest::<bool>::params(10)
        .bootstrap_fraction(0.8)
        .feature_fraction(0.6)
        .seed(42)
        .train(&samples, &features)
        .unwrap();

    assert_eq!(first, second);
}

#[test]
fn an_injected_generator_reproduces_the_forest() {
    let samples = separable_data();
    let features = separable_features();
    let params = RandomForest::<bool>::params(6)
        .bootstrap_fraction(0.7)
        .feature_fraction(0.7)
        .check()
        .unwrap();

    let first = params
        .train_with_rng(&samples, &features, &mut SmallRng::seed_from_u64(99))
        .unwrap();
    let second = params
        .train_with_rng(&samples, &features, &mut SmallRng::seed_from_u64(99))
        .unwrap();

    assert_eq!(first, second);
}
