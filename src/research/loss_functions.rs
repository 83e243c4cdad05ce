//! Defines loss functions over a sample.
use crate::Sample;
use crate::tree::DecisionTree;


/// The fraction of rows of `sample` the fitted `tree` misclassifies.
/// Returns `0.0` for an empty sample.
pub fn zero_one_loss(sample: &Sample, tree: &DecisionTree) -> f64 {
    let n_sample = sample.shape().0;
    if n_sample == 0 { return 0.0; }

    let target = sample.target();

    tree.predict_all(sample)
        .into_iter()
        .zip(target)
        .map(|(hx, &y)| if hx != y { 1.0 } else { 0.0 })
        .sum::<f64>()
        / n_sample as f64
}


/// The fraction of rows of `sample` the fitted `tree`
/// classifies correctly.
pub fn accuracy(sample: &Sample, tree: &DecisionTree) -> f64 {
    1.0 - zero_one_loss(sample, tree)
}
