use minicart::prelude::*;

use rand::prelude::*;
use rand_distr::Normal;


/// Labels drawn as a deterministic function of the features,
/// over a coarse grid so that duplicate values are common.
fn grid_sample(n_sample: usize, seed: u64) -> Sample {
    let mut rng = StdRng::seed_from_u64(seed);

    let rows = (0..n_sample)
        .map(|_| {
            vec![
                rng.gen_range(0..5) as f64,
                rng.gen_range(0..5) as f64,
                rng.gen_range(0..3) as f64,
            ]
        })
        .collect::<Vec<_>>();

    let target = rows.iter()
        .map(|row| {
            let mut label = 0;
            if row[0] > 2.0 { label += 1; }
            if row[1] > 1.0 { label += 1; }
            label
        })
        .collect::<Vec<i64>>();

    Sample::from_rows(rows, target)
}


#[test]
fn repeated_fits_grow_identical_trees() {
    let sample = grid_sample(80, 42);

    let mut first = DecisionTree::new(Criterion::Gini);
    first.fit(&sample);

    let mut second = DecisionTree::new(Criterion::Gini);
    second.fit(&sample);

    assert_eq!(first, second);

    // The serialized forms agree as well,
    // so the structures are identical node by node.
    let first = serde_json::to_string(&first).unwrap();
    let second = serde_json::to_string(&second).unwrap();
    assert_eq!(first, second);
}


/// The labels are a function of the features,
/// so rows with equal feature vectors never conflict and
/// the fully grown tree reaches zero training error.
#[test]
fn consistent_labeling_is_learned_exactly() {
    let sample = grid_sample(120, 7);

    let mut tree = DecisionTree::new(Criterion::Gini);
    tree.fit(&sample);

    assert_eq!(zero_one_loss(&sample, &tree), 0.0);
    assert_eq!(accuracy(&sample, &tree), 1.0);
    assert!(tree.depth() >= 1);
    assert!(tree.n_leaves() >= 1);
}


/// Conflicting labels on duplicate rows must not loop forever:
/// once no cut point separates the conflict,
/// the branch terminates as a majority-vote leaf.
#[test]
fn conflicting_duplicates_terminate() {
    let mut rng = StdRng::seed_from_u64(3);

    let rows = (0..100)
        .map(|_| vec![rng.gen_range(0..2) as f64, rng.gen_range(0..2) as f64])
        .collect::<Vec<_>>();
    let target = (0..100)
        .map(|_| rng.gen_range(0..3))
        .collect::<Vec<i64>>();
    let sample = Sample::from_rows(rows, target);

    let mut tree = DecisionTree::new(Criterion::Gini);
    tree.fit(&sample);

    assert!(tree.depth() >= 1);
    // Two binary features admit at most four leaves.
    assert!(tree.n_leaves() <= 4);
}


/// Two well-separated gaussian blobs:
/// continuous feature values are almost surely distinct,
/// so the grown tree separates the training sample.
#[test]
fn gaussian_blobs_are_separated() {
    let mut rng = StdRng::seed_from_u64(11);
    let lo = Normal::new(0.0, 1.0).unwrap();
    let hi = Normal::new(10.0, 1.0).unwrap();

    let mut rows = Vec::new();
    let mut target = Vec::new();
    for _ in 0..50 {
        rows.push(vec![lo.sample(&mut rng), lo.sample(&mut rng)]);
        target.push(-1);
        rows.push(vec![hi.sample(&mut rng), hi.sample(&mut rng)]);
        target.push(1);
    }
    let sample = Sample::from_rows(rows, target);

    let mut tree = DecisionTree::new(Criterion::Gini);
    tree.fit(&sample);

    assert_eq!(zero_one_loss(&sample, &tree), 0.0);

    let predictions = tree.predict_all(&sample);
    let again = tree.predict_all(&sample);
    assert_eq!(predictions, again);
}


/// Every leaf of a two-feature tree owns one boundary rectangle and
/// the rectangles partition the bounding frame.
#[test]
fn leaf_regions_partition_the_frame() {
    let mut rng = StdRng::seed_from_u64(19);

    let rows = (0..60)
        .map(|_| vec![rng.gen_range(0..6) as f64, rng.gen_range(0..6) as f64])
        .collect::<Vec<_>>();
    let target = rows.iter()
        .map(|row| if row[0] + row[1] > 5.0 { 1 } else { 0 })
        .collect::<Vec<i64>>();
    let sample = Sample::from_rows(rows, target);

    let mut tree = DecisionTree::new(Criterion::Gini);
    tree.fit(&sample);

    let boundary = Boundary::from_tree(&tree, -1.0, -1.0, 6.0, 6.0);

    assert_eq!(boundary.regions.len(), tree.n_leaves());

    let total = boundary.regions.iter()
        .map(|r| r.width * r.height)
        .sum::<f64>();
    assert!((total - 49.0).abs() < 1e-9);

    // One dividing line per branch node.
    assert_eq!(boundary.lines.len(), tree.n_leaves() - 1);
}
