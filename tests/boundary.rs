use minicart::prelude::*;


fn area(regions: &[LeafRegion]) -> f64 {
    regions.iter()
        .map(|r| r.width * r.height)
        .sum::<f64>()
}


/// A clean axis-aligned boundary on feature 0:
/// one vertical dividing line and two covering rectangles.
#[test]
fn vertical_boundary_on_feature_zero() {
    let rows = vec![
        vec![1.0, 1.0],
        vec![2.0, 8.0],
        vec![4.0, 2.0],
        vec![5.0, 9.0],
    ];
    let sample = Sample::from_rows(rows, vec![0, 0, 1, 1]);

    let mut tree = DecisionTree::new(Criterion::Gini);
    tree.fit(&sample);

    let boundary = Boundary::from_tree(&tree, 0.0, 0.0, 10.0, 10.0);

    assert_eq!(boundary.lines.len(), 1);
    let line = boundary.lines[0];
    assert_eq!(line.x1, 3.0);
    assert_eq!(line.x2, 3.0);
    assert_eq!(line.y1, 0.0);
    assert_eq!(line.y2, 10.0);

    assert_eq!(boundary.regions.len(), 2);
    let left = boundary.regions[0];
    let right = boundary.regions[1];

    assert_eq!(left.label, Some(0));
    assert_eq!((left.x, left.y, left.width, left.height),
               (0.0, 0.0, 3.0, 10.0));

    assert_eq!(right.label, Some(1));
    assert_eq!((right.x, right.y, right.width, right.height),
               (3.0, 0.0, 7.0, 10.0));

    // The rectangles cover the frame without overlap.
    assert_eq!(area(&boundary.regions), 100.0);
}


/// A split on feature 1 emits a horizontal line and
/// its children cover the lower/upper halves.
#[test]
fn horizontal_boundary_on_feature_one() {
    let rows = vec![
        vec![1.0, 1.0],
        vec![8.0, 2.0],
        vec![2.0, 7.0],
        vec![9.0, 8.0],
    ];
    let sample = Sample::from_rows(rows, vec![0, 0, 1, 1]);

    let mut tree = DecisionTree::new(Criterion::Gini);
    tree.fit(&sample);

    let boundary = Boundary::from_tree(&tree, 0.0, 0.0, 10.0, 10.0);

    assert_eq!(boundary.lines.len(), 1);
    let line = boundary.lines[0];
    assert_eq!(line.y1, 4.5);
    assert_eq!(line.y2, 4.5);
    assert_eq!(line.x1, 0.0);
    assert_eq!(line.x2, 10.0);

    assert_eq!(boundary.regions.len(), 2);
    assert_eq!(boundary.regions[0].label, Some(0));
    assert_eq!(boundary.regions[1].label, Some(1));
}


// Toy example  (labels at the grid corners)
//
// 10 _______________________
//   |       |               |
//   |   1   |               |
// 6 |_______|       2       |
//   |       |               |
//   |   0   |               |
//   |_______|_______________|
//  0        4              10
//
#[test]
fn nested_splits_clip_to_parent_rectangles() {
    let rows = vec![
        vec![2.0, 2.0],
        vec![2.0, 8.0],
        vec![6.0, 2.0],
        vec![6.0, 8.0],
        vec![7.0, 5.0],
    ];
    let sample = Sample::from_rows(rows, vec![0, 1, 2, 2, 2]);

    let mut tree = DecisionTree::new(Criterion::Gini);
    tree.fit(&sample);

    let boundary = Boundary::from_tree(&tree, 0.0, 0.0, 10.0, 10.0);

    // The root splits on feature 0 at 4;
    // the impure left half is split again on feature 1 at 5.
    assert_eq!(tree.n_leaves(), 3);
    assert_eq!(boundary.regions.len(), 3);
    assert_eq!(boundary.lines.len(), 2);

    // Pre-order: the root line comes first,
    // then the records of the left sub-tree.
    let root = boundary.lines[0];
    assert_eq!((root.x1, root.y1, root.x2, root.y2),
               (4.0, 0.0, 4.0, 10.0));

    // The nested horizontal line spans only the left half.
    let nested = boundary.lines[1];
    assert_eq!((nested.x1, nested.y1, nested.x2, nested.y2),
               (0.0, 5.0, 4.0, 5.0));

    let labels = boundary.regions.iter()
        .map(|r| r.label)
        .collect::<Vec<_>>();
    assert_eq!(labels, vec![Some(0), Some(1), Some(2)]);

    assert_eq!(area(&boundary.regions), 100.0);
}


#[test]
fn unfitted_tree_yields_empty_boundary() {
    let tree = DecisionTree::new(Criterion::Gini);
    let boundary = Boundary::from_tree(&tree, 0.0, 0.0, 1.0, 1.0);

    assert!(boundary.lines.is_empty());
    assert!(boundary.regions.is_empty());
}


#[test]
#[should_panic]
fn three_feature_tree_is_rejected() {
    let rows = vec![
        vec![0.0, 0.0, 1.0],
        vec![0.0, 0.0, 2.0],
    ];
    let sample = Sample::from_rows(rows, vec![0, 1]);

    let mut tree = DecisionTree::new(Criterion::Gini);
    tree.fit(&sample);

    // The only informative feature has index 2.
    Boundary::from_tree(&tree, 0.0, 0.0, 1.0, 1.0);
}


#[test]
fn boundary_plot_writes_a_bitmap() {
    let rows = vec![
        vec![1.0, 1.0],
        vec![2.0, 8.0],
        vec![4.0, 2.0],
        vec![5.0, 9.0],
    ];
    let sample = Sample::from_rows(rows, vec![0, 0, 1, 1]);

    let mut tree = DecisionTree::new(Criterion::Gini);
    tree.fit(&sample);

    let boundary = Boundary::from_tree(&tree, 0.0, 0.0, 10.0, 10.0);

    let mut path = std::env::temp_dir();
    path.push("minicart_boundary.png");
    boundary.plot(&path, 320, 240).unwrap();

    assert!(path.exists());
    std::fs::remove_file(path).unwrap();
}
