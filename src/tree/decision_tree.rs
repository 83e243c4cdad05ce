//! Defines the decision tree classifier.
use rayon::prelude::*;

use serde::{Serialize, Deserialize};

use std::path::Path;
use std::fs::File;
use std::io::prelude::*;
use std::collections::HashMap;

use crate::Sample;
use crate::common::checker;
use super::node::*;
use super::split_rule::*;
use super::criterion::Criterion;


/// The CART decision tree classifier.
///
/// [`DecisionTree::fit`] grows a binary tree over the given sample:
/// each node keeps the split minimizing the weighted Gini impurity
/// and the recursion stops once a node becomes pure
/// or no feature admits a cut point.
/// The grown tree is kept until the next call to `fit`.
///
/// # Example
///
/// ```
/// use minicart::prelude::*;
///
/// let rows = vec![
///     vec![1.0], vec![2.0], vec![3.0], vec![4.0],
/// ];
/// let sample = Sample::from_rows(rows, vec![0, 0, 1, 1]);
///
/// let mut tree = DecisionTree::new(Criterion::Gini);
/// tree.fit(&sample);
///
/// assert_eq!(tree.n_leaves(), 2);
/// assert_eq!(tree.predict(&[4.0]), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTree {
    criterion: Criterion,
    root: Option<Node>,
    n_feature: usize,
}


impl DecisionTree {
    /// Construct a new, unfitted instance of [`DecisionTree`].
    #[inline]
    pub fn new(criterion: Criterion) -> Self {
        Self {
            criterion,
            root: None,
            n_feature: 0,
        }
    }


    /// Grow the tree over `sample`,
    /// replacing any previously fitted tree.
    ///
    /// The tree is grown until every branch is terminal;
    /// there is no pruning, no depth cap,
    /// and no minimum number of rows per leaf.
    #[inline]
    pub fn fit(&mut self, sample: &Sample) {
        let (n_sample, n_feature) = sample.shape();

        let indices = (0..n_sample).collect::<Vec<usize>>();

        self.n_feature = n_feature;
        self.root = Some(grow(self.criterion, sample, indices));
    }


    /// Returns the predicted label of the given feature vector.
    ///
    /// This method panics when the tree is not fitted or
    /// when the row width differs from the fitted sample.
    #[inline]
    pub fn predict(&self, row: &[f64]) -> i64 {
        checker::check_row_width(self.n_feature, row);

        let root = self.root.as_ref()
            .expect("The tree is not fitted. Call `DecisionTree::fit`");

        root.predict(row)
            .expect("The tree was fitted on an empty sample")
    }


    /// Returns the predicted labels for all rows of `sample`.
    #[inline]
    pub fn predict_all(&self, sample: &Sample) -> Vec<i64> {
        let n_sample = sample.shape().0;

        (0..n_sample).into_par_iter()
            .map(|row| {
                let (x, _) = sample.at(row);
                self.predict(&x[..])
            })
            .collect()
    }


    /// The depth of the fitted tree.
    /// A single leaf has depth `1`;
    /// an unfitted tree has depth `0`.
    #[inline]
    pub fn depth(&self) -> usize {
        self.root.as_ref()
            .map(Node::depth)
            .unwrap_or(0)
    }


    /// The number of leaves of the fitted tree.
    /// Returns `0` before `fit`.
    #[inline]
    pub fn n_leaves(&self) -> usize {
        self.root.as_ref()
            .map(Node::leaves)
            .unwrap_or(0)
    }


    pub(crate) fn root(&self) -> Option<&Node> {
        self.root.as_ref()
    }


    /// Write the current decision tree to dot file.
    #[inline]
    pub fn to_dot_file<P>(&self, path: P) -> std::io::Result<()>
        where P: AsRef<Path>
    {
        let mut f = File::create(path)?;
        f.write_all(b"graph DecisionTree {")?;

        if let Some(root) = &self.root {
            let info = root.to_dot_info(0).0;
            for row in info {
                f.write_all(row.as_bytes())?;
            }
        }

        f.write_all(b"}")?;

        Ok(())
    }
}


/// Construct the sub-tree over the rows `indices` of `sample`.
///
/// The indices move into the children on a split,
/// so every parent row ends up in exactly one child.
#[inline]
fn grow(criterion: Criterion, sample: &Sample, indices: Vec<usize>)
    -> Node
{
    // A `None` here means the node is terminal:
    // empty, pure, or without any cut point.
    let rule = match criterion.best_split(sample, &indices[..]) {
        Some(rule) => rule,
        None => {
            let prediction = majority_label(sample.target(), &indices[..]);
            return Node::Leaf(LeafNode::from_raw(prediction));
        },
    };

    // Split the rows for the left/right children
    // with the same `<= / >` rule used by the split search.
    let mut lindices = Vec::new();
    let mut rindices = Vec::new();
    for i in indices.into_iter() {
        match rule.split(sample, i) {
            LR::Left  => { lindices.push(i); },
            LR::Right => { rindices.push(i); },
        }
    }

    let ltree = grow(criterion, sample, lindices);
    let rtree = grow(criterion, sample, rindices);

    Node::Branch(BranchNode::from_raw(
        rule,
        Box::new(ltree),
        Box::new(rtree),
    ))
}


/// Returns the label appearing most often among
/// the rows `indices` of `target`,
/// or `None` when `indices` is empty.
/// Ties keep the smallest label,
/// so the prediction never depends on hashing order.
#[inline]
fn majority_label(target: &[i64], indices: &[usize]) -> Option<i64> {
    let mut counter: HashMap<i64, usize> = HashMap::new();

    for &i in indices {
        let cnt = counter.entry(target[i]).or_insert(0);
        *cnt += 1;
    }

    counter.into_iter()
        .max_by(|x, y| x.1.cmp(&y.1).then(y.0.cmp(&x.0)))
        .map(|(label, _)| label)
}
