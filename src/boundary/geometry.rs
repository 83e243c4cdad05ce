//! Defines the geometric records of a decision boundary and
//! the pre-order tree walk that produces them.
use serde::{Serialize, Deserialize};

use crate::tree::{DecisionTree, Node};


/// An axis-aligned dividing line of the decision boundary.
/// A split on feature `0` yields a vertical segment,
/// a split on feature `1` a horizontal one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    /// `x`-coordinate of one end point.
    pub x1: f64,
    /// `y`-coordinate of one end point.
    pub y1: f64,
    /// `x`-coordinate of the other end point.
    pub x2: f64,
    /// `y`-coordinate of the other end point.
    pub y2: f64,
}


/// The rectangle covered by one leaf of the tree,
/// tagged with the label the leaf predicts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LeafRegion {
    /// `x`-coordinate of the lower-left corner.
    pub x: f64,
    /// `y`-coordinate of the lower-left corner.
    pub y: f64,
    /// Width of the rectangle.
    pub width: f64,
    /// Height of the rectangle.
    pub height: f64,
    /// The label predicted over this rectangle.
    /// `None` only for a tree fitted on an empty sample.
    pub label: Option<i64>,
}


/// The decision boundary of a fitted two-feature tree over
/// a bounding rectangle:
/// the dividing segments of all branch nodes and
/// the rectangles of all leaves.
///
/// The records appear in pre-order:
/// each branch emits its segment before the records of
/// its left sub-tree, followed by those of its right sub-tree.
///
/// # Example
///
/// ```
/// use minicart::prelude::*;
///
/// let rows = vec![
///     vec![1.0, 1.0], vec![2.0, 4.0],
///     vec![4.0, 2.0], vec![5.0, 5.0],
/// ];
/// let sample = Sample::from_rows(rows, vec![0, 0, 1, 1]);
///
/// let mut tree = DecisionTree::new(Criterion::Gini);
/// tree.fit(&sample);
///
/// let boundary = Boundary::from_tree(&tree, 0.0, 0.0, 10.0, 10.0);
/// assert_eq!(boundary.lines.len(), 1);
/// assert_eq!(boundary.regions.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Boundary {
    /// The dividing segments, one per branch node.
    pub lines: Vec<LineSegment>,
    /// The leaf rectangles. Their union covers the
    /// bounding rectangle without overlap.
    pub regions: Vec<LeafRegion>,
}


impl Boundary {
    /// Walk the fitted `tree` over the bounding rectangle
    /// `(x1, y1)-(x2, y2)` and collect its decision boundary.
    /// An unfitted tree yields an empty boundary.
    ///
    /// The walk is only defined for trees whose splits use
    /// feature `0` (drawn on the `x`-axis) or
    /// feature `1` (drawn on the `y`-axis);
    /// it panics on any other feature index.
    pub fn from_tree(
        tree: &DecisionTree,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
    ) -> Self
    {
        let mut boundary = Self {
            lines: Vec::new(),
            regions: Vec::new(),
        };

        if let Some(root) = tree.root() {
            boundary.collect(root, x1, y1, x2, y2);
        }

        boundary
    }


    fn collect(&mut self, node: &Node, x1: f64, y1: f64, x2: f64, y2: f64) {
        let node = match node {
            Node::Branch(ref node) => node,
            Node::Leaf(ref node) => {
                self.regions.push(LeafRegion {
                    x: x1,
                    y: y1,
                    width: x2 - x1,
                    height: y2 - y1,
                    label: node.prediction,
                });
                return;
            },
        };

        let threshold = node.rule.threshold();
        match node.rule.feature() {
            0 => {
                self.lines.push(LineSegment {
                    x1: threshold, y1, x2: threshold, y2,
                });
                self.collect(&node.left, x1, y1, threshold, y2);
                self.collect(&node.right, threshold, y1, x2, y2);
            },
            1 => {
                self.lines.push(LineSegment {
                    x1, y1: threshold, x2, y2: threshold,
                });
                self.collect(&node.left, x1, y1, x2, threshold);
                self.collect(&node.right, x1, threshold, x2, y2);
            },
            feature => {
                panic!(
                    "The decision boundary is only defined for \
                     two-feature trees. got a split on feature {feature}."
                );
            },
        }
    }
}
