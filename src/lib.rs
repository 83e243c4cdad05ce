#![warn(missing_docs)]

//!
//! A crate that provides a CART decision tree classifier
//! together with the geometry of its decision boundary.
//!
//! The tree is grown greedily:
//! each node searches all `(feature, cut point)` pairs
//! for the split minimizing the weighted Gini impurity,
//! and the recursion stops once a node becomes pure
//! or no feature admits a cut point.
//! There is no pruning and no depth cap,
//! so the tree keeps splitting until every branch is terminal.
//!
//! For a sample with two features,
//! [`Boundary`](crate::Boundary) walks the fitted tree and
//! emits the axis-aligned split segments and leaf rectangles,
//! which can be drawn to a bitmap via `plotters`.
//!
//! ```
//! use minicart::prelude::*;
//!
//! let rows = vec![
//!     vec![1.0], vec![2.0], vec![3.0], vec![4.0],
//! ];
//! let sample = Sample::from_rows(rows, vec![0, 0, 1, 1]);
//!
//! let mut tree = DecisionTree::new(Criterion::Gini);
//! tree.fit(&sample);
//!
//! assert_eq!(tree.depth(), 2);
//! assert_eq!(tree.predict(&[1.5]), 0);
//! ```

/// Decision boundary geometry for two-feature trees.
pub mod boundary;
/// Evaluation utilities (loss functions, cross validation).
pub mod research;
/// Batch sample holding feature columns and target labels.
pub mod sample;
/// The decision tree classifier and its growing procedure.
pub mod tree;

mod common;

/// Exports the commonly used structs of this crate.
pub mod prelude;

pub use sample::{Feature, Sample, SampleReader};
pub use tree::{Criterion, DecisionTree};
pub use boundary::{Boundary, LeafRegion, LineSegment};
pub use research::{accuracy, zero_one_loss, CrossValidation};
