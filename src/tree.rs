//! The CART decision tree classifier.

/// Defines the decision tree classifier.
pub mod decision_tree;

/// Defines the inner representations of `DecisionTree`.
mod node;
mod criterion;
mod split_rule;


pub use decision_tree::DecisionTree;
pub use criterion::Criterion;

pub(crate) use node::Node;
