//! Defines the inner representation
//! of the decision tree class.
use serde::{Serialize, Deserialize};

use super::split_rule::*;


/// Enumeration of `BranchNode` and `LeafNode`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    /// A node that have two childrens.
    Branch(BranchNode),


    /// A node that have no child.
    Leaf(LeafNode),
}


/// Represents the branch nodes of decision tree.
/// Each `BranchNode` must have two childrens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BranchNode {
    pub(crate) rule: Splitter,
    pub(crate) left: Box<Node>,
    pub(crate) right: Box<Node>,
}


impl BranchNode {
    /// Returns the `BranchNode` from the given components.
    #[inline]
    pub(crate) fn from_raw(
        rule: Splitter,
        left: Box<Node>,
        right: Box<Node>
    ) -> Self
    {
        Self { rule, left, right, }
    }
}


/// Represents the leaf nodes of decision tree.
/// The prediction is `None` only when the leaf was grown
/// from an empty sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeafNode {
    pub(crate) prediction: Option<i64>,
}


impl LeafNode {
    /// Returns a `LeafNode` that predicts the label
    /// given to this function.
    #[inline]
    pub(crate) fn from_raw(prediction: Option<i64>) -> Self {
        Self { prediction }
    }
}


impl Node {
    /// Returns the predicted label for the given feature vector
    /// by walking from this node down to a leaf.
    #[inline]
    pub(crate) fn predict(&self, row: &[f64]) -> Option<i64> {
        match self {
            Node::Branch(ref node) => {
                match node.rule.split_row(row) {
                    LR::Left => node.left.predict(row),
                    LR::Right => node.right.predict(row),
                }
            },
            Node::Leaf(ref node) => node.prediction,
        }
    }


    /// The depth of the sub-tree rooted at this node.
    /// A leaf has depth `1`.
    #[inline]
    pub(crate) fn depth(&self) -> usize {
        match self {
            Node::Branch(ref node) => {
                1 + node.left.depth().max(node.right.depth())
            },
            Node::Leaf(_) => 1,
        }
    }


    /// The number of leaves of the sub-tree rooted at this node.
    #[inline]
    pub(crate) fn leaves(&self) -> usize {
        match self {
            Node::Branch(ref node) => {
                node.left.leaves() + node.right.leaves()
            },
            Node::Leaf(_) => 1,
        }
    }


    pub(crate) fn to_dot_info(&self, id: usize) -> (Vec<String>, usize) {
        match self {
            Node::Branch(b) => {
                let b_info = format!(
                    "\tnode_{id} [ label = \"feat. {feat} <= {thr:.2} ?\" ];\n",
                    feat = b.rule.feature(),
                    thr = b.rule.threshold()
                );

                let (l_info, next_id) = b.left.to_dot_info(id + 1);
                let (mut r_info, ret_id) = b.right.to_dot_info(next_id);

                let mut info = l_info;
                info.push(b_info);
                info.append(&mut r_info);

                let l_edge = format!(
                    "\tnode_{id} -- node_{l_id} [ label = \"Yes\" ];\n",
                    l_id = id + 1
                );
                let r_edge = format!(
                    "\tnode_{id} -- node_{r_id} [ label = \"No\" ];\n",
                    r_id = next_id
                );

                info.push(l_edge);
                info.push(r_edge);

                (info, ret_id)
            },
            Node::Leaf(l) => {
                let p = l.prediction
                    .map(|p| p.to_string())
                    .unwrap_or_else(|| String::from("-"));
                let info = format!(
                    "\tnode_{id} [ \
                     label = \"{p}\", \
                     shape = box, \
                     ];\n"
                );

                (vec![info], id + 1)
            }
        }
    }
}
