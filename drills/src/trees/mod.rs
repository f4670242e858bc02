//! Binary tree exercises over boxed nodes.
//!
//! Level-order form: `Some(v)` is a node, `None` an absent child. Children
//! are read pairwise for each present node in breadth-first order, so only
//! present nodes consume slots. Trailing entries may be omitted.

pub mod bst;
pub mod codec;
pub mod construct;
pub mod shape;
pub mod traversal;

pub use bst::{is_valid_bst, kth_smallest, lowest_common_ancestor};
pub use codec::{deserialize, serialize};
pub use construct::build_tree;
pub use shape::{invert, is_subtree, max_depth, max_path_sum, same_tree};
pub use traversal::{level_order, right_side_view};

use crate::data_structures::{Queue, Stack};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    pub val: i32,
    pub left: Tree,
    pub right: Tree,
}

pub type Tree = Option<Box<TreeNode>>;

impl TreeNode {
    pub fn new(val: i32) -> Self {
        Self {
            val,
            left: None,
            right: None,
        }
    }
}

impl Drop for TreeNode {
    fn drop(&mut self) {
        if self.left.is_none() && self.right.is_none() {
            return;
        }
        // Detach descendants onto a work stack; each popped node is then a
        // leaf and drops without recursing.
        let mut pending: Stack<Box<TreeNode>> = Stack::new();
        pending.extend(self.left.take());
        pending.extend(self.right.take());
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

pub fn from_level_order(vals: &[Option<i32>]) -> Tree {
    let mut vals = vals.iter().copied();
    let mut root: Tree = vals.next().flatten().map(|v| Box::new(TreeNode::new(v)));
    {
        let mut pending: Queue<&mut TreeNode> = Queue::new();
        if let Some(node) = root.as_deref_mut() {
            pending.enqueue(node);
        }
        'fill: while let Some(node) = pending.dequeue() {
            let TreeNode { left, right, .. } = node;
            for child in [left, right] {
                match vals.next() {
                    Some(Some(v)) => pending.enqueue(child.insert(Box::new(TreeNode::new(v)))),
                    Some(None) => {}
                    None => break 'fill,
                }
            }
        }
    }
    root
}
