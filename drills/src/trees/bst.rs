//! Binary-search-tree queries.
//!
//! BST order here is strict: left subtree < node < right subtree.

use crate::data_structures::Stack;

use super::{Tree, TreeNode};

pub fn is_valid_bst(tree: &Tree) -> bool {
    fn within(node: Option<&TreeNode>, low: Option<i32>, high: Option<i32>) -> bool {
        let Some(n) = node else {
            return true;
        };
        if low.is_some_and(|lo| n.val <= lo) || high.is_some_and(|hi| n.val >= hi) {
            return false;
        }
        within(n.left.as_deref(), low, Some(n.val)) && within(n.right.as_deref(), Some(n.val), high)
    }

    within(tree.as_deref(), None, None)
}

/// 1-based `k`-th smallest value by iterative in-order walk.
pub fn kth_smallest(tree: &Tree, k: usize) -> Option<i32> {
    let mut stack: Stack<&TreeNode> = Stack::new();
    let mut cur = tree.as_deref();
    let mut seen = 0;
    loop {
        while let Some(node) = cur {
            stack.push(node);
            cur = node.left.as_deref();
        }
        let node = stack.pop()?;
        seen += 1;
        if seen == k {
            return Some(node.val);
        }
        cur = node.right.as_deref();
    }
}

/// Value of the deepest node whose subtree holds both `p` and `q`, found by
/// descending while both lie on the same side.
///
/// The values are not required to be present; the split point is returned
/// either way.
pub fn lowest_common_ancestor(tree: &Tree, p: i32, q: i32) -> Option<i32> {
    let mut cur = tree.as_deref();
    while let Some(node) = cur {
        cur = if p < node.val && q < node.val {
            node.left.as_deref()
        } else if p > node.val && q > node.val {
            node.right.as_deref()
        } else {
            return Some(node.val);
        };
    }
    None
}
