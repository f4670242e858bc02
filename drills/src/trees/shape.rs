//! Structural recursions: depth, equality, mirroring, path sums.

use super::{Tree, TreeNode};

pub fn max_depth(tree: &Tree) -> usize {
    tree.as_deref()
        .map_or(0, |n| 1 + max_depth(&n.left).max(max_depth(&n.right)))
}

pub fn same_tree(a: &Tree, b: &Tree) -> bool {
    match (a.as_deref(), b.as_deref()) {
        (None, None) => true,
        (Some(x), Some(y)) => {
            x.val == y.val && same_tree(&x.left, &y.left) && same_tree(&x.right, &y.right)
        }
        _ => false,
    }
}

/// Mirror the tree in place.
pub fn invert(tree: &mut Tree) {
    if let Some(node) = tree {
        std::mem::swap(&mut node.left, &mut node.right);
        invert(&mut node.left);
        invert(&mut node.right);
    }
}

/// Whether some node of `root` roots a copy of `sub`. The empty tree is a
/// subtree of everything.
pub fn is_subtree(root: &Tree, sub: &Tree) -> bool {
    if sub.is_none() || same_tree(root, sub) {
        return true;
    }
    match root.as_deref() {
        Some(n) => is_subtree(&n.left, sub) || is_subtree(&n.right, sub),
        None => false,
    }
}

/// Largest sum along any node-to-node path; `None` for the empty tree.
///
/// Equations:
///   gain(n) = val(n) + max(0, gain(left), gain(right))
///   best    = max over n of val(n) + max(0, gain(left)) + max(0, gain(right))
pub fn max_path_sum(tree: &Tree) -> Option<i32> {
    fn gain(node: &TreeNode, best: &mut i32) -> i32 {
        let left = node.left.as_deref().map_or(0, |n| gain(n, best)).max(0);
        let right = node.right.as_deref().map_or(0, |n| gain(n, best)).max(0);
        *best = (*best).max(node.val.saturating_add(left).saturating_add(right));
        node.val.saturating_add(left.max(right))
    }

    let root = tree.as_deref()?;
    let mut best = i32::MIN;
    gain(root, &mut best);
    Some(best)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trees::from_level_order;

    #[test]
    fn depth_counts_nodes() {
        let tree = from_level_order(&[Some(3), Some(9), Some(20), None, None, Some(15), Some(7)]);
        assert_eq!(max_depth(&tree), 3);
        assert_eq!(max_depth(&None), 0);
    }

    #[test]
    fn path_through_root_or_not() {
        let tree = from_level_order(&[Some(-10), Some(9), Some(20), None, None, Some(15), Some(7)]);
        assert_eq!(max_path_sum(&tree), Some(42));
        assert_eq!(max_path_sum(&from_level_order(&[Some(-3)])), Some(-3));
        assert_eq!(max_path_sum(&None), None);
    }

    #[test]
    fn invert_twice_restores() {
        let original = from_level_order(&[Some(4), Some(2), Some(7), Some(1), Some(3)]);
        let mut tree = original.clone();
        invert(&mut tree);
        assert!(!same_tree(&tree, &original));
        invert(&mut tree);
        assert!(same_tree(&tree, &original));
    }
}
