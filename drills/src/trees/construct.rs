//! Rebuild a tree from its preorder and inorder listings.
//!
//! Variables:
//!   pre    : preorder slice for the current subtree, root first
//!   in_lo  : start of the matching inorder window, of length |pre|
//!
//! Equations:
//!   mid       = pos_inorder(pre[0])
//!   left      = build(pre[1 ..= mid - in_lo],  in_lo)
//!   right     = build(pre[mid - in_lo + 1 ..], mid + 1)
//!
//! Values must be distinct: a repeated inorder value makes the split point
//! ambiguous and is rejected with `DuplicateValue`.

use std::collections::HashMap;

use crate::error::TreeBuildError;

use super::{Tree, TreeNode};

pub fn build_tree(preorder: &[i32], inorder: &[i32]) -> Result<Tree, TreeBuildError> {
    fn build(
        pre: &[i32],
        in_lo: usize,
        position: &HashMap<i32, usize>,
    ) -> Result<Tree, TreeBuildError> {
        let Some((&val, rest)) = pre.split_first() else {
            return Ok(None);
        };
        let mid = position
            .get(&val)
            .copied()
            .filter(|&mid| mid >= in_lo && mid < in_lo + pre.len())
            .ok_or(TreeBuildError::MissingValue(val))?;
        let (left, right) = rest.split_at(mid - in_lo);
        Ok(Some(Box::new(TreeNode {
            val,
            left: build(left, in_lo, position)?,
            right: build(right, mid + 1, position)?,
        })))
    }

    if preorder.len() != inorder.len() {
        return Err(TreeBuildError::LengthMismatch {
            preorder: preorder.len(),
            inorder: inorder.len(),
        });
    }
    let mut position: HashMap<i32, usize> = HashMap::with_capacity(inorder.len());
    for (i, &v) in inorder.iter().enumerate() {
        if position.insert(v, i).is_some() {
            return Err(TreeBuildError::DuplicateValue(v));
        }
    }
    build(preorder, 0, &position)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trees::{from_level_order, level_order};

    #[test]
    fn rebuilds_classic_example() {
        let tree = build_tree(&[3, 9, 20, 15, 7], &[9, 3, 15, 20, 7]).unwrap();
        let expected = from_level_order(&[Some(3), Some(9), Some(20), None, None, Some(15), Some(7)]);
        assert_eq!(tree, expected);
        assert_eq!(level_order(&tree), vec![vec![3], vec![9, 20], vec![15, 7]]);
    }

    #[test]
    fn empty_input_is_empty_tree() {
        assert_eq!(build_tree(&[], &[]), Ok(None));
    }

    #[test]
    fn inconsistent_listings_are_rejected() {
        assert_eq!(
            build_tree(&[1, 2], &[1]),
            Err(TreeBuildError::LengthMismatch { preorder: 2, inorder: 1 })
        );
        assert_eq!(build_tree(&[1, 2], &[1, 3]), Err(TreeBuildError::MissingValue(2)));
    }

    #[test]
    fn repeated_values_are_rejected() {
        assert_eq!(build_tree(&[1, 1], &[1, 1]), Err(TreeBuildError::DuplicateValue(1)));
        assert_eq!(build_tree(&[2, 1, 2], &[1, 2, 2]), Err(TreeBuildError::DuplicateValue(2)));
    }
}
