//! Breadth-first walks, one level per outer iteration.

use crate::data_structures::Queue;

use super::{Tree, TreeNode};

pub fn level_order(tree: &Tree) -> Vec<Vec<i32>> {
    let mut levels = Vec::new();
    for_each_level(tree, |level| levels.push(level.iter().map(|n| n.val).collect()));
    levels
}

/// Last value of every level, top to bottom.
pub fn right_side_view(tree: &Tree) -> Vec<i32> {
    let mut view = Vec::new();
    for_each_level(tree, |level| view.extend(level.last().map(|n| n.val)));
    view
}

fn for_each_level<'a, F: FnMut(&[&'a TreeNode])>(tree: &'a Tree, mut visit: F) {
    let mut queue: Queue<&'a TreeNode> = Queue::new();
    if let Some(root) = tree.as_deref() {
        queue.enqueue(root);
    }
    let mut level: Vec<&'a TreeNode> = Vec::new();
    while !queue.is_empty() {
        level.clear();
        for _ in 0..queue.len() {
            if let Some(node) = queue.dequeue() {
                level.push(node);
            }
        }
        for node in &level {
            queue.extend(node.left.as_deref());
            queue.extend(node.right.as_deref());
        }
        visit(&level);
    }
}
