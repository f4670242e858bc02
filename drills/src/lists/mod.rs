//! Singly-linked list exercises over boxed nodes.
//!
//! `List` is the head link: `None` for the empty list. Every node is owned by
//! its predecessor, so these lists are acyclic by construction; cycle
//! detection works on a successor table instead (see [`cycle`]).

pub mod cycle;
pub mod merge;
pub mod reorder;

pub use cycle::has_cycle;
pub use merge::{merge_k, merge_two};
pub use reorder::{remove_nth_from_end, reorder, reverse};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListNode {
    pub val: i32,
    pub next: List,
}

pub type List = Option<Box<ListNode>>;

impl ListNode {
    pub fn new(val: i32) -> Self {
        Self { val, next: None }
    }
}

impl Drop for ListNode {
    fn drop(&mut self) {
        // Unlink the tail one node at a time so long chains don't recurse.
        let mut next = self.next.take();
        while let Some(mut node) = next {
            next = node.next.take();
        }
    }
}

pub fn from_slice(vals: &[i32]) -> List {
    vals.iter().rev().fold(None, |next, &val| Some(Box::new(ListNode { val, next })))
}

pub fn to_vec(list: &List) -> Vec<i32> {
    let mut out = Vec::new();
    let mut cur = list.as_deref();
    while let Some(node) = cur {
        out.push(node.val);
        cur = node.next.as_deref();
    }
    out
}

pub fn len(list: &List) -> usize {
    let mut n = 0;
    let mut cur = list.as_deref();
    while let Some(node) = cur {
        n += 1;
        cur = node.next.as_deref();
    }
    n
}
