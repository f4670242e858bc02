use crate::data_structures::MinHeap;

use super::List;

/// Merge two ascending lists by relinking their nodes.
pub fn merge_two(mut a: List, mut b: List) -> List {
    let mut head: List = None;
    let mut tail = &mut head;
    loop {
        let take_a = match (&a, &b) {
            (Some(x), Some(y)) => x.val <= y.val,
            _ => break,
        };
        let src = if take_a { &mut a } else { &mut b };
        let Some(mut node) = src.take() else { break };
        *src = node.next.take();
        tail = &mut tail.insert(node).next;
    }
    *tail = a.or(b);
    head
}

/// Merge `k` ascending lists with a min-heap of current heads.
///
/// Heap entries are `(value, list index)`, so equal values drain the lower
/// index first.
pub fn merge_k(lists: Vec<List>) -> List {
    let mut heads = lists;
    let mut heap: MinHeap<(i32, usize)> = heads
        .iter()
        .enumerate()
        .filter_map(|(i, l)| l.as_ref().map(|node| (node.val, i)))
        .collect();

    let mut head: List = None;
    let mut tail = &mut head;
    while let Some((_, i)) = heap.pop() {
        let Some(mut node) = heads[i].take() else {
            continue;
        };
        heads[i] = node.next.take();
        if let Some(next) = &heads[i] {
            heap.push((next.val, i));
        }
        tail = &mut tail.insert(node).next;
    }
    head
}
