use super::{len, List};

/// Reverse by relinking, O(1) extra space.
pub fn reverse(mut list: List) -> List {
    let mut prev: List = None;
    while let Some(mut node) = list {
        list = node.next.take();
        node.next = prev;
        prev = Some(node);
    }
    prev
}

/// Remove the `n`-th node counted from the end (1-based).
///
/// Out-of-range `n` (zero or past the head) leaves the list unchanged.
pub fn remove_nth_from_end(mut list: List, n: usize) -> List {
    let total = len(&list);
    if n == 0 || n > total {
        return list;
    }
    let mut link = &mut list;
    for _ in 0..total - n {
        match link {
            Some(node) => link = &mut node.next,
            None => break,
        }
    }
    if let Some(mut removed) = link.take() {
        *link = removed.next.take();
    }
    list
}

/// Reorder `l0 l1 … ln` into `l0 ln l1 ln-1 …` in place.
pub fn reorder(list: &mut List) {
    let total = len(list);
    if total < 3 {
        return;
    }
    // Split after the first ceil(total / 2) nodes.
    let mut link = &mut *list;
    for _ in 0..(total + 1) / 2 {
        match link {
            Some(node) => link = &mut node.next,
            None => break,
        }
    }
    let mut second = reverse(link.take());
    let mut first = list.take();

    let mut tail = &mut *list;
    loop {
        let Some(mut a) = first.take() else { break };
        first = a.next.take();
        tail = &mut tail.insert(a).next;
        let Some(mut b) = second.take() else { break };
        second = b.next.take();
        tail = &mut tail.insert(b).next;
    }
    *tail = first.or(second);
}
