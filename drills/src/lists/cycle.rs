//! Floyd's tortoise-and-hare over a successor table.
//!
//! `next[i]` is the index following node `i`, or `None` at the tail.
//!
//! Equations:
//!   slow' = next(slow),  fast' = next(next(fast))
//!   cycle iff slow == fast for some step; fast hits None otherwise

pub fn has_cycle(next: &[Option<usize>], head: Option<usize>) -> bool {
    let step = |i: usize| next.get(i).copied().flatten();
    let (mut slow, mut fast) = (head, head);
    while let Some(f) = fast {
        let Some(f1) = step(f) else {
            return false;
        };
        fast = step(f1);
        slow = slow.and_then(step);
        if fast.is_some() && slow == fast {
            return true;
        }
    }
    false
}
