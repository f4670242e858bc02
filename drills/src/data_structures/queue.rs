//! Queue — FIFO view over the singly-linked list.
//!
//! Variables:
//!   items : LinkedList<T>  — front at head, back at tail
//!   N     : usize          — current occupancy
//!
//! Equations:
//!   enqueue(x): items.push_back(x),  N' = N + 1   O(1)
//!   dequeue():  items.pop_front(),   N' = N - 1   O(1)
//!   empty iff N == 0

use super::linked_list::LinkedList;

#[derive(Debug, Default)]
pub struct Queue<T> {
    items: LinkedList<T>,
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Self { items: LinkedList::new() }
    }

    pub fn enqueue(&mut self, val: T) {
        self.items.push_back(val);
    }

    pub fn dequeue(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    pub fn peek(&self) -> Option<&T> {
        self.items.peek_front()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}
