//! Stack — LIFO view over ArrayList.
//!
//! Variables:
//!   items : ArrayList<T>  — backing storage, top at items[N-1]
//!   N     : usize         — current number of elements
//!
//! Equations:
//!   push(x): items[N] = x,  N' = N + 1        O(1) amortised
//!   pop():   N == 0 => None,  else items[N-1]  O(1)
//!   peek():  N == 0 => None,  else &items[N-1] O(1)

use super::array_list::ArrayList;

#[derive(Debug, Clone, Default)]
pub struct Stack<T> {
    items: ArrayList<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Self { Self { items: ArrayList::new() } }
    pub fn push(&mut self, val: T)      { self.items.push(val); }
    pub fn pop(&mut self) -> Option<T>  { self.items.pop() }
    pub fn peek(&self) -> Option<&T>    { self.items.last() }
    pub fn is_empty(&self) -> bool      { self.items.is_empty() }
    pub fn len(&self) -> usize          { self.items.len() }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_in_reverse_push_order() {
        let mut stack = Stack::new();
        stack.extend([1, 2, 3]);
        assert_eq!(stack.peek(), Some(&3));
        assert_eq!(stack.pop(), Some(3));
        assert_eq!(stack.pop(), Some(2));
        assert_eq!(stack.len(), 1);
        assert_eq!(stack.pop(), Some(1));
        assert!(stack.is_empty());
    }

    #[test]
    fn empty_stack_reports_none() {
        let mut stack: Stack<char> = Stack::new();
        assert_eq!(stack.peek(), None);
        assert_eq!(stack.pop(), None);
    }

    #[test]
    fn stored_zero_is_distinguishable_from_empty() {
        let mut stack = Stack::new();
        stack.push(0);
        assert_eq!(stack.pop(), Some(0));
        assert_eq!(stack.pop(), None);
    }
}
