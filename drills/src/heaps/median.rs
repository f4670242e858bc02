//! Running median over a stream of integers.
//!
//! Variables:
//!   low  : MaxHeap<i32>  — smaller half, root is its maximum
//!   high : MinHeap<i32>  — larger half, root is its minimum
//!
//! Equations:
//!   invariant: max(low) <= min(high)
//!              |low| == |high|  or  |low| == |high| + 1
//!   median = low.peek()                         if |low| > |high|
//!          = (low.peek() + high.peek()) / 2     otherwise

use crate::data_structures::{MaxHeap, MinHeap};

#[derive(Debug, Clone, Default)]
pub struct MedianFinder {
    low: MaxHeap<i32>,
    high: MinHeap<i32>,
}

impl MedianFinder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_num(&mut self, num: i32) {
        match self.low.peek() {
            Some(&top) if num > top => self.high.push(num),
            _ => self.low.push(num),
        }
        if self.low.len() > self.high.len() + 1 {
            if let Some(moved) = self.low.pop() {
                self.high.push(moved);
            }
        } else if self.high.len() > self.low.len() {
            if let Some(moved) = self.high.pop() {
                self.low.push(moved);
            }
        }
    }

    /// `None` until the first number arrives.
    pub fn median(&self) -> Option<f64> {
        let lo = f64::from(*self.low.peek()?);
        if self.low.len() > self.high.len() {
            return Some(lo);
        }
        let hi = f64::from(*self.high.peek()?);
        Some((lo + hi) / 2.0)
    }

    pub fn len(&self) -> usize {
        self.low.len() + self.high.len()
    }

    pub fn is_empty(&self) -> bool {
        self.low.is_empty()
    }
}

impl Extend<i32> for MedianFinder {
    fn extend<I: IntoIterator<Item = i32>>(&mut self, iter: I) {
        for num in iter {
            self.add_num(num);
        }
    }
}
