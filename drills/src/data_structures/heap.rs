//! Binary heap, min or max by marker type.
//!
//! Variables:
//!   data : ArrayList<T>  — heap array, 0-indexed
//!   N    : usize         — current size
//!   ≺    : O::precedes   — `<` for Min, `>` for Max
//!
//! Equations:
//!   parent(i)     = (i - 1) / 2
//!   left_child(i) = 2*i + 1
//!   right_child(i)= 2*i + 2
//!
//!   Heap invariant: not (data[i] ≺ data[parent(i)])  for all i > 0
//!
//!   push(x): data[N] = x,  sift_up(N),         N' = N+1   O(log N)
//!   pop():   swap(0, N-1), N' = N-1, sift_down(0)          O(log N)
//!
//! Ties are not ordered; equal keys may come out in any order.

use std::fmt;
use std::marker::PhantomData;

use super::array_list::ArrayList;

/// Comparison direction for [`BinaryHeap`].
pub trait HeapOrder {
    /// `true` when `a` belongs strictly above `b`.
    fn precedes<T: Ord>(a: &T, b: &T) -> bool;
}

/// Smallest element at the root.
#[derive(Debug, Clone, Copy)]
pub enum Min {}

/// Largest element at the root.
#[derive(Debug, Clone, Copy)]
pub enum Max {}

impl HeapOrder for Min {
    #[inline]
    fn precedes<T: Ord>(a: &T, b: &T) -> bool {
        a < b
    }
}

impl HeapOrder for Max {
    #[inline]
    fn precedes<T: Ord>(a: &T, b: &T) -> bool {
        a > b
    }
}

pub struct BinaryHeap<T: Ord, O: HeapOrder> {
    data: ArrayList<T>,
    _order: PhantomData<O>,
}

pub type MinHeap<T> = BinaryHeap<T, Min>;
pub type MaxHeap<T> = BinaryHeap<T, Max>;

impl<T: Ord, O: HeapOrder> BinaryHeap<T, O> {
    pub fn new() -> Self {
        Self {
            data: ArrayList::new(),
            _order: PhantomData,
        }
    }

    pub fn push(&mut self, val: T) {
        self.data.push(val);
        self.sift_up(self.data.len() - 1);
    }

    /// Remove and return the root.
    pub fn pop(&mut self) -> Option<T> {
        if self.data.is_empty() {
            return None;
        }
        let n = self.data.len() - 1;
        self.data.as_mut_slice().swap(0, n);
        let top = self.data.pop();
        if !self.data.is_empty() {
            self.sift_down(0);
        }
        top
    }

    pub fn peek(&self) -> Option<&T> {
        self.data.as_slice().first()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The heap array in storage order (not sorted).
    pub fn as_slice(&self) -> &[T] {
        self.data.as_slice()
    }

    /// Drain into a vector in pop order.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.len());
        while let Some(val) = self.pop() {
            out.push(val);
        }
        out
    }

    fn sift_up(&mut self, mut i: usize) {
        let data = self.data.as_mut_slice();
        while i > 0 {
            let p = (i - 1) / 2;
            if !O::precedes(&data[i], &data[p]) {
                break;
            }
            data.swap(p, i);
            i = p;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let data = self.data.as_mut_slice();
        let n = data.len();
        loop {
            let mut best = i;
            let l = 2 * i + 1;
            let r = 2 * i + 2;
            if l < n && O::precedes(&data[l], &data[best]) {
                best = l;
            }
            if r < n && O::precedes(&data[r], &data[best]) {
                best = r;
            }
            if best == i {
                break;
            }
            data.swap(i, best);
            i = best;
        }
    }
}

impl<T: Ord, O: HeapOrder> Default for BinaryHeap<T, O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord + Clone, O: HeapOrder> Clone for BinaryHeap<T, O> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            _order: PhantomData,
        }
    }
}

impl<T: Ord + fmt::Debug, O: HeapOrder> fmt::Debug for BinaryHeap<T, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.data.iter()).finish()
    }
}

impl<T: Ord, O: HeapOrder> Extend<T> for BinaryHeap<T, O> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for val in iter {
            self.push(val);
        }
    }
}

impl<T: Ord, O: HeapOrder> FromIterator<T> for BinaryHeap<T, O> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = Self::new();
        heap.extend(iter);
        heap
    }
}
