//! Growable array with explicit doubling growth.
//!
//! Variables:
//!   items : Vec<T>  — initialised slots [0, len)
//!   cap   : usize   — logical capacity, starts at INITIAL_CAPACITY
//!
//! Equations:
//!   push(x):   len == cap  =>  cap' = GROWTH_FACTOR * cap   (order preserved)
//!              items[len] = x,  len' = len + 1              O(1) amortised
//!   get(i):    i < len  =>  Ok(&items[i]),  else OutOfBounds O(1)
//!   set(i,x):  i < len  =>  items[i] = x,   else OutOfBounds O(1)
//!   pop():     len == 0 =>  None,  else len' = len - 1      O(1)
//!
//!   invariant: len <= cap

use std::fmt;

use log::trace;

use crate::error::ContainerError;

pub const INITIAL_CAPACITY: usize = 4;
pub const GROWTH_FACTOR: usize = 2;

pub struct ArrayList<T> {
    items: Vec<T>,
    cap: usize,
}

impl<T> ArrayList<T> {
    pub fn new() -> Self {
        Self {
            items: Vec::with_capacity(INITIAL_CAPACITY),
            cap: INITIAL_CAPACITY,
        }
    }

    /// Append at the logical end, doubling capacity first when full.
    pub fn push(&mut self, val: T) {
        if self.items.len() == self.cap {
            self.grow();
        }
        self.items.push(val);
    }

    pub fn get(&self, index: usize) -> Result<&T, ContainerError> {
        let len = self.items.len();
        self.items
            .get(index)
            .ok_or(ContainerError::OutOfBounds { index, len })
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, ContainerError> {
        let len = self.items.len();
        self.items
            .get_mut(index)
            .ok_or(ContainerError::OutOfBounds { index, len })
    }

    /// Overwrite slot `index`, handing back the value it held.
    pub fn set(&mut self, index: usize, val: T) -> Result<T, ContainerError> {
        let slot = self.get_mut(index)?;
        Ok(std::mem::replace(slot, val))
    }

    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.cap
    }

    /// Drop every element; capacity is kept.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    fn grow(&mut self) {
        let next = self.cap * GROWTH_FACTOR;
        self.items.reserve_exact(next - self.items.len());
        trace!("array list grew from {} to {} slots", self.cap, next);
        self.cap = next;
    }
}

impl<T: Clone> Clone for ArrayList<T> {
    fn clone(&self) -> Self {
        let mut items = Vec::with_capacity(self.cap);
        items.extend(self.items.iter().cloned());
        Self { items, cap: self.cap }
    }
}

impl<T> Default for ArrayList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for ArrayList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for ArrayList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T: Eq> Eq for ArrayList<T> {}

impl<T> Extend<T> for ArrayList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for val in iter {
            self.push(val);
        }
    }
}

impl<T> FromIterator<T> for ArrayList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> IntoIterator for ArrayList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a ArrayList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
