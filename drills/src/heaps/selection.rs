//! Bounded-heap selection.
//!
//! Equations:
//!   keep a min-heap of size ≤ k; after every push, pop when size > k
//!   root = k-th largest seen so far                      O(n log k)

use std::collections::HashMap;

use crate::data_structures::MinHeap;

/// The `k` most frequent values, most frequent first.
///
/// Ties on frequency go to the larger value. Fewer than `k` results are
/// returned when `nums` has fewer distinct values.
pub fn top_k_frequent(nums: &[i32], k: usize) -> Vec<i32> {
    if k == 0 {
        return Vec::new();
    }
    let mut freq: HashMap<i32, usize> = HashMap::new();
    for &n in nums {
        *freq.entry(n).or_insert(0) += 1;
    }

    let mut heap: MinHeap<(usize, i32)> = MinHeap::new();
    for (val, count) in freq {
        heap.push((count, val));
        if heap.len() > k {
            heap.pop();
        }
    }
    let mut out: Vec<i32> = heap.into_sorted_vec().into_iter().map(|(_, val)| val).collect();
    out.reverse();
    out
}

/// `None` when `k` is zero or exceeds `nums.len()`.
pub fn kth_largest(nums: &[i32], k: usize) -> Option<i32> {
    if k == 0 || k > nums.len() {
        return None;
    }
    let mut heap: MinHeap<i32> = MinHeap::new();
    for &n in nums {
        heap.push(n);
        if heap.len() > k {
            heap.pop();
        }
    }
    heap.peek().copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn most_frequent_first() {
        assert_eq!(top_k_frequent(&[1, 1, 1, 2, 2, 3], 2), vec![1, 2]);
        assert_eq!(top_k_frequent(&[1], 1), vec![1]);
        assert_eq!(top_k_frequent(&[4, 4, 5], 5), vec![4, 5]);
        assert!(top_k_frequent(&[1, 2], 0).is_empty());
    }

    #[test]
    fn kth_largest_counts_duplicates() {
        assert_eq!(kth_largest(&[3, 2, 1, 5, 6, 4], 2), Some(5));
        assert_eq!(kth_largest(&[3, 2, 3, 1, 2, 4, 5, 5, 6], 4), Some(4));
        assert_eq!(kth_largest(&[1], 2), None);
        assert_eq!(kth_largest(&[1], 0), None);
    }
}
