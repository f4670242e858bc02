//! In-place quicksort (Lomuto partition, middle element as pivot).
//!
//! Recurses into the smaller side and loops on the larger, so stack depth
//! stays O(log N). Not stable. Used where exercises need their input ordered before a
//! two-pointer or sweep pass.

use std::cmp::Ordering;

pub fn quick_sort<T: Ord>(arr: &mut [T]) {
    quick_sort_by(arr, &mut |a: &T, b: &T| a.cmp(b));
}

pub fn quick_sort_by<T, F>(mut arr: &mut [T], cmp: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    while arr.len() > 1 {
        let pivot = partition(arr, cmp);
        let (left, right) = std::mem::take(&mut arr).split_at_mut(pivot);
        let right = &mut right[1..];
        if left.len() < right.len() {
            quick_sort_by(left, cmp);
            arr = right;
        } else {
            quick_sort_by(right, cmp);
            arr = left;
        }
    }
}

fn partition<T, F>(arr: &mut [T], cmp: &mut F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = arr.len();
    arr.swap(len / 2, len - 1);
    let pivot_index = len - 1;
    let mut i = 0;
    for j in 0..pivot_index {
        if cmp(&arr[j], &arr[pivot_index]) != Ordering::Greater {
            arr.swap(i, j);
            i += 1;
        }
    }
    arr.swap(i, pivot_index);
    i
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_with_duplicates() {
        let mut v = vec![3, -1, 3, 0, 7, -1, 2];
        quick_sort(&mut v);
        assert_eq!(v, vec![-1, -1, 0, 2, 3, 3, 7]);
    }

    #[test]
    fn sorts_by_key() {
        let mut v = vec![(2, 'b'), (1, 'a'), (3, 'c')];
        quick_sort_by(&mut v, &mut |a, b| a.0.cmp(&b.0));
        assert_eq!(v, vec![(1, 'a'), (2, 'b'), (3, 'c')]);
    }

    #[test]
    fn equal_keys_do_not_deepen_recursion() {
        let mut v = vec![7u8; 5_000];
        v.push(1);
        quick_sort(&mut v);
        assert_eq!(v[0], 1);
        assert!(v[1..].iter().all(|&x| x == 7));
    }

    #[test]
    fn handles_trivial_slices() {
        let mut empty: Vec<u8> = vec![];
        quick_sort(&mut empty);
        let mut one = vec![9];
        quick_sort(&mut one);
        assert_eq!(one, vec![9]);
    }
}
