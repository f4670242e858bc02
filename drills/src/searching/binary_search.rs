//! Binary search over sorted and rotated-sorted slices.
//!
//! Equations:
//!   lower_bound(a, x) = min { i | a[i] >= x }   (a.len() if none)   O(log N)
//!   rotated input: a = s[k..] ++ s[..k] for sorted, distinct s
//!     a[m] > a[r]  =>  minimum lies in (m, r]
//!     a[m] <= a[r] =>  minimum lies in [l, m]

pub fn binary_search<T: Ord>(arr: &[T], target: &T) -> Option<usize> {
    let (mut l, mut r) = (0, arr.len());
    while l < r {
        let m = l + (r - l) / 2;
        if &arr[m] == target {
            return Some(m);
        }
        if &arr[m] < target {
            l = m + 1;
        } else {
            r = m;
        }
    }
    None
}

/// First index whose element is not less than `target`.
pub fn lower_bound<T: Ord>(arr: &[T], target: &T) -> usize {
    let (mut l, mut r) = (0, arr.len());
    while l < r {
        let m = l + (r - l) / 2;
        if &arr[m] < target {
            l = m + 1;
        } else {
            r = m;
        }
    }
    l
}

/// Minimum of a rotated ascending slice of distinct values.
pub fn find_min_rotated(nums: &[i32]) -> Option<i32> {
    if nums.is_empty() {
        return None;
    }
    let (mut l, mut r) = (0, nums.len() - 1);
    while l < r {
        let m = l + (r - l) / 2;
        if nums[m] > nums[r] {
            l = m + 1;
        } else {
            r = m;
        }
    }
    Some(nums[l])
}

/// Index of `target` in a rotated ascending slice of distinct values.
pub fn search_rotated(nums: &[i32], target: i32) -> Option<usize> {
    // Half-open [l, r) avoids underflow when r would drop below zero.
    let (mut l, mut r) = (0, nums.len());
    while l < r {
        let m = l + (r - l) / 2;
        if nums[m] == target {
            return Some(m);
        }
        if nums[l] <= nums[m] {
            if nums[l] <= target && target < nums[m] {
                r = m;
            } else {
                l = m + 1;
            }
        } else if nums[m] < target && target <= nums[r - 1] {
            l = m + 1;
        } else {
            r = m;
        }
    }
    None
}
