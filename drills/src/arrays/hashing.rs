use std::collections::{HashMap, HashSet};

/// Indices `(i, j)`, `i < j`, of the first pair summing to `target`.
pub fn two_sum(nums: &[i32], target: i32) -> Option<(usize, usize)> {
    let mut seen: HashMap<i64, usize> = HashMap::new();
    for (j, &n) in nums.iter().enumerate() {
        let need = i64::from(target) - i64::from(n);
        if let Some(&i) = seen.get(&need) {
            return Some((i, j));
        }
        seen.entry(i64::from(n)).or_insert(j);
    }
    None
}

pub fn contains_duplicate(nums: &[i32]) -> bool {
    let mut seen = HashSet::with_capacity(nums.len());
    nums.iter().any(|n| !seen.insert(n))
}

/// Length of the longest run of consecutive integers, in O(N).
pub fn longest_consecutive(nums: &[i32]) -> usize {
    let set: HashSet<i64> = nums.iter().map(|&n| i64::from(n)).collect();
    let mut longest = 0;
    for &start in &set {
        // Only count from the bottom of a run.
        if set.contains(&(start - 1)) {
            continue;
        }
        let mut len = 1;
        while set.contains(&(start + len as i64)) {
            len += 1;
        }
        longest = longest.max(len);
    }
    longest
}
