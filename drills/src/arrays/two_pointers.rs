use crate::data_structures::ArrayList;
use crate::sorting::quick_sort;

/// All distinct triples summing to zero, each sorted ascending.
pub fn three_sum(nums: &[i32]) -> Vec<[i32; 3]> {
    let mut sorted = nums.to_vec();
    quick_sort(&mut sorted);

    let mut out = ArrayList::new();
    let n = sorted.len();
    for i in 0..n.saturating_sub(2) {
        if i > 0 && sorted[i] == sorted[i - 1] {
            continue;
        }
        let (mut l, mut r) = (i + 1, n - 1);
        while l < r {
            let total = i64::from(sorted[i]) + i64::from(sorted[l]) + i64::from(sorted[r]);
            if total == 0 {
                out.push([sorted[i], sorted[l], sorted[r]]);
                l += 1;
                r -= 1;
                while l < r && sorted[l] == sorted[l - 1] {
                    l += 1;
                }
                while l < r && sorted[r] == sorted[r + 1] {
                    r -= 1;
                }
            } else if total < 0 {
                l += 1;
            } else {
                r -= 1;
            }
        }
    }
    out.into_vec()
}

/// Largest water area between two lines, moving the shorter side inward.
pub fn max_area(heights: &[i32]) -> i64 {
    if heights.len() < 2 {
        return 0;
    }
    let (mut l, mut r) = (0, heights.len() - 1);
    let mut best = 0i64;
    while l < r {
        let width = (r - l) as i64;
        let h = heights[l].min(heights[r]);
        best = best.max(i64::from(h) * width);
        if heights[l] < heights[r] {
            l += 1;
        } else {
            r -= 1;
        }
    }
    best
}
