use crate::searching::lower_bound;

/// Length of the longest strictly increasing subsequence, O(N log N).
///
/// `tails[k]` holds the smallest tail of any increasing run of length k+1.
pub fn length_of_lis(nums: &[i32]) -> usize {
    let mut tails: Vec<i32> = Vec::with_capacity(nums.len());
    for &x in nums {
        let at = lower_bound(&tails, &x);
        if at == tails.len() {
            tails.push(x);
        } else {
            tails[at] = x;
        }
    }
    tails.len()
}
