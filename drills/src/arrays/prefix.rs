/// `out[i]` = product of every element except `nums[i]`, without division.
///
/// Products are accumulated in `i64` and saturate at its bounds; a zero
/// factor still yields an exact zero.
pub fn product_except_self(nums: &[i32]) -> Vec<i64> {
    let mut out = vec![1; nums.len()];
    let mut prefix: i64 = 1;
    for (slot, &n) in out.iter_mut().zip(nums) {
        *slot = prefix;
        prefix = prefix.saturating_mul(i64::from(n));
    }
    let mut suffix: i64 = 1;
    for (slot, &n) in out.iter_mut().zip(nums).rev() {
        *slot = slot.saturating_mul(suffix);
        suffix = suffix.saturating_mul(i64::from(n));
    }
    out
}
