//! One-dimensional DP, bottom-up.
//!
//! Equations:
//!   stairs(n)   = stairs(n-1) + stairs(n-2),  stairs(1)=1, stairs(2)=2
//!   coins(a)    = 1 + min_{c <= a} coins(a - c),  coins(0) = 0
//!   decode(i)   = [s[i] != '0'] decode(i-1) + [10 <= s[i-1..=i] <= 26] decode(i-2)
//!   rob(i)      = max(rob(i-1), rob(i-2) + x[i])
//!   reach(i)    = max(reach(i-1), i + x[i]),  fail when i > reach(i-1)
//!
//! Only the last one or two states are kept where the recurrence allows it.

/// Distinct ways to climb `n` steps taking 1 or 2 at a time.
pub fn climb_stairs(n: u32) -> u64 {
    if n <= 2 {
        return u64::from(n);
    }
    let (mut prev2, mut prev1) = (1u64, 2u64);
    for _ in 3..=n {
        let cur = prev1 + prev2;
        prev2 = prev1;
        prev1 = cur;
    }
    prev1
}

/// Fewest coins summing to `amount`, or `None` if no combination does.
pub fn coin_change(coins: &[usize], amount: usize) -> Option<usize> {
    let unreachable = amount + 1;
    let mut dp = vec![unreachable; amount + 1];
    dp[0] = 0;
    for a in 1..=amount {
        for &c in coins {
            if c > 0 && c <= a && dp[a - c] + 1 < dp[a] {
                dp[a] = dp[a - c] + 1;
            }
        }
    }
    (dp[amount] != unreachable).then_some(dp[amount])
}

/// Ways to decode a digit string under `A=1 … Z=26`.
pub fn decode_ways(s: &str) -> u64 {
    let d = s.as_bytes();
    if d.is_empty() || d[0] == b'0' || !d.iter().all(u8::is_ascii_digit) {
        return 0;
    }
    let (mut prev2, mut prev1) = (1u64, 1u64);
    for i in 1..d.len() {
        let mut cur = 0;
        if d[i] != b'0' {
            cur += prev1;
        }
        let two = (d[i - 1] - b'0') * 10 + (d[i] - b'0');
        if (10..=26).contains(&two) {
            cur += prev2;
        }
        prev2 = prev1;
        prev1 = cur;
    }
    prev1
}

/// Max loot from a row of houses without robbing two neighbours.
pub fn rob(nums: &[u32]) -> u64 {
    let (mut prev2, mut prev1) = (0u64, 0u64);
    for &x in nums {
        let cur = prev1.max(prev2 + u64::from(x));
        prev2 = prev1;
        prev1 = cur;
    }
    prev1
}

/// As [`rob`], but the first and last houses are neighbours.
pub fn rob_circular(nums: &[u32]) -> u64 {
    match nums.len() {
        0 => 0,
        1 => u64::from(nums[0]),
        n => rob(&nums[..n - 1]).max(rob(&nums[1..])),
    }
}

/// Whether the last index is reachable when `nums[i]` is the max jump from `i`.
pub fn jump_game(nums: &[usize]) -> bool {
    let mut reach = 0;
    for (i, &jump) in nums.iter().enumerate() {
        if i > reach {
            return false;
        }
        reach = reach.max(i + jump);
    }
    true
}
