//! Two-dimensional DP tables.
//!
//! Equations:
//!   lcs[i][j] = a[i-1] == b[j-1]  =>  lcs[i-1][j-1] + 1
//!               else                  max(lcs[i-1][j], lcs[i][j-1])
//!   paths[j] += paths[j-1]           (row-rolled, paths[0] = 1)

pub fn longest_common_subsequence(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let mut dp = vec![vec![0usize; b.len() + 1]; a.len() + 1];
    for i in 1..=a.len() {
        for j in 1..=b.len() {
            dp[i][j] = if a[i - 1] == b[j - 1] {
                dp[i - 1][j - 1] + 1
            } else {
                dp[i - 1][j].max(dp[i][j - 1])
            };
        }
    }
    dp[a.len()][b.len()]
}

/// Monotone lattice paths across an `m x n` grid.
pub fn unique_paths(m: usize, n: usize) -> u64 {
    if m == 0 || n == 0 {
        return 0;
    }
    let mut row = vec![1u64; n];
    for _ in 1..m {
        for j in 1..n {
            row[j] += row[j - 1];
        }
    }
    row[n - 1]
}
