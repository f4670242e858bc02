//! Bitwise exercises.
//!
//! Equations:
//!   a + b        = (a ^ b) + ((a & b) << 1)        repeated until carry = 0
//!   n & (n - 1)  clears the lowest set bit
//!   bits(i)      = bits(i >> 1) + (i & 1)
//!   missing(xs)  = (0 ^ 1 ^ ... ^ n) ^ xs[0] ^ ... ^ xs[n-1]

/// Two's-complement addition without `+`.
pub fn get_sum(a: i32, b: i32) -> i32 {
    let (mut a, mut b) = (a as u32, b as u32);
    while b != 0 {
        let carry = a & b;
        a ^= b;
        b = carry << 1;
    }
    a as i32
}

/// Number of set bits.
pub fn hamming_weight(mut n: u32) -> u32 {
    let mut count = 0;
    while n != 0 {
        n &= n - 1;
        count += 1;
    }
    count
}

/// Set-bit counts for every value in `0..=n`.
pub fn count_bits(n: usize) -> Vec<u32> {
    let mut out = vec![0u32; n + 1];
    for i in 1..=n {
        out[i] = out[i >> 1] + (i & 1) as u32;
    }
    out
}

/// The one value of `0..=nums.len()` absent from `nums`.
pub fn missing_number(nums: &[usize]) -> usize {
    nums.iter()
        .enumerate()
        .fold(nums.len(), |acc, (i, &n)| acc ^ i ^ n)
}

pub fn reverse_bits(mut n: u32) -> u32 {
    let mut out = 0;
    for _ in 0..32 {
        out = (out << 1) | (n & 1);
        n >>= 1;
    }
    out
}
