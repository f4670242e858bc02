//! Single-pass running-extremum scans.
//!
//! Inputs are `i32`; sums and differences are widened to `i64`, where they
//! cannot overflow. Products saturate at the `i64` bounds.
//!
//! Equations:
//!   max_profit   = max_j ( p[j] - min_{i<=j} p[i] )
//!   max_subarray : cur' = max(x, cur + x),  best' = max(best, cur')
//!   max_product  : x < 0 => swap(hi, lo)
//!                  hi' = max(x, hi*x),  lo' = min(x, lo*x)

/// Best single buy-then-sell profit; zero when prices never rise.
pub fn max_profit(prices: &[i32]) -> i64 {
    let Some(&first) = prices.first() else {
        return 0;
    };
    let mut min_price = i64::from(first);
    let mut best = 0;
    for &p in &prices[1..] {
        let p = i64::from(p);
        if p < min_price {
            min_price = p;
        } else {
            best = best.max(p - min_price);
        }
    }
    best
}

/// Largest sum of a non-empty contiguous run (Kadane).
pub fn max_subarray(nums: &[i32]) -> Option<i64> {
    let (&first, rest) = nums.split_first()?;
    let mut cur = i64::from(first);
    let mut best = cur;
    for &x in rest {
        let x = i64::from(x);
        cur = x.max(cur.saturating_add(x));
        best = best.max(cur);
    }
    Some(best)
}

/// Largest product of a non-empty contiguous run, saturating at `i64::MAX`.
pub fn max_product(nums: &[i32]) -> Option<i64> {
    let (&first, rest) = nums.split_first()?;
    let first = i64::from(first);
    let (mut hi, mut lo, mut best) = (first, first, first);
    for &x in rest {
        let x = i64::from(x);
        if x < 0 {
            std::mem::swap(&mut hi, &mut lo);
        }
        hi = x.max(hi.saturating_mul(x));
        lo = x.min(lo.saturating_mul(x));
        best = best.max(hi);
    }
    Some(best)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extreme_prices_do_not_overflow() {
        assert_eq!(max_profit(&[i32::MIN, i32::MAX]), i64::from(u32::MAX));
        assert_eq!(max_subarray(&[i32::MAX, i32::MAX]), Some(2 * i64::from(i32::MAX)));
    }

    #[test]
    fn long_products_saturate() {
        assert_eq!(max_product(&[100_000, 100_000]), Some(10_000_000_000));
        assert_eq!(max_product(&[i32::MAX; 4]), Some(i64::MAX));
        assert_eq!(max_product(&[i32::MIN, i32::MIN, i32::MIN, -1]), Some(i64::MAX));
    }
}
