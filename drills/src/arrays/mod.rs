//! Array exercises: hashing, two pointers, running extrema, prefix products.

pub mod greedy;
pub mod hashing;
pub mod prefix;
pub mod two_pointers;

pub use greedy::{max_product, max_profit, max_subarray};
pub use hashing::{contains_duplicate, longest_consecutive, two_sum};
pub use prefix::product_except_self;
pub use two_pointers::{max_area, three_sum};
