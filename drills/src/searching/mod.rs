pub mod binary_search;

pub use binary_search::{binary_search, find_min_rotated, lower_bound, search_rotated};
