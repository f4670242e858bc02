pub mod backtracking;

pub use backtracking::combination_sum;
