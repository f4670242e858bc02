//! Exercises built on the crate's own binary heaps.

pub mod median;
pub mod selection;

pub use median::MedianFinder;
pub use selection::{kth_largest, top_k_frequent};
