pub mod quick_sort;

pub use quick_sort::{quick_sort, quick_sort_by};
