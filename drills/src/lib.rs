//! # Drills Crate
//!
//! Classic interview-style algorithm exercises over a small set of hand-built
//! containers.
//!
//! ## Modules
//!
//! - `data_structures` – Core containers (array list, linked list, stack, queue, min/max heap)
//! - `error` – Error enums for bounds and malformed input
//! - `arrays` – Hashing, prefix products, greedy scans, two pointers
//! - `searching` – Binary search and rotated-array lookups
//! - `sorting` – Quick sort
//! - `bit_manipulation` – Carry-free addition, popcounts, bit reversal
//! - `dynamic_programming` – Tabulation, memoization, grid and subsequence tables
//! - `optimization` – Backtracking (combination sum)
//! - `graph` – Adjacency lists, topological order, union-find, grid floods, cloning
//! - `intervals` – Insert, merge, overlap removal, meeting rooms
//! - `lists` – Boxed singly-linked list exercises
//! - `matrix` – In-place transforms, spiral walk, word search
//! - `string_algorithms` – Sliding windows, palindromes, anagrams, codec, trie
//! - `trees` – Binary tree shape, traversal, BST queries, construction, codec
//! - `heaps` – Top-k selection and running median
//!
//! ---
//!
//! ## Usage Example
//!
//! ```rust
//! use drills::data_structures::MinHeap;
//!
//! let heap: MinHeap<i32> = [5, 3, 8, 1].into_iter().collect();
//! assert_eq!(heap.into_sorted_vec(), vec![1, 3, 5, 8]);
//! ```
//!
//! ---
//!
//! Nothing here logs unless the caller installs a `log` backend.

pub mod arrays;
pub mod bit_manipulation;
pub mod data_structures;
pub mod dynamic_programming;
pub mod error;
pub mod graph;
pub mod heaps;
pub mod intervals;
pub mod lists;
pub mod matrix;
pub mod optimization;
pub mod searching;
pub mod sorting;
pub mod string_algorithms;
pub mod trees;
