pub mod grid;
pub mod memoization;
pub mod subsequence;
pub mod tabulation;

pub use grid::{longest_common_subsequence, unique_paths};
pub use memoization::word_break;
pub use subsequence::length_of_lis;
pub use tabulation::{climb_stairs, coin_change, decode_ways, jump_game, rob, rob_circular};
