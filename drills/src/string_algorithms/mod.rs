pub mod anagram;
pub mod encoding;
pub mod palindrome;
pub mod parentheses;
pub mod sliding_window;
pub mod trie;

pub use anagram::{group_anagrams, is_anagram};
pub use encoding::{decode, encode};
pub use palindrome::{count_substrings, is_palindrome, longest_palindrome};
pub use parentheses::is_valid_parentheses;
pub use sliding_window::{character_replacement, length_of_longest_substring, min_window};
pub use trie::Trie;
