//! Prefix tree keyed by `char`.
//!
//! Variables:
//!   children : HashMap<char, TrieNode>   — one edge per next character
//!   is_end   : bool                      — a stored word ends here
//!
//! Equations:
//!   insert(w):      walk/create |w| edges, mark end       O(|w|)
//!   search(w):      walk |w| edges, require end mark      O(|w|)
//!   starts_with(p): walk |p| edges                        O(|p|)

use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
struct TrieNode {
    children: HashMap<char, TrieNode>,
    is_end: bool,
}

#[derive(Debug, Clone, Default)]
pub struct Trie {
    root: TrieNode,
    words: usize,
}

impl Trie {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, word: &str) {
        let mut node = &mut self.root;
        for ch in word.chars() {
            node = node.children.entry(ch).or_default();
        }
        if !node.is_end {
            node.is_end = true;
            self.words += 1;
        }
    }

    pub fn search(&self, word: &str) -> bool {
        self.walk(word).is_some_and(|node| node.is_end)
    }

    pub fn starts_with(&self, prefix: &str) -> bool {
        self.walk(prefix).is_some()
    }

    /// Distinct words stored.
    pub fn len(&self) -> usize {
        self.words
    }

    pub fn is_empty(&self) -> bool {
        self.words == 0
    }

    fn walk(&self, prefix: &str) -> Option<&TrieNode> {
        prefix
            .chars()
            .try_fold(&self.root, |node, ch| node.children.get(&ch))
    }
}

impl<'a> Extend<&'a str> for Trie {
    fn extend<I: IntoIterator<Item = &'a str>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_versus_prefix() {
        let mut trie = Trie::new();
        trie.insert("apple");
        assert!(trie.search("apple"));
        assert!(!trie.search("app"));
        assert!(trie.starts_with("app"));
        trie.insert("app");
        assert!(trie.search("app"));
        assert_eq!(trie.len(), 2);
    }

    #[test]
    fn empty_prefix_always_matches() {
        let trie = Trie::new();
        assert!(trie.starts_with(""));
        assert!(!trie.search(""));
        assert!(trie.is_empty());
    }

    #[test]
    fn reinserting_is_idempotent() {
        let mut trie = Trie::new();
        trie.extend(["go", "go", "gone"]);
        assert_eq!(trie.len(), 2);
        assert!(!trie.starts_with("gz"));
    }
}
