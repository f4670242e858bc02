use std::collections::HashMap;

use crate::sorting::quick_sort;

pub fn is_anagram(s: &str, t: &str) -> bool {
    if s.len() != t.len() {
        return false;
    }
    let mut counts: HashMap<char, i64> = HashMap::new();
    for ch in s.chars() {
        *counts.entry(ch).or_insert(0) += 1;
    }
    for ch in t.chars() {
        match counts.get_mut(&ch) {
            Some(c) if *c > 0 => *c -= 1,
            _ => return false,
        }
    }
    true
}

/// Bucket words by their sorted letters.
///
/// Groups appear in the order their first member appears in `words`, and
/// members keep their input order.
pub fn group_anagrams(words: &[&str]) -> Vec<Vec<String>> {
    let mut slot: HashMap<Vec<char>, usize> = HashMap::new();
    let mut groups: Vec<Vec<String>> = Vec::new();
    for &word in words {
        let mut key: Vec<char> = word.chars().collect();
        quick_sort(&mut key);
        let i = *slot.entry(key).or_insert_with(|| {
            groups.push(Vec::new());
            groups.len() - 1
        });
        groups[i].push(word.to_string());
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anagram_pairs() {
        assert!(is_anagram("anagram", "nagaram"));
        assert!(!is_anagram("rat", "car"));
        assert!(!is_anagram("aab", "abb"));
        assert!(is_anagram("", ""));
    }

    #[test]
    fn groups_in_first_appearance_order() {
        let groups = group_anagrams(&["eat", "tea", "tan", "ate", "nat", "bat"]);
        assert_eq!(
            groups,
            vec![
                vec!["eat", "tea", "ate"],
                vec!["tan", "nat"],
                vec!["bat"],
            ]
        );
    }
}
