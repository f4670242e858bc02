use std::collections::{HashMap, HashSet};

/// Whether `s` splits into a sequence of dictionary words.
///
/// Memoised over the start offset of the remaining suffix.
pub fn word_break(s: &str, dict: &[&str]) -> bool {
    fn can_split(
        s: &str,
        start: usize,
        words: &HashSet<&str>,
        max_len: usize,
        memo: &mut HashMap<usize, bool>,
    ) -> bool {
        if start == s.len() {
            return true;
        }
        if let Some(&v) = memo.get(&start) {
            return v;
        }
        let end_limit = s.len().min(start + max_len);
        let mut found = false;
        for end in start + 1..=end_limit {
            let Some(word) = s.get(start..end) else {
                continue;
            };
            if words.contains(word) && can_split(s, end, words, max_len, memo) {
                found = true;
                break;
            }
        }
        memo.insert(start, found);
        found
    }

    let words: HashSet<&str> = dict.iter().copied().collect();
    let max_len = dict.iter().map(|w| w.len()).max().unwrap_or(0);
    can_split(s, 0, &words, max_len, &mut HashMap::new())
}
