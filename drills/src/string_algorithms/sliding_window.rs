//! Variable-width window scans over the characters of a string.
//!
//! Variables:
//!   [l, r] : current window, both ends advance monotonically
//!
//! Every routine here is a single pass: O(n) window moves, O(σ) map space.

use std::collections::HashMap;

pub fn length_of_longest_substring(s: &str) -> usize {
    let mut last: HashMap<char, usize> = HashMap::new();
    let mut left = 0;
    let mut best = 0;
    for (right, ch) in s.chars().enumerate() {
        if let Some(&seen) = last.get(&ch) {
            if seen >= left {
                left = seen + 1;
            }
        }
        last.insert(ch, right);
        best = best.max(right + 1 - left);
    }
    best
}

/// Longest window that becomes a single repeated letter after at most `k`
/// substitutions.
///
/// `max_count` never shrinks: a stale maximum only keeps the window from
/// growing, it can't report a window that is too long.
pub fn character_replacement(s: &str, k: usize) -> usize {
    let chars: Vec<char> = s.chars().collect();
    let mut counts: HashMap<char, usize> = HashMap::new();
    let mut left = 0;
    let mut max_count = 0;
    let mut best = 0;
    for (right, &ch) in chars.iter().enumerate() {
        let count = counts.entry(ch).or_insert(0);
        *count += 1;
        max_count = max_count.max(*count);
        let window = right + 1 - left;
        if window - max_count > k {
            if let Some(c) = counts.get_mut(&chars[left]) {
                *c -= 1;
            }
            left += 1;
        } else {
            best = best.max(window);
        }
    }
    best
}

/// Shortest substring of `s` containing every character of `t` with
/// multiplicity. Empty when no such window exists or `t` is empty; the
/// leftmost window wins ties.
pub fn min_window(s: &str, t: &str) -> String {
    if t.is_empty() {
        return String::new();
    }
    let mut target: HashMap<char, usize> = HashMap::new();
    for ch in t.chars() {
        *target.entry(ch).or_insert(0) += 1;
    }

    let chars: Vec<char> = s.chars().collect();
    let need = target.len();
    let mut formed = 0;
    let mut window: HashMap<char, usize> = HashMap::new();
    let mut best: Option<(usize, usize)> = None;
    let mut left = 0;

    for (right, &ch) in chars.iter().enumerate() {
        let have = window.entry(ch).or_insert(0);
        *have += 1;
        if target.get(&ch) == Some(&*have) {
            formed += 1;
        }
        while formed == need {
            if best.map_or(true, |(l, r)| right - left < r - l) {
                best = Some((left, right));
            }
            let out = chars[left];
            if let Some(have) = window.get_mut(&out) {
                *have -= 1;
                if target.get(&out).is_some_and(|&want| *have < want) {
                    formed -= 1;
                }
            }
            left += 1;
        }
    }

    best.map(|(l, r)| chars[l..=r].iter().collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn longest_unique_run() {
        assert_eq!(length_of_longest_substring("abcabcbb"), 3);
        assert_eq!(length_of_longest_substring("bbbbb"), 1);
        assert_eq!(length_of_longest_substring("pwwkew"), 3);
        assert_eq!(length_of_longest_substring(""), 0);
        assert_eq!(length_of_longest_substring("abba"), 2);
    }

    #[test]
    fn replacement_window() {
        assert_eq!(character_replacement("ABAB", 2), 4);
        assert_eq!(character_replacement("AABABBA", 1), 4);
        assert_eq!(character_replacement("", 3), 0);
    }

    #[test]
    fn minimum_cover() {
        assert_eq!(min_window("ADOBECODEBANC", "ABC"), "BANC");
        assert_eq!(min_window("a", "a"), "a");
        assert_eq!(min_window("a", "aa"), "");
        assert_eq!(min_window("abc", ""), "");
    }
}
