//! Palindrome checks by centre expansion.
//!
//! Equations:
//!   centres: 2n - 1 (each char, each gap)
//!   expand(l, r): while s[l] == s[r] { l -= 1; r += 1 }      O(n) per centre
//!   palindromes at a centre = ceil(width / 2) of its widest window

/// Two-pointer check over Unicode alphanumeric characters, compared after
/// full lowercase folding (`char::to_lowercase`).
pub fn is_palindrome(s: &str) -> bool {
    let mut kept = s
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase);
    loop {
        match (kept.next(), kept.next_back()) {
            (Some(a), Some(b)) if a != b => return false,
            (Some(_), Some(_)) => {}
            _ => return true,
        }
    }
}

/// Longest palindromic substring; the earliest wins among equal lengths.
pub fn longest_palindrome(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut best = (0, 0);
    for centre in 0..chars.len() {
        for (l, r) in [(centre, centre), (centre, centre + 1)] {
            if let Some((lo, hi)) = expand(&chars, l, r) {
                if hi - lo > best.1 - best.0 {
                    best = (lo, hi);
                }
            }
        }
    }
    chars.get(best.0..best.1).map(|w| w.iter().collect()).unwrap_or_default()
}

/// Number of palindromic substrings, counted by position.
pub fn count_substrings(s: &str) -> usize {
    let chars: Vec<char> = s.chars().collect();
    let mut count = 0;
    for centre in 0..chars.len() {
        for (l, r) in [(centre, centre), (centre, centre + 1)] {
            if let Some((lo, hi)) = expand(&chars, l, r) {
                count += (hi - lo + 1) / 2;
            }
        }
    }
    count
}

/// Grow the window `[l, r]` while it stays a palindrome. Returns the widest
/// half-open range reached, or `None` if `[l, r]` itself isn't one.
fn expand(chars: &[char], mut l: usize, mut r: usize) -> Option<(usize, usize)> {
    let mut widest = None;
    while r < chars.len() && chars[l] == chars[r] {
        widest = Some((l, r + 1));
        if l == 0 {
            break;
        }
        l -= 1;
        r += 1;
    }
    widest
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentence_palindromes() {
        assert!(is_palindrome("A man, a plan, a canal: Panama"));
        assert!(!is_palindrome("race a car"));
        assert!(is_palindrome(" "));
    }

    #[test]
    fn longest_from_either_centre() {
        assert_eq!(longest_palindrome("babad"), "bab");
        assert_eq!(longest_palindrome("cbbd"), "bb");
        assert_eq!(longest_palindrome(""), "");
    }

    #[test]
    fn counts_overlapping() {
        assert_eq!(count_substrings("abc"), 3);
        assert_eq!(count_substrings("aaa"), 6);
    }
}
