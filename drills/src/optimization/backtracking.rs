use crate::data_structures::ArrayList;

/// Every multiset of `candidates` (reuse allowed) summing to `target`.
///
/// Combinations list candidates in input-index order and a repeated candidate
/// value is only tried at its first index, so each multiset appears once.
/// Non-positive candidates are skipped; a zero target yields the single empty
/// combination.
pub fn combination_sum(candidates: &[i32], target: i32) -> Vec<Vec<i32>> {
    fn backtrack(
        candidates: &[i32],
        start: usize,
        remaining: i32,
        path: &mut ArrayList<i32>,
        result: &mut Vec<Vec<i32>>,
    ) {
        if remaining == 0 {
            result.push(path.as_slice().to_vec());
            return;
        }
        for i in start..candidates.len() {
            let c = candidates[i];
            if c <= 0 || c > remaining || candidates[..i].contains(&c) {
                continue;
            }
            path.push(c);
            backtrack(candidates, i, remaining - c, path, result);
            path.pop();
        }
    }

    let mut result = Vec::new();
    backtrack(candidates, 0, target, &mut ArrayList::new(), &mut result);
    result
}
