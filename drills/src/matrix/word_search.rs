use super::neighbours;

/// Whether `word` can be traced through edge-adjacent cells, each used once.
pub fn word_search(board: &[Vec<char>], word: &str) -> bool {
    fn trace(
        board: &[Vec<char>],
        word: &[char],
        (r, c): (usize, usize),
        visited: &mut [Vec<bool>],
    ) -> bool {
        if visited[r][c] || board[r][c] != word[0] {
            return false;
        }
        if word.len() == 1 {
            return true;
        }
        visited[r][c] = true;
        let found = neighbours(board, r, c).any(|next| trace(board, &word[1..], next, visited));
        visited[r][c] = false;
        found
    }

    let word: Vec<char> = word.chars().collect();
    if word.is_empty() {
        return true;
    }
    let mut visited: Vec<Vec<bool>> = board.iter().map(|row| vec![false; row.len()]).collect();
    (0..board.len())
        .flat_map(|r| (0..board[r].len()).map(move |c| (r, c)))
        .any(|cell| trace(board, &word, cell, &mut visited))
}
