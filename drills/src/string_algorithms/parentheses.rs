use crate::data_structures::Stack;

/// Brackets `()[]{}` must close in LIFO order. Any other character is pushed
/// as an opener that no closer matches, so it makes the input invalid.
pub fn is_valid_parentheses(s: &str) -> bool {
    let mut open: Stack<char> = Stack::new();
    for ch in s.chars() {
        let want = match ch {
            ')' => '(',
            ']' => '[',
            '}' => '{',
            other => {
                open.push(other);
                continue;
            }
        };
        if open.pop() != Some(want) {
            return false;
        }
    }
    open.is_empty()
}
