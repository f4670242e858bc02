//! Level-order text form of a tree.
//!
//! Nodes are written breadth-first as comma-separated values with `#` for
//! each absent child, including the trailing run under the last level. The
//! empty tree is the empty string.

use log::debug;

use crate::data_structures::Queue;
use crate::error::CodecError;

use super::{from_level_order, Tree, TreeNode};

pub const NULL_MARKER: &str = "#";

pub fn serialize(tree: &Tree) -> String {
    let Some(root) = tree.as_deref() else {
        return String::new();
    };
    let mut tokens: Vec<String> = Vec::new();
    let mut queue: Queue<Option<&TreeNode>> = Queue::new();
    queue.enqueue(Some(root));
    while let Some(slot) = queue.dequeue() {
        match slot {
            Some(node) => {
                tokens.push(node.val.to_string());
                queue.enqueue(node.left.as_deref());
                queue.enqueue(node.right.as_deref());
            }
            None => tokens.push(NULL_MARKER.to_string()),
        }
    }
    tokens.join(",")
}

pub fn deserialize(data: &str) -> Result<Tree, CodecError> {
    if data.is_empty() {
        return Ok(None);
    }
    let slots = data
        .split(',')
        .map(|token| match token.trim() {
            NULL_MARKER => Ok(None),
            value => value
                .parse::<i32>()
                .map(Some)
                .map_err(|_| CodecError::InvalidToken(token.to_string())),
        })
        .collect::<Result<Vec<_>, _>>()
        .map_err(|err| {
            debug!("rejecting serialized tree: {err}");
            err
        })?;
    Ok(from_level_order(&slots))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_markers_are_written() {
        let tree = from_level_order(&[Some(1), Some(2), Some(3), None, None, Some(4), Some(5)]);
        assert_eq!(serialize(&tree), "1,2,3,#,#,4,5,#,#,#,#");
    }

    #[test]
    fn parse_back() {
        let text = "1,2,3,#,#,4,5,#,#,#,#";
        assert_eq!(serialize(&deserialize(text).unwrap()), text);
        assert_eq!(deserialize("1,2,3,#,#,4,5"), deserialize(text));
    }

    #[test]
    fn empty_and_bad_tokens() {
        assert_eq!(serialize(&None), "");
        assert_eq!(deserialize(""), Ok(None));
        assert_eq!(deserialize("#"), Ok(None));
        assert_eq!(deserialize("1,x"), Err(CodecError::InvalidToken("x".into())));
    }
}
