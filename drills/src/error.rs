//! Error types shared across the crate.
//!
//! Containers only fail on bounds; emptiness is reported through `Option`.
//! The remaining enums cover input validation for the exercises that parse or
//! index into caller-supplied structure.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContainerError {
    #[error("index {index} is out of bounds for length {len}")]
    OutOfBounds { index: usize, len: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    #[error("missing `#` delimiter after length prefix starting at byte {0}")]
    MissingDelimiter(usize),
    #[error("invalid length prefix `{0}`")]
    InvalidLength(String),
    #[error("chunk of {len} bytes at byte {offset} runs past the end of the input")]
    Truncated { offset: usize, len: usize },
    #[error("chunk at byte {0} does not end on a character boundary")]
    SplitCharacter(usize),
    #[error("invalid node token `{0}`")]
    InvalidToken(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("edge ({from}, {to}) references a vertex outside 0..{vertices}")]
    VertexOutOfRange {
        from: usize,
        to: usize,
        vertices: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeBuildError {
    #[error("preorder has {preorder} values but inorder has {inorder}")]
    LengthMismatch { preorder: usize, inorder: usize },
    #[error("value {0} from preorder does not appear in the inorder slice")]
    MissingValue(i32),
    #[error("value {0} appears more than once in inorder")]
    DuplicateValue(i32),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("row {row} has {found} columns, expected {expected}")]
    Ragged {
        row: usize,
        found: usize,
        expected: usize,
    },
    #[error("expected a square matrix, found {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },
}
