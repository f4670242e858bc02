//! Matrix and grid exercises over row-major `Vec<Vec<T>>`.

pub mod in_place;
pub mod traversal;
pub mod word_search;

pub use in_place::{rotate, set_zeroes};
pub use traversal::spiral_order;
pub use word_search::word_search;

use crate::error::ShapeError;

/// `(rows, cols)` of a rectangular matrix.
pub(crate) fn dimensions<T>(matrix: &[Vec<T>]) -> Result<(usize, usize), ShapeError> {
    let cols = matrix.first().map_or(0, Vec::len);
    for (row, r) in matrix.iter().enumerate() {
        if r.len() != cols {
            return Err(ShapeError::Ragged {
                row,
                found: r.len(),
                expected: cols,
            });
        }
    }
    Ok((matrix.len(), cols))
}

/// In-bounds 4-neighbours of `(r, c)`; rows may differ in length.
pub(crate) fn neighbours<T>(
    grid: &[Vec<T>],
    r: usize,
    c: usize,
) -> impl Iterator<Item = (usize, usize)> + '_ {
    const STEPS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
    STEPS.iter().filter_map(move |&(dr, dc)| {
        let nr = r.checked_add_signed(dr)?;
        let nc = c.checked_add_signed(dc)?;
        (nc < grid.get(nr)?.len()).then_some((nr, nc))
    })
}
