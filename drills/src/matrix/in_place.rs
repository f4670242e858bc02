//! In-place matrix rewrites.
//!
//! set_zeroes keeps its markers in row 0 and column 0:
//!   m[r][c] == 0  =>  m[r][0] = 0,  m[0][c] = 0       (r, c >= 1)
//!   row 0 / column 0 themselves are tracked by two flags
//!
//! rotate (clockwise, square n x n), per layer and offset:
//!   top -> right -> bottom -> left -> top

use crate::error::ShapeError;

use super::dimensions;

/// Zero every row and column that contains a zero, with O(1) extra space.
pub fn set_zeroes(matrix: &mut [Vec<i32>]) -> Result<(), ShapeError> {
    let (rows, cols) = dimensions(matrix)?;
    if rows == 0 || cols == 0 {
        return Ok(());
    }
    let first_col_zero = matrix.iter().any(|row| row[0] == 0);
    let first_row_zero = matrix[0].contains(&0);

    for r in 1..rows {
        for c in 1..cols {
            if matrix[r][c] == 0 {
                matrix[r][0] = 0;
                matrix[0][c] = 0;
            }
        }
    }
    for r in 1..rows {
        for c in 1..cols {
            if matrix[r][0] == 0 || matrix[0][c] == 0 {
                matrix[r][c] = 0;
            }
        }
    }
    if first_row_zero {
        matrix[0].fill(0);
    }
    if first_col_zero {
        for row in matrix.iter_mut() {
            row[0] = 0;
        }
    }
    Ok(())
}

/// Rotate a square matrix 90 degrees clockwise.
pub fn rotate(matrix: &mut [Vec<i32>]) -> Result<(), ShapeError> {
    let (rows, cols) = dimensions(matrix)?;
    if rows != cols {
        return Err(ShapeError::NotSquare { rows, cols });
    }
    let n = rows;
    for layer in 0..n / 2 {
        let (first, last) = (layer, n - 1 - layer);
        for i in first..last {
            let offset = i - first;
            let top = matrix[first][i];
            matrix[first][i] = matrix[last - offset][first];
            matrix[last - offset][first] = matrix[last][last - offset];
            matrix[last][last - offset] = matrix[i][last];
            matrix[i][last] = top;
        }
    }
    Ok(())
}
