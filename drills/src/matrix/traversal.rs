use crate::error::ShapeError;

use super::dimensions;

/// Elements in clockwise spiral order starting at the top-left corner.
pub fn spiral_order(matrix: &[Vec<i32>]) -> Result<Vec<i32>, ShapeError> {
    let (rows, cols) = dimensions(matrix)?;
    let mut out = Vec::with_capacity(rows * cols);
    // Half-open bounds: rows [top, bottom), columns [left, right).
    let (mut top, mut bottom, mut left, mut right) = (0, rows, 0, cols);
    while top < bottom && left < right {
        out.extend_from_slice(&matrix[top][left..right]);
        top += 1;
        for row in &matrix[top..bottom] {
            out.push(row[right - 1]);
        }
        right -= 1;
        if top < bottom {
            out.extend(matrix[bottom - 1][left..right].iter().rev());
            bottom -= 1;
        }
        if left < right {
            for row in matrix[top..bottom].iter().rev() {
                out.push(row[left]);
            }
            left += 1;
        }
    }
    Ok(out)
}
