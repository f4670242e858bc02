//! Flood fills over character and height grids, driven by an explicit stack.

use crate::data_structures::Stack;
use crate::error::ShapeError;
use crate::matrix::{dimensions, neighbours};

/// Number of 4-connected groups of `'1'` cells.
pub fn num_islands(grid: &[Vec<char>]) -> usize {
    let mut seen: Vec<Vec<bool>> = grid.iter().map(|row| vec![false; row.len()]).collect();
    let mut stack = Stack::new();
    let mut count = 0;
    for r in 0..grid.len() {
        for c in 0..grid[r].len() {
            if grid[r][c] != '1' || seen[r][c] {
                continue;
            }
            count += 1;
            seen[r][c] = true;
            stack.push((r, c));
            while let Some((cr, cc)) = stack.pop() {
                for (nr, nc) in neighbours(grid, cr, cc) {
                    if grid[nr][nc] == '1' && !seen[nr][nc] {
                        seen[nr][nc] = true;
                        stack.push((nr, nc));
                    }
                }
            }
        }
    }
    count
}

/// Cells whose water can flow (to equal or lower neighbours) into both the
/// Pacific (top/left border) and the Atlantic (bottom/right border), in
/// row-major order.
pub fn pacific_atlantic(heights: &[Vec<i32>]) -> Result<Vec<(usize, usize)>, ShapeError> {
    let (rows, cols) = dimensions(heights)?;
    if rows == 0 || cols == 0 {
        return Ok(Vec::new());
    }
    let pacific = flood_uphill(
        heights,
        (0..rows).map(|r| (r, 0)).chain((0..cols).map(|c| (0, c))),
    );
    let atlantic = flood_uphill(
        heights,
        (0..rows).map(|r| (r, cols - 1)).chain((0..cols).map(|c| (rows - 1, c))),
    );
    Ok((0..rows)
        .flat_map(|r| (0..cols).map(move |c| (r, c)))
        .filter(|&(r, c)| pacific[r][c] && atlantic[r][c])
        .collect())
}

/// Cells reachable from `sources` by never stepping downhill.
fn flood_uphill<I>(heights: &[Vec<i32>], sources: I) -> Vec<Vec<bool>>
where
    I: IntoIterator<Item = (usize, usize)>,
{
    let mut reached: Vec<Vec<bool>> = heights.iter().map(|row| vec![false; row.len()]).collect();
    let mut stack = Stack::new();
    for (r, c) in sources {
        if !reached[r][c] {
            reached[r][c] = true;
            stack.push((r, c));
        }
    }
    while let Some((r, c)) = stack.pop() {
        for (nr, nc) in neighbours(heights, r, c) {
            if !reached[nr][nc] && heights[nr][nc] >= heights[r][c] {
                reached[nr][nc] = true;
                stack.push((nr, nc));
            }
        }
    }
    reached
}
