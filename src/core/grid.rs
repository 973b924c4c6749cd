use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::constants::GRID_SIZE;

/// An occupied cell: the color it was painted with and who placed it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub color: String,
    pub player: String,
}

/// The shared board, row-major with origin top-left. `None` is empty.
pub type Grid = Vec<Vec<Option<Cell>>>;

/// Returned when a placement request fails bounds or collision checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("piece cannot be placed at the requested position")]
pub struct InvalidPlacement;

/// Create an empty `GRID_SIZE` × `GRID_SIZE` grid.
pub fn empty_grid() -> Grid {
    vec![vec![None; GRID_SIZE]; GRID_SIZE]
}

/// Check whether `shape` can be written with its top-left corner at
/// `(x, y)`.
///
/// Every set cell of the shape must land inside the board on an empty
/// cell. A single out-of-bounds or colliding cell rejects the whole
/// placement; there is no partial placement. The origin may be negative.
pub fn is_valid_placement(grid: &Grid, shape: &[Vec<u8>], x: i32, y: i32) -> bool {
    for (row_idx, row) in shape.iter().enumerate() {
        for (col_idx, &cell) in row.iter().enumerate() {
            if cell != 1 {
                continue;
            }

            let grid_y = y + row_idx as i32;
            let grid_x = x + col_idx as i32;

            // Bounds
            if grid_y < 0
                || grid_y >= GRID_SIZE as i32
                || grid_x < 0
                || grid_x >= GRID_SIZE as i32
            {
                return false;
            }

            // Collision
            if grid[grid_y as usize][grid_x as usize].is_some() {
                return false;
            }
        }
    }

    true
}
