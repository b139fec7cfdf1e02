//! Rows module - full-row detection and compaction
//!
//! Rows are always scanned as `BOARD_HEIGHT` rows of `BOARD_WIDTH` columns.

use arrayvec::ArrayVec;

use crate::grid::Grid;
use crate::types::{Cell, BOARD_HEIGHT, BOARD_SIZE, BOARD_WIDTH};

/// Row indices in ascending order
pub type RowSet = ArrayVec<usize, BOARD_HEIGHT>;

/// Check if a row is completely filled
pub fn is_row_full(grid: &Grid, y: usize) -> bool {
    if y >= BOARD_HEIGHT {
        return false;
    }
    grid.row(y).iter().all(|cell| cell.is_some())
}

/// Indices of all full rows, top to bottom
pub fn full_rows(grid: &Grid) -> RowSet {
    (0..BOARD_HEIGHT).filter(|&y| is_row_full(grid, y)).collect()
}

/// Remove `rows` and let everything above fall into the gap
///
/// Vacated rows at the top are empty. Out-of-range indices are ignored and
/// duplicates count once.
pub fn clear_rows(grid: &Grid, rows: &[usize]) -> Grid {
    let src = grid.cells();
    let mut cells: [Cell; BOARD_SIZE] = [None; BOARD_SIZE];
    let mut write_y = BOARD_HEIGHT;

    // Scan from bottom to top, copying kept rows to the lowest free slot.
    for read_y in (0..BOARD_HEIGHT).rev() {
        if rows.contains(&read_y) {
            continue;
        }
        write_y -= 1;
        let from = read_y * BOARD_WIDTH;
        let to = write_y * BOARD_WIDTH;
        cells[to..to + BOARD_WIDTH].copy_from_slice(&src[from..from + BOARD_WIDTH]);
    }

    // Rows 0..write_y stay empty.
    Grid::from_array(cells)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Point, ShapeKind};

    fn fill_row(grid: &Grid, y: i16, kind: ShapeKind) -> Grid {
        grid.with_cells((0..BOARD_WIDTH as i16).map(|x| (Point::new(x, y), Some(kind))))
    }

    #[test]
    fn test_empty_grid_has_no_full_rows() {
        assert!(full_rows(&Grid::new()).is_empty());
    }

    #[test]
    fn test_almost_full_row_is_not_full() {
        let grid = fill_row(&Grid::new(), 19, ShapeKind::I)
            .with_cells([(Point::new(4, 19), None)]);
        assert!(!is_row_full(&grid, 19));
        assert!(!is_row_full(&grid, 99));
    }

    #[test]
    fn test_full_rows_ascending() {
        let grid = fill_row(&fill_row(&Grid::new(), 18, ShapeKind::T), 3, ShapeKind::O);
        assert_eq!(full_rows(&grid).as_slice(), &[3, 18]);
    }

    #[test]
    fn test_clear_rows_shifts_rows_above() {
        let grid = fill_row(&Grid::new(), 19, ShapeKind::I)
            .with_cells([(Point::new(2, 18), Some(ShapeKind::T))]);
        let cleared = clear_rows(&grid, &[19]);

        assert_eq!(cleared.get(Point::new(2, 19)), Some(Some(ShapeKind::T)));
        assert_eq!(cleared.occupied_count(), 1);
        assert!(cleared.row(0).iter().all(|c| c.is_none()));
    }

    #[test]
    fn test_clear_rows_ignores_duplicates_and_out_of_range() {
        let grid = fill_row(&Grid::new(), 10, ShapeKind::S);
        let cleared = clear_rows(&grid, &[10, 10, 42]);
        assert_eq!(cleared, Grid::new());
    }
}
