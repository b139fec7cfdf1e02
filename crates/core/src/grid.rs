//! Grid module - the immutable game board
//!
//! The grid is a 10x20 board where each cell is empty or occupied by a shape.
//! Uses a flat array in row-major order (y * WIDTH + x).
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom).
//!
//! A `Grid` is never mutated after construction; [`Grid::with_cells`] returns a
//! new grid with the requested writes applied.

use std::fmt;
use std::str::FromStr;

use crate::error::GridError;
use crate::types::{Cell, Point, ShapeKind, BOARD_HEIGHT, BOARD_SIZE, BOARD_WIDTH};

/// Row-major matrix view: `BOARD_HEIGHT` rows of `BOARD_WIDTH` columns
pub type Matrix = [[Cell; BOARD_WIDTH]; BOARD_HEIGHT];

/// The game grid - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    cells: [Cell; BOARD_SIZE],
}

impl Grid {
    /// Create a new empty grid
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Build a grid from a flat row-major cell sequence
    ///
    /// Fails with [`GridError::SizeMismatch`] unless exactly `BOARD_SIZE` cells are given.
    pub fn from_cells(cells: &[Cell]) -> Result<Self, GridError> {
        let cells: [Cell; BOARD_SIZE] = cells
            .try_into()
            .map_err(|_| GridError::size(cells.len()))?;
        Ok(Self { cells })
    }

    pub(crate) fn from_array(cells: [Cell; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    /// Get cell at a point
    /// Returns None if out of bounds
    pub fn get(&self, p: Point) -> Option<Cell> {
        p.index().map(|idx| self.cells[idx])
    }

    /// Check if a point is within bounds and empty
    pub fn is_free(&self, p: Point) -> bool {
        matches!(self.get(p), Some(None))
    }

    /// Check if a point is within bounds and occupied
    pub fn is_occupied(&self, p: Point) -> bool {
        matches!(self.get(p), Some(Some(_)))
    }

    /// Borrow row `y` (panics if `y >= BOARD_HEIGHT`)
    pub fn row(&self, y: usize) -> &[Cell] {
        let start = y * BOARD_WIDTH;
        &self.cells[start..start + BOARD_WIDTH]
    }

    /// Iterate rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks_exact(BOARD_WIDTH)
    }

    /// Copy into a row-major matrix
    pub fn to_matrix(&self) -> Matrix {
        let mut out = [[None; BOARD_WIDTH]; BOARD_HEIGHT];
        for (dst, src) in out.iter_mut().zip(self.rows()) {
            dst.copy_from_slice(src);
        }
        out
    }

    /// Build a grid from a row-major matrix
    pub fn from_matrix(matrix: &Matrix) -> Self {
        let mut cells = [None; BOARD_SIZE];
        for (dst, src) in cells.chunks_exact_mut(BOARD_WIDTH).zip(matrix.iter()) {
            dst.copy_from_slice(src);
        }
        Self { cells }
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn empty_cell_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_none()).count()
    }

    pub fn occupied_count(&self) -> usize {
        BOARD_SIZE - self.empty_cell_count()
    }

    /// All occupied points, row by row
    pub fn occupied_points(&self) -> impl Iterator<Item = Point> + '_ {
        self.cells.iter().enumerate().filter_map(|(i, c)| {
            c.map(|_| Point::new((i % BOARD_WIDTH) as i16, (i / BOARD_WIDTH) as i16))
        })
    }

    /// Return a new grid with `writes` applied in order
    ///
    /// Writes to points off the board are skipped.
    pub fn with_cells(&self, writes: impl IntoIterator<Item = (Point, Cell)>) -> Self {
        let mut cells = self.cells;
        for (p, cell) in writes {
            if let Some(idx) = p.index() {
                cells[idx] = cell;
            }
        }
        Self { cells }
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for Grid {
    type Err = GridError;

    /// Parse the text form: one char per cell, `' '` or `'.'` empty, a shape letter occupied.
    /// Line breaks are ignored so rows may be written one per line.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::with_capacity(BOARD_SIZE);
        for (index, ch) in s.chars().filter(|c| *c != '\n' && *c != '\r').enumerate() {
            let cell = match ch {
                ' ' | '.' => None,
                other => Some(
                    ShapeKind::from_symbol(other)
                        .ok_or(GridError::UnknownSymbol { symbol: other, index })?,
                ),
            };
            cells.push(cell);
        }
        Self::from_cells(&cells)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.rows().enumerate() {
            for cell in row {
                let ch = cell.map(|kind| kind.symbol()).unwrap_or('.');
                write!(f, "{}", ch)?;
            }
            if y + 1 < BOARD_HEIGHT {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_flat_layout() {
        let grid = Grid::new().with_cells([
            (Point::new(0, 0), Some(ShapeKind::I)),
            (Point::new(5, 10), Some(ShapeKind::T)),
        ]);

        assert_eq!(grid.get(Point::new(0, 0)), Some(Some(ShapeKind::I)));
        assert_eq!(grid.get(Point::new(5, 10)), Some(Some(ShapeKind::T)));
        assert_eq!(grid.cells[0], Some(ShapeKind::I));
        assert_eq!(grid.cells[10 * 10 + 5], Some(ShapeKind::T));
    }

    #[test]
    fn test_with_cells_leaves_original_untouched() {
        let grid = Grid::new();
        let next = grid.with_cells([(Point::new(3, 3), Some(ShapeKind::O))]);
        assert_eq!(grid.occupied_count(), 0);
        assert_eq!(next.occupied_count(), 1);
    }

    #[test]
    fn test_with_cells_skips_off_board_writes() {
        let grid = Grid::new().with_cells([
            (Point::new(-1, 0), Some(ShapeKind::O)),
            (Point::new(0, 20), Some(ShapeKind::O)),
        ]);
        assert_eq!(grid, Grid::new());
    }

    #[test]
    fn test_matrix_roundtrip() {
        let mut matrix = [[None; BOARD_WIDTH]; BOARD_HEIGHT];
        matrix[5][3] = Some(ShapeKind::O);
        matrix[19][9] = Some(ShapeKind::L);

        let grid = Grid::from_matrix(&matrix);
        assert_eq!(grid.get(Point::new(3, 5)), Some(Some(ShapeKind::O)));
        assert_eq!(grid.to_matrix(), matrix);
    }

    #[test]
    fn test_display_then_parse() {
        let grid = Grid::new().with_cells([
            (Point::new(0, 19), Some(ShapeKind::J)),
            (Point::new(9, 0), Some(ShapeKind::S)),
        ]);
        let text = grid.to_string();
        assert_eq!(text.lines().count(), BOARD_HEIGHT);
        assert!(text.lines().all(|l| l.len() == BOARD_WIDTH));
        assert_eq!(text.parse::<Grid>().unwrap(), grid);
    }

    #[test]
    fn test_parse_rejects_unknown_symbol() {
        let mut text = ".".repeat(BOARD_SIZE);
        text.replace_range(7..8, "#");
        assert_eq!(
            text.parse::<Grid>(),
            Err(GridError::UnknownSymbol {
                symbol: '#',
                index: 7
            })
        );
    }
}
