//! Game state module - immutable board snapshots and their transitions
//!
//! A [`GameState`] is the grid plus a game-over flag. The falling block's cells
//! are baked into the grid while it moves; the [`Block`] value tracks where the
//! block logically is. Every transition takes `&self`, leaves it untouched and
//! returns a [`Move`] holding both endpoints and the resulting block.

use crate::block::Block;
use crate::grid::{Grid, Matrix};
use crate::rows::{self, RowSet};
use crate::types::{Direction, ShapeKind};
use crate::validator::{self, Verdict};

/// What produced a [`Move`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveCause {
    Spawn,
    Step(Direction),
}

/// Transition record: resulting block plus the states before and after
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Move {
    pub block: Block,
    pub before: GameState,
    pub after: GameState,
    pub cause: MoveCause,
    pub verdict: Verdict,
}

impl Move {
    /// The requested position was legal and taken
    pub fn accepted(&self) -> bool {
        self.verdict.is_legal()
    }

    /// The block can no longer move down
    pub fn landed(&self) -> bool {
        !self.block.in_motion
    }

    pub fn grid_changed(&self) -> bool {
        self.before.grid != self.after.grid
    }
}

/// Immutable board snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    grid: Grid,
    full_rows: RowSet,
    game_over: bool,
}

impl GameState {
    /// Start condition: empty grid
    pub fn new() -> Self {
        Self::from_grid(Grid::new())
    }

    pub fn from_grid(grid: Grid) -> Self {
        Self::build(grid, false)
    }

    fn build(grid: Grid, game_over: bool) -> Self {
        let full_rows = rows::full_rows(&grid);
        Self {
            grid,
            full_rows,
            game_over,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Row-major matrix view (rows top to bottom)
    pub fn matrix(&self) -> Matrix {
        self.grid.to_matrix()
    }

    /// Full rows, ascending
    pub fn full_rows(&self) -> &[usize] {
        &self.full_rows
    }

    /// Set once a spawn found its cells occupied
    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Every cell is empty
    pub fn is_pristine(&self) -> bool {
        self.grid.occupied_count() == 0
    }

    /// Whether spawning `shape` would hit an occupied cell
    pub fn spawn_blocked(&self, shape: ShapeKind) -> bool {
        !self.spawn_verdict(shape).is_legal()
    }

    fn spawn_verdict(&self, shape: ShapeKind) -> Verdict {
        validator::check(&Block::spawn(shape).cells(), &[], &self.grid)
    }

    /// Place a new block of `shape` at the spawn anchor
    ///
    /// When a spawn cell is already occupied the game is over: the grid is
    /// returned unchanged, flagged `game_over`, and the block is not in motion.
    pub fn spawn(&self, shape: ShapeKind) -> Move {
        let block = Block::spawn(shape);
        let verdict = self.spawn_verdict(shape);

        let (block, after) = if verdict.is_legal() {
            let grid = self
                .grid
                .with_cells(block.cells().map(|p| (p, Some(shape))));
            (block, Self::from_grid(grid))
        } else {
            (block.landed(), Self::build(self.grid.clone(), true))
        };

        Move {
            block,
            before: self.clone(),
            after,
            cause: MoveCause::Spawn,
            verdict,
        }
    }

    /// Try to move `block` one cell in `direction`
    ///
    /// A legal move rewrites the block's cells. An illegal `Down` lands the
    /// block; any other illegal move is dropped. Rejections never touch the grid.
    pub fn apply(&self, block: Block, direction: Direction) -> Move {
        let held = block.cells();
        let target = block.anchor.offset(direction.offset());
        let candidate = block.cells_at(target);
        let verdict = validator::check(&candidate, &held, &self.grid);

        let (block, after) = if verdict.is_legal() {
            let vacate = held.map(|p| (p, None));
            let fill = candidate.map(|p| (p, Some(block.shape)));
            let grid = self.grid.with_cells(vacate.into_iter().chain(fill));
            (block.moved_to(target), Self::build(grid, self.game_over))
        } else if direction == Direction::Down {
            (block.landed(), self.clone())
        } else {
            (block, self.clone())
        };

        Move {
            block,
            before: self.clone(),
            after,
            cause: MoveCause::Step(direction),
            verdict,
        }
    }

    /// Remove `rows`, shifting everything above down
    pub fn clear_rows(&self, rows: &[usize]) -> Self {
        Self::build(rows::clear_rows(&self.grid, rows), self.game_over)
    }

    /// Remove exactly the rows reported by [`full_rows`](Self::full_rows)
    pub fn clear_full_rows(&self) -> Self {
        self.clear_rows(&self.full_rows)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Grid> for GameState {
    fn from(grid: Grid) -> Self {
        Self::from_grid(grid)
    }
}
