//! Validator module - move legality
//!
//! A candidate position is legal when every cell the block would newly occupy
//! is on the board and empty. Cells the block already holds are exempt, so a
//! block never collides with itself.

use arrayvec::ArrayVec;

use crate::grid::Grid;
use crate::types::Point;

/// Outcome of checking a candidate position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    Legal,
    /// First newly occupied cell found off the board
    OutOfBounds(Point),
    /// First newly occupied cell found already filled
    Occupied(Point),
}

impl Verdict {
    pub fn is_legal(self) -> bool {
        matches!(self, Verdict::Legal)
    }
}

/// Candidate cells minus the cells the block already holds (duplicates dropped)
pub fn newly_occupied(candidate: &[Point], held: &[Point]) -> ArrayVec<Point, 4> {
    let mut out = ArrayVec::new();
    for p in candidate {
        if held.contains(p) || out.contains(p) {
            continue;
        }
        if out.try_push(*p).is_err() {
            break;
        }
    }
    out
}

/// Check a candidate position, reporting the first offending cell
///
/// Bounds are checked for all cells before occupancy, so a move that is both
/// off the board and colliding reports `OutOfBounds`.
pub fn check(candidate: &[Point], held: &[Point], grid: &Grid) -> Verdict {
    let fresh = newly_occupied(candidate, held);

    if let Some(p) = fresh.iter().find(|p| !p.in_bounds()) {
        return Verdict::OutOfBounds(*p);
    }
    if let Some(p) = fresh.iter().find(|p| grid.is_occupied(**p)) {
        return Verdict::Occupied(*p);
    }
    Verdict::Legal
}

/// Whether a candidate position is legal
pub fn is_legal(candidate: &[Point], held: &[Point], grid: &Grid) -> bool {
    check(candidate, held, grid).is_legal()
}
