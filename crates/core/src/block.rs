//! Block module - the live falling piece
//!
//! A block is a shape plus an anchor. Its four cells are always the shape
//! offsets applied to the anchor. Blocks are plain `Copy` values that travel
//! alongside a [`GameState`](crate::state::GameState); each transition hands
//! back the updated block in its [`Move`](crate::state::Move).

use crate::shapes::cells_at;
use crate::types::{Point, ShapeKind, SPAWN_ANCHOR};

/// Active falling block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Block {
    pub shape: ShapeKind,
    pub anchor: Point,
    /// Cleared once a downward move is rejected
    pub in_motion: bool,
}

impl Block {
    /// Create a moving block at `anchor`
    pub fn new(shape: ShapeKind, anchor: Point) -> Self {
        Self {
            shape,
            anchor,
            in_motion: true,
        }
    }

    /// Create a block at the spawn anchor
    pub fn spawn(shape: ShapeKind) -> Self {
        Self::new(shape, SPAWN_ANCHOR)
    }

    /// Absolute cells at the current anchor
    pub fn cells(&self) -> [Point; 4] {
        cells_at(self.shape, self.anchor)
    }

    /// Absolute cells the block would cover at `anchor`
    pub fn cells_at(&self, anchor: Point) -> [Point; 4] {
        cells_at(self.shape, anchor)
    }

    pub(crate) fn moved_to(self, anchor: Point) -> Self {
        Self { anchor, ..self }
    }

    pub(crate) fn landed(self) -> Self {
        Self {
            in_motion: false,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::offsets;

    #[test]
    fn spawned_block_is_moving_at_spawn_anchor() {
        let block = Block::spawn(ShapeKind::T);
        assert_eq!(block.anchor, Point::new(4, 0));
        assert!(block.in_motion);
    }

    #[test]
    fn cells_follow_anchor() {
        let block = Block::new(ShapeKind::L, Point::new(2, 7));
        for (cell, (dx, dy)) in block.cells().iter().zip(offsets(ShapeKind::L)) {
            assert_eq!(*cell, Point::new(2 + dx, 7 + dy));
        }
        assert_eq!(block.moved_to(Point::new(3, 7)).cells_at(Point::new(2, 7)), block.cells());
    }

    #[test]
    fn landing_keeps_position() {
        let block = Block::new(ShapeKind::O, Point::new(1, 1)).landed();
        assert!(!block.in_motion);
        assert_eq!(block.anchor, Point::new(1, 1));
    }
}
