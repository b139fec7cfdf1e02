//! Shapes module - fixed tetromino geometry
//!
//! Each shape is four (dx, dy) offsets from the block's anchor.
//! Shapes do not rotate, so one table per kind is all there is.

use crate::types::{Point, ShapeKind};

/// Offset of a single cell relative to the block anchor
pub type CellOffset = (i16, i16);

/// Shape of a block - 4 cell offsets from the anchor
pub type ShapeOffsets = [CellOffset; 4];

/// Get the offsets for a shape kind
pub fn offsets(kind: ShapeKind) -> ShapeOffsets {
    match kind {
        ShapeKind::T => [(0, 0), (1, 0), (2, 0), (1, 1)],
        ShapeKind::Z => [(0, 0), (1, 0), (1, 1), (2, 1)],
        ShapeKind::S => [(1, 0), (2, 0), (0, 1), (1, 1)],
        ShapeKind::L => [(0, 0), (0, 1), (0, 2), (1, 2)],
        ShapeKind::J => [(1, 0), (1, 1), (1, 2), (0, 2)],
        ShapeKind::O => [(0, 0), (0, 1), (1, 0), (1, 1)],
        // The I column starts one row below its anchor.
        ShapeKind::I => [(0, 1), (0, 2), (0, 3), (0, 4)],
    }
}

/// Absolute cells of `kind` when anchored at `anchor`
pub fn cells_at(kind: ShapeKind, anchor: Point) -> [Point; 4] {
    offsets(kind).map(|delta| anchor.offset(delta))
}

/// Lowest row offset of a shape (largest dy)
pub fn bottom_offset(kind: ShapeKind) -> i16 {
    offsets(kind).iter().map(|&(_, dy)| dy).max().unwrap_or(0)
}
