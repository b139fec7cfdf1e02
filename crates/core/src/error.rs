//! Error types for grid construction

use crate::types::BOARD_SIZE;

/// Failure to build a [`Grid`](crate::grid::Grid) from external input
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GridError {
    /// Wrong number of cells
    #[display("grid must consist of {expected} cells, current size is {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    /// Character in a text grid that is neither empty nor a shape letter
    #[display("unknown cell symbol {symbol:?} at index {index}")]
    UnknownSymbol { symbol: char, index: usize },
}

impl GridError {
    pub(crate) fn size(actual: usize) -> Self {
        GridError::SizeMismatch {
            expected: BOARD_SIZE,
            actual,
        }
    }
}

impl std::error::Error for GridError {}
