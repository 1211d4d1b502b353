//! Error types for board and game operations

use crate::coord::Coord;

/// Errors that abort an operation before any state is touched
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("coordinate {coord} out of range for board size {size}")]
    OutOfRange { coord: Coord, size: usize },

    #[error("invalid board size {size}: must be between 1 and {max}")]
    InvalidSize { size: usize, max: usize },
}

pub type Result<T> = std::result::Result<T, GameError>;
