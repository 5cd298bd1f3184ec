use thiserror::Error;

use crate::pos::Position;

pub type Result<T> = std::result::Result<T, GameError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GameError {
    #[error("location count must be positive")]
    InvalidLocationCount,

    #[error("live fraction must be within [0, 1], got {0}")]
    InvalidLiveFraction(f64),

    #[error("position {pos} is outside of a {size}x{size} grid")]
    OutOfBounds { pos: Position, size: usize },

    #[error("grid is not square: row {row} has {len} cells, expected {size}")]
    NotSquare { row: usize, len: usize, size: usize },

    #[error("grid has no cells")]
    EmptyGrid,

    #[error("a grid of side {0} does not fit in memory")]
    TooLarge(usize),
}
