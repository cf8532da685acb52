//! Error types for maze construction, search and reporting

use crate::grid::Position;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MazeError {
    #[error("Invalid maze dimensions {rows}x{cols}: both must be positive")]
    InvalidDimensions { rows: usize, cols: usize },

    #[error("Wall probability must be within 0.0..=1.0, got {0}")]
    InvalidWallProbability(f64),

    #[error("Maximum generation attempts must be positive")]
    InvalidAttempts,

    #[error("Row {row} has {found} cells, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("{what} {pos} is outside the grid")]
    OutOfBounds { what: &'static str, pos: Position },

    #[error("{what} {pos} is on a wall")]
    OnWall { what: &'static str, pos: Position },

    /// Parent links did not lead back to the start. Indicates a bug in the
    /// search loop, not a property of the maze.
    #[error("Parent chain broken at {at}: start is unreachable by backtracking")]
    BrokenParentChain { at: Position },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, MazeError>;
