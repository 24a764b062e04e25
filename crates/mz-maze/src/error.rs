//! Maze-subsystem error type.

use thiserror::Error;

use mz_core::Coord;

/// Errors produced by `mz-maze`.
#[derive(Debug, Error)]
pub enum MazeError {
    #[error("grid must have at least one cell, got {width}x{height}")]
    EmptyGrid { width: u32, height: u32 },

    #[error("cell {0} is outside the grid")]
    OutOfBounds(Coord),

    #[error("row {row} has {got} cells, expected {expected}")]
    RaggedRows { row: usize, expected: usize, got: usize },

    #[error("maze has no open cell to place an agent on")]
    NoOpenCell,

    #[error("no open cell is far enough from the runner at {runner} to place the sentry")]
    SentryUnplaceable { runner: Coord },

    #[error("no cell is reachable from the runner at {runner}; cannot place the exit")]
    UnreachableExit { runner: Coord },
}

pub type MazeResult<T> = Result<T, MazeError>;
