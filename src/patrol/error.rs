//! file: error.rs
//! author: Jacob Xie
//! date: 2025/12/16 21:08:40 Tuesday
//! brief: error types for grid loading and patrol runs

use super::Cell;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum GridError {
    #[error("grid has no rows")]
    Empty,

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown tile {ch:?} at row {row}, col {col}")]
    UnknownTile { row: usize, col: usize, ch: char },

    #[error("no starting marker found")]
    MissingStart,

    #[error("second starting marker at {second}, first one at {first}")]
    MultipleStarts { first: Cell, second: Cell },

    #[error("cell {cell} is outside the {rows}x{cols} grid")]
    OutOfBounds { cell: Cell, rows: usize, cols: usize },

    #[error("starting cell {0} holds an obstacle")]
    BlockedStart(Cell),

    #[error("cell {0} already holds an obstacle")]
    AlreadyObstacle(Cell),
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PatrolError {
    #[error(transparent)]
    Grid(#[from] GridError),

    /// Cycle detection failed to stop the run within the state bound.
    #[error("patrol exceeded the budget of {budget} moves")]
    StepBudgetExceeded { budget: usize },
}
