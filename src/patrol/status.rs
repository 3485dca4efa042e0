//! file: status.rs
//! author: Jacob Xie
//! date: 2025/12/14 23:44:54 Sunday
//! brief:

/// How a patrol run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Exited,
    Looped,
}

/// What a single step of the movement protocol did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Move,
    Rotate,
    Exit,
}
