//! file: cell.rs
//! author: Jacob Xie
//! date: 2025/12/14 23:45:17 Sunday
//! brief: grid coordinate

use std::fmt;

use super::Heading;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    pub fn offset(self, heading: Heading) -> Self {
        let (dr, dc) = heading.vector();
        Self {
            row: self.row + dr,
            col: self.col + dc,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
