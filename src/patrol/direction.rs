//! file: direction.rs
//! author: Jacob Xie
//! date: 2025/12/14 23:45:13 Sunday
//! brief:

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Heading {
    North,
    East,
    South,
    West,
}

impl Heading {
    pub const ALL: [Heading; 4] = [Heading::North, Heading::East, Heading::South, Heading::West];

    /// Unit step as `(row delta, col delta)`. Rows grow southwards.
    pub fn vector(self) -> (i32, i32) {
        match self {
            Heading::North => (-1, 0),
            Heading::East => (0, 1),
            Heading::South => (1, 0),
            Heading::West => (0, -1),
        }
    }

    /// Quarter turn clockwise.
    pub fn turn(self) -> Self {
        match self {
            Heading::North => Heading::East,
            Heading::East => Heading::South,
            Heading::South => Heading::West,
            Heading::West => Heading::North,
        }
    }

    pub fn from_marker(marker: char) -> Option<Self> {
        match marker {
            '^' => Some(Heading::North),
            '>' => Some(Heading::East),
            'v' => Some(Heading::South),
            '<' => Some(Heading::West),
            _ => None,
        }
    }

    pub fn marker(self) -> char {
        match self {
            Heading::North => '^',
            Heading::East => '>',
            Heading::South => 'v',
            Heading::West => '<',
        }
    }
}
