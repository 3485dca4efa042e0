//! file: grid.rs
//! author: Jacob Xie
//! date: 2025/12/16 21:15:02 Tuesday
//! brief: immutable grid geometry and the text loader

use super::{AgentState, Cell, GridError, Heading};

const FREE: char = '.';
const OBSTACLE: char = '#';

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tile {
    Free,
    Obstacle,
}

/// Rectangular board of tiles, stored row-major.
///
/// A `GridWorld` is never changed after construction; [`GridWorld::with_obstacle`]
/// hands back a separate copy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridWorld {
    rows: usize,
    cols: usize,
    tiles: Vec<Tile>,
}

impl GridWorld {
    /// Builds a grid from rows of tiles. Every row must have the same length.
    pub fn from_rows(rows: Vec<Vec<Tile>>) -> Result<Self, GridError> {
        if rows.iter().all(Vec::is_empty) {
            return Err(GridError::Empty);
        }
        let expected = rows[0].len();

        let mut tiles = Vec::with_capacity(rows.len() * expected);
        for (row, line) in rows.iter().enumerate() {
            if line.len() != expected {
                return Err(GridError::RaggedRow {
                    row,
                    expected,
                    found: line.len(),
                });
            }
            tiles.extend_from_slice(line);
        }

        Ok(Self {
            rows: rows.len(),
            cols: expected,
            tiles,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn in_bounds(&self, cell: Cell) -> bool {
        (0..self.rows as i32).contains(&cell.row) && (0..self.cols as i32).contains(&cell.col)
    }

    pub fn kind_at(&self, cell: Cell) -> Result<Tile, GridError> {
        self.index(cell).map(|idx| self.tiles[idx])
    }

    /// Copy of this grid with `cell` turned into an obstacle.
    ///
    /// Refusing the guard's starting cell is up to the caller: the start is
    /// an ordinary free tile as far as the grid is concerned.
    pub fn with_obstacle(&self, cell: Cell) -> Result<Self, GridError> {
        let idx = self.index(cell)?;
        if self.tiles[idx] == Tile::Obstacle {
            return Err(GridError::AlreadyObstacle(cell));
        }

        let mut next = self.clone();
        next.tiles[idx] = Tile::Obstacle;
        Ok(next)
    }

    /// All coordinates, row-major.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let cols = self.cols;
        (0..self.tiles.len()).map(move |idx| Cell::new((idx / cols) as i32, (idx % cols) as i32))
    }

    pub fn free_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells()
            .zip(self.tiles.iter())
            .filter(|(_, tile)| **tile == Tile::Free)
            .map(|(cell, _)| cell)
    }

    pub fn obstacle_count(&self) -> usize {
        self.tiles.iter().filter(|tile| **tile == Tile::Obstacle).count()
    }

    /// Upper bound on distinct `(cell, heading)` states.
    pub fn state_count(&self) -> usize {
        self.rows * self.cols * Heading::ALL.len()
    }

    fn index(&self, cell: Cell) -> Result<usize, GridError> {
        if !self.in_bounds(cell) {
            return Err(GridError::OutOfBounds {
                cell,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(cell.row as usize * self.cols + cell.col as usize)
    }
}

/// Parses a character map into a grid and the guard's starting state.
///
/// `.` is free, `#` is an obstacle and one of `^ > v <` marks the start
/// (stored as a free tile). Blank lines before and after the map are
/// ignored; row numbers count from the first non-blank line.
pub fn parse_grid(input: &str) -> Result<(GridWorld, AgentState), GridError> {
    let lines: Vec<&str> = input.lines().map(|line| line.trim_end_matches('\r')).collect();
    let top = lines.iter().position(|line| !line.is_empty()).unwrap_or(0);
    let end = lines
        .iter()
        .rposition(|line| !line.is_empty())
        .map_or(0, |last| last + 1);
    let used = &lines[top..end.max(top)];

    let mut start: Option<AgentState> = None;
    let mut rows = Vec::with_capacity(used.len());

    for (row, line) in used.iter().enumerate() {
        let mut tiles = Vec::with_capacity(line.len());
        for (col, ch) in line.chars().enumerate() {
            let tile = match ch {
                FREE => Tile::Free,
                OBSTACLE => Tile::Obstacle,
                marker => {
                    let heading = Heading::from_marker(marker)
                        .ok_or(GridError::UnknownTile { row, col, ch })?;
                    let here = Cell::new(row as i32, col as i32);
                    if let Some(first) = start {
                        return Err(GridError::MultipleStarts {
                            first: first.position,
                            second: here,
                        });
                    }
                    start = Some(AgentState::new(here, heading));
                    Tile::Free
                }
            };
            tiles.push(tile);
        }
        rows.push(tiles);
    }

    let grid = GridWorld::from_rows(rows)?;
    let start = start.ok_or(GridError::MissingStart)?;
    Ok((grid, start))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL: &str = "\
.....
..#..
.....
.^...
..#..
";

    #[test]
    fn parses_dimensions_and_start() {
        let (grid, start) = parse_grid(SMALL).unwrap();
        assert_eq!((grid.rows(), grid.cols()), (5, 5));
        assert_eq!(start, AgentState::new(Cell::new(3, 1), Heading::North));
        assert_eq!(grid.kind_at(start.position), Ok(Tile::Free));
        assert_eq!(grid.obstacle_count(), 2);
    }

    #[test]
    fn bounds_cover_exactly_the_rectangle() {
        let (grid, _) = parse_grid("...\n.>.\n").unwrap();
        assert!(grid.in_bounds(Cell::new(0, 0)));
        assert!(grid.in_bounds(Cell::new(1, 2)));
        assert!(!grid.in_bounds(Cell::new(2, 0)));
        assert!(!grid.in_bounds(Cell::new(0, 3)));
        assert!(!grid.in_bounds(Cell::new(-1, 0)));
        assert!(!grid.in_bounds(Cell::new(0, -1)));
    }

    #[test]
    fn kind_at_refuses_to_clamp() {
        let (grid, _) = parse_grid(SMALL).unwrap();
        assert_eq!(
            grid.kind_at(Cell::new(5, 0)),
            Err(GridError::OutOfBounds {
                cell: Cell::new(5, 0),
                rows: 5,
                cols: 5
            })
        );
    }

    #[test]
    fn with_obstacle_leaves_original_untouched() {
        let (grid, _) = parse_grid(SMALL).unwrap();
        let before = grid.clone();
        let blocked = grid.with_obstacle(Cell::new(0, 0)).unwrap();

        assert_eq!(grid, before);
        let differing: Vec<Cell> = grid
            .cells()
            .filter(|cell| grid.kind_at(*cell) != blocked.kind_at(*cell))
            .collect();
        assert_eq!(differing, vec![Cell::new(0, 0)]);
        assert_eq!(blocked.obstacle_count(), grid.obstacle_count() + 1);
    }

    #[test]
    fn with_obstacle_rejects_bad_cells() {
        let (grid, _) = parse_grid(SMALL).unwrap();
        assert_eq!(
            grid.with_obstacle(Cell::new(1, 2)),
            Err(GridError::AlreadyObstacle(Cell::new(1, 2)))
        );
        assert!(matches!(
            grid.with_obstacle(Cell::new(0, 9)),
            Err(GridError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn ragged_rows_fail_fast() {
        assert_eq!(
            parse_grid("...\n.^\n...").unwrap_err(),
            GridError::RaggedRow {
                row: 1,
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn start_marker_is_required_and_unique() {
        assert_eq!(parse_grid("...\n...").unwrap_err(), GridError::MissingStart);
        assert_eq!(
            parse_grid("^..\n..<").unwrap_err(),
            GridError::MultipleStarts {
                first: Cell::new(0, 0),
                second: Cell::new(1, 2)
            }
        );
    }

    #[test]
    fn rejects_unknown_tiles_and_empty_input() {
        assert_eq!(
            parse_grid(".^.\n.x.").unwrap_err(),
            GridError::UnknownTile {
                row: 1,
                col: 1,
                ch: 'x'
            }
        );
        assert_eq!(parse_grid("").unwrap_err(), GridError::Empty);
        assert_eq!(parse_grid("\n\n").unwrap_err(), GridError::Empty);
    }

    #[test]
    fn tolerates_crlf_and_trailing_blank_lines() {
        let (grid, start) = parse_grid("..\r\n.v\r\n\r\n\n").unwrap();
        assert_eq!((grid.rows(), grid.cols()), (2, 2));
        assert_eq!(start.heading, Heading::South);
    }

    #[test]
    fn leading_blank_lines_are_skipped() {
        let (grid, start) = parse_grid("\n\n.^\n..\n").unwrap();
        assert_eq!((grid.rows(), grid.cols()), (2, 2));
        assert_eq!(start.position, Cell::new(0, 1));
    }

    #[test]
    fn empty_first_row_is_ragged_not_empty() {
        assert_eq!(
            GridWorld::from_rows(vec![vec![], vec![Tile::Free]]).unwrap_err(),
            GridError::RaggedRow {
                row: 1,
                expected: 0,
                found: 1
            }
        );
        assert_eq!(GridWorld::from_rows(vec![]).unwrap_err(), GridError::Empty);
    }

    #[test]
    fn free_cells_skip_obstacles_in_row_major_order() {
        let (grid, _) = parse_grid("#.\n^#").unwrap();
        let free: Vec<Cell> = grid.free_cells().collect();
        assert_eq!(free, vec![Cell::new(0, 1), Cell::new(1, 0)]);
        assert_eq!(grid.state_count(), 16);
    }
}
