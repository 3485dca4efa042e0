//! file: app.rs
//! author: Jacob Xie
//! date: 2025/12/14 23:45:00 Sunday
//! brief:

use std::{fmt, fs, path::Path};

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::patrol::{ObstacleSearch, SearchConfig, parse_grid, simulate};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Summary {
    pub visited: usize,
    pub loops: usize,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "distinct cells visited: {}", self.visited)?;
        write!(f, "loop-inducing obstacles: {}", self.loops)
    }
}

pub fn run(path: &Path, config: &SearchConfig) -> Result<Summary> {
    let input = fs::read_to_string(path)
        .with_context(|| format!("failed to read map from {}", path.display()))?;
    solve(&input, config).with_context(|| format!("failed to patrol {}", path.display()))
}

pub fn solve(input: &str, config: &SearchConfig) -> Result<Summary> {
    let (grid, start) = parse_grid(input)?;
    info!(
        rows = grid.rows(),
        cols = grid.cols(),
        obstacles = grid.obstacle_count(),
        start = %start.position,
        heading = %start.heading.marker(),
        "map loaded"
    );

    let baseline = simulate(&grid, start)?;
    if baseline.looped() {
        warn!("guard never leaves the unmodified map");
    }

    let search = ObstacleSearch::new(&grid, start, *config).run(&baseline)?;
    info!(
        candidates = search.candidates,
        loops = search.loops(),
        "obstacle search done"
    );

    Ok(Summary {
        visited: baseline.distinct_cells(),
        loops: search.loops(),
    })
}
