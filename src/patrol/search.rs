//! file: search.rs
//! author: Jacob Xie
//! date: 2025/12/17 20:02:11 Wednesday
//! brief: count single-obstacle placements that trap the guard

use std::num::NonZeroUsize;
use std::thread;

use tracing::{debug, trace};

use super::{AgentState, Cell, GridWorld, PatrolError, PatrolReport, simulate};

pub const DEFAULT_WORKERS: usize = 1;

/// Which cells get an extra obstacle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CandidateStrategy {
    /// Cells on the unobstructed patrol path. An obstacle anywhere else is
    /// never reached, so the path stays the baseline one.
    #[default]
    Visited,
    /// Every free cell.
    Exhaustive,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    pub strategy: CandidateStrategy,
    /// Worker threads; `0` picks the available parallelism.
    pub workers: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            strategy: CandidateStrategy::default(),
            workers: DEFAULT_WORKERS,
        }
    }
}

impl SearchConfig {
    fn worker_count(&self) -> usize {
        match self.workers {
            0 => thread::available_parallelism().map_or(1, NonZeroUsize::get),
            n => n,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchReport {
    pub candidates: usize,
    /// Loop-inducing cells, row-major.
    pub looping: Vec<Cell>,
}

impl SearchReport {
    pub fn loops(&self) -> usize {
        self.looping.len()
    }
}

pub struct ObstacleSearch<'g> {
    grid: &'g GridWorld,
    start: AgentState,
    config: SearchConfig,
}

impl<'g> ObstacleSearch<'g> {
    pub fn new(grid: &'g GridWorld, start: AgentState, config: SearchConfig) -> Self {
        Self {
            grid,
            start,
            config,
        }
    }

    /// Candidate cells in row-major order, never the start cell.
    pub fn candidates(&self, baseline: &PatrolReport) -> Vec<Cell> {
        let mut cells: Vec<Cell> = match self.config.strategy {
            CandidateStrategy::Visited => baseline.visited_positions.iter().copied().collect(),
            CandidateStrategy::Exhaustive => self.grid.free_cells().collect(),
        };
        cells.retain(|cell| *cell != self.start.position);
        cells.sort_unstable();
        cells
    }

    /// Re-runs the patrol once per candidate and collects the looping ones.
    pub fn run(&self, baseline: &PatrolReport) -> Result<SearchReport, PatrolError> {
        let candidates = self.candidates(baseline);
        let workers = self.config.worker_count().clamp(1, candidates.len().max(1));

        debug!(
            candidates = candidates.len(),
            workers,
            strategy = ?self.config.strategy,
            "searching obstacle placements"
        );

        let looping = if workers == 1 {
            self.scan(&candidates)?
        } else {
            self.scan_parallel(&candidates, workers)?
        };

        Ok(SearchReport {
            candidates: candidates.len(),
            looping,
        })
    }

    /// Whether an obstacle at `cell` traps the guard.
    pub fn traps(&self, cell: Cell) -> Result<bool, PatrolError> {
        let blocked = self.grid.with_obstacle(cell)?;
        let report = simulate(&blocked, self.start)?;
        trace!(%cell, outcome = ?report.outcome, moves = report.moves, "candidate");
        Ok(report.looped())
    }

    fn scan(&self, cells: &[Cell]) -> Result<Vec<Cell>, PatrolError> {
        let mut looping = Vec::new();
        for &cell in cells {
            if self.traps(cell)? {
                looping.push(cell);
            }
        }
        Ok(looping)
    }

    fn scan_parallel(&self, cells: &[Cell], workers: usize) -> Result<Vec<Cell>, PatrolError> {
        let chunk = cells.len().div_ceil(workers);

        let partials: Vec<Result<Vec<Cell>, PatrolError>> = thread::scope(|scope| {
            let handles: Vec<_> = cells
                .chunks(chunk)
                .map(|part| scope.spawn(move || self.scan(part)))
                .collect();

            handles
                .into_iter()
                .map(|handle| match handle.join() {
                    Ok(result) => result,
                    Err(panic) => std::panic::resume_unwind(panic),
                })
                .collect()
        });

        // Chunks are contiguous, so concatenating keeps row-major order.
        let mut looping = Vec::new();
        for partial in partials {
            looping.extend(partial?);
        }
        Ok(looping)
    }
}
