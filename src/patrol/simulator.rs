//! file: simulator.rs
//! author: Jacob Xie
//! date: 2025/12/16 22:31:47 Tuesday
//! brief: single guard patrol with cycle detection

use std::collections::HashSet;

use tracing::debug;

use super::{Action, Cell, GridError, GridWorld, Heading, Outcome, PatrolError, Tile};

/// Rotations in a row after which the guard is known to be boxed in.
const MAX_IDLE_TURNS: usize = 4;

/// Position and heading of the guard. Also the key used for cycle detection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AgentState {
    pub position: Cell,
    pub heading: Heading,
}

impl AgentState {
    pub const fn new(position: Cell, heading: Heading) -> Self {
        Self { position, heading }
    }
}

/// One step of the movement protocol, with no bookkeeping.
///
/// Blocked: turn in place. Open: step forward. Edge: exit and keep the
/// state as is.
pub fn advance(grid: &GridWorld, state: AgentState) -> Result<(AgentState, Action), GridError> {
    let ahead = state.position.offset(state.heading);
    if !grid.in_bounds(ahead) {
        return Ok((state, Action::Exit));
    }

    match grid.kind_at(ahead)? {
        Tile::Obstacle => Ok((
            AgentState::new(state.position, state.heading.turn()),
            Action::Rotate,
        )),
        Tile::Free => Ok((AgentState::new(ahead, state.heading), Action::Move)),
    }
}

/// Everything a finished run observed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PatrolReport {
    pub outcome: Outcome,
    /// Cells the guard stood on, the start included.
    pub visited_positions: HashSet<Cell>,
    /// States entered by committed moves. The start state is not among them.
    pub visited_states: HashSet<AgentState>,
    /// State that closed the cycle, for looped runs.
    pub trigger: Option<AgentState>,
    pub moves: usize,
    pub rotations: usize,
    pub last: AgentState,
}

impl PatrolReport {
    pub fn exited(&self) -> bool {
        self.outcome == Outcome::Exited
    }

    pub fn looped(&self) -> bool {
        self.outcome == Outcome::Looped
    }

    pub fn distinct_cells(&self) -> usize {
        self.visited_positions.len()
    }
}

/// Owns the mutable side of one run. Build a new one per run.
pub struct PatrolSimulator<'g> {
    grid: &'g GridWorld,
    state: AgentState,
    visited_positions: HashSet<Cell>,
    visited_states: HashSet<AgentState>,
    moves: usize,
    rotations: usize,
    idle_turns: usize,
    trigger: Option<AgentState>,
}

impl<'g> PatrolSimulator<'g> {
    /// Fails when `start` lies outside the grid or on an obstacle.
    pub fn new(grid: &'g GridWorld, start: AgentState) -> Result<Self, GridError> {
        if grid.kind_at(start.position)? == Tile::Obstacle {
            return Err(GridError::BlockedStart(start.position));
        }

        let mut visited_positions = HashSet::new();
        visited_positions.insert(start.position);

        Ok(Self {
            grid,
            state: start,
            visited_positions,
            visited_states: HashSet::new(),
            moves: 0,
            rotations: 0,
            idle_turns: 0,
            trigger: None,
        })
    }

    /// Advances by one protocol step. `None` while the patrol goes on.
    pub fn step(&mut self) -> Result<Option<Outcome>, GridError> {
        let (next, action) = advance(self.grid, self.state)?;
        match action {
            Action::Exit => Ok(Some(Outcome::Exited)),
            Action::Rotate => {
                self.state = next;
                self.rotations += 1;
                self.idle_turns += 1;
                if self.idle_turns >= MAX_IDLE_TURNS {
                    self.trigger = Some(next);
                    return Ok(Some(Outcome::Looped));
                }
                Ok(None)
            }
            Action::Move => {
                if self.visited_states.contains(&next) {
                    self.trigger = Some(next);
                    return Ok(Some(Outcome::Looped));
                }
                self.state = next;
                self.moves += 1;
                self.idle_turns = 0;
                self.visited_states.insert(next);
                self.visited_positions.insert(next.position);
                Ok(None)
            }
        }
    }

    /// Steps until the guard exits or repeats itself.
    pub fn run(mut self) -> Result<PatrolReport, PatrolError> {
        let budget = self.grid.state_count();

        while self.moves <= budget {
            let Some(outcome) = self.step()? else {
                continue;
            };

            debug!(
                ?outcome,
                moves = self.moves,
                rotations = self.rotations,
                cells = self.visited_positions.len(),
                "patrol finished"
            );

            return Ok(PatrolReport {
                outcome,
                visited_positions: self.visited_positions,
                visited_states: self.visited_states,
                trigger: self.trigger,
                moves: self.moves,
                rotations: self.rotations,
                last: self.state,
            });
        }

        Err(PatrolError::StepBudgetExceeded { budget })
    }
}

/// Runs a fresh patrol over `grid` from `start`.
pub fn simulate(grid: &GridWorld, start: AgentState) -> Result<PatrolReport, PatrolError> {
    PatrolSimulator::new(grid, start)?.run()
}
