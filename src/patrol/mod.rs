//! file: mod.rs
//! author: Jacob Xie
//! date: 2025/12/16 21:02:36 Tuesday
//! brief:

mod cell;
mod direction;
mod error;
mod grid;
mod search;
mod simulator;
mod status;

pub use cell::Cell;
pub use direction::Heading;
pub use error::{GridError, PatrolError};
pub use grid::{GridWorld, Tile, parse_grid};
pub use search::{CandidateStrategy, DEFAULT_WORKERS, ObstacleSearch, SearchConfig, SearchReport};
pub use simulator::{AgentState, PatrolReport, PatrolSimulator, advance, simulate};
pub use status::{Action, Outcome};
