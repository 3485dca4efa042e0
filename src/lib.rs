//! file: lib.rs
//! author: Jacob Xie
//! date: 2025/12/16 21:01:10 Tuesday
//! brief: guard patrol simulation and loop-inducing obstacle search

pub mod app;
pub mod patrol;

pub use patrol::{
    AgentState, CandidateStrategy, Cell, GridError, GridWorld, Heading, ObstacleSearch, Outcome,
    PatrolError, PatrolReport, SearchConfig, SearchReport, Tile, parse_grid, simulate,
};
