use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use guard_patrol::{
    CandidateStrategy, SearchConfig,
    app::{self, Summary},
    patrol::DEFAULT_WORKERS,
};

#[derive(Parser)]
#[command(
    name = "guard-patrol",
    about = "Count the cells a patrolling guard covers and the obstacles that trap it"
)]
struct Cli {
    /// Map file: `.` free, `#` obstacle, one of `^ > v <` for the guard
    input: PathBuf,

    /// Try every free cell instead of only the cells on the guard's path
    #[arg(long)]
    exhaustive: bool,

    /// Worker threads for the obstacle search (0 = all cores)
    #[arg(long, default_value_t = DEFAULT_WORKERS)]
    workers: usize,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = SearchConfig {
        strategy: if cli.exhaustive {
            CandidateStrategy::Exhaustive
        } else {
            CandidateStrategy::Visited
        },
        workers: cli.workers,
    };

    let summary: Summary = app::run(&cli.input, &config)?;
    println!("{summary}");
    Ok(())
}
