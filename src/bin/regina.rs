//! Developer harness: solve a puzzle described as JSON.
//!
//! The JSON shape mirrors the inbound data contract:
//!
//! ```json
//! {
//!   "size": 4,
//!   "regions": {
//!     "0": [{"row": 0, "col": 2}],
//!     "1": [{"row": 0, "col": 0}, ...]
//!   }
//! }
//! ```

use std::{fs, io::Read, path::PathBuf};

use clap::Parser;
use regina::{
    model::ConstraintModel,
    puzzle::PuzzleSpec,
    solver::{engine::SolverEngine, outcome::SolveOutcome, stats::render_stats_table},
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "regina", about = "Solve a queens grid puzzle described as JSON")]
struct Cli {
    /// Path to a JSON puzzle spec; reads stdin when omitted.
    puzzle: Option<PathBuf>,

    /// Render the per-clause search statistics table.
    #[arg(long)]
    stats: bool,

    /// Keep searching after the first solution to detect ambiguity.
    #[arg(long)]
    check_unique: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let raw = match &cli.puzzle {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    let spec: PuzzleSpec = serde_json::from_str(&raw)?;

    let model = ConstraintModel::build(&spec);
    let mut engine = SolverEngine::new();
    if cli.check_unique {
        engine = engine.with_uniqueness_check();
    }
    let (outcome, stats) = engine.solve(&model)?;

    match &outcome {
        SolveOutcome::Solved(placement) => {
            let n = spec.size();
            let mut board = vec![vec!['.'; n]; n];
            for cell in placement {
                board[cell.row][cell.col] = 'Q';
            }
            for row in board {
                println!("{}", row.iter().collect::<String>());
            }
            println!("{}", serde_json::to_string(placement)?);
        }
        SolveOutcome::NoSolution => println!("No solution."),
        SolveOutcome::MultipleSolutions => println!("Multiple solutions; puzzle is ambiguous."),
    }

    if cli.stats {
        println!("{}", render_stats_table(&stats, model.clauses()));
    }
    println!(
        "Finished in {:?} ({} branches, {} prunings)",
        stats.duration, stats.branches, stats.prunings
    );

    Ok(())
}
