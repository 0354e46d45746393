//! Regina models and solves the queens grid puzzle: on an N×N board split
//! into N color regions, place N queens so that every row, every column and
//! every region holds exactly one queen and no two queens touch diagonally.
//! Unlike classical N-Queens, only *adjacent* diagonal contact is forbidden;
//! queens further apart on the same diagonal are fine.
//!
//! The crate is the pure core of a scrape-solve-replay pipeline. Reading the
//! rendered page and clicking cells are external collaborators; they talk to
//! the engine through two serializable types only: a validated
//! [`PuzzleSpec`](puzzle::PuzzleSpec) in, an ordered
//! [`Placement`](solver::outcome::Placement) out. Each solve is a pure
//! function of its spec, with no state carried across instances.
//!
//! # Pipeline
//!
//! [`PuzzleSpec`](puzzle::PuzzleSpec) →
//! [`ConstraintModel::build`](model::ConstraintModel::build) →
//! [`SolverEngine::solve`](solver::engine::SolverEngine::solve) →
//! [`SolveOutcome`](solver::outcome::SolveOutcome).
//!
//! # Example
//!
//! A 4×4 board where a singleton region pins a queen on (0, 2); propagation
//! forces the rest of the placement.
//!
//! ```
//! use std::collections::{BTreeMap, BTreeSet};
//!
//! use regina::puzzle::{Cell, PuzzleSpec, RegionId};
//! use regina::solver::outcome::SolveOutcome;
//!
//! let mut regions: BTreeMap<RegionId, BTreeSet<Cell>> = BTreeMap::new();
//! regions.insert(RegionId(0), [Cell::new(0, 2)].into_iter().collect());
//! regions.insert(
//!     RegionId(1),
//!     [
//!         Cell::new(0, 0),
//!         Cell::new(0, 1),
//!         Cell::new(0, 3),
//!         Cell::new(1, 0),
//!         Cell::new(1, 1),
//!         Cell::new(1, 2),
//!         Cell::new(1, 3),
//!     ]
//!     .into_iter()
//!     .collect(),
//! );
//! regions.insert(RegionId(2), (0..4).map(|c| Cell::new(2, c)).collect());
//! regions.insert(RegionId(3), (0..4).map(|c| Cell::new(3, c)).collect());
//!
//! let spec = PuzzleSpec::new(4, regions)?;
//! let (outcome, _stats) = regina::solve_puzzle(&spec)?;
//!
//! let SolveOutcome::Solved(placement) = outcome else {
//!     panic!("expected a solution");
//! };
//! assert_eq!(
//!     placement.cells(),
//!     &[
//!         Cell::new(0, 2),
//!         Cell::new(1, 0),
//!         Cell::new(2, 3),
//!         Cell::new(3, 1)
//!     ]
//! );
//! # Ok::<(), regina::error::Error>(())
//! ```

pub mod error;
pub mod model;
pub mod puzzle;
pub mod solver;

use crate::{
    error::Result,
    model::ConstraintModel,
    puzzle::PuzzleSpec,
    solver::{engine::SolverEngine, outcome::SolveOutcome, stats::SearchStats},
};

/// Builds the constraint model for `spec` and solves it with a default
/// engine. Convenience for callers that don't need to configure the engine
/// or inspect the model.
pub fn solve_puzzle(spec: &PuzzleSpec) -> Result<(SolveOutcome, SearchStats)> {
    let model = ConstraintModel::build(spec);
    SolverEngine::new().solve(&model)
}
