use std::backtrace::Backtrace;

use crate::puzzle::{Cell, RegionId};

pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Everything that can go wrong inside the engine.
///
/// The invalid-spec family (`EmptyBoard` through `UncoveredCell`) is raised at
/// [`PuzzleSpec`](crate::puzzle::PuzzleSpec) construction, before any model is
/// built. `InternalInconsistency` is raised by the solver's post-check and
/// always indicates a bug in propagation or search, never bad input. An
/// unsatisfiable puzzle is *not* an error; it is reported as
/// [`SolveOutcome::NoSolution`](crate::solver::outcome::SolveOutcome::NoSolution).
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("a board of size 0 has no cells to place queens on")]
    EmptyBoard,
    #[error("expected {expected} color regions for a {expected}x{expected} board, got {actual}")]
    RegionCountMismatch { expected: usize, actual: usize },
    #[error("region {region} contains cell {cell}, which is outside the {size}x{size} board")]
    CellOutOfBounds {
        region: RegionId,
        cell: Cell,
        size: usize,
    },
    #[error("cell {cell} belongs to both region {first} and region {second}")]
    OverlappingCell {
        cell: Cell,
        first: RegionId,
        second: RegionId,
    },
    #[error("cell {cell} is not covered by any region")]
    UncoveredCell { cell: Cell },
    #[error("solver post-check failed: {0}")]
    InternalInconsistency(String),
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Inner: {inner}\n{backtrace}")]
    Inner {
        inner: Box<EngineError>,
        backtrace: Box<Backtrace>,
    },
}

impl Error {
    /// The underlying [`EngineError`], without the captured backtrace.
    pub fn engine_error(&self) -> &EngineError {
        match self {
            Error::Inner { inner, .. } => inner,
        }
    }
}

impl From<EngineError> for Error {
    fn from(inner: EngineError) -> Self {
        Error::Inner {
            inner: Box::new(inner),
            backtrace: Box::new(std::backtrace::Backtrace::capture()),
        }
    }
}
