//! The inbound data contract: grid coordinates, color regions, and the
//! validated [`PuzzleSpec`] handed over by the scraping collaborator.
//!
//! The engine never touches the page itself. Whatever reads the rendered grid
//! is responsible for producing a `PuzzleSpec`; everything downstream of that
//! boundary is a pure function of this type.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Error, Result};

/// A single board cell, addressed by zero-based row and column.
///
/// The core works in `(row, col)` coordinates throughout; flat row-major
/// indexing is a concern of the UI collaborator, not of the engine.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// `true` if `other` touches `self` diagonally at king-move distance 1.
    pub fn is_diagonal_neighbor(&self, other: &Cell) -> bool {
        self.row.abs_diff(other.row) == 1 && self.col.abs_diff(other.col) == 1
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The color index scraped from a cell's class attribute.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct RegionId(pub u32);

impl std::fmt::Display for RegionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// An N×N board partitioned into exactly N color regions.
///
/// Construction validates the partition invariant: there are exactly N
/// regions, every listed cell is in bounds, no cell appears in two regions,
/// and the regions together cover the whole board. A spec that fails any of
/// these checks is rejected outright; the engine never guesses a repair.
///
/// Once constructed a spec is read-only. Deserialization goes through the
/// same validation, so a `PuzzleSpec` obtained from JSON carries the same
/// guarantees as one built in code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawPuzzleSpec")]
pub struct PuzzleSpec {
    size: usize,
    regions: BTreeMap<RegionId, BTreeSet<Cell>>,
}

impl PuzzleSpec {
    /// Validates the partition invariant and constructs the spec.
    pub fn new(size: usize, regions: BTreeMap<RegionId, BTreeSet<Cell>>) -> Result<Self> {
        if size == 0 {
            return Err(EngineError::EmptyBoard.into());
        }
        if regions.len() != size {
            return Err(EngineError::RegionCountMismatch {
                expected: size,
                actual: regions.len(),
            }
            .into());
        }

        let mut owner: BTreeMap<Cell, RegionId> = BTreeMap::new();
        for (&region, cells) in &regions {
            for &cell in cells {
                if cell.row >= size || cell.col >= size {
                    return Err(EngineError::CellOutOfBounds { region, cell, size }.into());
                }
                if let Some(&first) = owner.get(&cell) {
                    return Err(EngineError::OverlappingCell {
                        cell,
                        first,
                        second: region,
                    }
                    .into());
                }
                owner.insert(cell, region);
            }
        }

        // Disjointness plus a full count implies cover, but reporting the
        // first missing cell is more useful than a bare count mismatch.
        if owner.len() != size * size {
            for row in 0..size {
                for col in 0..size {
                    let cell = Cell::new(row, col);
                    if !owner.contains_key(&cell) {
                        return Err(EngineError::UncoveredCell { cell }.into());
                    }
                }
            }
        }

        Ok(Self { size, regions })
    }

    /// The board dimension N.
    pub fn size(&self) -> usize {
        self.size
    }

    /// All regions, keyed by color index, in ascending key order.
    pub fn regions(&self) -> &BTreeMap<RegionId, BTreeSet<Cell>> {
        &self.regions
    }

    /// The region a cell belongs to. Always `Some` for in-bounds cells.
    pub fn region_of(&self, cell: Cell) -> Option<RegionId> {
        self.regions
            .iter()
            .find(|(_, cells)| cells.contains(&cell))
            .map(|(&id, _)| id)
    }

    /// All board cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let size = self.size;
        (0..size).flat_map(move |row| (0..size).map(move |col| Cell::new(row, col)))
    }
}

/// Wire shape of a spec, before validation.
#[derive(Debug, Deserialize)]
struct RawPuzzleSpec {
    size: usize,
    regions: BTreeMap<RegionId, BTreeSet<Cell>>,
}

impl TryFrom<RawPuzzleSpec> for PuzzleSpec {
    type Error = Error;

    fn try_from(raw: RawPuzzleSpec) -> Result<Self> {
        PuzzleSpec::new(raw.size, raw.regions)
    }
}
