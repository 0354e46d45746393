//! Terminal artifacts of a solve: the outcome variants and the queen
//! placement handed to the replay collaborator.

use serde::Serialize;

use crate::puzzle::Cell;

/// The ordered queen placement for a solved puzzle: exactly N cells, sorted
/// by row then column, one per row, column and region.
///
/// This is the only artifact the engine exposes to the outbound collaborator;
/// turning each cell into a UI interaction is that collaborator's job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Placement(Vec<Cell>);

impl Placement {
    pub(crate) fn new(mut cells: Vec<Cell>) -> Self {
        cells.sort();
        Self(cells)
    }

    pub fn cells(&self) -> &[Cell] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a Placement {
    type Item = &'a Cell;
    type IntoIter = std::slice::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// What a solve concluded about a puzzle instance.
///
/// `NoSolution` and `MultipleSolutions` are terminal outcomes, not errors;
/// the caller decides whether they abort the surrounding workflow.
/// `MultipleSolutions` is only produced by an engine configured with
/// [`with_uniqueness_check`](crate::solver::engine::SolverEngine::with_uniqueness_check).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveOutcome {
    Solved(Placement),
    NoSolution,
    MultipleSolutions,
}

impl SolveOutcome {
    /// The placement, if this outcome is `Solved`.
    pub fn placement(&self) -> Option<&Placement> {
        match self {
            SolveOutcome::Solved(placement) => Some(placement),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn placement_is_sorted_on_construction() {
        let placement = Placement::new(vec![
            Cell::new(2, 0),
            Cell::new(0, 2),
            Cell::new(1, 1),
        ]);
        assert_eq!(
            placement.cells(),
            &[Cell::new(0, 2), Cell::new(1, 1), Cell::new(2, 0)]
        );
        assert_eq!(placement.len(), 3);
    }

    #[test]
    fn placement_serializes_as_a_cell_list() {
        let placement = Placement::new(vec![Cell::new(0, 1), Cell::new(1, 3)]);
        let json = serde_json::to_string(&placement).unwrap();
        assert_eq!(json, r#"[{"row":0,"col":1},{"row":1,"col":3}]"#);
    }
}
