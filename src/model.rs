//! The model builder: translates a validated [`PuzzleSpec`] into the boolean
//! constraint model consumed by the solver.
//!
//! One boolean decision variable per cell ("a queen occupies this cell"),
//! plus two clause shapes over those variables. The builder is total and
//! pure; malformed input is rejected earlier, at spec construction, so there
//! is no failure path here.

use crate::puzzle::{Cell, PuzzleSpec};

pub type ClauseId = usize;

/// A typed clause over boolean cell variables. Clauses are generated by
/// [`ConstraintModel::build`] and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Clause {
    /// Exactly one of the listed cells holds a queen.
    ExactlyOneOf(Vec<Cell>),
    /// At most one of the listed cells holds a queen.
    AtMostOneOf(Vec<Cell>),
}

impl Clause {
    /// The cells this clause ranges over.
    pub fn cells(&self) -> &[Cell] {
        match self {
            Clause::ExactlyOneOf(cells) | Clause::AtMostOneOf(cells) => cells,
        }
    }

    pub fn descriptor(&self) -> ClauseDescriptor {
        let (name, cells) = match self {
            Clause::ExactlyOneOf(cells) => ("ExactlyOneOf", cells),
            Clause::AtMostOneOf(cells) => ("AtMostOneOf", cells),
        };
        let cells_str = cells
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        ClauseDescriptor {
            name: name.to_string(),
            description: format!("{}({})", name, cells_str),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ClauseDescriptor {
    pub name: String,
    pub description: String,
}

/// The write-once constraint model for one puzzle instance: N×N boolean
/// variables in row-major order and the full clause set.
#[derive(Debug, Clone)]
pub struct ConstraintModel {
    size: usize,
    variables: Vec<Cell>,
    clauses: Vec<Clause>,
}

impl ConstraintModel {
    /// Builds the model for a spec. Emits, for an N×N board:
    ///
    /// - N row clauses: exactly one queen per row;
    /// - N column clauses: exactly one queen per column;
    /// - N region clauses: exactly one queen per color region;
    /// - one pairwise `AtMostOneOf` per in-bounds diagonally adjacent cell
    ///   pair, each pair emitted once (looking down-right and down-left from
    ///   every cell).
    ///
    /// The adjacency clauses deliberately cover king-move diagonal contact
    /// only. Queens further apart on the same diagonal are legal in this
    /// puzzle, so a global anti-diagonal constraint would be too strict.
    pub fn build(spec: &PuzzleSpec) -> Self {
        let n = spec.size();
        let variables: Vec<Cell> = spec.cells().collect();
        let mut clauses = Vec::new();

        for row in 0..n {
            clauses.push(Clause::ExactlyOneOf(
                (0..n).map(|col| Cell::new(row, col)).collect(),
            ));
        }
        for col in 0..n {
            clauses.push(Clause::ExactlyOneOf(
                (0..n).map(|row| Cell::new(row, col)).collect(),
            ));
        }
        for cells in spec.regions().values() {
            clauses.push(Clause::ExactlyOneOf(cells.iter().copied().collect()));
        }

        for row in 0..n.saturating_sub(1) {
            for col in 0..n {
                if col + 1 < n {
                    clauses.push(Clause::AtMostOneOf(vec![
                        Cell::new(row, col),
                        Cell::new(row + 1, col + 1),
                    ]));
                }
                if col > 0 {
                    clauses.push(Clause::AtMostOneOf(vec![
                        Cell::new(row, col),
                        Cell::new(row + 1, col - 1),
                    ]));
                }
            }
        }

        Self {
            size: n,
            variables,
            clauses,
        }
    }

    /// The board dimension N.
    pub fn size(&self) -> usize {
        self.size
    }

    /// All decision variables, one per cell, in row-major order.
    pub fn variables(&self) -> &[Cell] {
        &self.variables
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::puzzle::fixtures::{pinned_4x4, rows_as_regions};

    fn count_exactly_one(model: &ConstraintModel) -> usize {
        model
            .clauses()
            .iter()
            .filter(|c| matches!(c, Clause::ExactlyOneOf(_)))
            .count()
    }

    fn count_at_most_one(model: &ConstraintModel) -> usize {
        model
            .clauses()
            .iter()
            .filter(|c| matches!(c, Clause::AtMostOneOf(_)))
            .count()
    }

    #[test]
    fn emits_the_expected_clause_families_for_a_4x4_board() {
        let model = ConstraintModel::build(&rows_as_regions(4));

        assert_eq!(model.size(), 4);
        assert_eq!(model.variables().len(), 16);
        // 4 rows + 4 columns + 4 regions.
        assert_eq!(count_exactly_one(&model), 12);
        // 2 * (N - 1)^2 diagonal-adjacent pairs, each emitted once.
        assert_eq!(count_at_most_one(&model), 18);
        assert_eq!(model.clauses().len(), 30);
    }

    #[test]
    fn a_1x1_board_has_no_adjacency_clauses() {
        let model = ConstraintModel::build(&rows_as_regions(1));
        assert_eq!(count_exactly_one(&model), 3);
        assert_eq!(count_at_most_one(&model), 0);
    }

    #[test]
    fn adjacency_clauses_are_pairwise_and_in_bounds() {
        let model = ConstraintModel::build(&rows_as_regions(5));
        for clause in model.clauses() {
            if let Clause::AtMostOneOf(cells) = clause {
                assert_eq!(cells.len(), 2);
                assert!(cells[0].is_diagonal_neighbor(&cells[1]));
                for cell in cells {
                    assert!(cell.row < 5 && cell.col < 5);
                }
            }
        }
    }

    #[test]
    fn region_clauses_follow_the_spec_partition() {
        let spec = pinned_4x4();
        let model = ConstraintModel::build(&spec);
        // The singleton region shows up as a one-cell exact-one clause.
        assert!(model
            .clauses()
            .iter()
            .any(|c| *c == Clause::ExactlyOneOf(vec![Cell::new(0, 2)])));
    }

    #[test]
    fn variables_are_row_major() {
        let model = ConstraintModel::build(&rows_as_regions(3));
        assert_eq!(model.variables()[0], Cell::new(0, 0));
        assert_eq!(model.variables()[1], Cell::new(0, 1));
        assert_eq!(model.variables()[3], Cell::new(1, 0));
        assert_eq!(model.variables()[8], Cell::new(2, 2));
    }
}
