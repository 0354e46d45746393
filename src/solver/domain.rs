//! Domain bookkeeping for the search: the two-valued domain of a single cell
//! variable, and the persistent snapshot of every domain in one search node.

use im::HashMap;

use crate::puzzle::Cell;

/// The remaining candidate values for one boolean cell variable.
///
/// A fresh domain admits both values; propagation narrows it. An empty
/// domain is a contradiction and drives backtracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoolDomain {
    can_be_true: bool,
    can_be_false: bool,
}

impl BoolDomain {
    /// Both values still possible.
    pub fn full() -> Self {
        Self {
            can_be_true: true,
            can_be_false: true,
        }
    }

    /// A singleton domain pinned to `value`.
    pub fn fixed(value: bool) -> Self {
        Self {
            can_be_true: value,
            can_be_false: !value,
        }
    }

    pub fn contains(self, value: bool) -> bool {
        if value {
            self.can_be_true
        } else {
            self.can_be_false
        }
    }

    /// This domain with `value` pruned out.
    pub fn without(self, value: bool) -> Self {
        if value {
            Self {
                can_be_true: false,
                ..self
            }
        } else {
            Self {
                can_be_false: false,
                ..self
            }
        }
    }

    pub fn len(self) -> usize {
        usize::from(self.can_be_true) + usize::from(self.can_be_false)
    }

    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    pub fn is_singleton(self) -> bool {
        self.len() == 1
    }

    /// If the domain is a singleton, the single value. Otherwise `None`.
    pub fn singleton_value(self) -> Option<bool> {
        match (self.can_be_true, self.can_be_false) {
            (true, false) => Some(true),
            (false, true) => Some(false),
            _ => None,
        }
    }
}

/// One immutable node in the solver's search space, mapping every cell
/// variable to its current domain.
///
/// Backed by a persistent map, so branching clones the state cheaply and
/// backtracking is just dropping the clone; nothing is ever undone in place.
#[derive(Debug, Clone)]
pub struct SearchState {
    domains: HashMap<Cell, BoolDomain>,
}

impl SearchState {
    /// The initial state: every variable unassigned.
    pub fn fresh(variables: &[Cell]) -> Self {
        Self {
            domains: variables
                .iter()
                .map(|&cell| (cell, BoolDomain::full()))
                .collect(),
        }
    }

    /// The current domain of `cell`. `cell` must be a model variable.
    pub fn domain(&self, cell: Cell) -> BoolDomain {
        self.domains
            .get(&cell)
            .copied()
            .expect("every model variable has a domain")
    }

    /// A new state with `cell`'s domain replaced.
    pub fn with_domain(&self, cell: Cell, domain: BoolDomain) -> Self {
        Self {
            domains: self.domains.update(cell, domain),
        }
    }

    /// `true` once every variable's domain is a singleton.
    pub fn is_complete(&self) -> bool {
        self.domains.values().all(|domain| domain.is_singleton())
    }

    /// The unassigned cell to branch on next: the smallest in (row, col)
    /// order, so the search is deterministic regardless of map iteration
    /// order.
    pub fn select_unassigned_cell(&self) -> Option<Cell> {
        self.domains
            .iter()
            .filter(|(_, domain)| domain.len() > 1)
            .map(|(&cell, _)| cell)
            .min()
    }

    /// All cells currently pinned to `true`, in (row, col) order.
    pub fn queens(&self) -> Vec<Cell> {
        let mut queens: Vec<Cell> = self
            .domains
            .iter()
            .filter(|(_, domain)| domain.singleton_value() == Some(true))
            .map(|(&cell, _)| cell)
            .collect();
        queens.sort();
        queens
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn narrowing_a_full_domain() {
        let full = BoolDomain::full();
        assert_eq!(full.len(), 2);
        assert!(!full.is_singleton());
        assert_eq!(full.singleton_value(), None);

        let must_be_false = full.without(true);
        assert_eq!(must_be_false.singleton_value(), Some(false));
        assert_eq!(must_be_false, BoolDomain::fixed(false));

        let empty = must_be_false.without(false);
        assert!(empty.is_empty());
        assert_eq!(empty.singleton_value(), None);
    }

    #[test]
    fn pruning_is_idempotent() {
        let d = BoolDomain::full().without(true);
        assert_eq!(d.without(true), d);
    }

    #[test]
    fn selects_the_smallest_unassigned_cell() {
        let cells = [Cell::new(1, 1), Cell::new(0, 1), Cell::new(0, 0)];
        let state = SearchState::fresh(&cells);
        let state = state.with_domain(Cell::new(0, 0), BoolDomain::fixed(false));
        assert_eq!(state.select_unassigned_cell(), Some(Cell::new(0, 1)));
    }

    #[test]
    fn complete_when_all_domains_are_singletons() {
        let cells = [Cell::new(0, 0), Cell::new(0, 1)];
        let state = SearchState::fresh(&cells);
        assert!(!state.is_complete());

        let state = state
            .with_domain(Cell::new(0, 0), BoolDomain::fixed(true))
            .with_domain(Cell::new(0, 1), BoolDomain::fixed(false));
        assert!(state.is_complete());
        assert_eq!(state.select_unassigned_cell(), None);
        assert_eq!(state.queens(), vec![Cell::new(0, 0)]);
    }

    #[test]
    fn queens_are_sorted_row_major() {
        let cells = [Cell::new(2, 0), Cell::new(0, 2), Cell::new(1, 1)];
        let state = SearchState::fresh(&cells)
            .with_domain(Cell::new(2, 0), BoolDomain::fixed(true))
            .with_domain(Cell::new(0, 2), BoolDomain::fixed(true));
        assert_eq!(state.queens(), vec![Cell::new(0, 2), Cell::new(2, 0)]);
    }
}
