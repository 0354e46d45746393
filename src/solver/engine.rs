use std::collections::HashMap;
use std::time::Instant;

use tracing::debug;

use crate::{
    error::{EngineError, Result},
    model::{Clause, ClauseId, ConstraintModel},
    puzzle::Cell,
    solver::{
        domain::{BoolDomain, SearchState},
        outcome::{Placement, SolveOutcome},
        stats::SearchStats,
        work_list::WorkList,
    },
};

/// The solving engine for a built [`ConstraintModel`].
///
/// The engine combines an AC-3-style propagation loop with depth-first
/// backtracking search. Propagation repeatedly revises (cell, clause) arcs
/// from a deduplicating worklist until a fixpoint: a cell with a fixed queen
/// empties the `true` candidate from every clause peer, and an exact-one
/// group whose other members are all ruled out forces its last member. Only
/// when propagation stalls does the search branch, on the smallest unassigned
/// cell in (row, col) order, trying `true` before `false`.
///
/// The search is complete (it finds a solution whenever one exists) and
/// deterministic: the same model always yields the same outcome, and the
/// same placement when solved. Contradictions during propagation are
/// expected control flow and drive backtracking; the only fatal condition is
/// a claimed solution failing the defensive post-check, which indicates a
/// bug in the engine itself.
pub struct SolverEngine {
    check_uniqueness: bool,
}

impl SolverEngine {
    /// An engine that stops at the first solution found.
    pub fn new() -> Self {
        Self {
            check_uniqueness: false,
        }
    }

    /// Configures the engine to keep searching after the first solution and
    /// report [`SolveOutcome::MultipleSolutions`] if a second distinct
    /// assignment exists. Roughly doubles worst-case work; the source puzzle
    /// promises uniqueness, so this is a diagnostic mode, not the default.
    pub fn with_uniqueness_check(mut self) -> Self {
        self.check_uniqueness = true;
        self
    }

    /// Solves the model.
    ///
    /// # Returns
    ///
    /// * `Ok((SolveOutcome::Solved(placement), stats))` — a post-checked
    ///   placement of exactly N queens.
    /// * `Ok((SolveOutcome::NoSolution, stats))` — the search space is
    ///   exhausted with no consistent assignment.
    /// * `Ok((SolveOutcome::MultipleSolutions, stats))` — uniqueness checking
    ///   was requested and a second assignment exists.
    /// * `Err(_)` — the post-check rejected the engine's own claimed
    ///   solution; a bug, never a property of the input.
    pub fn solve(&self, model: &ConstraintModel) -> Result<(SolveOutcome, SearchStats)> {
        let started = Instant::now();
        let mut stats = SearchStats::default();
        let dependency_graph = Self::dependency_graph(model);
        let initial = SearchState::fresh(model.variables());

        let limit = if self.check_uniqueness { 2 } else { 1 };
        let mut found = Vec::new();

        match self.propagate(model, &dependency_graph, initial, &mut stats) {
            None => {}
            Some(state) if state.is_complete() => found.push(state),
            Some(state) => {
                self.search(model, &dependency_graph, state, &mut stats, &mut found, limit);
            }
        }

        stats.duration = started.elapsed();
        stats.solutions_found = found.len() as u64;
        debug!(
            solutions = found.len(),
            branches = stats.branches,
            prunings = stats.prunings,
            "search finished"
        );

        let outcome = match found.as_slice() {
            [] => SolveOutcome::NoSolution,
            [state] => {
                let queens = state.queens();
                self.post_check(model, &queens)?;
                SolveOutcome::Solved(Placement::new(queens))
            }
            _ => SolveOutcome::MultipleSolutions,
        };
        Ok((outcome, stats))
    }

    /// Depth-first search over the remaining unassigned cells, collecting up
    /// to `limit` complete assignments into `found`.
    fn search(
        &self,
        model: &ConstraintModel,
        dependency_graph: &HashMap<Cell, Vec<ClauseId>>,
        state: SearchState,
        stats: &mut SearchStats,
        found: &mut Vec<SearchState>,
        limit: usize,
    ) {
        if state.is_complete() {
            found.push(state);
            return;
        }

        let Some(cell) = state.select_unassigned_cell() else {
            // Unreachable while is_complete is false, but harmless.
            return;
        };

        for value in [true, false] {
            if !state.domain(cell).contains(value) {
                continue;
            }
            stats.branches += 1;
            debug!(%cell, value, "branching");

            let guess = state.with_domain(cell, BoolDomain::fixed(value));
            match self.propagate(model, dependency_graph, guess, stats) {
                Some(propagated) => {
                    self.search(model, dependency_graph, propagated, stats, found, limit);
                    if found.len() >= limit {
                        return;
                    }
                }
                None => stats.backtracks += 1,
            }
        }
    }

    /// Runs arc revision to a fixpoint. Returns the narrowed state, or `None`
    /// on a contradiction (some domain emptied).
    fn propagate(
        &self,
        model: &ConstraintModel,
        dependency_graph: &HashMap<Cell, Vec<ClauseId>>,
        state: SearchState,
        stats: &mut SearchStats,
    ) -> Option<SearchState> {
        let clauses = model.clauses();
        let mut state = state;

        // Seed the worklist with every arc.
        let mut worklist = WorkList::new();
        for (clause_id, clause) in clauses.iter().enumerate() {
            for &cell in clause.cells() {
                worklist.push_back(cell, clause_id);
            }
        }

        while let Some((target, clause_id)) = worklist.pop_front() {
            let timer = Instant::now();
            let revised = Self::revise(&clauses[clause_id], target, &state);
            stats.record_revision(clause_id, revised.is_some(), timer.elapsed());

            let Some(new_domain) = revised else {
                continue;
            };
            if new_domain.is_empty() {
                debug!(%target, clause_id, "contradiction");
                return None;
            }
            state = state.with_domain(target, new_domain);

            // The domain of `target` shrank; every other arc touching it may
            // now prune further.
            if let Some(dependents) = dependency_graph.get(&target) {
                for &dependent_id in dependents {
                    for &neighbor in clauses[dependent_id].cells() {
                        if neighbor != target {
                            worklist.push_back(neighbor, dependent_id);
                        }
                    }
                }
            }
        }

        Some(state)
    }

    /// Narrows `target`'s domain under one clause, given the current state.
    /// Returns `None` when nothing changed.
    fn revise(clause: &Clause, target: Cell, state: &SearchState) -> Option<BoolDomain> {
        let current = state.domain(target);
        let mut revised = current;
        let others = clause.cells().iter().copied().filter(|&c| c != target);

        match clause {
            Clause::ExactlyOneOf(_) => {
                let mut another_is_queen = false;
                let mut all_others_ruled_out = true;
                for other in others {
                    match state.domain(other).singleton_value() {
                        Some(true) => {
                            another_is_queen = true;
                            all_others_ruled_out = false;
                        }
                        Some(false) => {}
                        None => all_others_ruled_out = false,
                    }
                }
                if another_is_queen {
                    revised = revised.without(true);
                }
                if all_others_ruled_out {
                    revised = revised.without(false);
                }
            }
            Clause::AtMostOneOf(_) => {
                let mut others = others;
                if others.any(|other| state.domain(other).singleton_value() == Some(true)) {
                    revised = revised.without(true);
                }
            }
        }

        (revised != current).then_some(revised)
    }

    /// Re-validates a claimed solution against the whole model: exactly N
    /// queens, every clause satisfied. A failure here is a solver bug.
    fn post_check(&self, model: &ConstraintModel, queens: &[Cell]) -> Result<()> {
        if queens.len() != model.size() {
            return Err(EngineError::InternalInconsistency(format!(
                "expected {} queens, claimed solution has {}",
                model.size(),
                queens.len()
            ))
            .into());
        }

        let occupied: std::collections::HashSet<Cell> = queens.iter().copied().collect();
        for clause in model.clauses() {
            let hits = clause
                .cells()
                .iter()
                .filter(|cell| occupied.contains(cell))
                .count();
            let satisfied = match clause {
                Clause::ExactlyOneOf(_) => hits == 1,
                Clause::AtMostOneOf(_) => hits <= 1,
            };
            if !satisfied {
                return Err(EngineError::InternalInconsistency(format!(
                    "claimed solution violates {}",
                    clause.descriptor().description
                ))
                .into());
            }
        }
        Ok(())
    }

    fn dependency_graph(model: &ConstraintModel) -> HashMap<Cell, Vec<ClauseId>> {
        let mut graph: HashMap<Cell, Vec<ClauseId>> = HashMap::new();
        for (clause_id, clause) in model.clauses().iter().enumerate() {
            for &cell in clause.cells() {
                graph.entry(cell).or_default().push(clause_id);
            }
        }
        graph
    }
}

impl Default for SolverEngine {
    fn default() -> Self {
        Self::new()
    }
}
