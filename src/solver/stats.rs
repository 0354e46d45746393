//! Search statistics, collected per solve and per clause, plus a table
//! renderer for the CLI harness.

use std::collections::HashMap;
use std::time::Duration;

use prettytable::{Cell as TableCell, Row, Table};

use crate::model::{Clause, ClauseId};

#[derive(Debug, Default, Clone)]
pub struct PerClauseStats {
    pub revisions: u64,
    pub prunings: u64,
    pub time_spent_micros: u64,
}

/// Counters for one solve. Returned alongside the outcome so callers can see
/// how hard the instance was; for realistic puzzle sizes propagation does
/// almost all the work and `branches` stays near zero.
#[derive(Debug, Default, Clone)]
pub struct SearchStats {
    /// Total `revise` calls across all clauses.
    pub revisions: u64,
    /// Revisions that actually narrowed a domain.
    pub prunings: u64,
    /// Branch decisions taken by the search.
    pub branches: u64,
    /// Branches abandoned after a propagation contradiction.
    pub backtracks: u64,
    /// Complete assignments found (at most 2 when uniqueness checking).
    pub solutions_found: u64,
    /// Wall-clock time of the whole solve.
    pub duration: Duration,
    pub clause_stats: HashMap<ClauseId, PerClauseStats>,
}

impl SearchStats {
    pub(crate) fn record_revision(&mut self, clause_id: ClauseId, pruned: bool, elapsed: Duration) {
        self.revisions += 1;
        let per_clause = self.clause_stats.entry(clause_id).or_default();
        per_clause.revisions += 1;
        per_clause.time_spent_micros += elapsed.as_micros() as u64;
        if pruned {
            self.prunings += 1;
            per_clause.prunings += 1;
        }
    }
}

/// Renders the per-clause statistics as a table, slowest clauses last.
pub fn render_stats_table(stats: &SearchStats, clauses: &[Clause]) -> String {
    let mut table = Table::new();
    table.add_row(Row::new(vec![
        TableCell::new("Clause Type"),
        TableCell::new("ID"),
        TableCell::new("Description"),
        TableCell::new("Revise Calls"),
        TableCell::new("Prunings"),
        TableCell::new("Time / Call (µs)"),
        TableCell::new("Total Time (ms)"),
    ]));

    let mut sorted_stats: Vec<(&ClauseId, &PerClauseStats)> = stats.clause_stats.iter().collect();
    sorted_stats.sort_by_key(|(id, per_clause)| (per_clause.time_spent_micros, **id));

    for (clause_id, clause_stats) in sorted_stats {
        let descriptor = clauses[*clause_id].descriptor();
        let avg_time = if clause_stats.revisions > 0 {
            clause_stats.time_spent_micros as f64 / clause_stats.revisions as f64
        } else {
            0.0
        };

        table.add_row(Row::new(vec![
            TableCell::new(&descriptor.name),
            TableCell::new(&clause_id.to_string()),
            TableCell::new(&descriptor.description),
            TableCell::new(&clause_stats.revisions.to_string()),
            TableCell::new(&clause_stats.prunings.to_string()),
            TableCell::new(&format!("{:.2}", avg_time)),
            TableCell::new(&format!(
                "{:.2}",
                clause_stats.time_spent_micros as f64 / 1000.0
            )),
        ]));
    }

    table.to_string()
}
