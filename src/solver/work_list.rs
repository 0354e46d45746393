use std::collections::{HashSet, VecDeque};

use crate::{model::ClauseId, puzzle::Cell};

/// The propagation worklist: a FIFO of (cell, clause) arcs still to revise,
/// deduplicated so an arc already queued is not queued again.
pub struct WorkList {
    queue: VecDeque<(Cell, ClauseId)>,
    queue_members: HashSet<(Cell, ClauseId)>,
}

impl WorkList {
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
            queue_members: HashSet::new(),
        }
    }

    pub fn push_back(&mut self, cell: Cell, clause_id: ClauseId) {
        if self.queue_members.insert((cell, clause_id)) {
            self.queue.push_back((cell, clause_id));
        }
    }

    pub fn pop_front(&mut self) -> Option<(Cell, ClauseId)> {
        let item = self.queue.pop_front()?;
        self.queue_members.remove(&item);
        Some(item)
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl Default for WorkList {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn pops_in_insertion_order() {
        let mut list = WorkList::new();
        list.push_back(Cell::new(0, 0), 3);
        list.push_back(Cell::new(0, 1), 1);
        assert_eq!(list.pop_front(), Some((Cell::new(0, 0), 3)));
        assert_eq!(list.pop_front(), Some((Cell::new(0, 1), 1)));
        assert_eq!(list.pop_front(), None);
    }

    #[test]
    fn deduplicates_queued_arcs() {
        let mut list = WorkList::new();
        list.push_back(Cell::new(1, 1), 0);
        list.push_back(Cell::new(1, 1), 0);
        assert_eq!(list.pop_front(), Some((Cell::new(1, 1), 0)));
        assert!(list.is_empty());

        // Popping frees the slot for re-queueing.
        list.push_back(Cell::new(1, 1), 0);
        assert_eq!(list.pop_front(), Some((Cell::new(1, 1), 0)));
    }
}
