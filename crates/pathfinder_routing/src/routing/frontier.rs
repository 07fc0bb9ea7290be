use crate::types::{Cost, NodeId, PathCost};

/// A node discovered by a search, with the scores it was discovered with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct FrontierEntry {
    pub node_id: NodeId,

    /// g_score is the accumulated cost from the start to `node_id`
    pub g_score: PathCost,

    /// h_score is the heuristic estimate from `node_id` to the goal
    pub h_score: PathCost,

    /// f_score = g_score + h_score
    pub f_score: PathCost,

    /// Index of the entry this one was reached from, `None` for the start entry.
    pub parent: Option<usize>,
}

impl FrontierEntry {
    pub fn new(node_id: NodeId, g_score: PathCost, h_score: Cost, parent: Option<usize>) -> Self {
        let h_score = PathCost::from(h_score);
        FrontierEntry {
            node_id,
            g_score,
            h_score,
            f_score: g_score + h_score,
            parent,
        }
    }
}

/// Append-only storage for the entries of a single search. Predecessors are
/// referenced by index so entries never point at each other.
#[derive(Default)]
pub(crate) struct FrontierArena {
    entries: Vec<FrontierEntry>,
}

impl FrontierArena {
    pub fn push(&mut self, entry: FrontierEntry) -> usize {
        self.entries.push(entry);
        self.entries.len() - 1
    }

    pub fn get(&self, index: usize) -> &FrontierEntry {
        &self.entries[index]
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Node ids from the start entry to `index`, in start to goal order.
    pub fn trace_path(&self, index: usize) -> Vec<NodeId> {
        let mut path = Vec::with_capacity(32);
        let mut current = Some(index);

        while let Some(index) = current {
            let entry = &self.entries[index];
            path.push(entry.node_id);
            current = entry.parent;
        }

        path.reverse();
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_scores() {
        let entry = FrontierEntry::new(4, 3, 5, None);
        assert_eq!(entry.f_score, entry.g_score + entry.h_score);

        let expensive = FrontierEntry::new(4, PathCost::from(Cost::MAX), Cost::MAX, None);
        assert_eq!(expensive.f_score, 2 * PathCost::from(Cost::MAX));
    }

    #[test]
    fn test_trace_path() {
        let mut arena = FrontierArena::default();
        let start = arena.push(FrontierEntry::new(10, 0, 2, None));
        let middle = arena.push(FrontierEntry::new(11, 1, 1, Some(start)));
        arena.push(FrontierEntry::new(99, 1, 3, Some(start)));
        let goal = arena.push(FrontierEntry::new(12, 2, 0, Some(middle)));

        assert_eq!(arena.trace_path(goal), vec![10, 11, 12]);
        assert_eq!(arena.trace_path(start), vec![10]);

        arena.clear();
        assert_eq!(arena.push(FrontierEntry::new(1, 0, 0, None)), 0);
    }
}
