use std::cmp::Ordering;

use petgraph::graph::NodeIndex;

/// Frontier entry of the Dijkstra search
#[derive(Copy, Clone, Debug)]
pub(super) struct State<'a> {
    pub(super) cost: f64,
    pub(super) node: NodeIndex,
    pub(super) id: &'a str,
}

// Implement Ord for State to use in BinaryHeap
impl Ord for State<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Min-heap by cost (reversed from standard Rust BinaryHeap),
        // equal costs pop the lexicographically smallest place first
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.id.cmp(self.id))
    }
}

impl PartialOrd for State<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for State<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for State<'_> {}
