use std::collections::BinaryHeap;

use hashbrown::{HashMap, HashSet};
use log::debug;
use petgraph::graph::NodeIndex;

use super::state::State;
use crate::model::{LinkId, Metric, TransportGraph};
use crate::routing::result::Route;

/// Result of one Dijkstra run: settled costs and predecessor back-pointers
pub(crate) struct SearchTree {
    start: NodeIndex,
    metric: Metric,
    costs: HashMap<NodeIndex, f64>,
    predecessors: HashMap<NodeIndex, (NodeIndex, LinkId)>,
    settled: HashSet<NodeIndex>,
}

impl SearchTree {
    /// Final cost to `node`, if it was settled
    pub(crate) fn cost_to(&self, node: NodeIndex) -> Option<f64> {
        if self.settled.contains(&node) {
            self.costs.get(&node).copied()
        } else {
            None
        }
    }

    /// Reconstructs the route to `target` by following predecessors back to the start
    pub(crate) fn route_to(&self, graph: &TransportGraph, target: NodeIndex) -> Option<Route> {
        let cost = self.cost_to(target)?;

        let mut nodes = vec![target];
        let mut links = Vec::new();
        let mut current = target;
        while current != self.start {
            let &(prev, link) = self.predecessors.get(&current)?;
            nodes.push(prev);
            links.push(link);
            current = prev;
        }
        nodes.reverse();
        links.reverse();

        Some(Route {
            nodes: nodes
                .into_iter()
                .map(|node| graph.name(node).to_string())
                .collect(),
            links,
            cost,
            metric: self.metric,
        })
    }
}

/// Dijkstra's algorithm over the transport network.
///
/// A node is settled the first time it is popped from the frontier. With a
/// `target` the search stops as soon as the target is settled, otherwise it
/// builds the full shortest path tree of `start`.
pub(crate) fn dijkstra_tree(
    graph: &TransportGraph,
    start: NodeIndex,
    target: Option<NodeIndex>,
    metric: Metric,
) -> SearchTree {
    let estimated_nodes = graph.node_count();
    let mut costs: HashMap<NodeIndex, f64> = HashMap::with_capacity(estimated_nodes);
    let mut predecessors: HashMap<NodeIndex, (NodeIndex, LinkId)> =
        HashMap::with_capacity(estimated_nodes);
    let mut settled: HashSet<NodeIndex> = HashSet::with_capacity(estimated_nodes);
    let mut heap = BinaryHeap::with_capacity(estimated_nodes);

    // Start node has cost 0
    heap.push(State {
        cost: 0.0,
        node: start,
        id: graph.name(start),
    });
    costs.insert(start, 0.0);

    while let Some(State { cost, node, .. }) = heap.pop() {
        // Stale frontier entry
        if !settled.insert(node) {
            continue;
        }

        if target == Some(node) {
            break;
        }

        // Links are scanned in insertion order, ties keep the first relaxation
        for (next, link, weight) in graph.incident_links(node) {
            if settled.contains(&next) {
                continue;
            }
            let next_cost = cost + weight.cost(metric);

            match costs.entry(next) {
                hashbrown::hash_map::Entry::Vacant(entry) => {
                    entry.insert(next_cost);
                    predecessors.insert(next, (node, link));
                    heap.push(State {
                        cost: next_cost,
                        node: next,
                        id: graph.name(next),
                    });
                }
                hashbrown::hash_map::Entry::Occupied(mut entry) => {
                    if next_cost < *entry.get() {
                        *entry.get_mut() = next_cost;
                        predecessors.insert(next, (node, link));
                        heap.push(State {
                            cost: next_cost,
                            node: next,
                            id: graph.name(next),
                        });
                    }
                }
            }
        }
    }

    debug!(
        "Dijkstra from {} by {metric} settled {} of {} places",
        graph.name(start),
        settled.len(),
        graph.node_count()
    );

    SearchTree {
        start,
        metric,
        costs,
        predecessors,
        settled,
    }
}
