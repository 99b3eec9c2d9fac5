mod state;
mod traced_dijkstra;

use std::collections::BTreeMap;

use log::debug;

pub(crate) use traced_dijkstra::dijkstra_tree;

use super::result::{PathResult, Route};
use crate::Error;
use crate::model::{Metric, TransportGraph};

/// Cheapest route between two places under `metric`.
///
/// Unknown places yield [`PathResult::NodeNotFound`], disconnected ones
/// [`PathResult::Unreachable`]. A route from a place to itself is
/// `[start]` with cost 0.
pub fn shortest_path(graph: &TransportGraph, start: &str, end: &str, metric: Metric) -> PathResult {
    let Some(source) = graph.node_index(start) else {
        return PathResult::NodeNotFound(start.to_string());
    };
    let Some(target) = graph.node_index(end) else {
        return PathResult::NodeNotFound(end.to_string());
    };

    let tree = dijkstra_tree(graph, source, Some(target), metric);
    match tree.route_to(graph, target) {
        Some(route) => {
            debug!("Route {start} -> {end} by {metric}: cost {}", route.cost);
            PathResult::Found(route)
        }
        None => PathResult::Unreachable,
    }
}

/// Cheapest routes from `start` to every other place, from a single
/// shortest path tree.
///
/// # Errors
///
/// Returns [`Error::NodeNotFound`] if `start` is not in the network
pub fn all_shortest_paths(
    graph: &TransportGraph,
    start: &str,
    metric: Metric,
) -> Result<BTreeMap<String, PathResult>, Error> {
    let source = graph
        .node_index(start)
        .ok_or_else(|| Error::NodeNotFound(start.to_string()))?;

    let tree = dijkstra_tree(graph, source, None, metric);

    Ok(graph
        .graph
        .node_indices()
        .filter(|&node| node != source)
        .map(|node| {
            let result = tree
                .route_to(graph, node)
                .map_or(PathResult::Unreachable, PathResult::Found);
            (graph.name(node).to_string(), result)
        })
        .collect())
}

impl TransportGraph {
    /// See [`shortest_path`]
    pub fn shortest_path(&self, start: &str, end: &str, metric: Metric) -> PathResult {
        shortest_path(self, start, end, metric)
    }

    /// See [`all_shortest_paths`]
    pub fn all_shortest_paths(
        &self,
        start: &str,
        metric: Metric,
    ) -> Result<BTreeMap<String, PathResult>, Error> {
        all_shortest_paths(self, start, metric)
    }

    /// Routes reachable from `start`, ordered by destination
    pub fn reachable_routes(&self, start: &str, metric: Metric) -> Result<Vec<Route>, Error> {
        Ok(self
            .all_shortest_paths(start, metric)?
            .into_values()
            .filter_map(PathResult::into_route)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::reference_network;

    fn diamond() -> TransportGraph {
        let mut graph = TransportGraph::new();
        graph.add_edge("A", "B", 1.0, 10.0);
        graph.add_edge("B", "D", 1.0, 10.0);
        graph.add_edge("A", "C", 5.0, 1.0);
        graph.add_edge("C", "D", 5.0, 1.0);
        graph
    }

    #[test]
    fn metric_selects_weight() {
        let graph = diamond();

        let by_distance = graph.shortest_path("A", "D", Metric::Distance);
        assert_eq!(by_distance.path(), ["A", "B", "D"]);
        assert_eq!(by_distance.cost(), 2.0);

        let by_fare = graph.shortest_path("A", "D", Metric::Fare);
        assert_eq!(by_fare.path(), ["A", "C", "D"]);
        assert_eq!(by_fare.cost(), 2.0);
    }

    #[test]
    fn self_route_is_free() {
        let graph = reference_network();
        for id in graph.node_ids() {
            let result = graph.shortest_path(id, id, Metric::Fare);
            assert_eq!(result.path(), [id.to_string()]);
            assert_eq!(result.cost(), 0.0);
        }
    }

    #[test]
    fn unknown_node_is_tagged() {
        let graph = reference_network();
        let result = graph.shortest_path("Nowhere", "Gusa", Metric::Fare);

        assert_eq!(result, PathResult::NodeNotFound("Nowhere".to_string()));
        assert!(result.path().is_empty());
        assert_eq!(result.cost(), f64::INFINITY);
    }

    #[test]
    fn disconnected_nodes_are_unreachable() {
        let mut graph = diamond();
        graph.add_edge("X", "Y", 1.0, 1.0);

        let result = graph.shortest_path("A", "Y", Metric::Distance);
        assert_eq!(result, PathResult::Unreachable);
        assert_eq!(result.into_parts(), (Vec::new(), f64::INFINITY));
    }

    #[test]
    fn equal_costs_prefer_smallest_place_name() {
        let mut graph = TransportGraph::new();
        graph.add_edge("S", "Zeta", 1.0, 1.0);
        graph.add_edge("S", "Alpha", 1.0, 1.0);
        graph.add_edge("Zeta", "T", 1.0, 1.0);
        graph.add_edge("Alpha", "T", 1.0, 1.0);

        for _ in 0..5 {
            let result = graph.shortest_path("S", "T", Metric::Fare);
            assert_eq!(result.path(), ["S", "Alpha", "T"]);
        }
    }

    #[test]
    fn route_carries_the_cheapest_parallel_link() {
        let mut graph = TransportGraph::new();
        graph.add_edge("A", "B", 1.0, 50.0);
        let cheap = graph.add_edge("A", "B", 3.0, 20.0);

        let route = graph
            .shortest_path("A", "B", Metric::Fare)
            .into_route()
            .unwrap();
        assert_eq!(route.links, vec![cheap]);
        assert_eq!(route.cost, 20.0);
    }

    #[test]
    fn all_paths_cover_every_other_node() {
        let mut graph = reference_network();
        graph.add_node("Island", None);

        let paths = graph.all_shortest_paths("Tagoloan", Metric::Fare).unwrap();
        assert_eq!(paths.len(), graph.node_count() - 1);
        assert!(!paths.contains_key("Tagoloan"));
        assert_eq!(paths["Island"], PathResult::Unreachable);

        for (target, result) in &paths {
            let single = graph.shortest_path("Tagoloan", target, Metric::Fare);
            assert_eq!(result.cost(), single.cost());
        }
    }

    #[test]
    fn all_paths_from_unknown_node_fails() {
        let graph = reference_network();
        let err = graph.all_shortest_paths("Nowhere", Metric::Distance);
        assert!(matches!(err, Err(Error::NodeNotFound(id)) if id == "Nowhere"));
    }
}
