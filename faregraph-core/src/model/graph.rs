//! Undirected multigraph of places connected by distance/fare links

use geo::Point;
use hashbrown::{HashMap, HashSet};
use itertools::Itertools;
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;

use super::types::{Link, LinkId, LinkRecord, Neighbor, Place};

/// In-memory transport network.
///
/// Every link is stored once and is visible from both endpoints with the
/// same weights. Parallel links between the same pair of places are kept
/// as separate entries.
#[derive(Debug, Clone, Default)]
pub struct TransportGraph {
    pub(crate) graph: UnGraph<Place, Link>,
    index: HashMap<String, NodeIndex>,
}

impl TransportGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-allocate for a known network size.
    pub fn with_capacity(node_count: usize, link_count: usize) -> Self {
        Self {
            graph: UnGraph::with_capacity(node_count, link_count),
            index: HashMap::with_capacity(node_count),
        }
    }

    /// Builds a network from an explicit list of links
    pub fn from_links<I>(links: I) -> Self
    where
        I: IntoIterator<Item = LinkRecord>,
    {
        let mut graph = Self::new();
        for link in links {
            graph.add_edge(&link.origin, &link.destination, link.distance, link.fare);
        }
        graph
    }

    /// Registers a place. Existing places are kept; supplied coordinates
    /// replace the stored ones.
    pub fn add_node(&mut self, id: &str, coordinates: Option<Point<f64>>) -> NodeIndex {
        let node = match self.index.get(id) {
            Some(&node) => node,
            None => {
                let node = self.graph.add_node(Place {
                    id: id.to_string(),
                    geometry: None,
                });
                self.index.insert(id.to_string(), node);
                node
            }
        };

        if let Some(point) = coordinates {
            self.graph[node].geometry = Some(point);
        }
        node
    }

    /// Adds an undirected link, creating missing endpoints.
    ///
    /// Weights are not validated and duplicates are not detected.
    pub fn add_edge(&mut self, origin: &str, destination: &str, distance: f64, fare: f64) -> LinkId {
        let source = self.add_node(origin, None);
        let target = self.add_node(destination, None);
        self.graph.add_edge(source, target, Link { distance, fare })
    }

    /// Adjacency entries of a place in insertion order.
    /// Unknown places have no neighbors.
    pub fn neighbors(&self, id: &str) -> Vec<Neighbor> {
        let Some(node) = self.node_index(id) else {
            return Vec::new();
        };

        self.incident_links(node)
            .into_iter()
            .map(|(other, link, weight)| Neighbor {
                node: self.graph[other].id.clone(),
                distance: weight.distance,
                fare: weight.fare,
                link,
            })
            .collect()
    }

    /// Number of adjacency entries of a place, parallel links included.
    /// A self-loop counts twice.
    pub fn degree(&self, id: &str) -> usize {
        self.node_index(id)
            .map_or(0, |node| self.incident_links(node).len())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Raw number of stored links, parallel links included
    pub fn link_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Place names in lexicographic order
    pub fn node_ids(&self) -> Vec<&str> {
        self.graph
            .node_weights()
            .map(|place| place.id.as_str())
            .sorted_unstable()
            .collect()
    }

    pub fn places(&self) -> impl Iterator<Item = &Place> {
        self.graph.node_weights()
    }

    pub fn coordinates(&self, id: &str) -> Option<Point<f64>> {
        self.node_index(id)
            .and_then(|node| self.graph[node].geometry)
    }

    /// Weights of a specific link instance
    pub fn link(&self, link: LinkId) -> Option<Link> {
        self.graph.edge_weight(link).copied()
    }

    /// Drops all places, links and coordinates
    pub fn clear(&mut self) {
        self.graph.clear();
        self.index.clear();
    }

    /// Links deduplicated by their unordered pair of endpoints.
    ///
    /// The first inserted link of each pair wins. The result is sorted by
    /// origin, then destination.
    pub fn unique_links(&self) -> Vec<LinkRecord> {
        let mut seen: HashSet<(NodeIndex, NodeIndex)> = HashSet::with_capacity(self.link_count());

        self.graph
            .edge_references()
            .filter(|edge| {
                let (a, b) = (edge.source(), edge.target());
                seen.insert((a.min(b), a.max(b)))
            })
            .map(|edge| {
                let weight = edge.weight();
                LinkRecord::new(
                    &self.graph[edge.source()].id,
                    &self.graph[edge.target()].id,
                    weight.distance,
                    weight.fare,
                )
            })
            .sorted_by(|a, b| {
                a.origin
                    .cmp(&b.origin)
                    .then_with(|| a.destination.cmp(&b.destination))
            })
            .collect()
    }

    pub(crate) fn node_index(&self, id: &str) -> Option<NodeIndex> {
        self.index.get(id).copied()
    }

    pub(crate) fn name(&self, node: NodeIndex) -> &str {
        &self.graph[node].id
    }

    /// `(neighbor, link, weights)` for every adjacency entry of `node`,
    /// ordered by link id
    pub(crate) fn incident_links(&self, node: NodeIndex) -> Vec<(NodeIndex, LinkId, Link)> {
        let mut edges: Vec<_> = self.graph.edges(node).collect();
        edges.sort_unstable_by_key(|edge| edge.id());
        edges.dedup_by_key(|edge| edge.id());

        let mut links = Vec::with_capacity(edges.len());
        for edge in edges {
            let other = if edge.source() == node {
                edge.target()
            } else {
                edge.source()
            };
            links.push((other, edge.id(), *edge.weight()));
            if edge.source() == edge.target() {
                links.push((other, edge.id(), *edge.weight()));
            }
        }
        links
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_node_is_idempotent() {
        let mut graph = TransportGraph::new();
        let first = graph.add_node("Gusa", None);
        let second = graph.add_node("Gusa", None);

        assert_eq!(first, second);
        assert_eq!(graph.node_count(), 1);
        assert!(graph.neighbors("Gusa").is_empty());
    }

    #[test]
    fn add_node_overwrites_coordinates_only_when_given() {
        let mut graph = TransportGraph::new();
        graph.add_node("Gusa", Some(Point::new(20.0, 10.0)));
        graph.add_node("Gusa", None);
        assert_eq!(graph.coordinates("Gusa"), Some(Point::new(20.0, 10.0)));

        graph.add_node("Gusa", Some(Point::new(1.0, 2.0)));
        assert_eq!(graph.coordinates("Gusa"), Some(Point::new(1.0, 2.0)));
    }

    #[test]
    fn add_edge_is_visible_from_both_ends() {
        let mut graph = TransportGraph::new();
        graph.add_edge("Tagoloan", "Gusa", 22.9, 30.0);

        let forward = graph.neighbors("Tagoloan");
        let backward = graph.neighbors("Gusa");

        assert_eq!(forward.len(), 1);
        assert_eq!(backward.len(), 1);
        assert_eq!(forward[0].node, "Gusa");
        assert_eq!(backward[0].node, "Tagoloan");
        assert_eq!(forward[0].distance, backward[0].distance);
        assert_eq!(forward[0].fare, backward[0].fare);
    }

    #[test]
    fn parallel_links_are_kept_in_insertion_order() {
        let mut graph = TransportGraph::new();
        graph.add_edge("A", "B", 1.0, 10.0);
        graph.add_edge("B", "A", 2.0, 5.0);

        let neighbors = graph.neighbors("A");
        assert_eq!(neighbors.len(), 2);
        assert_eq!(neighbors[0].fare, 10.0);
        assert_eq!(neighbors[1].fare, 5.0);
        assert_eq!(graph.degree("A"), 2);
        assert_eq!(graph.link_count(), 2);
    }

    #[test]
    fn unknown_node_has_no_neighbors() {
        let graph = TransportGraph::new();
        assert!(graph.neighbors("Nowhere").is_empty());
        assert_eq!(graph.degree("Nowhere"), 0);
    }

    #[test]
    fn unique_links_keeps_first_and_sorts() {
        let mut graph = TransportGraph::new();
        graph.add_edge("C", "B", 3.0, 30.0);
        graph.add_edge("A", "B", 1.0, 10.0);
        graph.add_edge("B", "A", 9.0, 90.0);

        let links = graph.unique_links();
        assert_eq!(links.len(), 2);
        assert_eq!(links[0], LinkRecord::new("A", "B", 1.0, 10.0));
        assert_eq!(links[1], LinkRecord::new("C", "B", 3.0, 30.0));
    }

    #[test]
    fn clear_drops_everything() {
        let mut graph = TransportGraph::new();
        graph.add_node("A", Some(Point::new(0.0, 0.0)));
        graph.add_edge("A", "B", 1.0, 1.0);
        graph.clear();

        assert!(graph.is_empty());
        assert!(!graph.contains("A"));
        assert_eq!(graph.coordinates("A"), None);
        assert_eq!(graph.link_count(), 0);
    }
}
