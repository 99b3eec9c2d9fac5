//! Reference network of eight places around Cagayan de Oro

use geo::Point;

use super::{LinkRecord, TransportGraph};

const PLACES: [(&str, (f64, f64)); 8] = [
    ("Tagoloan", (0.0, 0.0)),
    ("Gusa", (20.0, 10.0)),
    ("Balulang", (10.0, 5.0)),
    ("Carmen", (25.0, 0.0)),
    ("Pagatpat", (15.0, 15.0)),
    ("Iponan", (30.0, 20.0)),
    ("Indahag", (35.0, 25.0)),
    ("Taguanao", (25.0, 30.0)),
];

// (origin, destination, distance km, fare pesos)
const ROUTES: [(&str, &str, f64, f64); 10] = [
    ("Tagoloan", "Gusa", 22.9, 30.0),
    ("Tagoloan", "Balulang", 15.5, 25.0),
    ("Tagoloan", "Carmen", 30.0, 40.0),
    ("Gusa", "Balulang", 10.0, 15.0),
    ("Gusa", "Carmen", 20.0, 25.0),
    ("Balulang", "Pagatpat", 12.0, 20.0),
    ("Carmen", "Iponan", 18.0, 35.0),
    ("Pagatpat", "Taguanao", 25.0, 30.0),
    ("Iponan", "Indahag", 14.0, 20.0),
    ("Taguanao", "Indahag", 16.0, 25.0),
];

/// Link list of the reference network
pub fn reference_links() -> Vec<LinkRecord> {
    ROUTES
        .iter()
        .map(|&(origin, destination, distance, fare)| {
            LinkRecord::new(origin, destination, distance, fare)
        })
        .collect()
}

/// Builds the reference network, with display coordinates
pub fn reference_network() -> TransportGraph {
    let mut graph = TransportGraph::with_capacity(PLACES.len(), ROUTES.len());
    for (id, (x, y)) in PLACES {
        graph.add_node(id, Some(Point::new(x, y)));
    }
    for link in reference_links() {
        graph.add_edge(&link.origin, &link.destination, link.distance, link.fare);
    }
    graph
}
