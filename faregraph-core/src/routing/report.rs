use std::fmt::Write as _;

use serde::Serialize;

use super::result::Route;
use crate::Error;
use crate::model::{Link, Metric, TransportGraph};

/// A single hop of a route
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteLeg {
    pub from: String,
    pub to: String,
    pub distance: f64,
    pub fare: f64,
}

/// Hop-by-hop breakdown of a route with aggregate totals
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteReport {
    pub legs: Vec<RouteLeg>,
    pub total_distance: f64,
    pub total_fare: f64,
    /// Fare per unit of distance, 0 for a zero-length route
    pub efficiency: f64,
}

impl RouteReport {
    fn from_legs(legs: Vec<RouteLeg>) -> Self {
        let total_distance: f64 = legs.iter().map(|leg| leg.distance).sum();
        let total_fare: f64 = legs.iter().map(|leg| leg.fare).sum();
        let efficiency = if total_distance == 0.0 {
            0.0
        } else {
            total_fare / total_distance
        };

        Self {
            legs,
            total_distance,
            total_fare,
            efficiency,
        }
    }

    /// Number of hops
    pub fn stops(&self) -> usize {
        self.legs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.legs.is_empty()
    }

    pub fn total(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Distance => self.total_distance,
            Metric::Fare => self.total_fare,
        }
    }

    /// Plain text summary of the route, as saved by route planning front ends
    pub fn summary(&self, metric: Metric) -> String {
        let mut text = String::new();
        let places: Vec<&str> = self
            .legs
            .first()
            .map(|leg| leg.from.as_str())
            .into_iter()
            .chain(self.legs.iter().map(|leg| leg.to.as_str()))
            .collect();

        let _ = writeln!(text, "Transportation Network Route Analysis");
        let _ = writeln!(text, "{}\n", "=".repeat(50));
        let _ = writeln!(text, "Route: {}", places.join(" → "));
        let _ = writeln!(
            text,
            "Total {metric}: {:.1} {}",
            self.total(metric),
            metric.unit()
        );
        let _ = writeln!(text, "Number of stops: {}\n", self.stops());
        let _ = writeln!(text, "Detailed Route:");
        let _ = writeln!(text, "{}", "-".repeat(20));
        for (idx, leg) in self.legs.iter().enumerate() {
            let _ = writeln!(text, "Step {}: {} → {}", idx + 1, leg.from, leg.to);
            let _ = writeln!(text, "  Distance: {:.1} km", leg.distance);
            let _ = writeln!(text, "  Fare: ₱{:.0}\n", leg.fare);
        }
        text
    }
}

/// Expands a path of place names into per-hop records.
///
/// Each hop uses the first link, in insertion order, between its two places.
///
/// # Errors
///
/// [`Error::NodeNotFound`] for a place missing from the network and
/// [`Error::MissingLink`] for consecutive places with no link between them
pub fn route_details<S>(graph: &TransportGraph, path: &[S]) -> Result<RouteReport, Error>
where
    S: AsRef<str>,
{
    for place in path {
        if !graph.contains(place.as_ref()) {
            return Err(Error::NodeNotFound(place.as_ref().to_string()));
        }
    }

    let legs = path
        .windows(2)
        .map(|pair| {
            let (from, to) = (pair[0].as_ref(), pair[1].as_ref());
            graph
                .neighbors(from)
                .into_iter()
                .find(|neighbor| neighbor.node == to)
                .map(|neighbor| RouteLeg {
                    from: from.to_string(),
                    to: to.to_string(),
                    distance: neighbor.distance,
                    fare: neighbor.fare,
                })
                .ok_or_else(|| Error::MissingLink {
                    from: from.to_string(),
                    to: to.to_string(),
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(RouteReport::from_legs(legs))
}

impl Route {
    /// Breakdown of this route using exactly the links the search chose
    ///
    /// # Errors
    ///
    /// [`Error::MissingLink`] if the route does not belong to `graph`
    pub fn report(&self, graph: &TransportGraph) -> Result<RouteReport, Error> {
        let legs = self
            .nodes
            .windows(2)
            .zip(&self.links)
            .map(|(pair, &link)| -> Result<RouteLeg, Error> {
                let Link { distance, fare } =
                    graph.link(link).ok_or_else(|| Error::MissingLink {
                        from: pair[0].clone(),
                        to: pair[1].clone(),
                    })?;
                Ok(RouteLeg {
                    from: pair[0].clone(),
                    to: pair[1].clone(),
                    distance,
                    fare,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(RouteReport::from_legs(legs))
    }
}

impl TransportGraph {
    /// See [`route_details`]
    pub fn route_details<S>(&self, path: &[S]) -> Result<RouteReport, Error>
    where
        S: AsRef<str>,
    {
        route_details(self, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::reference_network;

    #[test]
    fn details_have_one_leg_per_hop() {
        let graph = reference_network();
        let report = graph
            .route_details(&["Tagoloan", "Carmen", "Iponan", "Indahag"])
            .unwrap();

        assert_eq!(report.stops(), 3);
        assert_eq!(report.legs[0].from, "Tagoloan");
        assert_eq!(report.legs[2].to, "Indahag");
        assert!((report.total_fare - 95.0).abs() < 1e-9);
        assert!((report.total_distance - 62.0).abs() < 1e-9);
        assert!((report.efficiency - 95.0 / 62.0).abs() < 1e-9);
    }

    #[test]
    fn short_paths_have_no_legs() {
        let graph = reference_network();
        let empty: [&str; 0] = [];

        let single = graph.route_details(&["Gusa"]).unwrap();
        assert!(single.is_empty());
        assert_eq!(single.efficiency, 0.0);
        assert!(graph.route_details(&empty).unwrap().is_empty());
    }

    #[test]
    fn missing_link_is_reported() {
        let graph = reference_network();
        let err = graph.route_details(&["Tagoloan", "Indahag"]).unwrap_err();
        assert!(matches!(err, Error::MissingLink { from, to } if from == "Tagoloan" && to == "Indahag"));
    }

    #[test]
    fn unknown_place_is_reported() {
        let graph = reference_network();
        let err = graph.route_details(&["Tagoloan", "Nowhere"]).unwrap_err();
        assert!(matches!(err, Error::NodeNotFound(id) if id == "Nowhere"));
    }

    #[test]
    fn route_report_follows_chosen_parallel_link() {
        let mut graph = TransportGraph::new();
        graph.add_edge("A", "B", 1.0, 50.0);
        graph.add_edge("A", "B", 3.0, 20.0);

        let route = graph
            .shortest_path("A", "B", Metric::Fare)
            .into_route()
            .unwrap();

        // Path based expansion takes the first inserted link
        let by_path = graph.route_details(&route.nodes).unwrap();
        assert_eq!(by_path.total_fare, 50.0);

        let exact = route.report(&graph).unwrap();
        assert_eq!(exact.total_fare, route.cost);
        assert_eq!(exact.total_distance, 3.0);
    }

    #[test]
    fn summary_lists_every_step() {
        let graph = reference_network();
        let route = graph
            .shortest_path("Tagoloan", "Indahag", Metric::Fare)
            .into_route()
            .unwrap();
        let summary = route.report(&graph).unwrap().summary(Metric::Fare);

        assert!(summary.contains("Route: Tagoloan → Carmen → Iponan → Indahag"));
        assert!(summary.contains("Total fare: 95.0 pesos"));
        assert!(summary.contains("Number of stops: 3"));
        assert!(summary.contains("Step 3: Iponan → Indahag"));
    }
}
