//! Aggregate metrics over the whole network

use std::collections::BTreeMap;
use std::fmt;

use itertools::Itertools;
use serde::Serialize;

use crate::model::{LinkRecord, TransportGraph};

/// Min/max/mean/sum of one link weight
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeightSummary {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub sum: f64,
}

impl WeightSummary {
    #[allow(clippy::cast_precision_loss)]
    fn from_values(values: impl IntoIterator<Item = f64>) -> Option<Self> {
        let mut count = 0usize;
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut sum = 0.0;
        for value in values {
            count += 1;
            min = min.min(value);
            max = max.max(value);
            sum += value;
        }

        (count > 0).then(|| Self {
            min,
            max,
            mean: sum / count as f64,
            sum,
        })
    }
}

/// Min/max/mean of fare per unit of distance
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EfficiencySummary {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

impl From<WeightSummary> for EfficiencySummary {
    fn from(summary: WeightSummary) -> Self {
        Self {
            min: summary.min,
            max: summary.max,
            mean: summary.mean,
        }
    }
}

/// Fare per unit of distance of a single link
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinkEfficiency {
    pub origin: String,
    pub destination: String,
    pub distance: f64,
    pub fare: f64,
    pub efficiency: f64,
}

/// Network-wide distance, fare, efficiency and connectivity metrics
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NetworkStatistics {
    pub node_count: usize,
    /// Links deduplicated by their pair of endpoints
    pub edge_count: usize,
    /// `None` when the network has no links
    pub distance: Option<WeightSummary>,
    pub fare: Option<WeightSummary>,
    /// Over links with non-zero distance
    pub efficiency: Option<EfficiencySummary>,
    /// Raw adjacency size per place, parallel links included
    pub degree: BTreeMap<String, usize>,
    /// Links with non-zero distance, cheapest fare per distance first
    pub efficiency_ranking: Vec<LinkEfficiency>,
}

impl NetworkStatistics {
    pub fn compute(graph: &TransportGraph) -> Self {
        let links = graph.unique_links();

        let efficiency_ranking: Vec<LinkEfficiency> = links
            .iter()
            .filter_map(|link| {
                let LinkRecord {
                    origin,
                    destination,
                    distance,
                    fare,
                } = link;
                link.efficiency().map(|efficiency| LinkEfficiency {
                    origin: origin.clone(),
                    destination: destination.clone(),
                    distance: *distance,
                    fare: *fare,
                    efficiency,
                })
            })
            .sorted_by(|a, b| a.efficiency.total_cmp(&b.efficiency))
            .collect();

        let degree = graph
            .places()
            .map(|place| (place.id.clone(), graph.degree(&place.id)))
            .collect();

        Self {
            node_count: graph.node_count(),
            edge_count: links.len(),
            distance: WeightSummary::from_values(links.iter().map(|link| link.distance)),
            fare: WeightSummary::from_values(links.iter().map(|link| link.fare)),
            efficiency: WeightSummary::from_values(
                efficiency_ranking.iter().map(|link| link.efficiency),
            )
            .map(EfficiencySummary::from),
            degree,
            efficiency_ranking,
        }
    }

    /// Up to `n` links with the lowest fare per distance
    pub fn most_efficient(&self, n: usize) -> &[LinkEfficiency] {
        &self.efficiency_ranking[..n.min(self.efficiency_ranking.len())]
    }

    /// Up to `n` links with the highest fare per distance, highest first
    pub fn least_efficient(&self, n: usize) -> Vec<&LinkEfficiency> {
        self.efficiency_ranking.iter().rev().take(n).collect()
    }

    /// Up to `n` places with the most adjacency entries; ties by name
    pub fn most_connected(&self, n: usize) -> Vec<(&str, usize)> {
        self.degree
            .iter()
            .map(|(id, &degree)| (id.as_str(), degree))
            .sorted_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)))
            .take(n)
            .collect()
    }
}

impl fmt::Display for NetworkStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "TRANSPORTATION NETWORK ANALYSIS")?;
        writeln!(f, "{}\n", "=".repeat(50))?;

        writeln!(f, "BASIC NETWORK STATISTICS")?;
        writeln!(f, "{}", "-".repeat(30))?;
        writeln!(f, "Total nodes: {}", self.node_count)?;
        writeln!(f, "Total connections: {}", self.edge_count)?;
        writeln!(f, "Nodes: {}\n", self.degree.keys().join(", "))?;

        if let Some(distance) = &self.distance {
            writeln!(f, "DISTANCE STATISTICS")?;
            writeln!(f, "{}", "-".repeat(20))?;
            writeln!(f, "Average distance: {:.1} km", distance.mean)?;
            writeln!(f, "Shortest route: {:.1} km", distance.min)?;
            writeln!(f, "Longest route: {:.1} km\n", distance.max)?;
        }

        if let Some(fare) = &self.fare {
            writeln!(f, "FARE STATISTICS")?;
            writeln!(f, "{}", "-".repeat(15))?;
            writeln!(f, "Average fare: ₱{:.1}", fare.mean)?;
            writeln!(f, "Cheapest fare: ₱{:.0}", fare.min)?;
            writeln!(f, "Most expensive fare: ₱{:.0}\n", fare.max)?;
        }

        writeln!(f, "CONNECTIVITY ANALYSIS")?;
        writeln!(f, "{}", "-".repeat(22))?;
        for (id, degree) in &self.degree {
            writeln!(f, "{id}: {degree} direct connections")?;
        }

        writeln!(f, "\nMOST CONNECTED NODES")?;
        writeln!(f, "{}", "-".repeat(20))?;
        for (id, degree) in self.most_connected(3) {
            writeln!(f, "{id}: {degree} connections")?;
        }

        writeln!(f, "\nROUTE EFFICIENCY ANALYSIS")?;
        writeln!(f, "{}", "-".repeat(26))?;
        writeln!(f, "Most efficient routes (lowest fare per km):")?;
        for link in self.most_efficient(3) {
            write_efficiency(f, link)?;
        }
        writeln!(f, "\nLeast efficient routes (highest fare per km):")?;
        for link in self.least_efficient(3) {
            write_efficiency(f, link)?;
        }
        Ok(())
    }
}

fn write_efficiency(f: &mut fmt::Formatter<'_>, link: &LinkEfficiency) -> fmt::Result {
    writeln!(
        f,
        "{} ↔ {}: ₱{:.1}/km ({:.1}km, ₱{:.0})",
        link.origin, link.destination, link.efficiency, link.distance, link.fare
    )
}

impl TransportGraph {
    /// See [`NetworkStatistics::compute`]
    pub fn network_statistics(&self) -> NetworkStatistics {
        NetworkStatistics::compute(self)
    }
}
