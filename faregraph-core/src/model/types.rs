//! Basic network types: places, links and the cost metric

use std::fmt;
use std::str::FromStr;

use geo::Point;
use petgraph::graph::EdgeIndex;
use serde::{Deserialize, Serialize};

use crate::Error;

/// Identity of a single link instance.
///
/// Parallel links between the same pair of places have distinct ids,
/// assigned in insertion order.
pub type LinkId = EdgeIndex;

/// Cost dimension used by a shortest path query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    /// Physical distance in kilometres
    Distance,
    /// Monetary fare in pesos
    Fare,
}

impl Metric {
    pub fn as_str(self) -> &'static str {
        match self {
            Metric::Distance => "distance",
            Metric::Fare => "fare",
        }
    }

    /// Unit label used in text reports
    pub fn unit(self) -> &'static str {
        match self {
            Metric::Distance => "km",
            Metric::Fare => "pesos",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Metric {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "distance" => Ok(Metric::Distance),
            "fare" => Ok(Metric::Fare),
            other => Err(Error::InvalidData(format!(
                "unknown metric '{other}', expected 'distance' or 'fare'"
            ))),
        }
    }
}

/// Network node
#[derive(Debug, Clone)]
pub struct Place {
    /// Unique place name
    pub id: String,
    /// Display coordinates, never used for routing
    pub geometry: Option<Point<f64>>,
}

/// Network edge weights
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    pub distance: f64,
    pub fare: f64,
}

impl Link {
    pub fn cost(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Distance => self.distance,
            Metric::Fare => self.fare,
        }
    }
}

/// Adjacency entry as seen from one endpoint of a link
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Neighbor {
    pub node: String,
    pub distance: f64,
    pub fare: f64,
    #[serde(skip)]
    pub link: LinkId,
}

/// Flat, serializable form of a single link
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkRecord {
    pub origin: String,
    pub destination: String,
    pub distance: f64,
    pub fare: f64,
}

impl LinkRecord {
    pub fn new(origin: &str, destination: &str, distance: f64, fare: f64) -> Self {
        Self {
            origin: origin.to_string(),
            destination: destination.to_string(),
            distance,
            fare,
        }
    }

    /// Fare paid per unit of distance, `None` for zero-length links
    pub fn efficiency(&self) -> Option<f64> {
        (self.distance != 0.0).then(|| self.fare / self.distance)
    }
}
