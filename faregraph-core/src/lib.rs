//! Fare/distance route planning over a small undirected transport network.
//!
//! The network is a multigraph of named places joined by links that carry a
//! distance and a fare. Routes are found with Dijkstra's algorithm under
//! either weight, expanded into per-hop reports and summarised in network
//! statistics. Networks can be loaded from and saved to CSV or JSON.

pub mod analysis;
pub mod error;
pub mod loading;
pub mod model;
pub mod prelude;
pub mod routing;

pub use analysis::NetworkStatistics;
pub use error::Error;
pub use loading::{DataFormat, NetworkConfig, create_network};
pub use model::{
    Link, LinkId, LinkRecord, Metric, Neighbor, Place, SharedNetwork, TransportGraph,
    reference_network,
};
pub use routing::{PathResult, Route, RouteLeg, RouteReport};
