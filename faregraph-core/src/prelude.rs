// Re-export key components
pub use crate::analysis::{EfficiencySummary, LinkEfficiency, NetworkStatistics, WeightSummary};
pub use crate::loading::{DataFormat, NetworkConfig, create_network};
pub use crate::model::{
    Link, LinkId, LinkRecord, Metric, Neighbor, Place, SharedNetwork, TransportGraph,
    reference_network,
};
pub use crate::routing::{
    PathResult, Route, RouteLeg, RouteReport, all_shortest_paths, cost_matrix, route_details,
    shortest_path,
};

pub use crate::Error;
