//! Shortest path search and route breakdowns

pub mod dijkstra;
pub mod matrix;
pub mod report;
pub mod result;

pub use dijkstra::{all_shortest_paths, shortest_path};
pub use matrix::cost_matrix;
pub use report::{RouteLeg, RouteReport, route_details};
pub use result::{PathResult, Route};
