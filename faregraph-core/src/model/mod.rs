//! Data model for fare/distance route planning
//!
//! Contains the transport network graph and the types it is built from.

pub mod graph;
pub mod seed;
pub mod shared;
pub mod types;

pub use graph::TransportGraph;
pub use seed::reference_network;
pub use shared::SharedNetwork;
pub use types::{Link, LinkId, LinkRecord, Metric, Neighbor, Place};
