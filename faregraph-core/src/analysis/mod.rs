//! Network-wide analysis

pub mod statistics;

pub use statistics::{EfficiencySummary, LinkEfficiency, NetworkStatistics, WeightSummary};
