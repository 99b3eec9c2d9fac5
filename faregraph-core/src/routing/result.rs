//! Outcomes of shortest path queries

use serde::Serialize;

use crate::model::{LinkId, Metric};

/// A found route with the exact link instances it uses
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    /// Places from start to end, at least one
    pub nodes: Vec<String>,
    /// Link used for each hop, `nodes.len() - 1` entries
    #[serde(skip)]
    pub links: Vec<LinkId>,
    /// Total cost under `metric`
    pub cost: f64,
    pub metric: Metric,
}

impl Route {
    pub fn start(&self) -> &str {
        &self.nodes[0]
    }

    pub fn end(&self) -> &str {
        &self.nodes[self.nodes.len() - 1]
    }

    /// Number of hops
    pub fn hops(&self) -> usize {
        self.links.len()
    }
}

/// Result of a single-pair shortest path query
#[derive(Debug, Clone, PartialEq)]
pub enum PathResult {
    Found(Route),
    /// The named place is not part of the network
    NodeNotFound(String),
    /// Both places exist but are not connected
    Unreachable,
}

impl PathResult {
    pub fn is_found(&self) -> bool {
        matches!(self, PathResult::Found(_))
    }

    pub fn route(&self) -> Option<&Route> {
        match self {
            PathResult::Found(route) => Some(route),
            _ => None,
        }
    }

    pub fn into_route(self) -> Option<Route> {
        match self {
            PathResult::Found(route) => Some(route),
            _ => None,
        }
    }

    /// Places along the route, empty unless a route was found
    pub fn path(&self) -> &[String] {
        match self {
            PathResult::Found(route) => &route.nodes,
            _ => &[],
        }
    }

    /// Route cost, `f64::INFINITY` unless a route was found
    pub fn cost(&self) -> f64 {
        self.route().map_or(f64::INFINITY, |route| route.cost)
    }

    /// `(path, cost)` pair with the `([], inf)` shape for misses
    pub fn into_parts(self) -> (Vec<String>, f64) {
        match self {
            PathResult::Found(route) => (route.nodes, route.cost),
            _ => (Vec::new(), f64::INFINITY),
        }
    }
}
