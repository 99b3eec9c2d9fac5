//! Copy-on-write handle to a network shared between callers

use std::sync::{Arc, PoisonError, RwLock};

use super::TransportGraph;

/// Shared network handle.
///
/// Readers take an `Arc` snapshot and keep using it for the whole query.
/// Writers build a new graph and swap it in, so a snapshot never changes
/// under its reader.
#[derive(Debug, Default)]
pub struct SharedNetwork {
    current: RwLock<Arc<TransportGraph>>,
}

impl SharedNetwork {
    pub fn new(graph: TransportGraph) -> Self {
        Self {
            current: RwLock::new(Arc::new(graph)),
        }
    }

    /// Current version of the network
    pub fn snapshot(&self) -> Arc<TransportGraph> {
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Swaps in a new network, returning the previous one
    pub fn replace(&self, graph: TransportGraph) -> Arc<TransportGraph> {
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *guard, Arc::new(graph))
    }

    /// Applies `mutate` to a copy of the current network and publishes the copy
    pub fn update<F, R>(&self, mutate: F) -> R
    where
        F: FnOnce(&mut TransportGraph) -> R,
    {
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        let mut next = TransportGraph::clone(&guard);
        let result = mutate(&mut next);
        *guard = Arc::new(next);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_is_unaffected_by_updates() {
        let shared = SharedNetwork::default();
        shared.update(|graph| {
            graph.add_edge("A", "B", 1.0, 2.0);
        });

        let before = shared.snapshot();
        shared.update(|graph| {
            graph.add_edge("B", "C", 1.0, 2.0);
        });

        assert_eq!(before.node_count(), 2);
        assert_eq!(shared.snapshot().node_count(), 3);
    }

    #[test]
    fn replace_returns_previous_network() {
        let shared = SharedNetwork::new(crate::model::reference_network());
        let previous = shared.replace(TransportGraph::new());

        assert_eq!(previous.node_count(), 8);
        assert!(shared.snapshot().is_empty());
    }
}
