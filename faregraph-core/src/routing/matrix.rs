use rayon::prelude::*;

use super::dijkstra::dijkstra_tree;
use crate::Error;
use crate::model::{Metric, TransportGraph};

/// All-pairs route costs between `places`.
///
/// Row `i` holds the costs from `places[i]` to every entry of `places`,
/// `None` where no route exists. One shortest path tree is built per
/// source, in parallel.
///
/// # Errors
///
/// Returns [`Error::NodeNotFound`] for the first unknown place
pub fn cost_matrix<S>(
    graph: &TransportGraph,
    places: &[S],
    metric: Metric,
) -> Result<Vec<Vec<Option<f64>>>, Error>
where
    S: AsRef<str> + Sync,
{
    let indices = places
        .iter()
        .map(|place| {
            graph
                .node_index(place.as_ref())
                .ok_or_else(|| Error::NodeNotFound(place.as_ref().to_string()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let matrix = indices
        .par_iter()
        .map(|&source| {
            let tree = dijkstra_tree(graph, source, None, metric);
            indices
                .iter()
                .map(|&target| tree.cost_to(target))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    Ok(matrix)
}

impl TransportGraph {
    /// See [`cost_matrix`]
    pub fn cost_matrix<S>(&self, places: &[S], metric: Metric) -> Result<Vec<Vec<Option<f64>>>, Error>
    where
        S: AsRef<str> + Sync,
    {
        cost_matrix(self, places, metric)
    }
}
