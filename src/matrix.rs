use pyo3::prelude::*;

use crate::error::{parse_metric, to_py_err};
use crate::model::PyTransportNetwork;

/// All-pairs route costs between the given places
///
/// Row ``i`` holds the costs from ``places[i]`` to every place in the list,
/// with None where no route exists. Rows are computed in parallel.
///
/// Raises
/// ------
/// KeyError
///     If a place is unknown
#[cfg_attr(feature = "stubgen", pyo3_stub_gen::derive::gen_stub_pyfunction)]
#[pyfunction]
#[pyo3(signature = (network, places, metric = "distance"))]
pub fn cost_matrix(
    py: Python<'_>,
    network: &PyTransportNetwork,
    places: Vec<String>,
    metric: &str,
) -> PyResult<Vec<Vec<Option<f64>>>> {
    let metric = parse_metric(metric)?;
    let graph = network.network.snapshot();

    // Allow Python threads while the rows are computed
    py.detach(|| graph.cost_matrix(&places, metric))
        .map_err(to_py_err)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matrix_matches_reference_routes() {
        Python::initialize();
        Python::attach(|py| {
            let network = PyTransportNetwork::reference();
            let places = vec!["Tagoloan".to_string(), "Indahag".to_string()];

            let matrix = cost_matrix(py, &network, places, "fare").unwrap();
            assert_eq!(matrix[0][0], Some(0.0));
            assert_eq!(matrix[0][1], Some(95.0));
            assert_eq!(matrix[1][0], Some(95.0));

            let err = cost_matrix(py, &network, vec!["Nowhere".to_string()], "fare").unwrap_err();
            assert!(err.is_instance_of::<pyo3::exceptions::PyKeyError>(py));
        });
    }
}
