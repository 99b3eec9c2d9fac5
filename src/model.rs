use std::collections::BTreeMap;
use std::path::PathBuf;

use faregraph_core::loading::{export_csv, export_json, import_csv, import_json};
use faregraph_core::prelude::*;
use geo::Point;
use pyo3::prelude::*;

use crate::error::{parse_metric, to_py_err};
use crate::routing::PyRouteReport;
use crate::statistics::PyNetworkStatistics;

/// TransportNetwork
///
/// An undirected network of named places joined by links that carry a
/// distance (km) and a fare (pesos). Several links may join the same pair of
/// places.
///
/// Queries run against a snapshot of the network, so a network can be
/// reloaded or extended while other threads are still reading it.
///
/// Example:
///
/// .. code-block:: python
///
///     network = TransportNetwork.reference()
///     path, cost = network.shortest_path("Tagoloan", "Indahag", "fare")
#[cfg_attr(feature = "stubgen", pyo3_stub_gen::derive::gen_stub_pyclass)]
#[pyclass(name = "TransportNetwork", frozen)]
#[derive(Default)]
pub struct PyTransportNetwork {
    pub(crate) network: SharedNetwork,
}

#[cfg_attr(feature = "stubgen", pyo3_stub_gen::derive::gen_stub_pymethods)]
#[pymethods]
impl PyTransportNetwork {
    /// Create an empty network
    #[new]
    pub fn new() -> Self {
        Self::default()
    }

    /// Eight-place reference network around Cagayan de Oro
    #[staticmethod]
    pub fn reference() -> Self {
        Self {
            network: SharedNetwork::new(reference_network()),
        }
    }

    /// Load a network from a CSV or JSON file, see :func:`load_network`
    #[staticmethod]
    #[pyo3(signature = (path, format = None))]
    pub fn load(path: PathBuf, format: Option<&str>) -> PyResult<Self> {
        load_network(path, format)
    }

    /// Add a place, or update the coordinates of an existing one
    ///
    /// Parameters
    /// ----------
    /// id : str
    ///     Place name
    /// coordinates : tuple[float, float], optional
    ///     Display position as (x, y). Existing coordinates are kept when omitted.
    #[pyo3(signature = (id, coordinates = None))]
    pub fn add_node(&self, id: &str, coordinates: Option<(f64, f64)>) {
        self.network.update(|graph| {
            graph.add_node(id, coordinates.map(|(x, y)| Point::new(x, y)));
        });
    }

    /// Add a link in both directions, creating missing places.
    /// Returns the link id.
    pub fn add_edge(&self, origin: &str, destination: &str, distance: f64, fare: f64) -> usize {
        self.network
            .update(|graph| graph.add_edge(origin, destination, distance, fare))
            .index()
    }

    /// `(neighbor, distance, fare)` for every link of a place, in insertion order
    pub fn neighbors(&self, id: &str) -> Vec<(String, f64, f64)> {
        self.network
            .snapshot()
            .neighbors(id)
            .into_iter()
            .map(|neighbor| (neighbor.node, neighbor.distance, neighbor.fare))
            .collect()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.network.snapshot().contains(id)
    }

    pub fn degree(&self, id: &str) -> usize {
        self.network.snapshot().degree(id)
    }

    pub fn node_count(&self) -> usize {
        self.network.snapshot().node_count()
    }

    pub fn link_count(&self) -> usize {
        self.network.snapshot().link_count()
    }

    /// Sorted place names
    pub fn node_ids(&self) -> Vec<String> {
        self.network
            .snapshot()
            .node_ids()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Display coordinates of a place as (x, y)
    pub fn coordinates(&self, id: &str) -> Option<(f64, f64)> {
        self.network
            .snapshot()
            .coordinates(id)
            .map(|point| (point.x(), point.y()))
    }

    /// Remove every place and link
    pub fn clear(&self) {
        self.network.replace(TransportGraph::new());
    }

    /// Shortest path between two places
    ///
    /// Parameters
    /// ----------
    /// start : str
    /// end : str
    /// metric : str, default="distance"
    ///     Either "distance" or "fare"
    ///
    /// Returns
    /// -------
    /// tuple[list[str], float]
    ///     Places along the route and its cost, or ``([], inf)`` when either
    ///     place is unknown or no route exists
    #[pyo3(signature = (start, end, metric = "distance"))]
    pub fn shortest_path(&self, start: &str, end: &str, metric: &str) -> PyResult<(Vec<String>, f64)> {
        let metric = parse_metric(metric)?;
        Ok(self
            .network
            .snapshot()
            .shortest_path(start, end, metric)
            .into_parts())
    }

    /// Shortest paths from one place to every place, keyed by destination
    ///
    /// Unreachable places map to ``([], inf)``.
    ///
    /// Raises
    /// ------
    /// KeyError
    ///     If the start place is unknown
    #[pyo3(signature = (start, metric = "distance"))]
    pub fn all_shortest_paths(
        &self,
        start: &str,
        metric: &str,
    ) -> PyResult<BTreeMap<String, (Vec<String>, f64)>> {
        let metric = parse_metric(metric)?;
        let paths = self
            .network
            .snapshot()
            .all_shortest_paths(start, metric)
            .map_err(to_py_err)?;

        Ok(paths
            .into_iter()
            .map(|(id, result)| (id, result.into_parts()))
            .collect())
    }

    /// Per-hop breakdown of a path, using the first link between each pair
    ///
    /// Raises
    /// ------
    /// KeyError
    ///     If a place on the path is unknown
    /// ValueError
    ///     If two consecutive places are not linked
    pub fn route_details(&self, path: Vec<String>) -> PyResult<PyRouteReport> {
        self.network
            .snapshot()
            .route_details(&path)
            .map(PyRouteReport::from)
            .map_err(to_py_err)
    }

    /// All-pairs cost matrix, see :func:`cost_matrix`
    #[pyo3(signature = (places, metric = "distance"))]
    pub fn cost_matrix(
        &self,
        py: Python<'_>,
        places: Vec<String>,
        metric: &str,
    ) -> PyResult<Vec<Vec<Option<f64>>>> {
        crate::matrix::cost_matrix(py, self, places, metric)
    }

    pub fn network_statistics(&self) -> PyNetworkStatistics {
        PyNetworkStatistics::from(self.network.snapshot().network_statistics())
    }

    /// Replace the network with the content of a CSV file.
    /// The network is unchanged if the import fails.
    pub fn import_csv(&self, path: PathBuf) -> PyResult<()> {
        let graph = import_csv(&path).map_err(to_py_err)?;
        self.network.replace(graph);
        Ok(())
    }

    pub fn export_csv(&self, path: PathBuf) -> PyResult<()> {
        export_csv(&self.network.snapshot(), &path).map_err(to_py_err)
    }

    /// Replace the network with the content of a JSON file.
    /// The network is unchanged if the import fails.
    pub fn import_json(&self, path: PathBuf) -> PyResult<()> {
        let graph = import_json(&path).map_err(to_py_err)?;
        self.network.replace(graph);
        Ok(())
    }

    pub fn export_json(&self, path: PathBuf) -> PyResult<()> {
        export_json(&self.network.snapshot(), &path).map_err(to_py_err)
    }

    /// GeoJSON FeatureCollection of places and links with coordinates
    pub fn to_geojson(&self) -> PyResult<String> {
        self.network
            .snapshot()
            .to_geojson_string()
            .map_err(to_py_err)
    }

    pub fn export_geojson(&self, path: PathBuf) -> PyResult<()> {
        self.network
            .snapshot()
            .export_geojson(&path)
            .map_err(to_py_err)
    }

    fn __len__(&self) -> usize {
        self.node_count()
    }

    fn __contains__(&self, id: &str) -> bool {
        self.contains(id)
    }

    fn __repr__(&self) -> String {
        let graph = self.network.snapshot();
        format!(
            "TransportNetwork with {} places and {} links",
            graph.node_count(),
            graph.link_count()
        )
    }

    fn __str__(&self) -> String {
        self.__repr__()
    }
}

/// Load a transport network from a data file
///
/// Parameters
/// ----------
/// path : str
///     Path to a CSV or JSON file with origin, destination, distance and fare
///     fields
/// format : str, optional
///     "csv" or "json". Guessed from the file extension when omitted.
///
/// Returns
/// -------
/// TransportNetwork
///
/// Raises
/// ------
/// IOError
///     If the file does not exist or cannot be read
/// ValueError
///     If the format is unknown or the content is malformed
#[cfg_attr(feature = "stubgen", pyo3_stub_gen::derive::gen_stub_pyfunction)]
#[pyfunction]
#[pyo3(signature = (path, format = None))]
pub fn load_network(path: PathBuf, format: Option<&str>) -> PyResult<PyTransportNetwork> {
    let mut config = NetworkConfig::new(path);
    if let Some(format) = format {
        config = config.with_format(format.parse().map_err(to_py_err)?);
    }

    let graph = create_network(&config).map_err(to_py_err)?;
    Ok(PyTransportNetwork {
        network: SharedNetwork::new(graph),
    })
}
