use faregraph_core::prelude::*;
use pyo3::prelude::*;

use crate::error::{parse_metric, to_py_err};
use crate::model::PyTransportNetwork;

/// A single hop of a route
#[cfg_attr(feature = "stubgen", pyo3_stub_gen::derive::gen_stub_pyclass)]
#[pyclass(name = "RouteLeg", frozen)]
pub struct PyRouteLeg {
    inner: RouteLeg,
}

#[cfg_attr(feature = "stubgen", pyo3_stub_gen::derive::gen_stub_pymethods)]
#[pymethods]
impl PyRouteLeg {
    #[getter]
    fn origin(&self) -> &str {
        &self.inner.from
    }

    #[getter]
    fn destination(&self) -> &str {
        &self.inner.to
    }

    #[getter]
    fn distance(&self) -> f64 {
        self.inner.distance
    }

    #[getter]
    fn fare(&self) -> f64 {
        self.inner.fare
    }

    fn __repr__(&self) -> String {
        format!(
            "RouteLeg({} -> {}, distance={}, fare={})",
            self.inner.from, self.inner.to, self.inner.distance, self.inner.fare
        )
    }
}

/// Hop-by-hop breakdown of a path with its totals
#[cfg_attr(feature = "stubgen", pyo3_stub_gen::derive::gen_stub_pyclass)]
#[pyclass(name = "RouteReport", frozen)]
pub struct PyRouteReport {
    inner: RouteReport,
}

impl From<RouteReport> for PyRouteReport {
    fn from(inner: RouteReport) -> Self {
        Self { inner }
    }
}

#[cfg_attr(feature = "stubgen", pyo3_stub_gen::derive::gen_stub_pymethods)]
#[pymethods]
impl PyRouteReport {
    #[getter]
    fn legs(&self) -> Vec<PyRouteLeg> {
        self.inner
            .legs
            .iter()
            .map(|leg| PyRouteLeg { inner: leg.clone() })
            .collect()
    }

    #[getter]
    fn total_distance(&self) -> f64 {
        self.inner.total_distance
    }

    #[getter]
    fn total_fare(&self) -> f64 {
        self.inner.total_fare
    }

    /// Fare per kilometre, 0 for a route without distance
    #[getter]
    fn efficiency(&self) -> f64 {
        self.inner.efficiency
    }

    /// Number of hops
    #[getter]
    fn stops(&self) -> usize {
        self.inner.stops()
    }

    /// Plain text summary with the total under `metric`
    #[pyo3(signature = (metric = "distance"))]
    fn summary(&self, metric: &str) -> PyResult<String> {
        Ok(self.inner.summary(parse_metric(metric)?))
    }

    fn __len__(&self) -> usize {
        self.inner.stops()
    }

    fn __repr__(&self) -> String {
        format!(
            "RouteReport(stops={}, total_distance={}, total_fare={})",
            self.inner.stops(),
            self.inner.total_distance,
            self.inner.total_fare
        )
    }
}

/// A shortest route together with the links it uses
#[cfg_attr(feature = "stubgen", pyo3_stub_gen::derive::gen_stub_pyclass)]
#[pyclass(name = "Route", frozen)]
pub struct PyRoute {
    route: Route,
    report: RouteReport,
}

#[cfg_attr(feature = "stubgen", pyo3_stub_gen::derive::gen_stub_pymethods)]
#[pymethods]
impl PyRoute {
    /// Places from start to end
    #[getter]
    fn nodes(&self) -> Vec<String> {
        self.route.nodes.clone()
    }

    /// Total cost under the route metric
    #[getter]
    fn cost(&self) -> f64 {
        self.route.cost
    }

    #[getter]
    fn metric(&self) -> &'static str {
        self.route.metric.as_str()
    }

    #[getter]
    fn hops(&self) -> usize {
        self.route.hops()
    }

    #[getter]
    fn legs(&self) -> Vec<PyRouteLeg> {
        self.report
            .legs
            .iter()
            .map(|leg| PyRouteLeg { inner: leg.clone() })
            .collect()
    }

    /// Breakdown over the exact links of the route
    fn details(&self) -> PyRouteReport {
        PyRouteReport::from(self.report.clone())
    }

    fn summary(&self) -> String {
        self.report.summary(self.route.metric)
    }

    fn __repr__(&self) -> String {
        format!(
            "Route({}, {}={})",
            self.route.nodes.join(" -> "),
            self.route.metric,
            self.route.cost
        )
    }

    fn __str__(&self) -> String {
        self.__repr__()
    }
}

/// Find the cheapest route between two places
///
/// Parameters
/// ----------
/// network : TransportNetwork
/// start : str
/// end : str
/// metric : str, default="distance"
///     Either "distance" or "fare"
///
/// Returns
/// -------
/// Route or None
///     None when the places are not connected
///
/// Raises
/// ------
/// KeyError
///     If either place is unknown
#[cfg_attr(feature = "stubgen", pyo3_stub_gen::derive::gen_stub_pyfunction)]
#[pyfunction]
#[pyo3(signature = (network, start, end, metric = "distance"))]
pub fn find_route(
    network: &PyTransportNetwork,
    start: &str,
    end: &str,
    metric: &str,
) -> PyResult<Option<PyRoute>> {
    let metric = parse_metric(metric)?;
    let graph = network.network.snapshot();

    match graph.shortest_path(start, end, metric) {
        PathResult::Found(route) => {
            let report = route.report(&graph).map_err(to_py_err)?;
            Ok(Some(PyRoute { route, report }))
        }
        PathResult::NodeNotFound(id) => Err(to_py_err(Error::NodeNotFound(id))),
        PathResult::Unreachable => Ok(None),
    }
}
