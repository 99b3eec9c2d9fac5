use std::collections::BTreeMap;

use faregraph_core::prelude::*;
use pyo3::prelude::*;

fn summary_tuple(summary: WeightSummary) -> (f64, f64, f64, f64) {
    (summary.min, summary.max, summary.mean, summary.sum)
}

fn efficiency_tuple(link: &LinkEfficiency) -> (String, String, f64) {
    (link.origin.clone(), link.destination.clone(), link.efficiency)
}

/// NetworkStatistics
///
/// Distance, fare, efficiency and connectivity figures of a network.
/// Links joining the same pair of places are counted once, except in
/// `degree` which counts every link.
#[cfg_attr(feature = "stubgen", pyo3_stub_gen::derive::gen_stub_pyclass)]
#[pyclass(name = "NetworkStatistics", frozen)]
pub struct PyNetworkStatistics {
    inner: NetworkStatistics,
}

impl From<NetworkStatistics> for PyNetworkStatistics {
    fn from(inner: NetworkStatistics) -> Self {
        Self { inner }
    }
}

#[cfg_attr(feature = "stubgen", pyo3_stub_gen::derive::gen_stub_pymethods)]
#[pymethods]
impl PyNetworkStatistics {
    #[getter]
    fn node_count(&self) -> usize {
        self.inner.node_count
    }

    #[getter]
    fn edge_count(&self) -> usize {
        self.inner.edge_count
    }

    /// `(min, max, mean, sum)` of link distances, None without links
    #[getter]
    fn distance_stats(&self) -> Option<(f64, f64, f64, f64)> {
        self.inner.distance.map(summary_tuple)
    }

    /// `(min, max, mean, sum)` of link fares, None without links
    #[getter]
    fn fare_stats(&self) -> Option<(f64, f64, f64, f64)> {
        self.inner.fare.map(summary_tuple)
    }

    /// `(min, max, mean)` fare per kilometre over links of non-zero distance
    #[getter]
    fn efficiency_stats(&self) -> Option<(f64, f64, f64)> {
        self.inner
            .efficiency
            .map(|summary| (summary.min, summary.max, summary.mean))
    }

    #[getter]
    fn total_distance(&self) -> Option<f64> {
        self.inner.distance.map(|summary| summary.sum)
    }

    #[getter]
    fn avg_distance(&self) -> Option<f64> {
        self.inner.distance.map(|summary| summary.mean)
    }

    #[getter]
    fn total_fare(&self) -> Option<f64> {
        self.inner.fare.map(|summary| summary.sum)
    }

    #[getter]
    fn avg_fare(&self) -> Option<f64> {
        self.inner.fare.map(|summary| summary.mean)
    }

    /// Number of links per place
    #[getter]
    fn degree(&self) -> BTreeMap<String, usize> {
        self.inner.degree.clone()
    }

    /// `(origin, destination, fare per km)` of the cheapest links per km
    #[pyo3(signature = (n = 3))]
    fn most_efficient(&self, n: usize) -> Vec<(String, String, f64)> {
        self.inner
            .most_efficient(n)
            .iter()
            .map(efficiency_tuple)
            .collect()
    }

    /// `(origin, destination, fare per km)` of the dearest links per km
    #[pyo3(signature = (n = 3))]
    fn least_efficient(&self, n: usize) -> Vec<(String, String, f64)> {
        self.inner
            .least_efficient(n)
            .into_iter()
            .map(efficiency_tuple)
            .collect()
    }

    #[pyo3(signature = (n = 3))]
    fn most_connected(&self, n: usize) -> Vec<(String, usize)> {
        self.inner
            .most_connected(n)
            .into_iter()
            .map(|(id, degree)| (id.to_string(), degree))
            .collect()
    }

    /// Plain text analysis report
    fn report(&self) -> String {
        self.inner.to_string()
    }

    fn __repr__(&self) -> String {
        format!(
            "NetworkStatistics(node_count={}, edge_count={})",
            self.inner.node_count, self.inner.edge_count
        )
    }

    fn __str__(&self) -> String {
        self.report()
    }
}
