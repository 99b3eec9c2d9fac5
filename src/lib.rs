use pyo3::prelude::*;

use matrix::cost_matrix;
use model::{PyTransportNetwork, load_network};
use routing::{PyRoute, PyRouteLeg, PyRouteReport, find_route};
use statistics::PyNetworkStatistics;

pub mod error;
pub mod matrix;
pub mod model;
pub mod routing;
pub mod statistics;

/// A Python module implemented in Rust.
#[pymodule]
fn faregraph(m: &Bound<'_, PyModule>) -> PyResult<()> {
    pyo3_log::init();

    m.add_class::<PyTransportNetwork>()?;
    m.add_function(wrap_pyfunction!(load_network, m)?)?;

    m.add_class::<PyRoute>()?;
    m.add_class::<PyRouteLeg>()?;
    m.add_class::<PyRouteReport>()?;
    m.add_function(wrap_pyfunction!(find_route, m)?)?;

    m.add_function(wrap_pyfunction!(cost_matrix, m)?)?;

    m.add_class::<PyNetworkStatistics>()?;
    Ok(())
}

#[cfg(feature = "stubgen")]
pyo3_stub_gen::define_stub_info_gatherer!(stub_info);
