use faregraph_core::Error;
use pyo3::PyErr;
use pyo3::exceptions::{PyIOError, PyKeyError, PyValueError};

/// Maps a core error onto the closest Python exception
pub(crate) fn to_py_err(error: Error) -> PyErr {
    match error {
        Error::NodeNotFound(id) => PyErr::new::<PyKeyError, _>(format!("Unknown place: {id}")),
        Error::IoError(e) => PyErr::new::<PyIOError, _>(e.to_string()),
        other => PyErr::new::<PyValueError, _>(other.to_string()),
    }
}

pub(crate) fn parse_metric(metric: &str) -> Result<faregraph_core::Metric, PyErr> {
    metric.parse().map_err(to_py_err)
}
