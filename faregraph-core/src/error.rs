use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Node not found: {0}")]
    NodeNotFound(String),
    #[error("No link between {from} and {to}")]
    MissingLink { from: String, to: String },
    #[error("Malformed record {record}: {reason}")]
    MalformedRecord { record: usize, reason: String },
    #[error("Missing column for {field} (available columns: {available})")]
    MissingColumn { field: &'static str, available: String },
    #[error("Unsupported data format: {0}")]
    UnsupportedFormat(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("GeoJSON error: {0}")]
    GeoJsonError(String),
}
