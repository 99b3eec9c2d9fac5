use log::info;

use super::config::{DataFormat, NetworkConfig};
use super::{csv_codec, json_codec};
use crate::{Error, TransportGraph};

/// Creates a transport network from the file named in the configuration
///
/// # Errors
///
/// Returns an error if the file is missing, its format is unknown, or its
/// content cannot be parsed
pub fn create_network(config: &NetworkConfig) -> Result<TransportGraph, Error> {
    let format = validate_config(config)?;

    info!(
        "Loading transport network ({format:?}): {}",
        config.data_path.display()
    );

    let graph = match format {
        DataFormat::Csv => csv_codec::import_csv(&config.data_path)?,
        DataFormat::Json => json_codec::import_json(&config.data_path)?,
    };

    info!(
        "Transport network loaded: {} places, {} links",
        graph.node_count(),
        graph.link_count()
    );
    Ok(graph)
}

fn validate_config(config: &NetworkConfig) -> Result<DataFormat, Error> {
    if !config.data_path.is_file() {
        return Err(Error::IoError(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("Network file not found: {}", config.data_path.display()),
        )));
    }

    config.resolved_format()
}
