//! JSON import and export of network links

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use chrono::{DateTime, Utc};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::schema::{Field, check_weight, parse_weight};
use crate::model::LinkRecord;
use crate::{Error, TransportGraph};

/// Descriptive header of an exported network
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub description: String,
    pub node_count: usize,
    pub edge_count: usize,
    pub exported_at: DateTime<Utc>,
}

/// Exported network document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkDocument {
    pub metadata: ExportMetadata,
    pub routes: Vec<LinkRecord>,
}

impl NetworkDocument {
    /// Snapshot of the deduplicated links of `graph`
    pub fn new(graph: &TransportGraph, exported_at: DateTime<Utc>) -> Self {
        let routes = graph.unique_links();
        Self {
            metadata: ExportMetadata {
                description: "Transportation network routes".to_string(),
                node_count: graph.node_count(),
                edge_count: routes.len(),
                exported_at,
            },
            routes,
        }
    }
}

/// Writes the network as a pretty-printed JSON document
///
/// # Errors
///
/// Returns an error if serialization or writing fails
pub fn write_json<W: Write>(graph: &TransportGraph, writer: W) -> Result<(), Error> {
    let document = NetworkDocument::new(graph, Utc::now());
    serde_json::to_writer_pretty(writer, &document)?;
    Ok(())
}

/// Builds a new network from a JSON document.
///
/// The top level may be an object with a `routes` array, an object with an
/// `edges` array, or a bare array of link records.
///
/// # Errors
///
/// [`Error::InvalidData`] for any other top level shape and
/// [`Error::MalformedRecord`] for a record with missing or invalid fields
pub fn read_json<R: Read>(reader: R) -> Result<TransportGraph, Error> {
    let value: Value = serde_json::from_reader(reader)?;
    graph_from_value(&value)
}

fn graph_from_value(value: &Value) -> Result<TransportGraph, Error> {
    let records = link_records(value)?;
    let mut graph = TransportGraph::new();

    for (idx, record) in records.iter().enumerate() {
        let number = idx + 1;
        let Value::Object(fields) = record else {
            return Err(Error::MalformedRecord {
                record: number,
                reason: "expected an object".to_string(),
            });
        };

        let origin = text_field(fields, Field::Origin, number)?;
        let destination = text_field(fields, Field::Destination, number)?;
        if origin.trim().is_empty() || destination.trim().is_empty() {
            warn!("Skipping JSON record {number}: blank origin or destination");
            continue;
        }

        let distance = weight_field(fields, Field::Distance, number)?;
        let fare = weight_field(fields, Field::Fare, number)?;
        graph.add_edge(origin, destination, distance, fare);
    }

    Ok(graph)
}

fn link_records(value: &Value) -> Result<&Vec<Value>, Error> {
    match value {
        Value::Array(records) => Ok(records),
        Value::Object(map) => {
            let (key, records) = ["routes", "edges"]
                .into_iter()
                .find_map(|key| map.get(key).map(|records| (key, records)))
                .ok_or_else(|| {
                    Error::InvalidData("expected a 'routes' or 'edges' array".to_string())
                })?;
            match records {
                Value::Array(records) => Ok(records),
                _ => Err(Error::InvalidData(format!("'{key}' must be an array"))),
            }
        }
        _ => Err(Error::InvalidData(
            "expected an object or an array of routes".to_string(),
        )),
    }
}

fn lookup<'a>(fields: &'a Map<String, Value>, field: Field) -> Option<&'a Value> {
    field
        .aliases()
        .iter()
        .find_map(|alias| fields.get(*alias))
}

fn text_field<'a>(
    fields: &'a Map<String, Value>,
    field: Field,
    record: usize,
) -> Result<&'a str, Error> {
    match lookup(fields, field) {
        Some(Value::String(text)) => Ok(text.as_str()),
        Some(other) => Err(Error::MalformedRecord {
            record,
            reason: format!("{} must be a string, got {other}", field.name()),
        }),
        None => Err(Error::MalformedRecord {
            record,
            reason: format!("missing {}", field.name()),
        }),
    }
}

fn weight_field(fields: &Map<String, Value>, field: Field, record: usize) -> Result<f64, Error> {
    match lookup(fields, field) {
        Some(Value::Number(number)) => {
            let value = number.as_f64().ok_or_else(|| Error::MalformedRecord {
                record,
                reason: format!("{} value {number} is out of range", field.name()),
            })?;
            check_weight(value, field, record)
        }
        Some(Value::String(text)) => parse_weight(text, field, record),
        Some(other) => Err(Error::MalformedRecord {
            record,
            reason: format!("{} must be a number, got {other}", field.name()),
        }),
        None => Err(Error::MalformedRecord {
            record,
            reason: format!("missing {}", field.name()),
        }),
    }
}

/// Exports the network to a JSON file
///
/// # Errors
///
/// Returns an error if the file cannot be created or written
pub fn export_json(graph: &TransportGraph, path: &Path) -> Result<(), Error> {
    let file = File::create(path).map_err(|e| {
        std::io::Error::new(
            e.kind(),
            format!("Failed to create file '{}': {}", path.display(), e),
        )
    })?;
    let mut writer = BufWriter::new(file);
    write_json(graph, &mut writer)?;
    writer.flush()?;
    info!("Exported network to {}", path.display());
    Ok(())
}

/// Reads a network from a JSON file
///
/// # Errors
///
/// Returns an error if the file cannot be opened or parsed
pub fn import_json(path: &Path) -> Result<TransportGraph, Error> {
    let file = File::open(path).map_err(|e| {
        std::io::Error::new(
            e.kind(),
            format!("Failed to open file '{}': {}", path.display(), e),
        )
    })?;
    let graph = read_json(BufReader::new(file))?;
    info!(
        "Imported {} places and {} links from {}",
        graph.node_count(),
        graph.link_count(),
        path.display()
    );
    Ok(graph)
}

impl TransportGraph {
    /// See [`export_json`]
    pub fn export_json(&self, path: &Path) -> Result<(), Error> {
        export_json(self, path)
    }

    /// Replaces this network with the content of a JSON file.
    ///
    /// On error the network is left untouched.
    pub fn import_json(&mut self, path: &Path) -> Result<(), Error> {
        *self = import_json(path)?;
        Ok(())
    }
}
