//! CSV import and export of network links

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use log::{info, warn};

use super::schema::{CSV_HEADER, Columns, Field, parse_weight};
use crate::{Error, TransportGraph};

/// Writes one row per deduplicated link, sorted by origin then destination
///
/// # Errors
///
/// Returns an error if writing fails
pub fn write_csv<W: Write>(graph: &TransportGraph, writer: W) -> Result<(), Error> {
    let mut writer = csv::Writer::from_writer(writer);
    writer.write_record(CSV_HEADER)?;
    for link in graph.unique_links() {
        let distance = link.distance.to_string();
        let fare = link.fare.to_string();
        writer.write_record([
            link.origin.as_str(),
            link.destination.as_str(),
            distance.as_str(),
            fare.as_str(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

/// Builds a new network from CSV rows.
///
/// Place names are kept as written. Rows whose origin or destination is
/// blank are skipped.
///
/// # Errors
///
/// [`Error::MissingColumn`] if a required column is absent and
/// [`Error::MalformedRecord`] for a row that is too short or has an invalid
/// weight
pub fn read_csv<R: Read>(reader: R) -> Result<TransportGraph, Error> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .flexible(true)
        .from_reader(reader);

    let columns = Columns::resolve(reader.headers()?)?;
    let mut graph = TransportGraph::new();

    for (idx, record) in reader.records().enumerate() {
        let record = record?;
        let row = idx + 1;

        let origin = required_field(&record, columns.origin, Field::Origin, row)?;
        let destination = required_field(&record, columns.destination, Field::Destination, row)?;
        if origin.trim().is_empty() || destination.trim().is_empty() {
            warn!("Skipping CSV row {row}: blank origin or destination");
            continue;
        }

        let distance = parse_weight(
            record.get(columns.distance).unwrap_or_default(),
            Field::Distance,
            row,
        )?;
        let fare = parse_weight(
            record.get(columns.fare).unwrap_or_default(),
            Field::Fare,
            row,
        )?;
        graph.add_edge(origin, destination, distance, fare);
    }

    Ok(graph)
}

fn required_field<'r>(
    record: &'r csv::StringRecord,
    column: usize,
    field: Field,
    row: usize,
) -> Result<&'r str, Error> {
    record.get(column).ok_or_else(|| Error::MalformedRecord {
        record: row,
        reason: format!("missing {}", field.name()),
    })
}

/// Exports the network to a CSV file
///
/// # Errors
///
/// Returns an error if the file cannot be created or written
pub fn export_csv(graph: &TransportGraph, path: &Path) -> Result<(), Error> {
    let file = File::create(path).map_err(|e| {
        std::io::Error::new(
            e.kind(),
            format!("Failed to create file '{}': {}", path.display(), e),
        )
    })?;
    write_csv(graph, file)?;
    info!("Exported {} links to {}", graph.unique_links().len(), path.display());
    Ok(())
}

/// Reads a network from a CSV file
///
/// # Errors
///
/// Returns an error if the file cannot be opened or parsed
pub fn import_csv(path: &Path) -> Result<TransportGraph, Error> {
    let file = File::open(path).map_err(|e| {
        std::io::Error::new(
            e.kind(),
            format!("Failed to open file '{}': {}", path.display(), e),
        )
    })?;
    let graph = read_csv(file)?;
    info!(
        "Imported {} places and {} links from {}",
        graph.node_count(),
        graph.link_count(),
        path.display()
    );
    Ok(graph)
}

impl TransportGraph {
    /// See [`export_csv`]
    pub fn export_csv(&self, path: &Path) -> Result<(), Error> {
        export_csv(self, path)
    }

    /// Replaces this network with the content of a CSV file.
    ///
    /// On error the network is left untouched.
    pub fn import_csv(&mut self, path: &Path) -> Result<(), Error> {
        *self = import_csv(path)?;
        Ok(())
    }
}
