//! Field name recognition shared by the CSV and JSON importers

use csv::StringRecord;

use crate::Error;

/// Header written by the exporters
pub const CSV_HEADER: [&str; 4] = ["Origin", "Destination", "Distance", "Fare"];

/// A required field of a link record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Origin,
    Destination,
    Distance,
    Fare,
}

impl Field {
    /// Accepted names, checked in priority order
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            Field::Origin => &["Origin", "origin", "From", "from", "Source", "source"],
            Field::Destination => &[
                "Destination",
                "destination",
                "To",
                "to",
                "Target",
                "target",
            ],
            Field::Distance => &["Distance", "distance", "Distance_km", "distance_km"],
            Field::Fare => &["Fare", "fare", "Fare_pesos", "fare_pesos"],
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Field::Origin => "origin",
            Field::Destination => "destination",
            Field::Distance => "distance",
            Field::Fare => "fare",
        }
    }
}

/// Column positions of the four link fields in a CSV header
#[derive(Debug, Clone, Copy)]
pub(crate) struct Columns {
    pub(crate) origin: usize,
    pub(crate) destination: usize,
    pub(crate) distance: usize,
    pub(crate) fare: usize,
}

impl Columns {
    pub(crate) fn resolve(headers: &StringRecord) -> Result<Self, Error> {
        Ok(Self {
            origin: resolve_column(headers, Field::Origin)?,
            destination: resolve_column(headers, Field::Destination)?,
            distance: resolve_column(headers, Field::Distance)?,
            fare: resolve_column(headers, Field::Fare)?,
        })
    }
}

fn resolve_column(headers: &StringRecord, field: Field) -> Result<usize, Error> {
    field
        .aliases()
        .iter()
        .find_map(|alias| headers.iter().position(|header| header == *alias))
        .ok_or_else(|| Error::MissingColumn {
            field: field.name(),
            available: headers.iter().collect::<Vec<_>>().join(", "),
        })
}

/// Parses a weight field, rejecting blanks, non-numbers and non-finite values
pub(crate) fn parse_weight(raw: &str, field: Field, record: usize) -> Result<f64, Error> {
    let value = raw
        .trim()
        .parse::<f64>()
        .map_err(|e| Error::MalformedRecord {
            record,
            reason: format!("{} value '{raw}' is not a number: {e}", field.name()),
        })?;
    check_weight(value, field, record)
}

pub(crate) fn check_weight(value: f64, field: Field, record: usize) -> Result<f64, Error> {
    if !value.is_finite() {
        return Err(Error::MalformedRecord {
            record,
            reason: format!("{} value {value} is not finite", field.name()),
        });
    }
    if value < 0.0 {
        log::warn!(
            "Record {record}: negative {} {value}, shortest paths may be wrong",
            field.name()
        );
    }
    Ok(value)
}
