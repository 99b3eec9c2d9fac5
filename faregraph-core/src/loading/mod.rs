//! This module is responsible for reading and writing network data (CSV, JSON)
//! and exporting it for map display (GeoJSON).

mod builder;
mod config;
pub mod csv_codec;
pub mod geojson_codec;
pub mod json_codec;
pub mod schema;

pub use builder::create_network;
pub use config::{DataFormat, NetworkConfig};
pub use csv_codec::{export_csv, import_csv, read_csv, write_csv};
pub use json_codec::{ExportMetadata, NetworkDocument, export_json, import_json, read_json, write_json};
