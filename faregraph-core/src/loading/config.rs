use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

/// Supported network data formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataFormat {
    Csv,
    Json,
}

impl DataFormat {
    /// Guesses the format from a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "csv" => Some(DataFormat::Csv),
            "json" => Some(DataFormat::Json),
            _ => None,
        }
    }
}

impl FromStr for DataFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(DataFormat::Csv),
            "json" => Ok(DataFormat::Json),
            other => Err(Error::UnsupportedFormat(other.to_string())),
        }
    }
}

/// Configuration for loading a transport network from disk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// File with the network links
    pub data_path: PathBuf,
    /// Explicit format, guessed from the extension when `None`
    #[serde(default)]
    pub format: Option<DataFormat>,
}

impl NetworkConfig {
    pub fn new(data_path: impl Into<PathBuf>) -> Self {
        Self {
            data_path: data_path.into(),
            format: None,
        }
    }

    #[must_use]
    pub fn with_format(mut self, format: DataFormat) -> Self {
        self.format = Some(format);
        self
    }

    /// Format to use for `data_path`
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedFormat`] if no format was set and the
    /// extension is not recognised
    pub fn resolved_format(&self) -> Result<DataFormat, Error> {
        self.format
            .or_else(|| DataFormat::from_path(&self.data_path))
            .ok_or_else(|| Error::UnsupportedFormat(self.data_path.display().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_is_guessed_from_extension() {
        assert_eq!(
            NetworkConfig::new("routes.CSV").resolved_format().unwrap(),
            DataFormat::Csv
        );
        assert_eq!(
            NetworkConfig::new("data/network.json")
                .resolved_format()
                .unwrap(),
            DataFormat::Json
        );
    }

    #[test]
    fn explicit_format_wins() {
        let config = NetworkConfig::new("routes.txt").with_format(DataFormat::Csv);
        assert_eq!(config.resolved_format().unwrap(), DataFormat::Csv);
    }

    #[test]
    fn format_names_parse_case_insensitively() {
        assert_eq!("JSON".parse::<DataFormat>().unwrap(), DataFormat::Json);
        assert_eq!(" csv".parse::<DataFormat>().unwrap(), DataFormat::Csv);
        assert!(matches!(
            "xml".parse::<DataFormat>(),
            Err(Error::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let err = NetworkConfig::new("routes.xlsx").resolved_format();
        assert!(matches!(err, Err(Error::UnsupportedFormat(_))));
    }
}
