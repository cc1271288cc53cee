use crate::ExtractionError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Textual convention an extractor scans for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceFormat {
    Json,
    Xml,
    Csv,
}

impl SourceFormat {
    pub const ALL: [SourceFormat; 3] = [SourceFormat::Json, SourceFormat::Xml, SourceFormat::Csv];

    /// Upper-case name used in log lines and summary headers
    pub fn operation(&self) -> &'static str {
        match self {
            SourceFormat::Json => "JSON",
            SourceFormat::Xml => "XML",
            SourceFormat::Csv => "CSV",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SourceFormat::Json => "json",
            SourceFormat::Xml => "xml",
            SourceFormat::Csv => "csv",
        }
    }

    /// Infer the format from a file extension
    pub fn from_path(path: &Path) -> Result<Self, ExtractionError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| ExtractionError::UnsupportedFormat(path.display().to_string()))?;

        extension.parse()
    }
}

impl FromStr for SourceFormat {
    type Err = ExtractionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(SourceFormat::Json),
            "xml" => Ok(SourceFormat::Xml),
            "csv" => Ok(SourceFormat::Csv),
            other => Err(ExtractionError::UnsupportedFormat(other.to_string())),
        }
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
