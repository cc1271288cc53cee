use crate::{ExtractedRecord, SourceFormat};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Core trait that all extractors must implement
pub trait Extractor {
    /// Extract key/value pairs from an in-memory source text
    fn extract(&self, text: &str) -> ExtractionReport;

    /// Which textual convention does this extractor scan for?
    fn format(&self) -> SourceFormat;

    /// Get extractor version for tracking
    fn version(&self) -> String {
        "1.0.0".to_string()
    }
}

/// Extraction error types
///
/// Malformed input is never an error: it shows up as
/// [`ExtractionStatus::NothingRecognized`] or [`ExtractionStatus::Failed`].
#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("File does not exist: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read {}: {message}", .path.display())]
    ReadError { path: PathBuf, message: String },

    #[error("Failed to write {}: {message}", .path.display())]
    WriteError { path: PathBuf, message: String },

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid pattern: {0}")]
    InvalidPattern(String),
}

/// Outcome of a single extraction call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "kebab-case")]
pub enum ExtractionStatus {
    /// At least one pair was recognized
    Parsed,
    /// No pattern matched anywhere in the input
    NothingRecognized,
    /// Scanning stopped early; the report carries the partial record
    Failed { message: String },
}

impl ExtractionStatus {
    pub fn is_failed(&self) -> bool {
        matches!(self, ExtractionStatus::Failed { .. })
    }
}

/// Result from an extraction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionReport {
    pub format: SourceFormat,
    pub record: ExtractedRecord,
    pub status: ExtractionStatus,

    // Provenance
    pub extracted_at: i64,
    pub extractor_version: String,
}

impl ExtractionReport {
    /// Build a report whose status follows from the record contents
    pub fn completed(format: SourceFormat, record: ExtractedRecord, version: String) -> Self {
        let status = if record.is_empty() {
            ExtractionStatus::NothingRecognized
        } else {
            ExtractionStatus::Parsed
        };
        Self::with_status(format, record, status, version)
    }

    /// Build a report for a scan that stopped early
    pub fn failed(
        format: SourceFormat,
        partial: ExtractedRecord,
        message: impl Into<String>,
        version: String,
    ) -> Self {
        Self::with_status(
            format,
            partial,
            ExtractionStatus::Failed {
                message: message.into(),
            },
            version,
        )
    }

    fn with_status(
        format: SourceFormat,
        record: ExtractedRecord,
        status: ExtractionStatus,
        extractor_version: String,
    ) -> Self {
        Self {
            format,
            record,
            status,
            extracted_at: chrono::Utc::now().timestamp(),
            extractor_version,
        }
    }
}
