mod csv_lines;
mod json;
mod xml;

pub use csv_lines::CsvExtractor;
pub use json::JsonExtractor;
pub use xml::XmlExtractor;

use serde::{Deserialize, Serialize};
use shared_types::{
    ExtractedRecord, ExtractionError, ExtractionReport, ExtractionStatus, Extractor, SourceFormat,
};

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Separator between key and value in CSV mode
    pub csv_delimiter: char,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self { csv_delimiter: ',' }
    }
}

/// Flat key/value scanner for JSON-like, XML-like and two-column CSV text.
///
/// Holds only compiled patterns, so one instance can serve any number of
/// calls; nothing carries over from one call to the next.
pub struct StructuredTextExtractor {
    json: JsonExtractor,
    xml: XmlExtractor,
    csv: CsvExtractor,
}

impl StructuredTextExtractor {
    pub fn new(config: ExtractorConfig) -> Result<Self, ExtractionError> {
        if matches!(config.csv_delimiter, '\n' | '\r') {
            return Err(ExtractionError::InvalidPattern(
                "CSV delimiter cannot be a line break".to_string(),
            ));
        }

        Ok(Self {
            json: JsonExtractor::new()?,
            xml: XmlExtractor::new()?,
            csv: CsvExtractor::new(config.csv_delimiter),
        })
    }

    pub fn with_defaults() -> Result<Self, ExtractionError> {
        Self::new(ExtractorConfig::default())
    }

    pub fn extract_json(&self, text: &str) -> ExtractedRecord {
        self.json.extract_pairs(text)
    }

    pub fn extract_xml(&self, text: &str) -> ExtractedRecord {
        self.xml.extract_pairs(text)
    }

    pub fn extract_csv(&self, text: &str) -> ExtractedRecord {
        self.csv.extract_pairs(text)
    }

    /// Run the rule for `format` and log one diagnostic line
    pub fn extract(&self, format: SourceFormat, text: &str) -> ExtractionReport {
        self.extractor_for(format).extract(text)
    }

    /// Like [`extract`](Self::extract) but decodes UTF-8 first. Invalid
    /// input still yields the pairs found in the valid prefix, reported as
    /// a failed scan.
    pub fn extract_bytes(&self, format: SourceFormat, bytes: &[u8]) -> ExtractionReport {
        match std::str::from_utf8(bytes) {
            Ok(text) => self.extract(format, text),
            Err(e) => {
                let prefix = std::str::from_utf8(&bytes[..e.valid_up_to()]).unwrap_or_default();
                let partial = self.extract_record(format, prefix);
                let version = self.extractor_for(format).version();

                let report = ExtractionReport::failed(format, partial, e.to_string(), version);
                log_outcome(&report);
                report
            }
        }
    }

    fn extract_record(&self, format: SourceFormat, text: &str) -> ExtractedRecord {
        match format {
            SourceFormat::Json => self.extract_json(text),
            SourceFormat::Xml => self.extract_xml(text),
            SourceFormat::Csv => self.extract_csv(text),
        }
    }

    fn extractor_for(&self, format: SourceFormat) -> &dyn Extractor {
        match format {
            SourceFormat::Json => &self.json,
            SourceFormat::Xml => &self.xml,
            SourceFormat::Csv => &self.csv,
        }
    }
}

pub(crate) fn log_outcome(report: &ExtractionReport) {
    match &report.status {
        ExtractionStatus::Failed { message } => {
            tracing::warn!("Error parsing {}: {}", report.format.operation(), message);
        }
        ExtractionStatus::Parsed | ExtractionStatus::NothingRecognized => {
            tracing::info!("{} parsed successfully", report.format.operation());
            tracing::debug!(
                "{} extraction found {} pairs",
                report.format.operation(),
                report.record.len()
            );
        }
    }
}
