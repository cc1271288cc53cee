use super::log_outcome;
use regex::Regex;
use shared_types::{
    ExtractedRecord, ExtractionError, ExtractionReport, Extractor, SourceFormat,
};

/// `"key":` followed by the rest of the line up to the next comma.
/// Braces are not tracked, so nested objects come back as opaque text.
const JSON_PAIR_PATTERN: &str = r#""([^"]+)":[ \t]*([^,\r\n]*)"#;

pub struct JsonExtractor {
    pattern: Regex,
}

impl JsonExtractor {
    pub fn new() -> Result<Self, ExtractionError> {
        let pattern = Regex::new(JSON_PAIR_PATTERN)
            .map_err(|e| ExtractionError::InvalidPattern(e.to_string()))?;
        Ok(Self { pattern })
    }

    pub fn extract_pairs(&self, text: &str) -> ExtractedRecord {
        self.pattern
            .captures_iter(text)
            .filter_map(|caps| {
                let key = caps.get(1)?.as_str();
                let value = caps.get(2)?.as_str();
                Some((key, value))
            })
            .collect()
    }
}

impl Extractor for JsonExtractor {
    fn extract(&self, text: &str) -> ExtractionReport {
        let report =
            ExtractionReport::completed(self.format(), self.extract_pairs(text), self.version());
        log_outcome(&report);
        report
    }

    fn format(&self) -> SourceFormat {
        SourceFormat::Json
    }

    fn version(&self) -> String {
        env!("CARGO_PKG_VERSION").to_string()
    }
}
