use super::log_outcome;
use regex::Regex;
use shared_types::{
    ExtractedRecord, ExtractionError, ExtractionReport, Extractor, SourceFormat,
};

/// Opening tag, plain-text body, closing tag. The regex crate has no
/// back-references, so matching names are enforced in `extract_pairs`.
const XML_ELEMENT_PATTERN: &str = r"<([^>]+)>([^<]*)</([^>]+)>";

pub struct XmlExtractor {
    pattern: Regex,
}

impl XmlExtractor {
    pub fn new() -> Result<Self, ExtractionError> {
        let pattern = Regex::new(XML_ELEMENT_PATTERN)
            .map_err(|e| ExtractionError::InvalidPattern(e.to_string()))?;
        Ok(Self { pattern })
    }

    /// Elements whose body contains markup are skipped; only the innermost
    /// plain-text element is captured.
    pub fn extract_pairs(&self, text: &str) -> ExtractedRecord {
        let mut record = ExtractedRecord::new();
        let mut cursor = 0;

        // Every start position has at most one candidate match, so on a
        // name mismatch it is enough to retry one byte further on.
        while let Some(caps) = self.pattern.captures_at(text, cursor) {
            let (Some(element), Some(open), Some(value), Some(close)) =
                (caps.get(0), caps.get(1), caps.get(2), caps.get(3))
            else {
                break;
            };

            if open.as_str() == close.as_str() {
                record.insert(open.as_str(), value.as_str());
                cursor = element.end();
            } else {
                // '<' is a single byte, so this stays on a char boundary
                cursor = element.start() + 1;
            }
        }

        record
    }
}

impl Extractor for XmlExtractor {
    fn extract(&self, text: &str) -> ExtractionReport {
        let report =
            ExtractionReport::completed(self.format(), self.extract_pairs(text), self.version());
        log_outcome(&report);
        report
    }

    fn format(&self) -> SourceFormat {
        SourceFormat::Xml
    }

    fn version(&self) -> String {
        env!("CARGO_PKG_VERSION").to_string()
    }
}
