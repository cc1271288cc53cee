use super::log_outcome;
use shared_types::{ExtractedRecord, ExtractionReport, Extractor, SourceFormat};

/// Two-column `key,value` lines. Everything after the first delimiter is
/// the value, so values may contain the delimiter but keys may not.
pub struct CsvExtractor {
    delimiter: char,
}

impl CsvExtractor {
    pub fn new(delimiter: char) -> Self {
        Self { delimiter }
    }

    pub fn extract_pairs(&self, text: &str) -> ExtractedRecord {
        text.lines()
            .filter(|line| !line.is_empty())
            .filter_map(|line| line.split_once(self.delimiter))
            .collect()
    }
}

impl Default for CsvExtractor {
    fn default() -> Self {
        Self::new(',')
    }
}

impl Extractor for CsvExtractor {
    fn extract(&self, text: &str) -> ExtractionReport {
        let report =
            ExtractionReport::completed(self.format(), self.extract_pairs(text), self.version());
        log_outcome(&report);
        report
    }

    fn format(&self) -> SourceFormat {
        SourceFormat::Csv
    }

    fn version(&self) -> String {
        env!("CARGO_PKG_VERSION").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skips_blank_and_single_field_lines() {
        let extractor = CsvExtractor::default();
        let record = extractor.extract_pairs("k1,v1\nk2,v2,extra\n\nbadline");

        assert_eq!(record.len(), 2);
        assert_eq!(record.get("k1"), Some("v1"));
        assert_eq!(record.get("k2"), Some("v2,extra"));
        assert!(!record.contains_key("badline"));
    }

    #[test]
    fn test_duplicate_keys_last_wins() {
        let extractor = CsvExtractor::default();
        let record = extractor.extract_pairs("k,v1\nk,v2");

        assert_eq!(record.len(), 1);
        assert_eq!(record.get("k"), Some("v2"));
    }

    #[test]
    fn test_crlf_and_untrimmed_fields() {
        let extractor = CsvExtractor::default();
        let record = extractor.extract_pairs("host, example.com\r\nport,8080\r\n");

        assert_eq!(record.get("host"), Some(" example.com"));
        assert_eq!(record.get("port"), Some("8080"));
    }

    #[test]
    fn test_quotes_are_not_interpreted() {
        let extractor = CsvExtractor::default();
        let record = extractor.extract_pairs("\"greeting\",\"hello, world\"");

        assert_eq!(record.get("\"greeting\""), Some("\"hello, world\""));
    }

    #[test]
    fn test_custom_delimiter() {
        let extractor = CsvExtractor::new(';');
        let record = extractor.extract_pairs("a;1;2\nb,2");

        assert_eq!(record.get("a"), Some("1;2"));
        assert!(!record.contains_key("b,2"));
        assert_eq!(record.len(), 1);
    }

    #[test]
    fn test_empty_input() {
        let extractor = CsvExtractor::default();

        assert!(extractor.extract_pairs("").is_empty());
        assert!(extractor.extract_pairs("\n\n\n").is_empty());
    }
}
