use extractors::{read_source, read_source_bytes, render_summary, StructuredTextExtractor};
use shared_types::{ExtractionError, ExtractionStatus, SourceFormat};
use std::fs;
use tempfile::TempDir;

const PEOPLE_JSON: &str = r#"{
  "name": "Alice",
  "age": 30,
  "active": true
}
"#;

const PEOPLE_XML: &str = r#"<?xml version="1.0"?>
<person>
  <name>Bob</name>
  <age>41</age>
</person>
"#;

const PEOPLE_CSV: &str = "name,Carol\nage,27\n\nnotes,likes tea, coffee\n";

#[test]
fn test_extract_from_files() {
    let dir = TempDir::new().unwrap();
    let files = [
        ("people.json", PEOPLE_JSON),
        ("people.xml", PEOPLE_XML),
        ("people.csv", PEOPLE_CSV),
    ];
    for (name, content) in files {
        fs::write(dir.path().join(name), content).unwrap();
    }

    let extractor = StructuredTextExtractor::with_defaults().unwrap();
    let mut reports = Vec::new();

    for (name, _) in files {
        let path = dir.path().join(name);
        let format = SourceFormat::from_path(&path).unwrap();
        let text = read_source(&path).unwrap();
        reports.push(extractor.extract(format, &text));
    }

    assert!(reports.iter().all(|r| r.status == ExtractionStatus::Parsed));

    let json = &reports[0].record;
    assert_eq!(json.get("name"), Some("\"Alice\""));
    assert_eq!(json.get("age"), Some("30"));
    assert_eq!(json.get("active"), Some("true"));

    let xml = &reports[1].record;
    assert_eq!(xml.get("name"), Some("Bob"));
    assert_eq!(xml.get("age"), Some("41"));
    assert!(!xml.contains_key("person"));

    let csv = &reports[2].record;
    assert_eq!(csv.get("name"), Some("Carol"));
    assert_eq!(csv.get("notes"), Some("likes tea, coffee"));

    let summary = render_summary(&reports);
    assert!(summary.starts_with("Parsed JSON Data:\nKey: active, Value: true\n"));
    assert!(summary.contains("Parsed XML Data:\nTag: age, Value: 41\nTag: name, Value: Bob\n"));
}

#[test]
fn test_missing_source_is_upstream_failure() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.json");

    assert!(matches!(
        read_source(&path),
        Err(ExtractionError::NotFound(_))
    ));
}

#[test]
fn test_binary_source_reports_partial_record() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.xml");
    let mut content = b"<a>1</a>".to_vec();
    content.push(0xc3);
    content.extend_from_slice(b"<b>2</b>");
    fs::write(&path, &content).unwrap();

    let extractor = StructuredTextExtractor::with_defaults().unwrap();
    let bytes = read_source_bytes(&path).unwrap();
    let report = extractor.extract_bytes(SourceFormat::Xml, &bytes);

    assert!(report.status.is_failed());
    assert_eq!(report.record.get("a"), Some("1"));
    assert!(!report.record.contains_key("b"));
}
