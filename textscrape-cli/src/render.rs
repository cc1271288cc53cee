use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use shared_types::{ExtractionReport, ExtractionStatus};
use std::path::PathBuf;

/// How extracted records are printed to stdout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

/// One input file and what was extracted from it
#[derive(Debug, Clone, Serialize)]
pub struct SourceReport {
    pub path: PathBuf,
    #[serde(flatten)]
    pub report: ExtractionReport,
}

pub fn render(format: OutputFormat, reports: &[SourceReport]) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(reports)),
        OutputFormat::Json => {
            let mut out =
                serde_json::to_string_pretty(reports).context("Failed to serialize reports")?;
            out.push('\n');
            Ok(out)
        }
        OutputFormat::Csv => render_csv(reports),
    }
}

fn render_text(reports: &[SourceReport]) -> String {
    let mut out = String::new();

    for source in reports {
        out.push_str(&format!(
            "==> {} ({}) <==\n",
            source.path.display(),
            source.report.format
        ));
        out.push_str(&extractors::render_report(&source.report));

        match &source.report.status {
            ExtractionStatus::NothingRecognized => out.push_str("(nothing recognized)\n"),
            ExtractionStatus::Failed { message } => {
                out.push_str(&format!("(stopped early: {})\n", message))
            }
            ExtractionStatus::Parsed => {}
        }
    }

    out
}

fn render_csv(reports: &[SourceReport]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["file", "format", "key", "value"])?;

    for source in reports {
        let file = source.path.display().to_string();
        for (key, value) in source.report.record.iter() {
            writer.write_record([file.as_str(), source.report.format.as_str(), key, value])?;
        }
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("Failed to flush CSV output: {}", e))?;
    String::from_utf8(bytes).context("CSV output is not valid UTF-8")
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::{ExtractedRecord, SourceFormat};

    fn sample_reports() -> Vec<SourceReport> {
        let csv_record: ExtractedRecord = [("notes", "tea, coffee"), ("name", "Carol")]
            .into_iter()
            .collect();

        vec![
            SourceReport {
                path: PathBuf::from("people.csv"),
                report: ExtractionReport::completed(
                    SourceFormat::Csv,
                    csv_record,
                    "0.1.0".to_string(),
                ),
            },
            SourceReport {
                path: PathBuf::from("empty.xml"),
                report: ExtractionReport::completed(
                    SourceFormat::Xml,
                    ExtractedRecord::new(),
                    "0.1.0".to_string(),
                ),
            },
        ]
    }

    #[test]
    fn test_render_text() {
        let out = render(OutputFormat::Text, &sample_reports()).unwrap();

        assert_eq!(
            out,
            "==> people.csv (csv) <==\n\
             Key: name, Value: Carol\n\
             Key: notes, Value: tea, coffee\n\
             ==> empty.xml (xml) <==\n\
             (nothing recognized)\n"
        );
    }

    #[test]
    fn test_render_csv_quotes_values() {
        let out = render(OutputFormat::Csv, &sample_reports()).unwrap();

        assert_eq!(
            out,
            "file,format,key,value\n\
             people.csv,csv,name,Carol\n\
             people.csv,csv,notes,\"tea, coffee\"\n"
        );
    }

    #[test]
    fn test_render_json() {
        let out = render(OutputFormat::Json, &sample_reports()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value[0]["path"], "people.csv");
        assert_eq!(value[0]["format"], "csv");
        assert_eq!(value[0]["record"]["notes"], "tea, coffee");
        assert_eq!(value[0]["status"]["type"], "parsed");
        assert_eq!(value[1]["status"]["type"], "nothing-recognized");
    }

    #[test]
    fn test_render_failed_text() {
        let mut record = ExtractedRecord::new();
        record.insert("a", "1");
        let reports = vec![SourceReport {
            path: PathBuf::from("broken.xml"),
            report: ExtractionReport::failed(
                SourceFormat::Xml,
                record,
                "invalid utf-8",
                "0.1.0".to_string(),
            ),
        }];

        let out = render(OutputFormat::Text, &reports).unwrap();
        assert!(out.ends_with("Tag: a, Value: 1\n(stopped early: invalid utf-8)\n"));
    }
}
