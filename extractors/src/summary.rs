//! Combined output over many extraction reports.
//!
//! Reports are pure per-call values; this is the explicit step that folds
//! a list of them into one text block or file.

use shared_types::{ExtractionError, ExtractionReport, SourceFormat};
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

/// Section order in the rendered summary
const SECTION_ORDER: [SourceFormat; 3] = [SourceFormat::Json, SourceFormat::Csv, SourceFormat::Xml];

/// Label used for each key in the rendered lines
fn key_label(format: SourceFormat) -> &'static str {
    match format {
        SourceFormat::Xml => "Tag",
        SourceFormat::Json | SourceFormat::Csv => "Key",
    }
}

/// Render one `Key: k, Value: v` line per pair of a single report
pub fn render_report(report: &ExtractionReport) -> String {
    let label = key_label(report.format);
    let mut out = String::new();
    for (key, value) in report.record.iter() {
        let _ = writeln!(out, "{}: {}, Value: {}", label, key, value);
    }
    out
}

/// Render every report grouped by format, JSON then CSV then XML
pub fn render_summary(reports: &[ExtractionReport]) -> String {
    let mut out = String::new();

    for format in SECTION_ORDER {
        let _ = writeln!(out, "Parsed {} Data:", format.operation());
        for report in reports.iter().filter(|r| r.format == format) {
            out.push_str(&render_report(report));
        }
        out.push('\n');
    }

    out
}

pub fn write_summary(path: &Path, reports: &[ExtractionReport]) -> Result<(), ExtractionError> {
    fs::write(path, render_summary(reports)).map_err(|e| ExtractionError::WriteError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    tracing::info!("Data written to file successfully: {}", path.display());
    Ok(())
}
