use anyhow::{Context, Result};
use clap::Parser;
use extractors::{read_source_bytes, write_summary, StructuredTextExtractor};
use shared_types::{ExtractionStatus, SourceFormat};
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::prelude::*;

mod config;
mod render;

use render::{OutputFormat, SourceReport};

#[derive(Parser, Debug)]
#[command(
    name = "textscrape",
    author,
    version,
    about = "Extract flat key/value pairs from JSON, XML and CSV-like text"
)]
struct Args {
    /// Files to scan
    #[arg(required = true, value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Format of every input (json, xml, csv); inferred from the file
    /// extension when omitted
    #[arg(long)]
    format: Option<SourceFormat>,

    /// How to print the extracted pairs
    #[arg(long, value_enum)]
    output: Option<OutputFormat>,

    /// Also write a combined summary of all inputs to this file
    #[arg(long, value_name = "PATH")]
    summary: Option<PathBuf>,

    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    #[arg(long)]
    log_file_path: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let (config, config_path) =
        config::AppConfig::load(args.config.as_deref()).context("Failed to load textscrape config")?;

    let log_file_path = args.log_file_path.clone().or_else(|| config.log_file_path());
    let _guard = init_tracing(log_file_path.as_deref());

    tracing::debug!("Loaded config from {:?}", config_path);

    let extractor = StructuredTextExtractor::new(config.extractor_config())
        .context("Failed to initialize extractor")?;

    let mut reports = Vec::with_capacity(args.files.len());

    for path in &args.files {
        let format = match args.format {
            Some(format) => format,
            None => SourceFormat::from_path(path)
                .with_context(|| format!("Cannot infer format of {}", path.display()))?,
        };

        let bytes = read_source_bytes(path)?;
        let report = extractor.extract_bytes(format, &bytes);

        if let ExtractionStatus::Failed { message } = &report.status {
            tracing::warn!(
                "Extraction from {} stopped early: {}",
                path.display(),
                message
            );
        }

        reports.push(SourceReport {
            path: path.clone(),
            report,
        });
    }

    let output = args.output.unwrap_or_else(|| config.output_format());
    print!("{}", render::render(output, &reports)?);

    if let Some(summary_path) = args.summary.clone().or_else(|| config.summary_path()) {
        let extraction_reports: Vec<_> = reports.into_iter().map(|r| r.report).collect();
        write_summary(&summary_path, &extraction_reports)
            .with_context(|| format!("Failed to write summary to {}", summary_path.display()))?;
    }

    Ok(())
}

/// Log to stderr, and additionally to `log_file_path` when given. Stdout
/// is reserved for extracted output.
fn init_tracing(log_file_path: Option<&str>) -> Option<WorkerGuard> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    if let Some(log_path) = log_file_path {
        let log_path = Path::new(log_path);
        let directory = log_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new("."));
        let file_appender = tracing_appender::rolling::never(
            directory,
            log_path
                .file_name()
                .unwrap_or(std::ffi::OsStr::new("textscrape.log")),
        );
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(true)
                    .with_writer(std::io::stderr),
            )
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(non_blocking),
            )
            .init();

        Some(guard)
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .init();

        None
    }
}
