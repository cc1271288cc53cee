use crate::render::OutputFormat;
use config::{Config, ConfigError, Environment, File};
use extractors::ExtractorConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const DEFAULT_CONFIG: &str = r#"
[extractor]
csv_delimiter = ","

[output]
format = "text"
# Combined "Parsed ... Data:" file written after every run
# summary_path = "parsed_summary.txt"

[logging]
# Append log lines to this file in addition to stderr
# log_file_path = "logs/textscrape.log"
"#;

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct AppConfig {
    pub extractor: Option<ExtractorConfig>,
    pub output: Option<OutputConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    pub summary_path: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct LoggingConfig {
    pub log_file_path: Option<String>,
}

impl AppConfig {
    /// Load config from `path` (or the default location), writing a
    /// default file first if none exists. `TEXTSCRAPE_*` environment
    /// variables override file values, e.g. `TEXTSCRAPE_OUTPUT__FORMAT=json`.
    pub fn load(path: Option<&Path>) -> Result<(Self, PathBuf), ConfigError> {
        let config_path = path.map(Path::to_path_buf).unwrap_or_else(get_config_path);

        // Create config directory if it doesn't exist
        if let Some(parent) = config_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    ConfigError::Message(format!("Failed to create config directory: {e}"))
                })?;
            }
        }

        if !config_path.exists() {
            std::fs::write(&config_path, DEFAULT_CONFIG).map_err(|e| {
                ConfigError::Message(format!("Failed to write default config: {e}"))
            })?;
        }

        let builder = Config::builder()
            .add_source(File::from(config_path.clone()))
            .add_source(
                Environment::with_prefix("TEXTSCRAPE")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        let config: AppConfig = builder.try_deserialize()?;

        Ok((config, config_path))
    }

    pub fn extractor_config(&self) -> ExtractorConfig {
        self.extractor.clone().unwrap_or_default()
    }

    pub fn output_format(&self) -> OutputFormat {
        self.output.as_ref().map(|o| o.format).unwrap_or_default()
    }

    pub fn summary_path(&self) -> Option<PathBuf> {
        self.output
            .as_ref()
            .and_then(|o| o.summary_path.as_ref())
            .map(PathBuf::from)
    }

    pub fn log_file_path(&self) -> Option<String> {
        self.logging.as_ref().and_then(|l| l.log_file_path.clone())
    }
}

pub fn get_config_path() -> PathBuf {
    if let Some(config_dir) = dirs::config_dir() {
        config_dir.join("textscrape").join("config.toml")
    } else {
        PathBuf::from("textscrape.toml")
    }
}
