pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};

pub const DEFAULT_SOURCE_PATH: &str = "data/input.csv";
pub const DEFAULT_OUTPUT_PATH: &str = "./output";
pub const DEFAULT_CSV_FILENAME: &str = "transformed_data.csv";
pub const DEFAULT_JSON_FILENAME: &str = "transformed_data.json";
pub const DEFAULT_PREVIEW_ROWS: usize = 5;

#[cfg_attr(feature = "cli", derive(clap::Parser))]
#[cfg_attr(feature = "cli", command(name = "roster-etl"))]
#[cfg_attr(
    feature = "cli",
    command(about = "Enrich employee records from CSV into CSV and JSON outputs")
)]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CliConfig {
    /// CSV file with the header id,name,age,city,salary
    #[cfg_attr(feature = "cli", arg(long, default_value = DEFAULT_SOURCE_PATH))]
    pub source: String,

    /// Directory receiving both output files
    #[cfg_attr(feature = "cli", arg(long, default_value = DEFAULT_OUTPUT_PATH))]
    pub output_path: String,

    #[cfg_attr(feature = "cli", arg(long, default_value = DEFAULT_CSV_FILENAME))]
    pub csv_filename: String,

    #[cfg_attr(feature = "cli", arg(long, default_value = DEFAULT_JSON_FILENAME))]
    pub json_filename: String,

    /// Transformed rows shown in the summary (0 disables the preview)
    #[cfg_attr(feature = "cli", arg(long, default_value_t = DEFAULT_PREVIEW_ROWS))]
    pub preview_rows: usize,

    #[cfg_attr(feature = "cli", arg(long, help = "Enable verbose output"))]
    pub verbose: bool,

    #[cfg_attr(feature = "cli", arg(long, help = "Emit logs as JSON lines"))]
    pub log_json: bool,

    #[cfg_attr(feature = "cli", arg(long, help = "Log process CPU and memory per stage"))]
    pub monitor: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            source: DEFAULT_SOURCE_PATH.to_string(),
            output_path: DEFAULT_OUTPUT_PATH.to_string(),
            csv_filename: DEFAULT_CSV_FILENAME.to_string(),
            json_filename: DEFAULT_JSON_FILENAME.to_string(),
            preview_rows: DEFAULT_PREVIEW_ROWS,
            verbose: false,
            log_json: false,
            monitor: false,
        }
    }
}

impl ConfigProvider for CliConfig {
    fn source_path(&self) -> &str {
        &self.source
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn csv_filename(&self) -> &str {
        &self.csv_filename
    }

    fn json_filename(&self) -> &str {
        &self.json_filename
    }

    fn preview_rows(&self) -> usize {
        self.preview_rows
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_locations(self)
    }
}

/// Checks shared by every configuration source.
pub(crate) fn validate_locations(config: &impl ConfigProvider) -> Result<()> {
    validation::validate_path("source", config.source_path())?;
    validation::validate_path("output_path", config.output_path())?;
    validation::validate_file_name("csv_filename", config.csv_filename())?;
    validation::validate_file_name("json_filename", config.json_filename())?;
    validation::validate_file_extensions("csv_filename", &[config.csv_filename()], &["csv"])?;
    validation::validate_file_extensions("json_filename", &[config.json_filename()], &["json"])?;
    Ok(())
}
