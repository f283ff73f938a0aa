pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::LocalStorage, toml_config::TomlConfig, CliConfig};
pub use core::{
    clock::{FixedClock, SystemClock},
    etl::EtlEngine,
    pipeline::CsvPipeline,
};
pub use domain::model::{LoadReport, RawTable, RunSummary, Table};
pub use utils::error::{EtlError, Result};
