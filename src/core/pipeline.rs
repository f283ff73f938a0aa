use crate::core::clock::{format_metadata_timestamp, format_row_timestamp, SystemClock};
use crate::core::{extract, load, transform};
use crate::core::{Clock, ConfigProvider, LoadReport, Pipeline, RawTable, Storage, Table};
use crate::utils::error::Result;
use std::path::Path;

/// Employee CSV pipeline: CSV source in, CSV and JSON sinks out.
pub struct CsvPipeline<S: Storage, C: ConfigProvider, K: Clock = SystemClock> {
    storage: S,
    config: C,
    clock: K,
}

impl<S: Storage, C: ConfigProvider> CsvPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self::with_clock(storage, config, SystemClock)
    }
}

impl<S: Storage, C: ConfigProvider, K: Clock> CsvPipeline<S, C, K> {
    pub fn with_clock(storage: S, config: C, clock: K) -> Self {
        Self {
            storage,
            config,
            clock,
        }
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    fn sink_path(&self, filename: &str) -> String {
        Path::new(self.config.output_path())
            .join(filename)
            .display()
            .to_string()
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider, K: Clock> Pipeline for CsvPipeline<S, C, K> {
    async fn extract(&self) -> Result<RawTable> {
        let source = self.config.source_path();
        tracing::debug!("Reading source file: {}", source);

        let bytes = self.storage.read_file(source).await?;
        let table = extract::extract_employees(source, &bytes)?;

        tracing::info!("📥 Extracted {} records from {}", table.len(), source);
        Ok(table)
    }

    async fn transform(&self, data: RawTable) -> Result<Table> {
        let processed_at = format_row_timestamp(self.clock.now());
        tracing::debug!("Stamping rows with processed_at={}", processed_at);

        let table = transform::transform(&data, &processed_at)?;

        tracing::info!(
            "🔧 Transformed {} records with new columns: salary_category, age_group",
            table.len()
        );
        Ok(table)
    }

    async fn load(&self, table: &Table) -> Result<LoadReport> {
        let csv_path = self.sink_path(self.config.csv_filename());
        let csv_data = load::render_csv(&csv_path, table)?;
        tracing::debug!("Writing CSV ({} bytes) to {}", csv_data.len(), csv_path);
        self.storage.write_file(&csv_path, &csv_data).await?;
        tracing::info!("💾 Data loaded to {}", csv_path);

        let json_path = self.sink_path(self.config.json_filename());
        let metadata_stamp = format_metadata_timestamp(self.clock.now());
        let json_data = load::render_json(&json_path, table, metadata_stamp)?;
        tracing::debug!("Writing JSON ({} bytes) to {}", json_data.len(), json_path);
        self.storage.write_file(&json_path, &json_data).await?;
        tracing::info!("💾 Data loaded to {}", json_path);

        Ok(LoadReport {
            csv_path,
            json_path,
        })
    }
}
