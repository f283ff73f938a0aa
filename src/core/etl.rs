use crate::core::{Pipeline, RunSummary};
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub fn pipeline(&self) -> &P {
        &self.pipeline
    }

    /// Extract, transform, then load, strictly in that order. The first
    /// failing stage ends the run; sinks written before it stay on disk.
    pub async fn run(&self) -> Result<RunSummary> {
        tracing::info!("🚀 Starting ETL pipeline");
        self.monitor.log_stats("Start");

        tracing::info!("Extracting data from CSV...");
        let raw_data = self.pipeline.extract().await?;
        self.monitor.log_stats("Extract");

        tracing::info!("Transforming data...");
        let table = self.pipeline.transform(raw_data).await?;
        self.monitor.log_stats("Transform");

        tracing::info!("Loading data...");
        let outputs = self.pipeline.load(&table).await?;
        self.monitor.log_stats("Load");
        self.monitor.log_final_stats();

        tracing::info!("✅ Processed {} records", table.len());
        Ok(RunSummary {
            total_records: table.len(),
            outputs,
            table,
        })
    }
}
