use crate::domain::model::{LoadReport, RawTable, Table};
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::NaiveDateTime;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn source_path(&self) -> &str;
    fn output_path(&self) -> &str;
    fn csv_filename(&self) -> &str;
    fn json_filename(&self) -> &str;
    fn preview_rows(&self) -> usize;
}

/// Source of wall-clock readings. Each call is a separate capture.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<RawTable>;
    async fn transform(&self, data: RawTable) -> Result<Table>;
    async fn load(&self, table: &Table) -> Result<LoadReport>;
}
