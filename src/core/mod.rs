pub mod clock;
pub mod etl;
pub mod extract;
pub mod load;
pub mod pipeline;
pub mod report;
pub mod transform;

pub use crate::domain::model::{
    AgeGroup, EmployeeRecord, EnrichedRecord, LoadReport, RawTable, RunSummary, SalaryCategory,
    Table, INPUT_COLUMNS, OUTPUT_COLUMNS,
};
pub use crate::domain::ports::{Clock, ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
