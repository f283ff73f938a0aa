use crate::core::{EnrichedRecord, Table};
use crate::utils::error::{EtlError, Result};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct JsonMetadata<'a> {
    pub total_records: usize,
    pub processed_at: String,
    pub columns: &'a [&'static str],
}

#[derive(Debug, Serialize)]
pub struct JsonDocument<'a> {
    pub metadata: JsonMetadata<'a>,
    pub data: &'a [EnrichedRecord],
}

/// Render the table as CSV. The header row is always written, even for an
/// empty table.
pub fn render_csv(sink_name: &str, table: &Table) -> Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    writer
        .write_record(table.columns())
        .map_err(|e| sink_error(sink_name, e))?;

    for record in &table.rows {
        writer.serialize(record).map_err(|e| sink_error(sink_name, e))?;
    }

    writer
        .into_inner()
        .map_err(|e| sink_error(sink_name, e.error()))
}

/// Render the table as the metadata/data JSON document, pretty printed.
/// `processed_at` is the document-level stamp, captured by the caller
/// independently of the rows' own stamp.
pub fn render_json(sink_name: &str, table: &Table, processed_at: String) -> Result<Vec<u8>> {
    let document = JsonDocument {
        metadata: JsonMetadata {
            total_records: table.len(),
            processed_at,
            columns: table.columns(),
        },
        data: &table.rows,
    };

    serde_json::to_vec_pretty(&document).map_err(|e| sink_error(sink_name, e))
}

fn sink_error(sink_name: &str, error: impl std::fmt::Display) -> EtlError {
    EtlError::SinkWriteError {
        path: sink_name.to_string(),
        message: error.to_string(),
    }
}
