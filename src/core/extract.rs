use crate::core::{RawTable, INPUT_COLUMNS};
use crate::utils::error::{EtlError, Result};
use std::collections::BTreeSet;

/// Parse a headered CSV document of any shape.
///
/// Every row must have as many cells as the header; anything else, and any
/// invalid UTF-8, is reported as `SourceMalformed` against `source_name`.
pub fn read_table(source_name: &str, bytes: &[u8]) -> Result<RawTable> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(bytes);

    let columns: Vec<String> = reader
        .headers()
        .map_err(|e| malformed(source_name, e))?
        .iter()
        .map(str::to_string)
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| malformed(source_name, e))?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok(RawTable::new(columns, rows))
}

/// Parse the employee source file, checking its header against
/// `id,name,age,city,salary`. Column order in the file is free.
pub fn extract_employees(source_name: &str, bytes: &[u8]) -> Result<RawTable> {
    let table = read_table(source_name, bytes)?;

    let expected: BTreeSet<&str> = INPUT_COLUMNS.iter().copied().collect();
    let found: BTreeSet<&str> = table.columns.iter().map(String::as_str).collect();

    if found != expected || table.columns.len() != INPUT_COLUMNS.len() {
        return Err(EtlError::SourceMalformed {
            path: source_name.to_string(),
            message: format!(
                "expected header '{}', found '{}'",
                INPUT_COLUMNS.join(","),
                table.columns.join(",")
            ),
        });
    }

    tracing::debug!(
        "Parsed {} rows with columns [{}] from {}",
        table.len(),
        table.columns.join(", "),
        source_name
    );
    Ok(table)
}

fn malformed(source_name: &str, error: csv::Error) -> EtlError {
    let message = match error.kind() {
        csv::ErrorKind::UnequalLengths {
            pos,
            expected_len,
            len,
        } => {
            let line = pos.as_ref().map(|p| p.line()).unwrap_or_default();
            format!(
                "line {} has {} fields, expected {}",
                line, len, expected_len
            )
        }
        _ => error.to_string(),
    };

    EtlError::SourceMalformed {
        path: source_name.to_string(),
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOURCE: &str = "id,name,age,city,salary\n\
                          1,john doe,28,New York,75000\n\
                          2,jane smith,34,Los Angeles,82000\n";

    #[test]
    fn test_extract_preserves_order_and_columns() {
        let table = extract_employees("input.csv", SOURCE.as_bytes()).unwrap();

        assert_eq!(table.columns, vec!["id", "name", "age", "city", "salary"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows[0][1], "john doe");
        assert_eq!(table.rows[1][3], "Los Angeles");
    }

    #[test]
    fn test_extract_accepts_reordered_header() {
        let source = "name,id,salary,age,city\nbob johnson,3,68000,45,Chicago\n";
        let table = extract_employees("input.csv", source.as_bytes()).unwrap();

        assert_eq!(table.column_index("salary"), Some(2));
        assert_eq!(table.rows[0][0], "bob johnson");
    }

    #[test]
    fn test_extract_header_only() {
        let table = extract_employees("input.csv", b"id,name,age,city,salary\n").unwrap();
        assert!(table.is_empty());
        assert_eq!(table.columns.len(), 5);
    }

    #[test]
    fn test_extract_rejects_wrong_header() {
        let source = "id,name,age,town,salary\n1,a,2,b,3\n";
        let err = extract_employees("input.csv", source.as_bytes()).unwrap_err();
        assert!(matches!(err, EtlError::SourceMalformed { .. }));
    }

    #[test]
    fn test_extract_rejects_extra_column() {
        let source = "id,name,age,city,salary,dept\n1,a,2,b,3,x\n";
        let err = extract_employees("input.csv", source.as_bytes()).unwrap_err();
        assert!(matches!(err, EtlError::SourceMalformed { .. }));
    }

    #[test]
    fn test_extract_rejects_ragged_row() {
        let source = "id,name,age,city,salary\n1,john doe,28,New York\n";
        let err = extract_employees("input.csv", source.as_bytes()).unwrap_err();

        match err {
            EtlError::SourceMalformed { path, message } => {
                assert_eq!(path, "input.csv");
                assert!(message.contains("expected 5"), "{}", message);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_extract_rejects_empty_file() {
        let err = extract_employees("input.csv", b"").unwrap_err();
        assert!(matches!(err, EtlError::SourceMalformed { .. }));
    }

    #[test]
    fn test_extract_accepts_utf8_bom() {
        let source = "\u{feff}id,name,age,city,salary\n1,john doe,28,New York,75000\n";
        let table = extract_employees("input.csv", source.as_bytes()).unwrap();

        assert_eq!(table.columns, vec!["id", "name", "age", "city", "salary"]);
        assert_eq!(table.rows[0][0], "1");
    }

    #[test]
    fn test_read_table_is_schema_agnostic() {
        let table = read_table("any.csv", b"a,b\n1,2\n3,4\n").unwrap();
        assert_eq!(table.columns, vec!["a", "b"]);
        assert_eq!(table.rows, vec![vec!["1", "2"], vec!["3", "4"]]);
    }
}
