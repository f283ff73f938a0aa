//! Enrichment of extracted employee rows.
//!
//! The transform is a pure function of its input table and the
//! `processed_at` stamp the caller captured for this run.

use crate::core::{
    AgeGroup, EmployeeRecord, EnrichedRecord, RawTable, SalaryCategory, Table, INPUT_COLUMNS,
};
use crate::utils::error::{EtlError, Result};

/// Positions of the required columns inside a raw table.
struct ColumnIndex {
    id: usize,
    name: usize,
    age: usize,
    city: usize,
    salary: usize,
}

impl ColumnIndex {
    fn resolve(table: &RawTable) -> Result<Self> {
        let find = |field: &str| {
            table
                .column_index(field)
                .ok_or_else(|| EtlError::FieldMissing {
                    field: field.to_string(),
                })
        };

        Ok(Self {
            id: find(INPUT_COLUMNS[0])?,
            name: find(INPUT_COLUMNS[1])?,
            age: find(INPUT_COLUMNS[2])?,
            city: find(INPUT_COLUMNS[3])?,
            salary: find(INPUT_COLUMNS[4])?,
        })
    }
}

/// Build the output table. Row order and count match `raw`.
pub fn transform(raw: &RawTable, processed_at: &str) -> Result<Table> {
    let index = ColumnIndex::resolve(raw)?;

    let rows = raw
        .rows
        .iter()
        .enumerate()
        .map(|(i, cells)| parse_record(&index, cells, i + 1).map(|r| enrich(r, processed_at)))
        .collect::<Result<Vec<_>>>()?;

    Ok(Table::new(rows))
}

/// Derive the categorical fields and normalize the name of one record.
pub fn enrich(record: EmployeeRecord, processed_at: &str) -> EnrichedRecord {
    let salary_category = SalaryCategory::from_salary(record.salary_amount);
    let age_group = AgeGroup::from_age(record.age);

    EnrichedRecord {
        id: record.id,
        name: title_case(&record.name),
        age: record.age,
        age_group,
        city: record.city,
        salary: record.salary,
        salary_category,
        processed_at: processed_at.to_string(),
    }
}

/// Uppercase the first character of every whitespace-separated word and
/// lowercase the rest. Whitespace is kept as is.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;

    for ch in text.chars() {
        if ch.is_whitespace() {
            out.push(ch);
            at_word_start = true;
        } else if at_word_start {
            out.extend(ch.to_uppercase());
            at_word_start = false;
        } else {
            out.extend(ch.to_lowercase());
        }
    }

    out
}

fn parse_record(index: &ColumnIndex, cells: &[String], row: usize) -> Result<EmployeeRecord> {
    let cell = |i: usize| cells.get(i).map(String::as_str).unwrap_or_default();

    let id = parse_integer("id", cell(index.id), row)?;
    let age = parse_integer("age", cell(index.age), row)?;
    let (salary, salary_amount) = parse_number("salary", cell(index.salary), row)?;

    Ok(EmployeeRecord {
        id,
        name: cell(index.name).to_string(),
        age,
        city: cell(index.city).to_string(),
        salary,
        salary_amount,
    })
}

fn parse_integer(field: &str, value: &str, row: usize) -> Result<i64> {
    value
        .trim()
        .parse::<i64>()
        .map_err(|_| type_mismatch(field, value, row, "integer"))
}

/// Integral text stays an integer `Number`; the `f64` is returned alongside.
fn parse_number(field: &str, value: &str, row: usize) -> Result<(serde_json::Number, f64)> {
    let trimmed = value.trim();

    if let Ok(n) = trimmed.parse::<i64>() {
        return Ok((n.into(), n as f64));
    }

    trimmed
        .parse::<f64>()
        .ok()
        .and_then(|f| serde_json::Number::from_f64(f).map(|n| (n, f)))
        .ok_or_else(|| type_mismatch(field, value, row, "number"))
}

fn type_mismatch(field: &str, value: &str, row: usize, expected: &'static str) -> EtlError {
    EtlError::TypeMismatch {
        field: field.to_string(),
        row,
        value: value.to_string(),
        expected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STAMP: &str = "2024-01-15 10:30:00";

    fn raw(rows: &[[&str; 5]]) -> RawTable {
        RawTable::new(
            INPUT_COLUMNS.iter().map(|c| c.to_string()).collect(),
            rows.iter()
                .map(|r| r.iter().map(|c| c.to_string()).collect())
                .collect(),
        )
    }

    fn sample() -> RawTable {
        raw(&[
            ["1", "john doe", "28", "New York", "75000"],
            ["2", "jane smith", "34", "Los Angeles", "82000"],
            ["3", "bob johnson", "45", "Chicago", "68000"],
        ])
    }

    #[test]
    fn test_transform_sample_rows() {
        let table = transform(&sample(), STAMP).unwrap();

        assert_eq!(table.len(), 3);

        let names: Vec<&str> = table.rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["John Doe", "Jane Smith", "Bob Johnson"]);

        let groups: Vec<AgeGroup> = table.rows.iter().map(|r| r.age_group).collect();
        assert_eq!(groups, vec![AgeGroup::Junior, AgeGroup::Mid, AgeGroup::Senior]);

        let categories: Vec<SalaryCategory> =
            table.rows.iter().map(|r| r.salary_category).collect();
        assert_eq!(
            categories,
            vec![
                SalaryCategory::Medium,
                SalaryCategory::High,
                SalaryCategory::Medium
            ]
        );
    }

    #[test]
    fn test_transform_passes_values_through() {
        let table = transform(&sample(), STAMP).unwrap();
        let first = &table.rows[0];

        assert_eq!(first.id, 1);
        assert_eq!(first.age, 28);
        assert_eq!(first.city, "New York");
        assert_eq!(first.salary, serde_json::Number::from(75000));
        assert!(first.salary.is_i64());
    }

    #[test]
    fn test_transform_stamps_every_row_identically() {
        let table = transform(&sample(), STAMP).unwrap();
        assert!(table.rows.iter().all(|r| r.processed_at == STAMP));
    }

    #[test]
    fn test_transform_salary_boundaries() {
        let table = transform(
            &raw(&[
                ["1", "a", "20", "x", "80000"],
                ["2", "b", "20", "x", "79999"],
                ["3", "c", "20", "x", "60000"],
                ["4", "d", "20", "x", "59999"],
                ["5", "e", "20", "x", "79999.5"],
            ]),
            STAMP,
        )
        .unwrap();

        let categories: Vec<SalaryCategory> =
            table.rows.iter().map(|r| r.salary_category).collect();
        assert_eq!(
            categories,
            vec![
                SalaryCategory::High,
                SalaryCategory::Medium,
                SalaryCategory::Medium,
                SalaryCategory::Low,
                SalaryCategory::Medium,
            ]
        );
        assert!(table.rows[4].salary.is_f64());
    }

    #[test]
    fn test_transform_age_boundaries() {
        let table = transform(
            &raw(&[
                ["1", "a", "40", "x", "1"],
                ["2", "b", "39", "x", "1"],
                ["3", "c", "30", "x", "1"],
                ["4", "d", "29", "x", "1"],
            ]),
            STAMP,
        )
        .unwrap();

        let groups: Vec<AgeGroup> = table.rows.iter().map(|r| r.age_group).collect();
        assert_eq!(
            groups,
            vec![
                AgeGroup::Senior,
                AgeGroup::Mid,
                AgeGroup::Mid,
                AgeGroup::Junior
            ]
        );
    }

    #[test]
    fn test_transform_empty_table_keeps_schema() {
        let table = transform(&raw(&[]), STAMP).unwrap();

        assert!(table.is_empty());
        assert_eq!(
            table.columns(),
            &[
                "id",
                "name",
                "age",
                "age_group",
                "city",
                "salary",
                "salary_category",
                "processed_at"
            ]
        );
    }

    #[test]
    fn test_transform_uses_header_positions() {
        let table = RawTable::new(
            ["salary", "city", "age", "name", "id"]
                .iter()
                .map(|c| c.to_string())
                .collect(),
            vec![["90000", "Boston", "41", "ann lee", "7"]
                .iter()
                .map(|c| c.to_string())
                .collect()],
        );

        let out = transform(&table, STAMP).unwrap();
        assert_eq!(out.rows[0].id, 7);
        assert_eq!(out.rows[0].name, "Ann Lee");
        assert_eq!(out.rows[0].salary_category, SalaryCategory::High);
        assert_eq!(out.rows[0].age_group, AgeGroup::Senior);
    }

    #[test]
    fn test_transform_missing_field() {
        let table = RawTable::new(
            vec!["id".to_string(), "name".to_string(), "age".to_string()],
            vec![],
        );

        match transform(&table, STAMP).unwrap_err() {
            EtlError::FieldMissing { field } => assert_eq!(field, "city"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_transform_non_numeric_age() {
        let err = transform(
            &raw(&[
                ["1", "a", "28", "x", "1"],
                ["2", "b", "thirty", "x", "1"],
            ]),
            STAMP,
        )
        .unwrap_err();

        match err {
            EtlError::TypeMismatch {
                field, row, value, ..
            } => {
                assert_eq!(field, "age");
                assert_eq!(row, 2);
                assert_eq!(value, "thirty");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_transform_non_numeric_salary() {
        let err = transform(&raw(&[["1", "a", "28", "x", "lots"]]), STAMP).unwrap_err();
        assert!(matches!(err, EtlError::TypeMismatch { ref field, .. } if field == "salary"));

        let err = transform(&raw(&[["1", "a", "28", "x", ""]]), STAMP).unwrap_err();
        assert!(matches!(err, EtlError::TypeMismatch { .. }));
    }

    #[test]
    fn test_transform_non_numeric_id() {
        let err = transform(&raw(&[["x1", "a", "28", "x", "1"]]), STAMP).unwrap_err();

        match err {
            EtlError::TypeMismatch {
                field,
                row,
                value,
                expected,
            } => {
                assert_eq!(field, "id");
                assert_eq!(row, 1);
                assert_eq!(value, "x1");
                assert_eq!(expected, "integer");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_transform_keeps_float_salary_form() {
        let table = transform(&raw(&[["1", "a", "28", "x", "75000.0"]]), STAMP).unwrap();
        let row = &table.rows[0];

        assert!(row.salary.is_f64());
        assert_eq!(row.salary.to_string(), "75000.0");
        assert_eq!(row.salary_category, SalaryCategory::Medium);
    }

    #[test]
    fn test_enrich_categorises_from_parsed_amount() {
        let record = EmployeeRecord {
            id: 1,
            name: "ann lee".to_string(),
            age: 30,
            city: "Boston".to_string(),
            salary: 80000.into(),
            salary_amount: 80000.0,
        };

        let enriched = enrich(record, STAMP);
        assert_eq!(enriched.salary_category, SalaryCategory::High);
        assert_eq!(enriched.name, "Ann Lee");
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("john doe"), "John Doe");
        assert_eq!(title_case("JANE SMITH"), "Jane Smith");
        assert_eq!(title_case("mIxEd  case"), "Mixed  Case");
        assert_eq!(title_case("émile zola"), "Émile Zola");
        assert_eq!(title_case(""), "");
    }
}
