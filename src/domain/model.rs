use serde::{Deserialize, Serialize};

/// Columns the source file must carry, in their canonical order.
pub const INPUT_COLUMNS: [&str; 5] = ["id", "name", "age", "city", "salary"];

/// Columns of every transformed table, in output order.
pub const OUTPUT_COLUMNS: [&str; 8] = [
    "id",
    "name",
    "age",
    "age_group",
    "city",
    "salary",
    "salary_category",
    "processed_at",
];

/// Text cells as read from a CSV source, under the file's own header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { columns, rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SalaryCategory {
    Low,
    Medium,
    High,
}

impl SalaryCategory {
    pub fn from_salary(salary: f64) -> Self {
        if salary >= 80000.0 {
            SalaryCategory::High
        } else if salary >= 60000.0 {
            SalaryCategory::Medium
        } else {
            SalaryCategory::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SalaryCategory::Low => "Low",
            SalaryCategory::Medium => "Medium",
            SalaryCategory::High => "High",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgeGroup {
    Junior,
    Mid,
    Senior,
}

impl AgeGroup {
    pub fn from_age(age: i64) -> Self {
        if age >= 40 {
            AgeGroup::Senior
        } else if age >= 30 {
            AgeGroup::Mid
        } else {
            AgeGroup::Junior
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AgeGroup::Junior => "Junior",
            AgeGroup::Mid => "Mid",
            AgeGroup::Senior => "Senior",
        }
    }
}

/// One source row after its numeric cells have been parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeRecord {
    pub id: i64,
    pub name: String,
    pub age: i64,
    pub city: String,
    /// Kept as a JSON number so integral salaries stay integers in both sinks.
    pub salary: serde_json::Number,
    /// `salary` as parsed, for categorisation.
    pub salary_amount: f64,
}

/// A transformed row. Field order here is the output column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedRecord {
    pub id: i64,
    pub name: String,
    pub age: i64,
    pub age_group: AgeGroup,
    pub city: String,
    pub salary: serde_json::Number,
    pub salary_category: SalaryCategory,
    pub processed_at: String,
}

impl EnrichedRecord {
    /// Cell values as display strings, in `OUTPUT_COLUMNS` order.
    pub fn cells(&self) -> [String; 8] {
        [
            self.id.to_string(),
            self.name.clone(),
            self.age.to_string(),
            self.age_group.as_str().to_string(),
            self.city.clone(),
            self.salary.to_string(),
            self.salary_category.as_str().to_string(),
            self.processed_at.clone(),
        ]
    }
}

/// Output of the transform stage. The schema is fixed, so it is reported
/// in full even when there are no rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    pub rows: Vec<EnrichedRecord>,
}

impl Table {
    pub fn new(rows: Vec<EnrichedRecord>) -> Self {
        Self { rows }
    }

    pub fn columns(&self) -> &'static [&'static str] {
        &OUTPUT_COLUMNS
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn head(&self, n: usize) -> &[EnrichedRecord] {
        &self.rows[..n.min(self.rows.len())]
    }
}

/// Where the loaders put their documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadReport {
    pub csv_path: String,
    pub json_path: String,
}

#[derive(Debug, Clone)]
pub struct RunSummary {
    pub total_records: usize,
    pub outputs: LoadReport,
    pub table: Table,
}
