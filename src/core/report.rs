use crate::core::{RunSummary, Table};

/// Column-aligned text view of the first `rows` rows, header included.
/// Cells are right-aligned to the widest entry of their column.
pub fn format_preview(table: &Table, rows: usize) -> String {
    let columns = table.columns();
    let body: Vec<[String; 8]> = table.head(rows).iter().map(|r| r.cells()).collect();

    let widths: Vec<usize> = columns
        .iter()
        .enumerate()
        .map(|(i, name)| {
            body.iter()
                .map(|cells| cells[i].chars().count())
                .chain(std::iter::once(name.chars().count()))
                .max()
                .unwrap_or_default()
        })
        .collect();

    let render = |cells: Vec<&str>| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{:>width$}", cell, width = width))
            .collect::<Vec<_>>()
            .join(" ")
    };

    let mut lines = vec![render(columns.to_vec())];
    for cells in &body {
        lines.push(render(cells.iter().map(String::as_str).collect()));
    }
    lines.join("\n")
}

/// Human-readable end-of-run report.
pub fn format_summary(summary: &RunSummary, preview_rows: usize) -> String {
    let mut out = String::new();
    out.push_str(&"=".repeat(50));
    out.push_str("\nETL pipeline completed successfully!\n");
    out.push_str(&format!("Processed {} records\n", summary.total_records));
    out.push_str(&format!("CSV output:  {}\n", summary.outputs.csv_path));
    out.push_str(&format!("JSON output: {}\n", summary.outputs.json_path));

    if preview_rows > 0 {
        out.push_str("\nSample of transformed data:\n");
        out.push_str(&format_preview(&summary.table, preview_rows));
        out.push('\n');
    }
    out
}
