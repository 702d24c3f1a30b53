use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use offer_model::{ColumnReport, PipelineReport};

use crate::types::CleanResult;

pub fn print_summary(result: &CleanResult) {
    for line in status_lines(result) {
        println!("{line}");
    }
    println!("{}", column_table(&result.report));
    if result.report.has_diagnostics() {
        eprintln!("Columns left unconverted:");
        for diagnostic in &result.report.diagnostics {
            eprintln!("- {diagnostic}");
        }
    }
}

/// Plain status lines printed above the column table.
pub fn status_lines(result: &CleanResult) -> Vec<String> {
    let report = &result.report;
    let mut lines = vec![format!("Input: {}", result.input.display())];
    lines.push(match &result.output {
        Some(path) => format!("Output: {}", path.display()),
        None => "Output: none (dry run)".to_string(),
    });
    lines.push(format!("Profile: {}", report.profile));
    lines.push(format!(
        "Rows: {} in, {} out ({} duplicate{} removed)",
        report.input_rows,
        report.output_rows,
        report.duplicates_removed,
        plural(report.duplicates_removed)
    ));
    lines.push(format!("Filled: {} cells", report.total_filled()));
    let remaining = report.remaining_nulls();
    if remaining > 0 {
        lines.push(format!("Unparseable dates/times left empty: {remaining}"));
    }
    lines
}

/// One row per output column.
pub fn column_table(report: &PipelineReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Kind"),
        header_cell("Dtype"),
        header_cell("Non-null"),
        header_cell("Filled"),
        header_cell("Unrecognized"),
        header_cell("Unparsed"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 3..7 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    let failed: Vec<&str> = report
        .diagnostics
        .iter()
        .map(|diagnostic| diagnostic.column.as_str())
        .collect();
    for column in &report.columns {
        table.add_row(column_row(column, failed.contains(&column.name.as_str())));
    }
    table
}

fn column_row(column: &ColumnReport, failed: bool) -> Vec<Cell> {
    let name = if failed {
        Cell::new(&column.name).fg(Color::Yellow)
    } else {
        Cell::new(&column.name)
            .fg(Color::Blue)
            .add_attribute(Attribute::Bold)
    };
    let kind = match column.kind {
        Some(kind) => Cell::new(kind),
        None => dim_cell("-"),
    };
    vec![
        name,
        kind,
        dim_cell(&column.dtype),
        Cell::new(column.non_null),
        count_cell(column.filled, Color::Green),
        count_cell(column.unrecognized, Color::Yellow),
        count_cell(column.parse_failures, Color::Red),
    ]
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color)
    } else {
        dim_cell(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

fn plural(count: usize) -> &'static str {
    if count == 1 { "" } else { "s" }
}
