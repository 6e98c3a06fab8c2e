use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use tabmap_model::{ContactField, ProcessResponse, RowError};

use tabmap_cli::types::RunReport;

pub fn print_summary(report: &RunReport) {
    println!("Pipeline: {}", report.pipeline);
    println!("Output: {}", report.artifact.display());

    let stats = &report.stats;
    let mut table = Table::new();
    table.set_header(vec![header_cell("Stage"), header_cell("Rows")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new("Rows read"), Cell::new(stats.rows_read)]);
    table.add_row(vec![
        Cell::new("Skipped (empty)"),
        count_cell(stats.skipped_empty, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Skipped (no phone)"),
        count_cell(stats.missing_phone, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Duplicates"),
        count_cell(stats.duplicates, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Rejected"),
        count_cell(stats.rejected, Color::Red),
    ]);
    table.add_row(vec![
        Cell::new("Records written")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(stats.records)
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
    ]);
    println!("{table}");

    if let Some(mapping) = &report.mapping {
        let mut table = Table::new();
        let source = if report.mapping_inferred {
            "Column (inferred)"
        } else {
            "Column"
        };
        table.set_header(vec![header_cell("Field"), header_cell(source)]);
        apply_table_style(&mut table);
        align_column(&mut table, 1, CellAlignment::Right);
        for field in ContactField::ALL {
            let column = match mapping.get(field) {
                Some(column) if column > 0 => Cell::new(column),
                _ => dim_cell("-"),
            };
            table.add_row(vec![Cell::new(field.as_str()), column]);
        }
        println!();
        println!("Mapping:");
        println!("{table}");
    }

    print_rejected_table(&report.rejected);
}

pub fn print_failure(response: &ProcessResponse) {
    let code = response.code.as_deref().unwrap_or("ERROR");
    let message = response.message.as_deref().unwrap_or_default();
    eprintln!("error [{code}]: {message}");
}

fn print_rejected_table(rejected: &[RowError]) {
    if rejected.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("Location"), header_cell("Reason")]);
    apply_table_style(&mut table);
    for error in rejected {
        let (location, reason) = match error {
            RowError::Decode { line, reason } => (format!("line {line}"), reason.clone()),
            RowError::CellError { row, column, value } => (
                format!("row {row}, column {column}"),
                format!("error cell {value}"),
            ),
        };
        table.add_row(vec![Cell::new(location).fg(Color::Red), Cell::new(reason)]);
    }
    println!();
    println!("Rejected rows:");
    println!("{table}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(60);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
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
