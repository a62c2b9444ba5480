use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use idf_model::{IntegrityColumn, Severity, ValidationIssue};

use crate::pipeline::PipelineOutcome;

pub const ERRORS_MESSAGE: &str =
    "Completed with validation errors. Review the report before using outputs.";
pub const SUCCESS_MESSAGE: &str = "Completed successfully.";

pub fn print_summary(outcome: &PipelineOutcome) {
    println!("Input: {}", outcome.input_path.display());
    match &outcome.outputs {
        Some(paths) => {
            println!("Issues: {}", paths.issues_json.display());
            println!("Normalized: {}", paths.normalized_csv.display());
        }
        None => println!("Dry run: no output files written"),
    }
    println!();
    println!("Validation Report");
    println!("{}", issue_table(&outcome.report.issues));
    println!(
        "Rows: {}  Errors: {}  Warnings: {}",
        outcome.row_count,
        outcome.report.error_count(),
        outcome.report.warning_count()
    );
    if outcome.has_errors() {
        println!("{ERRORS_MESSAGE}");
    } else {
        println!("{SUCCESS_MESSAGE}");
    }
}

/// Issues in report order: Row, Severity, Field, Message, Value.
pub fn issue_table(issues: &[ValidationIssue]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Row"),
        header_cell("Severity"),
        header_cell("Field"),
        header_cell("Message"),
        header_cell("Value"),
    ]);
    apply_issue_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 1, CellAlignment::Center);
    for issue in issues {
        table.add_row(vec![
            Cell::new(issue.row_index),
            severity_cell(issue.severity),
            Cell::new(&issue.field),
            Cell::new(&issue.message),
            value_cell(issue),
        ]);
    }
    table
}

/// Schema catalogue listing for the `columns` command.
pub fn columns_table() -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Canonical"),
        header_cell("Kind"),
        header_cell("Required"),
        header_cell("Description"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Center);
    for column in IntegrityColumn::ALL {
        let required = if column.is_required() {
            Cell::new("yes").fg(Color::Green).add_attribute(Attribute::Bold)
        } else {
            dim_cell("-")
        };
        table.add_row(vec![
            Cell::new(column.display_name())
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(column.canonical_name()),
            Cell::new(column.kind()),
            required,
            Cell::new(column.description()),
        ]);
    }
    table
}

fn value_cell(issue: &ValidationIssue) -> Cell {
    if issue.value.is_missing() {
        Cell::new("")
    } else {
        Cell::new(issue.value.to_text())
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_issue_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(160);
    if table.column_count() >= 5 {
        table.set_constraints(vec![
            ColumnConstraint::LowerBoundary(Width::Fixed(5)),
            ColumnConstraint::UpperBoundary(Width::Fixed(10)),
            ColumnConstraint::UpperBoundary(Width::Percentage(30)),
            ColumnConstraint::UpperBoundary(Width::Percentage(40)),
            ColumnConstraint::UpperBoundary(Width::Percentage(25)),
        ]);
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn severity_cell(severity: Severity) -> Cell {
    match severity {
        Severity::Error => Cell::new("ERROR")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
        Severity::Warn => Cell::new("WARN").fg(Color::Yellow),
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
