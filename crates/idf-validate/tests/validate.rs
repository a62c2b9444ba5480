//! Rule-level tests for the integrity validator.

use idf_model::{CellValue, Row, Severity, Table, ValidationReport};
use idf_validate::messages;
use idf_validate::{validate, validate_table};

const REQUIRED: [&str; 4] = [
    "Unit ID",
    "Circuit /Equipment Tag",
    "Equipment ID (Asset ID)",
    "Damage Mechanism as per Corrosion Study",
];

fn valid_row() -> Row {
    Row::new()
        .with("Unit ID", "612")
        .with("Circuit /Equipment Tag", "X")
        .with("Equipment ID (Asset ID)", "612C-6003")
        .with("Damage Mechanism as per Corrosion Study", "Pitting")
}

fn table_with(extra_columns: &[&str], rows: Vec<Row>) -> Table {
    let mut table =
        Table::new(REQUIRED.iter().chain(extra_columns.iter()).copied()).expect("table");
    for row in rows {
        table.push_row(row);
    }
    table
}

fn single_issue(report: &ValidationReport) -> &idf_model::ValidationIssue {
    assert_eq!(report.len(), 1, "expected one issue, got {:?}", report.issues);
    &report.issues[0]
}

#[test]
fn missing_required_columns_short_circuit() {
    let mut table = Table::new(["Unit ID", "Risk Rank"]).expect("table");
    table.push_row(Row::new().with("Unit ID", "bad").with("Risk Rank", "Critical"));

    let report = validate_table(&table);
    let fields: Vec<&str> = report.issues.iter().map(|i| i.field.as_str()).collect();
    assert_eq!(
        fields,
        vec![
            "Circuit /Equipment Tag",
            "Equipment ID (Asset ID)",
            "Damage Mechanism as per Corrosion Study"
        ]
    );
    for issue in &report.issues {
        assert!(issue.is_table_level());
        assert_eq!(issue.severity, Severity::Error);
        assert_eq!(issue.message, messages::MISSING_REQUIRED_COLUMN);
        assert!(issue.value.is_missing());
    }
}

#[test]
fn required_column_match_is_exact() {
    let table = Table::new([
        "unit id",
        "Circuit / Equipment Tag",
        "Equipment ID (Asset ID)",
        "Damage Mechanism as per Corrosion Study",
    ])
    .expect("table");
    let report = validate_table(&table);
    assert_eq!(report.len(), 2);
    assert_eq!(report.issues[0].field, "Unit ID");
    assert_eq!(report.issues[1].field, "Circuit /Equipment Tag");
}

#[test]
fn negative_design_pressure_scenario() {
    let table = table_with(
        &["Design Pressure (KPag)"],
        vec![valid_row().with("Design Pressure (KPag)", "-5")],
    );
    let (returned, report) = validate(table.clone());
    assert_eq!(returned, table);

    let issue = single_issue(&report);
    assert_eq!(issue.row_index, 0);
    assert_eq!(issue.field, "Design Pressure (KPag)");
    assert_eq!(issue.severity, Severity::Error);
    assert_eq!(issue.message, "Design pressure must be >= 0");
    assert_eq!(issue.value, CellValue::text("-5"));
}

#[test]
fn non_numeric_design_pressure_warns_only() {
    let table = table_with(
        &["Design Pressure (KPag)"],
        vec![valid_row().with("Design Pressure (KPag)", "-abc")],
    );
    let report = validate_table(&table);
    let issue = single_issue(&report);
    assert_eq!(issue.severity, Severity::Warn);
    assert_eq!(issue.message, messages::DESIGN_PRESSURE_NOT_NUMERIC);
}

#[test]
fn blank_design_pressure_text_is_not_numeric() {
    let table = table_with(
        &["Design Pressure (KPag)"],
        vec![valid_row().with("Design Pressure (KPag)", "   ")],
    );
    let report = validate_table(&table);
    assert_eq!(single_issue(&report).severity, Severity::Warn);
}

#[test]
fn absent_design_pressure_is_skipped() {
    let table = table_with(
        &["Design Pressure (KPag)"],
        vec![valid_row().with("Design Pressure (KPag)", CellValue::Missing)],
    );
    assert!(validate_table(&table).is_empty());
}

#[test]
fn numeric_design_pressure_cells_are_checked() {
    let table = table_with(
        &["Design Pressure (KPag)"],
        vec![
            valid_row().with("Design Pressure (KPag)", -0.5),
            valid_row().with("Design Pressure (KPag)", 0.0),
        ],
    );
    let report = validate_table(&table);
    let issue = single_issue(&report);
    assert_eq!(issue.row_index, 0);
    assert_eq!(issue.value, CellValue::Number(-0.5));
}

#[test]
fn slash_date_warns() {
    let table = table_with(
        &["Last Inspection Date"],
        vec![valid_row().with("Last Inspection Date", "12/01/2023")],
    );
    let report = validate_table(&table);
    let issue = single_issue(&report);
    assert_eq!(issue.field, "Last Inspection Date");
    assert_eq!(issue.severity, Severity::Warn);
    assert_eq!(issue.message, "Expected date format YYYY-MM-DD");
}

#[test]
fn padded_iso_date_is_accepted() {
    let table = table_with(
        &["Last Inspection Date"],
        vec![valid_row().with("Last Inspection Date", " 2023-12-01 ")],
    );
    assert!(validate_table(&table).is_empty());
}

#[test]
fn risk_rank_vocabulary() {
    let table = table_with(
        &["Risk Rank"],
        vec![
            valid_row().with("Risk Rank", "Critical"),
            valid_row().with("Risk Rank", ""),
            valid_row().with("Risk Rank", "High"),
            valid_row().with("Risk Rank", "high"),
        ],
    );
    let report = validate_table(&table);
    let rows: Vec<i64> = report.issues.iter().map(|i| i.row_index).collect();
    assert_eq!(rows, vec![0, 3]);
    assert!(report.issues.iter().all(|i| i.severity == Severity::Warn));
    assert_eq!(report.issues[0].message, "Risk rank not in {Low, Medium, High}");
    assert_eq!(report.issues[0].value, CellValue::text("Critical"));
}

#[test]
fn unit_id_errors_report_trimmed_value() {
    let table = table_with(&[], vec![valid_row().with("Unit ID", " 61 ")]);
    let report = validate_table(&table);
    let issue = single_issue(&report);
    assert_eq!(issue.severity, Severity::Error);
    assert_eq!(issue.message, messages::UNIT_ID_FORMAT);
    assert_eq!(issue.value, CellValue::text("61"));
}

#[test]
fn numeric_unit_id_renders_without_fraction() {
    let table = table_with(&[], vec![valid_row().with("Unit ID", 612.0)]);
    assert!(validate_table(&table).is_empty());
}

#[test]
fn equipment_id_deviation_is_a_warning() {
    let table = table_with(&[], vec![valid_row().with("Equipment ID (Asset ID)", "P-101")]);
    let report = validate_table(&table);
    let issue = single_issue(&report);
    assert_eq!(issue.severity, Severity::Warn);
    assert_eq!(issue.message, messages::EQUIPMENT_ID_FORMAT);
    assert!(!report.has_errors());
}

#[test]
fn absent_damage_mechanism_is_an_error() {
    let table = table_with(
        &[],
        vec![
            valid_row().with("Damage Mechanism as per Corrosion Study", CellValue::Missing),
            valid_row().with("Damage Mechanism as per Corrosion Study", "   "),
        ],
    );
    let report = validate_table(&table);
    assert_eq!(report.len(), 2);
    assert!(report.issues[0].value.is_missing());
    assert_eq!(report.issues[1].value, CellValue::text(""));
    for issue in &report.issues {
        assert_eq!(issue.message, messages::DAMAGE_MECHANISM_REQUIRED);
        assert_eq!(issue.severity, Severity::Error);
    }
}

#[test]
fn issues_follow_row_then_rule_order() {
    let bad_row = Row::new()
        .with("Unit ID", "6")
        .with("Circuit /Equipment Tag", "X")
        .with("Equipment ID (Asset ID)", "nope")
        .with("Design Pressure (KPag)", "-1")
        .with("Last Inspection Date", "2023/01/01")
        .with("Risk Rank", "Extreme");
    let table = table_with(
        &["Design Pressure (KPag)", "Last Inspection Date", "Risk Rank"],
        vec![valid_row(), bad_row.clone(), bad_row],
    );
    let report = validate_table(&table);
    let summary: Vec<(i64, &str)> = report
        .issues
        .iter()
        .map(|i| (i.row_index, i.field.as_str()))
        .collect();
    let per_row = [
        "Unit ID",
        "Equipment ID (Asset ID)",
        "Damage Mechanism as per Corrosion Study",
        "Design Pressure (KPag)",
        "Last Inspection Date",
        "Risk Rank",
    ];
    let expected: Vec<(i64, &str)> = [1i64, 2]
        .into_iter()
        .flat_map(|row| per_row.iter().map(move |field| (row, *field)))
        .collect();
    assert_eq!(summary, expected);
    assert_eq!(report.error_count(), 6);
    assert_eq!(report.warning_count(), 6);
}

#[test]
fn empty_table_with_required_columns_is_clean() {
    let table = table_with(&[], Vec::new());
    let report = validate_table(&table);
    assert!(report.is_empty());
    assert!(!report.has_errors());
}
