use proptest::prelude::*;

use idf_model::{CellValue, Row, Table};
use idf_normalize::normalize;

fn scenario_table() -> Table {
    let mut table = Table::new([
        "Unit ID",
        "Circuit /Equipment Tag",
        "Equipment ID (Asset ID)",
        "Damage Mechanism as per Corrosion Study",
        "Design Pressure (KPag)",
        "Design Temperature (deg. C)",
        "Last Inspection Date",
        "Max STCR (MPY)",
        "Max LTCR (MPY)",
        "Risk Rank",
        "Inspector",
    ])
    .expect("table");
    table.push_row(
        Row::new()
            .with("Unit ID", "612")
            .with("Circuit /Equipment Tag", " X ")
            .with("Equipment ID (Asset ID)", "612C-6003")
            .with("Damage Mechanism as per Corrosion Study", "Pitting  ")
            .with("Design Pressure (KPag)", "-5")
            .with("Design Temperature (deg. C)", "abc")
            .with("Last Inspection Date", "12/01/2023")
            .with("Max STCR (MPY)", CellValue::Missing)
            .with("Max LTCR (MPY)", " 2.5")
            .with("Risk Rank", "High")
            .with("Inspector", "  J. Doe "),
    );
    table.push_row(
        Row::new()
            .with("Unit ID", 613.0)
            .with("Circuit /Equipment Tag", CellValue::Missing)
            .with("Damage Mechanism as per Corrosion Study", "Erosion"),
    );
    table
}

#[test]
fn renames_trims_and_coerces() {
    let normalized = normalize(&scenario_table());
    assert_eq!(
        normalized.columns,
        vec![
            "unit_id",
            "circuit_tag",
            "equipment_id",
            "damage_mechanism",
            "design_pressure_kpag",
            "design_temperature_c",
            "last_inspection_date",
            "max_stcr_mpy",
            "max_ltcr_mpy",
            "risk_rank",
            "Inspector",
        ]
    );
    assert_eq!(normalized.row_count(), 2);

    let first = &normalized.rows[0];
    assert_eq!(first.get("circuit_tag"), &CellValue::text("X"));
    assert_eq!(first.get("damage_mechanism"), &CellValue::text("Pitting"));
    assert_eq!(first.get("design_pressure_kpag"), &CellValue::Number(-5.0));
    assert!(first.get("design_temperature_c").is_missing());
    assert_eq!(first.get("last_inspection_date"), &CellValue::text("12/01/2023"));
    assert!(first.get("max_stcr_mpy").is_missing());
    assert_eq!(first.get("max_ltcr_mpy"), &CellValue::Number(2.5));
    // Unmapped columns pass through untouched.
    assert_eq!(first.get("Inspector"), &CellValue::text("  J. Doe "));

    let second = &normalized.rows[1];
    assert_eq!(second.get("unit_id"), &CellValue::text("613"));
    assert!(second.get("circuit_tag").is_missing());
    assert!(second.get("design_pressure_kpag").is_missing());
}

#[test]
fn absent_columns_stay_absent() {
    let mut table = Table::new(["Unit ID"]).expect("table");
    table.push_row(Row::new().with("Unit ID", " 612 "));
    let normalized = normalize(&table);
    assert_eq!(normalized.columns, vec!["unit_id"]);
    assert_eq!(normalized.rows[0].cells.len(), 1);
    assert_eq!(normalized.rows[0].get("unit_id"), &CellValue::text("612"));
}

#[test]
fn empty_table_normalizes_to_empty() {
    let table = Table::new(["Unit ID", "Risk Rank"]).expect("table");
    let normalized = normalize(&table);
    assert_eq!(normalized.columns, vec!["unit_id", "risk_rank"]);
    assert!(normalized.is_empty());
}

#[test]
fn source_table_is_not_mutated() {
    let table = scenario_table();
    let before = table.clone();
    let _ = normalize(&table);
    assert_eq!(table, before);
}

#[test]
fn normalizing_twice_is_identity_for_scenario() {
    let once = normalize(&scenario_table());
    assert_eq!(normalize(&once), once);
}

fn cell_strategy() -> impl Strategy<Value = CellValue> {
    prop_oneof![
        Just(CellValue::Missing),
        "[ ]{0,2}[A-Za-z0-9./-]{0,8}[ ]{0,2}".prop_map(CellValue::Text),
        (-1.0e6f64..1.0e6).prop_map(CellValue::Number),
    ]
}

proptest! {
    #[test]
    fn normalization_is_idempotent(
        rows in proptest::collection::vec(proptest::collection::vec(cell_strategy(), 6), 0..6)
    ) {
        let columns = [
            "Unit ID",
            "Equipment ID (Asset ID)",
            "Design Pressure (KPag)",
            "Max STCR (MPY)",
            "Risk Rank",
            "Remarks",
        ];
        let mut table = Table::new(columns).expect("table");
        for cells in rows {
            table.push_row(columns.iter().copied().zip(cells).collect());
        }
        let once = normalize(&table);
        let twice = normalize(&once);
        prop_assert_eq!(&once, &twice);
        prop_assert_eq!(once.row_count(), table.row_count());
    }
}
