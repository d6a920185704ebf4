//! End-to-end rendering: wire JSON in, formatted tables out.

use cv_core::UnitSystem;
use cv_model::CycleResult;
use cv_report::{process_table, render_summary, state_rows};

const BODY: &str = r#"{
    "cycle": {
        "en_eff": 0.3341,
        "bwr": 0.0047,
        "ex_eff": 0.8052,
        "states": [
            {"name": "1", "T": 295.01, "p": 8.0, "v": 0.0235,
             "h": 2758.0, "s": 5.7432, "ef": 920.51, "x": 1.0},
            {"name": "2", "T": 41.51, "p": 0.008, "v": 18.1,
             "h": 1794.82, "s": 5.7432, "ef": 120.22, "x": 0.6938},
            {"name": "3", "T": 41.51, "p": 0.008, "v": 0.001,
             "h": 173.88, "s": 0.5926, "ef": 1.4, "x": 0.0},
            {"name": "4", "T": 41.83, "p": 8.0, "v": 0.001,
             "h": 181.94, "s": 0.5926, "ef": 9.46, "x": "subcooled"}
        ],
        "processes": [
            {"name": "pump", "state_in": "3", "state_out": "4",
             "heat": 0.0, "work": -8.06},
            {"name": "boiler", "state_in": "4", "state_out": "1",
             "heat": 2576.06, "work": 0.0},
            {"name": "turbine", "state_in": "1", "state_out": "2",
             "heat": 0.0, "work": 963.18},
            {"name": "condenser", "state_in": "2", "state_out": "3",
             "heat": -1620.94, "work": 0.0}
        ]
    }
}"#;

#[test]
fn renders_si_tables_from_wire_json() {
    let result = CycleResult::from_json(BODY).unwrap();
    let scale = UnitSystem::Si.display_scale();

    let summary = render_summary(&result.summary);
    assert_eq!(summary.thermal_efficiency, "33.41 %");
    assert_eq!(summary.back_work_ratio, "4.70e-3");
    assert_eq!(summary.exergetic_efficiency, "80.52 %");

    let rows: Vec<_> = state_rows(&result.states, &scale).collect();
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[0].temperature, "295.0");
    assert_eq!(rows[0].pressure, "8.00");
    assert_eq!(rows[0].volume, "2.3500e-2");
    assert_eq!(rows[1].quality, "0.69");
    assert_eq!(rows[3].quality, "subcooled");

    let table = process_table(&result.processes, &scale);
    assert_eq!(table.rows.len(), 4);
    assert_eq!(table.rows[2].transition, "1 → 2");
    // -8.06 + 963.18
    assert_eq!(table.work_total, "955.12");
    // 2576.06 - 1620.94
    assert_eq!(table.heat_total, "955.12");
}

#[test]
fn renders_imperial_tables_from_wire_json() {
    let result = CycleResult::from_json(BODY).unwrap();
    let scale = UnitSystem::Imperial.display_scale();

    let rows: Vec<_> = state_rows(&result.states, &scale).collect();
    // 295.01 °C -> 563.018 °F; 8 MPa -> 1160.30 psi
    assert_eq!(rows[0].temperature, "563.0");
    assert_eq!(rows[0].pressure, "1160.30");
    // labels unaffected by scaling
    assert_eq!(rows[3].quality, "subcooled");

    let table = process_table(&result.processes, &scale);
    // 963.18 kJ/kg -> 414.09 Btu/lb
    assert_eq!(table.rows[2].work, "414.09");
}
