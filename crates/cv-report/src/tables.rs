//! State and process tables.
//!
//! Row order follows input order in both tables; the states trace the
//! working fluid around the cycle and the process totals must accumulate in
//! that same sequence so repeated renders agree bit-for-bit.

use cv_core::DisplayScale;
use cv_core::format::{exponential, fixed};
use cv_model::{ProcessStep, Quality, StatePoint};

/// One formatted state-table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateRow {
    pub name: String,
    pub temperature: String,
    pub pressure: String,
    pub volume: String,
    pub enthalpy: String,
    pub entropy: String,
    pub exergy: String,
    pub quality: String,
}

/// Lazily format state points for display. The iterator borrows its inputs,
/// so calling again restarts a fresh pass.
pub fn state_rows<'a>(
    states: &'a [StatePoint],
    scale: &'a DisplayScale,
) -> impl Iterator<Item = StateRow> + 'a {
    states.iter().map(move |state| StateRow {
        name: state.name.clone(),
        temperature: fixed(scale.temperature(state.temperature), 1),
        pressure: fixed(state.pressure * scale.pressure_factor, 2),
        volume: exponential(state.volume * scale.volume_factor, 4),
        enthalpy: fixed(state.enthalpy * scale.energy_factor, 2),
        entropy: fixed(state.entropy * scale.entropy_factor, 4),
        exergy: fixed(state.exergy * scale.energy_factor, 2),
        quality: match &state.quality {
            Quality::Value(x) => fixed(*x, 2),
            Quality::Label(label) => label.clone(),
        },
    })
}

/// One formatted process-table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessRow {
    pub name: String,
    pub transition: String,
    pub heat: String,
    pub work: String,
}

/// Formatted process rows plus grand totals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessTable {
    pub rows: Vec<ProcessRow>,
    pub heat_total: String,
    pub work_total: String,
}

/// Format the process table. Totals sum the unit-scaled values, not the raw
/// SI ones, in input order.
pub fn process_table(processes: &[ProcessStep], scale: &DisplayScale) -> ProcessTable {
    let mut heat_total = 0.0;
    let mut work_total = 0.0;
    let rows = processes
        .iter()
        .map(|process| {
            let heat = process.heat * scale.energy_factor;
            let work = process.work * scale.energy_factor;
            heat_total += heat;
            work_total += work;
            ProcessRow {
                name: process.name.clone(),
                transition: format!("{} → {}", process.state_in, process.state_out),
                heat: fixed(heat, 2),
                work: fixed(work, 2),
            }
        })
        .collect();
    ProcessTable {
        rows,
        heat_total: fixed(heat_total, 2),
        work_total: fixed(work_total, 2),
    }
}
