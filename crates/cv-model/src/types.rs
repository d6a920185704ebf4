//! Cycle result data as received from the service, SI-canonical.

use crate::wire::{ResponseBody, WireCycle, WireProcess, WireState};
use crate::{ModelError, ModelResult};

/// Vapor quality: a mass fraction for two-phase states, or a pass-through
/// label ("superheated", "—") for single-phase ones.
#[derive(Debug, Clone, PartialEq)]
pub enum Quality {
    Value(f64),
    Label(String),
}

/// Plant-level summary metrics, efficiencies as fractions in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CycleSummary {
    pub thermal_efficiency: f64,
    pub back_work_ratio: f64,
    pub exergetic_efficiency: f64,
}

/// One equilibrium point around the cycle. Units: °C, MPa, m³/kg, kJ/kg,
/// kJ/kg·K.
#[derive(Debug, Clone, PartialEq)]
pub struct StatePoint {
    pub name: String,
    pub temperature: f64,
    pub pressure: f64,
    pub volume: f64,
    pub enthalpy: f64,
    pub entropy: f64,
    pub exergy: f64,
    pub quality: Quality,
}

/// Transition between two state points, heat and work per unit mass (kJ/kg).
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessStep {
    pub name: String,
    pub state_in: String,
    pub state_out: String,
    pub heat: f64,
    pub work: f64,
}

/// Full response from one cycle computation. State and process order is the
/// cycle sequence and is preserved from the wire.
#[derive(Debug, Clone, PartialEq)]
pub struct CycleResult {
    pub summary: CycleSummary,
    pub states: Vec<StatePoint>,
    pub processes: Vec<ProcessStep>,
}

impl CycleResult {
    /// Parse a full `{"cycle": {...}}` response body.
    pub fn from_json(body: &str) -> ModelResult<Self> {
        let parsed: ResponseBody = serde_json::from_str(body).map_err(ModelError::Malformed)?;
        Ok(parsed.cycle.into())
    }
}

impl From<WireCycle> for CycleResult {
    fn from(wire: WireCycle) -> Self {
        CycleResult {
            summary: CycleSummary {
                thermal_efficiency: wire.en_eff,
                back_work_ratio: wire.bwr,
                exergetic_efficiency: wire.ex_eff,
            },
            states: wire.states.into_iter().map(Into::into).collect(),
            processes: wire.processes.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<WireState> for StatePoint {
    fn from(wire: WireState) -> Self {
        StatePoint {
            name: wire.name,
            temperature: wire.temperature,
            pressure: wire.pressure,
            volume: wire.volume,
            enthalpy: wire.enthalpy,
            entropy: wire.entropy,
            exergy: wire.exergy,
            quality: wire.quality,
        }
    }
}

impl From<WireProcess> for ProcessStep {
    fn from(wire: WireProcess) -> Self {
        ProcessStep {
            name: wire.name,
            state_in: wire.state_in,
            state_out: wire.state_out,
            heat: wire.heat,
            work: wire.work,
        }
    }
}
