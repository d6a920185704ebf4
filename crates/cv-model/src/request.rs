//! Outbound request parameters for the `/_runcycle` endpoint.

use cv_core::{UnitSystem, ensure_finite};
use serde::Serialize;

use crate::{ModelError, ModelResult};

/// One cycle-computation request.
///
/// Pressures are in the units of `unit_system` (the service interprets them
/// via the `useSI` flag); efficiencies are fractions in `[0, 1]`.
#[derive(Debug, Clone, Serialize)]
pub struct CycleRequest {
    pub fluid: String,
    pub high_pressure: f64,
    pub low_pressure: f64,
    pub turbine_efficiency: f64,
    pub pump_efficiency: f64,
    pub unit_system: UnitSystem,
}

impl CycleRequest {
    pub fn validate(&self) -> ModelResult<()> {
        ensure_finite(self.high_pressure, "high pressure")?;
        ensure_finite(self.low_pressure, "low pressure")?;
        ensure_finite(self.turbine_efficiency, "turbine efficiency")?;
        ensure_finite(self.pump_efficiency, "pump efficiency")?;
        if self.fluid.trim().is_empty() {
            return Err(ModelError::InvalidRequest {
                what: "working fluid must be non-empty",
            });
        }
        if self.high_pressure < 0.0 || self.low_pressure < 0.0 {
            return Err(ModelError::InvalidRequest {
                what: "pressures must be non-negative",
            });
        }
        if self.high_pressure < self.low_pressure {
            return Err(ModelError::InvalidRequest {
                what: "high pressure must be at or above low pressure",
            });
        }
        for eff in [self.turbine_efficiency, self.pump_efficiency] {
            if !(0.0..=1.0).contains(&eff) {
                return Err(ModelError::InvalidRequest {
                    what: "efficiencies must be fractions in [0, 1]",
                });
            }
        }
        Ok(())
    }

    /// Query parameters in the service's expected names and encodings.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("workingFluid", self.fluid.clone()),
            ("highPressure", self.high_pressure.to_string()),
            ("lowPressure", self.low_pressure.to_string()),
            ("turbineEfficiency", self.turbine_efficiency.to_string()),
            ("pumpEfficiency", self.pump_efficiency.to_string()),
            ("useSI", self.unit_system.use_si().to_string()),
        ]
    }
}

/// Convert a 0-100 percentage input into the fractional efficiency the
/// service expects.
pub fn efficiency_from_percent(percent: f64) -> ModelResult<f64> {
    ensure_finite(percent, "efficiency percentage")?;
    if !(0.0..=100.0).contains(&percent) {
        return Err(ModelError::InvalidRequest {
            what: "efficiency percentage must be in [0, 100]",
        });
    }
    Ok(percent / 100.0)
}
