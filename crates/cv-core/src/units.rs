//! Unit systems and conversion profiles for cycle data.
//!
//! The cycle service speaks SI internally (MPa, °C, m³/kg, kJ/kg, kJ/kg·K);
//! the Imperial surface uses lbf/in², °F, ft³/lb, Btu/lb, Btu/lb·°R. A
//! [`UnitProfile`] converts values expressed in the *other* system into its
//! own, so the Imperial profile's factors are exact reciprocals of the SI
//! profile's. Temperature is affine rather than multiplicative; the shift is
//! applied on the Fahrenheit side in both directions so the two profiles
//! compose to the identity.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::CvError;

/// psi -> MPa
pub const PSI_TO_MPA: f64 = 0.006_894_76;
/// Btu/lbm -> kJ/kg
pub const BTU_LB_TO_KJ_KG: f64 = 2.326;
/// Btu/lb·°R -> kJ/kg·K
pub const BTU_LB_R_TO_KJ_KG_K: f64 = 4.186_8;
/// ft³/lb -> m³/kg
pub const FT3_LB_TO_M3_KG: f64 = 0.062_428;
/// °F -> °C scale
pub const F_TO_C_FACTOR: f64 = 5.0 / 9.0;
/// Offset between the scales, in °F
pub const F_TO_C_SHIFT: f64 = -32.0;

/// Which unit system a value is expressed in (or should be displayed in).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum UnitSystem {
    #[default]
    Si,
    Imperial,
}

impl UnitSystem {
    /// Conversion profile that maps the other system's values into this one.
    pub fn profile(self) -> UnitProfile {
        match self {
            UnitSystem::Si => UnitProfile {
                system: self,
                pressure_factor: PSI_TO_MPA,
                energy_factor: BTU_LB_TO_KJ_KG,
                entropy_factor: BTU_LB_R_TO_KJ_KG_K,
                volume_factor: FT3_LB_TO_M3_KG,
                temperature_factor: F_TO_C_FACTOR,
                temperature_shift: F_TO_C_SHIFT,
                labels: SI_LABELS,
            },
            UnitSystem::Imperial => UnitProfile {
                system: self,
                pressure_factor: 1.0 / PSI_TO_MPA,
                energy_factor: 1.0 / BTU_LB_TO_KJ_KG,
                entropy_factor: 1.0 / BTU_LB_R_TO_KJ_KG_K,
                volume_factor: 1.0 / FT3_LB_TO_M3_KG,
                temperature_factor: 1.0 / F_TO_C_FACTOR,
                temperature_shift: -F_TO_C_SHIFT,
                labels: IMPERIAL_LABELS,
            },
        }
    }

    /// Scaling applied when rendering SI-canonical service data for display.
    ///
    /// The service always reports SI values, so the SI target is the
    /// identity and the Imperial target is the Imperial profile.
    pub fn display_scale(self) -> DisplayScale {
        match self {
            UnitSystem::Si => DisplayScale {
                pressure_factor: 1.0,
                energy_factor: 1.0,
                entropy_factor: 1.0,
                volume_factor: 1.0,
                temperature_factor: 1.0,
                temperature_shift: 0.0,
                labels: SI_LABELS,
            },
            UnitSystem::Imperial => {
                let p = self.profile();
                DisplayScale {
                    pressure_factor: p.pressure_factor,
                    energy_factor: p.energy_factor,
                    entropy_factor: p.entropy_factor,
                    volume_factor: p.volume_factor,
                    temperature_factor: p.temperature_factor,
                    temperature_shift: p.temperature_shift,
                    labels: p.labels,
                }
            }
        }
    }

    /// True iff requests against the cycle service should set `useSI`.
    pub fn use_si(self) -> bool {
        matches!(self, UnitSystem::Si)
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitSystem::Si => write!(f, "si"),
            UnitSystem::Imperial => write!(f, "imperial"),
        }
    }
}

impl FromStr for UnitSystem {
    type Err = CvError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "si" => Ok(UnitSystem::Si),
            "imperial" | "us" | "english" => Ok(UnitSystem::Imperial),
            _ => Err(CvError::InvalidArg {
                what: "unit system (expected 'si' or 'imperial')",
            }),
        }
    }
}

/// Unit label strings for the five displayed quantities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitLabels {
    pub pressure: &'static str,
    pub temperature: &'static str,
    pub energy: &'static str,
    pub entropy: &'static str,
    pub volume: &'static str,
}

const SI_LABELS: UnitLabels = UnitLabels {
    pressure: "MPa",
    temperature: "°C",
    energy: "kJ/kg",
    entropy: "kJ/kg·K",
    volume: "m³/kg",
};

const IMPERIAL_LABELS: UnitLabels = UnitLabels {
    pressure: "lbf/in²",
    temperature: "°F",
    energy: "Btu/lb",
    entropy: "Btu/lb·°R",
    volume: "ft³/lb",
};

/// Conversion factors and labels for one unit system, fully determined by
/// [`UnitSystem`]. Cheap to build; recompute at every use site rather than
/// caching.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitProfile {
    pub system: UnitSystem,
    pub pressure_factor: f64,
    pub energy_factor: f64,
    pub entropy_factor: f64,
    pub volume_factor: f64,
    pub temperature_factor: f64,
    pub temperature_shift: f64,
    pub labels: UnitLabels,
}

impl UnitProfile {
    /// Convert a temperature from the other system into this one.
    ///
    /// The shift is in °F, so F->C adds it before scaling and C->F adds it
    /// after: `(212 - 32) * 5/9 == 100`, `100 * 9/5 + 32 == 212`.
    pub fn convert_temperature(&self, t: f64) -> f64 {
        match self.system {
            UnitSystem::Si => (t + self.temperature_shift) * self.temperature_factor,
            UnitSystem::Imperial => t * self.temperature_factor + self.temperature_shift,
        }
    }
}

/// Rescale a pressure input field after the unit selector changes.
///
/// Multiplies by the newly selected profile's pressure factor. Stateless by
/// design: the field itself is the only storage, so repeated toggling
/// accumulates floating-point rounding.
pub fn rescale_pressure_input(value: f64, new_profile: &UnitProfile) -> f64 {
    value * new_profile.pressure_factor
}

/// Multipliers applied to SI-canonical service data when rendering.
///
/// Temperature uses the post-shift affine form `t * factor + shift`, which
/// covers both the identity (SI) and C->F (Imperial) cases.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayScale {
    pub pressure_factor: f64,
    pub energy_factor: f64,
    pub entropy_factor: f64,
    pub volume_factor: f64,
    pub temperature_factor: f64,
    pub temperature_shift: f64,
    pub labels: UnitLabels,
}

impl DisplayScale {
    pub fn temperature(&self, t: f64) -> f64 {
        t * self.temperature_factor + self.temperature_shift
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
    }

    #[test]
    fn imperial_factors_are_reciprocals() {
        let si = UnitSystem::Si.profile();
        let imp = UnitSystem::Imperial.profile();
        assert!(close(imp.pressure_factor, 1.0 / si.pressure_factor));
        assert!(close(imp.energy_factor, 1.0 / si.energy_factor));
        assert!(close(imp.entropy_factor, 1.0 / si.entropy_factor));
        assert!(close(imp.volume_factor, 1.0 / si.volume_factor));
    }

    #[test]
    fn boiling_point_converts_both_ways() {
        let si = UnitSystem::Si.profile();
        let imp = UnitSystem::Imperial.profile();
        assert!(close(si.convert_temperature(212.0), 100.0));
        assert!(close(imp.convert_temperature(100.0), 212.0));
    }

    #[test]
    fn freezing_point_converts_both_ways() {
        let si = UnitSystem::Si.profile();
        let imp = UnitSystem::Imperial.profile();
        assert!(close(si.convert_temperature(32.0), 0.0));
        assert!(close(imp.convert_temperature(0.0), 32.0));
    }

    #[test]
    fn pressure_rescale_round_trip() {
        let si = UnitSystem::Si.profile();
        let imp = UnitSystem::Imperial.profile();
        let original = 14.696;
        let as_si = rescale_pressure_input(original, &si);
        let back = rescale_pressure_input(as_si, &imp);
        assert!(close(back, original));
    }

    #[test]
    fn si_display_scale_is_identity() {
        let scale = UnitSystem::Si.display_scale();
        assert_eq!(scale.pressure_factor, 1.0);
        assert_eq!(scale.energy_factor, 1.0);
        assert_eq!(scale.temperature(300.0), 300.0);
        assert_eq!(scale.labels.pressure, "MPa");
    }

    #[test]
    fn imperial_display_scale_converts_up() {
        let scale = UnitSystem::Imperial.display_scale();
        assert!(close(scale.pressure_factor * PSI_TO_MPA, 1.0));
        assert!(close(scale.temperature(100.0), 212.0));
        assert_eq!(scale.labels.pressure, "lbf/in²");
    }

    #[test]
    fn parses_selector_text() {
        assert_eq!("si".parse::<UnitSystem>().unwrap(), UnitSystem::Si);
        assert_eq!("SI".parse::<UnitSystem>().unwrap(), UnitSystem::Si);
        assert_eq!(
            "Imperial".parse::<UnitSystem>().unwrap(),
            UnitSystem::Imperial
        );
        assert!("metric-ish".parse::<UnitSystem>().is_err());
    }
}
