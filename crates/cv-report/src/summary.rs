//! Plant-level summary metrics as display text.

use cv_core::format::{exponential, fixed};
use cv_model::CycleSummary;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryText {
    pub thermal_efficiency: String,
    pub back_work_ratio: String,
    pub exergetic_efficiency: String,
}

/// Efficiencies render as percentages with two decimals; the back-work
/// ratio is typically O(1e-3) and renders in exponential notation.
pub fn render_summary(summary: &CycleSummary) -> SummaryText {
    SummaryText {
        thermal_efficiency: format!("{} %", fixed(summary.thermal_efficiency * 100.0, 2)),
        back_work_ratio: exponential(summary.back_work_ratio, 2),
        exergetic_efficiency: format!("{} %", fixed(summary.exergetic_efficiency * 100.0, 2)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn efficiencies_render_as_percent() {
        let text = render_summary(&CycleSummary {
            thermal_efficiency: 0.3341,
            back_work_ratio: 0.0047,
            exergetic_efficiency: 0.8,
        });
        assert_eq!(text.thermal_efficiency, "33.41 %");
        assert_eq!(text.exergetic_efficiency, "80.00 %");
    }

    #[test]
    fn back_work_ratio_is_exponential() {
        let text = render_summary(&CycleSummary {
            thermal_efficiency: 0.0,
            back_work_ratio: 0.0047,
            exergetic_efficiency: 0.0,
        });
        assert_eq!(text.back_work_ratio, "4.70e-3");
    }
}
