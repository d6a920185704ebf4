//! Unit labels for table header cells.

use cv_core::DisplayScale;

/// The five header columns that carry a unit label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderColumn {
    Temperature,
    Pressure,
    Volume,
    Energy,
    Entropy,
}

/// Label substitutions for the unit-bearing header cells.
pub fn header_labels(scale: &DisplayScale) -> [(HeaderColumn, &'static str); 5] {
    [
        (HeaderColumn::Temperature, scale.labels.temperature),
        (HeaderColumn::Pressure, scale.labels.pressure),
        (HeaderColumn::Volume, scale.labels.volume),
        (HeaderColumn::Energy, scale.labels.energy),
        (HeaderColumn::Entropy, scale.labels.entropy),
    ]
}
