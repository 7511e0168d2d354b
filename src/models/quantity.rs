use serde::*;

/// Kilograms of CO₂-equivalent.
///
/// Thin wrapper so emission values cannot be confused with raw activity
/// quantities. Arithmetic is done on raw f64 values and wrapped at the edges.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KgCo2e(f64);

/// Fixed conversion constant from kilograms to metric tons.
pub const KG_TO_TONS: f64 = 0.001;

impl KgCo2e {
    /// Create a new CO₂e value in kilograms.
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    /// Raw value in kilograms as f64.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Value converted to metric tons.
    pub fn to_tons(&self) -> f64 {
        self.0 * KG_TO_TONS
    }
}

impl From<f64> for KgCo2e {
    fn from(v: f64) -> Self {
        KgCo2e::new(v)
    }
}

impl std::fmt::Display for KgCo2e {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} kg CO2e", self.0)
    }
}
