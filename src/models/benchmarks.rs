//! Industry benchmark footprints.

use super::quantity::KgCo2e;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Industry sectors tracked by the platform.
///
/// Serialized names match the upstream wire enum (SCREAMING_SNAKE_CASE).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Industry {
    Technology,
    Manufacturing,
    Retail,
    Healthcare,
    Education,
    Hospitality,
    Finance,
    Logistics,
    FoodBeverage,
    Other,
}

impl Industry {
    /// All tracked industries.
    pub const ALL: [Industry; 10] = [
        Industry::Technology,
        Industry::Manufacturing,
        Industry::Retail,
        Industry::Healthcare,
        Industry::Education,
        Industry::Hospitality,
        Industry::Finance,
        Industry::Logistics,
        Industry::FoodBeverage,
        Industry::Other,
    ];

    /// Average monthly footprint for this industry (kg CO₂e).
    pub fn benchmark_kg(&self) -> KgCo2e {
        let kg = match self {
            Industry::Technology => 15000.0,
            Industry::Manufacturing => 45000.0,
            Industry::Retail => 25000.0,
            Industry::Healthcare => 30000.0,
            Industry::Education => 20000.0,
            Industry::Hospitality => 28000.0,
            Industry::Finance => 18000.0,
            Industry::Logistics => 50000.0,
            Industry::FoodBeverage => 35000.0,
            Industry::Other => 25000.0,
        };
        KgCo2e::new(kg)
    }
}

impl fmt::Display for Industry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Industry::Technology => "TECHNOLOGY",
            Industry::Manufacturing => "MANUFACTURING",
            Industry::Retail => "RETAIL",
            Industry::Healthcare => "HEALTHCARE",
            Industry::Education => "EDUCATION",
            Industry::Hospitality => "HOSPITALITY",
            Industry::Finance => "FINANCE",
            Industry::Logistics => "LOGISTICS",
            Industry::FoodBeverage => "FOOD_BEVERAGE",
            Industry::Other => "OTHER",
        };
        write!(f, "{}", name)
    }
}
