//! Activity categories and greenhouse-gas accounting scopes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Recognized activity-input categories.
///
/// Serialized names match the upstream JSON API (`fuelPetrol`,
/// `transportCarPetrol`, ...). The declaration order is the fixed evaluation
/// order used throughout the engine: electricity, fuel, transportation,
/// waste, water, paper.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    Electricity,
    FuelPetrol,
    FuelDiesel,
    TransportCarPetrol,
    TransportCarDiesel,
    TransportTruck,
    WasteLandfill,
    WasteRecycled,
    Water,
    Paper,
}

impl Category {
    /// All recognized categories in evaluation order.
    pub const ALL: [Category; 10] = [
        Category::Electricity,
        Category::FuelPetrol,
        Category::FuelDiesel,
        Category::TransportCarPetrol,
        Category::TransportCarDiesel,
        Category::TransportTruck,
        Category::WasteLandfill,
        Category::WasteRecycled,
        Category::Water,
        Category::Paper,
    ];

    /// Wire name of the category (camelCase, as in the JSON API).
    pub fn name(&self) -> &'static str {
        match self {
            Category::Electricity => "electricity",
            Category::FuelPetrol => "fuelPetrol",
            Category::FuelDiesel => "fuelDiesel",
            Category::TransportCarPetrol => "transportCarPetrol",
            Category::TransportCarDiesel => "transportCarDiesel",
            Category::TransportTruck => "transportTruck",
            Category::WasteLandfill => "wasteLandfill",
            Category::WasteRecycled => "wasteRecycled",
            Category::Water => "water",
            Category::Paper => "paper",
        }
    }

    /// Native measurement unit for quantities in this category.
    pub fn unit(&self) -> &'static str {
        match self {
            Category::Electricity => "kWh",
            Category::FuelPetrol | Category::FuelDiesel => "L",
            Category::TransportCarPetrol
            | Category::TransportCarDiesel
            | Category::TransportTruck => "km",
            Category::WasteLandfill | Category::WasteRecycled | Category::Paper => "kg",
            Category::Water => "m³",
        }
    }

    /// GHG accounting scope this category belongs to.
    ///
    /// Total function; the three scope sets partition the category set.
    pub fn scope(&self) -> Scope {
        match self {
            Category::FuelPetrol | Category::FuelDiesel => Scope::Scope1,
            Category::Electricity => Scope::Scope2,
            Category::TransportCarPetrol
            | Category::TransportCarDiesel
            | Category::TransportTruck
            | Category::WasteLandfill
            | Category::WasteRecycled
            | Category::Water
            | Category::Paper => Scope::Scope3,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Standard greenhouse-gas accounting scopes.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Scope {
    Scope1,
    Scope2,
    Scope3,
}

impl Scope {
    /// Display metadata for this scope.
    pub fn info(&self) -> &'static ScopeInfo {
        match self {
            Scope::Scope1 => &SCOPE_1_INFO,
            Scope::Scope2 => &SCOPE_2_INFO,
            Scope::Scope3 => &SCOPE_3_INFO,
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::Scope1 => write!(f, "scope1"),
            Scope::Scope2 => write!(f, "scope2"),
            Scope::Scope3 => write!(f, "scope3"),
        }
    }
}

/// Display metadata attached to a scope in reports and charts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScopeInfo {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub color: &'static str,
}

pub static SCOPE_1_INFO: ScopeInfo = ScopeInfo {
    id: "scope1",
    label: "Scope 1: Direct Emissions",
    description: "Direct GHG emissions from owned or controlled sources",
    color: "#ef4444",
};

pub static SCOPE_2_INFO: ScopeInfo = ScopeInfo {
    id: "scope2",
    label: "Scope 2: Indirect Emissions",
    description: "Indirect GHG emissions from purchased electricity, heat, or steam",
    color: "#f59e0b",
};

pub static SCOPE_3_INFO: ScopeInfo = ScopeInfo {
    id: "scope3",
    label: "Scope 3: Value Chain Emissions",
    description: "Indirect emissions from value chain activities",
    color: "#3b82f6",
};

#[cfg(test)]
mod tests {
    use super::{Category, Scope};
    use std::collections::HashSet;

    #[test]
    fn test_scope_partition() {
        // Every category maps to exactly one scope, and all three scopes
        // together cover the full category set.
        let mut seen_scopes = HashSet::new();
        for category in Category::ALL {
            seen_scopes.insert(category.scope());
        }
        assert_eq!(seen_scopes.len(), 3);
    }

    #[test]
    fn test_scope1_is_fuel_only() {
        let scope1: Vec<Category> = Category::ALL
            .into_iter()
            .filter(|c| c.scope() == Scope::Scope1)
            .collect();
        assert_eq!(scope1, vec![Category::FuelPetrol, Category::FuelDiesel]);
    }

    #[test]
    fn test_scope2_is_electricity_only() {
        let scope2: Vec<Category> = Category::ALL
            .into_iter()
            .filter(|c| c.scope() == Scope::Scope2)
            .collect();
        assert_eq!(scope2, vec![Category::Electricity]);
    }

    #[test]
    fn test_category_serde_names() {
        let json = serde_json::to_string(&Category::TransportCarPetrol).unwrap();
        assert_eq!(json, "\"transportCarPetrol\"");
        let back: Category = serde_json::from_str("\"wasteLandfill\"").unwrap();
        assert_eq!(back, Category::WasteLandfill);
    }

    #[test]
    fn test_category_display_matches_wire_name() {
        for category in Category::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category));
        }
    }

    #[test]
    fn test_units() {
        assert_eq!(Category::Electricity.unit(), "kWh");
        assert_eq!(Category::FuelDiesel.unit(), "L");
        assert_eq!(Category::TransportTruck.unit(), "km");
        assert_eq!(Category::Water.unit(), "m³");
        assert_eq!(Category::Paper.unit(), "kg");
    }

    #[test]
    fn test_scope_info() {
        assert_eq!(Scope::Scope1.info().id, "scope1");
        assert_eq!(Scope::Scope2.info().color, "#f59e0b");
        assert!(Scope::Scope3.info().label.contains("Value Chain"));
    }
}
