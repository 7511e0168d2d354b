//! Emission factors and the lookup table applied during calculation.
//!
//! Factors are kilograms of CO₂-equivalent per one unit of the category's
//! measurement unit, based on standard EPA and related agency figures. The
//! full published set lives in the constant submodules here; the
//! [`EmissionFactorTable`] holds the single factor applied per input category
//! and can be overridden through configuration (e.g. a renewable electricity
//! contract).

use super::category::Category;
use serde::{Deserialize, Serialize};

/// Electricity factors, per kWh.
pub mod electricity {
    pub const GRID_AVERAGE: f64 = 0.92;
    pub const RENEWABLE: f64 = 0.0;
    pub const COAL: f64 = 1.05;
    pub const NATURAL_GAS: f64 = 0.45;
}

/// Fuel factors, per liter.
pub mod fuel {
    pub const PETROL: f64 = 2.31;
    pub const DIESEL: f64 = 2.68;
    pub const LPG: f64 = 1.51;
    pub const CNG: f64 = 1.93;
}

/// Transportation factors, per km.
pub mod transport {
    pub const CAR_PETROL: f64 = 0.192;
    pub const CAR_DIESEL: f64 = 0.171;
    pub const TRUCK: f64 = 0.285;
    pub const FLIGHT_SHORT: f64 = 0.255;
    pub const FLIGHT_LONG: f64 = 0.195;
    pub const TRAIN: f64 = 0.041;
}

/// Waste factors, per kg.
pub mod waste {
    pub const LANDFILL: f64 = 0.5;
    pub const RECYCLED: f64 = 0.1;
    pub const COMPOSTED: f64 = 0.05;
    pub const INCINERATED: f64 = 0.7;
}

/// Water factor, per cubic meter.
pub const WATER: f64 = 0.344;

/// Paper factor, per kg.
pub const PAPER: f64 = 1.8;

/// Read-only table mapping each input category to the factor applied during
/// calculation.
///
/// [`Default`] uses the grid-average electricity mix and the standard factor
/// for every other category, matching the upstream calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmissionFactorTable {
    pub electricity: f64,
    pub fuel_petrol: f64,
    pub fuel_diesel: f64,
    pub transport_car_petrol: f64,
    pub transport_car_diesel: f64,
    pub transport_truck: f64,
    pub waste_landfill: f64,
    pub waste_recycled: f64,
    pub water: f64,
    pub paper: f64,
}

impl Default for EmissionFactorTable {
    fn default() -> Self {
        Self {
            electricity: electricity::GRID_AVERAGE,
            fuel_petrol: fuel::PETROL,
            fuel_diesel: fuel::DIESEL,
            transport_car_petrol: transport::CAR_PETROL,
            transport_car_diesel: transport::CAR_DIESEL,
            transport_truck: transport::TRUCK,
            waste_landfill: waste::LANDFILL,
            waste_recycled: waste::RECYCLED,
            water: WATER,
            paper: PAPER,
        }
    }
}

impl EmissionFactorTable {
    /// Factor for a category. Total lookup; every category has a factor.
    pub fn factor(&self, category: Category) -> f64 {
        match category {
            Category::Electricity => self.electricity,
            Category::FuelPetrol => self.fuel_petrol,
            Category::FuelDiesel => self.fuel_diesel,
            Category::TransportCarPetrol => self.transport_car_petrol,
            Category::TransportCarDiesel => self.transport_car_diesel,
            Category::TransportTruck => self.transport_truck,
            Category::WasteLandfill => self.waste_landfill,
            Category::WasteRecycled => self.waste_recycled,
            Category::Water => self.water,
            Category::Paper => self.paper,
        }
    }
}
