//! Reduction recommendations derived from an emissions breakdown.

use crate::models::{Category, KgCo2e};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Recommendation priority, ordered high before medium before low.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Sort rank: high=1, medium=2, low=3.
    pub fn rank(&self) -> u8 {
        match self {
            Priority::High => 1,
            Priority::Medium => 2,
            Priority::Low => 3,
        }
    }
}

/// One reduction recommendation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub category: String,
    pub priority: Priority,
    pub title: String,
    pub description: String,
    /// Estimated reduction in kg CO₂e, a fixed fraction of the triggering
    /// emissions.
    pub potential_savings: KgCo2e,
}

const ELECTRICITY_THRESHOLD_KG: f64 = 1000.0;
const FUEL_THRESHOLD_KG: f64 = 500.0;
const TRANSPORT_THRESHOLD_KG: f64 = 300.0;
const WATER_THRESHOLD_KG: f64 = 50.0;

const ELECTRICITY_SAVINGS_FRACTION: f64 = 0.3;
const FUEL_SAVINGS_FRACTION: f64 = 0.25;
const TRANSPORT_SAVINGS_FRACTION: f64 = 0.2;
const WASTE_SAVINGS_FRACTION: f64 = 0.4;
const WATER_SAVINGS_FRACTION: f64 = 0.15;

fn breakdown_value(breakdown: &BTreeMap<Category, KgCo2e>, category: Category) -> f64 {
    // Missing keys read as 0; a missing value never skips a rule.
    breakdown.get(&category).map(|kg| kg.value()).unwrap_or(0.0)
}

/// Generate prioritized reduction recommendations from a breakdown.
///
/// Five fixed rule groups are evaluated in order (electricity, fuel,
/// transportation, waste, water); the result is stably sorted by priority
/// rank, so ties keep that evaluation order.
pub fn recommend(breakdown: &BTreeMap<Category, KgCo2e>) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    let electricity = breakdown_value(breakdown, Category::Electricity);
    if electricity > ELECTRICITY_THRESHOLD_KG {
        recommendations.push(Recommendation {
            category: "electricity".to_string(),
            priority: Priority::High,
            title: "Reduce Electricity Consumption".to_string(),
            description: "Consider switching to renewable energy sources or implementing energy-efficient equipment.".to_string(),
            potential_savings: KgCo2e::new(electricity * ELECTRICITY_SAVINGS_FRACTION),
        });
    }

    let total_fuel = breakdown_value(breakdown, Category::FuelPetrol)
        + breakdown_value(breakdown, Category::FuelDiesel);
    if total_fuel > FUEL_THRESHOLD_KG {
        recommendations.push(Recommendation {
            category: "fuel".to_string(),
            priority: Priority::High,
            title: "Optimize Fuel Usage".to_string(),
            description: "Consider fleet optimization, route planning, or transitioning to electric vehicles.".to_string(),
            potential_savings: KgCo2e::new(total_fuel * FUEL_SAVINGS_FRACTION),
        });
    }

    let total_transport = breakdown_value(breakdown, Category::TransportCarPetrol)
        + breakdown_value(breakdown, Category::TransportCarDiesel)
        + breakdown_value(breakdown, Category::TransportTruck);
    if total_transport > TRANSPORT_THRESHOLD_KG {
        recommendations.push(Recommendation {
            category: "transportation".to_string(),
            priority: Priority::Medium,
            title: "Improve Transportation Efficiency".to_string(),
            description: "Encourage carpooling, remote work, or public transportation for employees.".to_string(),
            potential_savings: KgCo2e::new(total_transport * TRANSPORT_SAVINGS_FRACTION),
        });
    }

    let landfill = breakdown_value(breakdown, Category::WasteLandfill);
    let recycled = breakdown_value(breakdown, Category::WasteRecycled);
    if landfill > recycled {
        recommendations.push(Recommendation {
            category: "waste".to_string(),
            priority: Priority::Medium,
            title: "Increase Recycling Efforts".to_string(),
            description: "Implement a comprehensive recycling program to reduce landfill waste.".to_string(),
            potential_savings: KgCo2e::new(landfill * WASTE_SAVINGS_FRACTION),
        });
    }

    let water = breakdown_value(breakdown, Category::Water);
    if water > WATER_THRESHOLD_KG {
        recommendations.push(Recommendation {
            category: "water".to_string(),
            priority: Priority::Low,
            title: "Water Conservation".to_string(),
            description: "Install water-efficient fixtures and implement water recycling systems.".to_string(),
            potential_savings: KgCo2e::new(water * WATER_SAVINGS_FRACTION),
        });
    }

    // Vec::sort_by_key is stable, preserving evaluation order within a rank.
    recommendations.sort_by_key(|r| r.priority.rank());
    recommendations
}
