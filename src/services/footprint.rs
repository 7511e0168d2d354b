//! Carbon footprint calculation from raw activity inputs.

use crate::error::{EngineError, EngineResult};
use crate::models::{Category, EmissionFactorTable, KgCo2e, Scope};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Raw activity quantities for one calculation period.
///
/// Each field is in the category's native unit (kWh, liters, km, kg, m³).
/// Absent fields contribute nothing and never appear in the result breakdown.
/// A supplied zero is treated the same as absent, matching the upstream
/// calculator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ActivityInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub electricity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fuel_petrol: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fuel_diesel: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transport_car_petrol: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transport_car_diesel: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transport_truck: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub waste_landfill: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub waste_recycled: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub water: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paper: Option<f64>,
}

impl ActivityInput {
    /// Quantity supplied for a category, if any.
    ///
    /// Total over the recognized category set, so the calculator resolves
    /// every field exactly once instead of scattering per-field fallbacks.
    pub fn quantity(&self, category: Category) -> Option<f64> {
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

    /// Reject negative and non-finite quantities before any factor is applied.
    fn validate(&self) -> EngineResult<()> {
        for category in Category::ALL {
            if let Some(quantity) = self.quantity(category) {
                if !quantity.is_finite() {
                    return Err(EngineError::validation(format!(
                        "quantity for {} is not a finite number",
                        category
                    )));
                }
                if quantity < 0.0 {
                    return Err(EngineError::validation(format!(
                        "quantity for {} is negative: {}",
                        category, quantity
                    )));
                }
            }
        }
        Ok(())
    }
}

/// Per-scope subtotal with display metadata for reports and charts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScopeSummary {
    pub label: String,
    pub description: String,
    pub color: String,
    pub value: KgCo2e,
    /// Share of the total in percent. Reported as 0.0 when the total is
    /// exactly zero; never NaN.
    pub percentage: f64,
}

/// Scope summaries for one calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScopeBreakdown {
    pub scope1: ScopeSummary,
    pub scope2: ScopeSummary,
    pub scope3: ScopeSummary,
}

/// Result of one footprint calculation.
///
/// Produced fresh per call and owned solely by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmissionsResult {
    pub total_kg: KgCo2e,
    pub total_tons: f64,
    pub scope1: KgCo2e,
    pub scope2: KgCo2e,
    pub scope3: KgCo2e,
    /// Emissions per category, only for categories present in the input.
    pub breakdown: BTreeMap<Category, KgCo2e>,
    pub scopes: ScopeBreakdown,
}

fn scope_summary(scope: Scope, value: f64, total: f64) -> ScopeSummary {
    let info = scope.info();
    // Zero-total policy: a calculation with no emissions reports 0% per scope.
    let percentage = if total == 0.0 {
        0.0
    } else {
        value / total * 100.0
    };
    ScopeSummary {
        label: info.label.to_string(),
        description: info.description.to_string(),
        color: info.color.to_string(),
        value: KgCo2e::new(value),
        percentage,
    }
}

/// Calculate a carbon footprint using the default emission-factor table.
pub fn calculate_footprint(input: &ActivityInput) -> EngineResult<EmissionsResult> {
    calculate_footprint_with_table(input, &EmissionFactorTable::default())
}

/// Calculate a carbon footprint with an injected emission-factor table.
///
/// For each present category the quantity is multiplied by the category's
/// factor; the product is added to exactly one scope subtotal and recorded
/// verbatim in the breakdown. `total = scope1 + scope2 + scope3`.
pub fn calculate_footprint_with_table(
    input: &ActivityInput,
    table: &EmissionFactorTable,
) -> EngineResult<EmissionsResult> {
    input.validate()?;

    let mut scope1 = 0.0f64;
    let mut scope2 = 0.0f64;
    let mut scope3 = 0.0f64;
    let mut breakdown = BTreeMap::new();

    for category in Category::ALL {
        let Some(quantity) = input.quantity(category) else {
            continue;
        };
        if quantity == 0.0 {
            // Upstream treats a supplied zero as absent.
            continue;
        }

        let kg = quantity * table.factor(category);
        match category.scope() {
            Scope::Scope1 => scope1 += kg,
            Scope::Scope2 => scope2 += kg,
            Scope::Scope3 => scope3 += kg,
        }
        breakdown.insert(category, KgCo2e::new(kg));
    }

    let total = scope1 + scope2 + scope3;
    debug!(
        "calculated footprint: total={:.3} kg across {} categories",
        total,
        breakdown.len()
    );

    Ok(EmissionsResult {
        total_kg: KgCo2e::new(total),
        total_tons: KgCo2e::new(total).to_tons(),
        scope1: KgCo2e::new(scope1),
        scope2: KgCo2e::new(scope2),
        scope3: KgCo2e::new(scope3),
        breakdown,
        scopes: ScopeBreakdown {
            scope1: scope_summary(Scope::Scope1, scope1, total),
            scope2: scope_summary(Scope::Scope2, scope2, total),
            scope3: scope_summary(Scope::Scope3, scope3, total),
        },
    })
}
