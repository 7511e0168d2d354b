//! Engine configuration file support.
//!
//! This module provides utilities for reading emission-factor and benchmark
//! overrides from TOML configuration files. Every setting is optional; the
//! compiled-in defaults match the published factor and benchmark tables.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{EngineError, EngineResult};
use crate::models::{EmissionFactorTable, Industry, KgCo2e};
use log::{info, warn};

/// Engine configuration from file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub factors: FactorOverrides,
    #[serde(default)]
    pub benchmarks: BenchmarkOverrides,
}

/// Per-category emission-factor overrides (kg CO₂e per unit).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FactorOverrides {
    pub electricity: Option<f64>,
    pub fuel_petrol: Option<f64>,
    pub fuel_diesel: Option<f64>,
    pub transport_car_petrol: Option<f64>,
    pub transport_car_diesel: Option<f64>,
    pub transport_truck: Option<f64>,
    pub waste_landfill: Option<f64>,
    pub waste_recycled: Option<f64>,
    pub water: Option<f64>,
    pub paper: Option<f64>,
}

/// Per-industry benchmark overrides (kg CO₂e per month).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BenchmarkOverrides {
    pub technology: Option<f64>,
    pub manufacturing: Option<f64>,
    pub retail: Option<f64>,
    pub healthcare: Option<f64>,
    pub education: Option<f64>,
    pub hospitality: Option<f64>,
    pub finance: Option<f64>,
    pub logistics: Option<f64>,
    pub food_beverage: Option<f64>,
    pub other: Option<f64>,
}

impl BenchmarkOverrides {
    fn for_industry(&self, industry: Industry) -> Option<f64> {
        match industry {
            Industry::Technology => self.technology,
            Industry::Manufacturing => self.manufacturing,
            Industry::Retail => self.retail,
            Industry::Healthcare => self.healthcare,
            Industry::Education => self.education,
            Industry::Hospitality => self.hospitality,
            Industry::Finance => self.finance,
            Industry::Logistics => self.logistics,
            Industry::FoodBeverage => self.food_beverage,
            Industry::Other => self.other,
        }
    }
}

fn merge(default: f64, override_value: Option<f64>, name: &str) -> EngineResult<f64> {
    match override_value {
        None => Ok(default),
        Some(value) if value.is_finite() && value >= 0.0 => Ok(value),
        Some(value) => Err(EngineError::configuration(format!(
            "override for {} must be a non-negative number, got {}",
            name, value
        ))),
    }
}

impl EngineConfig {
    /// Load engine configuration from a TOML file.
    ///
    /// # Returns
    /// * `Ok(EngineConfig)` if successful
    /// * `Err(EngineError)` if file cannot be read or parsed
    pub fn from_file<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            EngineError::configuration(format!("Failed to read config file: {}", e))
        })?;

        let config: EngineConfig = toml::from_str(&content).map_err(|e| {
            EngineError::configuration(format!("Failed to parse config file: {}", e))
        })?;

        info!("loaded engine config from {}", path.as_ref().display());
        Ok(config)
    }

    /// Load engine configuration from the default location.
    ///
    /// Searches for `greentrace.toml` in:
    /// 1. Current directory
    /// 2. `config/` directory
    /// 3. Parent directory
    ///
    /// Falls back to the compiled-in defaults when no file exists.
    pub fn from_default_location() -> EngineResult<Self> {
        let search_paths = vec![
            PathBuf::from("greentrace.toml"),
            PathBuf::from("config/greentrace.toml"),
            PathBuf::from("../greentrace.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        warn!("no greentrace.toml found in standard locations, using defaults");
        Ok(Self::default())
    }

    /// Build the emission-factor table with overrides applied.
    pub fn factor_table(&self) -> EngineResult<EmissionFactorTable> {
        let defaults = EmissionFactorTable::default();
        let f = &self.factors;
        Ok(EmissionFactorTable {
            electricity: merge(defaults.electricity, f.electricity, "factors.electricity")?,
            fuel_petrol: merge(defaults.fuel_petrol, f.fuel_petrol, "factors.fuel_petrol")?,
            fuel_diesel: merge(defaults.fuel_diesel, f.fuel_diesel, "factors.fuel_diesel")?,
            transport_car_petrol: merge(
                defaults.transport_car_petrol,
                f.transport_car_petrol,
                "factors.transport_car_petrol",
            )?,
            transport_car_diesel: merge(
                defaults.transport_car_diesel,
                f.transport_car_diesel,
                "factors.transport_car_diesel",
            )?,
            transport_truck: merge(
                defaults.transport_truck,
                f.transport_truck,
                "factors.transport_truck",
            )?,
            waste_landfill: merge(
                defaults.waste_landfill,
                f.waste_landfill,
                "factors.waste_landfill",
            )?,
            waste_recycled: merge(
                defaults.waste_recycled,
                f.waste_recycled,
                "factors.waste_recycled",
            )?,
            water: merge(defaults.water, f.water, "factors.water")?,
            paper: merge(defaults.paper, f.paper, "factors.paper")?,
        })
    }

    /// Benchmark for an industry with overrides applied.
    pub fn benchmark_for(&self, industry: Industry) -> EngineResult<KgCo2e> {
        let default = industry.benchmark_kg().value();
        let name = format!("benchmarks.{}", industry.to_string().to_lowercase());
        Ok(KgCo2e::new(merge(
            default,
            self.benchmarks.for_industry(industry),
            &name,
        )?))
    }
}
