//! Green-point awards for calculated footprints.

use crate::models::KgCo2e;
use log::debug;
use serde::{Deserialize, Serialize};

/// Flat bonus for a company's first-ever calculation.
pub const FIRST_CALCULATION_BONUS: u32 = 500;

/// Points per 1% below the industry average.
pub const BELOW_AVERAGE_MULTIPLIER: f64 = 10.0;

/// Points per 1% improvement over the previous period.
pub const IMPROVEMENT_MULTIPLIER: f64 = 50.0;

/// Everything the award rules need to score one calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GreenPointContext {
    pub current_footprint: KgCo2e,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub previous_footprint: Option<KgCo2e>,
    pub industry_average: KgCo2e,
    #[serde(default)]
    pub is_first_calculation: bool,
}

/// Award green points for one calculation.
///
/// Three additive rules, each floored to an integer independently:
/// the first-calculation bonus, 10 points per 1% strictly below the industry
/// average, and 50 points per 1% strictly improved over the previous period.
/// Rules with a zero divisor (zero benchmark, zero/absent previous footprint)
/// contribute nothing. The result is never negative and never increases when
/// the current footprint grows.
pub fn award_points(ctx: &GreenPointContext) -> u32 {
    let mut points: u32 = 0;

    if ctx.is_first_calculation {
        points += FIRST_CALCULATION_BONUS;
    }

    let current = ctx.current_footprint.value();
    let average = ctx.industry_average.value();
    if average > 0.0 && current < average {
        let savings_percent = (average - current) / average * 100.0;
        points += (savings_percent * BELOW_AVERAGE_MULTIPLIER).floor() as u32;
    }

    if let Some(previous) = ctx.previous_footprint {
        let previous = previous.value();
        if previous > 0.0 && current < previous {
            let improvement_percent = (previous - current) / previous * 100.0;
            points += (improvement_percent * IMPROVEMENT_MULTIPLIER).floor() as u32;
        }
    }

    debug!(
        "awarded {} points (current={} kg, average={} kg)",
        points, current, average
    );
    points
}
