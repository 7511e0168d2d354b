//! Footprint comparison against an industry benchmark.

use crate::error::{EngineError, EngineResult};
use crate::models::KgCo2e;
use serde::{Deserialize, Serialize};

/// Whether the footprint sits below, above, or exactly at the benchmark.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BenchmarkStatus {
    Below,
    Above,
    Equal,
}

/// Letter rating derived from the percentage difference to the benchmark.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rating {
    A,
    B,
    C,
    D,
    F,
}

impl Rating {
    /// First-match thresholds on the percentage difference, boundaries
    /// inclusive: ≤ −30 → A, ≤ −15 → B, ≤ 0 → C, ≤ 20 → D, else F.
    pub fn from_percentage_diff(percentage_diff: f64) -> Self {
        if percentage_diff <= -30.0 {
            Rating::A
        } else if percentage_diff <= -15.0 {
            Rating::B
        } else if percentage_diff <= 0.0 {
            Rating::C
        } else if percentage_diff <= 20.0 {
            Rating::D
        } else {
            Rating::F
        }
    }
}

/// Result of comparing a footprint against an industry benchmark.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkComparison {
    pub footprint: KgCo2e,
    pub benchmark: KgCo2e,
    pub difference: KgCo2e,
    pub percentage_diff: f64,
    pub status: BenchmarkStatus,
    pub rating: Rating,
}

/// Compare a footprint against an industry-average benchmark.
///
/// A zero benchmark cannot be expressed as a percentage difference and fails
/// fast with [`EngineError::InvalidArgument`].
pub fn compare_to_benchmark(
    footprint: KgCo2e,
    benchmark: KgCo2e,
) -> EngineResult<BenchmarkComparison> {
    if benchmark.value() == 0.0 {
        return Err(EngineError::invalid_argument(
            "benchmark must be nonzero for percentage comparison",
        ));
    }

    let difference = footprint.value() - benchmark.value();
    let percentage_diff = difference / benchmark.value() * 100.0;

    let status = if difference < 0.0 {
        BenchmarkStatus::Below
    } else if difference > 0.0 {
        BenchmarkStatus::Above
    } else {
        BenchmarkStatus::Equal
    };

    Ok(BenchmarkComparison {
        footprint,
        benchmark,
        difference: KgCo2e::new(difference),
        percentage_diff,
        status,
        rating: Rating::from_percentage_diff(percentage_diff),
    })
}
