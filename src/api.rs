//! Public API surface for the engine.
//!
//! This file consolidates the DTO types consumed and produced by the
//! services. All types derive Serialize/Deserialize for JSON serialization.

pub use crate::services::benchmark::BenchmarkComparison;
pub use crate::services::benchmark::BenchmarkStatus;
pub use crate::services::benchmark::Rating;
pub use crate::services::footprint::ActivityInput;
pub use crate::services::footprint::EmissionsResult;
pub use crate::services::footprint::ScopeBreakdown;
pub use crate::services::footprint::ScopeSummary;
pub use crate::services::leaderboard::CompanyRanking;
pub use crate::services::leaderboard::LeaderboardEntry;
pub use crate::services::points::GreenPointContext;
pub use crate::services::recommendations::Priority;
pub use crate::services::recommendations::Recommendation;

pub use crate::models::{Category, EmissionFactorTable, Industry, KgCo2e, Scope, ScopeInfo};

use serde::{Deserialize, Serialize};

/// Company identifier (upstream database primary key).
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct CompanyId(pub i64);

impl CompanyId {
    pub fn new(value: i64) -> Self {
        CompanyId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for CompanyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<CompanyId> for i64 {
    fn from(id: CompanyId) -> Self {
        id.0
    }
}
