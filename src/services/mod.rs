//! Service layer for the pure computation pipeline.
//!
//! Each service is a deterministic, synchronous function over plain data:
//! activity inputs flow into the footprint calculator, and its breakdown
//! feeds the points awarder, recommendation generator and benchmark
//! comparator through ordinary function composition.

pub mod benchmark;

pub mod footprint;

pub mod leaderboard;

pub mod points;

pub mod recommendations;

pub use benchmark::compare_to_benchmark;
pub use footprint::{calculate_footprint, calculate_footprint_with_table};
pub use leaderboard::{compute_rankings, industry_average};
pub use points::award_points;
pub use recommendations::recommend;
