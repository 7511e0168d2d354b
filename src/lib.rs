//! # GreenTrace Rust Engine
//!
//! Corporate carbon-footprint calculation and scoring engine.
//!
//! This crate provides the computation core of the GreenTrace platform:
//! converting raw activity quantities into CO₂-equivalent emissions, scoring
//! companies with green points, generating reduction recommendations, and
//! comparing footprints against industry benchmarks. The HTTP layer, session
//! handling and persistence live in external collaborators; this crate is
//! pure data in, pure data out.
//!
//! ## Features
//!
//! - **Footprint Calculation**: emission-factor lookup, scope 1/2/3
//!   classification and aggregation, per-scope percentages
//! - **Green Points**: additive award rules for first calculations,
//!   below-benchmark footprints and month-over-month improvement
//! - **Recommendations**: prioritized reduction suggestions derived from the
//!   emissions breakdown
//! - **Benchmarking**: industry-average comparison with an A–F rating
//! - **Leaderboard**: green-point rankings and industry averages
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Consolidated public DTO surface
//! - [`models`]: Categories, scopes, quantities, emission factors, benchmarks
//! - [`services`]: Pure computation services
//! - [`config`]: TOML configuration for factor and benchmark overrides
//!
//! ## Determinism
//!
//! Every operation is a synchronous, terminating computation over in-memory
//! values and constant lookup tables. There is no shared mutable state, so
//! concurrent callers need no coordination, and batch recalculation is
//! embarrassingly parallel.

pub mod api;

pub mod config;
pub mod error;
pub mod models;

pub mod services;
