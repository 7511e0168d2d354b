pub mod benchmarks;
pub mod category;
pub mod factors;
pub mod quantity;

pub use benchmarks::Industry;
pub use category::{Category, Scope, ScopeInfo};
pub use factors::EmissionFactorTable;
pub use quantity::{KgCo2e, KG_TO_TONS};
