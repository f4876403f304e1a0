pub mod ecosystem;
pub mod plan;
pub mod recommend;

pub use ecosystem::{EcosystemRequest, EcosystemResponse};
pub use plan::{PlanRequest, PlanResponse};
pub use recommend::{RecommendRequest, RecommendResponse};
