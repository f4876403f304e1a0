pub mod planner;
pub mod recommendations;

pub use planner::DayPlanner;
pub use recommendations::RecommendationService;
