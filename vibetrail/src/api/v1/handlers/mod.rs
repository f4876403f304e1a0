pub mod ecosystem;
pub mod health;
pub mod plan;
pub mod recommend;

pub use health::health_check;
