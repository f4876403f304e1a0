mod client;
pub mod types;

pub use client::TasteClient;
pub use types::{CategorySpec, EntityCategory, RecommendationEntity};
